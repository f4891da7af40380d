//! Medium Interactions

use crate::geometry::*;
use crate::lanes::*;
use crate::pbrt::*;
use std::fmt;

/// MediumInteraction represents a scattering event inside a participating
/// medium. It is produced by the medium and is read-only to phase functions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MediumInteraction<T> {
    /// The point of interaction.
    pub p: Point3<T>,

    /// The negative ray direction, pointing away from the interaction towards
    /// where the light came from.
    pub wi: Vector3<T>,

    /// Time when interaction occurred.
    pub time: T,

    /// Shading frame whose z-axis is `wi`.
    pub sh_frame: Frame<T>,
}

/// Medium interaction containing `Float` values.
pub type MediumInteractionf = MediumInteraction<Float>;

impl<T: Real> MediumInteraction<T> {
    /// Create a new medium interaction.
    ///
    /// * `p`    - The point of interaction.
    /// * `wi`   - The unit length negative ray direction.
    /// * `time` - Time when interaction occurred.
    pub fn new(p: Point3<T>, wi: Vector3<T>, time: T) -> Self {
        Self {
            p,
            wi,
            time,
            sh_frame: Frame::from_normal(&wi),
        }
    }

    /// Converts a direction from the local shading frame into world space.
    ///
    /// * `v` - Local direction.
    pub fn to_world(&self, v: &Vector3<T>) -> Vector3<T> {
        self.sh_frame.to_world(v)
    }

    /// Converts a world space direction into the local shading frame.
    ///
    /// * `v` - World space direction.
    pub fn to_local(&self, v: &Vector3<T>) -> Vector3<T> {
        self.sh_frame.to_local(v)
    }
}

impl<T: Gather> Gather for MediumInteraction<T> {
    type Lane = MediumInteraction<T::Lane>;

    fn extract(&self, lane: usize) -> Self::Lane {
        MediumInteraction {
            p: self.p.extract(lane),
            wi: self.wi.extract(lane),
            time: self.time.extract(lane),
            sh_frame: self.sh_frame.extract(lane),
        }
    }

    fn insert(&mut self, lane: usize, value: Self::Lane) {
        self.p.insert(lane, value.p);
        self.wi.insert(lane, value.wi);
        self.time.insert(lane, value.time);
        self.sh_frame.insert(lane, value.sh_frame);
    }
}

impl<T: fmt::Display> fmt::Display for MediumInteraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediumInteraction[p={}, wi={}, time={}]", self.p, self.wi, self.time)
    }
}
