//! The polarized Rayleigh fallback warning is logged once per process. This
//! runs in its own test binary so no other test triggers the warning first.

use log::{Level, LevelFilter, Log, Metadata, Record};
use pbrt_core::paramset::*;
use pbrt_core::spectrum::*;
use phases::*;
use std::convert::TryFrom;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts warnings logged by the phase function models.
struct WarnCounter {
    warnings: AtomicUsize,
}

impl Log for WarnCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn && record.target().starts_with("phases") {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static COUNTER: WarnCounter = WarnCounter {
    warnings: AtomicUsize::new(0),
};

#[test]
fn polarized_warning_is_logged_once() {
    log::set_logger(&COUNTER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let _rgb = RayleighPhaseFunction::<ScalarRgb>::new("");
    let _packet_rgb = RayleighPhaseFunction::<PacketRgb<4>>::new("");
    assert_eq!(COUNTER.warnings.load(Ordering::SeqCst), 0);

    let _first = RayleighPhaseFunction::<ScalarPolarized>::new("");
    assert_eq!(COUNTER.warnings.load(Ordering::SeqCst), 1);

    let _second = RayleighPhaseFunction::<ScalarPolarized>::new("");
    let _packet = RayleighPhaseFunction::<PacketPolarized<4>>::new("");
    let _simd = RayleighPhaseFunction::<WidePolarized>::new("");
    let _parsed = RayleighPhaseFunction::<ScalarPolarized>::try_from(&ParamSet::new()).unwrap();
    assert_eq!(COUNTER.warnings.load(Ordering::SeqCst), 1);
}
