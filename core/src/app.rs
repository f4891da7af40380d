//! Command line options

use clap::Parser;
use crate::pbrt::Float;

lazy_static! {
    /// The global application options.
    pub static ref OPTIONS: Options = Options::parse();
}

/// Validates phase function models by integrating and sampling them.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Registered phase function type.
    #[arg(long = "type", short = 't', value_name = "NAME", default_value = "hg")]
    pub phase_type: String,

    /// Asymmetry parameter passed to the model as `g`.
    #[arg(long, short = 'g', value_name = "FLOAT", allow_negative_numbers = true)]
    pub g: Option<Float>,

    /// Number of samples drawn by the sampling checks.
    #[arg(long, short = 'n', value_name = "NUM", default_value_t = 100_000)]
    pub samples: usize,

    /// Number of cos theta bins used by the chi-square test.
    #[arg(long, short = 'b', value_name = "NUM", default_value_t = 20)]
    pub bins: usize,

    /// Seed for the random number generator.
    #[arg(long, short = 's', value_name = "NUM", default_value_t = 0)]
    pub seed: u64,

    /// Numeric variant used to instantiate the model.
    #[arg(
        long,
        short = 'v',
        value_name = "VARIANT",
        default_value = "scalar_rgb",
        value_parser = ["scalar_mono", "scalar_rgb", "scalar_spectral", "scalar_polarized", "packet_rgb", "wide_rgb"]
    )]
    pub variant: String,

    /// Suppress all text output other than error messages.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Returns the global application options.
pub fn options() -> &'static Options {
    &OPTIONS
}
