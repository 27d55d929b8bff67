use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Demo scenes selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneChoice {
    /// Matte center sphere flanked by two metals
    ThreeSpheres,
    /// The non-physical dielectric fixtures side by side
    GlassComparison,
    /// Glass shell built from a nested negative-radius sphere
    HollowGlass,
    /// Two touching spheres filling a 90 degree field of view
    FovPair,
    /// Wide-aperture depth-of-field shot of the glass scene
    Defocus,
    /// Random sphere field around three large feature spheres
    Cover,
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "glimmer")]
#[command(about = "A recursive sphere path tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "400", help = "Image width in pixels")]
    pub width: u32,

    /// Image aspect ratio (width over height)
    #[arg(long, default_value = "1.7777778", help = "Image aspect ratio (width over height)")]
    pub aspect_ratio: f32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces
    #[arg(long, default_value = "50", help = "Maximum number of ray bounces")]
    pub max_depth: u32,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneChoice::Cover, help = "Scene to render")]
    pub scene: SceneChoice,

    /// Output file path (.png for 8-bit PNG, .ppm for plain-text pixel map)
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png or .ppm)")]
    pub output: String,
}
