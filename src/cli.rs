use clap::{Parser, ValueEnum};
use log::LevelFilter;
use ray_tracing_next_week::SceneKind;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    Random,
    TwoSpheres,
    TwoPerlinSpheres,
    SimpleLight,
    CornellBox,
}

impl From<SceneArg> for SceneKind {
    fn from(scene: SceneArg) -> Self {
        match scene {
            SceneArg::Random => SceneKind::Random,
            SceneArg::TwoSpheres => SceneKind::TwoSpheres,
            SceneArg::TwoPerlinSpheres => SceneKind::TwoPerlinSpheres,
            SceneArg::SimpleLight => SceneKind::SimpleLight,
            SceneArg::CornellBox => SceneKind::CornellBox,
        }
    }
}

/// Accept only finite ratios greater than zero.
fn parse_aspect_ratio(raw: &str) -> Result<f64, String> {
    let ratio: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(format!("aspect ratio must be finite and positive, got {raw}"));
    }
    Ok(ratio)
}

#[derive(Debug, Parser)]
#[command(name = "ray_tracing_next_week")]
#[command(about = "Render a predefined scene to a plain-text PPM image")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "two-perlin-spheres")]
    pub scene: SceneArg,

    /// Image width in pixels; height follows from the aspect ratio
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Width / height ratio (the Cornell box is always square)
    #[arg(long, default_value_t = 16.0 / 9.0, value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f64,

    /// Samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Seed for scene construction and sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
