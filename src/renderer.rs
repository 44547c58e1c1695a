//! Drives the integrator over a whole image and encodes the result.

use crate::integrator::ray_color;
use crate::rtnextweek::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image must be at least 1x1 pixels, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("image of {width}x{height} exceeds the {} pixel limit", MAX_PIXELS)]
    TooLarge { width: u32, height: u32 },

    #[error("samples per pixel must be at least 1")]
    NoSamples,

    #[error("max depth must be at least 1")]
    NoDepth,

    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Upper bound on `width * height` accepted by [`render`].
pub const MAX_PIXELS: u64 = 1 << 28;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    /// Color picked up by rays that leave the scene.
    pub background: Color,
    /// Base seed; each scanline derives its own generator from it.
    pub seed: u64,
    pub show_progress: bool,
}

impl RenderSettings {
    fn validate(&self) -> RenderResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if u64::from(self.image_width) * u64::from(self.image_height) > MAX_PIXELS {
            return Err(RenderError::TooLarge {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::NoSamples);
        }
        if self.max_depth == 0 {
            return Err(RenderError::NoDepth);
        }
        Ok(())
    }
}

/// Averaged linear colors, stored row-major from the top scanline down.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Image {
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

fn row_rng(seed: u64, row: u32) -> StdRng {
    StdRng::seed_from_u64(seed ^ ((u64::from(row) << 32) | u64::from(row)))
}

/// Render every pixel of `world` as seen by `camera`.
///
/// Scanlines run in parallel, each with its own generator, so a fixed seed
/// gives the same image whatever the thread count.
pub fn render<W: Hittable + ?Sized>(
    settings: &RenderSettings,
    camera: &Camera,
    world: &W,
) -> RenderResult<Image> {
    settings.validate()?;
    let RenderSettings {
        image_width: width,
        image_height: height,
        samples_per_pixel,
        max_depth,
        background,
        seed,
        ..
    } = *settings;

    match world.bounding_box(0.0, 1.0) {
        Some(bbox) => debug!("scene bounds {} .. {}", bbox.minimum, bbox.maximum),
        None => warn!("scene has no finite bounding box"),
    }
    info!(
        "rendering {width}x{height}, {samples_per_pixel} samples/pixel, max depth {max_depth}"
    );

    let progress = if settings.show_progress {
        let bar = ProgressBar::new(u64::from(height));
        let template = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} scanlines";
        bar.set_style(
            ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let scale = 1.0 / f64::from(samples_per_pixel);
    let u_span = f64::from(width.saturating_sub(1).max(1));
    let v_span = f64::from(height.saturating_sub(1).max(1));

    let rows: Vec<Vec<Color>> = (0..height)
        .into_par_iter()
        .map(|row| {
            let mut rng = row_rng(seed, row);
            let j = height - 1 - row;
            let line: Vec<Color> = (0..width)
                .map(|i| {
                    let mut pixel_color = Color::zero();
                    for _ in 0..samples_per_pixel {
                        let s = (f64::from(i) + random_f64(&mut rng)) / u_span;
                        let t = (f64::from(j) + random_f64(&mut rng)) / v_span;
                        let r = camera.get_ray(s, t, &mut rng);
                        pixel_color += ray_color(&r, background, world, max_depth, &mut rng);
                    }
                    pixel_color * scale
                })
                .collect();
            progress.inc(1);
            line
        })
        .collect();

    progress.finish_and_clear();
    info!("render finished in {:.2?}", start.elapsed());

    Ok(Image {
        width,
        height,
        pixels: rows.into_iter().flatten().collect(),
    })
}

/// Plain-text PPM (P3), top scanline first.
pub fn write_ppm<O: Write>(out: &mut O, image: &Image) -> RenderResult<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;
    for pixel in &image.pixels {
        write_color(out, *pixel)?;
    }
    out.flush()?;
    Ok(())
}
