mod cli;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ray_tracing_next_week::rtnextweek::Camera;
use ray_tracing_next_week::{RenderSettings, Scene, SceneKind, render, write_ppm};
use std::fs::File;
use std::io::{self, BufWriter};

use crate::cli::Args;
use crate::logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let kind = SceneKind::from(args.scene);
    let mut scene_rng = StdRng::seed_from_u64(args.seed);
    let Scene {
        world,
        camera,
        background,
    } = Scene::build(kind, args.aspect_ratio, &mut scene_rng);

    let image_height = ((f64::from(args.width) / camera.aspect_ratio).round() as u32).max(1);
    info!("scene {kind:?} with {} objects", world.len());

    let settings = RenderSettings {
        image_width: args.width,
        image_height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        background,
        seed: args.seed,
        show_progress: !args.quiet,
    };
    let image = render(&settings, &Camera::new(camera), &world).context("render failed")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_ppm(&mut BufWriter::new(file), &image)?;
            info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout().lock();
            write_ppm(&mut BufWriter::new(stdout), &image)?;
        }
    }

    Ok(())
}
