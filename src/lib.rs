//! Offline Monte Carlo path tracer: spheres, moving spheres, rectangles and
//! boxes with textured, metallic, glass and emissive materials, rendered
//! through a thin-lens camera with motion blur.

pub mod aabb;
pub mod aarect;
pub mod camera;
pub mod color;
pub mod cuboid;
pub mod hittable;
pub mod hittable_list;
pub mod instance;
pub mod integrator;
pub mod interval;
pub mod material;
pub mod moving_sphere;
pub mod perlin;
pub mod ray;
pub mod renderer;
pub mod rtnextweek;
pub mod scenes;
pub mod sphere;
pub mod texture;
pub mod vec3;

pub use integrator::ray_color;
pub use renderer::{Image, RenderError, RenderSettings, render, write_ppm};
pub use scenes::{Scene, SceneKind};
