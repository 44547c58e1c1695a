pub use crate::aabb::Aabb;
pub use crate::aarect::{AaRect, Plane};
pub use crate::camera::{Camera, CameraSettings};
pub use crate::color::{Color, write_color};
pub use crate::cuboid::Cuboid;
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::hittable_list::HittableList;
pub use crate::instance::{Axis, Rotate, Translate};
pub use crate::interval::Interval;
pub use crate::material::{Dielectric, DiffuseLight, Lambertian, Material, Metal};
pub use crate::moving_sphere::MovingSphere;
pub use crate::ray::Ray;
pub use crate::sphere::Sphere;
pub use crate::texture::{CheckerTexture, NoiseTexture, SolidColor, Texture};
pub use crate::vec3::{Point3, Vec3};

pub use rand::{Rng, RngCore};
pub use std::sync::Arc;

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Uniform sample in [0, 1).
#[inline]
pub fn random_f64(rng: &mut dyn RngCore) -> f64 {
    rng.random::<f64>()
}

/// Uniform sample in [min, max).
#[inline]
pub fn random_f64_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}
