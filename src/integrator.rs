use crate::rtnextweek::*;

/// Hits closer than this are treated as self-intersections.
const T_MIN: f64 = 0.001;

/// Radiance carried back along `r`, following at most `depth` bounces.
///
/// Rays that escape the scene pick up `background`. Emission at each hit is
/// added to the attenuated light gathered by the scattered ray.
pub fn ray_color<W: Hittable + ?Sized>(
    r: &Ray,
    background: Color,
    world: &W,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::zero();
    }

    let Some(rec) = world.hit(r, Interval::new(T_MIN, INFINITY)) else {
        return background;
    };

    let emitted = rec.mat.emitted(rec.u, rec.v, &rec.p);
    match rec.mat.scatter(r, &rec, rng) {
        Some((scattered, attenuation)) => {
            emitted + attenuation * ray_color(&scattered, background, world, depth - 1, rng)
        }
        None => emitted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SKY: Color = Color::new(0.7, 0.8, 1.0);

    fn forward() -> Ray {
        Ray::without_time(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0))
    }

    fn single(mat: Arc<dyn Material>) -> HittableList {
        HittableList::with_object(Arc::new(Sphere::new(Point3::zero(), 1.0, mat)))
    }

    #[test]
    fn test_zero_depth_is_black() {
        let mut rng = StdRng::seed_from_u64(1);
        let world = single(Arc::new(DiffuseLight::from_color(Color::one())));
        assert_eq!(ray_color(&forward(), SKY, &world, 0, &mut rng), Color::zero());
        assert_eq!(ray_color(&forward(), SKY, &HittableList::new(), 0, &mut rng), Color::zero());
    }

    #[test]
    fn test_empty_scene_returns_background() {
        let mut rng = StdRng::seed_from_u64(2);
        let world = HittableList::new();
        assert_eq!(ray_color(&forward(), SKY, &world, 50, &mut rng), SKY);
    }

    #[test]
    fn test_light_returns_emission() {
        let mut rng = StdRng::seed_from_u64(3);
        let world = single(Arc::new(DiffuseLight::from_color(Color::new(2.0, 3.0, 4.0))));
        let c = ray_color(&forward(), SKY, &world, 5, &mut rng);
        assert_eq!(c, Color::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_mirror_attenuates_background() {
        let mut rng = StdRng::seed_from_u64(4);
        let world = single(Arc::new(Metal::new(Color::new(0.5, 0.25, 1.0), 0.0)));
        // Head-on reflection heads straight back out into the sky.
        let c = ray_color(&forward(), SKY, &world, 5, &mut rng);
        assert!((c - SKY * Color::new(0.5, 0.25, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_depth_limits_bounces() {
        let mut rng = StdRng::seed_from_u64(5);
        let world = single(Arc::new(Metal::new(Color::one(), 0.0)));
        // One bounce is allowed to hit, but the reflected ray has no budget left.
        let c = ray_color(&forward(), SKY, &world, 1, &mut rng);
        assert_eq!(c, Color::zero());
    }

    #[test]
    fn test_lambertian_on_convex_surface_bounces_once() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(
            Point3::zero(),
            1.0,
            Arc::new(Lambertian::from_color(Color::new(0.5, 0.5, 0.5))),
        )));
        let c = ray_color(&forward(), Color::one(), &world, 50, &mut rng);
        // Diffuse bounces off a convex object escape after the first bounce.
        assert!((c - Color::new(0.5, 0.5, 0.5)).length() < 1e-12);
    }
}
