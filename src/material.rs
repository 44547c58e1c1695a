use crate::rtnextweek::*;

pub trait Material: Send + Sync {
    /// Outgoing ray and per-channel attenuation, or `None` when the ray is
    /// absorbed (or the material only emits).
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)>;

    fn emitted(&self, _u: f64, _v: f64, _p: &Point3) -> Color {
        Color::zero()
    }
}

/// Diffuse reflector backed by a texture.
pub struct Lambertian {
    albedo: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }

    pub fn from_color(albedo: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(albedo)))
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)> {
        let mut scatter_direction = rec.normal + Vec3::random_unit_vector(rng);
        if scatter_direction.near_zero() {
            scatter_direction = rec.normal;
        }
        let scattered = Ray::new(rec.p, scatter_direction, r_in.time);
        let attenuation = self.albedo.value(rec.u, rec.v, &rec.p);
        Some((scattered, attenuation))
    }
}

pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// `fuzz` is clamped to [0, 1].
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)> {
        let reflected = Vec3::reflect(&r_in.dir.normalized(), &rec.normal);
        let direction = reflected + self.fuzz * Vec3::random_in_unit_sphere(rng);
        if direction.dot(rec.normal) <= 0.0 {
            return None;
        }
        Some((Ray::new(rec.p, direction, r_in.time), self.albedo))
    }
}

/// Clear refractive material such as glass or water.
pub struct Dielectric {
    ir: f64,
}

impl Dielectric {
    pub fn new(index_of_refraction: f64) -> Self {
        Self {
            ir: index_of_refraction,
        }
    }

    /// Schlick's approximation of Fresnel reflectance.
    fn reflectance(cosine: f64, ref_idx: f64) -> f64 {
        let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)> {
        let refraction_ratio = if rec.front_face { 1.0 / self.ir } else { self.ir };

        let unit_direction = r_in.dir.normalized();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction = if cannot_refract
            || Self::reflectance(cos_theta, refraction_ratio) > random_f64(rng)
        {
            Vec3::reflect(&unit_direction, &rec.normal)
        } else {
            Vec3::refract(&unit_direction, &rec.normal, refraction_ratio)
        };

        Some((Ray::new(rec.p, direction, r_in.time), Color::one()))
    }
}

/// Two-sided emitter; never scatters.
pub struct DiffuseLight {
    emit: Arc<dyn Texture>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<dyn Texture>) -> Self {
        Self { emit }
    }

    pub fn from_color(emit: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(emit)))
    }
}

impl Material for DiffuseLight {
    fn scatter(
        &self,
        _r_in: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)> {
        None
    }

    fn emitted(&self, u: f64, v: f64, p: &Point3) -> Color {
        self.emit.value(u, v, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hit_on_floor(r: &Ray, mat: Arc<dyn Material>) -> HitRecord {
        // Floor at y = 0 facing up.
        let t = -r.orig.y / r.dir.y;
        HitRecord::new(r, t, Vec3::new(0.0, 1.0, 0.0), (0.5, 0.5), mat)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_lambertian_scatters_above_surface() {
        let mut rng = StdRng::seed_from_u64(5);
        let mat: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.1, 0.2, 0.3)));
        let r = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.3, -1.0, 0.0), 0.25);
        let rec = hit_on_floor(&r, Arc::clone(&mat));

        for _ in 0..100 {
            let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
            assert_eq!(attenuation, Color::new(0.1, 0.2, 0.3));
            assert!(scattered.dir.dot(rec.normal) >= 0.0);
            assert!(!scattered.dir.near_zero());
            assert_eq!(scattered.time, 0.25);
            assert_eq!(scattered.orig, rec.p);
        }
    }

    /// Replays a fixed list of raw draws.
    struct ScriptedRng {
        draws: Vec<u64>,
        next: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let value = self.draws[self.next % self.draws.len()];
            self.next += 1;
            value
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn test_lambertian_degenerate_direction_falls_back_to_normal() {
        // f64 samples keep the top 53 bits: 1 << 63 maps to 0.5 (component 0)
        // and 1 << 11 to 2^-53 (component just above -1). The unit-sphere
        // sample (0, -1 + 2^-52, 0) normalizes to exactly (0, -1, 0).
        let mut rng = ScriptedRng {
            draws: vec![1 << 63, 1 << 11, 1 << 63],
            next: 0,
        };
        assert_eq!(Vec3::random_unit_vector(&mut rng), Vec3::new(0.0, -1.0, 0.0));

        rng.next = 0;
        let mat: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::one()));
        let r = Ray::without_time(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = hit_on_floor(&r, Arc::clone(&mat));

        let (scattered, _) = mat.scatter(&r, &rec, &mut rng).unwrap();
        assert_eq!(scattered.dir, rec.normal);
    }

    #[test]
    fn test_lambertian_uses_texture_at_hit() {
        let mut rng = StdRng::seed_from_u64(6);
        let checker = Arc::new(CheckerTexture::from_colors(Color::zero(), Color::one()));
        let mat: Arc<dyn Material> = Arc::new(Lambertian::new(checker));
        let r = Ray::without_time(Point3::new(0.1, 1.0, 0.1), Vec3::new(0.0, -1.0, 0.0));
        let rec = hit_on_floor(&r, Arc::clone(&mat));
        // sin(0) on the floor makes the product zero, which picks the odd texture.
        let (_, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
        assert_eq!(attenuation, Color::one());
    }

    #[test]
    fn test_metal_without_fuzz_mirrors() {
        let mut rng = StdRng::seed_from_u64(7);
        let mat: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.0));
        let r = Ray::without_time(Point3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let rec = hit_on_floor(&r, Arc::clone(&mat));

        let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
        let expected = Vec3::reflect(&r.dir.normalized(), &rec.normal);
        assert!(close(scattered.dir, expected));
        assert!(close(scattered.dir, Vec3::new(1.0, 1.0, 0.0).normalized()));
        assert_eq!(attenuation, Color::new(0.8, 0.8, 0.8));
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(Metal::new(Color::one(), 3.0).fuzz, 1.0);
        assert_eq!(Metal::new(Color::one(), -1.0).fuzz, 0.0);
    }

    #[test]
    fn test_metal_absorbs_grazing_fuzzed_rays() {
        let mut rng = StdRng::seed_from_u64(8);
        let mat: Arc<dyn Material> = Arc::new(Metal::new(Color::one(), 1.0));
        // Nearly tangent incidence; heavy fuzz pushes some reflections below the surface.
        let r = Ray::without_time(Point3::new(-100.0, 1.0, 0.0), Vec3::new(100.0, -1.0, 0.0));
        let rec = hit_on_floor(&r, Arc::clone(&mat));

        let mut absorbed = 0;
        for _ in 0..200 {
            match mat.scatter(&r, &rec, &mut rng) {
                Some((scattered, _)) => assert!(scattered.dir.dot(rec.normal) > 0.0),
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
    }

    #[test]
    fn test_dielectric_is_colorless_and_always_scatters() {
        let mut rng = StdRng::seed_from_u64(9);
        let mat: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
        let r = Ray::without_time(Point3::new(-0.5, 1.0, 0.0), Vec3::new(0.5, -1.0, 0.0));
        let rec = hit_on_floor(&r, Arc::clone(&mat));

        let mut refracted = 0;
        for _ in 0..200 {
            let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
            assert_eq!(attenuation, Color::one());
            if scattered.dir.y < 0.0 {
                refracted += 1;
            }
        }
        // Schlick reflectance is small at this angle, so most rays pass through.
        assert!(refracted > 150);
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let mut rng = StdRng::seed_from_u64(10);
        let mat: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
        // Leaving the glass at a shallow angle from below the floor.
        let r = Ray::without_time(Point3::new(-3.0, -1.0, 0.0), Vec3::new(3.0, 1.0, 0.0));
        let rec = hit_on_floor(&r, Arc::clone(&mat));
        assert!(!rec.front_face);

        for _ in 0..50 {
            let (scattered, _) = mat.scatter(&r, &rec, &mut rng).unwrap();
            let expected = Vec3::reflect(&r.dir.normalized(), &rec.normal);
            assert!(close(scattered.dir, expected));
        }
    }

    #[test]
    fn test_diffuse_light_emits_without_scattering() {
        let mut rng = StdRng::seed_from_u64(12);
        let mat: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::new(4.0, 4.0, 4.0)));
        let from_above = Ray::without_time(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let from_below = Ray::without_time(Point3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        for r in [from_above, from_below] {
            let rec = hit_on_floor(&r, Arc::clone(&mat));
            assert!(mat.scatter(&r, &rec, &mut rng).is_none());
            assert_eq!(mat.emitted(rec.u, rec.v, &rec.p), Color::new(4.0, 4.0, 4.0));
        }
    }

    #[test]
    fn test_non_emitters_are_dark() {
        let p = Point3::zero();
        assert_eq!(Lambertian::from_color(Color::one()).emitted(0.0, 0.0, &p), Color::zero());
        assert_eq!(Metal::new(Color::one(), 0.0).emitted(0.0, 0.0, &p), Color::zero());
        assert_eq!(Dielectric::new(1.5).emitted(0.0, 0.0, &p), Color::zero());
    }
}
