use crate::rtnextweek::*;

/// Everything a [`Camera`] is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,
    /// Vertical field of view in degrees.
    pub vfov: f64,
    pub aspect_ratio: f64,
    /// Lens diameter; zero gives a pinhole camera.
    pub aperture: f64,
    /// Distance to the plane in perfect focus.
    pub focus_dist: f64,
    /// Shutter open time.
    pub time0: f64,
    /// Shutter close time.
    pub time1: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Point3::zero(),
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            aspect_ratio: 1.0,
            aperture: 0.0,
            focus_dist: 1.0,
            time0: 0.0,
            time1: 1.0,
        }
    }
}

/// Thin-lens camera with a finite shutter interval. Immutable once built.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
    time0: f64,
    time1: f64,
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Self {
        let theta = degrees_to_radians(settings.vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = settings.aspect_ratio * viewport_height;

        let w = (settings.look_from - settings.look_at).normalized();
        let u = settings.vup.cross(w).normalized();
        let v = w.cross(u);

        let origin = settings.look_from;
        let horizontal = settings.focus_dist * viewport_width * u;
        let vertical = settings.focus_dist * viewport_height * v;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - settings.focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
            time0: settings.time0,
            time1: settings.time1,
        }
    }

    /// Ray through image-plane coordinates `(s, t)` in [0,1]^2, with
    /// `(0, 0)` at the lower-left corner. The origin is jittered across
    /// the lens and the time across the shutter interval.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * Vec3::random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        let time = if self.time1 > self.time0 {
            random_f64_range(rng, self.time0, self.time1)
        } else {
            self.time0
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
            time,
        )
    }

    /// Backward-facing basis vector (points from the target to the eye).
    pub fn w(&self) -> Vec3 {
        self.w
    }
}
