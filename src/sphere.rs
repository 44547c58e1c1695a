use crate::rtnextweek::*;

pub struct Sphere {
    center: Point3,
    radius: f64,
    mat: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, mat: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            mat,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        hit_sphere(self.center, self.radius, &self.mat, r, ray_t)
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<Aabb> {
        Some(sphere_box(self.center, self.radius))
    }
}

/// Solve `|O + tD - C|^2 = r^2`, keeping the nearer root inside `ray_t`.
pub(crate) fn hit_sphere(
    center: Point3,
    radius: f64,
    mat: &Arc<dyn Material>,
    r: &Ray,
    ray_t: Interval,
) -> Option<HitRecord> {
    let oc = r.orig - center;
    let a = r.dir.length_squared();
    let half_b = oc.dot(r.dir);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrtd = discriminant.sqrt();

    let mut root = (-half_b - sqrtd) / a;
    if !ray_t.surrounds(root) {
        root = (-half_b + sqrtd) / a;
        if !ray_t.surrounds(root) {
            return None;
        }
    }

    let outward_normal = (r.at(root) - center) / radius;
    Some(HitRecord::new(
        r,
        root,
        outward_normal,
        sphere_uv(&outward_normal),
        Arc::clone(mat),
    ))
}

pub(crate) fn sphere_box(center: Point3, radius: f64) -> Aabb {
    let extent = Vec3::new(radius, radius, radius);
    Aabb::new(center - extent, center + extent)
}

/// Latitude/longitude of a point on the unit sphere.
///
/// `u` runs around the Y axis starting from X=-1, `v` from Y=-1 up to Y=+1:
/// (1,0,0) maps to (0.5,0.5), (0,1,0) to (0.5,1.0), (0,0,-1) to (0.75,0.5).
pub(crate) fn sphere_uv(p: &Point3) -> (f64, f64) {
    let theta = (-p.y).acos();
    let phi = (-p.z).atan2(p.x) + PI;
    (phi / (2.0 * PI), theta / PI)
}
