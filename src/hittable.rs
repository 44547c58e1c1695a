use crate::rtnextweek::*;

#[derive(Clone)]
pub struct HitRecord {
    pub p: Point3,
    /// Always faces against the incoming ray.
    pub normal: Vec3,
    pub t: f64,
    pub u: f64,
    pub v: f64,
    pub mat: Arc<dyn Material>,
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record for a hit at parameter `t`, orienting
    /// `outward_normal` against `r`.
    pub fn new(
        r: &Ray,
        t: f64,
        outward_normal: Vec3,
        (u, v): (f64, f64),
        mat: Arc<dyn Material>,
    ) -> Self {
        let mut rec = Self {
            p: r.at(t),
            normal: outward_normal,
            t,
            u,
            v,
            mat,
            front_face: true,
        };
        rec.set_face_normal(r, outward_normal);
        rec
    }

    #[inline]
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = r.dir.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;

    /// Box enclosing the surface over `[time0, time1]`, or `None` when
    /// the surface is unbounded.
    fn bounding_box(&self, time0: f64, time1: f64) -> Option<Aabb>;
}
