use crate::rtnextweek::*;

/// Orientation of an axis-aligned rectangle, named by the two axes it spans.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Plane {
    /// Constant z.
    Xy,
    /// Constant y.
    Xz,
    /// Constant x.
    Yz,
}

impl Plane {
    /// (first in-plane axis, second in-plane axis, constant axis)
    fn axes(self) -> (usize, usize, usize) {
        match self {
            Plane::Xy => (0, 1, 2),
            Plane::Xz => (0, 2, 1),
            Plane::Yz => (1, 2, 0),
        }
    }
}

/// Rectangle `[a0, a1] x [b0, b1]` lying in the plane `axis = k`.
pub struct AaRect {
    plane: Plane,
    a0: f64,
    a1: f64,
    b0: f64,
    b1: f64,
    k: f64,
    /// Sign of the outward normal along the constant axis.
    facing: f64,
    mat: Arc<dyn Material>,
}

impl AaRect {
    pub fn new(
        plane: Plane,
        (a0, a1): (f64, f64),
        (b0, b1): (f64, f64),
        k: f64,
        mat: Arc<dyn Material>,
    ) -> Self {
        Self {
            plane,
            a0,
            a1,
            b0,
            b1,
            k,
            facing: 1.0,
            mat,
        }
    }

    /// Same rectangle with its outward normal pointing down the constant axis.
    pub fn flipped(mut self) -> Self {
        self.facing = -self.facing;
        self
    }

    pub fn xy(x: (f64, f64), y: (f64, f64), k: f64, mat: Arc<dyn Material>) -> Self {
        Self::new(Plane::Xy, x, y, k, mat)
    }

    pub fn xz(x: (f64, f64), z: (f64, f64), k: f64, mat: Arc<dyn Material>) -> Self {
        Self::new(Plane::Xz, x, z, k, mat)
    }

    pub fn yz(y: (f64, f64), z: (f64, f64), k: f64, mat: Arc<dyn Material>) -> Self {
        Self::new(Plane::Yz, y, z, k, mat)
    }
}

impl Hittable for AaRect {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let (a, b, k) = self.plane.axes();

        let t = (self.k - r.orig[k]) / r.dir[k];
        if !ray_t.surrounds(t) {
            return None;
        }

        let pa = r.orig[a] + t * r.dir[a];
        let pb = r.orig[b] + t * r.dir[b];
        if pa < self.a0 || pa > self.a1 || pb < self.b0 || pb > self.b1 {
            return None;
        }

        let mut outward_normal = Vec3::zero();
        outward_normal[k] = self.facing;
        let uv = (
            (pa - self.a0) / (self.a1 - self.a0),
            (pb - self.b0) / (self.b1 - self.b0),
        );
        Some(HitRecord::new(r, t, outward_normal, uv, Arc::clone(&self.mat)))
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<Aabb> {
        let (a, b, k) = self.plane.axes();
        let mut lo = Point3::zero();
        let mut hi = Point3::zero();
        lo[a] = self.a0;
        hi[a] = self.a1;
        lo[b] = self.b0;
        hi[b] = self.b1;
        lo[k] = self.k;
        hi[k] = self.k;
        Some(Aabb::new(lo, hi).pad(0.0002))
    }
}
