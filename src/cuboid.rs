use crate::rtnextweek::*;

/// Rectangular prism made of six axis-aligned faces.
pub struct Cuboid {
    bbox: Aabb,
    sides: HittableList,
}

impl Cuboid {
    /// Box spanning the opposite corners `p0` and `p1`.
    pub fn new(p0: Point3, p1: Point3, mat: Arc<dyn Material>) -> Self {
        let bbox = Aabb::new(p0, p1);
        let (lo, hi) = (bbox.minimum, bbox.maximum);
        let (x, y, z) = ((lo.x, hi.x), (lo.y, hi.y), (lo.z, hi.z));

        let mut sides = HittableList::new();
        sides.add(Arc::new(AaRect::xy(x, y, hi.z, Arc::clone(&mat))));
        sides.add(Arc::new(AaRect::xy(x, y, lo.z, Arc::clone(&mat)).flipped()));
        sides.add(Arc::new(AaRect::xz(x, z, hi.y, Arc::clone(&mat))));
        sides.add(Arc::new(AaRect::xz(x, z, lo.y, Arc::clone(&mat)).flipped()));
        sides.add(Arc::new(AaRect::yz(y, z, hi.x, Arc::clone(&mat))));
        sides.add(Arc::new(AaRect::yz(y, z, lo.x, mat).flipped()));

        Self { bbox, sides }
    }
}

impl Hittable for Cuboid {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if !self.bbox.pad(0.0002).hit(r, ray_t) {
            return None;
        }
        self.sides.hit(r, ray_t)
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<Aabb> {
        Some(self.bbox)
    }
}
