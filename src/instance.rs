//! Decorators that place a child surface in the world.

use crate::rtnextweek::*;

/// Shifts a child surface by a fixed offset.
pub struct Translate {
    object: Arc<dyn Hittable>,
    offset: Vec3,
}

impl Translate {
    pub fn new(object: Arc<dyn Hittable>, offset: Vec3) -> Self {
        Self { object, offset }
    }
}

impl Hittable for Translate {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let moved = Ray::new(r.orig - self.offset, r.dir, r.time);
        let mut rec = self.object.hit(&moved, ray_t)?;
        rec.p += self.offset;
        Some(rec)
    }

    fn bounding_box(&self, time0: f64, time1: f64) -> Option<Aabb> {
        let child = self.object.bounding_box(time0, time1)?;
        Some(child.translate(self.offset))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The two axes mixed by a rotation about `self`, ordered so that a
    /// positive angle turns the first toward the second.
    fn plane(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (2, 0),
            Axis::Z => (0, 1),
        }
    }
}

/// Rotates a child surface about one coordinate axis through the origin.
pub struct Rotate {
    object: Arc<dyn Hittable>,
    plane: (usize, usize),
    sin_theta: f64,
    cos_theta: f64,
}

impl Rotate {
    pub fn new(object: Arc<dyn Hittable>, axis: Axis, degrees: f64) -> Self {
        let radians = degrees_to_radians(degrees);
        Self {
            object,
            plane: axis.plane(),
            sin_theta: radians.sin(),
            cos_theta: radians.cos(),
        }
    }

    pub fn about_y(object: Arc<dyn Hittable>, degrees: f64) -> Self {
        Self::new(object, Axis::Y, degrees)
    }

    fn turn(&self, v: Vec3, sin_theta: f64) -> Vec3 {
        let (a, b) = self.plane;
        let mut out = v;
        out[a] = self.cos_theta * v[a] - sin_theta * v[b];
        out[b] = sin_theta * v[a] + self.cos_theta * v[b];
        out
    }

    fn to_world(&self, v: Vec3) -> Vec3 {
        self.turn(v, self.sin_theta)
    }

    fn to_local(&self, v: Vec3) -> Vec3 {
        self.turn(v, -self.sin_theta)
    }
}

impl Hittable for Rotate {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let local = Ray::new(self.to_local(r.orig), self.to_local(r.dir), r.time);
        let mut rec = self.object.hit(&local, ray_t)?;

        // Rotation preserves dot products, so front_face still holds.
        rec.p = self.to_world(rec.p);
        rec.normal = self.to_world(rec.normal);
        Some(rec)
    }

    fn bounding_box(&self, time0: f64, time1: f64) -> Option<Aabb> {
        let child = self.object.bounding_box(time0, time1)?;
        let corners = child.corners().map(|c| self.to_world(c));
        let first = Aabb::new(corners[0], corners[0]);
        Some(corners[1..].iter().fold(first, |acc, &c| {
            Aabb::surrounding(&acc, &Aabb::new(c, c))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    fn unit_sphere() -> Arc<dyn Hittable> {
        Arc::new(Sphere::new(
            Point3::zero(),
            1.0,
            Arc::new(Lambertian::from_color(Color::one())),
        ))
    }

    fn slab() -> Arc<dyn Hittable> {
        Arc::new(Cuboid::new(
            Point3::zero(),
            Point3::new(2.0, 1.0, 1.0),
            Arc::new(Lambertian::from_color(Color::one())),
        ))
    }

    #[test]
    fn test_translate_moves_hit_point() {
        let moved = Translate::new(unit_sphere(), Vec3::new(0.0, 0.0, 10.0));
        let r = Ray::without_time(Point3::zero(), Vec3::new(0.0, 0.0, 1.0));
        let rec = moved.hit(&r, Interval::new(0.001, INFINITY)).unwrap();

        assert!((rec.t - 9.0).abs() < 1e-9);
        assert!(close(rec.p, Point3::new(0.0, 0.0, 9.0)));
        assert!(close(rec.normal, Vec3::new(0.0, 0.0, -1.0)));
        assert!(rec.front_face);
    }

    #[test]
    fn test_translate_bounding_box() {
        let moved = Translate::new(unit_sphere(), Vec3::new(1.0, 2.0, 3.0));
        let b = moved.bounding_box(0.0, 1.0).unwrap();
        assert_eq!(b.minimum, Point3::new(0.0, 1.0, 2.0));
        assert_eq!(b.maximum, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rotation_directions() {
        let r = Rotate::new(unit_sphere(), Axis::Y, 90.0);
        assert!(close(r.to_world(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 0.0, -1.0)));
        let r = Rotate::new(unit_sphere(), Axis::Z, 90.0);
        assert!(close(r.to_world(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 1.0, 0.0)));
        let r = Rotate::new(unit_sphere(), Axis::X, 90.0);
        assert!(close(r.to_world(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0)));
        let v = Vec3::new(0.3, -2.0, 5.0);
        assert!(close(r.to_local(r.to_world(v)), v));
    }

    #[test]
    fn test_rotated_box_hit_and_bounds() {
        // The slab spans x in [0,2]; a quarter turn about Y moves it to z in [-2,0].
        let rotated = Rotate::about_y(slab(), 90.0);
        let b = rotated.bounding_box(0.0, 1.0).unwrap();
        assert!((b.minimum.z + 2.0).abs() < 1e-9);
        assert!(b.maximum.z.abs() < 1e-9);
        assert!((b.maximum.x - 1.0).abs() < 1e-9);

        let r = Ray::without_time(Point3::new(0.5, 0.5, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let rec = rotated.hit(&r, Interval::new(0.001, INFINITY)).unwrap();
        assert!((rec.t - 8.0).abs() < 1e-9);
        assert!(close(rec.p, Point3::new(0.5, 0.5, -2.0)));
        assert!(close(rec.normal, Vec3::new(0.0, 0.0, -1.0)));
        assert!(rec.front_face);
    }
}
