use crate::rtnextweek::*;

/// Axis-aligned bounding box spanned by two corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub minimum: Point3,
    pub maximum: Point3,
}

impl Aabb {
    /// Corners may be given in any order; each axis is sorted so that
    /// `minimum <= maximum` holds component-wise.
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            minimum: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            maximum: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Smallest box containing both inputs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self::new(
            Point3::new(
                box0.minimum.x.min(box1.minimum.x),
                box0.minimum.y.min(box1.minimum.y),
                box0.minimum.z.min(box1.minimum.z),
            ),
            Point3::new(
                box0.maximum.x.max(box1.maximum.x),
                box0.maximum.y.max(box1.maximum.y),
                box0.maximum.z.max(box1.maximum.z),
            ),
        )
    }

    pub fn axis_interval(&self, axis: usize) -> Interval {
        Interval::new(self.minimum[axis], self.maximum[axis])
    }

    /// Widen any axis thinner than `delta` so the box keeps a volume.
    pub fn pad(&self, delta: f64) -> Self {
        let mut minimum = self.minimum;
        let mut maximum = self.maximum;
        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            if slab.size() < delta {
                let padded = slab.expand(delta);
                minimum[axis] = padded.min;
                maximum[axis] = padded.max;
            }
        }
        Self { minimum, maximum }
    }

    pub fn translate(&self, offset: Vec3) -> Self {
        Self {
            minimum: self.minimum + offset,
            maximum: self.maximum + offset,
        }
    }

    /// The eight corner points.
    pub fn corners(&self) -> [Point3; 8] {
        let mut out = [Point3::zero(); 8];
        for (n, corner) in out.iter_mut().enumerate() {
            let pick = |bit: usize, axis: usize| {
                if n & bit == 0 {
                    self.minimum[axis]
                } else {
                    self.maximum[axis]
                }
            };
            *corner = Point3::new(pick(1, 0), pick(2, 1), pick(4, 2));
        }
        out
    }

    /// Slab test: does `r` pass through the box anywhere in `ray_t`?
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let inv_d = 1.0 / r.dir[axis];
            let mut t0 = (self.minimum[axis] - r.orig[axis]) * inv_d;
            let mut t1 = (self.maximum[axis] - r.orig[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }
        true
    }
}
