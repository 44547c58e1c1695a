use crate::rtnextweek::*;

/// A ray cast at `time` within the shutter interval.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
    pub time: f64,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3, time: f64) -> Self {
        Self {
            orig: origin,
            dir: direction,
            time,
        }
    }

    pub fn without_time(origin: Point3, direction: Vec3) -> Self {
        Self::new(origin, direction, 0.0)
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}
