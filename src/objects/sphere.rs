use crate::types::sampler::{BoxSampler, IntSampler, Sampler};
use nalgebra::Point3;
use rand::Rng;
use std::fmt;

const CENTER: BoxSampler = BoxSampler::new((-100, 100), (-250, -50));
const RADIUS: IntSampler = IntSampler::new(5, 50);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3<i32>,
    pub radius: i32,
}

impl Sphere {
    pub fn new(center: Point3<i32>, radius: i32) -> Self {
        Self { center, radius }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        // Radius first, then the center.
        let radius = RADIUS.sample(rng);
        let center = CENTER.sample(rng);
        Self::new(center, radius)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sph {} {} {} {}",
            self.center.x, self.center.y, self.center.z, self.radius
        )
    }
}
