use super::{fmt_light, INTENSITY};
use crate::types::color::Color;
use crate::types::sampler::{BoxSampler, Sampler};
use nalgebra::Point3;
use rand::Rng;
use std::fmt;

// Point lights stay closer to the image plane than directional ones.
const POSITION: BoxSampler = BoxSampler::new((-200, 200), (-50, 50));

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3<i32>,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Point3<i32>, color: Color) -> Self {
        Self { position, color }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let position = POSITION.sample(rng);
        let color = INTENSITY.sample(rng);
        Self::new(position, color)
    }
}

impl fmt::Display for PointLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_light(f, "ltp", &self.position, &self.color)
    }
}
