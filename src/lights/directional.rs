use super::{fmt_light, INTENSITY};
use crate::types::color::Color;
use crate::types::sampler::{BoxSampler, Sampler};
use nalgebra::Point3;
use rand::Rng;
use std::fmt;

const POSITION: BoxSampler = BoxSampler::new((-200, 200), (-50, 200));

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Point3<i32>,
    pub color: Color,
}

impl DirectionalLight {
    pub fn new(position: Point3<i32>, color: Color) -> Self {
        Self { position, color }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let position = POSITION.sample(rng);
        let color = INTENSITY.sample(rng);
        Self::new(position, color)
    }
}

impl fmt::Display for DirectionalLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_light(f, "ltd", &self.position, &self.color)
    }
}
