use nalgebra::Point3;
use rand::Rng;

use crate::types::color::Color;

pub trait Sampler<T> {
    fn sample(&self, rng: &mut impl Rng) -> T;
}

/// Uniform integer over a closed range.
#[derive(Clone, Copy, Debug)]
pub struct IntSampler {
    min: i32,
    max: i32,
}

impl IntSampler {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Sampler<i32> for IntSampler {
    fn sample(&self, rng: &mut impl Rng) -> i32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Uniform real over a closed range.
#[derive(Clone, Copy, Debug)]
pub struct RealSampler {
    min: f64,
    max: f64,
}

impl RealSampler {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Sampler<f64> for RealSampler {
    fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Uniform real in [0, 1).
#[derive(Clone, Copy, Debug)]
pub struct UnitSampler;

impl Sampler<f64> for UnitSampler {
    fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(0.0..1.0)
    }
}

/// Integer lattice point inside an axis-aligned box. x and y share a range.
#[derive(Clone, Copy, Debug)]
pub struct BoxSampler {
    xy: IntSampler,
    z: IntSampler,
}

impl BoxSampler {
    pub const fn new(xy: (i32, i32), z: (i32, i32)) -> Self {
        Self {
            xy: IntSampler::new(xy.0, xy.1),
            z: IntSampler::new(z.0, z.1),
        }
    }
}

impl Sampler<Point3<i32>> for BoxSampler {
    fn sample(&self, rng: &mut impl Rng) -> Point3<i32> {
        let x = self.xy.sample(rng);
        let y = self.xy.sample(rng);
        let z = self.z.sample(rng);

        Point3::new(x, y, z)
    }
}

/// Color with each channel drawn independently from the same sampler.
#[derive(Clone, Copy, Debug)]
pub struct ColorSampler<S> {
    channel: S,
}

impl<S: Sampler<f64>> ColorSampler<S> {
    pub const fn new(channel: S) -> Self {
        Self { channel }
    }
}

impl<S: Sampler<f64>> Sampler<Color> for ColorSampler<S> {
    fn sample(&self, rng: &mut impl Rng) -> Color {
        let r = self.channel.sample(rng);
        let g = self.channel.sample(rng);
        let b = self.channel.sample(rng);

        Color::new(r, g, b)
    }
}
