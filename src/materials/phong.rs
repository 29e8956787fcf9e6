use crate::types::color::Color;
use crate::types::sampler::{ColorSampler, IntSampler, RealSampler, Sampler, UnitSampler};
use rand::Rng;
use std::fmt;

const AMBIENT: ColorSampler<RealSampler> = ColorSampler::new(RealSampler::new(0.0, 0.3));
const DIFFUSE: ColorSampler<UnitSampler> = ColorSampler::new(UnitSampler);
const SPECULAR: ColorSampler<UnitSampler> = ColorSampler::new(UnitSampler);
const EXPONENT: IntSampler = IntSampler::new(2, 50);
const REFLECTIVE: ColorSampler<RealSampler> = ColorSampler::new(RealSampler::new(0.0, 0.5));

/// Phong surface with a mirror term. The renderer applies the most recently
/// declared material to the geometry that follows it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub exponent: i32,
    pub reflective: Color,
}

impl Material {
    pub fn new(
        ambient: Color,
        diffuse: Color,
        specular: Color,
        exponent: i32,
        reflective: Color,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            exponent,
            reflective,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let ambient = AMBIENT.sample(rng);
        let diffuse = DIFFUSE.sample(rng);
        let specular = SPECULAR.sample(rng);
        let exponent = EXPONENT.sample(rng);
        let reflective = REFLECTIVE.sample(rng);

        Self::new(ambient, diffuse, specular, exponent, reflective)
    }
}

fn write_color(f: &mut fmt::Formatter<'_>, color: &Color) -> fmt::Result {
    write!(f, " {} {} {}", color.x, color.y, color.z)
}

/// Reals use the shortest round-trip form, so whole values such as `0.0` or
/// `1.0` are written without a decimal point (`0`, `1`).
impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mat")?;
        write_color(f, &self.ambient)?;
        write_color(f, &self.diffuse)?;
        write_color(f, &self.specular)?;
        write!(f, " {}", self.exponent)?;
        write_color(f, &self.reflective)
    }
}
