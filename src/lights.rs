pub mod directional;
pub mod point;

use crate::types::color::Color;
use crate::types::sampler::{ColorSampler, RealSampler};
use nalgebra::Point3;
use std::fmt;

pub use directional::DirectionalLight;
pub use point::PointLight;

/// Light intensity range shared by every light kind.
pub const INTENSITY: ColorSampler<RealSampler> = ColorSampler::new(RealSampler::new(0.05, 0.8));

pub(crate) fn fmt_light(
    f: &mut fmt::Formatter<'_>,
    tag: &str,
    position: &Point3<i32>,
    color: &Color,
) -> fmt::Result {
    write!(
        f,
        "{} {} {} {} {} {} {}",
        tag,
        position.x,
        position.y,
        position.z,
        color.x,
        color.y,
        color.z
    )
}
