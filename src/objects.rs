pub mod sphere;
pub mod triangle;

use rand::Rng;
use std::fmt;

pub use sphere::Sphere;
pub use triangle::Triangle;

/// Geometry the renderer shades with the active material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    pub fn random_sphere(rng: &mut impl Rng) -> Self {
        Primitive::Sphere(Sphere::random(rng))
    }

    pub fn random_triangle(rng: &mut impl Rng) -> Self {
        Primitive::Triangle(Triangle::random(rng))
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sph",
            Primitive::Triangle(_) => "tri",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Sphere(sphere) => write!(f, "{}", sphere),
            Primitive::Triangle(triangle) => write!(f, "{}", triangle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tag_matches_line_prefix() {
        let sphere = Primitive::Sphere(Sphere::new(Point3::new(3, -4, -80), 12));
        let p = Point3::new(0, 0, -1);
        let triangle = Primitive::Triangle(Triangle::new(p, p, p));

        for primitive in [sphere, triangle] {
            let line = primitive.to_string();
            assert_eq!(line.split(' ').next(), Some(primitive.tag()));
        }
        assert_eq!(sphere.tag(), "sph");
        assert_eq!(triangle.tag(), "tri");
    }

    #[test]
    fn random_constructors_pick_their_variant() {
        let mut rng = StdRng::seed_from_u64(8);
        assert!(matches!(Primitive::random_sphere(&mut rng), Primitive::Sphere(_)));
        assert!(matches!(Primitive::random_triangle(&mut rng), Primitive::Triangle(_)));
    }
}
