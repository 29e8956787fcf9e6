use crate::types::sampler::{BoxSampler, Sampler};
use nalgebra::Point3;
use rand::Rng;
use std::fmt;

const VERTEX: BoxSampler = BoxSampler::new((-100, 100), (-100, 0));

/// Vertices are drawn independently, so degenerate triangles can come out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<i32>; 3],
}

impl Triangle {
    pub fn new(a: Point3<i32>, b: Point3<i32>, c: Point3<i32>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let a = VERTEX.sample(rng);
        let b = VERTEX.sample(rng);
        let c = VERTEX.sample(rng);
        Self::new(a, b, c)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tri")?;
        for v in &self.vertices {
            write!(f, " {} {} {}", v.x, v.y, v.z)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_vertex_in_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let tri = Triangle::random(&mut rng);
            for v in &tri.vertices {
                assert!((-100..=100).contains(&v.x));
                assert!((-100..=100).contains(&v.y));
                assert!((-100..=0).contains(&v.z));
            }
        }
    }

    #[test]
    fn collinear_vertices_are_kept() {
        let p = Point3::new(0, 0, -10);
        let tri = Triangle::new(p, p, p);
        assert_eq!(tri.to_string(), "tri 0 0 -10 0 0 -10 0 0 -10");
    }
}
