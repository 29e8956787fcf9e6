use nalgebra::Point3;
use std::fmt;

/// Pinhole camera described by its eye position and the far ends of the four
/// corner rays. The renderer owns the interpretation; we only emit it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    eye: Point3<i32>,
    corners: [Point3<i32>; 4],
}

impl Camera {
    pub fn new(eye: Point3<i32>, corners: [Point3<i32>; 4]) -> Self {
        Self { eye, corners }
    }

    /// The one camera every generated scene starts with.
    pub fn fixed() -> Self {
        Self::new(
            Point3::new(0, 0, 150),
            [
                Point3::new(-50, -50, 50),
                Point3::new(50, -50, 50),
                Point3::new(-50, 50, 50),
                Point3::new(50, 50, 50),
            ],
        )
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cam {} {} {}", self.eye.x, self.eye.y, self.eye.z)?;
        for corner in &self.corners {
            write!(f, " {} {} {}", corner.x, corner.y, corner.z)?;
        }
        Ok(())
    }
}
