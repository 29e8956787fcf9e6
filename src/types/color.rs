/// RGB triple; channels map to x, y, z.
pub type Color = nalgebra::Vector3<f64>;
