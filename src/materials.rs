pub mod phong;

pub use phong::Material;
