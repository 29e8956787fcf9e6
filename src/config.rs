use std::path::PathBuf;

/// How many of each record the random recipe emits, and where the scene goes.
/// There is no external configuration source; `Default` is the program's setup.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub directional_lights: usize,
    pub point_lights: usize,
    pub triangles: usize,
    pub spheres: usize,
    pub output: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            directional_lights: 1,
            point_lights: 3,
            triangles: 2,
            spheres: 1,
            output: PathBuf::from("new_scene.txt"),
        }
    }
}

impl SceneConfig {
    /// Camera included, each triangle and sphere carries its own material.
    pub fn record_count(&self) -> usize {
        1 + self.directional_lights + self.point_lights + 2 * (self.triangles + self.spheres)
    }
}
