use crate::camera::Camera;
use crate::lights::{DirectionalLight, PointLight};
use crate::materials::Material;
use crate::objects::Primitive;
use std::fmt;

pub mod random;

/// One line of the scene file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Record {
    Camera(Camera),
    DirectionalLight(DirectionalLight),
    PointLight(PointLight),
    Material(Material),
    Primitive(Primitive),
}

impl Record {
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Camera(_) => "cam",
            Record::DirectionalLight(_) => "ltd",
            Record::PointLight(_) => "ltp",
            Record::Material(_) => "mat",
            Record::Primitive(primitive) => primitive.tag(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Camera(camera) => write!(f, "{}", camera),
            Record::DirectionalLight(light) => write!(f, "{}", light),
            Record::PointLight(light) => write!(f, "{}", light),
            Record::Material(material) => write!(f, "{}", material),
            Record::Primitive(primitive) => write!(f, "{}", primitive),
        }
    }
}

impl From<DirectionalLight> for Record {
    fn from(light: DirectionalLight) -> Self {
        Record::DirectionalLight(light)
    }
}

impl From<PointLight> for Record {
    fn from(light: PointLight) -> Self {
        Record::PointLight(light)
    }
}

impl From<Material> for Record {
    fn from(material: Material) -> Self {
        Record::Material(material)
    }
}

impl From<Primitive> for Record {
    fn from(primitive: Primitive) -> Self {
        Record::Primitive(primitive)
    }
}

/// Append-only list of records, always opened by the fixed camera.
#[derive(Clone, Debug)]
pub struct SceneBuffer {
    records: Vec<Record>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self {
            records: vec![Record::Camera(Camera::fixed())],
        }
    }

    pub fn append(&mut self, record: impl Into<Record>) {
        let record = record.into();
        log::debug!("Appending {}: {}", record.kind(), record);
        self.records.push(record);
    }

    /// Keeps the material directly ahead of the geometry it shades.
    pub fn append_with_material(&mut self, material: Material, primitive: Primitive) {
        self.append(material);
        self.append(primitive);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl Default for SceneBuffer {
    fn default() -> Self {
        Self::new()
    }
}
