use super::SceneBuffer;
use crate::config::SceneConfig;
use crate::lights::{DirectionalLight, PointLight};
use crate::materials::Material;
use crate::objects::Primitive;
use rand::Rng;

pub fn material_with_triangle(rng: &mut impl Rng) -> (Material, Primitive) {
    let material = Material::random(rng);
    (material, Primitive::random_triangle(rng))
}

pub fn material_with_sphere(rng: &mut impl Rng) -> (Material, Primitive) {
    let material = Material::random(rng);
    (material, Primitive::random_sphere(rng))
}

/// Lights first, then material/triangle pairs, then material/sphere pairs.
/// Primitives are not checked for overlap or degeneracy.
pub fn build(config: &SceneConfig, rng: &mut impl Rng) -> SceneBuffer {
    let mut scene = SceneBuffer::new();

    for _ in 0..config.directional_lights {
        scene.append(DirectionalLight::random(rng));
    }
    for _ in 0..config.point_lights {
        scene.append(PointLight::random(rng));
    }
    for _ in 0..config.triangles {
        let (material, triangle) = material_with_triangle(rng);
        scene.append_with_material(material, triangle);
    }
    for _ in 0..config.spheres {
        let (material, sphere) = material_with_sphere(rng);
        scene.append_with_material(material, sphere);
    }
    debug_assert_eq!(scene.len(), config.record_count());

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::Record;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn kinds(scene: &SceneBuffer) -> Vec<&'static str> {
        scene.records().iter().map(Record::kind).collect()
    }

    fn lines(scene: &SceneBuffer) -> Vec<String> {
        scene.records().iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn default_recipe_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SceneConfig::default();
        let scene = build(&config, &mut rng);

        assert_eq!(scene.len(), 11);
        assert_eq!(scene.len(), config.record_count());
        assert_eq!(
            kinds(&scene),
            ["cam", "ltd", "ltp", "ltp", "ltp", "mat", "tri", "mat", "tri", "mat", "sph"]
        );
    }

    #[test]
    fn every_material_is_followed_by_geometry() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = SceneConfig {
            triangles: 5,
            spheres: 4,
            ..SceneConfig::default()
        };
        let scene = build(&config, &mut rng);
        let kinds = kinds(&scene);

        for (i, kind) in kinds.iter().enumerate() {
            if *kind == "mat" {
                assert!(matches!(kinds.get(i + 1), Some(&"tri") | Some(&"sph")));
            }
        }
    }

    #[test]
    fn structure_is_stable_across_seeds() {
        let config = SceneConfig::default();
        let a = build(&config, &mut StdRng::seed_from_u64(10));
        let b = build(&config, &mut StdRng::seed_from_u64(20));

        let shape = |scene: &SceneBuffer| -> Vec<usize> {
            lines(scene).iter().map(|l| l.split(' ').count()).collect()
        };
        assert_eq!(shape(&a), shape(&b));
        assert_eq!(shape(&a), [16, 7, 7, 7, 7, 14, 10, 14, 10, 14, 5]);
        assert_ne!(lines(&a), lines(&b));
    }

    #[test]
    fn minimum_source_scene() {
        let mut rng = StepRng::new(0, 0);
        let scene = build(&SceneConfig::default(), &mut rng);
        let lines = lines(&scene);

        assert_eq!(lines[1], "ltd -200 -200 -50 0.05 0.05 0.05");
        assert_eq!(lines[2], "ltp -200 -200 -50 0.05 0.05 0.05");
        assert_eq!(lines[5], "mat 0 0 0 0 0 0 0 0 0 2 0 0 0");
        assert_eq!(lines[6], "tri -100 -100 -100 -100 -100 -100 -100 -100 -100");
        assert_eq!(lines[10], "sph -100 -100 -250 5");
    }
}
