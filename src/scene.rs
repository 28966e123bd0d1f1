//! Declarative JSON scene descriptions.
//!
//! A scene file pairs a camera with a light, an optional table of named
//! materials, and a list of shapes. Transform steps apply in the order they
//! are written; named materials are built once and shared between the shapes
//! that reference them.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Shape;
use crate::light::PointLight;
use crate::material::Material;
use crate::matrix::Matrix4x4;
use crate::pattern::{Pattern, PatternKind};
use crate::transform::{
    rotation_x, rotation_y, rotation_z, scaling, shearing, translation, view_transform,
};
use crate::vec3::Vec3;
use crate::world::World;

/// A parsed scene file, not yet turned into renderable objects.
#[derive(Debug, Deserialize)]
pub struct SceneDescription {
    camera: CameraDescription,
    light: LightDescription,
    #[serde(default)]
    materials: HashMap<String, MaterialDescription>,
    shapes: Vec<ShapeDescription>,
    #[serde(default)]
    max_bounces: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct CameraDescription {
    width: usize,
    height: usize,
    field_of_view: f64,
    from: [f64; 3],
    to: [f64; 3],
    up: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct LightDescription {
    position: [f64; 3],
    intensity: Color,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MaterialDescription {
    color: Option<Color>,
    ambient: Option<f64>,
    diffuse: Option<f64>,
    specular: Option<f64>,
    shininess: Option<f64>,
    reflective: Option<f64>,
    pattern: Option<PatternDescription>,
}

#[derive(Debug, Deserialize)]
struct PatternDescription {
    kind: PatternKindDescription,
    a: Color,
    b: Color,
    #[serde(default)]
    transform: Vec<TransformStep>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PatternKindDescription {
    Stripe,
    Gradient,
    Ring,
    Checkers,
    RadialGradient,
}

#[derive(Debug, Deserialize)]
struct ShapeDescription {
    kind: ShapeKind,
    #[serde(default)]
    transform: Vec<TransformStep>,
    material: Option<MaterialRef>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ShapeKind {
    Sphere,
    Plane,
}

/// Either the name of an entry in `materials` or an inline definition.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MaterialRef {
    Named(String),
    Inline(MaterialDescription),
}

/// One step of a transform chain, e.g. `{ "rotate_y": 0.5 }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TransformStep {
    Translate([f64; 3]),
    Scale([f64; 3]),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    Shear([f64; 6]),
}

impl TransformStep {
    fn matrix(&self) -> Matrix4x4<f64> {
        match *self {
            TransformStep::Translate([x, y, z]) => translation(x, y, z),
            TransformStep::Scale([x, y, z]) => scaling(x, y, z),
            TransformStep::RotateX(r) => rotation_x(r),
            TransformStep::RotateY(r) => rotation_y(r),
            TransformStep::RotateZ(r) => rotation_z(r),
            TransformStep::Shear([xy, xz, yx, yz, zx, zy]) => shearing(xy, xz, yx, yz, zx, zy),
        }
    }
}

/// Each step left-multiplies the accumulated matrix, so steps apply to the
/// shape in the order they are written.
fn compose(steps: &[TransformStep]) -> Matrix4x4<f64> {
    steps
        .iter()
        .fold(Matrix4x4::identity(), |acc, step| step.matrix() * acc)
}

fn vec3(v: [f64; 3]) -> Vec3<f64> {
    Vec3::new(v[0], v[1], v[2])
}

impl SceneDescription {
    /// Reads and builds a scene file in one go.
    pub fn load(path: &Path) -> Result<(World, Camera)> {
        let file = File::open(path)?;
        let description: SceneDescription = serde_json::from_reader(BufReader::new(file))?;

        description.build()
    }

    pub fn from_json(json: &str) -> Result<SceneDescription> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turns the description into renderable objects.
    pub fn build(&self) -> Result<(World, Camera)> {
        let light = PointLight::new(vec3(self.light.position), self.light.intensity);

        let mut world = World::new(light);
        if let Some(depth) = self.max_bounces {
            world = world.with_depth(depth);
        }

        // Named materials become one shared allocation each.
        let materials: HashMap<&str, Arc<Material>> = self
            .materials
            .iter()
            .map(|(name, description)| (name.as_str(), Arc::new(description.build())))
            .collect();
        debug!(
            "scene: {} shapes, {} named materials",
            self.shapes.len(),
            materials.len()
        );

        for description in &self.shapes {
            let mut shape = match description.kind {
                ShapeKind::Sphere => Shape::sphere(),
                ShapeKind::Plane => Shape::plane(),
            }
            .with_transform(compose(&description.transform));

            shape = match &description.material {
                Some(MaterialRef::Named(name)) => {
                    let material = materials
                        .get(name.as_str())
                        .ok_or_else(|| Error::UnknownMaterial(name.clone()))?;
                    shape.with_material(Arc::clone(material))
                }
                Some(MaterialRef::Inline(inline)) => shape.with_material(inline.build()),
                None => shape,
            };

            world.add_shape(shape);
        }

        let camera = &self.camera;
        let camera = Camera::new(camera.width, camera.height, camera.field_of_view)
            .with_transform(view_transform(
                vec3(camera.from),
                vec3(camera.to),
                vec3(camera.up),
            ));

        Ok((world, camera))
    }
}

impl MaterialDescription {
    /// Omitted fields keep the Material defaults.
    fn build(&self) -> Material {
        let defaults = Material::default();

        Material {
            color: self.color.unwrap_or(defaults.color),
            ambient: self.ambient.unwrap_or(defaults.ambient),
            diffuse: self.diffuse.unwrap_or(defaults.diffuse),
            specular: self.specular.unwrap_or(defaults.specular),
            shininess: self.shininess.unwrap_or(defaults.shininess),
            reflective: self.reflective.unwrap_or(defaults.reflective),
            pattern: self.pattern.as_ref().map(PatternDescription::build),
        }
    }
}

impl PatternDescription {
    fn build(&self) -> Pattern {
        let kind = match self.kind {
            PatternKindDescription::Stripe => PatternKind::Stripe,
            PatternKindDescription::Gradient => PatternKind::Gradient,
            PatternKindDescription::Ring => PatternKind::Ring,
            PatternKindDescription::Checkers => PatternKind::Checkers,
            PatternKindDescription::RadialGradient => PatternKind::RadialGradient,
        };

        Pattern::new(kind, self.a, self.b).with_transform(compose(&self.transform))
    }
}
