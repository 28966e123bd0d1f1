use std::fmt::Debug;
use std::sync::Arc;

use crate::error::Result;
use crate::intersection::Intersection;
use crate::material::Material;
use crate::matrix::Matrix4x4;
use crate::ray::Ray;
use crate::vec3::Vec3;

mod plane;
mod sphere;

pub use self::plane::Plane;
pub use self::sphere::Sphere;

/// A primitive in its own object space.
///
/// Implementors only ever see rays and points that are already mapped out of
/// world space, so a sphere is always the unit sphere at the origin and a
/// plane is always the xz-plane.
pub trait Geometry: Debug + Send + Sync {
    /// Every `t` at which the ray meets the surface, in production order.
    fn local_intersect(&self, ray: &Ray) -> Vec<f64>;

    /// The surface normal at an object-space point, not necessarily unit
    /// length.
    fn local_normal(&self, point: Vec3<f64>) -> Vec3<f64>;
}

/// A primitive placed in the world: geometry plus transform and material.
#[derive(Debug)]
pub struct Shape {
    geometry: Box<dyn Geometry>,
    transform: Matrix4x4<f64>,
    material: Arc<Material>,
}

impl Shape {
    pub fn new(geometry: impl Geometry + 'static) -> Self {
        Self {
            geometry: Box::new(geometry),
            transform: Matrix4x4::identity(),
            material: Arc::new(Material::default()),
        }
    }

    pub fn sphere() -> Self {
        Shape::new(Sphere)
    }

    pub fn plane() -> Self {
        Shape::new(Plane)
    }

    pub fn with_transform(mut self, transform: Matrix4x4<f64>) -> Self {
        self.transform = transform;
        self
    }

    /// Accepts a bare `Material` or an `Arc<Material>` shared with other
    /// shapes.
    pub fn with_material(mut self, material: impl Into<Arc<Material>>) -> Self {
        self.material = material.into();
        self
    }

    pub fn transform(&self) -> &Matrix4x4<f64> {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Matrix4x4<f64>) {
        self.transform = transform;
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: impl Into<Arc<Material>>) {
        self.material = material.into();
    }

    /// Intersects a world-space ray with this shape, tagging each crossing
    /// with a reference back to it.
    pub fn intersect(&self, ray: &Ray) -> Result<Vec<Intersection<'_>>> {
        let local_ray = ray.transform(&self.transform.inverse()?);

        Ok(self
            .geometry
            .local_intersect(&local_ray)
            .into_iter()
            .map(|t| Intersection::new(t, self))
            .collect())
    }

    /// The world-space surface normal at a world-space point.
    ///
    /// Normals map back to world space through the transpose of the inverse
    /// transform; multiplying as a direction zeroes the homogeneous part the
    /// transpose drags in.
    pub fn normal_at(&self, world_point: Vec3<f64>) -> Result<Vec3<f64>> {
        let inverse = self.transform.inverse()?;
        let local_point = inverse.mul_point(world_point);
        let local_normal = self.geometry.local_normal(local_point);

        Ok(inverse.transpose().mul_vector(local_normal).normalize())
    }
}
