use crate::geometry::Geometry;
use crate::ray::Ray;
use crate::vec3::Vec3;
use crate::EPSILON;

/// The xz-plane, infinite in extent.
#[derive(Copy, Clone, Debug, Default)]
pub struct Plane;

impl Geometry for Plane {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        // Parallel and coplanar rays both count as misses.
        if ray.direction().y.abs() < EPSILON {
            return Vec::new();
        }

        vec![-ray.origin().y / ray.direction().y]
    }

    fn local_normal(&self, _point: Vec3<f64>) -> Vec3<f64> {
        Vec3::new(0.0, 1.0, 0.0)
    }
}
