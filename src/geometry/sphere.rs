use crate::geometry::Geometry;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// The unit sphere at the local origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sphere;

impl Geometry for Sphere {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        // Quadratic for |O + tD|^2 = 1; the centre is the local origin, so
        // the origin-to-centre vector is just O.
        let a = ray.direction().dot(&ray.direction());
        let b = 2.0 * ray.direction().dot(&ray.origin());
        let c = ray.origin().dot(&ray.origin()) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let sqrt = discriminant.sqrt();
        let denominator = 2.0 * a;

        vec![(-b - sqrt) / denominator, (-b + sqrt) / denominator]
    }

    fn local_normal(&self, point: Vec3<f64>) -> Vec3<f64> {
        point
    }
}
