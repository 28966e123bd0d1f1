use crate::matrix::Matrix4x4;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    origin: Vec3<f64>,
    direction: Vec3<f64>,
}

impl Ray {
    /// The direction is kept exactly as given. Intersection `t` values are
    /// measured in units of it, and object-space rays produced by scaling
    /// transforms depend on it staying unnormalized.
    #[inline]
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3<f64> {
        self.direction
    }

    /// The point `t` units along the ray.
    #[inline]
    pub fn position(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }

    pub fn transform(&self, m: &Matrix4x4<f64>) -> Ray {
        Ray {
            origin: m.mul_point(self.origin),
            direction: m.mul_vector(self.direction),
        }
    }
}

#[test]
fn position_along_ray() {
    let r = Ray::new(Vec3::new(2.0, 3.0, 4.0), Vec3::new(1.0, 0.0, 0.0));

    assert_eq!(Vec3::new(2.0, 3.0, 4.0), r.position(0.0));
    assert_eq!(Vec3::new(3.0, 3.0, 4.0), r.position(1.0));
    assert_eq!(Vec3::new(1.0, 3.0, 4.0), r.position(-1.0));
    assert_eq!(Vec3::new(4.5, 3.0, 4.0), r.position(2.5));
}

#[test]
fn translate_ray() {
    let r = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
    let r2 = r.transform(&crate::transform::translation(3.0, 4.0, 5.0));

    assert_eq!(Vec3::new(4.0, 6.0, 8.0), r2.origin());
    assert_eq!(Vec3::new(0.0, 1.0, 0.0), r2.direction());
}

#[test]
fn scale_ray_keeps_direction_unnormalized() {
    let r = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
    let r2 = r.transform(&crate::transform::scaling(2.0, 3.0, 4.0));

    assert_eq!(Vec3::new(2.0, 6.0, 12.0), r2.origin());
    assert_eq!(Vec3::new(0.0, 3.0, 0.0), r2.direction());
}
