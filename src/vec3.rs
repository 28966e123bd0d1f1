use std::ops::{Add, Mul, Neg, Sub};

use crate::approx_eq;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Vec3<f64> {
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalize(&self) -> Vec3<f64> {
        let len = self.magnitude();

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    #[inline]
    pub fn cross(&self, other: &Vec3<f64>) -> Vec3<f64> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Reflects this vector around the given normal.
    #[inline]
    pub fn reflect(&self, normal: Vec3<f64>) -> Vec3<f64> {
        *self - normal.scale(2.0 * self.dot(&normal))
    }

    #[inline]
    pub fn approx_eq(&self, other: &Vec3<f64>) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[test]
fn dot_product() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(2.0, 3.0, 4.0);

    assert_eq!(20.0, a.dot(&b));
}

#[test]
fn cross_product() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(2.0, 3.0, 4.0);

    assert_eq!(Vec3::new(-1.0, 2.0, -1.0), a.cross(&b));
    assert_eq!(Vec3::new(1.0, -2.0, 1.0), b.cross(&a));
}

#[test]
fn magnitude_of_unit_and_diagonal() {
    assert_eq!(1.0, Vec3::new(0.0, 1.0, 0.0).magnitude());
    assert_eq!(14.0f64.sqrt(), Vec3::new(1.0, 2.0, 3.0).magnitude());
    assert_eq!(14.0f64.sqrt(), Vec3::new(-1.0, -2.0, -3.0).magnitude());
}

#[test]
fn normalize_yields_unit_vector() {
    let v = Vec3::new(4.0, 0.0, 0.0);
    assert_eq!(Vec3::new(1.0, 0.0, 0.0), v.normalize());

    let v = Vec3::new(1.0, 2.0, 3.0);
    assert!(approx_eq(1.0, v.normalize().magnitude()));
}

#[test]
fn reflect_at_45_degrees() {
    let v = Vec3::new(1.0, -1.0, 0.0);
    let n = Vec3::new(0.0, 1.0, 0.0);

    assert!(v.reflect(n).approx_eq(&Vec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn reflect_off_slanted_surface() {
    let sqrt2 = 2.0f64.sqrt() / 2.0;
    let v = Vec3::new(0.0, -1.0, 0.0);
    let n = Vec3::new(sqrt2, sqrt2, 0.0);

    assert!(v.reflect(n).approx_eq(&Vec3::new(1.0, 0.0, 0.0)));
}

#[test]
fn negation() {
    assert_eq!(Vec3::new(-1.0, 2.0, -3.0), -Vec3::new(1.0, -2.0, 3.0));
}
