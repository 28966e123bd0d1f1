//! Affine transform constructors.
//!
//! All of them produce a [`Matrix4x4`], so transforms compose with plain
//! multiplication: `translation(..) * rotation_y(..) * scaling(..)` applies
//! the scaling first.

use crate::matrix::Matrix4x4;
use crate::vec3::Vec3;

pub fn translation(x: f64, y: f64, z: f64) -> Matrix4x4<f64> {
    Matrix4x4::new([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4x4<f64> {
    Matrix4x4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_x(r: f64) -> Matrix4x4<f64> {
    Matrix4x4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, r.cos(), -r.sin(), 0.0],
        [0.0, r.sin(), r.cos(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(r: f64) -> Matrix4x4<f64> {
    Matrix4x4::new([
        [r.cos(), 0.0, r.sin(), 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-r.sin(), 0.0, r.cos(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(r: f64) -> Matrix4x4<f64> {
    Matrix4x4::new([
        [r.cos(), -r.sin(), 0.0, 0.0],
        [r.sin(), r.cos(), 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Shearing moves each coordinate in proportion to the other two; `xy` is
/// the amount x changes per unit of y, and so on.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix4x4<f64> {
    Matrix4x4::new([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Builds the world-to-camera transform for an eye at `from` looking at
/// `to`, with `up` picking the roll.
pub fn view_transform(from: Vec3<f64>, to: Vec3<f64>, up: Vec3<f64>) -> Matrix4x4<f64> {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);

    let orientation = Matrix4x4::new([
        [left.x, left.y, left.z, 0.0],
        [true_up.x, true_up.y, true_up.z, 0.0],
        [-forward.x, -forward.y, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    orientation * translation(-from.x, -from.y, -from.z)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn translate_point_and_vector() {
        let t = translation(5.0, -3.0, 2.0);
        let p = Vec3::new(-3.0, 4.0, 5.0);

        assert_eq!(Vec3::new(2.0, 1.0, 7.0), t.mul_point(p));
        assert_eq!(
            Vec3::new(-8.0, 7.0, 3.0),
            t.inverse().unwrap().mul_point(p)
        );
        // Translation leaves directions alone.
        assert_eq!(p, t.mul_vector(p));
    }

    #[test]
    fn scale_point_and_vector() {
        let s = scaling(2.0, 3.0, 4.0);

        assert_eq!(
            Vec3::new(-8.0, 18.0, 32.0),
            s.mul_point(Vec3::new(-4.0, 6.0, 8.0))
        );
        assert_eq!(
            Vec3::new(-8.0, 18.0, 32.0),
            s.mul_vector(Vec3::new(-4.0, 6.0, 8.0))
        );
        assert_eq!(
            Vec3::new(-2.0, 2.0, 2.0),
            s.inverse().unwrap().mul_vector(Vec3::new(-4.0, 6.0, 8.0))
        );

        // Reflection is scaling by a negative value.
        assert_eq!(
            Vec3::new(-2.0, 3.0, 4.0),
            scaling(-1.0, 1.0, 1.0).mul_point(Vec3::new(2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn rotate_around_x() {
        let p = Vec3::new(0.0, 1.0, 0.0);
        let half = rotation_x(PI / 4.0);
        let full = rotation_x(PI / 2.0);
        let r = 2.0f64.sqrt() / 2.0;

        assert!(half.mul_point(p).approx_eq(&Vec3::new(0.0, r, r)));
        assert!(full.mul_point(p).approx_eq(&Vec3::new(0.0, 0.0, 1.0)));
        assert!(half
            .inverse()
            .unwrap()
            .mul_point(p)
            .approx_eq(&Vec3::new(0.0, r, -r)));
    }

    #[test]
    fn rotate_around_y() {
        let p = Vec3::new(0.0, 0.0, 1.0);
        let r = 2.0f64.sqrt() / 2.0;

        assert!(rotation_y(PI / 4.0)
            .mul_point(p)
            .approx_eq(&Vec3::new(r, 0.0, r)));
        assert!(rotation_y(PI / 2.0)
            .mul_point(p)
            .approx_eq(&Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn rotate_around_z() {
        let p = Vec3::new(0.0, 1.0, 0.0);
        let r = 2.0f64.sqrt() / 2.0;

        assert!(rotation_z(PI / 4.0)
            .mul_point(p)
            .approx_eq(&Vec3::new(-r, r, 0.0)));
        assert!(rotation_z(PI / 2.0)
            .mul_point(p)
            .approx_eq(&Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn shear_each_coordinate() {
        let p = Vec3::new(2.0, 3.0, 4.0);

        let cases = [
            (shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0), Vec3::new(5.0, 3.0, 4.0)),
            (shearing(0.0, 1.0, 0.0, 0.0, 0.0, 0.0), Vec3::new(6.0, 3.0, 4.0)),
            (shearing(0.0, 0.0, 1.0, 0.0, 0.0, 0.0), Vec3::new(2.0, 5.0, 4.0)),
            (shearing(0.0, 0.0, 0.0, 1.0, 0.0, 0.0), Vec3::new(2.0, 7.0, 4.0)),
            (shearing(0.0, 0.0, 0.0, 0.0, 1.0, 0.0), Vec3::new(2.0, 3.0, 6.0)),
            (shearing(0.0, 0.0, 0.0, 0.0, 0.0, 1.0), Vec3::new(2.0, 3.0, 7.0)),
        ];

        for (m, expected) in cases {
            assert_eq!(expected, m.mul_point(p));
        }
    }

    #[test]
    fn chained_transforms_apply_right_to_left() {
        let p = Vec3::new(1.0, 0.0, 1.0);
        let t = translation(10.0, 5.0, 7.0) * scaling(5.0, 5.0, 5.0) * rotation_x(PI / 2.0);

        assert!(t.mul_point(p).approx_eq(&Vec3::new(15.0, 0.0, 7.0)));
    }

    #[test]
    fn view_transform_default_orientation() {
        let t = view_transform(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(Matrix4x4::identity(), t);
    }

    #[test]
    fn view_transform_looking_positive_z() {
        let t = view_transform(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(t.approx_eq(&scaling(-1.0, 1.0, -1.0)));
    }

    #[test]
    fn view_transform_moves_the_world() {
        let t = view_transform(
            Vec3::new(0.0, 0.0, 8.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(t.approx_eq(&translation(0.0, 0.0, -8.0)));
    }

    #[test]
    fn view_transform_arbitrary() {
        let t = view_transform(
            Vec3::new(1.0, 3.0, 2.0),
            Vec3::new(4.0, -2.0, 8.0),
            Vec3::new(1.0, 1.0, 0.0),
        );
        let expected = Matrix4x4::new([
            [-0.50709, 0.50709, 0.67612, -2.36643],
            [0.76772, 0.60609, 0.12122, -2.82843],
            [-0.35857, 0.59761, -0.71714, 0.00000],
            [0.00000, 0.00000, 0.00000, 1.00000],
        ]);
        assert!(t.approx_eq(&expected));
    }
}
