use std::ops::{Index, Mul};

use crate::approx_eq;
use crate::error::{Error, Result};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

///
/// Index notation is: i, j - row, column.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix4x4<T>([Vec4<T>; 4]);

impl<T: Copy> Matrix4x4<T> {
    pub fn new(v: [[T; 4]; 4]) -> Self {
        Matrix4x4([Vec4::from(v[0]), Vec4::from(v[1]), Vec4::from(v[2]), Vec4::from(v[3])])
    }
}

impl Matrix4x4<f64> {
    pub fn identity() -> Self {
        Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut m = [[0.0; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                m[j][i] = self.0[i][j];
            }
        }

        Matrix4x4::new(m)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        (0..4).map(|col| self.0[0][col] * self.cofactor(0, col)).sum()
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = det3(&self.submatrix(row, col));

        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    fn submatrix(&self, row: usize, col: usize) -> [[f64; 3]; 3] {
        let mut out = [[0.0; 3]; 3];
        let mut r = 0;

        for i in 0..4 {
            if i == row {
                continue;
            }
            let mut c = 0;
            for j in 0..4 {
                if j == col {
                    continue;
                }
                out[r][c] = self.0[i][j];
                c += 1;
            }
            r += 1;
        }

        out
    }

    /// Inverts the matrix, or reports that it is singular.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(Error::SingularMatrix);
        }

        // The cofactors land transposed, which is what inversion wants.
        let mut m = [[0.0; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                m[col][row] = self.cofactor(row, col) / det;
            }
        }

        Ok(Matrix4x4::new(m))
    }

    /// Multiplies a point: the homogeneous component is one, so translation
    /// applies.
    #[inline]
    pub fn mul_point(&self, p: Vec3<f64>) -> Vec3<f64> {
        let v = Vec4::new(p.x, p.y, p.z, 1.0);

        Vec3::new(self.0[0].dot(&v), self.0[1].dot(&v), self.0[2].dot(&v))
    }

    /// Multiplies a direction: the homogeneous component is zero, so
    /// translation drops out.
    #[inline]
    pub fn mul_vector(&self, v: Vec3<f64>) -> Vec3<f64> {
        let v = Vec4::new(v.x, v.y, v.z, 0.0);

        Vec3::new(self.0[0].dot(&v), self.0[1].dot(&v), self.0[2].dot(&v))
    }

    pub fn approx_eq(&self, other: &Matrix4x4<f64>) -> bool {
        (0..4).all(|i| (0..4).all(|j| approx_eq(self.0[i][j], other.0[i][j])))
    }
}

fn det2(m: [[f64; 2]; 2]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

fn det3(m: &[[f64; 3]; 3]) -> f64 {
    (0..3)
        .map(|col| {
            let mut sub = [[0.0; 2]; 2];
            let mut c = 0;
            for j in 0..3 {
                if j == col {
                    continue;
                }
                sub[0][c] = m[1][j];
                sub[1][c] = m[2][j];
                c += 1;
            }

            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            sign * m[0][col] * det2(sub)
        })
        .sum()
}

impl Mul for Matrix4x4<f64> {
    type Output = Matrix4x4<f64>;

    fn mul(self, o: Matrix4x4<f64>) -> Self::Output {
        let mut out = [[0.0; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    out[i][j] += self.0[i][k] * o.0[k][j];
                }
            }
        }

        Matrix4x4::new(out)
    }
}

impl<T> Index<usize> for Matrix4x4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[test]
fn mul_matrices() {
    let a = Matrix4x4::new([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 8.0, 7.0, 6.0],
        [5.0, 4.0, 3.0, 2.0],
    ]);
    let b = Matrix4x4::new([
        [-2.0, 1.0, 2.0, 3.0],
        [3.0, 2.0, 1.0, -1.0],
        [4.0, 3.0, 6.0, 5.0],
        [1.0, 2.0, 7.0, 8.0],
    ]);

    let expected = Matrix4x4::new([
        [20.0, 22.0, 50.0, 48.0],
        [44.0, 54.0, 114.0, 108.0],
        [40.0, 58.0, 110.0, 102.0],
        [16.0, 26.0, 46.0, 42.0],
    ]);

    assert_eq!(expected, a * b);
    assert_eq!(a, a * Matrix4x4::identity());
}

#[test]
fn mul_matrix_point() {
    let matrix = Matrix4x4::new([
        [1.0, 0.0, 0.0, 10.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let v = Vec3::new(10.0, 10.0, 10.0);

    assert_eq!(Vec3::new(20.0, 10.0, 10.0), matrix.mul_point(v));
    // Directions do not translate.
    assert_eq!(v, matrix.mul_vector(v));
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let a = Matrix4x4::new([
        [0.0, 9.0, 3.0, 0.0],
        [9.0, 8.0, 0.0, 8.0],
        [1.0, 8.0, 5.0, 3.0],
        [0.0, 0.0, 5.0, 8.0],
    ]);
    let expected = Matrix4x4::new([
        [0.0, 9.0, 1.0, 0.0],
        [9.0, 8.0, 8.0, 0.0],
        [3.0, 0.0, 5.0, 5.0],
        [0.0, 8.0, 3.0, 5.0],
    ]);

    assert_eq!(expected, a.transpose());
    assert_eq!(Matrix4x4::identity(), Matrix4x4::identity().transpose());
}

#[test]
fn determinant_by_cofactors() {
    let a = Matrix4x4::new([
        [-2.0, -8.0, 3.0, 5.0],
        [-3.0, 1.0, 7.0, 3.0],
        [1.0, 2.0, -9.0, 6.0],
        [-6.0, 7.0, 7.0, -9.0],
    ]);

    assert_eq!(690.0, a.cofactor(0, 0));
    assert_eq!(447.0, a.cofactor(0, 1));
    assert_eq!(210.0, a.cofactor(0, 2));
    assert_eq!(51.0, a.cofactor(0, 3));
    assert_eq!(-4071.0, a.determinant());
}

#[test]
fn invertibility() {
    let a = Matrix4x4::new([
        [6.0, 4.0, 4.0, 4.0],
        [5.0, 5.0, 7.0, 6.0],
        [4.0, -9.0, 3.0, -7.0],
        [9.0, 1.0, 7.0, -6.0],
    ]);
    assert_eq!(-2120.0, a.determinant());
    assert!(a.is_invertible());

    let b = Matrix4x4::new([
        [-4.0, 2.0, -2.0, -3.0],
        [9.0, 6.0, 2.0, 6.0],
        [0.0, -5.0, 1.0, -5.0],
        [0.0, 0.0, 0.0, 0.0],
    ]);
    assert!(!b.is_invertible());
    assert!(b.inverse().is_err());
}

#[test]
fn inverse_known_matrix() {
    let a = Matrix4x4::new([
        [-5.0, 2.0, 6.0, -8.0],
        [1.0, -5.0, 1.0, 8.0],
        [7.0, 7.0, -6.0, -7.0],
        [1.0, -3.0, 7.0, 4.0],
    ]);
    let b = a.inverse().unwrap();

    assert_eq!(532.0, a.determinant());
    assert_eq!(-160.0 / 532.0, b[3][2]);
    assert_eq!(105.0 / 532.0, b[2][3]);

    let expected = Matrix4x4::new([
        [0.21805, 0.45113, 0.24060, -0.04511],
        [-0.80827, -1.45677, -0.44361, 0.52068],
        [-0.07895, -0.22368, -0.05263, 0.19737],
        [-0.52256, -0.81391, -0.30075, 0.30639],
    ]);
    assert!(b.approx_eq(&expected));
}

#[test]
fn inverse_identity() {
    let i = Matrix4x4::identity();
    assert_eq!(i, i.inverse().unwrap());
}

#[test]
fn multiply_product_by_inverse() {
    let a = Matrix4x4::new([
        [3.0, -9.0, 7.0, 3.0],
        [3.0, -8.0, 2.0, -9.0],
        [-4.0, 4.0, 4.0, 1.0],
        [-2.0, -1.0, -1.0, 2.0],
    ]);
    let b = Matrix4x4::new([
        [8.0, 2.0, 2.0, 2.0],
        [3.0, -1.0, 7.0, 0.0],
        [7.0, 0.0, 5.0, 4.0],
        [6.0, -2.0, 0.0, 5.0],
    ]);

    let c = a * b;
    assert!((c * b.inverse().unwrap()).approx_eq(&a));
}
