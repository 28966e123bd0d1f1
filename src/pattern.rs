use crate::color::Color;
use crate::error::Result;
use crate::geometry::Shape;
use crate::matrix::Matrix4x4;
use crate::vec3::Vec3;

/// The procedural texture formulas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PatternKind {
    Stripe,
    Gradient,
    Ring,
    Checkers,
    RadialGradient,
}

/// A two-color procedural texture with its own transform, evaluated in
/// pattern space: world point → object space → pattern space.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,
    pub a: Color,
    pub b: Color,
    transform: Matrix4x4<f64>,
}

impl Pattern {
    pub fn new(kind: PatternKind, a: Color, b: Color) -> Self {
        Self {
            kind,
            a,
            b,
            transform: Matrix4x4::identity(),
        }
    }

    pub fn stripe(a: Color, b: Color) -> Self {
        Pattern::new(PatternKind::Stripe, a, b)
    }

    pub fn gradient(a: Color, b: Color) -> Self {
        Pattern::new(PatternKind::Gradient, a, b)
    }

    pub fn ring(a: Color, b: Color) -> Self {
        Pattern::new(PatternKind::Ring, a, b)
    }

    pub fn checkers(a: Color, b: Color) -> Self {
        Pattern::new(PatternKind::Checkers, a, b)
    }

    pub fn radial_gradient(a: Color, b: Color) -> Self {
        Pattern::new(PatternKind::RadialGradient, a, b)
    }

    pub fn with_transform(mut self, transform: Matrix4x4<f64>) -> Self {
        self.transform = transform;
        self
    }

    pub fn transform(&self) -> &Matrix4x4<f64> {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Matrix4x4<f64>) {
        self.transform = transform;
    }

    /// Evaluates the formula at a pattern-space point.
    pub fn pattern_at(&self, point: Vec3<f64>) -> Color {
        match self.kind {
            PatternKind::Stripe => {
                if point.x.floor() as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Gradient => self.a + (self.b - self.a) * (point.x - point.x.floor()),
            PatternKind::Ring => {
                let distance = (point.x * point.x + point.z * point.z).sqrt();
                if distance.floor() as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Checkers => {
                let sum = point.x.floor() + point.y.floor() + point.z.floor();
                if sum as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::RadialGradient => {
                let distance = (point.x * point.x + point.z * point.z).sqrt();
                self.a + (self.b - self.a) * (distance - distance.floor())
            }
        }
    }

    /// Resolves the pattern at a world-space point on a shape: first into
    /// the shape's object space, then into this pattern's own space.
    pub fn pattern_at_shape(&self, shape: &Shape, world_point: Vec3<f64>) -> Result<Color> {
        let object_point = shape.transform().inverse()?.mul_point(world_point);
        let pattern_point = self.transform.inverse()?.mul_point(object_point);

        Ok(self.pattern_at(pattern_point))
    }
}
