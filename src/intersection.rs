use crate::error::Result;
use crate::geometry::Shape;
use crate::ray::Ray;
use crate::vec3::Vec3;
use crate::EPSILON;

/// A ray-shape crossing at parametric distance `t`.
#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub shape: &'a Shape,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, shape: &'a Shape) -> Self {
        Self { t, shape }
    }

    /// Precomputes the shading state for this hit.
    ///
    /// When the ray strikes the surface from inside, the normal is flipped
    /// to face the eye before the over-point and reflection vector are
    /// derived from it.
    pub fn prepare_computations(&self, ray: &Ray) -> Result<Computation<'a>> {
        let point = ray.position(self.t);
        let eyev = -ray.direction();
        let mut normalv = self.shape.normal_at(point)?;

        let inside = normalv.dot(&eyev) < 0.0;
        if inside {
            normalv = -normalv;
        }

        Ok(Computation {
            t: self.t,
            shape: self.shape,
            point,
            over_point: point + normalv.scale(EPSILON),
            eyev,
            normalv,
            reflectv: ray.direction().reflect(normalv),
            inside,
        })
    }
}

/// The visible intersection: smallest non-negative `t`. Negative values lie
/// behind the ray origin and are skipped; among equal minima the earliest
/// entry wins.
pub fn hit<'a>(intersections: &[Intersection<'a>]) -> Option<Intersection<'a>> {
    let mut best: Option<Intersection> = None;

    for i in intersections {
        if i.t < 0.0 {
            continue;
        }
        if best.map_or(true, |b| i.t < b.t) {
            best = Some(*i);
        }
    }

    best
}

/// Everything shading needs at a resolved hit.
#[derive(Debug)]
pub struct Computation<'a> {
    pub t: f64,
    pub shape: &'a Shape,
    pub point: Vec3<f64>,
    /// The hit point nudged a hair along the normal, so shadow and
    /// reflection rays cannot re-hit their own surface.
    pub over_point: Vec3<f64>,
    pub eyev: Vec3<f64>,
    pub normalv: Vec3<f64>,
    pub reflectv: Vec3<f64>,
    pub inside: bool,
}
