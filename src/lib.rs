//! A small ray-traced renderer: spheres, planes, procedural patterns,
//! shadows and bounded reflections, driven by declarative JSON scenes.
//!
//! The pipeline is `Camera` → one primary [`ray::Ray`] per pixel →
//! [`world::World::color_at`] → [`canvas::Canvas`] → PPM or PNG.

pub mod camera;
pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod material;
pub mod matrix;
pub mod pattern;
pub mod ray;
pub mod scene;
pub mod transform;
pub mod vec3;
pub mod vec4;
pub mod world;

pub use crate::error::{Error, Result};

/// Tolerance used for every floating-point comparison in the crate.
pub const EPSILON: f64 = 1e-5;

/// Scalar equality within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
