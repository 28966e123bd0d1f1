use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::matrix::Matrix4x4;
use crate::ray::Ray;
use crate::vec3::Vec3;
use crate::world::World;

/// Maps pixels to primary rays and drives the render loop.
///
/// The view sits on a canvas one unit in front of the eye; `half_width` and
/// `half_height` are its extents there, derived once from the field of view
/// and the aspect ratio.
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Matrix4x4<f64>,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;

        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix4x4::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
        }
    }

    /// Usually a [`view_transform`](crate::transform::view_transform).
    pub fn with_transform(mut self, transform: Matrix4x4<f64>) -> Self {
        self.transform = transform;
        self
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn transform(&self) -> &Matrix4x4<f64> {
        &self.transform
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// The primary ray through the centre of pixel `(x, y)`.
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Result<Ray> {
        Ok(self.ray_through(&self.transform.inverse()?, x, y))
    }

    fn ray_through(&self, inverse: &Matrix4x4<f64>, x: usize, y: usize) -> Ray {
        let x_offset = (x as f64 + 0.5) * self.pixel_size;
        let y_offset = (y as f64 + 0.5) * self.pixel_size;

        // The untransformed canvas is at z = -1, x growing to the left.
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = inverse.mul_point(Vec3::new(world_x, world_y, -1.0));
        let origin = inverse.mul_point(Vec3::new(0.0, 0.0, 0.0));

        Ray::new(origin, (pixel - origin).normalize())
    }

    /// Renders the world onto a fresh canvas.
    ///
    /// Rows are disjoint slices of the canvas, so rayon's workers fill them
    /// with no locking; the first error (a singular transform somewhere in
    /// the scene) cancels the frame.
    pub fn render(&self, world: &World) -> Result<Canvas> {
        let inverse = self.transform.inverse()?;
        let mut canvas = Canvas::new(self.hsize, self.vsize);

        info!(
            "rendering {}x{}, {} shapes",
            self.hsize,
            self.vsize,
            world.shapes().len()
        );
        let started = Instant::now();

        canvas
            .pixels_mut()
            .par_chunks_mut(self.hsize)
            .enumerate()
            .try_for_each(|(y, row)| -> Result<()> {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let ray = self.ray_through(&inverse, x, y);
                    *pixel = world.color_at(&ray)?;
                }
                Ok(())
            })?;

        info!("rendered in {:.3} s", started.elapsed().as_secs_f64());
        Ok(canvas)
    }
}
