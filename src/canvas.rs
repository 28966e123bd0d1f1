use image::RgbImage;

use crate::color::Color;

/// A width × height grid of unclamped colors, row-major, initially black.
///
/// Clamping to a displayable range only happens on the way out, in
/// [`Canvas::to_ppm`] and [`Canvas::to_rgb_image`].
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// The raw backing storage, for the render loop to shard into rows.
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Serializes to plain-text PPM: `P3` header, channels clamped to 0..255,
    /// no line longer than 70 characters, trailing newline.
    pub fn to_ppm(&self) -> String {
        let mut ppm = format!("P3\n{} {}\n255\n", self.width, self.height);

        for row in self.pixels.chunks(self.width) {
            let mut line = String::new();
            for value in row.iter().flat_map(|c| c.to_rgb8()) {
                let token = value.to_string();
                if !line.is_empty() && line.len() + 1 + token.len() > 70 {
                    ppm.push_str(&line);
                    ppm.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&token);
            }
            ppm.push_str(&line);
            ppm.push('\n');
        }

        ppm
    }

    /// Converts to an 8-bit RGB buffer for PNG output.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut image = RgbImage::new(self.width as u32, self.height as u32);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = image::Rgb(self.pixel_at(x as usize, y as usize).to_rgb8());
        }

        image
    }
}
