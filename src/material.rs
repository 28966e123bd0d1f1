use crate::color::Color;
use crate::error::Result;
use crate::geometry::Shape;
use crate::light::PointLight;
use crate::pattern::Pattern;
use crate::vec3::Vec3;

/// Phong shading parameters for a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    /// 0 is matte, 1 a perfect mirror.
    pub reflective: f64,
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            pattern: None,
        }
    }
}

impl Material {
    /// Phong shading at a point: ambient + diffuse + specular, unclamped.
    ///
    /// The shape is needed to resolve patterns into its object space. When
    /// the point is shadowed, or the light is behind the surface, only the
    /// ambient term survives.
    pub fn lighting(
        &self,
        shape: &Shape,
        light: &PointLight,
        point: Vec3<f64>,
        eyev: Vec3<f64>,
        normalv: Vec3<f64>,
        in_shadow: bool,
    ) -> Result<Color> {
        let base = match &self.pattern {
            Some(pattern) => pattern.pattern_at_shape(shape, point)?,
            None => self.color,
        };

        let effective_color = base * light.intensity;
        let ambient = effective_color * self.ambient;

        let lightv = (light.position - point).normalize();
        let light_dot_normal = lightv.dot(&normalv);
        if light_dot_normal < 0.0 || in_shadow {
            return Ok(ambient);
        }

        let diffuse = effective_color * (self.diffuse * light_dot_normal);

        let reflectv = (-lightv).reflect(normalv);
        let reflect_dot_eye = reflectv.dot(&eyev);
        let specular = if reflect_dot_eye > 0.0 {
            light.intensity * (self.specular * reflect_dot_eye.powf(self.shininess))
        } else {
            Color::BLACK
        };

        Ok(ambient + diffuse + specular)
    }
}
