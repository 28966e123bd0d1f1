use crate::color::Color;
use crate::vec3::Vec3;

/// A point light with no size: a position and an intensity color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3<f64>,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec3<f64>, intensity: Color) -> Self {
        Self { position, intensity }
    }
}

#[test]
fn light_keeps_position_and_intensity() {
    let light = PointLight::new(Vec3::new(0.0, 0.0, 0.0), Color::WHITE);

    assert_eq!(Vec3::new(0.0, 0.0, 0.0), light.position);
    assert_eq!(Color::WHITE, light.intensity);
}
