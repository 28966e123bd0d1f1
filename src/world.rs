use std::cmp::Ordering;

use crate::color::Color;
use crate::error::Result;
use crate::geometry::Shape;
use crate::intersection::{hit, Computation, Intersection};
use crate::light::PointLight;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Reflection bounce budget for a fresh [`World`].
pub const DEFAULT_DEPTH: u8 = 5;

/// The scene as the renderer sees it: shapes, one point light, and a bounce
/// budget. Built once, then shared read-only across the render workers.
pub struct World {
    shapes: Vec<Shape>,
    light: PointLight,
    depth: u8,
}

impl World {
    pub fn new(light: PointLight) -> Self {
        Self {
            shapes: Vec::new(),
            light,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Caps how many reflected rays one primary ray may spawn transitively.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.light = light;
    }

    /// Every crossing of the ray with every shape, sorted ascending by `t`.
    ///
    /// Nothing is culled here; `hit` applies its visibility rule on the full
    /// list.
    pub fn intersect(&self, ray: &Ray) -> Result<Vec<Intersection<'_>>> {
        let mut intersections = Vec::new();
        for shape in &self.shapes {
            intersections.extend(shape.intersect(ray)?);
        }
        intersections.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal));

        Ok(intersections)
    }

    /// Whether anything sits strictly between the point and the light.
    pub fn is_shadowed(&self, point: Vec3<f64>) -> Result<bool> {
        let to_light = self.light.position - point;
        let distance = to_light.magnitude();
        let ray = Ray::new(point, to_light.normalize());

        let intersections = self.intersect(&ray)?;
        Ok(hit(&intersections).is_some_and(|h| h.t < distance))
    }

    /// The color seen along a primary ray; black where the ray escapes the
    /// scene.
    pub fn color_at(&self, ray: &Ray) -> Result<Color> {
        self.color_at_depth(ray, self.depth)
    }

    fn color_at_depth(&self, ray: &Ray, remaining: u8) -> Result<Color> {
        let intersections = self.intersect(ray)?;

        match hit(&intersections) {
            Some(h) => self.shade_hit(&h.prepare_computations(ray)?, remaining),
            None => Ok(Color::BLACK),
        }
    }

    /// Phong shading at a resolved hit, plus the reflected contribution.
    ///
    /// Both the shadow test and the lighting sample use the over-point so
    /// the surface cannot occlude itself.
    pub fn shade_hit(&self, comps: &Computation, remaining: u8) -> Result<Color> {
        let shadowed = self.is_shadowed(comps.over_point)?;

        let surface = comps.shape.material().lighting(
            comps.shape,
            &self.light,
            comps.over_point,
            comps.eyev,
            comps.normalv,
            shadowed,
        )?;

        Ok(surface + self.reflected_color(comps, remaining)?)
    }

    /// Traces the reflection bounce. Contributes black once the budget is
    /// spent or when the surface is not reflective at all; the latter casts
    /// no ray.
    pub fn reflected_color(&self, comps: &Computation, remaining: u8) -> Result<Color> {
        let reflective = comps.shape.material().reflective;
        if remaining == 0 || reflective == 0.0 {
            return Ok(Color::BLACK);
        }

        let ray = Ray::new(comps.over_point, comps.reflectv);
        Ok(self.color_at_depth(&ray, remaining - 1)? * reflective)
    }
}

/// The book's two-sphere world most shading fixtures are stated against.
#[cfg(test)]
pub(crate) fn default_world() -> World {
    use crate::material::Material;
    use crate::transform::scaling;

    let mut world = World::new(PointLight::new(
        Vec3::new(-10.0, 10.0, -10.0),
        Color::WHITE,
    ));

    world.add_shape(Shape::sphere().with_material(Material {
        color: Color::new(0.8, 1.0, 0.6),
        diffuse: 0.7,
        specular: 0.2,
        ..Material::default()
    }));
    world.add_shape(Shape::sphere().with_transform(scaling(0.5, 0.5, 0.5)));

    world
}

#[cfg(test)]
mod tests {
    use std::f64::consts::SQRT_2;

    use super::*;
    use crate::material::Material;
    use crate::transform::translation;

    #[test]
    fn intersect_world_sorts_by_t() {
        let world = default_world();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));

        let xs = world.intersect(&ray).unwrap();
        let ts: Vec<f64> = xs.iter().map(|i| i.t).collect();
        assert_eq!(vec![4.0, 4.5, 5.5, 6.0], ts);
    }

    #[test]
    fn shade_hit_from_outside() {
        let world = default_world();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let comps = Intersection::new(4.0, &world.shapes()[0])
            .prepare_computations(&ray)
            .unwrap();

        let color = world.shade_hit(&comps, DEFAULT_DEPTH).unwrap();
        assert!(color.approx_eq(&Color::new(0.38066, 0.47583, 0.2855)));
    }

    #[test]
    fn shade_hit_from_inside() {
        let mut world = default_world();
        world.set_light(PointLight::new(Vec3::new(0.0, 0.25, 0.0), Color::WHITE));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let comps = Intersection::new(0.5, &world.shapes()[1])
            .prepare_computations(&ray)
            .unwrap();

        let color = world.shade_hit(&comps, DEFAULT_DEPTH).unwrap();
        assert!(color.approx_eq(&Color::new(0.90498, 0.90498, 0.90498)));
    }

    #[test]
    fn shade_hit_in_shadow() {
        let mut world = World::new(PointLight::new(Vec3::new(0.0, 0.0, -10.0), Color::WHITE));
        world.add_shape(Shape::sphere());
        world.add_shape(Shape::sphere().with_transform(translation(0.0, 0.0, 10.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        let comps = Intersection::new(4.0, &world.shapes()[1])
            .prepare_computations(&ray)
            .unwrap();

        // Ambient only; the first sphere blocks the light.
        let color = world.shade_hit(&comps, DEFAULT_DEPTH).unwrap();
        assert!(color.approx_eq(&Color::new(0.1, 0.1, 0.1)));
    }

    #[test]
    fn color_at_miss_is_black() {
        let world = default_world();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(Color::BLACK, world.color_at(&ray).unwrap());
    }

    #[test]
    fn color_at_hit() {
        let world = default_world();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));

        let color = world.color_at(&ray).unwrap();
        assert!(color.approx_eq(&Color::new(0.38066, 0.47583, 0.2855)));
    }

    #[test]
    fn color_at_uses_hit_behind_the_ray_origin() {
        let mut world = World::new(PointLight::new(
            Vec3::new(-10.0, 10.0, -10.0),
            Color::WHITE,
        ));
        world.add_shape(Shape::sphere().with_material(Material {
            color: Color::new(0.8, 1.0, 0.6),
            ambient: 1.0,
            diffuse: 0.7,
            specular: 0.2,
            ..Material::default()
        }));
        world.add_shape(
            Shape::sphere()
                .with_transform(crate::transform::scaling(0.5, 0.5, 0.5))
                .with_material(Material {
                    ambient: 1.0,
                    ..Material::default()
                }),
        );

        // The eye sits between the spheres, looking at the inner one.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.75), Vec3::new(0.0, 0.0, -1.0));
        let color = world.color_at(&ray).unwrap();

        assert!(color.approx_eq(&world.shapes()[1].material().color));
    }

    #[test]
    fn shadow_determinism() {
        let world = default_world();

        assert!(!world.is_shadowed(Vec3::new(0.0, 10.0, 0.0)).unwrap());
        assert!(world.is_shadowed(Vec3::new(10.0, -10.0, 10.0)).unwrap());
        // Behind the light, and between eye and light: both lit.
        assert!(!world.is_shadowed(Vec3::new(-20.0, 20.0, -20.0)).unwrap());
        assert!(!world.is_shadowed(Vec3::new(-2.0, 2.0, -2.0)).unwrap());
    }

    fn world_with_reflective_floor() -> World {
        let mut world = default_world();
        world.add_shape(
            Shape::plane()
                .with_transform(translation(0.0, -1.0, 0.0))
                .with_material(Material {
                    reflective: 0.5,
                    ..Material::default()
                }),
        );
        world
    }

    fn slanted_ray() -> Ray {
        Ray::new(
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(0.0, -SQRT_2 / 2.0, SQRT_2 / 2.0),
        )
    }

    #[test]
    fn reflected_color_of_nonreflective_surface() {
        let mut world = default_world();
        world.set_light(PointLight::new(Vec3::new(0.0, 0.25, 0.0), Color::WHITE));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let comps = Intersection::new(1.0, &world.shapes()[1])
            .prepare_computations(&ray)
            .unwrap();

        let color = world.reflected_color(&comps, DEFAULT_DEPTH).unwrap();
        assert_eq!(Color::BLACK, color);
    }

    #[test]
    fn reflected_color_off_a_plane() {
        let world = world_with_reflective_floor();
        let ray = slanted_ray();
        let comps = Intersection::new(SQRT_2, &world.shapes()[2])
            .prepare_computations(&ray)
            .unwrap();

        let color = world.reflected_color(&comps, DEFAULT_DEPTH).unwrap();
        assert!(color.approx_eq(&Color::new(0.190332, 0.237915, 0.142749)));
    }

    #[test]
    fn shade_hit_adds_the_reflected_color() {
        let world = world_with_reflective_floor();
        let ray = slanted_ray();
        let comps = Intersection::new(SQRT_2, &world.shapes()[2])
            .prepare_computations(&ray)
            .unwrap();

        let color = world.shade_hit(&comps, DEFAULT_DEPTH).unwrap();
        assert!(color.approx_eq(&Color::new(0.876757, 0.924340, 0.829174)));
    }

    #[test]
    fn reflected_color_at_exhausted_budget() {
        let world = world_with_reflective_floor();
        let ray = slanted_ray();
        let comps = Intersection::new(SQRT_2, &world.shapes()[2])
            .prepare_computations(&ray)
            .unwrap();

        let color = world.reflected_color(&comps, 0).unwrap();
        assert_eq!(Color::BLACK, color);
    }

    #[test]
    fn mutually_reflective_surfaces_terminate() {
        let mut world = World::new(PointLight::new(Vec3::new(0.0, 0.0, 0.0), Color::WHITE));
        let mirror = Material {
            reflective: 1.0,
            ..Material::default()
        };
        world.add_shape(
            Shape::plane()
                .with_transform(translation(0.0, -1.0, 0.0))
                .with_material(mirror.clone()),
        );
        world.add_shape(
            Shape::plane()
                .with_transform(translation(0.0, 1.0, 0.0))
                .with_material(mirror),
        );

        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        // The bounce budget is the only thing stopping this from recursing
        // forever; reaching a color at all is the assertion.
        assert!(world.color_at(&ray).is_ok());
    }
}
