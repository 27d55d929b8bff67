//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using the half-b form of the quadratic.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;
use glam::Vec3A;

/// Sphere primitive defined by center, signed radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Signed radius of the sphere.
    ///
    /// A negative radius is a valid configuration: the geometry is identical
    /// but the outward normal `(p - center) / radius` points inward, which
    /// turns the sphere into a hollow shell. Nesting a negative-radius sphere
    /// inside a dielectric one models a thin glass bubble.
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: MaterialType,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: MaterialType) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        // Vector from ray origin to sphere center
        let oc = self.center - r.origin;

        // Half-b quadratic equation coefficients
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        // Fill the hit record; dividing by the signed radius flips the
        // normal for hollow (negative-radius) spheres
        rec.t = root;
        rec.p = r.at(rec.t);
        let outward_normal = (rec.p - self.center) / self.radius;
        rec.set_face_normal(r, outward_normal);
        rec.material = self.material;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_material() -> MaterialType {
        MaterialType::lambertian(Vec3A::splat(0.5))
    }

    fn hit(sphere: &Sphere, r: &Ray) -> Option<HitRecord> {
        let mut rec = HitRecord::default();
        sphere
            .hit(r, Interval::new(0.001, f32::INFINITY), &mut rec)
            .then_some(rec)
    }

    #[test]
    fn test_head_on_hit_at_first_crossing() {
        // Sphere at distance d, radius r, hit head-on: t == d - r
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 0.5, test_material());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let rec = hit(&sphere, &r).expect("ray should hit");
        assert!((rec.t - 2.5).abs() < 1e-5);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_miss_returns_false() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 0.5, test_material());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));

        assert!(hit(&sphere, &r).is_none());
    }

    #[test]
    fn test_intersection_is_translation_consistent() {
        let c = Vec3A::new(1.5, -2.0, -4.0);
        let at_c = Sphere::new(c, 0.7, test_material());
        let at_origin = Sphere::new(Vec3A::ZERO, 0.7, test_material());

        let origin = Vec3A::new(0.3, 0.1, 1.0);
        let dir = Vec3A::new(0.25, -0.4, -1.0);
        let r = Ray::new(origin, dir);
        let r_translated = Ray::new(origin - c, dir);

        let a = hit(&at_c, &r).expect("ray should hit");
        let b = hit(&at_origin, &r_translated).expect("translated ray should hit");
        assert!((a.t - b.t).abs() < 1e-5);
        assert!((a.normal - b.normal).length() < 1e-4);
    }

    #[test]
    fn test_ray_from_inside_flips_normal() {
        let sphere = Sphere::new(Vec3A::ZERO, 2.0, test_material());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(1.0, 0.0, 0.0));

        let rec = hit(&sphere, &r).expect("interior ray should hit the shell");
        assert!(!rec.front_face);
        // Geometric outward normal is +x; stored normal faces the ray origin
        assert!((rec.normal - Vec3A::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_negative_radius_inverts_normal() {
        let solid = Sphere::new(Vec3A::new(0.0, 0.0, -2.0), 0.5, test_material());
        let hollow = Sphere::new(Vec3A::new(0.0, 0.0, -2.0), -0.5, test_material());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let a = hit(&solid, &r).expect("solid sphere hit");
        let b = hit(&hollow, &r).expect("hollow sphere hit");

        // Same geometry, same t
        assert!((a.t - b.t).abs() < 1e-5);
        // The signed radius flips the face classification
        assert!(a.front_face);
        assert!(!b.front_face);
        // Both stored normals still face the incoming ray
        assert!(a.normal.dot(r.direction) < 0.0);
        assert!(b.normal.dot(r.direction) < 0.0);
    }

    #[test]
    fn test_boundary_touch_is_rejected() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 0.5, test_material());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();

        // Both roots (2.5 and 3.5) land exactly on interval endpoints
        assert!(!sphere.hit(&r, Interval::new(2.5, 3.5), &mut rec));
    }
}
