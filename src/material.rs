//! Material system for ray tracing.
//!
//! Implements the scattering model: Lambertian (diffuse), Metal (specular)
//! and Dielectric (transparent), plus two deliberately non-physical
//! dielectric strategies kept as comparison fixtures.

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are nominally in [0,1] but intermediate sample sums may exceed it.
pub type Color = Vec3A;

/// Material types for ray tracing.
///
/// Closed enum representing the surface materials a sphere can carry.
/// Materials are small Copy values: spheres store them by value, so several
/// spheres can share one configuration without ownership bookkeeping.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub enum MaterialType {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Vec3A,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Vec3A,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        fuzz: f32,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f32,
        /// Whether the Schlick reflectance test participates in the
        /// reflect-vs-refract decision. Configure before rendering starts;
        /// disabling it leaves only the total-internal-reflection branch.
        use_reflectance: bool,
    },

    /// Non-physical dielectric that always refracts.
    ///
    /// Skips the reflectance and total-internal-reflection branches entirely.
    /// Kept as an opt-in fixture for comparison renders, not a production
    /// material.
    DielectricAlwaysRefract {
        /// Index of refraction.
        refraction_index: f32,
    },

    /// Non-physical dielectric reproducing a historical defect.
    ///
    /// The sign flip before the square root in the refraction formula is
    /// omitted, and the attenuation is blacked out at grazing-ish angles
    /// (cos below 0.3). Kept as an opt-in fixture for comparison renders.
    DielectricBuggy {
        /// Index of refraction.
        refraction_index: f32,
    },
}

impl MaterialType {
    /// Create a Lambertian material with the given albedo.
    pub fn lambertian(albedo: Color) -> Self {
        MaterialType::Lambertian { albedo }
    }

    /// Create a metal material; fuzz values above 1 are clamped here.
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        MaterialType::Metal {
            albedo,
            fuzz: fuzz.min(1.0),
        }
    }

    /// Create a physically correct dielectric with Schlick reflectance.
    pub fn dielectric(refraction_index: f32) -> Self {
        MaterialType::Dielectric {
            refraction_index,
            use_reflectance: true,
        }
    }

    /// Create a dielectric with the Schlick reflectance test switched off.
    pub fn dielectric_without_reflectance(refraction_index: f32) -> Self {
        MaterialType::Dielectric {
            refraction_index,
            use_reflectance: false,
        }
    }

    /// Compute ray scattering for this material.
    ///
    /// Returns true if the ray scatters, false if absorbed.
    /// Sets attenuation color and scattered ray direction.
    pub fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool {
        match *self {
            MaterialType::Lambertian { albedo } => {
                scatter_lambertian(albedo, rec, attenuation, scattered)
            }
            MaterialType::Metal { albedo, fuzz } => {
                scatter_metal(albedo, fuzz, r_in, rec, attenuation, scattered)
            }
            MaterialType::Dielectric {
                refraction_index,
                use_reflectance,
            } => scatter_dielectric(
                refraction_index,
                use_reflectance,
                r_in,
                rec,
                attenuation,
                scattered,
            ),
            MaterialType::DielectricAlwaysRefract { refraction_index } => {
                scatter_always_refract(refraction_index, r_in, rec, attenuation, scattered)
            }
            MaterialType::DielectricBuggy { refraction_index } => {
                scatter_buggy(refraction_index, r_in, rec, attenuation, scattered)
            }
        }
    }
}

/// Lambertian diffuse scattering with cosine-weighted distribution.
fn scatter_lambertian(
    albedo: Vec3A,
    rec: &HitRecord,
    attenuation: &mut Color,
    scattered: &mut Ray,
) -> bool {
    let mut scatter_direction = rec.normal + random::random_unit_vector();

    // Catch the edge case where the random unit vector is nearly opposite
    // to the surface normal and cancels the scatter direction
    if random::near_zero(scatter_direction) {
        scatter_direction = rec.normal;
    }

    *scattered = Ray::new(rec.p, scatter_direction);
    *attenuation = albedo;
    true
}

/// Metallic reflection with optional surface roughness.
fn scatter_metal(
    albedo: Vec3A,
    fuzz: f32,
    r_in: &Ray,
    rec: &HitRecord,
    attenuation: &mut Color,
    scattered: &mut Ray,
) -> bool {
    let reflected = reflect(r_in.direction.normalize(), rec.normal);
    let direction = reflected + fuzz * random::random_unit_vector();
    *scattered = Ray::new(rec.p, direction);
    *attenuation = albedo;
    // A fuzzed direction can end up below the surface; treat that as absorbed
    scattered.direction.dot(rec.normal) > 0.0
}

/// Dielectric scattering with reflection and refraction using Schlick's
/// approximation for the Fresnel term.
fn scatter_dielectric(
    refraction_index: f32,
    use_reflectance: bool,
    r_in: &Ray,
    rec: &HitRecord,
    attenuation: &mut Color,
    scattered: &mut Ray,
) -> bool {
    *attenuation = Vec3A::ONE; // Glass doesn't attenuate light

    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;

    let direction = if cannot_refract
        || (use_reflectance && schlick_reflectance(cos_theta, ri) > random::random_f32())
    {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    *scattered = Ray::new(rec.p, direction);
    true
}

/// Always-refract dielectric: no reflectance, no total internal reflection.
fn scatter_always_refract(
    refraction_index: f32,
    r_in: &Ray,
    rec: &HitRecord,
    attenuation: &mut Color,
    scattered: &mut Ray,
) -> bool {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();
    let refracted = refract(unit_direction, rec.normal, ri);

    *attenuation = Vec3A::ONE;
    *scattered = Ray::new(rec.p, refracted);
    true
}

/// Defective refraction kept for comparison renders.
fn scatter_buggy(
    refraction_index: f32,
    r_in: &Ray,
    rec: &HitRecord,
    attenuation: &mut Color,
    scattered: &mut Ray,
) -> bool {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();

    // Refraction inlined so the defect is visible: the parallel component
    // is missing its minus sign before the square root
    let cos_theta = (-unit_direction).dot(rec.normal);
    let r_out_perp = ri * (unit_direction + cos_theta * rec.normal);
    let r_out_parallel = (1.0 - r_out_perp.length_squared()).abs().sqrt() * rec.normal;

    *scattered = Ray::new(rec.p, r_out_perp + r_out_parallel);

    // Blacks out shallow hits, producing the characteristic dark rim
    *attenuation = if cos_theta < 0.3 {
        Color::ZERO
    } else {
        Vec3A::ONE
    };

    true
}

/// Reflect a vector off a surface using the law of reflection.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through an interface using Snell's law.
pub fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Compute Fresnel reflectance using Schlick's approximation.
pub fn schlick_reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
