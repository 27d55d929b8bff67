//! Random sampling for ray tracing.
//!
//! Provides thread-safe random number generation with a ChaCha20 PRNG and the
//! rejection-sampling helpers the renderer needs: vectors inside the unit
//! sphere and disk, unit vectors, and hemisphere-oriented directions.
//!
//! Each thread owns its own generator stream, so a future row-parallel
//! renderer gets independent streams for free. Tests call [`reseed`] to get a
//! deterministic sequence.

use glam::Vec3A;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Reseed the calling thread's generator with a fixed seed.
///
/// Subsequent draws on this thread form a deterministic sequence.
pub fn reseed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32()
}

/// Generate a random Vec3A with components in [0.0, 1.0)
pub fn random_vec3a() -> Vec3A {
    Vec3A::new(random_f32(), random_f32(), random_f32())
}

/// Generate a random Vec3A with components in [min, max)
pub fn random_vec3a_range(min: f32, max: f32) -> Vec3A {
    Vec3A::new(
        random_f32_range(min, max),
        random_f32_range(min, max),
        random_f32_range(min, max),
    )
}

/// True if every component of the vector is below 1e-8 in magnitude.
///
/// Used to catch degenerate scatter directions before they reach a normalize.
pub fn near_zero(v: Vec3A) -> bool {
    const EPS: f32 = 1e-8;
    v.x.abs() < EPS && v.y.abs() < EPS && v.z.abs() < EPS
}

/// Generate a random point inside the unit sphere by rejection sampling.
///
/// Draws uniform candidates in the [-1,1) cube until one lands inside the
/// sphere. Expected acceptance rate is about 52%.
pub fn random_in_unit_sphere() -> Vec3A {
    loop {
        let p = random_vec3a_range(-1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random unit vector uniformly distributed on the unit sphere.
///
/// Normalizes a rejection-sampled interior point. Candidates too short to
/// normalize safely are rejected along with those outside the sphere.
pub fn random_unit_vector() -> Vec3A {
    loop {
        let p = random_vec3a_range(-1.0, 1.0);
        let len_sq = p.length_squared();
        if len_sq > 1e-12 && len_sq < 1.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// Generate a random unit vector in the hemisphere oriented by the given normal.
pub fn random_on_hemisphere(normal: Vec3A) -> Vec3A {
    let on_unit_sphere = random_unit_vector();
    if on_unit_sphere.dot(normal) > 0.0 {
        // In the same hemisphere as the normal
        on_unit_sphere
    } else {
        // Flip to the correct hemisphere
        -on_unit_sphere
    }
}

/// Generate a random point inside the unit disk (z = 0) by rejection sampling.
pub fn random_in_unit_disk() -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random RGB color with components in [0.0, 1.0).
pub fn random_color() -> Vec3A {
    random_vec3a()
}

/// Generate a random RGB color with components in [min, max).
pub fn random_color_range(min: f32, max: f32) -> Vec3A {
    random_vec3a_range(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reseed_is_deterministic() {
        reseed(7);
        let a: Vec<f32> = (0..8).map(|_| random_f32()).collect();
        reseed(7);
        let b: Vec<f32> = (0..8).map(|_| random_f32()).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_random_f32_range_bounds() {
        reseed(1);
        for _ in 0..1000 {
            let x = random_f32_range(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_unit_sphere_is_interior() {
        reseed(2);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere().length_squared() < 1.0);
        }
    }

    #[test]
    fn test_random_unit_vector_has_unit_length() {
        reseed(3);
        for _ in 0..1000 {
            let v = random_unit_vector();
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_random_on_hemisphere_faces_normal() {
        reseed(4);
        let normal = Vec3A::new(0.0, 1.0, 0.0);
        for _ in 0..1000 {
            assert!(random_on_hemisphere(normal).dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_random_in_unit_disk_is_planar_interior() {
        reseed(5);
        for _ in 0..1000 {
            let p = random_in_unit_disk();
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3A::ZERO));
        assert!(near_zero(Vec3A::splat(1e-9)));
        assert!(!near_zero(Vec3A::new(1e-9, 1e-9, 1e-7)));
    }
}
