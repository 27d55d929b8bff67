//! Demo scene builders.
//!
//! Each builder populates a sphere list and pairs it with a configured
//! camera. Image size, sample count and bounce budget stay at their camera
//! defaults so the caller can override them.

use crate::camera::Camera;
use crate::hittable::HittableList;
use crate::material::MaterialType;
use crate::random;
use crate::sphere::Sphere;
use glam::Vec3A;

/// Ground sphere, matte center, and two metals with different roughness.
pub fn three_spheres() -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let ground = MaterialType::lambertian(Vec3A::new(0.8, 0.8, 0.0));
    let center = MaterialType::lambertian(Vec3A::new(0.7, 0.3, 0.3));
    let left = MaterialType::metal(Vec3A::new(0.8, 0.8, 0.8), 0.3);
    let right = MaterialType::metal(Vec3A::new(0.8, 0.6, 0.2), 1.0);

    world.add(Box::new(Sphere::new(Vec3A::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5, center)));
    world.add(Box::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, left)));
    world.add(Box::new(Sphere::new(Vec3A::new(1.0, 0.0, -1.0), 0.5, right)));

    let mut camera = Camera::basic();
    camera.hit_t_min = 0.001;

    (world, camera)
}

/// Side-by-side comparison of the non-physical dielectric fixtures.
///
/// The left sphere always refracts, the right one carries the historical
/// refraction defect with its dark rim.
pub fn glass_comparison() -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let ground = MaterialType::lambertian(Vec3A::new(0.8, 0.8, 0.0));
    let center = MaterialType::lambertian(Vec3A::new(0.1, 0.2, 0.5));
    let left = MaterialType::DielectricAlwaysRefract { refraction_index: 1.5 };
    let right = MaterialType::DielectricBuggy { refraction_index: 1.5 };

    world.add(Box::new(Sphere::new(Vec3A::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5, center)));
    world.add(Box::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, left)));
    world.add(Box::new(Sphere::new(Vec3A::new(1.0, 0.0, -1.0), 0.5, right)));

    let mut camera = Camera::basic();
    camera.hit_t_min = 0.001;

    (world, camera)
}

/// Glass shell on the left via a nested negative-radius sphere.
pub fn hollow_glass() -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let ground = MaterialType::lambertian(Vec3A::new(0.8, 0.8, 0.0));
    let center = MaterialType::lambertian(Vec3A::new(0.1, 0.2, 0.5));
    let glass = MaterialType::dielectric(1.5);
    let right = MaterialType::metal(Vec3A::new(0.8, 0.6, 0.2), 0.0);

    world.add(Box::new(Sphere::new(Vec3A::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5, center)));
    world.add(Box::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, glass)));
    // The inner negative radius turns the glass sphere into a thin shell
    world.add(Box::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), -0.4, glass)));
    world.add(Box::new(Sphere::new(Vec3A::new(1.0, 0.0, -1.0), 0.5, right)));

    let mut camera = Camera::basic();
    camera.hit_t_min = 0.001;

    (world, camera)
}

/// Two touching spheres filling a 90 degree field of view.
pub fn fov_pair() -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let r = std::f32::consts::FRAC_PI_4.cos();
    let left = MaterialType::lambertian(Vec3A::new(0.0, 0.0, 1.0));
    let right = MaterialType::lambertian(Vec3A::new(1.0, 0.0, 0.0));

    world.add(Box::new(Sphere::new(Vec3A::new(-r, 0.0, -1.0), r, left)));
    world.add(Box::new(Sphere::new(Vec3A::new(r, 0.0, -1.0), r, right)));

    (world, Camera::new())
}

/// The hollow-glass scene viewed from the side with a wide aperture.
pub fn defocus() -> (HittableList, Camera) {
    let (world, _) = hollow_glass();

    let mut camera = Camera::new();
    camera.lookfrom = Vec3A::new(-2.0, 2.0, 1.0);
    camera.lookat = Vec3A::new(0.0, 0.0, -1.0);
    camera.vfov = 20.0;
    camera.focus_dist = 3.4;
    camera.defocus_angle = 10.0;

    (world, camera)
}

/// Cover scene: a 22x22 grid of random small spheres around three large ones.
pub fn cover() -> (HittableList, Camera) {
    let mut world = HittableList::new();

    let ground = MaterialType::lambertian(Vec3A::splat(0.5));
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, -1000.0, 0.0), 1000.0, ground)));

    let reference = Vec3A::new(4.0, 0.2, 0.0);
    for a in -11..11 {
        for b in -11..11 {
            let center = Vec3A::new(
                a as f32 + 0.9 * random::random_f32(),
                0.2,
                b as f32 + 0.9 * random::random_f32(),
            );

            // Keep the small spheres clear of the large feature spheres
            if (center - reference).length() <= 0.9 {
                continue;
            }

            let choose_mat = random::random_f32();
            let material = if choose_mat < 0.8 {
                let albedo = random::random_color() * random::random_color();
                MaterialType::lambertian(albedo)
            } else if choose_mat < 0.95 {
                let albedo = random::random_color_range(0.5, 1.0);
                let fuzz = random::random_f32_range(0.0, 0.5);
                MaterialType::metal(albedo, fuzz)
            } else {
                MaterialType::dielectric(1.5)
            };

            world.add(Box::new(Sphere::new(center, 0.2, material)));
        }
    }

    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 1.0, 0.0),
        1.0,
        MaterialType::dielectric(1.5),
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(-4.0, 1.0, 0.0),
        1.0,
        MaterialType::lambertian(Vec3A::new(0.4, 0.2, 0.1)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(4.0, 1.0, 0.0),
        1.0,
        MaterialType::metal(Vec3A::new(0.7, 0.6, 0.5), 0.0),
    )));

    let mut camera = Camera::new();
    camera.lookfrom = Vec3A::new(13.0, 2.0, 3.0);
    camera.lookat = Vec3A::ZERO;
    camera.vfov = 20.0;
    camera.focus_dist = 10.0;
    camera.defocus_angle = 0.6;

    (world, camera)
}
