//! Camera for ray generation and scene rendering.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Color;
use crate::random;
use crate::ray::Ray;

/// What the integrator computes for a hit surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Full recursive light transport through the hit material.
    Materials,
    /// Surface-normal visualization `(n + 1) / 2`, no bounces.
    Normals,
}

/// Camera for ray generation and scene rendering.
///
/// Uses a pinhole camera model with support for depth of field and
/// anti-aliasing via multi-sampling. Configure the public fields, then
/// [`Camera::render`] derives the viewport once and traces the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Ratio of image width over height
    pub aspect_ratio: f32,
    /// Number of random samples for each pixel (for anti-aliasing)
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces (recursion depth limit)
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Point camera is looking from (camera position)
    pub lookfrom: Vec3A,
    /// Point camera is looking at (look target)
    pub lookat: Vec3A,
    /// Camera-relative "up" direction vector
    pub vup: Vec3A,
    /// Variation angle of rays through each pixel, in degrees (defocus blur control)
    pub defocus_angle: f32,
    /// Distance from camera lookfrom point to plane of perfect focus.
    ///
    /// Zero means "use the lookfrom to lookat distance".
    pub focus_dist: f32,
    /// Minimum accepted hit parameter, suppressing self-intersection acne
    pub hit_t_min: f32,
    /// Randomize the sample position within each pixel cell.
    ///
    /// Disabling this gives a deterministic single-sample render, which the
    /// end-to-end tests rely on.
    pub jitter: bool,
    /// Integrator mode
    pub shading: Shading,

    /// Rendered image height, derived from width and aspect ratio
    image_height: u32,
    /// Camera position in world space (same as lookfrom)
    center: Vec3A,
    /// World position of the top-left pixel (pixel 0,0)
    pixel00_loc: Vec3A,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pixel_delta_u: Vec3A,
    /// Offset vector from pixel to pixel vertically (down direction)
    pixel_delta_v: Vec3A,
    /// Color scale factor for a sum of pixel samples (1.0 / samples_per_pixel)
    pixel_samples_scale: f32,
    /// Camera frame basis vector pointing right (u)
    u: Vec3A,
    /// Camera frame basis vector pointing up (v)
    v: Vec3A,
    /// Camera frame basis vector pointing opposite view direction (w)
    w: Vec3A,
    /// Defocus disk horizontal radius vector
    defocus_disk_u: Vec3A,
    /// Defocus disk vertical radius vector
    defocus_disk_v: Vec3A,
    /// Flag to track whether camera parameters have been calculated
    initialized: bool,
}

impl Camera {
    /// Creates a positionable camera with default settings.
    ///
    /// Default: 400px wide at 16:9, 50 samples per pixel, 90 degree FOV,
    /// origin looking down -Z, no defocus blur.
    pub fn new() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 50,
            max_depth: 50,
            vfov: 90.0,
            lookfrom: Vec3A::ZERO,
            lookat: Vec3A::new(0.0, 0.0, -1.0),
            vup: Vec3A::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 0.0,
            hit_t_min: 0.001,
            jitter: true,
            shading: Shading::Materials,
            image_height: 0,
            center: Vec3A::ZERO,
            pixel00_loc: Vec3A::ZERO,
            pixel_delta_u: Vec3A::ZERO,
            pixel_delta_v: Vec3A::ZERO,
            pixel_samples_scale: 1.0,
            u: Vec3A::ZERO,
            v: Vec3A::ZERO,
            w: Vec3A::ZERO,
            defocus_disk_u: Vec3A::ZERO,
            defocus_disk_v: Vec3A::ZERO,
            initialized: false,
        }
    }

    /// Creates the fixed axis-aligned camera at the origin looking down -Z.
    ///
    /// With a 90 degree FOV and unit focus distance the viewport is exactly
    /// two units tall at focal length one. No anti-acne epsilon is applied.
    pub fn basic() -> Self {
        Self {
            focus_dist: 1.0,
            hit_t_min: 0.0,
            ..Self::new()
        }
    }

    /// Rendered image height, valid after initialization.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Initialize camera parameters based on current settings.
    ///
    /// Sets up the camera coordinate system and viewport for ray generation.
    /// Automatically called by render() and idempotent afterwards.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        self.image_height = ((self.image_width as f32 / self.aspect_ratio) as u32).max(1);

        self.pixel_samples_scale = 1.0 / self.samples_per_pixel as f32;

        // Set camera center to lookfrom position
        self.center = self.lookfrom;

        // An unassigned focus distance falls back to the look-at distance
        let focus_dist = if self.focus_dist > 0.0 {
            self.focus_dist
        } else {
            (self.lookat - self.lookfrom).length()
        };

        // Determine viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * focus_dist;
        let viewport_width = viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Calculate the u,v,w unit basis vectors for the camera coordinate frame
        self.w = (self.lookfrom - self.lookat).normalize(); // Points opposite view direction
        self.u = self.vup.cross(self.w).normalize(); // Points to camera right
        self.v = self.w.cross(self.u); // Points to camera up

        // Calculate the vectors across the horizontal and down the vertical viewport edges
        let viewport_u = viewport_width * self.u; // Vector across viewport horizontal edge
        let viewport_v = viewport_height * -self.v; // Vector down viewport vertical edge (negative v)

        // Calculate the horizontal and vertical delta vectors from pixel to pixel
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Calculate the location of the upper left pixel; pixels sample the
        // middle of their viewport grid cell, hence the half-delta offset
        let viewport_upper_left =
            self.center - (focus_dist * self.w) - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Calculate the camera defocus disk basis vectors
        let defocus_radius = focus_dist * (self.defocus_angle.to_radians() / 2.0).tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        self.initialized = true;
    }

    /// Renders the scene and returns a linear HDR image buffer.
    ///
    /// Generates rays through each pixel in row-major order, traces them
    /// through the scene, and averages the accumulated samples. The returned
    /// channel values are linear; gamma correction and quantization happen in
    /// the output stage.
    pub fn render(&mut self, world: &dyn Hittable) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        self.initialize();

        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} with {} samples per pixel, max depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(self.image_height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        for j in 0..self.image_height {
            for i in 0..self.image_width {
                let mut pixel_color = Color::ZERO;

                // Sample multiple rays per pixel for anti-aliasing
                for _sample in 0..self.samples_per_pixel {
                    let r = self.get_ray(i, j);
                    pixel_color += self.ray_color(&r, world, self.max_depth);
                }

                // Average the samples
                pixel_color *= self.pixel_samples_scale;
                image.put_pixel(i, j, Rgb([pixel_color.x, pixel_color.y, pixel_color.z]));
            }
            debug!("Scanline {} of {} done", j + 1, self.image_height);
            pb.inc(1);
        }

        pb.finish();
        let generation_time = generation_start.elapsed();
        info!("Image generated in {:.2?}", generation_time);

        image
    }

    /// Generate a ray through a pixel with random sampling.
    ///
    /// Uses random sampling within the pixel for anti-aliasing and optionally
    /// samples from the defocus disk for depth-of-field blur.
    fn get_ray(&self, i: u32, j: u32) -> Ray {
        let offset = self.sample_square();
        let pixel_sample = self.pixel00_loc
            + ((i as f32 + offset.x) * self.pixel_delta_u)
            + ((j as f32 + offset.y) * self.pixel_delta_v);

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample()
        };
        let ray_direction = pixel_sample - ray_origin;

        Ray::new(ray_origin, ray_direction)
    }

    /// Random offset within the [-0.5, 0.5) square for pixel sampling.
    ///
    /// Zero when jitter is disabled, so every sample goes through the pixel
    /// center.
    fn sample_square(&self) -> Vec3A {
        if !self.jitter {
            return Vec3A::ZERO;
        }
        Vec3A::new(
            random::random_f32() - 0.5,
            random::random_f32() - 0.5,
            0.0,
        )
    }

    /// Sample random point on the defocus disk for depth-of-field blur.
    fn defocus_disk_sample(&self) -> Vec3A {
        let p = random::random_in_unit_disk();
        self.center + (p.x * self.defocus_disk_u) + (p.y * self.defocus_disk_v)
    }

    /// Trace a ray and compute its color contribution.
    ///
    /// Recursively follows ray bounces through the scene, consulting the hit
    /// material for attenuation and the next ray direction. Returns the sky
    /// gradient when nothing is hit and black once the bounce budget runs out.
    fn ray_color(&self, r: &Ray, world: &dyn Hittable, depth: u32) -> Color {
        // If we've exceeded the ray bounce limit, no more light is gathered
        if depth == 0 {
            return Color::ZERO;
        }

        let mut rec = HitRecord::default();

        if world.hit(r, Interval::new(self.hit_t_min, f32::INFINITY), &mut rec) {
            if self.shading == Shading::Normals {
                // Map the unit normal from [-1,1] to displayable [0,1]
                return 0.5 * (rec.normal + Vec3A::ONE);
            }

            let mut attenuation = Color::ZERO;
            let mut scattered = Ray::new(Vec3A::ZERO, Vec3A::ZERO);

            if rec.material.scatter(r, &rec, &mut attenuation, &mut scattered) {
                return attenuation * self.ray_color(&scattered, world, depth - 1);
            }
            return Color::ZERO;
        }

        background(r)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Sky background: a vertical blend between white and light blue.
fn background(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    // Blend factor from the Y component: -1 (down) gives 0, +1 (up) gives 1
    let a = 0.5 * (unit_direction.y + 1.0);

    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}
