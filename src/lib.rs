//! Glimmer sphere path tracer
//!
//! Renders scenes of spheres with diffuse, metallic and dielectric materials
//! using recursive stochastic ray tracing. Outputs plain-text PPM or PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod sphere;
pub mod hittable;
pub mod interval;
pub mod camera;
pub mod random;
pub mod material;
pub mod color;
pub mod output;
pub mod scenes;
