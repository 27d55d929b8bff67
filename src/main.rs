use clap::Parser;
use log::info;

mod camera;
mod cli;
mod color;
mod hittable;
mod interval;
mod logger;
mod material;
mod output;
mod random;
mod ray;
mod scenes;
mod sphere;

use cli::{Args, SceneChoice};
use logger::init_logger;
use output::{save_png, save_ppm};

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Glimmer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image width: {}, aspect ratio: {:.4}, samples per pixel: {}, max depth: {}",
        args.width, args.aspect_ratio, args.samples_per_pixel, args.max_depth
    );

    let (world, mut camera) = match args.scene {
        SceneChoice::ThreeSpheres => scenes::three_spheres(),
        SceneChoice::GlassComparison => scenes::glass_comparison(),
        SceneChoice::HollowGlass => scenes::hollow_glass(),
        SceneChoice::FovPair => scenes::fov_pair(),
        SceneChoice::Defocus => scenes::defocus(),
        SceneChoice::Cover => scenes::cover(),
    };

    camera.image_width = args.width;
    camera.aspect_ratio = args.aspect_ratio;
    camera.samples_per_pixel = args.samples_per_pixel;
    camera.max_depth = args.max_depth;

    let image = camera.render(&world);

    // Save image based on file extension
    if args.output.ends_with(".ppm") {
        save_ppm(&image, &args.output);
    } else if args.output.ends_with(".png") {
        save_png(&image, &args.output);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .png and .ppm formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
