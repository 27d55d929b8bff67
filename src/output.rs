//! Image output: plain-text PPM and 8-bit PNG encoders.
//!
//! Both formats consume the linear HDR frame produced by the render loop and
//! push every channel through the gamma/quantization pipeline in [`crate::color`].

use crate::color::to_rgb8;
use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Linear f32 RGB frame as produced by the renderer.
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Encode the image as plain-text PPM (P3).
///
/// Header is the magic token, width and height, and the maximum channel
/// value; the body is one RGB triplet per line in row-major order with a
/// blank line after each pixel row.
pub fn write_ppm<W: Write>(image: &HdrImage, out: &mut W) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "255")?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let pixel = image.get_pixel(x, y);
            let [r, g, b] = to_rgb8(Vec3A::new(pixel[0], pixel[1], pixel[2]));
            writeln!(out, "{} {} {}", r, g, b)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    Ok(())
}

/// Save the image as a PPM file.
///
/// Logs a warning on I/O failure instead of panicking.
pub fn save_ppm(image: &HdrImage, output_path: &str) {
    let result = File::create(output_path)
        .and_then(|file| write_ppm(image, &mut BufWriter::new(file)));

    match result {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image {}: {}", output_path, e),
    }
}

/// Save the image as an 8-bit PNG with gamma correction.
///
/// Logs a warning on I/O failure instead of panicking.
pub fn save_png(image: &HdrImage, output_path: &str) {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);
            Rgb(to_rgb8(Vec3A::new(pixel[0], pixel[1], pixel[2])))
        });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image {}: {}", output_path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_framing() {
        let mut image: HdrImage = ImageBuffer::new(2, 2);
        image.put_pixel(0, 0, Rgb([1.0, 1.0, 1.0]));
        image.put_pixel(1, 0, Rgb([0.0, 0.0, 0.0]));
        image.put_pixel(0, 1, Rgb([0.25, 0.25, 0.25]));
        image.put_pixel(1, 1, Rgb([1.0, 0.0, 0.25]));

        let mut buf = Vec::new();
        write_ppm(&image, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let expected = "P3\n2 2\n255\n\
                        255 255 255\n0 0 0\n\n\
                        127 127 127\n255 0 127\n\n\n";
        assert_eq!(text, expected);
    }
}
