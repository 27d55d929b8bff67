//! Pixel post-processing: gamma correction and 8-bit quantization.
//!
//! Averaged sample colors are linear; display output goes through a gamma-2
//! transfer (square root) and is then quantized to the [0,255] range.
//!
//! Channels are expected in [0,1] by this point. There is no explicit clamp:
//! the final integer cast saturates at 255, but feeding out-of-range channels
//! (from a non-energy-conserving material, say) is a caller error rather than
//! something this stage papers over.

use crate::material::Color;

/// Convert a linear channel value to gamma space (gamma 2, i.e. square root).
///
/// Non-positive inputs map to zero so a stray negative never reaches `sqrt`.
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct and quantize a color to one 8-bit value per channel.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    [
        (255.999 * linear_to_gamma(color.x)) as u8,
        (255.999 * linear_to_gamma(color.y)) as u8,
        (255.999 * linear_to_gamma(color.z)) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3A;

    #[test]
    fn test_gamma_is_inverse_of_squaring() {
        let mut linear = 0.0f32;
        while linear <= 1.0 {
            let g = linear_to_gamma(linear);
            assert!((g * g - linear).abs() < 1e-6);
            linear += 0.01;
        }
    }

    #[test]
    fn test_gamma_guards_non_positive_inputs() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-0.5), 0.0);
    }

    #[test]
    fn test_quantization_endpoints() {
        assert_eq!(to_rgb8(Vec3A::ZERO), [0, 0, 0]);
        assert_eq!(to_rgb8(Vec3A::ONE), [255, 255, 255]);
        // 0.25 in linear is 0.5 after gamma: floor(255.999 * 0.5) = 127
        assert_eq!(to_rgb8(Vec3A::splat(0.25)), [127, 127, 127]);
    }

    #[test]
    fn test_out_of_range_channels_saturate() {
        // Not clamped before gamma; the integer cast pins the result at 255
        assert_eq!(to_rgb8(Vec3A::splat(4.0)), [255, 255, 255]);
    }
}
