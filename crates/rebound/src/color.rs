//! RGBA colors.
//!
//! Colors are authored as 8-bit sRGB values (the familiar `0..=255` palette).
//! The GPU path converts them to linear floats because the surface format is
//! sRGB and encodes on write.

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const LIME: Self = Self::rgb(0, 158, 47);

    /// Opaque color from RGB.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear-space RGBA floats. Alpha is linear already and only rescaled.
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f32 / 255.0,
        ]
    }

    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_linear();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn black_and_white_are_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::WHITE.to_linear();
        for channel in white {
            assert_relative_eq!(channel, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn mid_gray_is_darker_in_linear_space() {
        let [r, _, _, _] = Color::rgb(128, 128, 128).to_linear();
        assert_relative_eq!(r, 0.2158, epsilon = 1e-3);
    }

    #[test]
    fn alpha_is_only_rescaled() {
        let [_, _, _, a] = Color::rgba(0, 0, 0, 51).to_linear();
        assert_relative_eq!(a, 0.2, epsilon = 1e-6);
    }
}
