//! Color formatting and palette matching.
//!
//! Figma delivers colors as `0.0..=1.0` floats. Every display path scales a
//! channel by 255 and rounds half-up before formatting.

/// 8-bit RGB triple after scaling Figma's float channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_to_u8(r),
            g: channel_to_u8(g),
            b: channel_to_u8(b),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn brightness(self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }

    fn spread(self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }
}

/// Scale a `0..=1` channel to `0..=255`, rounding half-up.
pub fn channel_to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Format a number the way the output formats expect: integers without a
/// trailing `.0`, everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Normalizer color: `#rrggbb` when fully opaque, `rgba(r,g,b,a)` otherwise.
pub fn format_color(r: f64, g: f64, b: f64, a: Option<f64>) -> String {
    let rgb = Rgb8::from_unit(r, g, b);
    match a {
        None => rgb.to_hex(),
        Some(alpha) if alpha == 1.0 => rgb.to_hex(),
        Some(alpha) => format!(
            "rgba({},{},{},{})",
            rgb.r,
            rgb.g,
            rgb.b,
            format_number(alpha)
        ),
    }
}

/// Optimizer color: `rgb(r,g,b)` when fully opaque, `rgba(r,g,b,a)` otherwise.
pub fn format_css_rgb(r: f64, g: f64, b: f64, a: Option<f64>) -> String {
    let rgb = Rgb8::from_unit(r, g, b);
    match a {
        Some(alpha) if alpha != 1.0 => format!(
            "rgba({},{},{},{})",
            rgb.r,
            rgb.g,
            rgb.b,
            format_number(alpha)
        ),
        _ => format!("rgb({},{},{})", rgb.r, rgb.g, rgb.b),
    }
}

const GRAY_LADDER: &[(f64, &str)] = &[
    (20.0, "gray-950"),
    (40.0, "gray-900"),
    (65.0, "gray-800"),
    (85.0, "gray-700"),
    (110.0, "gray-600"),
    (140.0, "gray-500"),
    (170.0, "gray-400"),
    (200.0, "gray-300"),
    (225.0, "gray-200"),
    (243.0, "gray-100"),
    (255.0, "gray-50"),
];

const GRAY_TOLERANCE: u8 = 10;

/// Map a color onto the default palette.
///
/// Returns `None` when nothing matches, which callers treat as a request to
/// suggest a custom palette entry.
pub fn color_class(rgb: Rgb8, alpha: f64) -> Option<String> {
    match (rgb.r, rgb.g, rgb.b) {
        (0, 0, 0) => return Some("black".to_string()),
        (255, 255, 255) => return Some("white".to_string()),
        _ => {}
    }

    if rgb.spread() <= GRAY_TOLERANCE {
        let brightness = rgb.brightness();
        return GRAY_LADDER
            .iter()
            .find(|(limit, _)| brightness <= *limit)
            .map(|(_, class)| class.to_string());
    }

    if rgb.r > 150 && rgb.g < 100 && rgb.b < 100 {
        let class = match rgb.r {
            220.. => "red-500",
            185.. => "red-600",
            _ => "red-700",
        };
        return Some(class.to_string());
    }

    if rgb.b > 150 && rgb.r < 100 && rgb.g < 150 {
        let class = match rgb.b {
            220.. => "blue-500",
            185.. => "blue-600",
            _ => "blue-700",
        };
        return Some(class.to_string());
    }

    if alpha < 0.2 {
        return Some("transparent".to_string());
    }
    if alpha < 0.95 {
        return Some(format!("opacity-{}", (alpha * 100.0).round() as i64));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_format_as_hex() {
        assert_eq!(format_color(1.0, 1.0, 1.0, Some(1.0)), "#ffffff");
        assert_eq!(format_color(0.0, 0.4, 1.0, None), "#0066ff");
    }

    #[test]
    fn translucent_colors_format_as_rgba() {
        assert_eq!(format_color(0.0, 0.0, 0.0, Some(0.5)), "rgba(0,0,0,0.5)");
        assert_eq!(
            format_css_rgb(1.0, 0.0, 0.0, Some(0.25)),
            "rgba(255,0,0,0.25)"
        );
    }

    #[test]
    fn optimizer_variant_uses_rgb_prefix() {
        assert_eq!(format_css_rgb(1.0, 0.5, 0.0, Some(1.0)), "rgb(255,128,0)");
        assert_eq!(format_css_rgb(0.0, 0.0, 0.0, None), "rgb(0,0,0)");
    }

    #[test]
    fn channels_round_half_up() {
        assert_eq!(channel_to_u8(0.5), 128);
        assert_eq!(channel_to_u8(0.062745), 16);
        assert_eq!(channel_to_u8(1.2), 255);
        assert_eq!(channel_to_u8(-0.1), 0);
    }

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn black_and_white_short_circuit() {
        assert_eq!(
            color_class(Rgb8 { r: 0, g: 0, b: 0 }, 1.0).as_deref(),
            Some("black")
        );
        assert_eq!(
            color_class(Rgb8 { r: 255, g: 255, b: 255 }, 0.1).as_deref(),
            Some("white")
        );
    }

    #[test]
    fn grays_follow_brightness_ladder() {
        assert_eq!(
            color_class(Rgb8 { r: 15, g: 20, b: 18 }, 1.0).as_deref(),
            Some("gray-950")
        );
        assert_eq!(
            color_class(Rgb8 { r: 128, g: 128, b: 128 }, 1.0).as_deref(),
            Some("gray-500")
        );
        assert_eq!(
            color_class(Rgb8 { r: 250, g: 250, b: 250 }, 1.0).as_deref(),
            Some("gray-50")
        );
    }

    #[test]
    fn reds_and_blues_have_sub_ladders() {
        assert_eq!(
            color_class(Rgb8 { r: 239, g: 68, b: 68 }, 1.0).as_deref(),
            Some("red-500")
        );
        assert_eq!(
            color_class(Rgb8 { r: 160, g: 20, b: 20 }, 1.0).as_deref(),
            Some("red-700")
        );
        assert_eq!(
            color_class(Rgb8 { r: 0, g: 102, b: 255 }, 1.0).as_deref(),
            Some("blue-500")
        );
        assert_eq!(
            color_class(Rgb8 { r: 30, g: 64, b: 190 }, 1.0).as_deref(),
            Some("blue-600")
        );
    }

    #[test]
    fn alpha_fallback_applies_only_to_unmatched_hues() {
        let green = Rgb8 { r: 20, g: 200, b: 40 };
        assert_eq!(color_class(green, 0.1).as_deref(), Some("transparent"));
        assert_eq!(color_class(green, 0.5).as_deref(), Some("opacity-50"));
        assert_eq!(color_class(green, 1.0), None);
    }
}
