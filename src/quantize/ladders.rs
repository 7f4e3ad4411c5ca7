//! Ordered threshold ladders mapping pixel magnitudes onto utility classes.
//!
//! Each ladder is scanned in ascending order and yields the first label whose
//! inclusive upper bound admits the value.

pub type Ladder = &'static [(f64, &'static str)];

pub const SPACING: Ladder = &[
    (1.0, "0.5"),
    (2.0, "1"),
    (3.0, "1.5"),
    (5.0, "2"),
    (7.0, "3"),
    (10.0, "4"),
    (14.0, "5"),
    (18.0, "6"),
    (22.0, "7"),
    (26.0, "8"),
    (34.0, "10"),
    (42.0, "12"),
    (56.0, "16"),
];

pub const BORDER_RADIUS: Ladder = &[
    (1.0, "sm"),
    (3.0, "DEFAULT"),
    (6.0, "md"),
    (9.0, "lg"),
    (12.0, "xl"),
    (16.0, "2xl"),
    (20.0, "3xl"),
];

pub const BORDER_WIDTH: Ladder = &[(1.0, "DEFAULT"), (2.0, "2"), (4.0, "4"), (8.0, "8")];

pub const FONT_SIZE: Ladder = &[
    (12.0, "xs"),
    (14.0, "sm"),
    (16.0, "base"),
    (18.0, "lg"),
    (20.0, "xl"),
    (24.0, "2xl"),
    (30.0, "3xl"),
    (36.0, "4xl"),
    (48.0, "5xl"),
    (60.0, "6xl"),
    (72.0, "7xl"),
    (96.0, "8xl"),
    (128.0, "9xl"),
];

pub const FONT_WEIGHT: Ladder = &[
    (100.0, "thin"),
    (200.0, "extralight"),
    (300.0, "light"),
    (400.0, "normal"),
    (500.0, "medium"),
    (600.0, "semibold"),
    (700.0, "bold"),
    (800.0, "extrabold"),
    (900.0, "black"),
];

pub const LINE_HEIGHT: Ladder = &[
    (16.0, "none"),
    (20.0, "tight"),
    (24.0, "snug"),
    (28.0, "normal"),
    (32.0, "relaxed"),
    (40.0, "loose"),
];

/// `(target px, class, tolerance px)`, ascending by target.
const BOX_SIZES: &[(f64, &str, f64)] = &[
    (16.0, "4", 2.0),
    (24.0, "6", 2.0),
    (32.0, "8", 2.0),
    (40.0, "10", 3.0),
    (48.0, "12", 3.0),
    (64.0, "16", 3.0),
    (80.0, "20", 4.0),
    (96.0, "24", 4.0),
    (128.0, "32", 4.0),
    (160.0, "40", 5.0),
    (192.0, "48", 5.0),
    (256.0, "64", 5.0),
    (320.0, "80", 5.0),
    (360.0, "full", 5.0),
    (384.0, "96", 5.0),
];

/// First label whose threshold is `>= value`.
pub fn ladder_class(ladder: Ladder, value: f64) -> Option<&'static str> {
    ladder
        .iter()
        .find(|(limit, _)| value <= *limit)
        .map(|(_, label)| *label)
}

pub fn spacing_class(px: f64) -> Option<&'static str> {
    ladder_class(SPACING, px)
}

/// Radii above the ladder collapse to `full`.
pub fn border_radius_class(px: f64) -> &'static str {
    ladder_class(BORDER_RADIUS, px).unwrap_or("full")
}

pub fn border_width_class(px: f64) -> Option<&'static str> {
    ladder_class(BORDER_WIDTH, px)
}

pub fn box_size_class(px: f64) -> Option<&'static str> {
    BOX_SIZES
        .iter()
        .find(|(target, _, tolerance)| (px - target).abs() <= *tolerance)
        .map(|(_, label, _)| *label)
}

pub fn font_family_class(family: &str) -> &'static str {
    let lower = family.to_ascii_lowercase();
    if lower.contains("mono") || lower.contains("code") || lower.contains("courier") {
        "mono"
    } else if !lower.contains("sans")
        && (lower.contains("serif")
            || lower.contains("georgia")
            || lower.contains("times")
            || lower.contains("garamond"))
    {
        "serif"
    } else {
        "sans"
    }
}

pub fn font_size_class(px: f64) -> Option<&'static str> {
    ladder_class(FONT_SIZE, px)
}

/// Weights heavier than 900 clamp to `black`.
pub fn font_weight_class(weight: f64) -> &'static str {
    ladder_class(FONT_WEIGHT, weight).unwrap_or("black")
}

pub fn line_height_class(px: f64) -> Option<&'static str> {
    ladder_class(LINE_HEIGHT, px)
}

/// Letter spacing in em. Rules are evaluated in listed order, so anything at
/// or above `0.025` resolves to `wide`.
pub fn letter_spacing_class(em: f64) -> Option<&'static str> {
    let rules: [(&str, fn(f64) -> bool); 6] = [
        ("tighter", |v| v <= -0.05),
        ("tight", |v| v <= -0.025),
        ("normal", |v| (-0.01..=0.01).contains(&v)),
        ("wide", |v| v >= 0.025),
        ("wider", |v| v >= 0.05),
        ("widest", |v| v >= 0.1),
    ];
    rules
        .iter()
        .find(|(_, matches)| matches(em))
        .map(|(label, _)| *label)
}

pub fn text_align_class(align: &str) -> Option<&'static str> {
    match align {
        "LEFT" => Some("left"),
        "CENTER" => Some("center"),
        "RIGHT" => Some("right"),
        "JUSTIFIED" => Some("justify"),
        _ => None,
    }
}
