//! Pure mapping from continuous design values to display strings and a
//! discrete utility-class palette.
//!
//! - [`color`] - color formatting and palette matching
//! - [`ladders`] - threshold ladders for spacing, radii, borders, sizes, and type

pub mod color;
pub mod ladders;

pub use color::{
    channel_to_u8, color_class, format_color, format_css_rgb, format_number, Rgb8,
};
pub use ladders::{
    border_radius_class, border_width_class, box_size_class, font_family_class, font_size_class,
    font_weight_class, ladder_class, letter_spacing_class, line_height_class, spacing_class,
    text_align_class, Ladder,
};
