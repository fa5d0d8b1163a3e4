use codecanvas::model::Color;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Terminal swatch per card color: the first stop of its card gradient.
pub static SWATCHES: Lazy<HashMap<&'static str, (u8, u8, u8)>> = Lazy::new(|| {
    HashMap::from([
        ("blue", (0x66, 0x7e, 0xea)),
        ("green", (0x11, 0x99, 0x8e)),
        ("orange", (0xf0, 0x93, 0xfb)),
        ("purple", (0x4f, 0xac, 0xfe)),
        ("red", (0xfa, 0x70, 0x9a)),
    ])
});

pub const SWATCH: &str = "●";

pub fn swatch_rgb(color: &Color) -> Option<(u8, u8, u8)> {
    SWATCHES.get(color.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_color_has_a_swatch() {
        for color in Color::ALL.iter() {
            assert!(swatch_rgb(color).is_some(), "{}", color);
        }
        assert_eq!(swatch_rgb(&Color::from("teal")), None);
    }
}
