use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xee, 0x15, 0x15);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_LOADING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const CHIP_DEFAULT: Color = Color::Rgb(0xe5, 0xe7, 0xeb);

const CATEGORY_COLORS: &[(&str, Color)] = &[
    ("normal", Color::Rgb(0xa8, 0xa7, 0x7a)),
    ("fire", Color::Rgb(0xee, 0x81, 0x30)),
    ("water", Color::Rgb(0x63, 0x90, 0xf0)),
    ("electric", Color::Rgb(0xf7, 0xd0, 0x2c)),
    ("grass", Color::Rgb(0x7a, 0xc7, 0x4c)),
    ("ice", Color::Rgb(0x96, 0xd9, 0xd6)),
    ("fighting", Color::Rgb(0xc2, 0x2e, 0x28)),
    ("poison", Color::Rgb(0xa3, 0x3e, 0xa1)),
    ("ground", Color::Rgb(0xe2, 0xbf, 0x65)),
    ("flying", Color::Rgb(0xa9, 0x8f, 0xf3)),
    ("psychic", Color::Rgb(0xf9, 0x55, 0x87)),
    ("bug", Color::Rgb(0xa6, 0xb9, 0x1a)),
    ("rock", Color::Rgb(0xb6, 0xa1, 0x36)),
    ("ghost", Color::Rgb(0x73, 0x57, 0x97)),
    ("dragon", Color::Rgb(0x6f, 0x35, 0xfc)),
    ("dark", Color::Rgb(0x70, 0x57, 0x46)),
    ("steel", Color::Rgb(0xb7, 0xb7, 0xce)),
    ("fairy", Color::Rgb(0xd6, 0x85, 0xad)),
];

/// Colour for a category label; unknown labels get the neutral chip colour.
pub fn category_color(label: &str) -> Color {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|(_, color)| *color)
        .unwrap_or(CHIP_DEFAULT)
}
