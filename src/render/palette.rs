use std::fmt;

/// 24-bit RGB color, rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Qualitative 20-color palette (tab20 ordering).
pub const PALETTE: [Rgb; 20] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xae, 0xc7, 0xe8),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0xff, 0xbb, 0x78),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0x98, 0xdf, 0x8a),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0xff, 0x98, 0x96),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0xc5, 0xb0, 0xd5),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xc4, 0x9c, 0x94),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0xf7, 0xb6, 0xd2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xc7, 0xc7, 0xc7),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0xdb, 0xdb, 0x8d),
    Rgb(0x17, 0xbe, 0xcf),
    Rgb(0x9e, 0xda, 0xe5),
];

/// Color for the `index`-th distinct task, wrapping around the palette.
pub fn color_for(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// Pair each task (already in first-seen order) with its color.
pub fn assign_colors<'a, I>(tasks: I) -> Vec<(&'a str, Rgb)>
where
    I: IntoIterator<Item = &'a str>,
{
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| (task, color_for(i)))
        .collect()
}
