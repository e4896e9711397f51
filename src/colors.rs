//! Packed ARGB8888 colors.
//!
//! Colors are stored as `0xAARRGGBB` in a `u32`, one per pixel.

pub const TRANSPARENT: u32 = 0x0000_0000;
pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;
pub const GREY: u32 = 0xFF80_8080;

pub const RED: u32 = 0xFFFF_0000;
pub const GREEN: u32 = 0xFF00_FF00;
pub const BLUE: u32 = 0xFF00_00FF;
pub const CYAN: u32 = 0xFF00_FFFF;
pub const MAGENTA: u32 = 0xFFFF_00FF;
pub const YELLOW: u32 = 0xFFFF_FF00;

/// Background of a fresh frame.
pub const BACKGROUND: u32 = TRANSPARENT;
/// Grid overlay lines.
pub const GRID: u32 = GREY;
/// Wireframe edge colors, in edge order 0-1, 0-2, 1-2.
pub const WIREFRAME: [u32; 3] = [CYAN, MAGENTA, YELLOW];

/// Debug palette, cycled by [`palette_color`].
pub const PALETTE: [u32; 6] = [RED, GREEN, BLUE, CYAN, MAGENTA, YELLOW];

#[inline]
pub const fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Splits a packed color into `[r, g, b, a]`.
#[inline]
pub const fn unpack_color(color: u32) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

/// Scales the RGB channels by `factor` (clamped to [0, 1]), truncating each
/// channel. Alpha is kept.
#[inline]
pub fn scale_color(color: u32, factor: f64) -> u32 {
    let factor = factor.clamp(0.0, 1.0);
    let [r, g, b, a] = unpack_color(color);
    let scale = |c: u8| (c as f64 * factor) as u8;
    pack_color(scale(r), scale(g), scale(b), a)
}

/// Picks a palette entry; wraps around for any index.
pub fn palette_color(index: usize) -> u32 {
    PALETTE[index % PALETTE.len()]
}
