use crate::foundation::core::Rgba;

/// Quantize a normalized channel to a byte: clamp to `[0, 1]`, scale by 255,
/// truncate.
pub fn channel_to_byte(c: f32) -> u8 {
    (255.0 * c.clamp(0.0, 1.0)) as u8
}

/// Inverse of [`channel_to_byte`].
///
/// Lossy overall because the forward direction truncates; byte-to-float-to-
/// byte round-trips exactly for all 256 values.
pub fn byte_to_channel(b: u8) -> f32 {
    f32::from(b) / 255.0
}

/// Pack a color into an RGBA8 pixel with R, G, B, A bytes at bit positions
/// 0, 8, 16, 24.
pub fn pack(c: Rgba) -> u32 {
    u32::from(channel_to_byte(c.r))
        | u32::from(channel_to_byte(c.g)) << 8
        | u32::from(channel_to_byte(c.b)) << 16
        | u32::from(channel_to_byte(c.a)) << 24
}

/// Unpack an RGBA8 pixel into normalized channels.
pub fn unpack(px: u32) -> Rgba {
    Rgba::new(
        byte_to_channel((px & 0xff) as u8),
        byte_to_channel(((px >> 8) & 0xff) as u8),
        byte_to_channel(((px >> 16) & 0xff) as u8),
        byte_to_channel(((px >> 24) & 0xff) as u8),
    )
}

/// Porter-Duff "over": composite `src` in front of `dst`.
///
/// `src + (1 - src.a) * dst`, applied per channel including alpha.
/// Associative, not commutative.
pub fn over(src: Rgba, dst: Rgba) -> Rgba {
    let t = 1.0 - src.a;
    Rgba::new(
        src.r + t * dst.r,
        src.g + t * dst.g,
        src.b + t * dst.b,
        src.a + t * dst.a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/raster/color.rs"]
mod tests;
