//! Menu bar glyph: a clipboard outline drawn as a template image
use anyhow::{Context, Result};
use tray_icon::Icon;

const SIZE: u32 = 36;
const STROKE: u32 = 3;

/// Board outline bounds (inclusive-exclusive) and the clip on its top edge
const BOARD: (u32, u32, u32, u32) = (7, 6, 29, 33);
const CLIP: (u32, u32, u32, u32) = (13, 2, 23, 10);

fn inside(rect: (u32, u32, u32, u32), x: u32, y: u32) -> bool {
    let (left, top, right, bottom) = rect;
    x >= left && x < right && y >= top && y < bottom
}

fn is_ink(x: u32, y: u32) -> bool {
    if inside(CLIP, x, y) {
        return true;
    }

    let (left, top, right, bottom) = BOARD;
    let inner = (left + STROKE, top + STROKE, right - STROKE, bottom - STROKE);
    inside(BOARD, x, y) && !inside(inner, x, y)
}

/// RGBA pixels for the glyph, opaque black on transparent
pub(super) fn glyph_rgba() -> Vec<u8> {
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let alpha = if is_ink(x, y) { 0xff } else { 0x00 };
            rgba.extend_from_slice(&[0, 0, 0, alpha]);
        }
    }
    rgba
}

pub(super) fn status_icon() -> Result<Icon> {
    Icon::from_rgba(glyph_rgba(), SIZE, SIZE).context("Failed to create status item icon")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(rgba: &[u8], x: u32, y: u32) -> u8 {
        rgba[((y * SIZE + x) * 4 + 3) as usize]
    }

    #[test]
    fn test_glyph_shape() {
        let rgba = glyph_rgba();
        assert_eq!(rgba.len(), (SIZE * SIZE * 4) as usize);

        // Outline, clip and hollow interior
        assert_eq!(alpha_at(&rgba, 7, 20), 0xff);
        assert_eq!(alpha_at(&rgba, 18, 3), 0xff);
        assert_eq!(alpha_at(&rgba, 18, 20), 0x00);
        assert_eq!(alpha_at(&rgba, 0, 0), 0x00);
    }
}
