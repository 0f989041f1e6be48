use anyhow::{ensure, Context, Result};
use base64::{engine::general_purpose, Engine as _};

/// 32x32 channel glyph shown left of the counter, PNG bytes in base64.
const ICON_PNG_BASE64: &str = concat!(
    "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAAVUlEQVR42mNgGAUEQIrjkv/U",
    "xANqOUkOoIXlRDuAVpYT5QBaWk6xA5ABOfKjDhh1wKgDRh0w9B0wWheMOmDUAVRrbI46gJoO",
    "G/AOyoD3lEaeA4YdAAAgQFrcteGNFAAAAABJRU5ErkJggg=="
);

/// Decoded icon pixels, RGBA rows top to bottom.
#[derive(Debug, Clone)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode the embedded glyph. The asset is compiled in, so failure here
/// means a corrupted build rather than a runtime condition.
pub fn decode_icon() -> Result<IconImage> {
    let bytes = general_purpose::STANDARD
        .decode(ICON_PNG_BASE64)
        .context("decode icon base64")?;
    let image = image::load_from_memory(&bytes)
        .context("decode icon png")?
        .to_rgba8();
    ensure!(
        image.width() > 0 && image.height() > 0,
        "icon has no pixels"
    );
    Ok(IconImage {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

/// Flatten the icon over an opaque background color, producing the top-down
/// BGRA rows a 32-bit DIB expects. Blending ahead of time keeps the paint
/// path to a plain blit.
pub fn bake_bgra_over(icon: &IconImage, background: (u8, u8, u8)) -> Vec<u8> {
    let (bg_r, bg_g, bg_b) = background;
    let blend = |fg: u8, bg: u8, alpha: u8| {
        ((u32::from(fg) * u32::from(alpha) + u32::from(bg) * (255 - u32::from(alpha))) / 255) as u8
    };

    let mut out = Vec::with_capacity(icon.rgba.len());
    for pixel in icon.rgba.chunks_exact(4) {
        let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        out.push(blend(b, bg_b, a));
        out.push(blend(g, bg_g, a));
        out.push(blend(r, bg_r, a));
        out.push(0xff);
    }
    out
}
