use crate::backend::soft::Pixmap;

/// Packs `frame` into tightly packed 8-bit rows of `width`×`height`.
///
/// Sizes that differ from the frame are filled by nearest-neighbour sampling
/// (the window manager may not honour the requested size). Alpha is forced
/// opaque.
pub(crate) fn frame_bytes(frame: &Pixmap, width: u32, height: u32, bgra: bool) -> Vec<u8> {
    let src = frame.dim();
    let mut out = Vec::with_capacity(width as usize * height as usize * 4);

    if src.w <= 0 || src.h <= 0 {
        out.resize(width as usize * height as usize * 4, 0);
        return out;
    }

    if !bgra && i64::from(src.w) == i64::from(width) && i64::from(src.h) == i64::from(height) {
        out.extend_from_slice(frame.as_bytes());
        for px in out.chunks_exact_mut(4) {
            px[3] = 0xFF;
        }
        return out;
    }

    for y in 0..height as i64 {
        let sy = (y * src.h as i64 / height as i64) as i32;
        for x in 0..width as i64 {
            let sx = (x * src.w as i64 / width as i64) as i32;
            let c = frame.get(sx, sy).unwrap_or_default();
            if bgra {
                out.extend_from_slice(&[c.b, c.g, c.r, 0xFF]);
            } else {
                out.extend_from_slice(&[c.r, c.g, c.b, 0xFF]);
            }
        }
    }
    out
}
