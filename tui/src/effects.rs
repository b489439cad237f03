//! Card motion rendering: scale, slide, tilt and fade applied to a
//! pre-rendered card buffer.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use gymmatch_types::ui::CardMotion;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Below this opacity a card is not drawn at all.
const MIN_VISIBLE_OPACITY: f32 = 0.05;

/// Shrink `base` around its center.
#[must_use]
pub fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Blend `color` towards `toward`. Full opacity keeps `color`.
///
/// Only RGB pairs blend smoothly; named colors switch at the halfway point.
#[must_use]
pub fn fade_color(color: Color, toward: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, toward) {
        (Color::Rgb(r, g, b), Color::Rgb(tr, tg, tb)) => {
            let mix = |c: u8, t: u8| {
                (f32::from(t) + (f32::from(c) - f32::from(t)) * opacity).round() as u8
            };
            Color::Rgb(mix(r, tr), mix(g, tg), mix(b, tb))
        }
        (Color::Reset, _) => Color::Reset,
        _ if opacity < 0.5 => toward,
        _ => color,
    }
}

/// Copy a rendered card into `dst` at `anchor`, applying `motion`.
///
/// `card` holds the card drawn at the anchor's size with its origin at
/// (0, 0). Cells landing outside `clip` are dropped, so a card flying off
/// the side is cut at the edge of the play area.
pub fn blit_card(
    card: &Buffer,
    dst: &mut Buffer,
    anchor: Rect,
    clip: Rect,
    motion: CardMotion,
    px_per_cell: f32,
    background: Color,
) {
    if motion.opacity <= MIN_VISIBLE_OPACITY {
        return;
    }
    let clip = clip.intersection(dst.area);
    if clip.is_empty() {
        return;
    }

    let px_per_cell = if px_per_cell > 0.0 { px_per_cell } else { 1.0 };
    let dx = (motion.offset_px / px_per_cell).round() as i32;
    let tilt = motion.rotation_deg.to_radians().tan() * CELL_ASPECT;
    let src = card.area;
    let center_row = f32::from(src.height.saturating_sub(1)) / 2.0;

    for row in 0..src.height {
        let shear = (-(f32::from(row) - center_row) * tilt).round() as i32;
        let y = i32::from(anchor.y) + i32::from(row);
        for col in 0..src.width {
            let x = i32::from(anchor.x) + i32::from(col) + dx + shear;
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if x < clip.x || x >= clip.right() || y < clip.y || y >= clip.bottom() {
                continue;
            }
            let Some(source) = card.cell((src.x + col, src.y + row)) else {
                continue;
            };
            if let Some(target) = dst.cell_mut((x, y)) {
                *target = source.clone();
                target.fg = fade_color(source.fg, background, motion.opacity);
                target.bg = fade_color(source.bg, background, motion.opacity);
            }
        }
    }
}
