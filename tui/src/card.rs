//! Off-screen rendering of the profile card and the exhausted panel.
//!
//! Both render into a standalone [`Buffer`] sized like their resting rect so
//! [`crate::effects::blit_card`] can move, tilt and fade them.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use gymmatch_engine::Profile;

use crate::theme::{Glyphs, Palette, styles};

const TILE_HEIGHT: u16 = 4;
const EXHAUSTED_MESSAGE: &str = "You've matched with every athlete nearby!";
const RESET_LABEL: &str = "BROWSE AGAIN";
const PAD_X: Margin = Margin {
    horizontal: 1,
    vertical: 0,
};

/// Render `profile` as a card of `width` x `height` cells.
#[must_use]
pub fn render_profile_card(
    profile: &Profile,
    width: u16,
    height: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let area = buf.area;

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    block.render(area, &mut buf);
    if inner.is_empty() {
        return buf;
    }

    let stat_rows = u16::try_from(profile.stats.len().div_ceil(2)).unwrap_or(u16::MAX);
    let tiles_height = stat_rows.saturating_mul(TILE_HEIGHT);
    // headline + distance + spacer
    let text_height: u16 = 3;
    let tiles_height = if inner.height > text_height.saturating_add(tiles_height) {
        tiles_height
    } else {
        0
    };
    let [photo, headline, distance, _, tiles] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(tiles_height),
    ])
    .areas(inner);

    render_photo(profile, photo, &mut buf, palette, glyphs);
    render_headline(profile, headline, &mut buf, palette, glyphs);

    Paragraph::new(Line::from(vec![
        Span::styled(glyphs.pin, Style::default().fg(palette.accent)),
        Span::raw(" "),
        Span::styled(
            format!("{} nearby", profile.distance),
            Style::default().fg(palette.text_secondary),
        ),
    ]))
    .render(distance.inner(PAD_X), &mut buf);

    if !tiles.is_empty() {
        render_stat_tiles(profile, tiles.inner(PAD_X), &mut buf, palette);
    }

    buf
}

fn render_photo(profile: &Profile, area: Rect, buf: &mut Buffer, palette: &Palette, glyphs: &Glyphs) {
    if area.is_empty() {
        return;
    }
    let fill = glyphs.photo_fill.repeat(usize::from(area.width));
    let mut lines: Vec<Line> = (0..area.height)
        .map(|_| Line::styled(fill.clone(), Style::default().fg(palette.text_disabled)))
        .collect();

    let initial = profile
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let caption = profile.image_host().unwrap_or("no photo");
    let mid = lines.len() / 2;
    if let Some(line) = lines.get_mut(mid.saturating_sub(1)) {
        *line = Line::styled(format!(" {initial} "), styles::stat_value(palette))
            .alignment(Alignment::Center);
    }
    if area.height > 2
        && let Some(line) = lines.get_mut(mid + 1)
    {
        *line = Line::styled(format!(" {caption} "), styles::key_hint(palette))
            .alignment(Alignment::Center);
    }

    Paragraph::new(lines)
        .style(Style::default().bg(palette.bg_tile))
        .render(area, buf);
}

fn render_headline(
    profile: &Profile,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let badge = format!(" {} {} ", glyphs.trophy, profile.specialty);
    let badge_width = u16::try_from(badge.width()).unwrap_or(u16::MAX);
    let [name_area, badge_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(badge_width)])
            .spacing(1)
            .areas(area.inner(PAD_X));

    Paragraph::new(Span::styled(profile.headline(), styles::headline(palette)))
        .render(name_area, buf);
    Paragraph::new(Span::styled(badge, styles::badge(palette))).render(badge_area, buf);
}

fn render_stat_tiles(profile: &Profile, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let rows = Layout::vertical(
        profile
            .stats
            .chunks(2)
            .map(|_| Constraint::Length(TILE_HEIGHT)),
    )
    .split(area);

    for (pair, row) in profile.stats.chunks(2).zip(rows.iter()) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(1)
            .split(*row);
        for (stat, cell) in pair.iter().zip(cells.iter()) {
            let tile = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border))
                .style(Style::default().bg(palette.bg_tile));
            Paragraph::new(vec![
                Line::styled(stat.key.to_uppercase(), styles::stat_key(palette)),
                Line::styled(stat.value.clone(), styles::stat_value(palette)),
            ])
            .alignment(Alignment::Center)
            .block(tile)
            .render(*cell, buf);
        }
    }
}

/// Render the "deck exhausted" panel. `reset_button` is relative to the
/// panel's own origin.
#[must_use]
pub fn render_exhausted(
    width: u16,
    height: u16,
    reset_button: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let area = buf.area;

    let [badge_row, _, message] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);

    let badge_width = u16::try_from(glyphs.dumbbell.width()).unwrap_or(3) + 4;
    let [badge] = Layout::horizontal([Constraint::Length(badge_width)])
        .flex(Flex::Center)
        .areas(badge_row);
    Paragraph::new(Span::styled(
        glyphs.dumbbell,
        Style::default().fg(palette.text_disabled),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_tile))
            .style(Style::default().bg(palette.bg_panel)),
    )
    .render(badge, &mut buf);

    Paragraph::new(Span::styled(
        EXHAUSTED_MESSAGE,
        Style::default().fg(palette.text_secondary),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(message, &mut buf);

    let reset_button = reset_button.intersection(area);
    if !reset_button.is_empty() {
        Paragraph::new(Span::raw(RESET_LABEL))
            .alignment(Alignment::Center)
            .style(styles::reset_button(palette))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(styles::reset_button(palette)),
            )
            .render(reset_button, &mut buf);
    }

    buf
}
