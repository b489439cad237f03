//! TUI rendering for GymMatch using ratatui.

mod card;
mod effects;
mod input;
mod layout;
mod theme;

pub use card::{render_exhausted, render_profile_card};
pub use effects::{blit_card, fade_color, scale_rect};
pub use input::{InputPump, apply_event, handle_events};
pub use layout::{HitTarget, ScreenLayout, hit_test, screen_layout};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use gymmatch_engine::{App, CardMotion, Profile};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, area);

    let layout = screen_layout(area);
    draw_header(frame, layout.header, &palette, &glyphs);

    if app.is_exhausted() {
        draw_exhausted(frame, app, &layout, &palette, &glyphs);
    } else if let Some(profile) = app.current_profile() {
        draw_card(frame, profile, app.card_motion(), app.px_per_cell(), &layout, &palette, &glyphs);
    }
    for outgoing in app.outgoing() {
        draw_card(
            frame,
            &outgoing.profile,
            outgoing.motion(),
            app.px_per_cell(),
            &layout,
            &palette,
            &glyphs,
        );
    }

    draw_footer(frame, app, &layout, &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand, icons] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(8)]).areas(inner);
    let brand_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(glyphs.dumbbell, styles::key_highlight(palette)),
        Span::raw(" "),
        Span::styled("GYMMATCH", styles::brand(palette)),
    ]);
    frame.render_widget(Paragraph::new(brand_line), brand);

    let icon_style = Style::default().fg(palette.text_muted);
    let icons_line = Line::from(vec![
        Span::styled(glyphs.message, icon_style),
        Span::raw("  "),
        Span::styled(glyphs.user, icon_style),
        Span::raw(" "),
    ]);
    frame.render_widget(
        Paragraph::new(icons_line).alignment(Alignment::Right),
        icons,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_card(
    frame: &mut Frame,
    profile: &Profile,
    motion: CardMotion,
    px_per_cell: f32,
    layout: &ScreenLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if layout.card.is_empty() {
        return;
    }
    let anchor = scale_rect(layout.card, motion.scale);
    let rendered = render_profile_card(profile, anchor.width, anchor.height, palette, glyphs);
    blit_card(
        &rendered,
        frame.buffer_mut(),
        anchor,
        layout.main,
        motion,
        px_per_cell,
        palette.bg_dark,
    );
}

fn draw_exhausted(
    frame: &mut Frame,
    app: &App,
    layout: &ScreenLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let panel = layout.exhausted;
    if panel.is_empty() {
        return;
    }
    let reset = Rect {
        x: layout.reset_button.x.saturating_sub(panel.x),
        y: layout.reset_button.y.saturating_sub(panel.y),
        ..layout.reset_button
    };
    let rendered = render_exhausted(panel.width, panel.height, reset, palette, glyphs);
    blit_card(
        &rendered,
        frame.buffer_mut(),
        panel,
        layout.main,
        app.card_motion(),
        app.px_per_cell(),
        palette.bg_dark,
    );
}

fn draw_footer(
    frame: &mut Frame,
    app: &App,
    layout: &ScreenLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let pass = Paragraph::new(Span::raw(glyphs.pass))
        .alignment(Alignment::Center)
        .style(styles::pass_button(palette))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border)),
        );
    frame.render_widget(pass, layout.pass_button);

    let like = Paragraph::new(Span::raw(glyphs.like))
        .alignment(Alignment::Center)
        .style(styles::like_button(palette))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(styles::like_button(palette)),
        );
    frame.render_widget(like, layout.like_button);

    let key = |label: &'static str| Span::styled(label, styles::key_highlight(palette));
    let hint = |label: &'static str| Span::styled(label, styles::key_hint(palette));
    let hints = if app.is_exhausted() {
        Line::from(vec![key("r"), hint(" browse again  "), key("q"), hint(" quit")])
    } else {
        Line::from(vec![
            Span::styled(format!("{}/h", glyphs.arrow_left), styles::key_highlight(palette)),
            hint(" pass  "),
            Span::styled(format!("{}/l", glyphs.arrow_right), styles::key_highlight(palette)),
            hint(" like  "),
            hint("drag the card  "),
            key("q"),
            hint(" quit"),
        ])
    };
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        layout.hints,
    );
}
