use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::i18n::strings;

const CURSOR_GLYPH: char = '▌';

/// The typewriter panel: whatever the active session has revealed so
/// far, with the writing cursor at the frontier.
pub fn render_story(app: &App, buf: &mut Buffer, area: Rect) {
    let palette = app.active_theme.palette();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", strings(app.lang).story_title()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let mut text = app.story.revealed_text().to_string();
    if app.story.cursor_visible() {
        text.push(CURSOR_GLYPH);
    }
    let padded = Rect {
        x: inner.x + 2,
        y: inner.y + 1,
        width: inner.width.saturating_sub(4),
        height: inner.height.saturating_sub(1),
    };
    Widget::render(
        Paragraph::new(text)
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: false }),
        padded,
        buf,
    );
}
