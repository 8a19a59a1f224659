use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, OverlayState};
use crate::definitions::ControlKind;
use crate::i18n::strings;

/// Centered confirmation overlay. While it is up, the app locks page
/// scrolling; a click outside the registered content rect closes it.
pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let Some(OverlayState::Confirmation(confirmation)) = &app.overlay else {
        return;
    };
    let palette = app.active_theme.palette();
    let catalog = strings(app.lang);
    let attendance_label = confirmation.attendance.label(app.lang);

    let area = frame.size();
    let width = 52.min(area.width.saturating_sub(4));
    let height = 9.min(area.height.saturating_sub(2));
    if width < 10 || height < 5 {
        return;
    }
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", catalog.modal_title()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel_bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let message = format!("✓ {}\n\n{}", attendance_label, catalog.modal_message());
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        Rect {
            x: inner.x + 1,
            y: inner.y + 1,
            width: inner.width.saturating_sub(2),
            height: inner.height.saturating_sub(2),
        },
    );

    let close = format!("[ {} ]", catalog.modal_close());
    let close_width = close.width() as u16;
    let close_rect = Rect {
        x: inner.x + inner.width.saturating_sub(close_width) / 2,
        y: inner.bottom().saturating_sub(1),
        width: close_width.min(inner.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(close).style(
            Style::default()
                .fg(palette.panel_bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        close_rect,
    );

    app.controls.register(ControlKind::ModalContent, popup);
    app.controls.register(ControlKind::ModalClose, close_rect);
}
