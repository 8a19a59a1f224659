use ratatui::{layout::Rect, style::Style, Frame};

use crate::app::App;

/// Draws the decorative layer over the body, but only into cells the
/// page left empty, so petals never overprint text. Elements near the
/// end of their life dim out.
pub fn render_particles(app: &App, frame: &mut Frame, body: Rect) {
    if body.width == 0 || body.height == 0 {
        return;
    }
    let palette = app.active_theme.palette();
    let buf = frame.buffer_mut();
    for particle in &app.particles.alive {
        let col = particle.x.floor();
        let row = particle.y.floor();
        if col < 0.0 || row < 0.0 || col >= f32::from(body.width) || row >= f32::from(body.height)
        {
            continue;
        }
        let x = body.x + col as u16;
        let y = body.y + row as u16;
        if buf.get(x, y).symbol() != " " {
            continue;
        }
        let color = if particle.fade() > 0.7 {
            palette.dim
        } else {
            palette.sparks[particle.color_index % palette.sparks.len()]
        };
        buf.set_string(x, y, particle.glyph, Style::default().fg(color));
    }
}
