//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let text = vec![Line::from(vec![
        Span::styled("TachSplit", theme.header_style()),
        Span::raw(" | split tach time between two pilots"),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" TachSplit ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
