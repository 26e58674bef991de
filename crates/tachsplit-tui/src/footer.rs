//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::styled("tab", Style::default().fg(Color::Yellow)),
        Span::raw(": switch field | "),
        Span::styled("0-9 .", Style::default().fg(Color::Yellow)),
        Span::raw(": edit | "),
        Span::styled("enter", Style::default().fg(Color::Yellow)),
        Span::raw(": copy check-in | "),
        Span::styled("del", Style::default().fg(Color::Yellow)),
        Span::raw(": clear | "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
