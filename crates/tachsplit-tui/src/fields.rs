//! Reading input field rendering.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Placeholder shown while a field is unset.
const PLACEHOLDER: &str = "0.0";

/// Render one labeled reading field.
///
/// An empty field shows the muted placeholder; the focused field gets
/// the primary border color.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &ColorTheme,
) {
    let border_style = if focused {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {label} "));

    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(PLACEHOLDER, theme.muted_style()),
            Span::styled(" hrs", theme.muted_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(value.to_string(), theme.text_style()),
            Span::styled(" hrs", theme.muted_style()),
        ])
    };

    let paragraph = Paragraph::new(vec![line]).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw_field(value: &str, focused: bool) -> String {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_field(
                    frame,
                    area,
                    "Checkout Tach Time",
                    value,
                    focused,
                    &ColorTheme::default(),
                );
            })
            .unwrap();

        let mut content = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                content.push_str(buf.buffer[(x, y)].symbol());
            }
        }
        content
    }

    #[test]
    fn renders_label_and_value() {
        let content = draw_field("1234.5", false);
        assert!(content.contains("Checkout Tach Time"));
        assert!(content.contains("1234.5"));
        assert!(content.contains("hrs"));
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let content = draw_field("", true);
        assert!(content.contains("0.0"));
    }

    #[test]
    fn small_area_does_not_panic() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_field(frame, area, "End Tach Time", "1.5", false, &ColorTheme::default());
            })
            .unwrap();
    }
}
