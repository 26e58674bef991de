//! Flight summary panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use tachsplit_core::{format_hours, Precision, Totals};

use crate::styles::ColorTheme;

/// Render the flight summary panel.
///
/// Shows the three derived values, the transient copy confirmation
/// while it is armed, and a muted note for the last copy failure.
pub fn render_summary(
    frame: &mut Frame,
    area: Rect,
    totals: &Totals,
    precision: Precision,
    copied: bool,
    copy_error: Option<&str>,
    theme: &ColorTheme,
) {
    let row = |label: &str, value: f64| {
        Line::from(vec![
            Span::styled(format!("{label}: "), theme.muted_style()),
            Span::styled(
                format!("{} hrs", format_hours(value, precision)),
                theme.header_style(),
            ),
        ])
    };

    let mut lines = vec![
        row("Total Time", totals.total),
        row("Time Per Person", totals.per_person),
        row("Person 1 Check-in Time", totals.check_in),
        Line::raw(""),
    ];

    if copied {
        lines.push(Line::from(Span::styled(
            "Check-in time copied to clipboard!",
            theme.success_style(),
        )));
    } else if let Some(error) = copy_error {
        lines.push(Line::from(Span::styled(
            format!("Copy failed: {error}"),
            theme.error_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Flight Summary ");
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
