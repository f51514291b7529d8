//! Settings page: server health, provider diagnostics, refresh action.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::api::types::HealthStatus;
use crate::state::Remote;
use crate::ui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    health: &Remote<HealthStatus>,
    providers: &Remote<serde_json::Value>,
) {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled("SERVER HEALTH", theme::column_header())));
    lines.push(match health {
        Remote::NotStarted | Remote::Loading => {
            Line::from(Span::styled("Loading…", theme::muted()))
        }
        Remote::Loaded(status) => Line::from(vec![
            Span::styled("● ", Style::default().fg(theme::POSITIVE)),
            Span::styled("Server is ", theme::secondary()),
            Span::styled(status.status.clone(), theme::title()),
        ]),
        Remote::Failed(message) => Line::from(vec![
            Span::styled("● ", Style::default().fg(theme::NEGATIVE)),
            Span::styled(message.clone(), theme::error_banner()),
        ]),
    });
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "PROVIDER DIAGNOSTICS",
        theme::column_header(),
    )));
    match providers {
        Remote::NotStarted | Remote::Loading => {
            lines.push(Line::from(Span::styled("Loading…", theme::muted())));
        }
        Remote::Loaded(value) => {
            let pretty = serde_json::to_string_pretty(value)
                .unwrap_or_else(|_| value.to_string());
            for row in pretty.lines() {
                lines.push(Line::from(Span::styled(row.to_string(), theme::secondary())));
            }
        }
        Remote::Failed(message) => {
            lines.push(Line::from(Span::styled(message.clone(), theme::error_banner())));
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("ACTIONS", theme::column_header())));
    lines.push(Line::from(vec![
        Span::styled("f", theme::title()),
        Span::styled(
            " force dashboard refresh — triggers a full cache rebuild; data is fresh within 2–3 minutes",
            theme::muted(),
        ),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("ABOUT", theme::column_header())));
    lines.push(Line::from(Span::styled(
        "insider-term — S&P 500 insider-selling tracker",
        theme::secondary(),
    )));
    lines.push(Line::from(Span::styled(
        format!("v{}", env!("CARGO_PKG_VERSION")),
        theme::muted(),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
