//! Anomaly-scan page: parameter form and result views.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::state::scan::{ScanForm, ScanView};
use crate::ui::format::fmt_count;
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, scan: &ScanForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // parameter form
            Constraint::Length(1), // submit / error line
            Constraint::Length(2), // summary + toggle
            Constraint::Min(3),    // results
        ])
        .split(area);

    render_form(frame, chunks[0], scan);

    let status = if scan.in_flight {
        Line::from(Span::styled("Scanning…", theme::muted()))
    } else if let Some(error) = &scan.error {
        Line::from(Span::styled(error.clone(), theme::error_banner()))
    } else {
        Line::from(vec![
            Span::styled("enter", theme::title()),
            Span::styled(" run scan · ", theme::muted()),
            Span::styled("tab", theme::title()),
            Span::styled(" next field · ", theme::muted()),
            Span::styled("a", theme::title()),
            Span::styled(" toggle view", theme::muted()),
        ])
    };
    frame.render_widget(Paragraph::new(status), chunks[1]);

    if let Some(result) = &scan.result {
        let summary = Line::from(vec![
            Span::styled(format!("{}", result.tickers_count), theme::title()),
            Span::styled(" tickers scanned · ", theme::muted()),
            Span::styled(format!("{}", result.records_count), theme::title()),
            Span::styled(" records · ", theme::muted()),
            Span::styled(
                format!("{}", result.anomalies_count),
                Style::default().fg(theme::NEGATIVE),
            ),
            Span::styled(" anomalies · ", theme::muted()),
            Span::styled(
                format!("{} → {}", result.date_from, result.date_to),
                theme::muted(),
            ),
        ]);

        let toggle = |label: String, active: bool| {
            if active {
                Span::styled(label, Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Span::styled(label, theme::muted())
            }
        };
        let views = Line::from(vec![
            toggle(
                format!("Anomalies ({})", result.anomalies_count),
                scan.view == ScanView::Anomalies,
            ),
            Span::raw("   "),
            toggle(
                format!("All signals ({})", result.all_signals.len()),
                scan.view == ScanView::All,
            ),
        ]);
        frame.render_widget(Paragraph::new(vec![summary, views]), chunks[2]);
    }

    render_results(frame, chunks[3], scan);
}

fn render_form(frame: &mut Frame, area: Rect, scan: &ScanForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Parameters ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (idx, field) in scan.fields.iter().enumerate() {
        let focused = idx == scan.focused;
        let label_style = if focused {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            theme::column_header()
        };
        let value_style = if focused {
            Style::default().bg(theme::FOCUS_BG)
        } else {
            theme::secondary()
        };
        let mut value = field.buffer.clone();
        if focused {
            value.push('▌');
        }
        let lines = vec![
            Line::from(vec![
                Span::styled(field.label.to_uppercase(), label_style),
                Span::styled(format!(" {}–{}", field.min, field.max), theme::muted()),
            ]),
            Line::from(Span::styled(value, value_style)),
        ];
        frame.render_widget(Paragraph::new(lines), columns[idx]);
    }
}

fn render_results(frame: &mut Frame, area: Rect, scan: &ScanForm) {
    let signals = scan.visible_signals();
    if signals.is_empty() {
        let message = if scan.in_flight {
            "Running scan…"
        } else {
            "No signals to display"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, theme::muted()))).centered(),
            area,
        );
        return;
    }

    let rows: Vec<Row> = signals
        .iter()
        .map(|s| {
            let z_style = if s.z_score >= 2.0 {
                Style::default().fg(theme::NEGATIVE)
            } else {
                theme::secondary()
            };
            let status = if s.is_anomaly {
                Span::styled("Anomaly", Style::default().fg(theme::NEGATIVE))
            } else {
                Span::styled("Normal", theme::muted())
            };
            Row::new(vec![
                Cell::from(Span::styled(s.ticker.clone(), Style::default().fg(theme::ACCENT))),
                Cell::from(Line::from(fmt_count(s.current_shares_sold)).right_aligned()),
                Cell::from(Line::from(format!("{:.1}", s.baseline_mean)).right_aligned()),
                Cell::from(Line::from(format!("{:.1}", s.baseline_std)).right_aligned()),
                Cell::from(Line::from(Span::styled(format!("{:.2}", s.z_score), z_style)).right_aligned()),
                Cell::from(status),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(13),
        Constraint::Length(9),
        Constraint::Length(9),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(["TICKER", "CURRENT SELLING", "BASELINE MEAN", "BASELINE STD", "Z-SCORE", "STATUS"])
                .style(theme::column_header()),
        )
        .column_spacing(2);
    frame.render_widget(table, area);
}
