//! Sector-grouped company table.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::api::types::Company;
use crate::state::{App, FlatRow};
use crate::ui::format::{fmt_pct, fmt_price, fmt_shares, PLACEHOLDER};
use crate::ui::sparkline;
use crate::ui::theme;

const HEADER_HEIGHT: u16 = 1;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let flat = app.flat_rows();

    if flat.is_empty() {
        let message = if app.loading {
            "Loading dashboard…"
        } else {
            "Dashboard is building. This usually takes 2–3 minutes on first run."
        };
        let hint = Paragraph::new(Line::from(Span::styled(message, theme::muted())))
            .centered();
        frame.render_widget(hint, area);
        return;
    }

    // Flat index of the focused company drives selection and scrolling.
    let mut company_flat_indices = Vec::new();
    for (flat_idx, row) in flat.iter().enumerate() {
        if matches!(row, FlatRow::Company(_)) {
            company_flat_indices.push(flat_idx);
        }
    }
    let selected_flat = app
        .table
        .selected()
        .and_then(|i| company_flat_indices.get(i))
        .copied();

    let selected_symbol = app.view().stock.clone();
    let rows: Vec<Row> = flat
        .iter()
        .map(|row| match row {
            FlatRow::Header { name, count } => sector_header(name, *count),
            FlatRow::Company(c) => company_row(c, selected_symbol.as_deref() == Some(&c.symbol)),
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Min(18),
        Constraint::Length(11),
        Constraint::Length(9),
        Constraint::Length(22),
        Constraint::Percentage(24),
        Constraint::Min(18),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(["SYMBOL", "COMPANY", "PRICE", "CHANGE", "QUARTERLY TREND", "RECENT NEWS", "TOP INSIDERS"])
                .style(theme::column_header()),
        )
        .row_highlight_style(Style::default().bg(theme::FOCUS_BG))
        .column_spacing(1);

    let mut table_state = TableState::default().with_offset(app.table_offset);
    table_state.select(selected_flat);
    frame.render_stateful_widget(table, area, &mut table_state);
    app.table_offset = table_state.offset();

    // Record visible row positions for mouse hit-testing.
    app.hit.table = Some(area);
    app.hit.table_rows.clear();
    let viewport = area.height.saturating_sub(HEADER_HEIGHT) as usize;
    for (cursor_idx, flat_idx) in company_flat_indices.iter().enumerate() {
        let offset = app.table_offset;
        if *flat_idx >= offset && *flat_idx < offset + viewport {
            let y = area.y + HEADER_HEIGHT + (*flat_idx - offset) as u16;
            app.hit.table_rows.push((y, cursor_idx));
        }
    }
}

fn sector_header<'a>(name: &'a str, count: usize) -> Row<'a> {
    // The name goes in the wide COMPANY column; the symbol column is too
    // narrow for long sector names.
    Row::new(vec![
        Cell::default(),
        Cell::from(Line::from(vec![
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {count}"), theme::muted()),
        ])),
        Cell::default(),
        Cell::default(),
        Cell::default(),
        Cell::default(),
        Cell::default(),
    ])
    .style(Style::default().bg(theme::SECTION_BG))
}

fn company_row(c: &Company, selected: bool) -> Row<'_> {
    let change = match c.change_pct {
        Some(pct) => Span::styled(fmt_pct(c.change_pct), theme::pct_style(pct)),
        None => Span::styled(PLACEHOLDER, theme::muted()),
    };

    let trend = match c.quarter_trend {
        Some(trend) => {
            let positive = trend >= 0.0;
            let mut spans = Vec::new();
            if let Some(closes) = c.quarter_closes.as_deref() {
                let strip = sparkline::glyph_strip(closes, 12);
                if !strip.is_empty() {
                    spans.push(Span::styled(
                        strip,
                        Style::default().fg(sparkline::trend_color(positive)),
                    ));
                    spans.push(Span::raw(" "));
                }
            }
            spans.push(Span::styled(
                fmt_pct(c.quarter_trend),
                Style::default().fg(sparkline::trend_color(positive)),
            ));
            Line::from(spans)
        }
        None => Line::from(Span::styled(PLACEHOLDER, theme::muted())),
    };

    let news = match c.news.as_deref().and_then(|n| n.first()) {
        Some(item) => Span::styled(item.title.clone(), theme::secondary()),
        None => Span::styled(PLACEHOLDER, theme::muted()),
    };

    let insiders = match c.top_insiders.as_deref() {
        Some(list) if !list.is_empty() => {
            let mut text = format!("{} {}", list[0].name, fmt_shares(list[0].shares));
            if list.len() > 1 {
                text.push_str(&format!(" · +{} more", list.len() - 1));
            }
            Span::styled(text, theme::secondary())
        }
        _ => Span::styled(PLACEHOLDER, theme::muted()),
    };

    let row = Row::new(vec![
        Cell::from(Span::styled(
            c.symbol.clone(),
            Style::default().fg(theme::ACCENT),
        )),
        Cell::from(Span::styled(c.name.clone(), theme::secondary())),
        Cell::from(Line::from(fmt_price(c.price)).right_aligned()),
        Cell::from(Line::from(change).right_aligned()),
        Cell::from(trend),
        Cell::from(news),
        Cell::from(insiders),
    ]);
    if selected {
        row.style(Style::default().bg(theme::SELECT_BG))
    } else {
        row
    }
}
