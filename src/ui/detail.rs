//! Detail panel for the selected company.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::types::Company;
use crate::ui::format::{fmt_pct, fmt_price, fmt_shares, fmt_value};
use crate::ui::{sparkline, theme};

pub fn render(frame: &mut Frame, area: Rect, company: &Company) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let positive = company.quarter_trend.unwrap_or(0.0) >= 0.0;
    let has_closes = company
        .quarter_closes
        .as_deref()
        .is_some_and(|c| c.len() >= 2);
    let chart_height = if has_closes { 7 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // header
            Constraint::Length(3),            // price
            Constraint::Length(2),            // trend line
            Constraint::Length(chart_height), // trend chart
            Constraint::Min(4),               // news + insiders + sources
        ])
        .split(inner);

    let mut header = vec![Span::styled(
        company.symbol.clone(),
        Style::default().fg(theme::ACCENT).patch(theme::title()),
    )];
    if let Some(pct) = company.change_pct {
        header.push(Span::raw(" "));
        header.push(Span::styled(fmt_pct(company.change_pct), theme::pct_style(pct)));
    }
    let header = Paragraph::new(vec![
        Line::from(header),
        Line::from(Span::styled(company.name.clone(), theme::secondary())),
    ]);
    frame.render_widget(header, chunks[0]);

    let mut price_lines = vec![Line::from(Span::styled("PRICE", theme::column_header()))];
    let mut price_spans = vec![Span::styled(fmt_price(company.price), theme::title())];
    if company.price.is_some() {
        if let Some(provider) = company.sources.get("price") {
            price_spans.push(Span::styled(format!("  via {provider}"), theme::muted()));
        }
    } else {
        price_spans = vec![Span::styled("Not available", theme::muted())];
    }
    price_lines.push(Line::from(price_spans));
    frame.render_widget(Paragraph::new(price_lines), chunks[1]);

    let trend_line = match company.quarter_trend {
        Some(trend) => Line::from(vec![
            Span::styled(
                fmt_pct(company.quarter_trend),
                Style::default().fg(sparkline::trend_color(trend >= 0.0)),
            ),
            Span::styled("  13 weeks", theme::muted()),
        ]),
        None => Line::from(Span::styled("Not available", theme::muted())),
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("QUARTERLY TREND", theme::column_header())),
            trend_line,
        ]),
        chunks[2],
    );

    if has_closes {
        if let Some(closes) = company.quarter_closes.as_deref() {
            sparkline::render_chart(frame, chunks[3], closes, positive);
        }
    }

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled("RECENT NEWS", theme::column_header())));
    match company.news.as_deref() {
        Some(news) if !news.is_empty() => {
            for item in news.iter().take(4) {
                lines.push(Line::from(vec![
                    Span::styled("• ", theme::muted()),
                    Span::styled(item.title.clone(), theme::secondary()),
                ]));
            }
        }
        _ => lines.push(Line::from(Span::styled(
            "No recent news available",
            theme::muted(),
        ))),
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "TOP INSIDER SELLERS",
        theme::column_header(),
    )));
    match company.top_insiders.as_deref() {
        Some(insiders) if !insiders.is_empty() => {
            for insider in insiders {
                let role = insider
                    .role
                    .as_deref()
                    .map(|r| format!(" ({r})"))
                    .unwrap_or_default();
                lines.push(Line::from(vec![
                    Span::styled(format!("{}{role}", insider.name), theme::secondary()),
                    Span::styled(
                        format!("  {}  {}", fmt_shares(insider.shares), fmt_value(insider.value)),
                        theme::muted(),
                    ),
                ]));
            }
        }
        _ => lines.push(Line::from(Span::styled(
            "No insider data available",
            theme::muted(),
        ))),
    }

    if !company.sources.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("DATA SOURCES", theme::column_header())));
        let mut chips: Vec<(&String, &String)> = company.sources.iter().collect();
        chips.sort();
        let chips = chips
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(chips, theme::muted())));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[4]);
}
