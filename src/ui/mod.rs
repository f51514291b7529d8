//! Shell layout: sidebar, header, page content, detail panel, overlays.

pub mod detail;
pub mod format;
pub mod palette;
pub mod scan;
pub mod settings;
pub mod sparkline;
pub mod table;
pub mod theme;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::route::Page;
use crate::state::toast::Severity;
use crate::state::App;

const SIDEBAR_WIDTH: u16 = 22;
const DETAIL_WIDTH: u16 = 44;

pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit.clear();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(frame.area());

    render_sidebar(frame, columns[0], app);
    render_main(frame, columns[1], app);

    if app.palette.is_open() {
        palette::render(frame, app);
    }
    render_toasts(frame, app);
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "INSIDER TERM",
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (key, page) in [
        ('1', Page::Dashboard),
        ('2', Page::Scan),
        ('3', Page::Settings),
    ] {
        let active = app.page == page;
        let marker = if active { "▸ " } else { "  " };
        let style = if active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            theme::secondary()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme::ACCENT)),
            Span::styled(format!("{key} "), theme::muted()),
            Span::styled(page.title(), style),
        ]));
    }

    if let Some(snapshot) = &app.snapshot {
        if !snapshot.available_sectors.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("SECTORS", theme::column_header())));
            let active_sector = app.sector();
            let all_style = if active_sector.is_none() {
                Style::default().fg(theme::ACCENT)
            } else {
                theme::secondary()
            };
            lines.push(Line::from(Span::styled("All sectors", all_style)));
            for sector in &snapshot.available_sectors {
                let style = if active_sector == Some(sector.as_str()) {
                    Style::default().fg(theme::ACCENT)
                } else {
                    theme::secondary()
                };
                lines.push(Line::from(Span::styled(sector.clone(), style)));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_main(frame: &mut Frame, area: Rect, app: &mut App) {
    let show_error = app.error.is_some();
    let provider_line = app.page == Page::Dashboard
        && app
            .snapshot
            .as_ref()
            .and_then(|s| s.provider_status.as_ref())
            .is_some_and(|p| !p.is_empty());

    let mut constraints = vec![Constraint::Length(1)];
    if show_error {
        constraints.push(Constraint::Length(1));
    }
    if provider_line {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(5));
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = 0;
    let mut take = || {
        let rect = rows[next];
        next += 1;
        rect
    };

    render_header(frame, take(), app);
    if show_error {
        if let Some(error) = &app.error {
            let banner = Line::from(vec![
                Span::styled(error.clone(), theme::error_banner()),
                Span::styled("  (r to retry)", theme::muted()),
            ]);
            frame.render_widget(Paragraph::new(banner), take());
        }
    }
    if provider_line {
        if let Some(status) = app.snapshot.as_ref().and_then(|s| s.provider_status.as_ref()) {
            let mut pairs: Vec<(&String, &String)> = status.iter().collect();
            pairs.sort();
            let text = pairs
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("  ");
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("Provider status: {text}"),
                    theme::muted(),
                ))),
                take(),
            );
        }
    }

    let content = take();
    match app.page {
        Page::Dashboard => render_dashboard(frame, content, app),
        Page::Scan => scan::render(frame, content, &app.scan),
        Page::Settings => settings::render(frame, content, &app.health, &app.providers),
    }

    render_footer(frame, take(), app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(app.page.title(), theme::title())];
    if app.page == Page::Dashboard {
        if let Some(snapshot) = &app.snapshot {
            spans.push(Span::styled(
                format!("  {} companies", snapshot.total_companies),
                theme::muted(),
            ));
            if !snapshot.as_of.is_empty() {
                spans.push(Span::styled(
                    format!(" · {}", snapshot.as_of),
                    theme::muted(),
                ));
            }
        }
        if app.loading {
            spans.push(Span::styled("  loading…", Style::default().fg(theme::ACCENT)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, app: &mut App) {
    // Clone out of the borrow so the table can take `&mut App`.
    let selected = app.selected_company().cloned();
    if let Some(company) = selected {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(DETAIL_WIDTH)])
            .split(area);
        table::render(frame, split[0], app);
        detail::render(frame, split[1], &company);
    } else {
        table::render(frame, area, app);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.page {
        Page::Dashboard => format!(
            "j/k move · enter detail · o sort ({}) · c clear filter · ctrl+k palette · [ ] history · r reload · q quit",
            app.sort.label()
        ),
        Page::Scan => "tab fields · enter run · a toggle view · ctrl+k palette · ctrl+c quit".to_string(),
        Page::Settings => "f refresh · ctrl+k palette · q quit".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, theme::muted()))),
        area,
    );
}

fn render_toasts(frame: &mut Frame, app: &App) {
    if app.toasts.is_empty() {
        return;
    }
    let screen = frame.area();
    let width = 44.min(screen.width.saturating_sub(2));
    let toasts = app.toasts.toasts();
    let count = toasts.len().min(5) as u16;
    if screen.height <= count + 1 {
        return;
    }
    let area = Rect::new(
        screen.width.saturating_sub(width + 1),
        screen.height - count - 1,
        width,
        count,
    );
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = toasts
        .iter()
        .rev()
        .take(count as usize)
        .rev()
        .map(|toast| {
            let style = match toast.severity {
                Severity::Info => theme::secondary(),
                Severity::Success => Style::default().fg(theme::POSITIVE),
                Severity::Error => Style::default().fg(theme::NEGATIVE),
            };
            Line::from(Span::styled(format!(" {} ", toast.message), style))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme::SECTION_BG)),
        area,
    );
}
