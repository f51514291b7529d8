//! Command palette modal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::App;
use crate::ui::theme;

enum DisplayLine<'a> {
    Section(&'static str),
    Item { index: usize, label: &'a str },
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let screen = frame.area();
    let width = screen.width.saturating_sub(8).clamp(30, 64);
    let height = screen.height.saturating_sub(4).clamp(8, 20);
    let area = Rect::new(
        screen.width.saturating_sub(width) / 2,
        screen.height / 6,
        width,
        height,
    )
    .intersection(screen);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(" Command Palette ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // query input
            Constraint::Min(1),    // results
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let query = app.palette.query();
    let input = Line::from(vec![
        Span::styled("> ", theme::muted()),
        Span::raw(query.to_string()),
        Span::styled("▌", theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(input), chunks[0]);

    app.hit.palette = Some(area);
    app.hit.palette_rows.clear();

    if app.palette.items().is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled("No results found", theme::muted())))
            .centered();
        frame.render_widget(empty, chunks[1]);
    } else {
        render_results(frame, chunks[1], app);
    }

    let hints = Line::from(Span::styled("↑↓ navigate · ↵ select · esc close", theme::muted()));
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

fn render_results(frame: &mut Frame, area: Rect, app: &mut App) {
    let cursor = app.palette.cursor();
    let grouped = app.palette.grouped();

    // Flatten sections into display lines, tracking where the cursor lands.
    let mut lines = Vec::new();
    let mut cursor_line = 0;
    for (section, items) in &grouped {
        lines.push(DisplayLine::Section(section));
        for (index, item) in items {
            if *index == cursor {
                cursor_line = lines.len();
            }
            lines.push(DisplayLine::Item {
                index: *index,
                label: &item.label,
            });
        }
    }

    // Keep the active item scrolled into the nearest visible position.
    let viewport = area.height as usize;
    let scroll = if cursor_line >= viewport {
        cursor_line + 1 - viewport
    } else {
        0
    };

    let mut rendered = Vec::new();
    for (line_idx, line) in lines.iter().enumerate().skip(scroll).take(viewport) {
        match line {
            DisplayLine::Section(section) => {
                rendered.push(Line::from(Span::styled(
                    section.to_uppercase(),
                    theme::column_header(),
                )));
            }
            DisplayLine::Item { index, label } => {
                let y = area.y + (line_idx - scroll) as u16;
                app.hit.palette_rows.push((y, *index));
                let style = if *index == cursor {
                    Style::default().bg(theme::FOCUS_BG)
                } else {
                    theme::secondary()
                };
                rendered.push(Line::from(Span::styled(format!("  {label}"), style)));
            }
        }
    }
    frame.render_widget(Paragraph::new(rendered), area);
}
