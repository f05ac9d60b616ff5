use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Sparkline};
use ratatui::Frame;

use crate::app::App;
use crate::utils::scale_number;

pub fn draw_throughput(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let down: Vec<u64> = app.history.download.iter().copied().collect();
    let up: Vec<u64> = app.history.upload.iter().copied().collect();

    draw_sparkline(
        f,
        chunks[0],
        &down,
        SparkStyle {
            arrow: " ▼ ",
            name: "Download ",
            rate: app.down_bps,
            accent: Color::Rgb(50, 160, 255),
            value: Color::Rgb(80, 210, 255),
        },
    );
    draw_sparkline(
        f,
        chunks[1],
        &up,
        SparkStyle {
            arrow: " ▲ ",
            name: "Upload ",
            rate: app.up_bps,
            accent: Color::Rgb(180, 100, 255),
            value: Color::Rgb(210, 160, 255),
        },
    );
}

struct SparkStyle {
    arrow: &'static str,
    name: &'static str,
    rate: u64,
    accent: Color,
    value: Color,
}

fn draw_sparkline(f: &mut Frame, area: Rect, data: &[u64], s: SparkStyle) {
    let max = data.iter().copied().max().unwrap_or(1).max(1);

    let sparkline = Sparkline::default()
        .data(data)
        .max(max)
        .style(Style::default().fg(s.accent))
        .block(
            Block::default()
                .title(Line::from(vec![
                    Span::styled(
                        s.arrow,
                        Style::default().fg(s.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(s.name, Style::default().fg(Color::Rgb(120, 150, 200))),
                    Span::styled(
                        format!("{}bps", scale_number(s.rate as f64)),
                        Style::default().fg(s.value).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  peak {}bps ", scale_number(max as f64)),
                        Style::default().fg(Color::Rgb(85, 100, 130)),
                    ),
                ]))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(30, 50, 85)))
                .style(Style::default().bg(Color::Rgb(8, 12, 24))),
        );
    f.render_widget(sparkline, area);
}
