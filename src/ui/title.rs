use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::network::status::{host_count_label, show_reload_warning};
use crate::utils::format_elapsed;

pub fn draw_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let now = Local::now().format("%H:%M:%S").to_string();
    let dur = format_elapsed(app.session_start.elapsed());
    let separator = || Span::styled(" \u{2502} ", Style::default().fg(Color::Rgb(35, 50, 75)));

    let hosts = match &app.status {
        Some(status) => Span::styled(
            format!("{} ", host_count_label(&status.host_counts)),
            Style::default()
                .fg(Color::Rgb(80, 200, 120))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            "hosts: n/a ",
            Style::default().fg(Color::Rgb(85, 100, 130)),
        ),
    };

    let mut spans = vec![
        Span::styled(
            " \u{25C8} QOSVIEW ",
            Style::default()
                .fg(Color::Rgb(80, 200, 255))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Shaper Dashboard",
            Style::default().fg(Color::Rgb(130, 150, 190)),
        ),
        separator(),
        Span::styled(
            format!("{} ", app.interface_name),
            Style::default().fg(Color::Rgb(90, 150, 210)),
        ),
        separator(),
        hosts,
    ];

    if show_reload_warning(app.status.as_ref()) {
        spans.push(Span::styled(
            " \u{26A0} RELOAD REQUIRED ",
            Style::default()
                .fg(Color::Rgb(8, 12, 24))
                .bg(Color::Rgb(255, 200, 80))
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.extend([
        separator(),
        Span::styled(
            format!("\u{23F1} {} ", dur),
            Style::default().fg(Color::Rgb(110, 120, 150)),
        ),
        Span::styled(
            format!(" {} ", now),
            Style::default().fg(Color::Rgb(85, 95, 120)),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(30, 50, 85)))
        .style(Style::default().bg(Color::Rgb(8, 12, 24)));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
