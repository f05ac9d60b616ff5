use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::palette::select_color;
use crate::types::{HostStats, Palette};
use crate::utils::scale_number;

pub fn draw_hosts(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (top, worst) = match &app.status {
        Some(s) => (s.top_downloaders.as_slice(), s.worst_rtt.as_slice()),
        None => (&[][..], &[][..]),
    };
    draw_host_table(f, chunks[0], " Top Downloaders ", top, app.palette);
    draw_host_table(f, chunks[1], " Worst RTT ", worst, app.palette);
}

fn draw_host_table(f: &mut Frame, area: Rect, title: &'static str, hosts: &[HostStats], palette: Palette) {
    let header = Row::new(vec!["Host", "Down", "Up", "RTT"]).style(
        Style::default()
            .fg(Color::Rgb(130, 150, 190))
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = hosts.iter().map(|h| host_row(h, palette)).collect();
    let widths = [
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::Rgb(160, 180, 220))
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(30, 50, 85)))
            .style(Style::default().bg(Color::Rgb(8, 12, 24))),
    );
    f.render_widget(table, area);
}

/// RTT is in milliseconds, which is what the palette brackets are cut for.
fn host_row(h: &HostStats, palette: Palette) -> Row<'static> {
    let rtt_color = select_color(h.median_tcp_rtt as f64, palette).color();
    let (down, up) = h.bits_per_second;
    Row::new(vec![
        Cell::from(h.ip_address.clone()).style(Style::default().fg(Color::Rgb(90, 150, 210))),
        Cell::from(format!("{}bps", scale_number(down as f64)))
            .style(Style::default().fg(Color::Rgb(80, 210, 255))),
        Cell::from(format!("{}bps", scale_number(up as f64)))
            .style(Style::default().fg(Color::Rgb(210, 160, 255))),
        Cell::from(format!("{:.1} ms", h.median_tcp_rtt)).style(Style::default().fg(rtt_color)),
    ])
}
