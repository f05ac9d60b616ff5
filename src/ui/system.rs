use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::palette::select_color;
use crate::types::Palette;
use crate::utils::scale_number;

pub fn draw_system(f: &mut Frame, area: Rect, app: &App) {
    let gauge_width: u16 = area.width.saturating_sub(20).min(40);
    let sample = &app.system;

    let ram_pct = sample.ram_percent();
    let mut lines = vec![Line::from(
        [
            vec![Span::styled(
                "  RAM  ",
                Style::default()
                    .fg(Color::Rgb(130, 150, 190))
                    .add_modifier(Modifier::BOLD),
            )],
            render_gauge(ram_pct, gauge_width, app.palette),
            vec![Span::styled(
                format!(
                    "  {}B / {}B",
                    scale_number(sample.ram_used as f64),
                    scale_number(sample.ram_total as f64)
                ),
                Style::default().fg(Color::Rgb(100, 120, 160)),
            )],
        ]
        .concat(),
    )];

    for (i, usage) in sample.cpu.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("  {:<4} ", format!("#{i}")),
            Style::default().fg(Color::Rgb(95, 108, 135)),
        )];
        spans.extend(render_gauge(*usage as f64, gauge_width, app.palette));
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" CPU / RAM  {} ", sample.cpu.len()),
            Style::default()
                .fg(Color::Rgb(160, 180, 220))
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(30, 50, 85)))
        .style(Style::default().bg(Color::Rgb(8, 12, 24)));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ─── Gauge bar rendering ─────────────────────────────────────────────────────

/// Bar and percentage both take the palette color for `pct`.
fn render_gauge(pct: f64, width: u16, palette: Palette) -> Vec<Span<'static>> {
    let pct = pct.clamp(0.0, 100.0);
    let fill = select_color(pct, palette).color();
    let filled = ((pct / 100.0) * width as f64).round() as u16;
    let empty = width.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled as usize),
            Style::default().fg(fill),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty as usize),
            Style::default().fg(Color::Rgb(25, 35, 55)),
        ));
    }
    spans.push(Span::styled(format!(" {:>5.1}%", pct), Style::default().fg(fill)));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_uses_palette_color() {
        let spans = render_gauge(60.0, 10, Palette::Metaverse);
        assert_eq!(spans[0].content, "██████");
        assert_eq!(spans[0].style.fg, Some(Color::Rgb(0xbf, 0x3d, 0x5e)));
        assert_eq!(spans.last().unwrap().content, "  60.0%");
    }

    #[test]
    fn gauge_clamps_out_of_range() {
        let spans = render_gauge(250.0, 4, Palette::Regular);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "████");
        assert_eq!(spans[1].content, " 100.0%");
    }
}
