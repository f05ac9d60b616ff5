use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    spans.extend(key_span("q", "Quit"));
    spans.extend(key_span("c", app.palette_label));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Rgb(50, 60, 80))));
    let source = match app.status_source() {
        Some(path) => format!("status {}", path.display()),
        None => String::from("status polling off"),
    };
    spans.push(Span::styled(source, Style::default().fg(Color::Rgb(85, 100, 130))));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(14, 20, 36)));
    f.render_widget(paragraph, area);
}

fn key_span(key: &str, desc: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Rgb(255, 200, 80))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", desc),
            Style::default().fg(Color::Rgb(95, 108, 135)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::buffer_lines;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal.draw(|f| draw_status_bar(f, f.area(), app)).unwrap();
        buffer_lines(terminal.backend().buffer()).join("")
    }

    #[test]
    fn shows_toggle_label_and_source() {
        let mut app = App::new(&Config {
            status_file: Some(PathBuf::from("/run/lqos/status.json")),
            ..Config::default()
        });
        let text = render(&app);
        assert!(text.contains("(metaverse colors)"), "{text}");
        assert!(text.contains("status /run/lqos/status.json"), "{text}");

        app.toggle_palette();
        assert!(render(&app).contains("(regular colors)"));
    }

    #[test]
    fn polling_off_without_status_file() {
        let app = App::new(&Config::default());
        assert!(render(&app).contains("status polling off"));
    }
}
