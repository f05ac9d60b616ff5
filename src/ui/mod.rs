pub mod hosts;
pub mod speed;
pub mod status;
pub mod system;
pub mod title;

use ratatui::layout::{Constraint, Direction, Layout};
#[cfg(test)]
use ratatui::buffer::Buffer;
use ratatui::Frame;

use crate::app::App;

/// Master draw function — lays out all panes.
pub fn draw(f: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title bar
            Constraint::Length(10), // Throughput
            Constraint::Min(10),    // CPU / RAM | hosts
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[2]);

    title::draw_title_bar(f, main_layout[0], app);
    speed::draw_throughput(f, main_layout[1], app);
    system::draw_system(f, bottom[0], app);
    hosts::draw_hosts(f, bottom[1], app);
    status::draw_status_bar(f, main_layout[3], app);
}

/// Rendered rows as text, one `String` per line.
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}
