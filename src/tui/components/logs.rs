use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::{
    registry::DonorRegistry,
    tui::app::{App, LogLevel},
};

pub fn render<R: DonorRegistry>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let items: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|log| {
            let (icon, color) = match log.level {
                LogLevel::Info => ("ℹ", Color::Blue),
                LogLevel::Success => ("✓", Color::Green),
                LogLevel::Warning => ("⚠", Color::Yellow),
                LogLevel::Error => ("✗", Color::Red),
            };

            let content = vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(
                    log.timestamp.format("[%H:%M:%S]").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::raw(log.message.as_str()),
            ];

            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Activity")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}
