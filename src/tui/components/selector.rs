use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::{donor::BloodGroup, registry::DonorRegistry, tui::app::App};

pub fn render<R: DonorRegistry>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let titles: Vec<String> = std::iter::once("None".to_string())
        .chain(BloodGroup::ALL.iter().map(|group| group.label().to_string()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.selection().code() as usize)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Blood Group")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
