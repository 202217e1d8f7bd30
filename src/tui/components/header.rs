use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    eligibility::ResultOrder,
    registry::DonorRegistry,
    tui::app::App,
    utils,
};

pub fn render<R: DonorRegistry>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let order = match app.order() {
        ResultOrder::Registry => "registry order",
        ResultOrder::Name => "sorted by name",
    };

    let as_of = app
        .last_search
        .map(|date| utils::format_date(&date))
        .unwrap_or_else(|| "-".to_string());

    let title = vec![
        Span::styled(
            "Find Blood Donor",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Last donation more than {} ago", utils::format_cooldown(app.cooldown())),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | "),
        Span::styled(format!("As of {}", as_of), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(order, Style::default().fg(Color::Gray)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Line::from(title))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
