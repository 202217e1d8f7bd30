use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let keybindings = [
        ("← / →", "Previous / next blood group"),
        ("0-8", "Select blood group by code"),
        ("↑ / ↓", "Navigate donors"),
        ("r", "Search again"),
        ("q / Esc", "Quit"),
    ];

    let items: Vec<ListItem> = keybindings
        .iter()
        .map(|(key, desc)| {
            let content = vec![
                Span::styled(
                    format!("{:10}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - "),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ];
            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keybindings")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}
