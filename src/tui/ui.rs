use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    config::Config,
    eligibility::EligibilityEngine,
    error::Result,
    registry::{DonorRegistry, SqliteRegistry},
    tui::{
        app::App,
        components,
        event::{Event, EventHandler},
    },
};

pub fn render_ui<R: DonorRegistry>(frame: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Blood group selector
            Constraint::Min(5),    // Donor table
            Constraint::Length(7), // Activity log / keybindings
            Constraint::Length(3), // Status bar
        ])
        .split(frame.size());

    components::header::render(frame, chunks[0], app);
    components::selector::render(frame, chunks[1], app);
    components::donor_table::render(frame, chunks[2], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    components::logs::render(frame, bottom[0], app);
    components::help::render(frame, bottom[1]);

    render_status_bar(frame, chunks[4], app);
}

fn render_status_bar<R: DonorRegistry>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let text = Line::from(vec![
        Span::styled(
            format!(" {} ", app.selection()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.status_message.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled("←/→: Blood group", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("q: Quit", Style::default().fg(Color::Red)),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

/// Open the registry, take over the terminal and run the finder until the
/// user quits.
pub async fn run_tui(config: Config) -> Result<()> {
    let registry = SqliteRegistry::open(&config.database.path)?;
    let engine = EligibilityEngine::from_config(registry, &config.eligibility);
    let mut app = App::new(engine);
    info!("Starting TUI with registry {}", config.database.path);

    let mut terminal = setup_terminal()?;

    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let result = run_loop(&mut terminal, &mut app, tick_rate).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            if let Err(e) = restore_terminal() {
                warn!("Failed to restore terminal: {}", e);
            }
        },
    )
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)
}

/// Run `step`; if it fails, run `undo` before handing back the error.
fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    step().map_err(|e| {
        undo();
        e
    })
}

async fn run_loop<B: Backend, R: DonorRegistry>(
    terminal: &mut Terminal<B>,
    app: &mut App<R>,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventHandler::new(tick_rate);

    while !app.should_quit {
        terminal.draw(|frame| render_ui(frame, app))?;

        match events.next().await {
            // The reference date is read per event so a long-running session
            // follows the calendar.
            Some(Event::Key(key)) => app.handle_key(key, Local::now().date_naive()),
            Some(Event::Tick) | Some(Event::Resize(_, _)) => {}
            None => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        donor::{BloodGroup, DonorRecord},
        eligibility::ResultOrder,
        registry::InMemoryRegistry,
    };
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;

    fn screen_text<R: DonorRegistry>(app: &App<R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render_ui(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_headers_and_rows() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 31).unwrap();
        let registry = InMemoryRegistry::new(vec![DonorRecord {
            id: 1,
            first_name: "Deepa".to_string(),
            last_name: "Varghese".to_string(),
            phone_number: "555-0177".to_string(),
            blood_group: BloodGroup::BNegative,
            last_donation_date: today - chrono::Duration::days(100),
        }]);
        let mut app = App::new(EligibilityEngine::new(
            registry,
            chrono::Duration::days(30),
            ResultOrder::Registry,
        ));
        app.change_blood_group(BloodGroup::BNegative.code(), today);

        let text = screen_text(&app);
        assert!(text.contains("First Name"));
        assert!(text.contains("Phone Number"));
        assert!(text.contains("Deepa"));
        assert!(text.contains("Varghese"));
    }

    #[test]
    fn failed_setup_step_is_undone() {
        let mut undone = false;
        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || undone = true,
        );
        assert!(result.is_err());
        assert!(undone);

        let mut undone = false;
        let result = undo_on_error(|| Ok(7), || undone = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!undone);
    }
}
