use chrono::{DateTime, Duration, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    donor::BloodGroupSelection,
    eligibility::{EligibilityEngine, ResultOrder},
    error::DonorError,
    finder::{CycleOutcome, DonorFinder},
    presenter::TableSurface,
    registry::DonorRegistry,
};

const MAX_LOG_ENTRIES: usize = 100;
/// Selector positions: "none" plus the eight groups.
const SELECTOR_SLOTS: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

pub struct App<R> {
    pub should_quit: bool,
    pub selected_row: usize,
    pub status_message: String,
    pub logs: Vec<LogEntry>,
    /// Reference date of the last completed search.
    pub last_search: Option<NaiveDate>,
    finder: DonorFinder<R, TableSurface>,
}

impl<R: DonorRegistry> App<R> {
    pub fn new(engine: EligibilityEngine<R>) -> Self {
        Self {
            should_quit: false,
            selected_row: 0,
            status_message: "Select a blood group with ←/→ or 0-8".to_string(),
            logs: Vec::new(),
            last_search: None,
            finder: DonorFinder::new(engine, TableSurface::new()),
        }
    }

    pub fn selection(&self) -> BloodGroupSelection {
        self.finder.selection()
    }

    pub fn table(&self) -> &TableSurface {
        self.finder.surface()
    }

    pub fn cooldown(&self) -> Duration {
        self.finder.engine().cooldown()
    }

    pub fn order(&self) -> ResultOrder {
        self.finder.engine().order()
    }

    pub fn handle_key(&mut self, key: KeyEvent, today: NaiveDate) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Right | KeyCode::Char('l') => self.next_group(today),
            KeyCode::Left | KeyCode::Char('h') => self.previous_group(today),
            KeyCode::Down | KeyCode::Char('j') => self.next_row(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_row(),
            KeyCode::Char('r') => self.refresh(today),
            KeyCode::Char(digit @ '0'..='8') => {
                let code = digit as u8 - b'0';
                self.change_blood_group(code, today);
            }
            _ => {}
        }
    }

    pub fn next_group(&mut self, today: NaiveDate) {
        let code = (self.selection().code() + 1) % SELECTOR_SLOTS;
        self.change_blood_group(code, today);
    }

    pub fn previous_group(&mut self, today: NaiveDate) {
        let code = (self.selection().code() + SELECTOR_SLOTS - 1) % SELECTOR_SLOTS;
        self.change_blood_group(code, today);
    }

    /// Run the search again for the current selection.
    pub fn refresh(&mut self, today: NaiveDate) {
        let code = self.selection().code();
        self.change_blood_group(code, today);
    }

    pub fn change_blood_group(&mut self, code: u8, today: NaiveDate) {
        let outcome = self.finder.on_blood_group_changed(code, today);
        self.selected_row = 0;

        match outcome {
            CycleOutcome::Rendered(count) => {
                self.last_search = Some(today);
                let message = format!(
                    "{} eligible {} donors as of {}",
                    count,
                    self.selection(),
                    today.format("%Y-%m-%d")
                );
                self.add_log(LogLevel::Success, &message);
                self.status_message = message;
            }
            CycleOutcome::Cleared => {
                self.last_search = None;
                self.add_log(LogLevel::Info, "Selection cleared");
                self.status_message = "No blood group selected".to_string();
            }
            CycleOutcome::Failed(e) => {
                let level = match e {
                    DonorError::InvalidArgument(_) => LogLevel::Warning,
                    _ => LogLevel::Error,
                };
                self.add_log(level, &format!("Search failed: {}", e));
                self.status_message = format!("Search failed: {}", e);
            }
        }
    }

    pub fn next_row(&mut self) {
        let len = self.table().len();
        if len > 0 {
            self.selected_row = (self.selected_row + 1) % len;
        }
    }

    pub fn previous_row(&mut self) {
        let len = self.table().len();
        if len > 0 {
            if self.selected_row == 0 {
                self.selected_row = len - 1;
            } else {
                self.selected_row -= 1;
            }
        }
    }

    fn add_log(&mut self, level: LogLevel, message: &str) {
        self.logs.push(LogEntry {
            timestamp: Local::now(),
            level,
            message: message.to_string(),
        });
        if self.logs.len() > MAX_LOG_ENTRIES {
            self.logs.remove(0);
        }
    }
}
