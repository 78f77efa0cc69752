use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyEvent};

use engine::{Category, EngineError, Ledger, LedgerStore};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{self, keymap::AppAction},
};

/// Input focus. The UI has no modes beyond this: one steady screen of
/// "form + list", with atomic transitions on add/delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Description,
    Amount,
    Category,
    List,
}

#[derive(Debug, Default)]
pub struct FormState {
    pub description: String,
    pub amount: String,
    /// Index into [`Category::ALL`].
    pub category: usize,
    /// Validation feedback for the last rejected submit.
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct AppState {
    pub ledger: Ledger,
    pub form: FormState,
    pub focus: Focus,
    pub selected: usize,
    pub tz: chrono_tz::Tz,
    /// Non-fatal problems (failed saves) shown in the bottom bar.
    pub status: Option<String>,
}

pub struct App {
    store: LedgerStore,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = LedgerStore::new(&config.data_path);
        let ledger = store.load()?;
        tracing::info!(
            count = ledger.len(),
            path = %store.path().display(),
            "ledger loaded"
        );

        let state = AppState {
            ledger,
            form: FormState::default(),
            focus: Focus::Description,
            selected: 0,
            tz: config.tz(),
            status: None,
        };

        Ok(Self {
            store,
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match ui::keymap::map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::Cancel => {
                if self.state.focus == Focus::List {
                    self.should_quit = true;
                } else {
                    self.state.focus = Focus::List;
                }
            }
            AppAction::NextField => {
                self.advance_focus();
            }
            AppAction::Submit => {
                if self.state.focus != Focus::List {
                    self.submit_form();
                }
            }
            AppAction::Backspace => {
                if let Some(field) = self.active_field_mut() {
                    field.pop();
                }
            }
            AppAction::Up => match self.state.focus {
                Focus::List => self.select_prev(),
                Focus::Category => self.cycle_category(-1),
                _ => {}
            },
            AppAction::Down => match self.state.focus {
                Focus::List => self.select_next(),
                Focus::Category => self.cycle_category(1),
                _ => {}
            },
            AppAction::Left => {
                if self.state.focus == Focus::Category {
                    self.cycle_category(-1);
                }
            }
            AppAction::Right => {
                if self.state.focus == Focus::Category {
                    self.cycle_category(1);
                }
            }
            AppAction::Delete => {
                if self.state.focus == Focus::List {
                    self.delete_selected();
                }
            }
            AppAction::Input(ch) => self.handle_char(ch),
            AppAction::None => {}
        }
    }

    fn handle_char(&mut self, ch: char) {
        match self.state.focus {
            Focus::Description | Focus::Amount => {
                if let Some(field) = self.active_field_mut() {
                    field.push(ch);
                }
            }
            Focus::Category => {}
            Focus::List => match ch {
                'q' => self.should_quit = true,
                'd' => self.delete_selected(),
                'j' => self.select_next(),
                'k' => self.select_prev(),
                'a' => self.state.focus = Focus::Description,
                _ => {}
            },
        }
    }

    fn advance_focus(&mut self) {
        self.state.focus = match self.state.focus {
            Focus::Description => Focus::Amount,
            Focus::Amount => Focus::Category,
            Focus::Category => Focus::List,
            Focus::List => Focus::Description,
        };
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.state.focus {
            Focus::Description => Some(&mut self.state.form.description),
            Focus::Amount => Some(&mut self.state.form.amount),
            Focus::Category | Focus::List => None,
        }
    }

    fn cycle_category(&mut self, step: isize) {
        let len = Category::ALL.len() as isize;
        let current = self.state.form.category as isize;
        self.state.form.category = ((current + step).rem_euclid(len)) as usize;
    }

    fn select_next(&mut self) {
        if self.state.ledger.is_empty() {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(self.state.ledger.len() - 1);
    }

    fn select_prev(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn submit_form(&mut self) {
        let category = Category::ALL[self.state.form.category];
        match self.state.ledger.add(
            &self.state.form.description,
            &self.state.form.amount,
            category,
            Utc::now(),
        ) {
            Ok(next) => {
                let record = &next.records()[0];
                tracing::info!(id = %record.id, %record, "expense recorded");
                self.commit(next);
                self.state.form.description.clear();
                self.state.form.amount.clear();
                self.state.form.message = None;
                self.state.selected = 0;
            }
            Err(err) => {
                tracing::debug!("rejected form input: {err}");
                self.state.form.message = Some(form_message(&err));
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(record) = self.state.ledger.records().get(self.state.selected) else {
            return;
        };
        let id = record.id.clone();

        let next = self.state.ledger.remove(&id);
        tracing::info!(%id, "expense removed");
        self.commit(next);
        if self.state.selected >= self.state.ledger.len() {
            self.state.selected = self.state.ledger.len().saturating_sub(1);
        }
    }

    /// Makes a snapshot current and mirrors it to storage.
    ///
    /// A failed save keeps the snapshot (the next save retries the full
    /// list) and surfaces the problem in the status line.
    fn commit(&mut self, next: Ledger) {
        match self.store.save(&next) {
            Ok(()) => self.state.status = None,
            Err(err) => {
                tracing::error!("failed to persist ledger: {err}");
                self.state.status = Some(format!("Не удалось сохранить: {err}"));
            }
        }
        self.state.ledger = next;
    }
}

fn form_message(err: &EngineError) -> String {
    match err {
        EngineError::InvalidDescription => "Введите описание.".to_string(),
        EngineError::InvalidAmount(_) => "Неверная сумма.".to_string(),
        other => other.to_string(),
    }
}
