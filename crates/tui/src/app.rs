//! Application loop: owns the store, the form session, and the UI state.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

use registry_core::{
    FieldKind, FormSession, Registration, RegistrationStore, StoreError, SubmitOutcome,
};

use crate::config::TuiConfig;
use crate::input::{InputHandler, KeyAction};
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::presentation::terminal::Tui;
use crate::presentation::ui::{self, RenderContext};
use crate::state::AppState;

/// How long one idle poll waits before the loop comes back around.
const POLL_INTERVAL_MS: u64 = 250;

/// The running application: domain state plus UI state plus the loop
/// driving both.
pub struct App {
    config: TuiConfig,
    store: RegistrationStore,
    session: FormSession,
    state: AppState,
    input: InputHandler,
    messages: MessageLog,
    rng: StdRng,
    drawn_revision: u64,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let rng = match config.sample_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let messages = MessageLog::new(config.ui.status_capacity);

        Self {
            store: RegistrationStore::new(),
            session: FormSession::new(),
            state: AppState::new(),
            input: InputHandler::new(),
            messages,
            rng,
            drawn_revision: 0,
            config,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// The loop is synchronous: block on the next terminal event, apply it,
    /// and redraw only when the store revision moved or the UI state asked
    /// for it. Idle polls draw nothing.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.seed_records();
        self.messages
            .push_text("Welcome to rollcall. Tab switches panes, Ctrl+Q quits.");
        self.render(terminal)?;

        loop {
            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key_press(key) {
                            break;
                        }
                    }
                    Event::Resize(_, _) => self.state.request_redraw(),
                    _ => {}
                }
            }

            if self.state.take_redraw() || self.store.revision() != self.drawn_revision {
                self.render(terminal)?;
            }
        }

        Ok(())
    }

    /// Applies one key press. Returns true when the app should exit.
    fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key, self.state.focus) {
            KeyAction::None => return false,
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return true;
            }
            KeyAction::SwitchPane => self.state.toggle_focus(),
            KeyAction::FillSample => self.fill_sample(),
            KeyAction::PrevField => self.state.prev_field(),
            KeyAction::NextField => self.state.next_field(),
            KeyAction::Insert(ch) => self.insert_char(ch),
            KeyAction::DeleteBack => self.delete_back(),
            KeyAction::PrevOption => self.cycle_option(-1),
            KeyAction::NextOption => self.cycle_option(1),
            KeyAction::Submit => self.submit(),
            KeyAction::CancelEdit => self.cancel_edit(),
            KeyAction::PrevRecord => self.state.select_prev(),
            KeyAction::NextRecord => self.state.select_next(self.store.len()),
            KeyAction::EditSelected => self.edit_selected(),
            KeyAction::DeleteSelected => self.delete_selected(),
        }
        self.state.request_redraw();
        false
    }

    /// Appends a typed character to the focused field. Dropdowns are
    /// choice-only and ignore typing.
    fn insert_char(&mut self, ch: char) {
        let field = self.state.focused_field;
        if matches!(field.kind(), FieldKind::Dropdown(_)) {
            return;
        }
        let mut value = self.session.draft().value(field).to_owned();
        value.push(ch);
        self.session.change_field(field, value);
    }

    /// Deletes the last character of the focused field; on a dropdown this
    /// clears the selection back to the empty non-choice.
    fn delete_back(&mut self) {
        let field = self.state.focused_field;
        if matches!(field.kind(), FieldKind::Dropdown(_)) {
            self.session.change_field(field, "");
            return;
        }
        let mut value = self.session.draft().value(field).to_owned();
        value.pop();
        self.session.change_field(field, value);
    }

    /// Steps the focused dropdown through its options. Does nothing on text
    /// and date fields.
    fn cycle_option(&mut self, step: isize) {
        let field = self.state.focused_field;
        let FieldKind::Dropdown(options) = field.kind() else {
            return;
        };
        let next = next_option(self.session.draft().value(field), options, step);
        self.session.change_field(field, next);
    }

    fn submit(&mut self) {
        match self.session.submit(&mut self.store) {
            Ok(SubmitOutcome::Created(record)) => {
                tracing::info!("Created registration {}", record.id);
                self.messages
                    .push_text(format!("Registered {}", describe(&record)));
            }
            Ok(SubmitOutcome::Updated(record)) => {
                tracing::info!("Updated registration {}", record.id);
                self.messages
                    .push_text(format!("Updated {}", describe(&record)));
            }
            Err(err) => self.report_store_error(err),
        }
    }

    fn cancel_edit(&mut self) {
        if self.session.is_editing() {
            self.session.cancel_edit();
            self.messages.push_text("Edit cancelled");
        }
    }

    /// Loads the selected roster entry into the form and moves focus there.
    fn edit_selected(&mut self) {
        let Some(record) = self.store.list().get(self.state.selected_record) else {
            return;
        };
        let id = record.id;
        match self.session.start_edit(&self.store, id) {
            Ok(()) => {
                tracing::info!("Editing registration {}", id);
                self.state.focus_form_start();
                self.messages
                    .push_text(format!("Editing {} (Enter saves, Esc cancels)", id));
            }
            Err(err) => self.report_store_error(err),
        }
    }

    fn delete_selected(&mut self) {
        let Some(record) = self.store.list().get(self.state.selected_record) else {
            return;
        };
        let id = record.id;
        let label = describe(record);
        match self.store.delete(id) {
            Ok(()) => {
                tracing::info!("Deleted registration {}", id);
                self.messages.push_text(format!("Deleted {label}"));
            }
            Err(err) => self.report_store_error(err),
        }
        self.state.clamp_selection(self.store.len());
    }

    /// Replaces the draft with generated sample data and pulls focus to the
    /// form so Enter submits it.
    fn fill_sample(&mut self) {
        self.session
            .replace_draft(registry_sample::sample_draft(&mut self.rng));
        self.state.focus_form();
        self.messages
            .push_text("Draft filled with sample data (Enter submits)");
    }

    /// Creates the configured number of sample registrations before the
    /// first frame.
    fn seed_records(&mut self) {
        for _ in 0..self.config.seed_records {
            let record = self.store.create(registry_sample::sample_profile(&mut self.rng));
            tracing::debug!("Seeded registration {}", record.id);
        }
        if self.config.seed_records > 0 {
            tracing::info!("Seeded {} sample registrations", self.config.seed_records);
            self.messages
                .push_text(format!("Seeded {} sample registrations", self.config.seed_records));
        }
    }

    fn report_store_error(&mut self, err: StoreError) {
        tracing::warn!("Store operation failed: {err}");
        self.messages
            .push(MessageEntry::new(err.to_string(), MessageLevel::Warning));
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            store: &self.store,
            session: &self.session,
            state: &self.state,
            messages: &self.messages,
            status_panel_height: self.config.ui.status_panel_height,
        };
        ui::render(terminal, &ctx)?;
        self.drawn_revision = self.store.revision();
        Ok(())
    }
}

/// Steps a dropdown value through the ring of its options plus the empty
/// non-choice, wrapping in both directions.
fn next_option(current: &str, options: &[&str], step: isize) -> String {
    let ring = options.len() as isize + 1;
    let position = options
        .iter()
        .position(|option| *option == current)
        .map(|idx| idx as isize + 1)
        .unwrap_or(0);
    let next = (position + step).rem_euclid(ring);
    if next == 0 {
        String::new()
    } else {
        options[(next - 1) as usize].to_owned()
    }
}

/// Status-line description of a record: the name when one was given,
/// otherwise just the id.
fn describe(record: &Registration) -> String {
    if record.profile.name.is_empty() {
        record.id.to_string()
    } else {
        format!("{} ({})", record.profile.name, record.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use registry_core::{DEGREE_OPTIONS, Field, FormMode};

    use crate::config::UiConfig;

    fn test_app() -> App {
        App::new(TuiConfig {
            ui: UiConfig::default(),
            seed_records: 0,
            sample_seed: Some(7),
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            assert!(!app.handle_key_press(key(*code)));
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_press(key(KeyCode::Char(ch)));
        }
    }

    /// Down-arrows from the top of the form to the given field.
    fn focus_field(app: &mut App, target: Field) {
        while app.state.focused_field != target {
            press(app, &[KeyCode::Down]);
        }
    }

    #[test]
    fn typing_appends_to_the_focused_field() {
        let mut app = test_app();
        type_text(&mut app, "Jo");
        assert_eq!(app.session.draft().value(Field::Name), "Jo");

        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.session.draft().value(Field::Name), "J");
    }

    #[test]
    fn enter_submits_and_resets_the_form() {
        let mut app = test_app();
        type_text(&mut app, "John Doe");
        press(&mut app, &[KeyCode::Enter]);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.list()[0].profile.name, "John Doe");
        assert!(app.session.draft().is_blank());

        let last = app.messages.recent(1).next().expect("submit logs a message");
        assert!(last.text.contains("John Doe"));
    }

    #[test]
    fn dropdowns_cycle_and_ignore_typing() {
        let mut app = test_app();
        focus_field(&mut app, Field::Degree);

        type_text(&mut app, "abc");
        assert_eq!(app.session.draft().value(Field::Degree), "");

        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.session.draft().value(Field::Degree), DEGREE_OPTIONS[0]);

        // Forward through the remaining options and back to the non-choice.
        for _ in 0..DEGREE_OPTIONS.len() {
            press(&mut app, &[KeyCode::Right]);
        }
        assert_eq!(app.session.draft().value(Field::Degree), "");

        press(&mut app, &[KeyCode::Left]);
        assert_eq!(
            app.session.draft().value(Field::Degree),
            DEGREE_OPTIONS[DEGREE_OPTIONS.len() - 1]
        );

        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.session.draft().value(Field::Degree), "");
    }

    #[test]
    fn roster_keys_edit_the_selected_record() {
        let mut app = test_app();
        type_text(&mut app, "John Doe");
        press(&mut app, &[KeyCode::Enter]);
        type_text(&mut app, "Jane Doe");
        press(&mut app, &[KeyCode::Enter]);

        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Enter]);
        assert!(app.session.is_editing());
        assert_eq!(app.state.focus, crate::state::Focus::Form);
        assert_eq!(app.session.draft().value(Field::Name), "Jane Doe");

        type_text(&mut app, "-Smith");
        press(&mut app, &[KeyCode::Enter]);

        assert_eq!(app.store.len(), 2);
        assert_eq!(app.store.list()[1].profile.name, "Jane Doe-Smith");
        assert_eq!(app.session.mode(), FormMode::Creating);
    }

    #[test]
    fn deleting_the_last_entry_clamps_the_selection() {
        let mut app = test_app();
        type_text(&mut app, "John Doe");
        press(&mut app, &[KeyCode::Enter]);
        type_text(&mut app, "Jane Doe");
        press(&mut app, &[KeyCode::Enter]);

        press(&mut app, &[KeyCode::Tab, KeyCode::Down]);
        assert_eq!(app.state.selected_record, 1);

        press(&mut app, &[KeyCode::Char('d')]);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.list()[0].profile.name, "John Doe");
        assert_eq!(app.state.selected_record, 0);
    }

    #[test]
    fn submitting_an_edit_whose_target_vanished_reports_not_found() {
        let mut app = test_app();
        type_text(&mut app, "John Doe");
        press(&mut app, &[KeyCode::Enter]);

        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
        assert!(app.session.is_editing());

        // Delete the record out from under the edit, then submit it.
        press(&mut app, &[KeyCode::Tab, KeyCode::Char('d'), KeyCode::Tab]);
        press(&mut app, &[KeyCode::Enter]);

        assert!(app.store.is_empty());
        assert_eq!(app.session.mode(), FormMode::Creating);
        let last = app.messages.recent(1).next().expect("failure logs a message");
        assert_eq!(last.level, MessageLevel::Warning);
        assert!(last.text.contains("no registration"));
    }

    #[test]
    fn escape_cancels_an_edit_but_not_a_fresh_draft() {
        let mut app = test_app();
        type_text(&mut app, "John Doe");
        press(&mut app, &[KeyCode::Enter]);

        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
        assert!(app.session.is_editing());
        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.session.is_editing());
        assert!(app.session.draft().is_blank());

        type_text(&mut app, "Half typed");
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.session.draft().value(Field::Name), "Half typed");
    }

    #[test]
    fn ctrl_g_fills_the_draft_with_sample_data() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Tab]);
        assert!(!app.handle_key_press(ctrl('g')));

        assert!(!app.session.draft().is_blank());
        assert_eq!(app.state.focus, crate::state::Focus::Form);
    }

    #[test]
    fn quit_works_from_both_panes() {
        let mut app = test_app();
        assert!(app.handle_key_press(ctrl('q')));

        let mut app = test_app();
        press(&mut app, &[KeyCode::Tab]);
        assert!(app.handle_key_press(key(KeyCode::Char('q'))));
    }

    #[test]
    fn seeding_fills_the_store_before_the_first_frame() {
        let mut app = App::new(TuiConfig {
            ui: UiConfig::default(),
            seed_records: 3,
            sample_seed: Some(11),
        });
        app.seed_records();
        assert_eq!(app.store.len(), 3);
        assert!(app.store.revision() > 0);
    }

    #[test]
    fn next_option_wraps_through_the_empty_choice() {
        let options = &["a", "b", "c"];
        assert_eq!(next_option("", options, 1), "a");
        assert_eq!(next_option("a", options, 1), "b");
        assert_eq!(next_option("c", options, 1), "");
        assert_eq!(next_option("", options, -1), "c");
        assert_eq!(next_option("a", options, -1), "");
        // A value not in the list steps out of the empty slot.
        assert_eq!(next_option("typed", options, 1), "a");
    }
}
