//! Input processing for the terminal frontend.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Focus;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move focus to the other pane.
    SwitchPane,
    /// Replace the draft with generated sample data.
    FillSample,
    /// Move the field cursor up the form.
    PrevField,
    /// Move the field cursor down the form.
    NextField,
    /// Append a character to the focused field.
    Insert(char),
    /// Delete backwards in the focused field.
    DeleteBack,
    /// Step the focused dropdown to its previous option.
    PrevOption,
    /// Step the focused dropdown to its next option.
    NextOption,
    /// Commit the draft.
    Submit,
    /// Abandon an in-progress edit.
    CancelEdit,
    /// Move the roster selection up.
    PrevRecord,
    /// Move the roster selection down.
    NextRecord,
    /// Load the selected record into the form.
    EditSelected,
    /// Delete the selected record.
    DeleteSelected,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for whichever pane holds focus.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Control chords and Tab work everywhere; everything else depends on
    /// the focused pane.
    pub fn handle_key(&self, key: KeyEvent, focus: Focus) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control_chord(key.code);
        }
        if key.code == KeyCode::Tab {
            return KeyAction::SwitchPane;
        }

        match focus {
            Focus::Form => self.handle_form_key(key.code),
            Focus::Records => self.handle_records_key(key.code),
        }
    }

    fn handle_control_chord(&self, code: KeyCode) -> KeyAction {
        let KeyCode::Char(raw) = code else {
            return KeyAction::None;
        };
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'g' => KeyAction::FillSample,
            _ => KeyAction::None,
        }
    }

    fn handle_form_key(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up => KeyAction::PrevField,
            KeyCode::Down => KeyAction::NextField,
            KeyCode::Left => KeyAction::PrevOption,
            KeyCode::Right => KeyAction::NextOption,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::CancelEdit,
            KeyCode::Backspace => KeyAction::DeleteBack,
            KeyCode::Char(ch) => KeyAction::Insert(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_records_key(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up => KeyAction::PrevRecord,
            KeyCode::Down => KeyAction::NextRecord,
            KeyCode::Enter => KeyAction::EditSelected,
            KeyCode::Delete => KeyAction::DeleteSelected,
            // Esc backs out of the roster, which lands on the form.
            KeyCode::Esc => KeyAction::SwitchPane,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'e' => KeyAction::EditSelected,
                'd' => KeyAction::DeleteSelected,
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

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

    #[test]
    fn control_chords_work_in_both_panes() {
        let handler = InputHandler::new();
        for focus in [Focus::Form, Focus::Records] {
            assert_eq!(handler.handle_key(ctrl('q'), focus), KeyAction::Quit);
            assert_eq!(handler.handle_key(ctrl('g'), focus), KeyAction::FillSample);
            assert_eq!(handler.handle_key(ctrl('x'), focus), KeyAction::None);
        }
    }

    #[test]
    fn tab_switches_panes_from_anywhere() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), Focus::Form),
            KeyAction::SwitchPane
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), Focus::Records),
            KeyAction::SwitchPane
        );
    }

    #[test]
    fn form_keys_edit_the_draft() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('J')), Focus::Form),
            KeyAction::Insert('J')
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), Focus::Form),
            KeyAction::DeleteBack
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), Focus::Form),
            KeyAction::PrevField
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), Focus::Form),
            KeyAction::NextField
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), Focus::Form),
            KeyAction::PrevOption
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Right), Focus::Form),
            KeyAction::NextOption
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Focus::Form),
            KeyAction::Submit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), Focus::Form),
            KeyAction::CancelEdit
        );
    }

    #[test]
    fn q_is_text_in_the_form_but_quit_in_the_roster() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Focus::Form),
            KeyAction::Insert('q')
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Focus::Records),
            KeyAction::Quit
        );
    }

    #[test]
    fn roster_keys_drive_the_selection() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), Focus::Records),
            KeyAction::PrevRecord
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), Focus::Records),
            KeyAction::NextRecord
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Focus::Records),
            KeyAction::EditSelected
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('E')), Focus::Records),
            KeyAction::EditSelected
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('d')), Focus::Records),
            KeyAction::DeleteSelected
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Delete), Focus::Records),
            KeyAction::DeleteSelected
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), Focus::Records),
            KeyAction::SwitchPane
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::F(5)), Focus::Form),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), Focus::Records),
            KeyAction::None
        );
    }
}
