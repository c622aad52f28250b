//! UI state: pane focus, field cursor, roster selection, redraw bookkeeping.

use registry_core::Field;

/// Which pane receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The registration form on the left.
    #[default]
    Form,
    /// The roster of registered students on the right.
    Records,
}

/// Mutable UI state, separate from the domain state in the store and the
/// form session. Nothing in here survives a restart.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Pane currently receiving input.
    pub focus: Focus,
    /// Form field the cursor sits on.
    pub focused_field: Field,
    /// Index into the roster list (kept clamped to the list length).
    pub selected_record: usize,
    needs_redraw: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::Records,
            Focus::Records => Focus::Form,
        };
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    /// Moves focus to the form with the cursor on the first field, for the
    /// start of an edit.
    pub fn focus_form_start(&mut self) {
        self.focus = Focus::Form;
        self.focused_field = Field::default();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Moves the roster selection down, stopping at the last record.
    pub fn select_next(&mut self, len: usize) {
        if self.selected_record + 1 < len {
            self.selected_record += 1;
        }
    }

    /// Moves the roster selection up, stopping at the first record.
    pub fn select_prev(&mut self) {
        self.selected_record = self.selected_record.saturating_sub(1);
    }

    /// Pulls the selection back in range after the roster shrank.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_record = self.selected_record.min(len.saturating_sub(1));
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Consumes the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
