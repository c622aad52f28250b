//! Centralized styling for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Color scheme and styling rules shared by the widgets.
pub struct Theme;

impl Theme {
    pub fn new() -> Self {
        Self
    }

    /// Border of a pane, highlighted while it holds focus.
    pub fn pane_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// The `►` marker in front of the focused field or selected record.
    pub fn marker(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn field_label(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn field_value(&self) -> Style {
        Style::default().fg(Color::White)
    }

    /// Hint text standing in for an empty value.
    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    /// Block cursor drawn after the focused field's text.
    pub fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn record_title(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn record_detail(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
