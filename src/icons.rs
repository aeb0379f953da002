//! Icon service for checkbox and marker glyphs
//!
//! Terminals differ wildly in what they can draw, so every glyph the task
//! list uses comes from one of three themes: emoji, Unicode symbols, or
//! plain ASCII.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub pending: &'static str,
    pub completed: &'static str,
    /// Selection marker, trailing space included
    pub selected: &'static str,
    pub input_prompt: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                pending: "🔳",
                completed: "✅",
                selected: "👉 ",
                input_prompt: "✏️",
            },
            IconTheme::Unicode => IconSet {
                pending: "☐",
                completed: "☑",
                selected: "▶ ",
                input_prompt: "❯",
            },
            IconTheme::Ascii => IconSet {
                pending: "[ ]",
                completed: "[x]",
                selected: "> ",
                input_prompt: ">",
            },
        }
    }

    /// Checkbox glyph for a task
    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        let icons = self.icons();
        if completed {
            icons.completed
        } else {
            icons.pending
        }
    }

    #[must_use]
    pub fn selected(&self) -> &'static str {
        self.icons().selected
    }

    #[must_use]
    pub fn input_prompt(&self) -> &'static str {
        self.icons().input_prompt
    }
}
