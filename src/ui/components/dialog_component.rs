use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = "\
ADDING TASKS
------------
Type        Edit the new task text
Enter       Add the task (blank text is ignored)
Backspace   Delete the last character
Tab / Esc   Move to the task list

TASK LIST
---------
j/k ↑/↓     Move selection
Space/x     Toggle completion
1 / 2 / 3   Show All / Active / Completed
f           Cycle filter
C           Clear completed tasks
i / a / Tab Back to the input box

GENERAL
-------
?           Toggle this help
G           Show logs
t           Cycle icon theme
q / Esc     Quit
Ctrl+C      Quit from anywhere";

/// Modal overlay for the help text and the in-memory logs
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: u16,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn content(&self, dialog_type: DialogType) -> Vec<Line<'static>> {
        match dialog_type {
            DialogType::Help => HELP_TEXT.lines().map(|line| Line::from(line.to_string())).collect(),
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                if logs.is_empty() {
                    vec![Line::from("No log entries yet.")]
                } else {
                    logs.into_iter().map(Line::from).collect()
                }
            }
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (self.dialog_type, key.code) {
            (None, _) => Action::None,
            (_, KeyCode::Esc | KeyCode::Char('q')) => Action::HideDialog,
            (Some(DialogType::Help), KeyCode::Char('?')) => Action::HideDialog,
            (Some(DialogType::Logs), KeyCode::Char('G')) => Action::HideDialog,
            (_, KeyCode::Up | KeyCode::Char('k')) => Action::DialogScrollUp,
            (_, KeyCode::Down | KeyCode::Char('j')) => Action::DialogScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            Action::DialogScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::DialogScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type else {
            return;
        };

        let (width, height) = LayoutManager::dialog_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let (title, color) = match dialog_type {
            DialogType::Help => (DIALOG_TITLE_HELP, Color::Cyan),
            DialogType::Logs => (DIALOG_TITLE_LOGS, Color::Magenta),
        };

        let lines = self.content(dialog_type);
        let max_offset = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(color));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        f.render_widget(paragraph, area);
    }
}
