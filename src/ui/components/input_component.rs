use crate::constants::{INPUT_PLACEHOLDER, INPUT_TITLE};
use crate::icons::IconService;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Single-line input box bound to the draft text
pub struct InputComponent {
    pub draft: String,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for InputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputComponent {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            focused: true,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, draft: &str, icons: IconService) {
        self.draft.clear();
        self.draft.push_str(draft);
        self.icons = icons;
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitDraft,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => Action::SetFocus(Focus::List),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", INPUT_TITLE))
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::styled(
            format!("{} ", self.icons.input_prompt()),
            Style::default().fg(border_color),
        )];

        if !self.draft.is_empty() {
            spans.push(Span::styled(self.draft.clone(), Style::default().fg(Color::White)));
        }
        if self.focused {
            spans.push(Span::styled("█", Style::default().fg(Color::White)));
        }
        if self.draft.is_empty() {
            spans.push(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }

        // Scroll horizontally so the end of the draft and the cursor stay in view
        let line = Line::from(spans);
        let inner_width = rect.width.saturating_sub(2) as usize;
        let offset = line.width().saturating_sub(inner_width);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);

        f.render_widget(Paragraph::new(line).block(block).scroll((0, offset)), rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
