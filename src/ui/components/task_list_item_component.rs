use crate::icons::IconService;
use crate::todo::Task;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One row of the task list: checkbox glyph followed by the task text
#[derive(Debug, Clone)]
pub struct TaskItem<'a> {
    pub task: &'a Task,
    pub icons: &'a IconService,
}

impl<'a> TaskItem<'a> {
    pub fn new(task: &'a Task, icons: &'a IconService) -> Self {
        Self { task, icons }
    }

    /// Render the row, wrapping the text so it fits in `width` columns
    pub fn render(&self, selected: bool, width: u16) -> ListItem<'static> {
        let completed = self.task.is_completed();

        let checkbox_style = if completed {
            Style::default().fg(Color::Green)
        } else if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        // Completed tasks are dimmed and crossed out
        let text_style = match (completed, selected) {
            (true, _) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            (false, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::White),
        };

        let checkbox = Span::styled(format!("{} ", self.icons.checkbox(completed)), checkbox_style);
        let indent = " ".repeat(checkbox.width());
        let text_width = (width as usize).saturating_sub(checkbox.width()).max(1);

        let mut chunks = wrap_text(self.task.text(), text_width).into_iter();
        let first = chunks.next().unwrap_or_default();
        let mut lines = vec![Line::from(vec![checkbox, Span::styled(first, text_style)])];
        for chunk in chunks {
            lines.push(Line::from(vec![Span::raw(indent.clone()), Span::styled(chunk, text_style)]));
        }

        ListItem::new(lines)
    }
}

/// Break `text` into pieces of at most `width` display columns, splitting anywhere
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in text.chars() {
        let char_width = Span::raw(c.to_string()).width();
        if current_width + char_width > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += char_width;
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}
