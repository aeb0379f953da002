use crate::constants::{EMPTY_ACTIVE, EMPTY_ALL, EMPTY_COMPLETED, TASKS_TITLE};
use crate::icons::IconService;
use crate::todo::{Filter, Task, TaskId};
use crate::ui::components::task_list_item_component::TaskItem;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

/// Scrollable list of the tasks that pass the current filter
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub filter: Filter,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            filter: Filter::default(),
            focused: false,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, filter: Filter, icons: IconService) {
        self.tasks = tasks;
        self.filter = filter;
        self.icons = icons;
        self.update_list_state();
    }

    /// Id of the highlighted task, if any task is visible
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.list_state.selected().and_then(|index| self.tasks.get(index)).map(Task::id)
    }

    /// Keep the selection inside the visible range after the list changed
    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn empty_message(&self) -> &'static str {
        match self.filter {
            Filter::All => EMPTY_ALL,
            Filter::Active => EMPTY_ACTIVE,
            Filter::Completed => EMPTY_COMPLETED,
        }
    }

    fn block(&self) -> Block<'static> {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ({}) ", TASKS_TITLE, self.filter))
            .border_style(Style::default().fg(border_color))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => {
                // Note: Detailed logging done when action is processed by AppComponent
                self.selected_task_id().map_or(Action::None, Action::ToggleTask)
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.tasks.is_empty() {
            let empty_list = List::new(vec![ListItem::new(self.empty_message())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))])
            .block(self.block());
            f.render_widget(empty_list, rect);
            return;
        }

        let selected = self.list_state.selected();
        // Borders plus the column reserved for the highlight marker
        let marker_width = if self.focused { Span::raw(self.icons.selected()).width() } else { 0 };
        let text_width = rect.width.saturating_sub(2).saturating_sub(marker_width as u16);
        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                TaskItem::new(task, &self.icons).render(self.focused && selected == Some(index), text_width)
            })
            .collect();

        let mut list = List::new(items).block(self.block());
        if self.focused {
            list = list
                .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
                .highlight_symbol(self.icons.selected());
        }

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
