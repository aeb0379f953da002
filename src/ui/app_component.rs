use crate::config::Config;
use crate::constants::{
    APP_TITLE, HINTS_INPUT, HINTS_LIST, LOG_CLEARED, LOG_FILTER_CHANGED, LOG_TASK_ADDED, LOG_TASK_NOT_FOUND,
    LOG_TASK_REJECTED, LOG_TASK_TOGGLED,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::todo::{Filter, TodoList};
use crate::ui::components::{DialogComponent, FooterComponent, InputComponent, TaskListComponent};
use crate::ui::core::{Action, Component, DialogType, EventType, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub struct AppComponent {
    // Component composition
    input: InputComponent,
    task_list: TaskListComponent,
    footer: FooterComponent,
    dialog: DialogComponent,

    // Application state
    todos: TodoList,
    focus: Focus,
    icons: IconService,
    show_key_hints: bool,

    // Services
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            input: InputComponent::new(),
            task_list: TaskListComponent::new(),
            footer: FooterComponent::new(),
            dialog,
            todos: TodoList::with_filter(config.ui.filter()),
            focus: Focus::Input,
            icons: IconService::new(config.ui.icon_theme),
            show_key_hints: config.ui.show_key_hints,
            logger,
            should_quit: false,
        };
        app.input.on_focus();
        app.task_list.on_blur();
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Index of the highlighted row among the visible tasks
    pub fn selected_index(&self) -> Option<usize> {
        self.task_list.list_state.selected()
    }

    /// Whether the footer would render the clear-completed control
    pub fn shows_clear_completed(&self) -> bool {
        !self.todos.is_empty() && self.footer.shows_clear_completed()
    }

    /// Feed one terminal event through the component tree
    pub fn handle_event(&mut self, event: EventType) {
        if let EventType::Key(key) = event {
            let action = self.handle_key_events(key);
            self.dispatch(action);
        }
    }

    /// Run an action through the components until something consumes it
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while next != Action::None {
            next = self.update(next);
        }
    }

    /// Push the current state down into the child components
    fn sync_component_data(&mut self) {
        self.input.update_data(self.todos.draft(), self.icons.clone());

        let visible = self.todos.visible_tasks().into_iter().cloned().collect();
        self.task_list
            .update_data(visible, self.todos.filter(), self.icons.clone());

        self.footer.update_data(
            self.todos.items_left_label(),
            self.todos.filter(),
            self.todos.completed_count(),
        );
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        match focus {
            Focus::Input => {
                self.task_list.on_blur();
                self.input.on_focus();
            }
            Focus::List => {
                self.input.on_blur();
                self.task_list.on_focus();
            }
        }
    }

    /// Shortcuts available while the task list has focus
    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::SetFilter(Filter::All),
            KeyCode::Char('2') => Action::SetFilter(Filter::Active),
            KeyCode::Char('3') => Action::SetFilter(Filter::Completed),
            KeyCode::Char('f') => Action::CycleFilter,
            KeyCode::Char('C') => Action::ClearCompleted,
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => Action::SetFocus(Focus::Input),
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('t') => Action::CycleIconTheme,
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Apply app-level actions to the task list state
    fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::InsertChar(c) => {
                self.todos.push_draft_char(c);
            }
            Action::DeleteChar => {
                self.todos.pop_draft_char();
            }
            Action::SubmitDraft => match self.todos.add_task() {
                Some(id) => {
                    let text = self.todos.get(id).map(|task| task.text().to_string()).unwrap_or_default();
                    self.logger.log(format!("{}: ID {} '{}'", LOG_TASK_ADDED, id, text));
                }
                None => self.logger.log(LOG_TASK_REJECTED.to_string()),
            },
            Action::ToggleTask(id) => {
                if self.todos.toggle_task(id) {
                    let state = match self.todos.get(id) {
                        Some(task) if task.is_completed() => "completed",
                        _ => "active",
                    };
                    self.logger.log(format!("{}: ID {} is now {}", LOG_TASK_TOGGLED, id, state));
                } else {
                    self.logger.log(format!("{}: ID {}", LOG_TASK_NOT_FOUND, id));
                }
            }
            Action::ClearCompleted => {
                let removed = self.todos.clear_completed();
                if removed > 0 {
                    self.logger.log(format!("{}: {} removed", LOG_CLEARED, removed));
                }
            }
            Action::SetFilter(filter) => {
                self.todos.set_filter(filter);
                self.logger.log(format!("{}: {}", LOG_FILTER_CHANGED, filter));
            }
            Action::CycleFilter => {
                let filter = self.todos.filter().next();
                return Action::SetFilter(filter);
            }
            Action::SetFocus(focus) => {
                self.set_focus(focus);
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger
                    .log(format!("Icon theme changed to {:?}", self.icons.theme()));
            }
            Action::Quit => {
                self.should_quit = true;
            }
            _ => {}
        }

        self.sync_component_data();
        Action::None
    }

    fn render_title(&self, f: &mut Frame, rect: Rect) {
        let title = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        f.render_widget(title, rect);
    }

    fn render_hints(&self, f: &mut Frame, rect: Rect) {
        let hints = match self.focus {
            Focus::Input => HINTS_INPUT,
            Focus::List => HINTS_LIST,
        };
        let paragraph = Paragraph::new(hints)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(paragraph, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.focus {
            Focus::Input => self.input.handle_key_events(key),
            Focus::List => match self.task_list.handle_key_events(key) {
                Action::None => self.handle_list_key(key),
                action => action,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        // Children get first pick, anything they pass through is app-level
        let action = self.task_list.update(action);
        let action = self.dialog.update(action);
        if action == Action::None {
            return action;
        }
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect, !self.todos.is_empty(), self.show_key_hints);

        self.render_title(f, layout.title);
        self.input.render(f, layout.input);
        self.task_list.render(f, layout.list);

        if let Some(footer_area) = layout.footer {
            self.footer.render(f, footer_area);
        }
        if let Some(hints_area) = layout.hints {
            self.render_hints(f, hints_area);
        }

        // Dialog renders last so it sits on top
        self.dialog.render(f, rect);
    }
}
