use crate::constants::CLEAR_COMPLETED_LABEL;
use crate::todo::Filter;
use crate::ui::core::{Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Footer below the task list: items left, filter selectors and the clear control
#[derive(Debug, Default)]
pub struct FooterComponent {
    pub items_left: String,
    pub filter: Filter,
    pub completed_count: usize,
}

impl FooterComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, items_left: String, filter: Filter, completed_count: usize) {
        self.items_left = items_left;
        self.filter = filter;
        self.completed_count = completed_count;
    }

    /// Whether the clear-completed control is currently shown
    pub fn shows_clear_completed(&self) -> bool {
        self.completed_count > 0
    }

    fn filter_selectors(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, filter) in Filter::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let key = format!("{}:", index + 1);
            spans.push(Span::styled(key, Style::default().fg(Color::DarkGray)));

            let style = if *filter == self.filter {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(filter.label(), style));
        }
        Line::from(spans)
    }
}

impl Component for FooterComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // The footer is driven by list shortcuts, it never takes focus
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Min(0),
                Constraint::Length(CLEAR_COMPLETED_LABEL.len() as u16 + 4),
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.items_left.clone())
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Left),
            columns[0],
        );

        f.render_widget(
            Paragraph::new(self.filter_selectors()).alignment(Alignment::Center),
            columns[1],
        );

        if self.shows_clear_completed() {
            let clear = Line::from(vec![
                Span::styled("C:", Style::default().fg(Color::DarkGray)),
                Span::styled(CLEAR_COMPLETED_LABEL, Style::default().fg(Color::Gray)),
            ]);
            f.render_widget(Paragraph::new(clear).alignment(Alignment::Right), columns[2]);
        }
    }
}
