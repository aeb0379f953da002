//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the task column grows before it is centered with margins
pub const MAX_CONTENT_WIDTH: u16 = 80;

const TITLE_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const HINTS_HEIGHT: u16 = 1;

/// Screen regions of the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub title: Rect,
    pub input: Rect,
    pub list: Rect,
    pub footer: Option<Rect>,
    pub hints: Option<Rect>,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Horizontally center a column of at most [`MAX_CONTENT_WIDTH`] columns
    #[must_use]
    pub fn content_area(area: Rect) -> Rect {
        let width = area.width.min(MAX_CONTENT_WIDTH);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Split the content column into title, input, list, and the optional footer and hint line
    #[must_use]
    pub fn main_layout(area: Rect, show_footer: bool, show_hints: bool) -> MainLayout {
        let area = Self::content_area(area);

        let mut constraints = vec![
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ];
        if show_footer {
            constraints.push(Constraint::Length(FOOTER_HEIGHT));
        }
        if show_hints {
            constraints.push(Constraint::Length(HINTS_HEIGHT));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut rest = chunks.iter().skip(3).copied();
        let footer = if show_footer { rest.next() } else { None };
        let hints = if show_hints { rest.next() } else { None };

        MainLayout {
            title: chunks[0],
            input: chunks[1],
            list: chunks[2],
            footer,
            hints,
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate dialog dimensions (in percent) based on screen size
    #[must_use]
    pub fn dialog_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 90 } else { 70 };
        let height = if screen_height < 30 { 80 } else { 60 };
        (width, height)
    }
}
