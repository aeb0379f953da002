use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use tasklist::config::Config;
use tasklist::logger::Logger;
use tasklist::ui::core::{Component, EventType};
use tasklist::ui::{AppComponent, LayoutManager};

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn add(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

/// Render the app into an in-memory terminal and return the screen as text
fn render(app: &mut AppComponent) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut screen = String::new();
    for row in buffer.content().chunks(width) {
        for cell in row {
            screen.push_str(cell.symbol());
        }
        screen.push('\n');
    }
    screen
}

fn ascii_app() -> AppComponent {
    let mut config = Config::default();
    config.ui.icon_theme = tasklist::icons::IconTheme::Ascii;
    AppComponent::new(&config, Logger::new())
}

#[test]
fn test_initial_render() {
    let mut app = ascii_app();
    let screen = render(&mut app);

    assert!(screen.contains("todos"));
    assert!(screen.contains("What needs to be done?"));
    // No footer without tasks
    assert!(!screen.contains("left"));
    assert!(!screen.contains("Clear completed"));
}

#[test]
fn test_render_tasks_and_footer() {
    let mut app = ascii_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");
    let screen = render(&mut app);

    assert!(screen.contains("[ ] Buy milk"));
    assert!(screen.contains("[ ] Walk dog"));
    assert!(screen.contains("2 items left"));
    assert!(screen.contains("All"));
    assert!(screen.contains("Active"));
    assert!(screen.contains("Completed"));
    assert!(!screen.contains("Clear completed"));
}

#[test]
fn test_render_after_toggle_and_clear() {
    let mut app = ascii_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));

    let screen = render(&mut app);
    assert!(screen.contains("[x] Buy milk"));
    assert!(screen.contains("1 item left"));
    assert!(screen.contains("Clear completed"));

    press(&mut app, KeyCode::Char('3'));
    let screen = render(&mut app);
    assert!(screen.contains("Buy milk"));
    assert!(!screen.contains("Walk dog"));

    press(&mut app, KeyCode::Char('C'));
    let screen = render(&mut app);
    assert!(!screen.contains("Clear completed"));
    assert!(screen.contains("No completed tasks."));

    press(&mut app, KeyCode::Char('1'));
    let screen = render(&mut app);
    assert!(screen.contains("Walk dog"));
    assert!(!screen.contains("Buy milk"));
}

#[test]
fn test_help_dialog_renders_on_top() {
    let mut app = ascii_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&mut app);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Clear completed tasks"));
}

#[test]
fn test_main_layout_regions() {
    let area = Rect::new(0, 0, 120, 30);

    let layout = LayoutManager::main_layout(area, false, true);
    assert!(layout.footer.is_none());
    assert_eq!(layout.input.height, 3);
    assert_eq!(layout.input.width, 80);
    assert_eq!(layout.input.x, 20);

    let layout = LayoutManager::main_layout(area, true, false);
    assert_eq!(layout.footer.map(|r| r.height), Some(3));
    assert!(layout.hints.is_none());
}

#[test]
fn test_only_key_presses_become_key_events() {
    let pressed = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert_eq!(EventType::from(Event::Key(pressed)), EventType::Key(pressed));

    let release = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(EventType::from(Event::Key(release)), EventType::Other);

    assert_eq!(EventType::from(Event::Resize(80, 24)), EventType::Resize(80, 24));
}

#[test]
fn test_long_draft_and_task_stay_visible() {
    let mut app = ascii_app();
    let text = format!("{}TAILEND", "a".repeat(90));
    for c in text.chars() {
        press(&mut app, KeyCode::Char(c));
    }

    // The input scrolls so the end of the draft is on screen
    let screen = render(&mut app);
    assert!(screen.contains("TAILEND"));

    // The list row wraps instead of cutting the text off
    press(&mut app, KeyCode::Enter);
    let screen = render(&mut app);
    assert_eq!(app.todos().tasks()[0].text(), text);
    assert!(screen.contains("[ ] aaaa"));
    assert!(screen.contains("TAILEND"));
    assert!(screen.contains("1 item left"));
}

#[test]
fn test_footer_disappears_after_clearing_everything() {
    let mut app = ascii_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));

    let screen = render(&mut app);
    assert!(screen.contains("0 items left"));
    assert!(screen.contains("Clear completed"));

    press(&mut app, KeyCode::Char('C'));
    assert!(app.todos().is_empty());

    let screen = render(&mut app);
    assert!(screen.contains("todos"));
    assert!(screen.contains("What needs to be done?"));
    assert!(!screen.contains("items left"));
    assert!(!screen.contains("Active"));
    assert!(!screen.contains("Completed"));
    assert!(!screen.contains("Clear completed"));
}
