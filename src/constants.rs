//! Constants used throughout the application
//!
//! This module centralizes UI text, log messages and other constant values
//! to keep wording consistent between the renderer and the tests.

// Main screen
pub const APP_TITLE: &str = "todos";
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";
pub const INPUT_TITLE: &str = "New task";
pub const TASKS_TITLE: &str = "Tasks";
pub const CLEAR_COMPLETED_LABEL: &str = "Clear completed";

// Empty states per filter
pub const EMPTY_ALL: &str = "Nothing to do yet. Type above and press Enter.";
pub const EMPTY_ACTIVE: &str = "No active tasks.";
pub const EMPTY_COMPLETED: &str = "No completed tasks.";

// Key hints shown in the status line
pub const HINTS_INPUT: &str = "Enter add • Tab list • Ctrl+C quit";
pub const HINTS_LIST: &str =
    "Space toggle • 1/2/3 filter • f cycle • C clear • i input • ? help • q quit";

// Log messages
pub const LOG_TASK_ADDED: &str = "✅ Task added";
pub const LOG_TASK_REJECTED: &str = "Ignored empty task";
pub const LOG_TASK_TOGGLED: &str = "🔁 Task toggled";
pub const LOG_TASK_NOT_FOUND: &str = "Toggle ignored, task not found";
pub const LOG_CLEARED: &str = "🧹 Cleared completed tasks";
pub const LOG_FILTER_CHANGED: &str = "Filter changed";

// Dialogs
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Config
pub const CONFIG_FILE_NAME: &str = "tasklist.toml";
pub const CONFIG_DIR_NAME: &str = "tasklist";
pub const LOG_FILE_NAME: &str = "tasklist.log";
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
