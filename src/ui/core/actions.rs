use crate::todo::{Filter, TaskId};

/// Which part of the screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Draft editing
    InsertChar(char),
    DeleteChar,
    SubmitDraft,

    // Task operations
    ToggleTask(TaskId),
    ClearCompleted,

    // Filtering
    SetFilter(Filter),
    CycleFilter,

    // Navigation
    NextTask,
    PreviousTask,
    SetFocus(Focus),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
