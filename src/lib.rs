//! tasklist - a terminal task-list widget
//!
//! Add short tasks, tick them off, filter the list by completion state and
//! clear finished work in bulk. State lives in memory for the lifetime of
//! the process; the interface is built with Ratatui.
//!
//! # Modules
//!
//! * [`todo`] - Task list state and transitions
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - In-memory and file logging

/// Configuration module for managing application settings
pub mod config;

/// Application constants and UI text
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Task list state: tasks, draft text and filter
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

pub use todo::{Filter, Task, TaskId, TodoList};
