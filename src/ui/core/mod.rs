//! Core UI functionality for tasklist.
//!
//! This module contains the building blocks every screen element relies on:
//! the [`Action`] enum that carries user intent, the [`Component`] trait
//! implemented by each widget, and the [`EventHandler`] that turns terminal
//! input into [`EventType`]s.
//!
//! # Architecture
//!
//! 1. **Events** are read by the [`EventHandler`]
//! 2. **Components** translate key events into [`Action`]s
//! 3. **Actions** flow down through [`Component::update`] until one of the
//!    components (or the app root) consumes them and returns [`Action::None`]

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
