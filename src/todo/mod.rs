//! In-memory task list state and its transitions.
//!
//! Everything the terminal UI shows is derived from a single [`TodoList`]:
//! the ordered tasks, the draft text of the input box and the current
//! [`Filter`]. All operations are total; invalid input (an empty draft,
//! an unknown id) is silently ignored.

pub mod filter;
pub mod list;
pub mod task;

pub use filter::{Filter, ParseFilterError};
pub use list::TodoList;
pub use task::{Task, TaskId};
