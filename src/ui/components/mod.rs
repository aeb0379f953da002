//! Reusable UI components

pub mod dialog_component;
pub mod footer_component;
pub mod input_component;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use footer_component::FooterComponent;
pub use input_component::InputComponent;
pub use task_list_component::TaskListComponent;
pub use task_list_item_component::TaskItem;
