//! Core types - pure abstractions shared across the codebase.

mod category;
mod state;
mod task;

pub use category::FileType;
pub use state::{is_shutdown, setup_shutdown_handler};
pub use task::{FileTask, collect_tasks, normalize_extension};
