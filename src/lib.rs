// TaskList - In-memory to-do list with an interactive shell

pub mod command;
pub mod config;
pub mod render;
pub mod shell;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use command::{Command, CommandError};
pub use config::Config;
pub use render::Renderer;
pub use shell::{Flow, Session};
pub use store::{StoreError, TaskStore};
pub use task::{EditTask, Task, TaskId, now_ms};
