pub mod aggregate;

pub use aggregate::{BoardColumn, Task, TaskDraft, TaskId};
