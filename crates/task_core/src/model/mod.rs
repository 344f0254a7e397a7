mod task;

pub use task::{Status, Task};
