pub mod args;
pub mod orchestration;

pub use args::{Args, Operation, PublishOptions};
pub use orchestration::{Orchestrator, PublishReport};
