mod job;
mod raw;
mod task;
mod workflow;

pub use job::Job;
pub use raw::RawWorkflow;
pub use task::Task;
pub use workflow::Workflow;
