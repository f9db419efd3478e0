//! Workflow entry points used by the `git-pin` binary

pub mod orchestration;

pub use orchestration::{run_pin_workflow, PinWorkflowArgs, WorkflowResult};
