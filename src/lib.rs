//! Typed, read-only view models for workflow-orchestration service
//! documents.
//!
//! The service returns one raw JSON document per workflow;
//! [`Workflow::from_json`] (or [`Workflow::from_value`] for an
//! already-parsed payload) normalizes it into a [`Workflow`] owning an
//! ordered list of [`Job`]s plus UI-friendly derived fields: reduced job
//! names, the overall state, and the job-queue flag. Views are
//! snapshots — a new fetch builds a new value, nothing is mutated in
//! place.
//!
//! ```
//! use flowview::Workflow;
//!
//! let doc = r#"{
//!     "id": "data-pipeline",
//!     "WorkflowContext": {"STATE": "IN_PROGRESS"},
//!     "Jobs": ["data-pipeline_ingest", "data-pipeline_publish"]
//! }"#;
//!
//! let workflow = Workflow::from_json(doc)?;
//! assert_eq!(workflow.state(), "IN_PROGRESS");
//! assert_eq!(workflow.jobs()[1].name(), "publish");
//! # Ok::<(), flowview::DocumentError>(())
//! ```

pub mod error;
pub mod model;

pub use error::DocumentError;
pub use model::{Job, RawWorkflow, Task, Workflow};
