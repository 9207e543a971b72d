//! Workflow view built from a raw orchestration-service document.
//!
//! [`Workflow`] owns the ordered [`Job`] list and the derived status
//! fields. Construction is synchronous; once a [`RawWorkflow`] exists it
//! cannot fail — only the entry points that guard the JSON boundary
//! return errors.

use serde::Serialize;
use serde_json::{Map, Value};

use super::job::Job;
use super::raw::RawWorkflow;
use crate::error::DocumentError;

/// Fallback shown for workflows whose context carries no overall state.
const STATE_NOT_STARTED: &str = "NOT STARTED";

/// One point-in-time snapshot of a workflow as reported by the service.
///
/// A new fetch produces a new `Workflow`; instances are never mutated.
/// The job list preserves the document's order, which is the execution
/// order the UI displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workflow {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<Map<String, Value>>,
    jobs: Vec<Job>,
    // TODO: model parent-job relations as typed edges instead of raw values.
    parent_jobs: Vec<Value>,
    is_job_queue: bool,
    state: String,
}

impl Workflow {
    /// Parses a JSON document into a workflow view.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Normalizes an already-parsed JSON value into a workflow view.
    ///
    /// Any JSON object is accepted — missing fields degrade to defaults.
    /// Non-object payloads are rejected.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        if !value.is_object() {
            return Err(DocumentError::NotAnObject {
                kind: json_kind(value),
            });
        }
        let raw: RawWorkflow = serde_json::from_value(value.clone())?;
        Ok(raw.into())
    }

    /// Workflow identifier, taken verbatim from the document's `id`
    /// field. Empty when the document carried none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque service configuration, when present.
    pub fn config(&self) -> Option<&Map<String, Value>> {
        self.config.as_ref()
    }

    /// Opaque runtime context, when present.
    pub fn context(&self) -> Option<&Map<String, Value>> {
        self.context.as_ref()
    }

    /// Jobs in the service-defined execution order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// First job whose raw name matches.
    pub fn job(&self, raw_name: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.raw_name() == raw_name)
    }

    /// Parent-job relations, passed through without interpretation.
    pub fn parent_jobs(&self) -> &[Value] {
        &self.parent_jobs
    }

    /// Whether this workflow is flagged as a continuously-fed job queue.
    ///
    /// True only when the config's `IsJobQueue` value is the string
    /// `"true"` in any casing. JSON booleans and `"1"` do not count.
    pub fn is_job_queue(&self) -> bool {
        self.is_job_queue
    }

    /// Overall workflow state, or `"NOT STARTED"` when the context
    /// carries none.
    pub fn state(&self) -> &str {
        &self.state
    }
}

impl From<RawWorkflow> for Workflow {
    fn from(raw: RawWorkflow) -> Self {
        let name = raw.id.unwrap_or_default();
        let context = raw.context;
        let jobs = parse_jobs(&name, context.as_ref(), &raw.jobs);
        let is_job_queue = resolve_job_queue(raw.config.as_ref());
        let state = resolve_state(context.as_ref());

        tracing::debug!(
            workflow = %name,
            jobs = jobs.len(),
            state = %state,
            "normalized workflow document"
        );

        Self {
            name,
            config: raw.config,
            context,
            jobs,
            parent_jobs: raw.parent_jobs,
            is_job_queue,
            state,
        }
    }
}

/// Builds one [`Job`] per name, preserving the document's order.
fn parse_jobs(
    workflow_name: &str,
    context: Option<&Map<String, Value>>,
    names: &[String],
) -> Vec<Job> {
    names
        .iter()
        .map(|raw_name| {
            Job::new(
                raw_name.clone(),
                workflow_name,
                context_entry(context, "StartTime", raw_name),
                context_entry(context, "JOB_STATES", raw_name),
            )
        })
        .collect()
}

/// Guarded lookup of `context.<key>.<job>`.
///
/// Strings pass through verbatim; numbers are rendered to their decimal
/// string (some deployments report epoch-millis timestamps as numbers);
/// everything else reads as absent.
fn context_entry(
    context: Option<&Map<String, Value>>,
    key: &str,
    job: &str,
) -> Option<String> {
    match context?.get(key)?.get(job)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn resolve_job_queue(config: Option<&Map<String, Value>>) -> bool {
    config
        .and_then(|c| c.get("IsJobQueue"))
        .and_then(Value::as_str)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn resolve_state(context: Option<&Map<String, Value>>) -> String {
    context
        .and_then(|c| c.get("STATE"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(STATE_NOT_STARTED)
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
