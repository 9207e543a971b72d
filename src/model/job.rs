use chrono::{DateTime, Utc};
use serde::Serialize;

/// One unit of work inside a workflow, as shown to presentation code.
///
/// Built exclusively during [`Workflow`](super::Workflow) normalization
/// and immutable afterwards. The display `name` is derived from the raw
/// identifier once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    raw_name: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

impl Job {
    pub(crate) fn new(
        raw_name: String,
        workflow_name: &str,
        start_time: Option<String>,
        state: Option<String>,
    ) -> Self {
        let name = reduce_name(&raw_name, workflow_name);
        Self {
            raw_name,
            name,
            start_time,
            state,
        }
    }

    /// The verbatim job identifier as supplied by the service.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Display name: the raw name with one leading `"<workflow>_"`
    /// prefix removed, or the raw name unchanged when it carries none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Timestamp string recorded by the service, verbatim.
    pub fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }

    /// Job-state token from the service's own vocabulary.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Best-effort UTC reading of [`start_time`](Self::start_time).
    ///
    /// The service reports either epoch milliseconds or RFC 3339;
    /// anything else yields `None`.
    pub fn start_time_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.start_time.as_deref()?;
        if let Ok(millis) = raw.parse::<i64>() {
            return DateTime::from_timestamp_millis(millis);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Strips one leading `"<workflow>_"` prefix from a raw job name.
/// Never recursive; mid-string occurrences survive.
fn reduce_name(raw_name: &str, workflow_name: &str) -> String {
    raw_name
        .strip_prefix(workflow_name)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(raw_name)
        .to_string()
}
