/// Reserved extension point for per-job execution detail.
///
/// The service tracks per-task runtime data underneath each job; this
/// layer does not surface it yet. The type exists so the slot stays
/// visible in the public API — normalization never constructs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Task;
