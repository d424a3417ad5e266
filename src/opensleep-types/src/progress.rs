/// Fire-and-forget progress channel consumed by the export parser and
/// the import orchestrator. Implementations must never fail; a sink
/// that can not display anything should simply drop the report.
pub trait ProgressSink {
    fn report(&self, current: u64, total: u64, message: &str);
}

/// Sink for library and test use: discards every report.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _current: u64, _total: u64, _message: &str) {}
}
