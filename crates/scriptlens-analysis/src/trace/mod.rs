//! Script input and the execution-trace model produced by the sandbox.

pub mod decode;
pub mod event;
pub mod source;

pub use decode::{decode_line, decode_value, DecodedEntry};
pub use event::{EventKind, ExecutionEvent, Literal};
pub use source::SourceScript;

/// Ordered events, exactly as the engine emitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionTrace {
    events: Vec<ExecutionEvent>,
}

impl ExecutionTrace {
    pub fn new(events: Vec<ExecutionEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[ExecutionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<ExecutionEvent>> for ExecutionTrace {
    fn from(events: Vec<ExecutionEvent>) -> Self {
        Self::new(events)
    }
}

/// Output of the trace collector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedTrace {
    pub trace: ExecutionTrace,
    /// The wall-clock budget ran out before the engine finished.
    pub timed_out: bool,
    /// Engine output entries that could not be decoded into events.
    pub decode_errors: u64,
}

impl CollectedTrace {
    /// A completed run with no timeout and no decode errors.
    pub fn completed(events: Vec<ExecutionEvent>) -> Self {
        Self {
            trace: ExecutionTrace::new(events),
            timed_out: false,
            decode_errors: 0,
        }
    }
}
