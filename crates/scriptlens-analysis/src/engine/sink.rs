//! Channel between a running engine and the collector.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::trace::{decode_line, DecodedEntry, ExecutionEvent};

/// Engine side of the trace channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct TraceSink {
    tx: UnboundedSender<DecodedEntry>,
}

/// Collector side of the trace channel.
#[derive(Debug)]
pub struct TraceReceiver {
    rx: UnboundedReceiver<DecodedEntry>,
}

impl TraceSink {
    pub fn channel() -> (TraceSink, TraceReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (TraceSink { tx }, TraceReceiver { rx })
    }

    /// Push one event. Returns false once the collector has stopped listening.
    pub fn push(&self, event: ExecutionEvent) -> bool {
        self.push_entry(DecodedEntry::Event(event))
    }

    pub fn push_entry(&self, entry: DecodedEntry) -> bool {
        self.tx.send(entry).is_ok()
    }

    /// Decode one line of engine output and push every entry in it.
    pub fn push_line(&self, line: &str) -> bool {
        decode_line(line)
            .into_iter()
            .all(|entry| self.push_entry(entry))
    }
}

impl TraceReceiver {
    /// Take everything pushed so far: (events in order, malformed entry count).
    ///
    /// Anything pushed after this call is never observed by the caller.
    pub fn drain(&mut self) -> (Vec<ExecutionEvent>, u64) {
        let mut events = Vec::new();
        let mut malformed = 0u64;
        while let Ok(entry) = self.rx.try_recv() {
            match entry {
                DecodedEntry::Event(event) => events.push(event),
                DecodedEntry::Malformed(message) => {
                    tracing::debug!(%message, "skipping undecodable engine entry");
                    malformed += 1;
                }
            }
        }
        self.rx.close();
        (events, malformed)
    }
}
