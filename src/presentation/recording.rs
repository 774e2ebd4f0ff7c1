use std::sync::{Arc, Mutex};
use std::vec::Vec;

use crate::{core::GameResult, protocol::Presentation};

use super::PresentationSink;

/// Sink that remembers every request. Clones share the same log, so a test
/// can keep one handle while the session owns another.
#[derive(Clone, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<Presentation>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything presented so far.
    pub fn requests(&self) -> Vec<Presentation> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Results shown so far, in order.
    pub fn results(&self) -> Vec<GameResult> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                Presentation::ShowResult(result) => Some(result),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl PresentationSink for RecordingSink {
    fn present(&mut self, request: Presentation) {
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
    }
}
