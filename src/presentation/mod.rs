//! Presentation sinks
//!
//! The session never renders anything itself. It emits [`Presentation`]
//! requests into a sink:
//! - ConsoleSink: terminal rendering for the interactive binary
//! - RecordingSink: keeps every request for inspection

use crate::protocol::Presentation;

/// Receiver of presentation requests.
pub trait PresentationSink: Send {
    fn present(&mut self, request: Presentation);
}

impl<S: PresentationSink + ?Sized> PresentationSink for Box<S> {
    fn present(&mut self, request: Presentation) {
        (**self).present(request)
    }
}

pub mod console;
pub use console::ConsoleSink;

pub mod recording;
pub use recording::RecordingSink;
