//! Transport seam between the engine and the host.

use crate::render::PresentationUnit;

/// Receives a divination response.
///
/// Chat frontends implement this over their message transport; the engine
/// never depends on a concrete chat runtime. `announce` carries the
/// intermediate "spread announced" signal so hosts can give synchronous
/// feedback before the full card sequence is rendered. Whether a spread
/// arrives card-by-card or as one batch is the session's call, driven by
/// configuration — sinks just deliver what they are handed.
pub trait ResponseSink {
    /// Deliver a standalone text message.
    fn announce(&mut self, text: &str);

    /// Deliver one presentation unit.
    fn emit(&mut self, unit: PresentationUnit);

    /// Deliver a whole reading as a single batched payload.
    fn emit_batch(&mut self, units: Vec<PresentationUnit>);
}

/// A sink that stores everything it receives, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    /// Announcement texts.
    pub announcements: Vec<String>,
    /// Units delivered individually.
    pub units: Vec<PresentationUnit>,
    /// Batches delivered as single payloads.
    pub batches: Vec<Vec<PresentationUnit>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseSink for CollectingSink {
    fn announce(&mut self, text: &str) {
        self.announcements.push(text.to_string());
    }

    fn emit(&mut self, unit: PresentationUnit) {
        self.units.push(unit);
    }

    fn emit_batch(&mut self, units: Vec<PresentationUnit>) {
        self.batches.push(units);
    }
}
