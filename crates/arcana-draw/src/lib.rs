//! Draw engine for Arcanum: theme discovery, card sampling, and rendering.
//!
//! A [`DivinationSession`] composes the pieces: the [`ResourceCatalog`]
//! resolves themes and subtypes against the live resource directory, the
//! sampler draws distinct cards without replacement, and the renderer
//! turns each drawn card into a text-plus-image [`PresentationUnit`]
//! delivered through a [`ResponseSink`]. The chat transport itself is an
//! external collaborator behind the sink trait.

/// Theme and subtype discovery from the resource directory.
pub mod catalog;
/// Configuration for a divination session.
pub mod config;
/// Error types for the draw engine.
pub mod error;
/// Orientation resolution and presentation rendering.
pub mod render;
/// Uniform sampling of distinct cards.
pub mod sampler;
/// Divination session entry points.
pub mod session;
/// Transport seam between the engine and the host.
pub mod sink;
/// Formation selection and positional labels.
pub mod spread;

/// Re-export the resource catalog.
pub use catalog::ResourceCatalog;
/// Re-export the session configuration.
pub use config::DrawConfig;
/// Re-export error types.
pub use error::{DrawError, DrawResult};
/// Re-export rendering types.
pub use render::{DrawnCard, PresentationUnit};
/// Re-export the session type.
pub use session::DivinationSession;
/// Re-export the transport seam.
pub use sink::{CollectingSink, ResponseSink};
