//! Test utilities and mock types for sortviz development.
//!
//! Provides mock implementations of the collaborator traits
//! ([`Renderer`](sortviz_core::Renderer), [`Pacer`](sortviz_core::Pacer))
//! plus independent, event-free reference implementations of all six
//! sorts for cross-checking trace counts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{CountingPacer, FailingRenderer, NoopPacer, RecordingRenderer, RenderLog};
pub use reference::reference_counts;
