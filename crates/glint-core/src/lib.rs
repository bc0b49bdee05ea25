//! # Glint Core
//!
//! Keeps a rendered, highlighted line list in step with a source text that
//! is being edited.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Editor                           │
//! │                                                          │
//! │   Event ──► transition() ──► Transition ──► apply ops    │
//! │                 │               │              │         │
//! │          plan_text_change   SourceBuffer  RenderedLines  │
//! │                                 │              │         │
//! │                                 └──► LineRenderer (per   │
//! │                                      stale line only)    │
//! │                                                          │
//! │   EventBus ◄── Rendered / SelectionChanged / Execute     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Learning: Module Organization
//!
//! Rust modules map to files:
//! - `mod foo;` looks for `foo.rs` or `foo/mod.rs`
//! - `pub use` re-exports items for cleaner public APIs

pub mod config;
pub mod editor;
pub mod event;
pub mod lines;
pub mod transition;
pub mod update;

pub use config::{Config, ConfigError, EditorConfig, LanguageConfig};
pub use editor::{Editor, EditorOptions, Update};
pub use event::{EditorEvent, EventBus};
pub use lines::{LineRenderer, RenderedLines};
pub use transition::{transition, Event, Key, Transition};
pub use update::{plan_text_change, UpdateOp};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] glint_syntax::SyntaxError),

    #[error("Buffer error: {0}")]
    Buffer(#[from] glint_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
