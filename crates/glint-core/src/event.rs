//! Event system for render notifications.
//!
//! ## Learning: Observer Pattern in Rust
//!
//! Instead of a view registering callbacks on the editor, the editor
//! publishes values on a `tokio::sync::broadcast` channel. Whoever mirrors
//! the rendered lines (a DOM adapter, a terminal preview, a test) subscribes
//! and replays the operations. `send` never blocks, so the synchronous core
//! can publish without an executor.

use glint_buffer::Selection;
use tokio::sync::broadcast;

use crate::update::UpdateOp;

/// Events published by the editor after each handled input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Rendered lines changed; replay `ops` against the previous lines
    Rendered { ops: Vec<UpdateOp> },
    /// The selection to show after the edit
    SelectionChanged(Selection),
    /// The user asked to run the current source
    Execute { source: String },
}

/// Event bus for broadcasting editor events.
///
/// Lagged receivers drop the oldest events; senders never wait.
pub struct EventBus {
    sender: broadcast::Sender<EditorEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: EditorEvent) {
        // No receivers is fine.
        let _ = self.sender.send(event);
    }

    /// Subscribes to events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
