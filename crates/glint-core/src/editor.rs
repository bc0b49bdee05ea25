//! Main editor orchestration.
//!
//! ## Learning: The Facade Pattern
//!
//! `Editor` acts as a facade over the pure pieces: it feeds events to
//! [`transition`], replays the resulting operations on its
//! [`RenderedLines`], and publishes what happened on the [`EventBus`]. A UI
//! adapter only ever talks to `Editor`.

use std::path::Path;

use glint_buffer::{IndentUnit, Selection, SourceBuffer};
use glint_syntax::Language;

use crate::config::Config;
use crate::event::{EditorEvent, EventBus};
use crate::lines::{LineRenderer, RenderedLines};
use crate::transition::{transition, Event};
use crate::update::UpdateOp;
use crate::CoreResult;

/// How an editor starts out.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Language id, e.g. `cpp`
    pub language: String,
    pub initial_text: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            language: Language::Cpp.id().to_string(),
            initial_text: String::new(),
        }
    }
}

/// What a handled event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// Operations applied to the rendered lines
    pub ops: Vec<UpdateOp>,
    /// Selection the widget should restore
    pub selection: Option<Selection>,
    /// Rows the input widget should show
    pub rows: usize,
}

/// The editor state.
///
/// ## Thread Safety
///
/// `Editor` is owned by a single thread and every call runs to completion.
/// Other components observe it through the event bus.
pub struct Editor {
    /// Indentation inserted by Tab
    unit: IndentUnit,

    /// Current source text
    source: SourceBuffer,

    /// Highlighted markup, one entry per source line
    lines: RenderedLines,

    renderer: LineRenderer,

    /// Last selection handed to the widget
    selection: Selection,

    /// Row count of the input widget
    rows: usize,

    /// Event bus for notifications
    event_bus: EventBus,
}

impl Editor {
    /// Creates an editor and renders its initial text.
    pub fn new(options: EditorOptions, config: &Config) -> CoreResult<Self> {
        let language = Language::from_id(&options.language)?;
        let renderer = LineRenderer::new(language, config.tokenizer_options(language));
        let source = SourceBuffer::from(options.initial_text);

        let mut editor = Self {
            unit: config.indent_unit(),
            rows: source.len_lines(),
            source,
            lines: RenderedLines::new(),
            renderer,
            selection: Selection::cursor(0),
            event_bus: EventBus::new(),
        };
        editor.apply(&[UpdateOp::FullUpdate]);
        tracing::debug!(%language, rows = editor.rows, "editor initialized");
        Ok(editor)
    }

    /// Replaces the text with the contents of a file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> CoreResult<Update> {
        let loaded = SourceBuffer::from_file(path)?;
        self.handle(Event::Replace {
            text: loaded.text().into_owned(),
        })
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: Event) -> CoreResult<Update> {
        let execute = matches!(event, Event::Execute);
        let next = transition(&self.source, &self.unit, event)?;

        self.rows = next.rows();
        self.source = next.source;
        self.apply(&next.ops);

        if self.lines.len() != self.source.len_lines() {
            tracing::warn!(
                rendered = self.lines.len(),
                lines = self.source.len_lines(),
                "rendered lines out of step; rebuilding"
            );
            self.apply(&[UpdateOp::FullUpdate]);
        }

        if !next.ops.is_empty() {
            self.emit(EditorEvent::Rendered {
                ops: next.ops.clone(),
            });
        }
        if let Some(selection) = next.selection {
            self.selection = selection;
            self.emit(EditorEvent::SelectionChanged(selection));
        }
        if execute {
            self.emit(EditorEvent::Execute {
                source: self.source.text().into_owned(),
            });
        }

        Ok(Update {
            ops: next.ops,
            selection: next.selection,
            rows: self.rows,
        })
    }

    fn apply(&mut self, ops: &[UpdateOp]) {
        for op in ops {
            self.lines.apply(op, &self.source, &self.renderer);
        }
    }

    // ==================== Accessors ====================

    pub fn language(&self) -> Language {
        self.renderer.language()
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn text(&self) -> String {
        self.source.text().into_owned()
    }

    pub fn lines(&self) -> &RenderedLines {
        &self.lines
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The rendered lines as an HTML ordered list.
    pub fn to_html(&self) -> String {
        self.lines.to_html()
    }

    // ==================== Events ====================

    /// Subscribes to editor events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<EditorEvent> {
        self.event_bus.subscribe()
    }

    fn emit(&self, event: EditorEvent) {
        self.event_bus.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Key;
    use crate::CoreError;

    fn editor(text: &str) -> Editor {
        Editor::new(
            EditorOptions {
                language: "cpp".to_string(),
                initial_text: text.to_string(),
            },
            &Config::default(),
        )
        .unwrap()
    }

    /// The rendered lines of a fresh editor over the same text.
    fn rebuilt(editor: &Editor) -> RenderedLines {
        self::editor(&editor.text()).lines().clone()
    }

    fn typed(text: &str, caret: usize) -> Event {
        Event::TextChanged {
            text: text.to_string(),
            selection: Selection::cursor(caret),
        }
    }

    #[test]
    fn test_new_renders_everything() {
        let editor = editor("#include <iostream>\nint main() {}");
        assert_eq!(editor.rows(), 2);
        assert_eq!(editor.lines().len(), 2);
        assert_eq!(editor.selection(), Selection::cursor(0));
        assert!(editor
            .lines()
            .get(0)
            .unwrap()
            .contains("<span class=\"library\">iostream</span>"));
    }

    #[test]
    fn test_unknown_language() {
        let result = Editor::new(
            EditorOptions {
                language: "cobol".to_string(),
                initial_text: String::new(),
            },
            &Config::default(),
        );
        assert!(matches!(result, Err(CoreError::Syntax(_))));
    }

    #[test]
    fn test_typing_keeps_lines_in_step() {
        let mut editor = editor("int main()");
        let update = editor.handle(typed("int main() {", 12)).unwrap();
        assert_eq!(update.ops, vec![UpdateOp::LineUpdate { start: 0, count: 1 }]);

        editor.handle(typed("int main() {\n", 13)).unwrap();
        editor.handle(typed("int main() {\n  return 0;", 23)).unwrap();
        editor.handle(typed("int main() {\n  return 0;\n}", 25)).unwrap();

        assert_eq!(editor.rows(), 3);
        assert_eq!(editor.lines(), &rebuilt(&editor));
    }

    #[test]
    fn test_tab_and_shift_tab() {
        let mut editor = editor("x");
        let update = editor
            .handle(Event::KeyDown {
                key: Key::Tab,
                shift: false,
                selection: Selection::cursor(0),
            })
            .unwrap();
        assert_eq!(editor.text(), "  x");
        assert_eq!(update.selection, Some(Selection::cursor(2)));

        editor
            .handle(Event::KeyDown {
                key: Key::Tab,
                shift: true,
                selection: Selection::cursor(2),
            })
            .unwrap();
        assert_eq!(editor.text(), "x");
        assert_eq!(editor.selection(), Selection::cursor(0));
        assert_eq!(editor.lines(), &rebuilt(&editor));
    }

    #[test]
    fn test_configured_tab_size() {
        let mut config = Config::default();
        config.editor.tab_size = 4;
        let mut editor = Editor::new(EditorOptions::default(), &config).unwrap();
        editor
            .handle(Event::KeyDown {
                key: Key::Tab,
                shift: false,
                selection: Selection::cursor(0),
            })
            .unwrap();
        assert_eq!(editor.text(), "    ");
    }

    #[test]
    fn test_events_are_published() {
        let mut editor = editor("a");
        let mut rx = editor.subscribe();

        editor.handle(typed("ab", 2)).unwrap();
        editor.handle(Event::Execute).unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            EditorEvent::Rendered {
                ops: vec![UpdateOp::LineUpdate { start: 0, count: 1 }]
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            EditorEvent::SelectionChanged(Selection::cursor(2))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            EditorEvent::Execute {
                source: "ab".to_string()
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.cpp");
        std::fs::write(&path, "int a;\nint b;\nint c;").unwrap();

        let mut editor = editor("");
        let update = editor.load_file(&path).unwrap();
        assert_eq!(update.ops, vec![UpdateOp::FullUpdate]);
        assert_eq!(update.rows, 3);
        assert_eq!(editor.lines().len(), 3);
    }

    #[test]
    fn test_load_missing_file_keeps_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor("int x;");

        let result = editor.load_file(dir.path().join("absent.cpp"));
        assert!(matches!(
            result,
            Err(CoreError::Buffer(glint_buffer::BufferError::Io(_)))
        ));
        assert_eq!(editor.text(), "int x;");
        assert_eq!(editor.lines().len(), 1);
    }

    #[test]
    fn test_to_html_wraps_lines() {
        let html = editor("a\nb").to_html();
        assert!(html.starts_with("<ol class=\"output-lines\"><li>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }
}
