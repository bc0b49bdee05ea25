//! Property-based tests for the render controller.

use glint_buffer::Selection;
use glint_core::{Config, Editor, EditorOptions, Event, Key};
use proptest::prelude::*;

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

fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[ a-z0-9(){};*#<>\"]{0,12}", 1..6).prop_map(|lines| lines.join("\n"))
}

/// A splice: where (as a fraction of the length), how much to delete, and
/// what to insert.
fn edit() -> impl Strategy<Value = (f64, usize, String)> {
    (0.0f64..=1.0, 0usize..4, "[a-z \n{}();*\t]{0,4}")
}

fn splice(text: &str, (at, delete, insert): &(f64, usize, String)) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let start = ((chars.len() as f64) * at).floor() as usize;
    let start = start.min(chars.len());
    let end = (start + delete).min(chars.len());

    let mut out: String = chars[..start].iter().collect();
    out.push_str(insert);
    out.extend(&chars[end..]);
    (out, start + insert.chars().count())
}

proptest! {
    #[test]
    fn rendered_lines_track_source(initial in source_text(), edits in prop::collection::vec(edit(), 1..12)) {
        let mut editor = editor(&initial);

        for step in &edits {
            let (text, caret) = splice(&editor.text(), step);
            let update = editor
                .handle(Event::TextChanged { text, selection: Selection::cursor(caret) })
                .unwrap();

            prop_assert_eq!(update.rows, editor.source().len_lines());
            prop_assert_eq!(editor.lines().len(), editor.source().len_lines());
            prop_assert!(!editor.text().contains('\t'));
        }

        let fresh = self::editor(&editor.text());
        prop_assert_eq!(editor.lines(), fresh.lines());
    }

    #[test]
    fn tab_then_shift_tab_restores(text in source_text(), a in 0usize..80, b in 0usize..80) {
        let mut editor = editor(&text);
        let len = editor.source().len_chars();
        let selection = Selection::between(a.min(len), b.min(len));

        let indented = editor
            .handle(Event::KeyDown { key: Key::Tab, shift: false, selection })
            .unwrap();
        let moved = indented.selection.unwrap();
        editor
            .handle(Event::KeyDown { key: Key::Tab, shift: true, selection: moved })
            .unwrap();

        prop_assert_eq!(editor.text(), text.as_str());
        prop_assert_eq!(editor.selection(), selection);
        let fresh = self::editor(&text);
        prop_assert_eq!(editor.lines(), fresh.lines());
    }
}
