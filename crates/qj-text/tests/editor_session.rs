//! End-to-end editing sessions: keystrokes in, layout and entry out.

use qj_text::{
    CURSOR_GLYPH, CommitOutcome, Dictionary, EditBuffer, EditorConfig, InsertOutcome, Mood,
    MoodSelector,
};

fn dict() -> Dictionary {
    Dictionary::from_rows([("🙂", "smile"), ("😏", "smirk"), ("🔥", "fire"), ("🥳", "awesmile")])
}

fn type_str(buf: &mut EditBuffer, text: &str) {
    for c in text.chars() {
        let outcome = if c == '\n' {
            buf.insert_newline()
        } else {
            buf.insert_char(c)
        };
        assert_eq!(outcome, InsertOutcome::Accepted, "rejected {c:?}");
    }
}

#[test]
fn typing_wrapping_and_committing() {
    let dict = dict();
    let mut buf = EditBuffer::new(EditorConfig::new(140)).expect("valid config");
    let mut mood = MoodSelector::new();

    type_str(&mut buf, "the quick brown fox");
    let layout = buf.render(10, &dict);
    assert_eq!(layout.lines()[0], "the quick");
    assert_eq!(layout.lines()[1], format!("brown fox{CURSOR_GLYPH}"));

    type_str(&mut buf, " :sm");
    assert_eq!(buf.current_suggestions(&dict, 5), vec!["smile", "smirk", "awesmile"]);

    type_str(&mut buf, "il");
    assert_eq!(buf.current_suggestions(&dict, 5), vec!["smile", "awesmile"]);

    type_str(&mut buf, "e:");
    assert!(buf.current_suggestions(&dict, 5).is_empty());

    mood.next();
    let CommitOutcome::Committed(entry) = buf.commit(mood.current()) else {
        panic!("commit should succeed");
    };
    assert_eq!(entry.text, "the quick brown fox :smile:");
    assert_eq!(entry.mood, Mood::Good);
    assert!(buf.is_empty());
    assert_eq!(buf.render(10, &dict).lines(), &[CURSOR_GLYPH.to_string()]);
}

#[test]
fn live_preview_layout_but_raw_commit() {
    let dict = dict();
    let mut buf =
        EditBuffer::new(EditorConfig::new(40).live_preview(true)).expect("valid config");
    type_str(&mut buf, "on :fire: today\nagain");

    let layout = buf.render(30, &dict);
    assert_eq!(layout.lines()[0], "on 🔥 today");
    assert_eq!(layout.lines()[1], format!("again{CURSOR_GLYPH}"));
    assert_eq!(layout.cursor().row, 1);
    assert_eq!(layout.cursor().col, 5);

    let CommitOutcome::Committed(entry) = buf.commit(Mood::Neutral) else {
        panic!("commit should succeed");
    };
    assert_eq!(entry.text, "on :fire: today\nagain");
}

#[test]
fn budget_overflow_cycle() {
    let mut buf = EditBuffer::new(EditorConfig::new(5)).expect("valid config");
    type_str(&mut buf, "abcde");
    assert_eq!(buf.remaining(), 0);
    assert_eq!(buf.insert_char('f'), InsertOutcome::Rejected);
    assert!(buf.overflow_flagged());
    assert_eq!(buf.len(), 5);

    buf.delete_last_word();
    assert!(buf.is_empty());
    assert_eq!(buf.commit(Mood::Neutral), CommitOutcome::Empty);
}
