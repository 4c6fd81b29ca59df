#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use qj_text::{Dictionary, EditBuffer, EditorConfig, Mood};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(char),
    Newline,
    DeleteChar,
    DeleteWord,
    Render(u8),
    Commit,
}

fuzz_target!(|input: (u8, bool, Vec<Op>)| {
    let (limit, live, ops) = input;
    let Ok(mut buf) =
        EditBuffer::new(EditorConfig::new(usize::from(limit)).live_preview(live))
    else {
        return;
    };
    let dict = Dictionary::from_rows([("🙂", "smile"), ("🔥", "fire"), ("::", "colons")]);

    for op in ops.into_iter().take(512) {
        match op {
            Op::Insert(c) => {
                buf.insert_char(c);
            }
            Op::Newline => {
                buf.insert_newline();
            }
            Op::DeleteChar => {
                buf.delete_last_char();
            }
            Op::DeleteWord => buf.delete_last_word(),
            Op::Render(width) => {
                let layout = buf.render(usize::from(width), &dict);
                assert!(layout.height() >= 1);
                let _ = buf.current_suggestions(&dict, 5);
            }
            Op::Commit => {
                let _ = buf.commit(Mood::Neutral);
            }
        }
        assert!(buf.len() <= buf.char_limit());
    }
});
