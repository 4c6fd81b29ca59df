//! The facade's prelude is enough to drive a session end to end.

use quickjournal::core::event::{Event, KeyCode, KeyEvent, Modifiers};
use quickjournal::prelude::*;
use quickjournal::runtime::{ConfigEnv, ConfigLayer, ScriptedEvents};

#[test]
fn headless_session_through_prelude() {
    let env = ConfigEnv {
        home: Some("/home/demo".into()),
        config_home: Some("/nonexistent-qj-config".into()),
    };
    let config = Config::resolve(ConfigLayer::default(), &env).unwrap();
    let dict = Dictionary::from_rows([("🙂", "smile")]);
    let app = JournalApp::new(&config, dict, Box::new(MemorySink::new())).unwrap();

    let mut events: Vec<Event> = "ok :smile:"
        .chars()
        .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c))))
        .collect();
    events.push(Event::Key(
        KeyEvent::new(KeyCode::Char('g')).with_modifiers(Modifiers::CTRL),
    ));

    let app = Program::new(
        app,
        ScriptedEvents::new((60, 16), events),
        std::io::sink(),
        ProgramConfig::default(),
    )
    .unwrap()
    .run()
    .unwrap();

    assert_eq!(
        app.finish().unwrap(),
        SessionOutcome::Saved(Entry {
            text: "ok :smile:".into(),
            mood: Mood::Neutral,
        })
    );
}

#[test]
fn core_pipeline_through_prelude() {
    let dict = Dictionary::from_rows([("🙂", "smile"), ("😏", "smirk")]);
    let mut editor = EditBuffer::new(EditorConfig::new(140).live_preview(true)).unwrap();
    for c in "so :smile:".chars() {
        assert_eq!(editor.insert_char(c), InsertOutcome::Accepted);
    }
    let layout = editor.render(40, &dict);
    assert_eq!(layout.lines(), ["so 🙂\u{258e}".to_string()]);
    assert_eq!(expand("so :smile:", &dict), "so 🙂");
    assert_eq!(suggest(&dict, "sm", 5), vec!["smile", "smirk"]);
}
