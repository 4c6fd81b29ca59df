#![forbid(unsafe_code)]

//! Elm-style runtime for the journal panel.
//!
//! The program owns the update/view loop: it pulls events from an
//! [`EventSource`], converts them to model messages, runs
//! [`Model::update`], and after each change renders [`Model::view`] into a
//! fresh [`Buffer`], diffs it against the previous frame and hands the
//! difference to the [`Presenter`].
//!
//! # Example
//!
//! ```ignore
//! use qj_core::terminal_session::TerminalSession;
//! use qj_runtime::program::{Program, ProgramConfig};
//!
//! let config = ProgramConfig::default();
//! let session = TerminalSession::new(config.session_options())?;
//! let model = Program::new(app, session, std::io::stdout(), config)?.run()?;
//! ```
//!
//! A resize (or the first frame) forces a clear and a full redraw; every
//! other frame only emits changed cells.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, info};

use qj_core::event::Event;
use qj_core::terminal_session::{SessionOptions, TerminalSession};
use qj_widgets::{Buffer, BufferDiff};

use crate::presenter::Presenter;

/// Application state and behavior.
pub trait Model: Sized {
    /// Messages the model reacts to. Terminal events convert into them.
    type Message: From<Event> + Send + 'static;

    /// Startup commands.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Apply one message. Returns follow-up commands.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Draw the current state into a blank frame.
    fn view(&self, frame: &mut Buffer);
}

/// Side effects requested by [`Model::init`] and [`Model::update`].
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Stop the loop.
    Quit,
    /// Execute several commands, in order.
    Batch(Vec<Cmd<M>>),
    /// Feed a message back to the model.
    Msg(M),
    /// Record a line in the log. The terminal is owned by the UI, so this
    /// goes to the `tracing` subscriber, never to the screen.
    Log(String),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Batch of commands, collapsed when empty or single.
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// Where the program gets its input and viewport size from.
pub trait EventSource {
    /// Current viewport size (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Wait up to `timeout` for the next event. `Ok(None)` on timeout or for
    /// input with no canonical event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;

    /// No further events will arrive.
    fn is_closed(&self) -> bool {
        false
    }
}

impl EventSource for TerminalSession {
    fn size(&self) -> io::Result<(u16, u16)> {
        TerminalSession::size(self)
    }

    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        TerminalSession::next_event(self, timeout)
    }
}

/// A fixed list of events, for headless runs.
#[derive(Debug, Clone)]
pub struct ScriptedEvents {
    size: (u16, u16),
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    #[must_use]
    pub fn new(size: (u16, u16), events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            size,
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn next_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        let event = self.events.pop_front();
        if let Some(Event::Resize { width, height }) = event {
            self.size = (width, height);
        }
        Ok(event)
    }

    fn is_closed(&self) -> bool {
        self.events.is_empty()
    }
}

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Input poll timeout.
    pub poll_timeout: Duration,
    /// Draw on the alternate screen.
    pub alternate_screen: bool,
    /// Deliver pastes as one event.
    pub bracketed_paste: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
            alternate_screen: true,
            bracketed_paste: true,
        }
    }
}

impl ProgramConfig {
    /// Terminal session options matching this config.
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            alternate_screen: self.alternate_screen,
            bracketed_paste: self.bracketed_paste,
        }
    }
}

/// The update/view loop.
pub struct Program<M: Model, S: EventSource, W: Write> {
    model: M,
    events: S,
    presenter: Presenter<W>,
    config: ProgramConfig,
    size: (u16, u16),
    running: bool,
    dirty: bool,
    /// Last presented frame; `None` forces a full redraw.
    prev_frame: Option<Buffer>,
}

impl<M: Model, S: EventSource, W: Write> Program<M, S, W> {
    /// # Errors
    ///
    /// Returns an error if the viewport size cannot be read.
    pub fn new(model: M, events: S, writer: W, config: ProgramConfig) -> io::Result<Self> {
        let size = events.size()?;
        Ok(Self {
            model,
            events,
            presenter: Presenter::new(writer),
            config,
            size,
            running: true,
            dirty: true,
            prev_frame: None,
        })
    }

    /// Run until the model quits or the event source closes, then hand the
    /// model back.
    ///
    /// # Errors
    ///
    /// Propagates input and output errors.
    pub fn run(mut self) -> io::Result<M> {
        info!(width = self.size.0, height = self.size.1, "program started");
        let cmd = self.model.init();
        self.execute_cmd(cmd);
        if self.running {
            self.render_frame()?;
        }

        while self.running && !self.events.is_closed() {
            if let Some(event) = self.events.next_event(self.config.poll_timeout)? {
                self.handle_event(event);
            }
            if self.running && self.dirty {
                self.render_frame()?;
            }
        }

        info!("program stopped");
        Ok(self.model)
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            debug!(width, height, "viewport resized");
            self.size = (width, height);
            self.prev_frame = None;
        }
        self.execute_cmd(Cmd::Msg(M::Message::from(event)));
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.dirty = true;
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Log(text) => info!(target: "qj_runtime::app", "{text}"),
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let (width, height) = self.size;
        let mut frame = Buffer::new(width, height);
        self.model.view(&mut frame);

        let diff = match &self.prev_frame {
            Some(prev) => BufferDiff::compute(prev, &frame),
            None => {
                self.presenter.clear_screen()?;
                BufferDiff::full(&frame)
            }
        };
        self.presenter.present(&frame, &diff)?;

        self.prev_frame = Some(frame);
        self.dirty = false;
        Ok(())
    }
}
