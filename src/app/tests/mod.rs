use std::cell::RefCell;
use std::convert::Infallible;
use std::io;
use std::rc::Rc;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Size;

use crate::app::App;
use crate::config::Config;
use crate::content::ContentSource;
use crate::error::{AppError, AppResult};
use crate::nav::{MemoryStore, PositionStore, Screen};
use crate::presenter::TextOnlyPresenter;

use super::terminal_session::TerminalSurface;

mod config_init;
mod session;

pub(super) struct TestTerminalSurface {
    terminal: Terminal<TestBackend>,
}

impl TestTerminalSurface {
    pub(super) fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = infallible_to_io(Terminal::new(TestBackend::new(width, height)))?;
        Ok(Self { terminal })
    }

    pub(super) fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn size(&self) -> io::Result<Size> {
        infallible_to_io(self.terminal.size())
    }

    fn clear(&mut self) -> io::Result<()> {
        infallible_to_io(self.terminal.clear())
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

/// A memory store the test keeps a handle to after boxing it into the app.
#[derive(Clone, Default)]
pub(super) struct SharedStore {
    pub(super) inner: Rc<RefCell<MemoryStore>>,
    pub(super) read_only: bool,
}

impl SharedStore {
    pub(super) fn with_value(value: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryStore::with_value(value))),
            read_only: false,
        }
    }

    pub(super) fn value(&self) -> Option<String> {
        self.inner.borrow().value().map(str::to_owned)
    }

    pub(super) fn writes(&self) -> usize {
        self.inner.borrow().writes()
    }
}

impl PositionStore for SharedStore {
    fn load(&self) -> AppResult<Option<String>> {
        self.inner.borrow().load()
    }

    fn save(&mut self, position: &str) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::unsupported("store is read-only"));
        }
        self.inner.borrow_mut().save(position)
    }

    fn describe(&self) -> String {
        "shared-memory".to_string()
    }
}

pub(super) fn journal() -> ContentSource {
    ContentSource::from_toml_str(
        r#"
        [people]
        your_name = "Raka"
        partner_name = "Sari"

        [[chapters]]
        id = 1
        title = "Pertemuan"

        [[chapters.events]]
        title = "Kopi pertama"
        desc = "Semua berawal dari secangkir kopi."

        [[chapters]]
        id = 2
        title = "Perjalanan"

        [modal]
        title = "Makan Malam"
        "#,
        "/journal",
        "test",
    )
    .expect("test journal parses")
}

pub(super) fn app_with_store(store: SharedStore, start_at: Option<Screen>) -> App {
    App::with_presenter(
        journal(),
        Config::default(),
        Box::new(store),
        Box::new(TextOnlyPresenter),
        start_at,
    )
}
