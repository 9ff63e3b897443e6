use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

use super::position::{decode_position, encode_position};
use super::screen::Screen;

/// Somewhere a position string survives between launches.
pub trait PositionStore {
    fn load(&self) -> AppResult<Option<String>>;

    fn save(&mut self, position: &str) -> AppResult<()>;

    fn describe(&self) -> String;
}

/// Reads the initial screen, treating an unreadable store like an empty one.
pub fn restore_screen(store: &dyn PositionStore) -> Screen {
    match store.load() {
        Ok(Some(raw)) => decode_position(&raw),
        Ok(None) => Screen::Intro,
        Err(err) => {
            warn!(store = %store.describe(), error = %err, "position store unreadable");
            Screen::Intro
        }
    }
}

pub fn persist_screen(store: &mut dyn PositionStore, screen: Screen) -> AppResult<()> {
    let encoded = encode_position(screen);
    debug!(position = %encoded, store = %store.describe(), "persisting position");
    store.save(&encoded)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PositionStore for MemoryStore {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, position: &str) -> AppResult<()> {
        self.value = Some(position.to_string());
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PositionStore for FileStore {
    fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let raw = raw.trim();
                Ok((!raw.is_empty()).then(|| raw.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AppError::io_with_context(
                source,
                format!("failed to read position: {}", self.path.display()),
            )),
        }
    }

    fn save(&mut self, position: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| {
                AppError::io_with_context(
                    source,
                    format!("failed to create state directory: {}", parent.display()),
                )
            })?;
        }
        fs::write(&self.path, format!("{position}\n")).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to write position: {}", self.path.display()),
            )
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileStore, MemoryStore, PositionStore, persist_screen, restore_screen};
    use crate::nav::Screen;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("lu_store_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn memory_store_round_trips_screen() {
        let mut store = MemoryStore::new();
        assert_eq!(restore_screen(&store), Screen::Intro);

        persist_screen(&mut store, Screen::Chapter(4)).expect("memory save");
        assert_eq!(store.value(), Some("step=chapter&id=4"));
        assert_eq!(store.writes(), 1);
        assert_eq!(restore_screen(&store), Screen::Chapter(4));
    }

    #[test]
    fn file_store_survives_reload_in_nested_directory() {
        let dir = unique_temp_path("dir");
        let path = dir.join("state").join("position");

        let mut store = FileStore::new(&path);
        assert_eq!(store.load().expect("missing file is empty"), None);
        persist_screen(&mut store, Screen::Final).expect("file save");

        let reopened = FileStore::new(&path);
        assert_eq!(restore_screen(&reopened), Screen::Final);

        fs::remove_dir_all(&dir).expect("temp dir should be removed");
    }

    #[test]
    fn file_store_with_garbage_restores_intro() {
        let path = unique_temp_path("garbage");
        fs::write(&path, "\u{0}\u{1}not a position").expect("garbage written");

        assert_eq!(restore_screen(&FileStore::new(&path)), Screen::Intro);

        fs::remove_file(&path).expect("temp file should be removed");
    }

    #[test]
    fn unreadable_store_restores_intro() {
        let dir = unique_temp_path("is_a_dir");
        fs::create_dir_all(&dir).expect("dir created");

        let store = FileStore::new(&dir);
        assert!(store.load().is_err());
        assert_eq!(restore_screen(&store), Screen::Intro);

        fs::remove_dir_all(&dir).expect("temp dir should be removed");
    }
}
