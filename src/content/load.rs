use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AppError, AppResult};

use super::types::{Chapter, Journal};

/// Where an image reference in the content file points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    /// Remote resources are shown as links only; nothing is fetched.
    Remote(String),
    Local(PathBuf),
}

impl ImageRef {
    pub fn label(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Local(path) => path.display().to_string(),
        }
    }
}

/// A loaded journal plus the directory its relative image paths resolve from.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSource {
    journal: Journal,
    base_dir: PathBuf,
    origin: String,
}

impl ContentSource {
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "journal path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read journal: {}", path.display()))
        })?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let source = Self::from_toml_str(&raw, base_dir, path.display().to_string())?;
        info!(
            journal = %path.display(),
            chapters = source.chapter_count(),
            "journal loaded"
        );
        Ok(source)
    }

    pub fn from_toml_str(
        raw: &str,
        base_dir: impl Into<PathBuf>,
        origin: impl Into<String>,
    ) -> AppResult<Self> {
        let origin = origin.into();
        let journal = toml::from_str::<Journal>(raw)
            .map_err(|source| AppError::content(origin.clone(), source.to_string()))?;
        Ok(Self::from_journal(journal, base_dir, origin))
    }

    pub fn from_journal(
        journal: Journal,
        base_dir: impl Into<PathBuf>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            journal,
            base_dir: base_dir.into(),
            origin: origin.into(),
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn chapter_count(&self) -> usize {
        self.journal.chapters.len()
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.journal.chapters.get(index)
    }

    pub fn resolve_image(&self, reference: &str) -> Option<ImageRef> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Some(ImageRef::Remote(reference.to_string()));
        }

        let path = Path::new(reference);
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };
        Some(ImageRef::Local(resolved))
    }

    /// The final screen's hero photo: explicit, else the first photo of the
    /// second chapter, else the first photo anywhere.
    pub fn hero_image(&self) -> Option<ImageRef> {
        if let Some(explicit) = self.journal.proposal.hero_img.as_deref() {
            return self.resolve_image(explicit);
        }

        let second_chapter = self
            .journal
            .chapters
            .get(1)
            .and_then(|chapter| chapter.events.first())
            .and_then(|event| event.img.as_deref());
        let fallback = second_chapter.or_else(|| {
            self.journal
                .chapters
                .iter()
                .flat_map(|chapter| chapter.events.iter())
                .find_map(|event| event.img.as_deref())
        });
        debug!(found = fallback.is_some(), "hero image fallback");
        fallback.and_then(|reference| self.resolve_image(reference))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{ContentSource, ImageRef};

    const SAMPLE: &str = r#"
        [people]
        your_name = "Raka"
        partner_name = "Nadia"

        [[chapters]]
        id = 1
        year = "2021"
        title = "First Light"
        subtitle = "where it began"

        [[chapters.events]]
        title = "Coffee"
        month = "MAR"
        desc = "We met."
        img = "photos/coffee.jpg"
        loc_name = "Kopi Kenangan"
        loc_url = "https://maps.example/kopi"

        [[chapters]]
        id = 2
        title = "Second Wind"

        [[chapters.events]]
        title = "Beach"
        img = "https://img.example/beach.jpg"
    "#;

    fn sample() -> ContentSource {
        ContentSource::from_toml_str(SAMPLE, "/journal", "sample.toml").expect("sample parses")
    }

    #[test]
    fn from_toml_str_reads_chapters_and_defaults_labels() {
        let source = sample();
        assert_eq!(source.chapter_count(), 2);
        let first = source.chapter(0).expect("first chapter");
        assert_eq!(first.title, "First Light");
        assert_eq!(first.events[0].loc_name, "Kopi Kenangan");
        assert!(source.chapter(2).is_none());
        assert_eq!(source.journal().labels.next, "Lanjut");
        assert_eq!(source.journal().proposal.yes_label, "Yes, I Will!");
    }

    #[test]
    fn from_toml_str_rejects_missing_people() {
        let err = ContentSource::from_toml_str("[[chapters]]\nid = 1\ntitle = \"x\"", "/", "bad")
            .expect_err("people table is required");
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn resolve_image_distinguishes_remote_and_relative_paths() {
        let source = sample();
        assert_eq!(
            source.resolve_image("photos/coffee.jpg"),
            Some(ImageRef::Local(PathBuf::from("/journal/photos/coffee.jpg")))
        );
        assert_eq!(
            source.resolve_image("https://img.example/a.jpg"),
            Some(ImageRef::Remote("https://img.example/a.jpg".to_string()))
        );
        assert_eq!(source.resolve_image("   "), None);
    }

    #[test]
    fn hero_image_falls_back_to_second_chapter_first_event() {
        let source = sample();
        assert_eq!(
            source.hero_image(),
            Some(ImageRef::Remote("https://img.example/beach.jpg".to_string()))
        );
    }
}
