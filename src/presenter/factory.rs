use crate::config::UiConfig;
use crate::error::AppResult;

use super::ratatui::RatatuiImagePresenter;
use super::traits::{ImagePresenter, PresenterKind, TextOnlyPresenter};

pub fn presenter_kind_for(ui: &UiConfig) -> PresenterKind {
    if ui.show_images {
        PresenterKind::RatatuiImage
    } else {
        PresenterKind::TextOnly
    }
}

pub fn create_presenter(kind: PresenterKind) -> AppResult<Box<dyn ImagePresenter>> {
    create_presenter_with_cache_entries(kind, None)
}

pub fn create_presenter_with_cache_entries(
    kind: PresenterKind,
    photo_cache_entries: Option<usize>,
) -> AppResult<Box<dyn ImagePresenter>> {
    match kind {
        PresenterKind::RatatuiImage => {
            let presenter = match photo_cache_entries {
                Some(max_entries) => RatatuiImagePresenter::with_cache_entries(max_entries),
                None => RatatuiImagePresenter::new(),
            };
            Ok(Box::new(presenter))
        }
        PresenterKind::TextOnly => Ok(Box::new(TextOnlyPresenter)),
    }
}
