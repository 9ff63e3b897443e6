use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::content::ImageRef;
use crate::error::AppResult;

use super::loader::ImageLoadResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterKind {
    RatatuiImage,
    TextOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDraw {
    Drawn,
    Pending,
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresenterRuntimeInfo {
    pub graphics_protocol: Option<&'static str>,
}

pub trait ImagePresenter {
    fn initialize_terminal(&mut self) -> AppResult<()> {
        Ok(())
    }

    fn status_label(&self) -> String;

    fn runtime_info(&self) -> PresenterRuntimeInfo {
        PresenterRuntimeInfo::default()
    }

    /// Draws the photo into `area` if it is ready. Local photos that have not
    /// been decoded yet are queued and reported as pending.
    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, image: &ImageRef) -> ImageDraw;

    fn take_load_requests(&mut self) -> Vec<PathBuf> {
        Vec::new()
    }

    /// Returns true when the loaded photo is still cached and a redraw would
    /// show it.
    fn ingest(&mut self, loaded: ImageLoadResult) -> bool {
        let _ = loaded;
        false
    }

    fn has_pending_work(&self) -> bool {
        false
    }
}

/// Used when photos are turned off: every image is described instead of drawn.
#[derive(Debug, Default)]
pub struct TextOnlyPresenter;

impl ImagePresenter for TextOnlyPresenter {
    fn status_label(&self) -> String {
        "text-only".to_string()
    }

    fn draw(&mut self, _frame: &mut Frame<'_>, _area: Rect, image: &ImageRef) -> ImageDraw {
        ImageDraw::Unavailable(image.label())
    }
}
