mod factory;
mod image_ops;
mod loader;
mod photo_cache;
mod ratatui;
mod traits;

#[cfg(test)]
mod tests;

pub(crate) use loader::ImageLoader;
pub use factory::{create_presenter, create_presenter_with_cache_entries, presenter_kind_for};
pub use loader::ImageLoadResult;
pub use ratatui::RatatuiImagePresenter;
pub use traits::{ImageDraw, ImagePresenter, PresenterKind, PresenterRuntimeInfo, TextOnlyPresenter};
