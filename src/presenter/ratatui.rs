use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::{FilterType, Resize, StatefulImage};
use tracing::{debug, warn};

use crate::content::ImageRef;
use crate::error::{AppError, AppResult};

use super::loader::ImageLoadResult;
use super::photo_cache::{DEFAULT_PHOTO_CACHE_ENTRIES, PhotoCache, PhotoSlot};
use super::traits::{ImageDraw, ImagePresenter, PresenterRuntimeInfo};

const PHOTO_RESIZE_FILTER: FilterType = FilterType::Triangle;
pub(crate) const ENCODE_FAILURE_MESSAGE: &str = "failed to encode photo for the terminal";

pub(crate) struct PresenterConfig {
    pub(crate) picker: Picker,
    pub(crate) protocol_label: &'static str,
}

pub(crate) struct PresenterState {
    pub(crate) terminal_initialized: bool,
    pub(crate) photos: PhotoCache,
    pub(crate) load_requests: Vec<PathBuf>,
}

pub struct RatatuiImagePresenter {
    pub(crate) config: PresenterConfig,
    pub(crate) state: PresenterState,
}

impl Default for RatatuiImagePresenter {
    fn default() -> Self {
        Self::with_cache_entries(DEFAULT_PHOTO_CACHE_ENTRIES)
    }
}

impl RatatuiImagePresenter {
    pub fn with_cache_entries(max_entries: usize) -> Self {
        Self {
            config: PresenterConfig {
                picker: Picker::halfblocks(),
                protocol_label: "halfblocks",
            },
            state: PresenterState {
                terminal_initialized: false,
                photos: PhotoCache::new(max_entries),
                load_requests: Vec::new(),
            },
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached_photos(&self) -> usize {
        self.state.photos.len()
    }

    fn draw_protocol(
        frame: &mut Frame<'_>,
        area: Rect,
        protocol: &mut StatefulProtocol,
    ) -> AppResult<()> {
        let target = protocol.size_for(Resize::Fit(Some(PHOTO_RESIZE_FILTER)), area);
        let area = center_rect_within(area, target.width, target.height);
        frame.render_widget(Clear, area);
        frame.render_stateful_widget(
            StatefulImage::<StatefulProtocol>::default()
                .resize(Resize::Fit(Some(PHOTO_RESIZE_FILTER))),
            area,
            protocol,
        );

        if let Some(result) = protocol.last_encoding_result() {
            result.map_err(|_| AppError::unsupported(ENCODE_FAILURE_MESSAGE))?;
        }
        Ok(())
    }
}

impl ImagePresenter for RatatuiImagePresenter {
    fn initialize_terminal(&mut self) -> AppResult<()> {
        if self.state.terminal_initialized {
            return Ok(());
        }

        match Picker::from_query_stdio() {
            Ok(picker) => {
                self.config.protocol_label = protocol_type_label(picker.protocol_type());
                self.config.picker = picker;
                self.state.photos.clear();
                debug!(protocol = self.config.protocol_label, "graphics protocol detected");
            }
            Err(err) => {
                debug!(error = ?err, "terminal graphics query failed, using halfblocks");
            }
        }

        self.state.terminal_initialized = true;
        Ok(())
    }

    fn status_label(&self) -> String {
        format!("ratatui-image/{}", self.config.protocol_label)
    }

    fn runtime_info(&self) -> PresenterRuntimeInfo {
        PresenterRuntimeInfo {
            graphics_protocol: Some(self.config.protocol_label),
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, image: &ImageRef) -> ImageDraw {
        let path = match image {
            ImageRef::Remote(url) => return ImageDraw::Unavailable(url.clone()),
            ImageRef::Local(path) => path,
        };
        if area.width == 0 || area.height == 0 {
            return ImageDraw::Pending;
        }

        let Some(slot) = self.state.photos.lookup_mut(path) else {
            self.state.photos.mark_loading(path.clone());
            self.state.load_requests.push(path.clone());
            return ImageDraw::Pending;
        };

        match slot {
            PhotoSlot::Loading => ImageDraw::Pending,
            PhotoSlot::Failed(message) => ImageDraw::Unavailable(message.clone()),
            PhotoSlot::Ready(protocol) => match Self::draw_protocol(frame, area, protocol) {
                Ok(()) => ImageDraw::Drawn,
                Err(err) => {
                    let message = err.to_string();
                    warn!(path = %path.display(), error = %message, "photo encode failed");
                    *slot = PhotoSlot::Failed(message.clone());
                    ImageDraw::Unavailable(message)
                }
            },
        }
    }

    fn take_load_requests(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.state.load_requests)
    }

    fn ingest(&mut self, loaded: ImageLoadResult) -> bool {
        let slot = match loaded.result {
            Ok(photo) => {
                debug!(
                    path = %loaded.path.display(),
                    elapsed_ms = loaded.elapsed.as_millis() as u64,
                    "photo ready"
                );
                PhotoSlot::Ready(Box::new(self.config.picker.new_resize_protocol(photo)))
            }
            Err(err) => {
                warn!(path = %loaded.path.display(), error = %err, "photo unavailable");
                PhotoSlot::Failed(err.to_string())
            }
        };
        let settled = self.state.photos.settle(&loaded.path, slot);
        debug!(
            cached = self.state.photos.len(),
            hit_rate = self.state.photos.hit_rate(),
            "photo cache updated"
        );
        settled
    }

    fn has_pending_work(&self) -> bool {
        !self.state.load_requests.is_empty() || self.state.photos.has_pending_work()
    }
}

pub(crate) fn protocol_type_label(protocol: ProtocolType) -> &'static str {
    match protocol {
        ProtocolType::Halfblocks => "halfblocks",
        ProtocolType::Sixel => "sixel",
        ProtocolType::Kitty => "kitty",
        ProtocolType::Iterm2 => "iterm2",
    }
}

fn center_rect_within(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::center_rect_within;

    #[test]
    fn center_rect_within_places_rect_in_the_middle() {
        let area = Rect::new(10, 5, 20, 10);
        let centered = center_rect_within(area, 8, 4);
        assert_eq!(centered, Rect::new(16, 8, 8, 4));
    }

    #[test]
    fn center_rect_within_clamps_to_area() {
        let area = Rect::new(0, 0, 6, 3);
        assert_eq!(center_rect_within(area, 40, 0), Rect::new(0, 1, 6, 1));
    }
}
