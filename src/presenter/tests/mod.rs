use std::path::PathBuf;
use std::time::Duration;

use image::{DynamicImage, Rgba, RgbaImage};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::content::ImageRef;
use crate::error::AppError;

use super::factory::{create_presenter, presenter_kind_for};
use super::loader::ImageLoadResult;
use super::ratatui::RatatuiImagePresenter;
use super::traits::{ImageDraw, ImagePresenter, PresenterKind};
use crate::config::UiConfig;

fn draw_once(presenter: &mut dyn ImagePresenter, image: &ImageRef) -> ImageDraw {
    let mut terminal = Terminal::new(TestBackend::new(20, 10)).expect("test terminal");
    let mut outcome = ImageDraw::Pending;
    terminal
        .draw(|frame| {
            outcome = presenter.draw(frame, Rect::new(0, 0, 20, 10), image);
        })
        .expect("draw should succeed");
    outcome
}

fn photo() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([30, 160, 90, 255])))
}

fn loaded(path: &str, result: Result<DynamicImage, AppError>) -> ImageLoadResult {
    ImageLoadResult {
        path: PathBuf::from(path),
        result,
        elapsed: Duration::from_millis(3),
    }
}

#[test]
fn presenter_kind_follows_show_images() {
    let mut ui = UiConfig::default();
    assert_eq!(presenter_kind_for(&ui), PresenterKind::RatatuiImage);
    ui.show_images = false;
    assert_eq!(presenter_kind_for(&ui), PresenterKind::TextOnly);
}

#[test]
fn text_only_presenter_describes_every_image() {
    let mut presenter = create_presenter(PresenterKind::TextOnly).expect("text presenter");
    let image = ImageRef::Local(PathBuf::from("/photos/beach.jpg"));

    assert_eq!(
        draw_once(presenter.as_mut(), &image),
        ImageDraw::Unavailable("/photos/beach.jpg".to_string())
    );
    assert!(presenter.take_load_requests().is_empty());
    assert_eq!(presenter.status_label(), "text-only");
}

#[test]
fn remote_photos_are_never_fetched() {
    let mut presenter = RatatuiImagePresenter::new();
    let image = ImageRef::Remote("https://example.com/a.jpg".to_string());

    assert_eq!(
        draw_once(&mut presenter, &image),
        ImageDraw::Unavailable("https://example.com/a.jpg".to_string())
    );
    assert!(presenter.take_load_requests().is_empty());
}

#[test]
fn local_photo_is_requested_once_then_drawn_after_ingest() {
    let mut presenter = RatatuiImagePresenter::new();
    let image = ImageRef::Local(PathBuf::from("/photos/beach.png"));

    assert_eq!(draw_once(&mut presenter, &image), ImageDraw::Pending);
    assert_eq!(draw_once(&mut presenter, &image), ImageDraw::Pending);
    assert_eq!(
        presenter.take_load_requests(),
        vec![PathBuf::from("/photos/beach.png")]
    );
    assert!(presenter.has_pending_work());

    assert!(presenter.ingest(loaded("/photos/beach.png", Ok(photo()))));
    assert!(!presenter.has_pending_work());
    assert_eq!(draw_once(&mut presenter, &image), ImageDraw::Drawn);
    assert_eq!(presenter.cached_photos(), 1);
}

#[test]
fn failed_photo_reports_its_error() {
    let mut presenter = RatatuiImagePresenter::new();
    let image = ImageRef::Local(PathBuf::from("/photos/broken.png"));
    draw_once(&mut presenter, &image);

    presenter.ingest(loaded(
        "/photos/broken.png",
        Err(AppError::unsupported("corrupt photo")),
    ));

    match draw_once(&mut presenter, &image) {
        ImageDraw::Unavailable(message) => assert!(message.contains("corrupt photo")),
        other => panic!("expected unavailable photo, got {other:?}"),
    }
}

#[test]
fn ingest_of_evicted_photo_is_ignored() {
    let mut presenter = RatatuiImagePresenter::with_cache_entries(1);
    draw_once(&mut presenter, &ImageRef::Local(PathBuf::from("/a.png")));
    draw_once(&mut presenter, &ImageRef::Local(PathBuf::from("/b.png")));

    assert!(!presenter.ingest(loaded("/a.png", Ok(photo()))));
    assert_eq!(presenter.cached_photos(), 1);
}

#[test]
fn presenter_status_label_names_the_protocol() {
    let presenter = RatatuiImagePresenter::new();
    assert_eq!(presenter.status_label(), "ratatui-image/halfblocks");
    assert_eq!(
        presenter.runtime_info().graphics_protocol,
        Some("halfblocks")
    );
}
