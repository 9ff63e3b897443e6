use std::path::Path;

use fast_image_resize as fr;
use image::{DynamicImage, RgbaImage};

use crate::error::{AppError, AppResult};

pub(crate) const SIMD_DOWNSCALE_FILTER: fr::FilterType = fr::FilterType::CatmullRom;

/// Photos are bounded to this many pixels per side before any terminal
/// encoding happens; larger sources only cost encode time.
pub(crate) const MAX_DECODED_SIDE_PX: u32 = 1600;

pub(crate) fn decode_photo(path: &Path, max_side_px: u32) -> AppResult<DynamicImage> {
    let reference = path.display().to_string();
    let decoded = image::open(path).map_err(|err| AppError::image_load(reference.clone(), err))?;
    let rgba = decoded.into_rgba8();

    let Some((dst_width, dst_height)) =
        fit_downscale_dimensions(rgba.width(), rgba.height(), max_side_px, max_side_px)
    else {
        return Ok(DynamicImage::ImageRgba8(rgba));
    };
    let resized = resize_rgba_simd(rgba, dst_width, dst_height)
        .map_err(|err| AppError::image_load(reference, err))?;
    Ok(DynamicImage::ImageRgba8(resized))
}

pub(crate) fn fit_downscale_dimensions(
    src_width: u32,
    src_height: u32,
    max_width: u32,
    max_height: u32,
) -> Option<(u32, u32)> {
    if src_width == 0 || src_height == 0 || max_width == 0 || max_height == 0 {
        return None;
    }
    if src_width <= max_width && src_height <= max_height {
        return None;
    }

    let width_limited = (max_width as u64).saturating_mul(src_height as u64)
        <= (max_height as u64).saturating_mul(src_width as u64);

    if width_limited {
        let dst_height =
            ((src_height as u64).saturating_mul(max_width as u64) / src_width as u64).max(1) as u32;
        Some((max_width, dst_height.min(max_height)))
    } else {
        let dst_width =
            ((src_width as u64).saturating_mul(max_height as u64) / src_height as u64).max(1) as u32;
        Some((dst_width.min(max_width), max_height))
    }
}

fn resize_rgba_simd(src: RgbaImage, dst_width: u32, dst_height: u32) -> AppResult<RgbaImage> {
    let (src_width, src_height) = src.dimensions();
    let src = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        src.into_raw(),
        fr::PixelType::U8x4,
    )
    .map_err(|_| AppError::invalid_argument("rgba pixels length does not match dimensions"))?;

    let mut dst = fr::images::Image::new(dst_width, dst_height, fr::PixelType::U8x4);
    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(SIMD_DOWNSCALE_FILTER));
    resizer
        .resize(&src, &mut dst, &options)
        .map_err(|_| AppError::unsupported("failed to downscale photo with SIMD"))?;

    RgbaImage::from_raw(dst_width, dst_height, dst.into_vec())
        .ok_or_else(|| AppError::unsupported("downscaled photo has unexpected length"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use image::{Rgba, RgbaImage};

    use super::{decode_photo, fit_downscale_dimensions};

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("lu_photo_{}_{}_{suffix}", process::id(), nanos));
        path
    }

    #[test]
    fn fit_downscale_keeps_aspect_ratio() {
        assert_eq!(fit_downscale_dimensions(4000, 3000, 1600, 1600), Some((1600, 1200)));
        assert_eq!(fit_downscale_dimensions(1000, 4000, 1600, 1600), Some((400, 1600)));
        assert_eq!(fit_downscale_dimensions(800, 600, 1600, 1600), None);
        assert_eq!(fit_downscale_dimensions(0, 600, 1600, 1600), None);
    }

    #[test]
    fn decode_photo_downscales_large_png() {
        let path = unique_temp_path("large.png");
        RgbaImage::from_pixel(64, 32, Rgba([200, 80, 120, 255]))
            .save(&path)
            .expect("png should be written");

        let photo = decode_photo(&path, 16).expect("png should decode");
        assert_eq!((photo.width(), photo.height()), (16, 8));

        std::fs::remove_file(&path).expect("temp png should be removed");
    }

    #[test]
    fn decode_photo_reports_missing_file() {
        let err = decode_photo(&unique_temp_path("missing.jpg"), 16).expect_err("missing photo");
        assert!(err.to_string().contains("missing.jpg"));
    }
}
