//! # 预览变换模块
//!
//! ## 设计思路
//!
//! 生成的二维码与用户上传的图片共用同一个固定预览框变换：
//! 1. `scale = min(框宽/图宽, 框高/图高, 1.0)`，只缩不放
//! 2. 高质量重采样（`fast_image_resize` Lanczos3，失败回退 `image::resize_exact`）
//! 3. 白底画布居中，偏移量向下取整
//!
//! ## 实现思路
//!
//! 缩放后的尺寸使用整数比例计算，保证受限边恰好等于框边，
//! 避免浮点乘除带来的 1 像素误差。

use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::QrError;

const CANVAS: Rgb<u8> = Rgb([255, 255, 255]);

/// 计算缩放后的尺寸（只缩不放，每边至少 1 像素）。
pub fn fitted_size(width: u32, height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (1, 1);
    }
    if width <= box_width && height <= box_height {
        return (width, height);
    }

    let (w, h) = (width as u64, height as u64);
    let (bw, bh) = (box_width as u64, box_height as u64);

    // 比较 bw/w 与 bh/h，较小者决定缩放比例
    let (new_w, new_h) = if bw * h <= bh * w {
        (bw, h * bw / w)
    } else {
        (w * bh / h, bh)
    };

    (new_w.max(1) as u32, new_h.max(1) as u32)
}

/// 将图片缩放并居中到 `box_width × box_height` 的白底画布上。
///
/// # 示例
/// ```rust
/// use image::RgbImage;
/// use qr_studio_core::fit_to_box;
///
/// let wide = RgbImage::new(500, 100);
/// let fitted = fit_to_box(&wide, 295, 265, image::imageops::FilterType::Lanczos3);
/// assert_eq!(fitted.dimensions(), (295, 265));
/// ```
pub fn fit_to_box(image: &RgbImage, box_width: u32, box_height: u32, filter: FilterType) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut canvas = RgbImage::from_pixel(box_width, box_height, CANVAS);
    if width == 0 || height == 0 || box_width == 0 || box_height == 0 {
        return canvas;
    }

    let (new_width, new_height) = fitted_size(width, height, box_width, box_height);
    let resized = if (new_width, new_height) == (width, height) {
        image.clone()
    } else {
        resize(image, new_width, new_height, filter)
    };

    let x = (box_width - new_width) / 2;
    let y = (box_height - new_height) / 2;

    log::debug!(
        "🧩 预览适配：{}x{} -> {}x{}，偏移 ({}, {})",
        width,
        height,
        new_width,
        new_height,
        x,
        y
    );

    imageops::replace(&mut canvas, &resized, x as i64, y as i64);
    canvas
}

fn resize(image: &RgbImage, width: u32, height: u32, filter: FilterType) -> RgbImage {
    match resize_with_fast_image_resize(image, width, height, filter) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::resize：{}", err);
            imageops::resize(image, width, height, filter)
        }
    }
}

fn resize_with_fast_image_resize(
    image: &RgbImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbImage, QrError> {
    let (src_width, src_height) = image.dimensions();
    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| QrError::InvalidFormat(format!("source buffer: {}", e)))?;

    let mut dst_image = fr::images::Image::new(width, height, fr::PixelType::U8x3);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| QrError::InvalidFormat(format!("resize: {}", e)))?;

    RgbImage::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| QrError::InvalidFormat("resized buffer length mismatch".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

/// 将位图编码为 `data:image/png;base64,...`，供 WebView 的 `<img>` 直接使用。
pub fn png_data_url(image: &RgbImage) -> Result<String, QrError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| QrError::InvalidFormat(format!("png encode: {}", e)))?;

    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(bytes)
    ))
}
