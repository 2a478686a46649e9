//! # 加载与保存模块
//!
//! ## 设计思路
//!
//! 打开图片前先做廉价检查，再做完整解码：
//! 1. 文件体积上限
//! 2. 文件签名（`infer`）必须是 PNG / JPEG / BMP / GIF
//! 3. 只读 header 获取宽高，按像素上限快速拒绝
//! 4. 完整解码并归一化为 RGB
//!
//! 保存只支持 PNG；路径没有扩展名时补 `.png`。

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, RgbImage};

use crate::{QrError, StudioConfig};

/// 允许打开的图片 MIME 类型。
const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/bmp", "image/gif"];

/// 读取本地图片并转为 RGB。
pub fn load_image(path: &Path, config: &StudioConfig) -> Result<RgbImage, QrError> {
    log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

    let metadata = fs::metadata(path)
        .map_err(|e| QrError::FileSystem(format!("Could not open image: {}", e)))?;
    if metadata.len() > config.max_file_size {
        return Err(QrError::ResourceLimit(format!(
            "{:.2} MB (limit: {:.2} MB)",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = fs::read(path).map_err(|e| QrError::FileSystem(format!("Could not open image: {}", e)))?;
    decode_bytes(&bytes, config)
}

/// 从内存字节解码图片（签名、像素上限校验后）。
pub fn decode_bytes(bytes: &[u8], config: &StudioConfig) -> Result<RgbImage, QrError> {
    validate_image_signature(bytes)?;

    let (width, height) = inspect_dimensions(bytes)?;
    validate_pixel_limits(config, width, height)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| QrError::FileSystem(format!("Could not open image: {}", e)))?;
    let rgb = decoded.to_rgb8();

    log::info!("✅ 本地图片读取成功 - 尺寸: {}x{}", rgb.width(), rgb.height());

    Ok(rgb)
}

/// 以 PNG 格式保存位图，返回实际写入的路径。
pub fn save_png(image: &RgbImage, path: &Path) -> Result<PathBuf, QrError> {
    let target = if path.extension().is_none() {
        path.with_extension("png")
    } else {
        path.to_path_buf()
    };

    image
        .save_with_format(&target, ImageFormat::Png)
        .map_err(|e| QrError::FileSystem(format!("Could not save file: {}", e)))?;

    log::info!("💾 二维码已保存 - 路径: {}", target.display());

    Ok(target)
}

fn validate_image_signature(bytes: &[u8]) -> Result<(), QrError> {
    let kind = infer::get(bytes)
        .ok_or_else(|| QrError::InvalidFormat("unrecognized file type".to_string()))?;

    if !ACCEPTED_MIME_TYPES.contains(&kind.mime_type()) {
        return Err(QrError::InvalidFormat(format!(
            "{} (expected PNG, JPEG, BMP or GIF)",
            kind.mime_type()
        )));
    }

    Ok(())
}

/// 仅通过图片头信息读取宽高。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), QrError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| QrError::InvalidFormat(format!("unknown format: {}", e)))?
        .into_dimensions()
        .map_err(|e| QrError::InvalidFormat(format!("unreadable header: {}", e)))
}

fn validate_pixel_limits(config: &StudioConfig, width: u32, height: u32) -> Result<(), QrError> {
    let pixels = (width as u64) * (height as u64);
    if pixels > config.max_decoded_pixels {
        return Err(QrError::ResourceLimit(format!(
            "{} pixels (limit: {} pixels)",
            pixels, config.max_decoded_pixels
        )));
    }
    Ok(())
}
