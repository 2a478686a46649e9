//! # 识别模块
//!
//! ## 设计思路
//!
//! 定位图案检测、位提取等全部交给 `rqrr`。本模块只做：
//! - 把任意 RGB 位图转为灰度后整图送检；短边不足 600 像素的小图先按整数倍
//!   最近邻放大，`rqrr` 在每模块 1 像素时会触发内部断言
//! - 每个检出的符号按 UTF-8 宽松解码（非法字节替换为 U+FFFD）
//! - 任何失败（单个符号解码失败、库内部 panic）都视为“没有结果”
//!
//! 没有识别到二维码是正常结果，返回空列表，不构造错误。

use std::panic::{self, AssertUnwindSafe};

use image::{DynamicImage, GrayImage, RgbImage};

/// 短边低于该值的图片先放大再识别。
const UPSCALE_BELOW: u32 = 600;
const UPSCALE_FACTOR: u32 = 3;
/// 放大前的像素上限，细长图不放大。
const UPSCALE_MAX_PIXELS: u64 = 4_000_000;

/// 识别结果：按检出顺序排列的文本列表。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedResult {
    payloads: Vec<String>,
}

impl DecodedResult {
    pub fn payloads(&self) -> &[String] {
        &self.payloads
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// 以换行拼接，供文本框展示。
    pub fn joined(&self) -> String {
        self.payloads.join("\n")
    }
}

/// 识别位图中的全部二维码。
///
/// # 示例
/// ```rust
/// use image::RgbImage;
/// use qr_studio_core::decode;
///
/// let blank = RgbImage::from_pixel(64, 64, image::Rgb([255, 255, 255]));
/// assert!(decode(&blank).is_empty());
/// ```
pub fn decode(image: &RgbImage) -> DecodedResult {
    let gray = upscale_small(DynamicImage::ImageRgb8(image.clone()).into_luma8());

    match panic::catch_unwind(AssertUnwindSafe(|| scan_grids(&gray))) {
        Ok(payloads) => {
            log::info!("🔍 识别完成 - 检出 {} 个二维码", payloads.len());
            DecodedResult { payloads }
        }
        Err(_) => {
            log::debug!("🚫 识别库内部断言失败，按未识别处理");
            DecodedResult::default()
        }
    }
}

/// 整数倍最近邻放大，模块边缘保持锐利。
fn upscale_small(gray: GrayImage) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0
        || height == 0
        || width.min(height) >= UPSCALE_BELOW
        || width as u64 * height as u64 > UPSCALE_MAX_PIXELS
    {
        return gray;
    }

    GrayImage::from_fn(width * UPSCALE_FACTOR, height * UPSCALE_FACTOR, |x, y| {
        *gray.get_pixel(x / UPSCALE_FACTOR, y / UPSCALE_FACTOR)
    })
}

fn scan_grids(gray: &GrayImage) -> Vec<String> {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| gray.get_pixel(x as u32, y as u32).0[0],
    );

    prepared
        .detect_grids()
        .into_iter()
        .enumerate()
        .filter_map(|(index, grid)| {
            let mut bytes = Vec::new();
            match grid.decode_to(&mut bytes) {
                Ok(_meta) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                Err(err) => {
                    log::debug!("🚫 第 {} 个候选符号解码失败：{}", index + 1, err);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use qrcode::QrCode;

    use crate::encoder::rasterize;

    #[test]
    fn blank_image_yields_no_payloads() {
        let image = RgbImage::from_pixel(200, 120, Rgb([255, 255, 255]));
        assert!(decode(&image).is_empty());
    }

    #[test]
    fn noisy_image_yields_no_payloads() {
        let image = RgbImage::from_fn(160, 160, |x, y| {
            let v = ((x * 31 + y * 17) ^ (x * y)) % 256;
            Rgb([v as u8, (v / 2) as u8, 255 - v as u8])
        });
        assert!(decode(&image).is_empty());
    }

    #[test]
    fn empty_image_does_not_panic() {
        let image = RgbImage::new(0, 0);
        assert!(decode(&image).is_empty());
    }

    #[test]
    fn joined_uses_newlines() {
        let result = DecodedResult {
            payloads: vec!["first".into(), "second".into()],
        };
        assert_eq!(result.joined(), "first\nsecond");
    }

    #[test]
    fn invalid_utf8_bytes_become_replacement_characters() {
        let code = QrCode::new([0x48, 0xff, 0xfe, 0x49]).expect("raw bytes fit version 1");
        let modules = code.width() as u32;
        let image = rasterize(&code.to_colors(), modules, 4, 4);

        assert_eq!(decode(&image).payloads(), ["H\u{FFFD}\u{FFFD}I".to_string()]);
    }

    #[test]
    fn small_images_are_upscaled_by_whole_pixels() {
        let gray = GrayImage::from_fn(2, 1, |x, _| image::Luma([if x == 0 { 0 } else { 255 }]));
        let scaled = upscale_small(gray);

        assert_eq!(scaled.dimensions(), (6, 3));
        assert_eq!(scaled.get_pixel(2, 2).0[0], 0);
        assert_eq!(scaled.get_pixel(3, 0).0[0], 255);
    }

    #[test]
    fn large_images_are_scanned_as_is() {
        let gray = GrayImage::new(600, 800);
        assert_eq!(upscale_small(gray).dimensions(), (600, 800));

        let strip = GrayImage::new(20_000, 300);
        assert_eq!(upscale_small(strip).dimensions(), (20_000, 300));
    }
}
