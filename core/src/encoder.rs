//! # 编码模块
//!
//! ## 设计思路
//!
//! 二维码符号本身（纠错码、模块布局、掩码）完全交给 `qrcode` crate，
//! 这里只负责三件事：
//! 1. 输入校验（去除首尾空白后不能为空，校验发生在任何编码调用之前）
//! 2. 纠错等级映射，并让库自动选择能容纳数据的最小版本
//! 3. 按模块尺寸与边框把模块矩阵栅格化为白底黑块的 RGB 位图
//!
//! `qrcode` 自带的渲染器只支持固定 4 模块静区，而表单允许 0~20，
//! 因此栅格化在本模块内完成。

use image::{Rgb, RgbImage};
use qrcode::bits::Bits;
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::{EncodeOptions, ErrorLevel, QrError, StudioConfig};

const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// 单次生成请求，由当前表单状态构建，用完即弃。
#[derive(Debug, Clone)]
pub struct EncodeRequest {
    text: String,
    options: EncodeOptions,
}

impl EncodeRequest {
    /// 构建请求：文本去除首尾空白，参数限制在表单范围内。
    ///
    /// 空文本在这里就返回 `QrError::EmptyInput`。
    pub fn new(text: &str, options: EncodeOptions, config: &StudioConfig) -> Result<Self, QrError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QrError::EmptyInput);
        }

        Ok(Self {
            text: text.to_string(),
            options: options.clamped(config),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }
}

impl From<ErrorLevel> for EcLevel {
    fn from(level: ErrorLevel) -> Self {
        match level {
            ErrorLevel::L => EcLevel::L,
            ErrorLevel::M => EcLevel::M,
            ErrorLevel::Q => EcLevel::Q,
            ErrorLevel::H => EcLevel::H,
        }
    }
}

/// 将请求编码为白底黑块的 RGB 位图。
///
/// 位图边长为 `(模块数 + 2 × 边框) × 模块尺寸`。
///
/// # 示例
/// ```rust
/// use qr_studio_core::{encode, EncodeOptions, EncodeRequest, StudioConfig};
///
/// let config = StudioConfig::default();
/// let request = EncodeRequest::new("HELLO", EncodeOptions::default(), &config)?;
/// let image = encode(&request, &config)?;
/// assert_eq!(image.width(), (21 + 8) * 10);
/// # Ok::<(), qr_studio_core::QrError>(())
/// ```
pub fn encode(request: &EncodeRequest, config: &StudioConfig) -> Result<RgbImage, QrError> {
    let options = request.options;
    let code = build_symbol(&request.text, options.error_level.into())?;

    let modules = code.width() as u32;
    let side_modules = modules + 2 * options.border;
    let side = side_modules
        .checked_mul(options.module_size)
        .ok_or_else(|| QrError::ResourceLimit("rendered size overflow".to_string()))?;

    let pixels = (side as u64) * (side as u64);
    if pixels > config.max_rendered_pixels {
        return Err(QrError::ResourceLimit(format!(
            "{}x{} pixels (limit: {} pixels), try a smaller module size or border",
            side, side, config.max_rendered_pixels
        )));
    }

    let image = rasterize(&code.to_colors(), modules, options.module_size, options.border);

    log::info!(
        "✅ 二维码生成成功 - 版本: {:?} 纠错: {:?}({}%) 模块: {} 尺寸: {}x{}",
        code.version(),
        options.error_level,
        options.error_level.recovery_percent(),
        modules,
        side,
        side
    );

    Ok(image)
}

/// 构建符号，由库选择能容纳数据的最小版本。
///
/// 非 ASCII 文本固定使用字节模式：UTF-8 字节可能被分段优化器误判为 Shift JIS 汉字段。
fn build_symbol(text: &str, level: EcLevel) -> Result<QrCode, QrError> {
    if text.is_ascii() {
        return QrCode::with_error_correction_level(text.as_bytes(), level)
            .map_err(|e| QrError::Encode(e.to_string()));
    }

    for version in 1..=40 {
        let mut bits = Bits::new(Version::Normal(version));
        if bits.push_byte_data(text.as_bytes()).is_err() || bits.push_terminator(level).is_err() {
            continue;
        }
        return QrCode::with_bits(bits, level).map_err(|e| QrError::Encode(e.to_string()));
    }

    Err(QrError::Encode(qrcode::types::QrError::DataTooLong.to_string()))
}

/// 按行优先的模块颜色数组绘制位图。
pub(crate) fn rasterize(colors: &[Color], modules: u32, module_size: u32, border: u32) -> RgbImage {
    let side = (modules + 2 * border) * module_size;
    let mut image = RgbImage::from_pixel(side, side, LIGHT);

    for (index, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let mx = index as u32 % modules;
        let my = index as u32 / modules;
        let x0 = (border + mx) * module_size;
        let y0 = (border + my) * module_size;
        for y in y0..y0 + module_size {
            for x in x0..x0 + module_size {
                image.put_pixel(x, y, DARK);
            }
        }
    }

    image
}
