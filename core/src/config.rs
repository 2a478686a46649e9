//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有可调策略集中到 `StudioConfig`，把表单输入集中到 `EncodeOptions`。
//! 纠错等级作为高层语义（L/M/Q/H），在编码器内映射到 `qrcode::EcLevel`。
//!
//! ## 实现思路
//!
//! - `Default` 提供与桌面界面一致的默认值（预览框 295×265、M / 10 / 4）。
//! - `ErrorLevel::from_label` 宽松解析：无法识别时回退到 M 并记录警告。
//! - `EncodeOptions::clamped` 将模块尺寸、边框限制在表单微调框范围内。

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// 运行期配置。
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// 预览框宽度（像素）。
    pub preview_width: u32,
    /// 预览框高度（像素）。
    pub preview_height: u32,
    /// 预览缩放滤镜。
    pub preview_filter: FilterType,
    /// 单个模块最大像素边长。
    pub max_module_size: u32,
    /// 静区最大模块数。
    pub max_border: u32,
    /// 打开图片时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 打开图片解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 生成二维码位图的像素上限。
    pub max_rendered_pixels: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            preview_width: 295,
            preview_height: 265,
            preview_filter: FilterType::Lanczos3,
            max_module_size: 40,
            max_border: 20,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_rendered_pixels: 40_000_000,
        }
    }
}

/// 纠错等级（可恢复的损坏比例约为 7% / 15% / 25% / 30%）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorLevel {
    pub const ALL: [ErrorLevel; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// 从表单字符串解析纠错等级。
    ///
    /// 接受 `"L"`、`"q"`、`"H (30%)"` 等写法；其余一律回退为 M。
    ///
    /// # 示例
    /// ```rust
    /// use qr_studio_core::ErrorLevel;
    ///
    /// assert_eq!(ErrorLevel::from_label("Q (25%)"), ErrorLevel::Q);
    /// assert_eq!(ErrorLevel::from_label("ultra"), ErrorLevel::M);
    /// ```
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        let head = trimmed
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default();

        match head.to_ascii_uppercase().as_str() {
            "L" => Self::L,
            "M" => Self::M,
            "Q" => Self::Q,
            "H" => Self::H,
            _ => {
                log::warn!("⚠️ 未知纠错等级：{:?}，回退为 M", trimmed);
                Self::M
            }
        }
    }

    /// 界面下拉框展示文本。
    pub fn label(self) -> &'static str {
        match self {
            Self::L => "L (7%)",
            Self::M => "M (15%)",
            Self::Q => "Q (25%)",
            Self::H => "H (30%)",
        }
    }

    pub fn recovery_percent(self) -> u8 {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }
}

/// 表单上的编码参数（不含文本）。
///
/// 每次成功生成后持久化，下次启动时回填表单。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub error_level: ErrorLevel,
    pub module_size: u32,
    pub border: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            error_level: ErrorLevel::M,
            module_size: 10,
            border: 4,
        }
    }
}

impl EncodeOptions {
    /// 将模块尺寸限制在 `1..=max_module_size`，边框限制在 `0..=max_border`。
    pub fn clamped(self, config: &StudioConfig) -> Self {
        Self {
            error_level: self.error_level,
            module_size: self.module_size.clamp(1, config.max_module_size.max(1)),
            border: self.border.min(config.max_border),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_parser() {
        for level in ErrorLevel::ALL {
            assert_eq!(ErrorLevel::from_label(level.label()), level);
        }
    }

    #[test]
    fn parser_is_case_and_whitespace_tolerant() {
        assert_eq!(ErrorLevel::from_label("  l "), ErrorLevel::L);
        assert_eq!(ErrorLevel::from_label("h(30%)"), ErrorLevel::H);
    }

    #[test]
    fn unknown_labels_fall_back_to_medium() {
        assert_eq!(ErrorLevel::from_label(""), ErrorLevel::M);
        assert_eq!(ErrorLevel::from_label("X (99%)"), ErrorLevel::M);
        assert_eq!(ErrorLevel::from_label("Low"), ErrorLevel::M);
    }

    #[test]
    fn clamped_respects_spinbox_ranges() {
        let config = StudioConfig::default();
        let options = EncodeOptions {
            error_level: ErrorLevel::H,
            module_size: 0,
            border: 99,
        }
        .clamped(&config);

        assert_eq!(options.module_size, 1);
        assert_eq!(options.border, 20);
        assert_eq!(options.error_level, ErrorLevel::H);

        let big = EncodeOptions {
            module_size: 500,
            ..EncodeOptions::default()
        }
        .clamped(&config);
        assert_eq!(big.module_size, 40);
        assert_eq!(big.border, 4);
    }
}
