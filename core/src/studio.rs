//! # 应用状态与动作模块
//!
//! ## 设计思路
//!
//! 界面状态集中在 `StudioState` 中，不再散落在窗口对象的可变字段里。
//! 每个按钮动作都是独立、幂等的请求：读取当前快照，返回新的快照。
//! 出错时返回 `QrError`，调用方保留旧快照不变。
//!
//! ## 实现思路
//!
//! - 两个预览槽（生成图 / 上传图）各自整体替换，从不局部修改。
//! - 位图用 `Arc` 共享，快照克隆只复制指针。
//! - 剪贴板通过 `TextClipboard` 注入，桌面壳用 `arboard` 实现，测试用内存实现。
//!
//! ## 动作一览
//!
//! ```text
//! generate ── 校验文本 → encode → fit_to_box → 生成槽
//! save     ── 生成槽 → PNG
//! open     ── load_image → fit_to_box → 上传槽 → decode → 文本框
//! clear    ── 清空全部
//! copy     ── 文本框 → 剪贴板
//! ```

use std::path::Path;
use std::sync::Arc;

use image::RgbImage;

use crate::{decoder, encoder, loader, preview};
use crate::{EncodeOptions, EncodeRequest, QrError, StudioConfig};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_GENERATED: &str = "QR generated";
pub const STATUS_DECODED: &str = "Decoded and copied into input for editing";
pub const STATUS_NOT_FOUND: &str = "No QR code found in uploaded image";
pub const STATUS_CLEARED: &str = "Cleared";
pub const STATUS_COPIED: &str = "Copied decoded text to clipboard";

/// 纯文本剪贴板写入能力。
pub trait TextClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), QrError>;
}

/// 预览槽：原图与适配预览框后的缩略图。
#[derive(Debug, Clone)]
pub struct PreviewSlot {
    pub image: Arc<RgbImage>,
    pub preview: Arc<RgbImage>,
}

impl PreviewSlot {
    fn new(image: RgbImage, config: &StudioConfig) -> Self {
        let preview = preview::fit_to_box(
            &image,
            config.preview_width,
            config.preview_height,
            config.preview_filter,
        );
        Self {
            image: Arc::new(image),
            preview: Arc::new(preview),
        }
    }
}

/// 应用状态快照。
#[derive(Debug, Clone)]
pub struct StudioState {
    pub input_text: String,
    pub decoded_text: String,
    pub generated: Option<PreviewSlot>,
    pub uploaded: Option<PreviewSlot>,
    pub status: String,
    pub save_enabled: bool,
    pub copy_enabled: bool,
}

impl Default for StudioState {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            decoded_text: String::new(),
            generated: None,
            uploaded: None,
            status: STATUS_READY.to_string(),
            save_enabled: false,
            copy_enabled: false,
        }
    }
}

impl StudioState {
    /// 由输入文本生成二维码，替换生成槽。
    pub fn generate(
        &self,
        text: &str,
        options: EncodeOptions,
        config: &StudioConfig,
    ) -> Result<Self, QrError> {
        let request = EncodeRequest::new(text, options, config)?;
        let image = encoder::encode(&request, config)?;

        Ok(Self {
            input_text: text.to_string(),
            generated: Some(PreviewSlot::new(image, config)),
            status: STATUS_GENERATED.to_string(),
            save_enabled: true,
            ..self.clone()
        })
    }

    /// 保存当前生成的二维码。
    pub fn save(&self, path: &Path) -> Result<Self, QrError> {
        let slot = self.generated.as_ref().ok_or(QrError::NothingToSave)?;
        let written = loader::save_png(&slot.image, path)?;

        Ok(Self {
            status: format!("Saved to {}", written.display()),
            ..self.clone()
        })
    }

    /// 打开图片并识别其中的二维码。
    ///
    /// 没有识别到内容不是错误：上传槽照常更新，状态栏给出提示。
    pub fn open(&self, path: &Path, config: &StudioConfig) -> Result<Self, QrError> {
        let image = loader::load_image(path, config)?;
        let decoded = decoder::decode(&image);
        let uploaded = Some(PreviewSlot::new(image, config));

        if decoded.is_empty() {
            return Ok(Self {
                uploaded,
                status: STATUS_NOT_FOUND.to_string(),
                save_enabled: true,
                ..self.clone()
            });
        }

        let text = decoded.joined();
        Ok(Self {
            input_text: text.clone(),
            decoded_text: text,
            uploaded,
            status: STATUS_DECODED.to_string(),
            save_enabled: true,
            copy_enabled: true,
            ..self.clone()
        })
    }

    /// 清空全部内容。
    pub fn clear(&self) -> Self {
        Self {
            status: STATUS_CLEARED.to_string(),
            ..Self::default()
        }
    }

    /// 将（可能已被用户编辑的）识别文本复制到剪贴板。
    pub fn copy(&self, text: &str, clipboard: &mut dyn TextClipboard) -> Result<Self, QrError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QrError::NothingToCopy);
        }

        clipboard.set_text(text)?;

        Ok(Self {
            decoded_text: text.to_string(),
            status: STATUS_COPIED.to_string(),
            ..self.clone()
        })
    }
}
