//! 系统剪贴板模块
//!
//! 用 `arboard` 实现核心库的 `TextClipboard`，只写纯文本。
//! 每次写入都新建 `Clipboard` 句柄，不长期持有系统剪贴板。

use qr_studio_core::{QrError, TextClipboard};

/// 基于 `arboard` 的纯文本剪贴板。
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl TextClipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), QrError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| QrError::Clipboard(e.to_string()))?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| QrError::Clipboard(e.to_string()))?;

        log::info!("📋 已复制识别文本 - {} 字符", text.chars().count());
        Ok(())
    }
}
