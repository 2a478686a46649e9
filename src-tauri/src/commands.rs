//! # Tauri 命令层
//!
//! ## 设计思路
//!
//! 命令层仅做 IPC 参数接收与结果返回，不承载业务逻辑。
//! 每个命令把一个核心动作交给 `StudioServiceState::apply`，
//! 再把新快照转换为前端可直接渲染的 `ViewSnapshot`。
//!
//! 文件选择与提示对话框由前端通过 dialog 插件完成，这里只接收路径。

use std::path::PathBuf;

use chrono::Local;
use qr_studio_core::{png_data_url, EncodeOptions, ErrorLevel, StudioState};
use serde::Serialize;
use tauri::{AppHandle, State};

use crate::clipboard::SystemClipboard;
use crate::error::AppError;
use crate::service::StudioServiceState;
use crate::settings;

/// 前端渲染所需的完整界面状态。
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub input_text: String,
    pub decoded_text: String,
    pub status: String,
    pub save_enabled: bool,
    pub copy_enabled: bool,
    /// 生成预览（PNG data URL）
    pub qr_preview: Option<String>,
    /// 上传预览（PNG data URL）
    pub upload_preview: Option<String>,
}

impl ViewSnapshot {
    pub fn from_state(state: &StudioState) -> Result<Self, AppError> {
        let qr_preview = match &state.generated {
            Some(slot) => Some(png_data_url(&slot.preview)?),
            None => None,
        };
        let upload_preview = match &state.uploaded {
            Some(slot) => Some(png_data_url(&slot.preview)?),
            None => None,
        };

        Ok(Self {
            input_text: state.input_text.clone(),
            decoded_text: state.decoded_text.clone(),
            status: state.status.clone(),
            save_enabled: state.save_enabled,
            copy_enabled: state.copy_enabled,
            qr_preview,
            upload_preview,
        })
    }
}

/// 默认保存文件名：`qr_<时间戳>.png`。
pub fn default_save_name() -> String {
    format!("qr_{}.png", Local::now().format("%Y%m%d%H%M%S"))
}

#[tauri::command]
pub fn get_snapshot(state: State<'_, StudioServiceState>) -> Result<ViewSnapshot, AppError> {
    ViewSnapshot::from_state(&state.snapshot()?)
}

/// 由表单内容生成二维码。
#[tauri::command]
pub fn generate_qr(
    app: AppHandle,
    state: State<'_, StudioServiceState>,
    text: String,
    error_level: String,
    module_size: u32,
    border: u32,
) -> Result<ViewSnapshot, AppError> {
    let options = EncodeOptions {
        error_level: ErrorLevel::from_label(&error_level),
        module_size,
        border,
    }
    .clamped(state.config());

    let next = state.apply(|current, config| current.generate(&text, options, config))?;
    settings::store(&app, &options);
    ViewSnapshot::from_state(&next)
}

/// 将当前生成的二维码保存为 PNG。
#[tauri::command]
pub fn save_qr(state: State<'_, StudioServiceState>, path: String) -> Result<ViewSnapshot, AppError> {
    let path = PathBuf::from(path);
    let next = state.apply(|current, _| current.save(&path))?;
    ViewSnapshot::from_state(&next)
}

/// 打开图片并识别其中的二维码。
#[tauri::command]
pub fn open_qr_image(
    state: State<'_, StudioServiceState>,
    path: String,
) -> Result<ViewSnapshot, AppError> {
    let path = PathBuf::from(path);
    let next = state.apply(|current, config| current.open(&path, config))?;
    ViewSnapshot::from_state(&next)
}

#[tauri::command]
pub fn clear_all(state: State<'_, StudioServiceState>) -> Result<ViewSnapshot, AppError> {
    let next = state.apply(|current, _| Ok(current.clear()))?;
    ViewSnapshot::from_state(&next)
}

/// 复制识别文本（以前端文本框当前内容为准）。
#[tauri::command]
pub fn copy_decoded(
    state: State<'_, StudioServiceState>,
    text: String,
) -> Result<ViewSnapshot, AppError> {
    let mut clipboard = SystemClipboard;
    let next = state.apply(|current, _| current.copy(&text, &mut clipboard))?;
    ViewSnapshot::from_state(&next)
}

#[tauri::command]
pub fn suggest_save_name() -> String {
    default_save_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qr_studio_core::StudioConfig;

    #[test]
    fn empty_state_has_no_previews() {
        let view = ViewSnapshot::from_state(&StudioState::default()).expect("view");
        assert!(view.qr_preview.is_none());
        assert!(view.upload_preview.is_none());
        assert!(!view.save_enabled);
    }

    #[test]
    fn generated_state_exposes_png_preview() {
        let state = StudioState::default()
            .generate("HELLO", EncodeOptions::default(), &StudioConfig::default())
            .expect("generate");
        let view = ViewSnapshot::from_state(&state).expect("view");

        let preview = view.qr_preview.expect("qr preview");
        assert!(preview.starts_with("data:image/png;base64,"));
        assert!(view.save_enabled);
        assert_eq!(view.status, "QR generated");
    }

    #[test]
    fn save_name_is_timestamped_png() {
        let name = default_save_name();
        assert!(name.starts_with("qr_"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "qr_20260101120000.png".len());
    }
}
