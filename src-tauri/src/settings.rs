//! 编码参数持久化模块
//!
//! 每次成功生成后把表单参数（纠错等级、模块尺寸、边框）写入
//! 应用数据目录下的 `settings.json`，启动时回填表单。
//! 文件缺失或损坏时回退默认值，不阻断启动。

use std::fs;
use std::path::{Path, PathBuf};

use qr_studio_core::EncodeOptions;
use tauri::{AppHandle, Manager};

use crate::error::AppError;

const SETTINGS_FILE: &str = "settings.json";

fn settings_file_path(app: &AppHandle) -> Result<PathBuf, AppError> {
    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| AppError::Storage(format!("app data dir: {}", e)))?;

    fs::create_dir_all(&app_data_dir)
        .map_err(|e| AppError::Storage(format!("create app data dir: {}", e)))?;

    Ok(app_data_dir.join(SETTINGS_FILE))
}

/// 读取参数；文件不存在或无法解析时返回默认值。
pub fn read_options(path: &Path) -> EncodeOptions {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return EncodeOptions::default(),
    };

    match serde_json::from_str::<EncodeOptions>(&content) {
        Ok(options) => options,
        Err(err) => {
            log::warn!("⚠️ 设置文件解析失败，使用默认参数: {err}");
            EncodeOptions::default()
        }
    }
}

pub fn write_options(path: &Path, options: &EncodeOptions) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(options)
        .map_err(|e| AppError::Storage(format!("serialize settings: {}", e)))?;
    fs::write(path, content)?;
    Ok(())
}

pub fn load(app: &AppHandle) -> EncodeOptions {
    match settings_file_path(app) {
        Ok(path) => read_options(&path),
        Err(err) => {
            log::warn!("⚠️ 无法定位设置文件: {err}");
            EncodeOptions::default()
        }
    }
}

/// 保存失败只记录日志，不影响本次生成结果。
pub fn store(app: &AppHandle, options: &EncodeOptions) {
    let result = settings_file_path(app).and_then(|path| write_options(&path, options));
    if let Err(err) = result {
        log::warn!("⚠️ 保存编码参数失败: {err}");
    }
}

/// 前端启动时读取上次使用的编码参数。
#[tauri::command]
pub fn get_encode_settings(app: AppHandle) -> EncodeOptions {
    load(&app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qr_studio_core::ErrorLevel;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qr_studio_settings_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(read_options(&temp_path("missing.json")), EncodeOptions::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{ not json").expect("fixture");
        assert_eq!(read_options(&path), EncodeOptions::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn written_options_are_read_back() {
        let path = temp_path("roundtrip.json");
        let options = EncodeOptions {
            error_level: ErrorLevel::Q,
            module_size: 6,
            border: 2,
        };
        write_options(&path, &options).expect("write");
        assert_eq!(read_options(&path), options);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{"error_level":"H"}"#).expect("fixture");
        let options = read_options(&path);
        assert_eq!(options.error_level, ErrorLevel::H);
        assert_eq!(options.module_size, 10);
        assert_eq!(options.border, 4);
        let _ = fs::remove_file(path);
    }
}
