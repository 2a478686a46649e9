//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 所有 `#[tauri::command]` 函数统一返回 `Result<T, AppError>`。
//! 前端根据 `severity` 决定弹出信息对话框（提示类）还是错误对话框。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `QrError` 提供 `From` 转换，命令层直接 `?`。
//! - 手写 `Serialize`，输出 `{ code, severity, message }` 结构，满足 Tauri IPC 要求。

use qr_studio_core::QrError;
use serde::ser::SerializeStruct;
use serde::Serialize;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 编码 / 识别 / 文件 / 剪贴板链路错误
    #[error("{0}")]
    Studio(#[from] QrError),

    /// 设置文件或应用数据目录不可用
    #[error("Settings unavailable: {0}")]
    Storage(String),

    /// 托管状态锁已中毒
    #[error("Application state unavailable")]
    State,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Studio(err) => err.code(),
            Self::Storage(_) => "storage",
            Self::State => "state",
        }
    }

    pub fn severity(&self) -> &'static str {
        match self {
            Self::Studio(err) if err.is_notice() => "info",
            _ => "error",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Storage(error.to_string())
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AppError", 3)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("severity", self.severity())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
