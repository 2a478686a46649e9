//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载编码、加载、保存、剪贴板链路中的所有错误来源。
//! 其中 `EmptyInput` / `NothingToSave` / `NothingToCopy` 属于“提示类”：
//! 前端以信息对话框展示，状态不变；其余均为“错误类”。
//!
//! 识别失败不在此列：没有识别到二维码是正常结果，不会构造错误。

/// 核心库统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("Please enter text to encode.")]
    EmptyInput,

    #[error("No QR image to save.")]
    NothingToSave,

    #[error("No decoded text to copy.")]
    NothingToCopy,

    #[error("Could not encode text: {0}")]
    Encode(String),

    #[error("Unsupported image: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    FileSystem(String),

    #[error("Image too large: {0}")]
    ResourceLimit(String),

    #[error("Could not copy to clipboard: {0}")]
    Clipboard(String),
}

impl QrError {
    /// 稳定错误码，供前端分支判断。
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::NothingToSave => "nothing_to_save",
            Self::NothingToCopy => "nothing_to_copy",
            Self::Encode(_) => "encode",
            Self::InvalidFormat(_) => "invalid_format",
            Self::FileSystem(_) => "file_system",
            Self::ResourceLimit(_) => "resource_limit",
            Self::Clipboard(_) => "clipboard",
        }
    }

    /// 是否为提示类（信息对话框，而非错误对话框）。
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NothingToSave | Self::NothingToCopy)
    }
}

#[cfg(test)]
mod tests {
    use super::QrError;

    #[test]
    fn notices_are_only_the_three_user_conditions() {
        assert!(QrError::EmptyInput.is_notice());
        assert!(QrError::NothingToSave.is_notice());
        assert!(QrError::NothingToCopy.is_notice());
        assert!(!QrError::FileSystem("x".into()).is_notice());
        assert!(!QrError::Clipboard("x".into()).is_notice());
    }

    #[test]
    fn file_system_message_is_passed_through() {
        let err = QrError::FileSystem("Could not open image: missing".into());
        assert_eq!(err.to_string(), "Could not open image: missing");
        assert_eq!(err.code(), "file_system");
    }
}
