//! # QR Studio 核心库
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │            桌面壳 (qr-studio, Tauri + 静态前端)           │
//! │   commands ── clipboard(arboard) ── settings(json)       │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ StudioState 快照（每个动作返回新状态）
//! ┌───────┴──────────────────────────────────────────────────┐
//! │                 核心库 (qr-studio-core)                   │
//! │                                                          │
//! │  studio ─┬─ encoder   文本 → QR 位图（qrcode）            │
//! │          ├─ decoder   位图 → 文本列表（rqrr）             │
//! │          ├─ preview   固定预览框缩放居中 + data URL       │
//! │          └─ loader    图片读取校验 / PNG 保存             │
//! │  config ── 预览尺寸、资源上限、纠错等级                   │
//! │  error  ── QrError（统一错误类型）                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`config`] | `StudioConfig`、`ErrorLevel`、`EncodeOptions` 默认值 |
//! | [`error`] | 统一错误类型 `QrError`，区分提示类与错误类 |
//! | [`encoder`] | 纠错等级映射、自动选版本、黑白 RGB 渲染 |
//! | [`decoder`] | 全图识别、UTF-8 宽松解码、失败静默 |
//! | [`preview`] | `fit_to_box` 只缩不放 + 白底居中 |
//! | [`loader`] | 文件签名/体积/像素校验，RGB 归一化，PNG 保存 |
//! | [`studio`] | 显式应用状态与各按钮动作 |

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod preview;
pub mod studio;

pub use config::{EncodeOptions, ErrorLevel, StudioConfig};
pub use decoder::{decode, DecodedResult};
pub use encoder::{encode, EncodeRequest};
pub use error::QrError;
pub use preview::{fit_to_box, png_data_url};
pub use studio::{PreviewSlot, StudioState, TextClipboard};
