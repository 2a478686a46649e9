//! # QR Studio 桌面壳 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              前端 (dist/，静态 HTML + JS)                 │
//! │   表单 ── 两个预览框 ── 按钮 ── 状态栏                     │
//! │   dialog 插件：打开 / 保存 / 信息 / 错误对话框             │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ Tauri IPC (Result<ViewSnapshot, AppError>)
//! ┌───────┴──────────────────────────────────────────────────┐
//! │                    后端 (Rust)                            │
//! │                                                          │
//! │  commands ── 参数适配 + 快照转换                          │
//! │  service  ── StudioServiceState（配置 + 当前快照）        │
//! │  clipboard── arboard 纯文本写入                           │
//! │  settings ── 编码参数持久化                               │
//! │  error    ── AppError（统一错误类型）                     │
//! │       ↓                                                  │
//! │  qr-studio-core（编码 / 识别 / 预览 / 加载保存 / 动作）   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，所有 Tauri command 的返回类型 |
//! | [`commands`] | 生成、保存、打开、清空、复制等命令 |
//! | [`service`] | 托管状态，串行执行动作并整体替换快照 |
//! | [`clipboard`] | 系统剪贴板写入 |
//! | [`settings`] | 上次使用的编码参数读写 |

pub mod clipboard;
pub mod commands;
pub mod error;
pub mod service;
pub mod settings;
