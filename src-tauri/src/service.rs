//! # 服务层（可注入状态）
//!
//! ## 设计思路
//!
//! `StudioServiceState` 作为 Tauri 托管状态注入命令层，持有：
//! - 运行期配置 `StudioConfig`（启动后只读）
//! - 当前界面快照 `StudioState`
//!
//! 动作本身由核心库的纯函数完成：锁内读取当前快照 → 计算新快照 → 整体替换。
//! 动作失败时不替换，旧快照保持不变。

use std::sync::Mutex;

use qr_studio_core::{QrError, StudioConfig, StudioState};

use crate::error::AppError;

pub struct StudioServiceState {
    config: StudioConfig,
    current: Mutex<StudioState>,
}

impl StudioServiceState {
    pub fn new() -> Self {
        Self::with_config(StudioConfig::default())
    }

    /// 使用自定义配置创建服务状态，主要用于测试。
    pub fn with_config(config: StudioConfig) -> Self {
        Self {
            config,
            current: Mutex::new(StudioState::default()),
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// 读取当前快照。
    pub fn snapshot(&self) -> Result<StudioState, AppError> {
        self.current
            .lock()
            .map(|state| state.clone())
            .map_err(|_| AppError::State)
    }

    /// 执行一个动作并用其返回的新快照替换当前快照。
    pub fn apply<F>(&self, action: F) -> Result<StudioState, AppError>
    where
        F: FnOnce(&StudioState, &StudioConfig) -> Result<StudioState, QrError>,
    {
        let mut current = self.current.lock().map_err(|_| AppError::State)?;
        let next = action(&current, &self.config)?;
        *current = next.clone();
        Ok(next)
    }
}

impl Default for StudioServiceState {
    fn default() -> Self {
        Self::new()
    }
}
