// 防止在 Windows 发布版本中显示额外的控制台窗口，不要删除！
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! # QR Studio — 应用入口
//!
//! 本文件仅负责日志初始化、插件注册、托管状态与命令注册。
//! 业务逻辑见 `qr-studio-core`，命令适配见 `commands.rs`。

use qr_studio::{commands, service::StudioServiceState, settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(StudioServiceState::new())
        .setup(|app| {
            let options = settings::load(app.handle());
            log::info!(
                "setup: 编码参数 - 纠错: {:?} 模块: {} 边框: {}",
                options.error_level,
                options.module_size,
                options.border
            );
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_snapshot,
            commands::generate_qr,
            commands::save_qr,
            commands::open_qr_image,
            commands::clear_all,
            commands::copy_decoded,
            commands::suggest_save_name,
            settings::get_encode_settings,
        ])
        .run(tauri::generate_context!())
        .expect("运行 Tauri 应用时出错");
}
