//! 日志初始化
//!
//! 终端被 TUI 占用，所以日志写到 ~/.local/share/todo-screen/todo-screen.log，
//! 每次启动时清空。
//!
//! 级别优先级: RUST_LOG > --debug / TODO_SCREEN_DEBUG=1 > 配置文件 log_level

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

pub const DEBUG_ENV: &str = "TODO_SCREEN_DEBUG";

pub fn log_dir() -> Result<PathBuf> {
    Ok(dirs::data_dir().ok_or(Error::NoDataDir)?.join("todo-screen"))
}

/// 环境变量值是否表示开启
fn env_flag(value: Option<String>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// 计算最终的过滤指令
pub fn resolve_directive(
    rust_log: Option<String>,
    debug: bool,
    env_debug: Option<String>,
    config_level: &str,
) -> String {
    if let Some(directive) = rust_log.filter(|v| !v.trim().is_empty()) {
        return directive;
    }
    if debug || env_flag(env_debug) {
        return "debug".to_string();
    }
    config_level.to_string()
}

/// 初始化全局 subscriber，返回日志文件路径
pub fn init(debug: bool, config_level: &str) -> Result<PathBuf> {
    let directive = resolve_directive(
        std::env::var("RUST_LOG").ok(),
        debug,
        std::env::var(DEBUG_ENV).ok(),
        config_level,
    );
    let filter =
        EnvFilter::try_new(&directive).map_err(|e| Error::InvalidLogFilter(e.to_string()))?;

    let dir = log_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join("todo-screen.log");
    let file = File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::LoggerInit(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        let directive = resolve_directive(
            Some("todo_screen=trace".to_string()),
            true,
            Some("1".to_string()),
            "warn",
        );
        assert_eq!(directive, "todo_screen=trace");
    }

    #[test]
    fn test_blank_rust_log_is_ignored() {
        assert_eq!(resolve_directive(Some("  ".to_string()), false, None, "warn"), "warn");
    }

    #[test]
    fn test_debug_flag_and_env() {
        assert_eq!(resolve_directive(None, true, None, "info"), "debug");
        assert_eq!(resolve_directive(None, false, Some("TRUE".to_string()), "info"), "debug");
        assert_eq!(resolve_directive(None, false, Some("0".to_string()), "info"), "info");
    }

    #[test]
    fn test_config_level_is_a_valid_filter() {
        let directive = resolve_directive(None, false, None, "info");
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
