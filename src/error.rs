//! 进程边界上的错误类型
//!
//! 屏幕内部的操作都是全函数，不会失败；只有终端、配置和日志初始化会出错。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("No config directory")]
    NoConfigDir,

    #[error("No data directory")]
    NoDataDir,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("Logger init failed: {0}")]
    LoggerInit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
