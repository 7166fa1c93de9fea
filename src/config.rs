//! 配置加载 (~/.config/todo-screen/config.toml)
//!
//! 文件不存在时使用默认值；所有字段都是可选的。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::ui::ScreenOptions;

pub const DEFAULT_TITLE: &str = "My To-Do List";
pub const DEFAULT_PLACEHOLDER: &str = "Enter a new to-do";
pub const DEFAULT_EMPTY_TEXT: &str = "No to-dos yet. Add one above!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub placeholder: String,
    pub empty_text: String,
    /// 提交时是否去掉首尾空白后再保存
    pub trim_text: bool,
    /// tracing 过滤指令，例如 "info" 或 "todo_screen=debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            trim_text: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or(Error::NoConfigDir)?
            .join("todo-screen"))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// 加载配置
    ///
    /// 显式指定的路径必须存在；默认路径缺失时回退到默认配置。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        debug!(
            path = %path.display(),
            trim_text = config.trim_text,
            log_level = %config.log_level,
            "config loaded"
        );
        Ok(config)
    }

    /// 屏幕需要的那部分配置
    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions {
            title: self.title.clone(),
            placeholder: self.placeholder.clone(),
            empty_text: self.empty_text.clone(),
            trim_text: self.trim_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title, "My To-Do List");
        assert_eq!(config.placeholder, "Enter a new to-do");
        assert_eq!(config.empty_text, "No to-dos yet. Add one above!");
        assert!(!config.trim_text);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = \"Groceries\"\ntrim_text = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.title, "Groceries");
        assert!(config.trim_text);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = [unclosed").unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_screen_options() {
        let config = Config {
            title: "Work".to_string(),
            trim_text: true,
            ..Config::default()
        };
        let options = config.screen_options();
        assert_eq!(options.title, "Work");
        assert_eq!(options.empty_text, DEFAULT_EMPTY_TEXT);
        assert!(options.trim_text);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            title: "Groceries".to_string(),
            trim_text: true,
            log_level: "todo_screen=debug".to_string(),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);

        // 默认配置写出后可以原样读回
        let defaults = toml::to_string(&Config::default()).unwrap();
        assert_eq!(toml::from_str::<Config>(&defaults).unwrap(), Config::default());
    }
}
