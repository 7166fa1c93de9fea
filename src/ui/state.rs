//! App 状态定义 (Model)
//!
//! 待办屏幕的全部状态：草稿、列表，以及焦点、选中行等界面状态

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::config::{DEFAULT_EMPTY_TEXT, DEFAULT_PLACEHOLDER, DEFAULT_TITLE};
use crate::models::{TodoItem, TodoList};

/// 应用状态
pub struct App {
    pub draft: String,
    pub todos: TodoList,
    pub focus: Focus,
    pub selected_index: usize,
    pub list_state: ListState,
    pub message: Option<String>,
    pub hit_areas: HitAreas,
    pub options: ScreenOptions,
}

/// 键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// 上一帧各可点击区域的位置，用于把鼠标点击映射到 Action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitAreas {
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect, // 列表边框内部
}

/// 屏幕上可配置的文案与行为
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    pub title: String,
    pub placeholder: String,
    pub empty_text: String,
    pub trim_text: bool,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            trim_text: false,
        }
    }
}

impl App {
    /// 创建新的应用实例（空列表、空草稿）
    pub fn new(options: ScreenOptions) -> Self {
        Self {
            draft: String::new(),
            todos: TodoList::new(),
            focus: Focus::Input,
            selected_index: 0,
            list_state: ListState::default(),
            message: None,
            hit_areas: HitAreas::default(),
            options,
        }
    }

    /// 获取当前选中的事项
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.todos.items().get(self.selected_index)
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.todos.len() {
            self.selected_index = self.todos.len() - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ScreenOptions::default())
    }
}
