//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::TodoId;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 焦点切换
    FocusInput,
    FocusList,

    // 列表导航
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleSelected, // Enter / Space
    Tap(TodoId),    // 鼠标点击某一行

    // 输入框
    Submit,      // Enter / [ Add ]
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
