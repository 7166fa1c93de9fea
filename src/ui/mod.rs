//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，即整个待办屏幕的状态
//! - View (view/): 将 State 映射为 UI
//! - Intent (actions.rs): 键盘/鼠标事件转化为语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_event;
pub use state::{App, ScreenOptions};
pub use view::render;
