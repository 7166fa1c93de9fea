//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑以及草稿、提交、切换完成状态等操作

use tracing::{debug, info};

use super::actions::Action;
use super::state::{App, Focus};
use crate::models::TodoId;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::FocusInput => self.focus_input(),
            Action::FocusList => self.focus_list(),

            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::ToggleSelected => self.toggle_selected(),
            Action::Tap(id) => self.tap(id),

            Action::Submit => {
                self.submit_draft();
            }
            Action::Input(c) => {
                let mut text = self.draft.clone();
                text.push(c);
                self.update_draft(text);
            }
            Action::DeleteChar => {
                let mut text = self.draft.clone();
                text.pop();
                self.update_draft(text);
            }
        }
        false
    }

    // ============ 草稿相关 ============

    /// 替换草稿内容，不做任何校验
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// 提交草稿
    ///
    /// 去掉空白后为空则静默忽略，草稿保持原样。
    pub fn submit_draft(&mut self) -> Option<TodoId> {
        if self.draft.trim().is_empty() {
            debug!("ignoring blank draft");
            return None;
        }

        let text = if self.options.trim_text {
            self.draft.trim().to_string()
        } else {
            std::mem::take(&mut self.draft)
        };
        let id = self.todos.push(text);
        self.draft.clear();

        // 选中新添加的一行，让列表滚动到底部
        self.selected_index = self.todos.len() - 1;
        self.message = Some("Item added".to_string());
        info!(%id, total = self.todos.len(), "todo added");
        Some(id)
    }

    // ============ 完成状态相关 ============

    /// 切换指定事项的完成状态，ID 不存在时什么也不做
    pub fn toggle_completion(&mut self, id: TodoId) -> Option<bool> {
        let completed = self.todos.toggle(id)?;
        self.message = Some(if completed {
            "Marked as done".to_string()
        } else {
            "Marked as not done".to_string()
        });
        info!(%id, completed, "todo toggled");
        Some(completed)
    }

    /// 切换当前选中行
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id()) {
            self.toggle_completion(id);
        }
    }

    /// 点击某一行：选中并切换
    pub fn tap(&mut self, id: TodoId) {
        if let Some(index) = self.todos.position(id) {
            self.focus = Focus::List;
            self.selected_index = index;
            self.toggle_completion(id);
        }
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.todos.len() {
            self.selected_index += 1;
        }
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// 列表为空时焦点留在输入框
    pub fn focus_list(&mut self) {
        if !self.todos.is_empty() {
            self.focus = Focus::List;
            self.clamp_selection();
        }
    }
}
