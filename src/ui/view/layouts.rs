//! 屏幕布局计算

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// [ Add ] 按钮宽度（含边框）
pub const ADD_BUTTON_WIDTH: u16 = 9;

/// 一帧中各区域的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub footer: Rect,
    pub help: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 输入行
            Constraint::Min(3),    // 列表
            Constraint::Length(3), // 统计
            Constraint::Length(1), // 帮助
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON_WIDTH)])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        input: input_row[0],
        add_button: input_row[1],
        list: rows[2],
        footer: rows[3],
        help: rows[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_vertically() {
        let layout = screen_layout(Rect::new(0, 0, 40, 20));

        assert_eq!(layout.header, Rect::new(0, 0, 40, 3));
        assert_eq!(layout.input, Rect::new(0, 3, 31, 3));
        assert_eq!(layout.add_button, Rect::new(31, 3, ADD_BUTTON_WIDTH, 3));
        assert_eq!(layout.list, Rect::new(0, 6, 40, 10));
        assert_eq!(layout.footer, Rect::new(0, 16, 40, 3));
        assert_eq!(layout.help, Rect::new(0, 19, 40, 1));
    }
}
