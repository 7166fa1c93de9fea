//! 通用 UI 组件
//!
//! 输入框、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// 计算单行输入框的水平滚动量和光标列
///
/// `text_width` 是文本的显示宽度；返回 (滚动列数, 光标相对内部区域的列)。
/// 文本超出时向左滚动，保证末尾和光标始终可见。
pub fn input_scroll(text_width: u16, inner_width: u16) -> (u16, u16) {
    if inner_width == 0 {
        return (0, 0);
    }
    let offset = text_width.saturating_sub(inner_width - 1);
    (offset, text_width - offset)
}

/// [组件] 带有标题和占位文本的单行输入框
///
/// 获得焦点时把光标放在文本末尾；文本过长时水平滚动。
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    active_color: Color,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let text_width = u16::try_from(Line::from(value).width()).unwrap_or(u16::MAX);
    let (offset, cursor) = input_scroll(text_width, inner.width);

    let paragraph = if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value)
            .style(Style::default().fg(Color::White))
            .scroll((0, offset))
    };
    frame.render_widget(paragraph.block(block), area);

    if is_focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + cursor, inner.y));
    }
}

/// [组件] 带边框的按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_scroll_short_text() {
        assert_eq!(input_scroll(0, 29), (0, 0));
        assert_eq!(input_scroll(10, 29), (0, 10));
        // 正好留出光标所在的最后一列
        assert_eq!(input_scroll(28, 29), (0, 28));
    }

    #[test]
    fn test_input_scroll_long_text() {
        assert_eq!(input_scroll(29, 29), (1, 28));
        assert_eq!(input_scroll(42, 29), (14, 28));
        assert_eq!(input_scroll(5, 0), (0, 0));
    }
}
