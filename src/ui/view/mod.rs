//! 视图层模块
//!
//! 包含主渲染入口和各区域的渲染函数

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, Paragraph, Wrap},
};

use super::state::{App, Focus, HitAreas};
use crate::models::TodoItem;
use components::{render_button, render_input_widget};
use layouts::screen_layout;

/// 渲染 UI
///
/// 同时记录可点击区域，供鼠标事件映射使用。
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = screen_layout(frame.area());

    render_header(frame, app, layout.header);
    render_input_widget(
        frame,
        layout.input,
        "New to-do",
        &app.draft,
        &app.options.placeholder,
        app.focus == Focus::Input,
        Color::Yellow,
    );
    render_button(frame, layout.add_button, "Add", Color::Green);
    let list_inner = render_list(frame, app, layout.list);
    render_footer(frame, app, layout.footer);
    render_help(frame, app, layout.help);

    app.hit_areas = HitAreas {
        input: layout.input,
        add_button: layout.add_button,
        list: list_inner,
    };
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.options.title.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 已完成的行使用单独的样式
fn item_style(item: &TodoItem) -> Style {
    if item.is_completed() {
        Style::default()
            .fg(Color::DarkGray)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    }
}

/// 渲染列表，返回边框内部区域
fn render_list(frame: &mut Frame, app: &mut App, area: Rect) -> Rect {
    let block = Block::default().title("To-dos").borders(Borders::ALL);
    let inner = block.inner(area);

    if app.todos.is_empty() {
        app.list_state.select(None);
        let empty = Paragraph::new(app.options.empty_text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return inner;
    }

    // 失去焦点时也保持选中，列表才能跟随新添加的事项滚动
    app.clamp_selection();
    app.list_state.select(Some(app.selected_index));

    let items: Vec<ListItem> = app
        .todos
        .items()
        .iter()
        .map(|item| {
            let mark = if item.is_completed() { "[x] " } else { "[ ] " };
            ListItem::new(Line::from(vec![
                Span::raw(mark),
                Span::styled(item.text(), item_style(item)),
            ]))
        })
        .collect();

    let list_focused = app.focus == Focus::List;
    let highlight = if list_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(if list_focused { "> " } else { "  " })
        .highlight_spacing(HighlightSpacing::Always);

    frame.render_stateful_widget(list, area, &mut app.list_state);
    inner
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.todos.summary();
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!("Total: {}", summary.total)),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(format!("Completed: {}", summary.completed)).alignment(Alignment::Right),
        halves[1],
    );
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Input => "[Enter] add  [Tab] list  [Esc] quit",
        Focus::List => "[Space] toggle  [j/k] move  [Tab] input  [q] quit",
    };

    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}  |  {}", help_text, message),
        _ => help_text.to_string(),
    };

    let help = Paragraph::new(text).style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}
