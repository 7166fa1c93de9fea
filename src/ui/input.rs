//! 事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::trace;

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_key_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusList),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleSelected),
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') => Some(Action::FocusInput),
            _ => None,
        },
    }
}

/// 根据上一帧的布局把鼠标事件映射为 Action
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let areas = &app.hit_areas;
            if areas.add_button.contains(pos) {
                Some(Action::Submit)
            } else if areas.input.contains(pos) {
                Some(Action::FocusInput)
            } else if areas.list.contains(pos) {
                let row = app.list_state.offset() + usize::from(pos.y - areas.list.y);
                app.todos.items().get(row).map(|item| Action::Tap(item.id()))
            } else {
                None
            }
        }
        MouseEventKind::ScrollUp => Some(Action::MoveSelectionUp),
        MouseEventKind::ScrollDown => Some(Action::MoveSelectionDown),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: &Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_key_action(app.focus, *key),
        Event::Mouse(mouse) => get_mouse_action(app, *mouse),
        _ => None,
    };

    match action {
        Some(action) => {
            trace!(?action, "dispatch");
            app.dispatch(action)
        }
        None => false,
    }
}
