use std::fmt;

/// 待办事项 ID
///
/// 由列表内部的单调计数器分配，同一会话内不会重复。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 待办事项
///
/// 创建后 id 和 text 不可变，只有 completed 可以翻转。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: TodoId,
    text: String,
    completed: bool,
}

impl TodoItem {
    fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// 底部统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
}

/// 有序的待办列表（只在尾部追加，不删除、不重排）
#[derive(Debug, Clone)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// 追加新事项，返回分配的 ID
    pub fn push(&mut self, text: String) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.push(TodoItem::new(id, text));
        id
    }

    /// 翻转完成状态，返回新状态；ID 不存在时返回 None
    pub fn toggle(&mut self, id: TodoId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    #[allow(dead_code)]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.len(),
            completed: self.completed_count(),
        }
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_at_tail() {
        let mut list = TodoList::new();
        let a = list.push("A".to_string());
        let b = list.push("B".to_string());

        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].id(), a);
        assert_eq!(list.items()[1].id(), b);
        assert_eq!(list.items()[1].text(), "B");
        assert!(!list.items()[1].is_completed());
    }

    #[test]
    fn test_ids_never_collide() {
        let mut list = TodoList::new();
        let ids: Vec<TodoId> = (0..1000).map(|i| list.push(format!("item {i}"))).collect();

        // 连续快速创建也严格递增
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut list = TodoList::new();
        let a = list.push("A".to_string());
        let b = list.push("B".to_string());
        let before_b = list.get(b).cloned();

        assert_eq!(list.toggle(a), Some(true));
        assert_eq!(list.toggle(a), Some(false));
        assert!(!list.get(a).unwrap().is_completed());
        assert_eq!(list.get(b).cloned(), before_b);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = TodoList::new();
        list.push("A".to_string());
        let before = list.items().to_vec();

        assert_eq!(list.toggle(TodoId(42)), None);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_summary_counts() {
        let mut list = TodoList::new();
        assert_eq!(list.summary(), Summary::default());

        let a = list.push("A".to_string());
        list.push("B".to_string());
        let c = list.push("C".to_string());
        list.toggle(a);
        list.toggle(c);

        assert_eq!(
            list.summary(),
            Summary {
                total: 3,
                completed: 2
            }
        );
        assert_eq!(list.position(c), Some(2));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TodoId(7).to_string(), "#7");
    }
}
