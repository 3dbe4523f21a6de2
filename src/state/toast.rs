use std::time::Duration;

/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Maximum number of toasts on screen; older ones are dropped first.
const TOAST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.items.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });
        if self.items.len() > TOAST_LIMIT {
            let overflow = self.items.len() - TOAST_LIMIT;
            self.items.drain(..overflow);
        }
        id
    }

    /// Removing an id that is already gone is fine.
    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push("a", "");
        let b = queue.push("b", "");
        assert!(a < b);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn drops_oldest_past_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(format!("toast {i}"), "");
        }
        let titles: Vec<_> = queue.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.push("Message sent!", "Thanks");
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.items().is_empty());
    }

    #[test]
    fn dismiss_leaves_other_toasts() {
        let mut queue = ToastQueue::default();
        let first = queue.push("first", "");
        queue.push("second", "");
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].title, "second");
    }
}
