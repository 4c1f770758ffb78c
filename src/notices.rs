//! Transient Notices
//!
//! Messages that show up and remove themselves after a fixed time. Each
//! notice has its own id so a timer only ever removes the notice it was
//! started for.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_timer_does_not_remove_newer_notice() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(NoticeKind::Error, "failed");
        let second = queue.push(NoticeKind::Success, "sent");

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.notices().len(), 1);
        assert_eq!(queue.notices()[0].id, second);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(NoticeKind::Success, "a");
        queue.dismiss(a);
        let b = queue.push(NoticeKind::Success, "b");
        assert_ne!(a, b);
    }
}
