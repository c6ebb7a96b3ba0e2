//! Transient status messages and the board that tracks which of them are
//! on screen. Timers live in the view; this module only records the
//! phase each notice is in.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_class(self) -> &'static str {
        match self {
            NoticeKind::Info => "notification-info",
            NoticeKind::Success => "notification-success",
            NoticeKind::Error => "notification-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeStyle {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub glow: String,
}

impl NoticeStyle {
    pub fn inline_css(&self) -> String {
        format!(
            "background:{};color:{};border:{};box-shadow:{};",
            self.background, self.foreground, self.border, self.glow
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub style: Option<NoticeStyle>,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
            style: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    pub fn styled(mut self, style: NoticeStyle) -> Self {
        self.style = Some(style);
        self
    }
}

pub type NoticeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeEntry {
    pub id: NoticeId,
    pub notice: Notice,
    pub phase: NoticePhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoticeBoard {
    next_id: NoticeId,
    entries: Vec<NoticeEntry>,
}

impl NoticeBoard {
    /// Appends a notice. Identical messages are kept side by side.
    pub fn push(&mut self, notice: Notice) -> NoticeId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(NoticeEntry {
            id,
            notice,
            phase: NoticePhase::Shown,
        });
        id
    }

    pub fn begin_exit(&mut self, id: NoticeId) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.phase = NoticePhase::Leaving;
        }
    }

    pub fn remove(&mut self, id: NoticeId) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[NoticeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
