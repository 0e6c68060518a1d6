use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    StartDriving,
    EndDriving,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::StartDriving => "start",
            EventKind::EndDriving => "end",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, EventKind::StartDriving)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, EventKind::EndDriving)
    }
}
