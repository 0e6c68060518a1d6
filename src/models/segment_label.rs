use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SegmentLabel {
    Waiting,
    Rest,
    Lunch,
}

impl SegmentLabel {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SegmentLabel::Waiting => "WAITING",
            SegmentLabel::Rest => "REST",
            SegmentLabel::Lunch => "LUNCH",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "WAITING" => Some(SegmentLabel::Waiting),
            "REST" => Some(SegmentLabel::Rest),
            "LUNCH" => Some(SegmentLabel::Lunch),
            _ => None,
        }
    }
}
