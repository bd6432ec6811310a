use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Enter,
    Leave,
    Comment,
    Highfive,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Enter,
        EventType::Leave,
        EventType::Comment,
        EventType::Highfive,
    ];

    /// Parse user input (case-insensitive, surrounding blanks ignored).
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "enter" => Some(Self::Enter),
            "leave" => Some(Self::Leave),
            "comment" => Some(Self::Comment),
            "highfive" => Some(Self::Highfive),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::Enter => "enter",
            EventType::Leave => "leave",
            EventType::Comment => "comment",
            EventType::Highfive => "highfive",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.et_as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "enter" => Some(EventType::Enter),
            "leave" => Some(EventType::Leave),
            "comment" => Some(EventType::Comment),
            "highfive" => Some(EventType::Highfive),
            _ => None,
        }
    }
}
