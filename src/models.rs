use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchUser {
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<SearchUser>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct MessagesPerDay {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AnalyticsPayload {
    pub total_users: u64,
    pub total_messages: u64,
    pub total_flagged: u64,
    pub messages_per_day: MessagesPerDay,
    pub flag_breakdown: BTreeMap<String, u64>,
}

/// Result of a POST whose body is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Accepted,
    Rejected(u16),
}

impl ActionStatus {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        if status.is_success() {
            Self::Accepted
        } else {
            Self::Rejected(status.as_u16())
        }
    }
}
