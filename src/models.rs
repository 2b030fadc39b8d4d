use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One productivity entry as it travels over the wire.
///
/// Every field is a string, including the sequence number, because that is
/// what the backend stores and what the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Record {
    #[serde(rename = "No")]
    pub no: String,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Frequency")]
    pub frequency: String,
    #[serde(rename = "Output")]
    pub output: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SavePayload {
    pub department: String,
    pub entries: Vec<Record>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Summary {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}

/// Values supplied by the template layer before the page is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageContext {
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub entries: Vec<Record>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
    pub received_at: DateTime<Local>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RowView {
    pub id: u64,
    pub record: Record,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableResponse {
    pub department: String,
    pub entries: Vec<RowView>,
}
