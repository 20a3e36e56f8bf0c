use crate::models::status::Status;
use crate::models::work_type::WorkType;
use crate::utils::date;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the Task table.
///
/// ID is unique and assigned as `count + 1` at registration time (tasks are
/// never deleted, so the sequence stays strictly increasing). Tag No is a
/// by-value reference into the Equipment table with no enforced constraint.
/// Created/Due dates are stored as `YYYY-MM-DD` strings; the typed accessors
/// return None for unparseable values so date filters can skip those rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Tag No")]
    pub tag_no: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Work Type")]
    pub work_type: String,
    #[serde(rename = "MER No")]
    pub mer_no: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Created Date")]
    pub created_date: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
}

/// Days between registration and the due date.
pub const DUE_OFFSET_DAYS: i64 = 7;

impl Task {
    pub const COLUMNS: [&'static str; 9] = [
        "ID",
        "Tag No",
        "Title",
        "Work Type",
        "MER No",
        "Description",
        "Status",
        "Created Date",
        "Due Date",
    ];

    /// Constructor for tasks registered through the CLI.
    /// - Title is derived as "{Work Type} - {MER No}"
    /// - Status starts at Before Start
    /// - Due Date = Created Date + 7 days, both immutable afterwards
    pub fn new(
        id: u32,
        tag_no: &str,
        work_type: WorkType,
        mer_no: &str,
        description: &str,
        created: NaiveDate,
    ) -> Self {
        let due = created + Duration::days(DUE_OFFSET_DAYS);
        Self {
            id,
            tag_no: tag_no.to_string(),
            title: format!("{} - {}", work_type.wt_as_str(), mer_no),
            work_type: work_type.wt_as_str().to_string(),
            mer_no: mer_no.to_string(),
            description: description.to_string(),
            status: Status::BeforeStart,
            created_date: date::format_date(created),
            due_date: date::format_date(due),
        }
    }

    pub fn created(&self) -> Option<NaiveDate> {
        date::parse_date(&self.created_date)
    }

    pub fn due(&self) -> Option<NaiveDate> {
        date::parse_date(&self.due_date)
    }

    /// String representation of every field, in column order.
    /// This is what the any-field search matches against.
    pub fn row(&self) -> [String; 9] {
        [
            self.id.to_string(),
            self.tag_no.clone(),
            self.title.clone(),
            self.work_type.clone(),
            self.mer_no.clone(),
            self.description.clone(),
            self.status.st_as_str().to_string(),
            self.created_date.clone(),
            self.due_date.clone(),
        ]
    }
}
