//! Domain entities for the Projects domain
//!
//! A project is a saved book: descriptive fields, the chosen materials and
//! the cost totals computed when it was saved. Totals are never recomputed
//! after the fact, so later parameter changes leave saved projects untouched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressrun_common::{Error, Result};
use pressrun_pricing::CostEstimate;

/// Maximum title length
pub const MAX_TITLE_LENGTH: usize = 300;

/// Saved book project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub page_count: i32,
    pub print_run: i32,
    pub paper_type_id: Option<Uuid>,
    pub cover_type_id: Option<Uuid>,
    pub cover_image_url: Option<String>,
    pub estimated_cost: Decimal,
    pub suggested_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a project from a validated draft and the estimate computed for it
    pub fn new(
        draft: NewProject,
        estimate: &CostEstimate,
        cover_image_url: Option<String>,
    ) -> Result<Self> {
        draft.validate()?;

        Ok(Project {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            author: draft.author,
            isbn: draft.isbn,
            page_count: draft.page_count,
            print_run: draft.print_run,
            paper_type_id: draft.paper_type_id,
            cover_type_id: draft.cover_type_id,
            cover_image_url,
            estimated_cost: estimate.total_cost,
            suggested_price: estimate.suggested_price,
            created_at: Utc::now(),
        })
    }
}

/// Fields submitted when saving a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub page_count: i32,
    pub print_run: i32,
    pub paper_type_id: Option<Uuid>,
    pub cover_type_id: Option<Uuid>,
}

impl NewProject {
    /// Title, page count and print run are required
    pub fn validate(&self) -> Result<()> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(Error::Validation(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        if self.page_count <= 0 {
            return Err(Error::Validation(
                "Page count must be greater than zero".to_string(),
            ));
        }
        if self.print_run <= 0 {
            return Err(Error::Validation(
                "Print run must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Blank optional text is stored as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Project joined with the names of its materials.
///
/// Names are absent when the referenced material no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub paper_type_name: Option<String>,
    pub cover_type_name: Option<String>,
}

/// Cover image received with a project submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CoverUpload {
    /// Maximum cover size (10MB)
    pub const MAX_SIZE_BYTES: usize = 10 * 1024 * 1024;

    pub fn validate(&self) -> Result<()> {
        if !is_image_type(&self.content_type) {
            return Err(Error::Validation(format!(
                "Cover must be an image, got '{}'",
                self.content_type
            )));
        }
        if self.bytes.is_empty() {
            return Err(Error::Validation("Cover file is empty".to_string()));
        }
        if self.bytes.len() > Self::MAX_SIZE_BYTES {
            return Err(Error::Validation(format!(
                "Cover exceeds maximum of {} bytes",
                Self::MAX_SIZE_BYTES
            )));
        }
        Ok(())
    }
}

/// Any `image/*` media type
pub fn is_image_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}
