//! Projects list screen state
//!
//! Deleting is a two step flow: a request opens a confirmation, a confirm
//! starts the backend call. The item leaves the list only once the backend
//! reports success.

use pressrun_common::{Notice, StateError};
use pressrun_pricing::{format_money, per_copy};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::ProjectSummary;

pub const LOAD_FAILED: Notice = Notice::error("Failed to load the projects");
pub const DELETED: Notice = Notice::success("Project deleted");
pub const DELETE_FAILED: Notice = Notice::error("Failed to delete the project");

pub const CONFIRM_PROMPT: &str = "Are you sure you want to delete this project?";
pub const EMPTY_MESSAGE: &str = "No saved projects yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserPhase {
    Loading,
    Loaded,
}

impl std::fmt::Display for BrowserPhase {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Loaded => write!(f, "loaded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    Loaded(Vec<ProjectSummary>),
    LoadFailed,
    RequestDelete(Uuid),
    CancelDelete,
    ConfirmDelete,
    DeleteSucceeded(Uuid),
    DeleteFailed,
}

impl std::fmt::Display for BrowserEvent {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded(_) => write!(f, "loaded"),
            Self::LoadFailed => write!(f, "load_failed"),
            Self::RequestDelete(_) => write!(f, "request_delete"),
            Self::CancelDelete => write!(f, "cancel_delete"),
            Self::ConfirmDelete => write!(f, "confirm_delete"),
            Self::DeleteSucceeded(_) => write!(f, "delete_succeeded"),
            Self::DeleteFailed => write!(f, "delete_failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsScreen {
    pub phase: BrowserPhase,
    pub projects: Vec<ProjectSummary>,
    /// Project awaiting confirmation
    pub confirming: Option<Uuid>,
    /// Project whose delete call is in flight
    pub deleting: Option<Uuid>,
    pub notice: Option<Notice>,
}

impl Default for ProjectsScreen {
    fn default() -> Self {
        Self {
            phase: BrowserPhase::Loading,
            projects: Vec::new(),
            confirming: None,
            deleting: None,
            notice: None,
        }
    }
}

impl ProjectsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: BrowserEvent) -> Result<Self, StateError> {
        use BrowserEvent as E;
        use BrowserPhase as P;

        match (self.phase, event) {
            (P::Loading, E::Loaded(projects)) => Ok(Self {
                phase: P::Loaded,
                projects,
                ..self
            }),
            (P::Loading, E::LoadFailed) => Ok(Self {
                phase: P::Loaded,
                projects: Vec::new(),
                notice: Some(LOAD_FAILED),
                ..self
            }),
            (P::Loaded, E::RequestDelete(id)) => {
                if self.deleting.is_some() {
                    return Err(StateError::GuardFailed(
                        "A delete is already in progress".to_string(),
                    ));
                }
                if !self.projects.iter().any(|p| p.project.id == id) {
                    return Err(StateError::GuardFailed(format!(
                        "Project {} is not listed",
                        id
                    )));
                }
                Ok(Self {
                    confirming: Some(id),
                    ..self
                })
            }
            (P::Loaded, E::CancelDelete) if self.confirming.is_some() => Ok(Self {
                confirming: None,
                ..self
            }),
            (P::Loaded, E::ConfirmDelete) => match self.confirming {
                Some(id) => Ok(Self {
                    confirming: None,
                    deleting: Some(id),
                    notice: None,
                    ..self
                }),
                None => Err(StateError::GuardFailed(
                    "No delete awaiting confirmation".to_string(),
                )),
            },
            (P::Loaded, E::DeleteSucceeded(id)) if self.deleting == Some(id) => {
                let projects = self
                    .projects
                    .into_iter()
                    .filter(|p| p.project.id != id)
                    .collect();
                Ok(Self {
                    projects,
                    deleting: None,
                    notice: Some(DELETED),
                    ..self
                })
            }
            (P::Loaded, E::DeleteFailed) if self.deleting.is_some() => Ok(Self {
                deleting: None,
                notice: Some(DELETE_FAILED),
                ..self
            }),
            (phase, event) => Err(StateError::invalid(phase, event)),
        }
    }

    /// The delete call in flight, if any
    pub fn pending_delete(&self) -> Option<Uuid> {
        self.deleting
    }

    pub fn render(&self) -> ProjectsView {
        let status = match self.phase {
            BrowserPhase::Loading => ListStatus::Loading,
            BrowserPhase::Loaded if self.projects.is_empty() => ListStatus::Empty,
            BrowserPhase::Loaded => ListStatus::List,
        };

        ProjectsView {
            status,
            empty_message: (status == ListStatus::Empty).then_some(EMPTY_MESSAGE),
            cards: self
                .projects
                .iter()
                .map(|p| ProjectCard::new(p, self.deleting.is_none()))
                .collect(),
            confirm_prompt: self.confirming.map(|_| CONFIRM_PROMPT),
            notice: self.notice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    Loading,
    Empty,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: Uuid,
    pub title: String,
    pub byline: Option<String>,
    pub isbn: Option<String>,
    pub cover_image_url: Option<String>,
    pub page_count: i32,
    pub print_run: i32,
    pub paper_type: Option<String>,
    pub cover_type: Option<String>,
    pub estimated_cost: String,
    pub suggested_price: String,
    pub price_per_copy: Option<String>,
    pub created_on: String,
    pub delete_enabled: bool,
}

impl ProjectCard {
    fn new(summary: &ProjectSummary, delete_enabled: bool) -> Self {
        let p = &summary.project;
        Self {
            id: p.id,
            title: p.title.clone(),
            byline: p.author.as_ref().map(|a| format!("by {}", a)),
            isbn: p.isbn.clone(),
            cover_image_url: p.cover_image_url.clone(),
            page_count: p.page_count,
            print_run: p.print_run,
            paper_type: summary.paper_type_name.clone(),
            cover_type: summary.cover_type_name.clone(),
            estimated_cost: format_money(p.estimated_cost),
            suggested_price: format_money(p.suggested_price),
            price_per_copy: per_copy(p.suggested_price, p.print_run).map(format_money),
            created_on: p.created_at.format("%Y-%m-%d").to_string(),
            delete_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsView {
    pub status: ListStatus,
    pub empty_message: Option<&'static str>,
    pub cards: Vec<ProjectCard>,
    pub confirm_prompt: Option<&'static str>,
    pub notice: Option<Notice>,
}
