//! Estimator screen state
//!
//! Holds the project draft, the reference data needed to price it and the
//! most recent estimate. Editing any input that feeds the formula discards
//! the estimate, so a saved project always matches what was shown.
//!
//! ```text
//! Loading --ReferencesLoaded/ReferencesFailed--> Ready --Submit--> Submitting
//!                                                  ^                    |
//!                                                  +--SubmitSucceeded/--+
//!                                                      SubmitFailed
//! ```

use pressrun_catalog::{find_material, CoverType, Material, PaperType};
use pressrun_common::{Notice, StateError};
use pressrun_pricing::{estimate, format_money, CostCoefficients, CostEstimate, EstimateError, PrintRun};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{is_image_type, non_blank, NewProject};

pub const LOAD_FAILED: Notice = Notice::error("Failed to load initial data");
pub const MISSING_DATA: Notice = Notice::error("Missing data to run the calculation");
pub const CALCULATED: Notice = Notice::success("Calculation completed");
pub const INVALID_IMAGE: Notice = Notice::error("Please select a valid image file");
pub const REQUIRED_FIELDS: Notice = Notice::error("Please complete all required fields");
pub const SAVE_FAILED: Notice = Notice::error("Failed to save the project");
pub const SAVED: Notice = Notice::success("Project saved successfully");

/// Materials and coefficients the estimate is computed from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct References {
    pub paper_types: Vec<PaperType>,
    pub cover_types: Vec<CoverType>,
    pub parameters: Option<CostCoefficients>,
}

/// Cover image chosen on the client; bytes stay with the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverFile {
    pub name: String,
    pub content_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub page_count: i32,
    pub print_run: i32,
    pub paper_type_id: Option<Uuid>,
    pub cover_type_id: Option<Uuid>,
    pub cover: Option<CoverFile>,
}

impl ProjectDraft {
    fn with(mut self, field: DraftField) -> Self {
        match field {
            DraftField::Title(v) => self.title = v,
            DraftField::Author(v) => self.author = v,
            DraftField::Isbn(v) => self.isbn = v,
            DraftField::PageCount(v) => self.page_count = v,
            DraftField::PrintRun(v) => self.print_run = v,
            DraftField::PaperType(v) => self.paper_type_id = v,
            DraftField::CoverType(v) => self.cover_type_id = v,
        }
        self
    }

    fn print_run(&self) -> PrintRun {
        PrintRun::new(self.page_count, self.print_run)
    }

    /// Fields sent to the backend on save
    pub fn to_new_project(&self) -> NewProject {
        NewProject {
            title: self.title.trim().to_string(),
            author: non_blank(Some(self.author.clone())),
            isbn: non_blank(Some(self.isbn.clone())),
            page_count: self.page_count,
            print_run: self.print_run,
            paper_type_id: self.paper_type_id,
            cover_type_id: self.cover_type_id,
        }
    }
}

/// One edited form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Author(String),
    Isbn(String),
    PageCount(i32),
    PrintRun(i32),
    PaperType(Option<Uuid>),
    CoverType(Option<Uuid>),
}

impl DraftField {
    fn affects_price(&self) -> bool {
        matches!(
            self,
            Self::PageCount(_) | Self::PrintRun(_) | Self::PaperType(_) | Self::CoverType(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorPhase {
    Loading,
    Ready,
    Submitting,
}

impl std::fmt::Display for EstimatorPhase {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Submitting => write!(f, "submitting"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorEvent {
    ReferencesLoaded(References),
    ReferencesFailed,
    Edit(DraftField),
    SelectCover(CoverFile),
    ClearCover,
    Calculate,
    Submit,
    SubmitSucceeded,
    SubmitFailed,
}

impl std::fmt::Display for EstimatorEvent {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReferencesLoaded(_) => write!(f, "references_loaded"),
            Self::ReferencesFailed => write!(f, "references_failed"),
            Self::Edit(_) => write!(f, "edit"),
            Self::SelectCover(_) => write!(f, "select_cover"),
            Self::ClearCover => write!(f, "clear_cover"),
            Self::Calculate => write!(f, "calculate"),
            Self::Submit => write!(f, "submit"),
            Self::SubmitSucceeded => write!(f, "submit_succeeded"),
            Self::SubmitFailed => write!(f, "submit_failed"),
        }
    }
}

/// What a save sends to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub project: NewProject,
    pub cover: Option<CoverFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorScreen {
    pub phase: EstimatorPhase,
    pub references: References,
    pub draft: ProjectDraft,
    pub estimate: Option<CostEstimate>,
    pub notice: Option<Notice>,
}

impl Default for EstimatorScreen {
    fn default() -> Self {
        Self {
            phase: EstimatorPhase::Loading,
            references: References::default(),
            draft: ProjectDraft::default(),
            estimate: None,
            notice: None,
        }
    }
}

impl EstimatorScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, producing the next screen record
    pub fn apply(self, event: EstimatorEvent) -> Result<Self, StateError> {
        use EstimatorEvent as E;
        use EstimatorPhase as P;

        match (self.phase, event) {
            (P::Loading, E::ReferencesLoaded(references)) => Ok(Self {
                phase: P::Ready,
                references,
                ..self
            }),
            (P::Loading, E::ReferencesFailed) => Ok(Self {
                phase: P::Ready,
                notice: Some(LOAD_FAILED),
                ..self
            }),
            (P::Submitting, E::Edit(_) | E::SelectCover(_) | E::ClearCover) => Err(
                StateError::GuardFailed("A save is already in progress".to_string()),
            ),
            (_, E::Edit(field)) => {
                let estimate = if field.affects_price() {
                    None
                } else {
                    self.estimate
                };
                Ok(Self {
                    draft: self.draft.with(field),
                    estimate,
                    ..self
                })
            }
            (_, E::SelectCover(file)) => {
                if !is_image_type(&file.content_type) {
                    return Ok(Self {
                        notice: Some(INVALID_IMAGE),
                        ..self
                    });
                }
                Ok(Self {
                    draft: ProjectDraft {
                        cover: Some(file),
                        ..self.draft
                    },
                    ..self
                })
            }
            (_, E::ClearCover) => Ok(Self {
                draft: ProjectDraft {
                    cover: None,
                    ..self.draft
                },
                ..self
            }),
            (P::Ready, E::Calculate) => self.calculate(),
            (P::Ready, E::Submit) => self.submit(),
            (P::Submitting, E::SubmitSucceeded) => Ok(Self {
                phase: P::Ready,
                draft: ProjectDraft::default(),
                estimate: None,
                notice: Some(SAVED),
                ..self
            }),
            (P::Submitting, E::SubmitFailed) => Ok(Self {
                phase: P::Ready,
                notice: Some(SAVE_FAILED),
                ..self
            }),
            (P::Submitting, E::Submit | E::Calculate) => Err(StateError::GuardFailed(
                "A save is already in progress".to_string(),
            )),
            (phase, event) => Err(StateError::invalid(phase, event)),
        }
    }

    fn calculate(self) -> Result<Self, StateError> {
        let run = self.draft.print_run();
        run.check()
            .map_err(|e| StateError::GuardFailed(e.to_string()))?;

        let Some(coefficients) = self.references.parameters else {
            return Ok(Self {
                estimate: None,
                notice: Some(MISSING_DATA),
                ..self
            });
        };

        let paper = self
            .draft
            .paper_type_id
            .and_then(|id| find_material(&self.references.paper_types, id));
        let cover = self
            .draft
            .cover_type_id
            .and_then(|id| find_material(&self.references.cover_types, id));

        match estimate(run, paper, cover, &coefficients) {
            Ok(result) => Ok(Self {
                estimate: Some(result),
                notice: Some(CALCULATED),
                ..self
            }),
            Err(EstimateError::MissingPaperType | EstimateError::MissingCoverType) => Ok(Self {
                estimate: None,
                notice: Some(MISSING_DATA),
                ..self
            }),
            Err(e) => Err(StateError::GuardFailed(e.to_string())),
        }
    }

    fn submit(self) -> Result<Self, StateError> {
        if self.estimate.is_none() {
            return Err(StateError::GuardFailed(
                "Calculate the estimate before saving".to_string(),
            ));
        }
        if self.draft.to_new_project().validate().is_err() {
            return Ok(Self {
                notice: Some(REQUIRED_FIELDS),
                ..self
            });
        }
        Ok(Self {
            phase: EstimatorPhase::Submitting,
            notice: None,
            ..self
        })
    }

    /// The save in flight, if any
    pub fn submission(&self) -> Option<Submission> {
        (self.phase == EstimatorPhase::Submitting).then(|| Submission {
            project: self.draft.to_new_project(),
            cover: self.draft.cover.clone(),
        })
    }

    pub fn render(&self) -> EstimatorView {
        let paper_options = self
            .references
            .paper_types
            .iter()
            .map(|p| OptionView::new(p.id(), p.label(), self.draft.paper_type_id))
            .collect();
        let cover_options = self
            .references
            .cover_types
            .iter()
            .map(|c| OptionView::new(c.id(), c.label(), self.draft.cover_type_id))
            .collect();

        let submitting = self.phase == EstimatorPhase::Submitting;

        EstimatorView {
            loading: self.phase == EstimatorPhase::Loading,
            paper_options,
            cover_options,
            selected_cover: self
                .draft
                .cover
                .as_ref()
                .map(|f| format!("Selected file: {}", f.name)),
            calculate_enabled: self.draft.print_run().check().is_ok() && !submitting,
            results: self.estimate.as_ref().map(ResultsView::from),
            save_enabled: self.estimate.is_some() && !submitting,
            save_label: if submitting { "Saving..." } else { "Save project" },
            notice: self.notice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: Uuid,
    pub label: String,
    pub selected: bool,
}

impl OptionView {
    fn new(id: Uuid, label: String, selected: Option<Uuid>) -> Self {
        Self {
            id,
            label,
            selected: selected == Some(id),
        }
    }
}

/// Figures shown once an estimate exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub total_cost: String,
    pub cost_per_copy: Option<String>,
    pub suggested_price: String,
    pub price_per_copy: Option<String>,
}

impl From<&CostEstimate> for ResultsView {
    fn from(e: &CostEstimate) -> Self {
        Self {
            total_cost: format_money(e.total_cost),
            cost_per_copy: e.cost_per_copy().map(format_money),
            suggested_price: format_money(e.suggested_price),
            price_per_copy: e.price_per_copy().map(format_money),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorView {
    pub loading: bool,
    pub paper_options: Vec<OptionView>,
    pub cover_options: Vec<OptionView>,
    pub selected_cover: Option<String>,
    pub calculate_enabled: bool,
    pub results: Option<ResultsView>,
    pub save_enabled: bool,
    pub save_label: &'static str,
    pub notice: Option<Notice>,
}
