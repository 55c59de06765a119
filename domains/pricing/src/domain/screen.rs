//! Parameters editor screen state
//!
//! The screen is an immutable record: every event produces a new record and
//! [`ParametersScreen::render`] turns it into a view model.
//!
//! ```text
//! Loading --Loaded--> Editing --Save--> Editing(saving) --SaveSucceeded/SaveFailed--> Editing
//!    \--LoadFailed--> Unavailable
//! ```

use pressrun_common::{Notice, StateError};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{CostCoefficients, CostParameters, ParameterField};

pub const LOAD_FAILED: Notice = Notice::error("Failed to load the cost parameters");
pub const SAVE_FAILED: Notice = Notice::error("Failed to save the cost parameters");
pub const SAVED: Notice = Notice::success("Cost parameters updated");

/// Static explanation shown under the editor
pub const CALCULATION_NOTES: [&str; 5] = [
    "The base cost includes paper and cover",
    "Depreciation is calculated on the base cost",
    "Energy is estimated at 0.5 kWh per copy",
    "Author royalties and administrative costs are calculated on the base cost",
    "The suggested sale price includes a 40% margin",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ParametersPhase {
    Loading,
    /// No parameters record could be loaded
    Unavailable,
    Editing {
        record: CostParameters,
        draft: CostCoefficients,
        saving: bool,
    },
}

impl std::fmt::Display for ParametersPhase {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::Editing { saving: true, .. } => write!(f, "saving"),
            Self::Editing { .. } => write!(f, "editing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParametersEvent {
    Loaded(CostParameters),
    LoadFailed,
    Edit(ParameterField, Decimal),
    Save,
    SaveSucceeded(CostParameters),
    SaveFailed,
}

impl std::fmt::Display for ParametersEvent {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded(_) => write!(f, "loaded"),
            Self::LoadFailed => write!(f, "load_failed"),
            Self::Edit(..) => write!(f, "edit"),
            Self::Save => write!(f, "save"),
            Self::SaveSucceeded(_) => write!(f, "save_succeeded"),
            Self::SaveFailed => write!(f, "save_failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParametersScreen {
    pub phase: ParametersPhase,
    pub notice: Option<Notice>,
}

impl Default for ParametersScreen {
    fn default() -> Self {
        Self {
            phase: ParametersPhase::Loading,
            notice: None,
        }
    }
}

impl ParametersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, producing the next screen record
    pub fn apply(self, event: ParametersEvent) -> Result<Self, StateError> {
        use ParametersEvent as E;
        use ParametersPhase as P;

        let next = match (self.phase, event) {
            (P::Loading, E::Loaded(record)) => Self {
                phase: P::Editing {
                    draft: record.coefficients(),
                    record,
                    saving: false,
                },
                notice: None,
            },
            (P::Loading, E::LoadFailed) => Self {
                phase: P::Unavailable,
                notice: Some(LOAD_FAILED),
            },
            (
                P::Editing {
                    record,
                    draft,
                    saving: false,
                },
                E::Edit(field, value),
            ) => Self {
                phase: P::Editing {
                    record,
                    draft: draft.with(field, value),
                    saving: false,
                },
                notice: self.notice,
            },
            (
                P::Editing {
                    record,
                    draft,
                    saving: false,
                },
                E::Save,
            ) => Self {
                phase: P::Editing {
                    record,
                    draft,
                    saving: true,
                },
                notice: None,
            },
            (P::Editing { saving: true, .. }, E::SaveSucceeded(record)) => Self {
                phase: P::Editing {
                    draft: record.coefficients(),
                    record,
                    saving: false,
                },
                notice: Some(SAVED),
            },
            (
                P::Editing {
                    record,
                    draft,
                    saving: true,
                },
                E::SaveFailed,
            ) => Self {
                phase: P::Editing {
                    record,
                    draft,
                    saving: false,
                },
                notice: Some(SAVE_FAILED),
            },
            (P::Editing { saving: true, .. }, E::Save | E::Edit(..)) => {
                return Err(StateError::GuardFailed(
                    "A save is already in progress".to_string(),
                ))
            }
            (phase, event) => return Err(StateError::invalid(phase, event)),
        };

        Ok(next)
    }

    /// Coefficients that a save would write
    pub fn pending_save(&self) -> Option<(uuid::Uuid, CostCoefficients)> {
        match &self.phase {
            ParametersPhase::Editing {
                record,
                draft,
                saving: true,
            } => Some((record.id, *draft)),
            _ => None,
        }
    }

    pub fn render(&self) -> ParametersView {
        match &self.phase {
            ParametersPhase::Loading => ParametersView {
                status: ViewStatus::Loading,
                fields: Vec::new(),
                save_enabled: false,
                save_label: "Save configuration",
                notes: &[],
                notice: self.notice,
            },
            ParametersPhase::Unavailable => ParametersView {
                status: ViewStatus::Unavailable,
                fields: Vec::new(),
                save_enabled: false,
                save_label: "Save configuration",
                notes: &[],
                notice: self.notice,
            },
            ParametersPhase::Editing { draft, saving, .. } => ParametersView {
                status: ViewStatus::Ready,
                fields: ParameterField::ALL
                    .iter()
                    .map(|field| FieldView {
                        field: *field,
                        label: field.label(),
                        hint: field.hint(),
                        value: draft.get(*field),
                    })
                    .collect(),
                save_enabled: !saving,
                save_label: if *saving {
                    "Saving..."
                } else {
                    "Save configuration"
                },
                notes: &CALCULATION_NOTES,
                notice: self.notice,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Unavailable,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub field: ParameterField,
    pub label: &'static str,
    pub hint: &'static str,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametersView {
    pub status: ViewStatus,
    pub fields: Vec<FieldView>,
    pub save_enabled: bool,
    pub save_label: &'static str,
    pub notes: &'static [&'static str],
    pub notice: Option<Notice>,
}
