use crate::domain::errors::ValidationError;
use crate::domain::forecast::PredictionResult;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// Identifies one validated submission; increases monotonically.
pub type RequestToken = u64;

/// What to do with prediction responses that arrive for a superseded request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, StrumDisplay, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RequestOrdering {
    /// Only the most recently issued request may update the view.
    #[default]
    LatestOnly,
    /// Every response renders, in arrival order.
    Unordered,
}

/// Submission state. Exactly one value exists per orchestrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Validating,
    Loading { token: RequestToken },
    Error(String),
    Success { result: PredictionResult, reference_close: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Submitted,
    ValidationFailed(ValidationError),
    ValidationPassed { token: RequestToken },
    PredictionResolved { token: RequestToken, result: PredictionResult, reference_close: f64 },
    PredictionFailed { token: RequestToken, message: String },
    /// The user edited an input while an error was shown.
    Edited,
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Single transition function. `latest` is the most recently issued token.
    /// `None` means the event does not apply in the current state and must be
    /// ignored.
    pub fn transition(
        &self,
        event: &UiEvent,
        ordering: RequestOrdering,
        latest: RequestToken,
    ) -> Option<UiState> {
        match (self, event) {
            (UiState::Validating, UiEvent::Submitted) => None,
            (_, UiEvent::Submitted) => Some(UiState::Validating),

            (UiState::Validating, UiEvent::ValidationFailed(reason)) => {
                Some(UiState::Error(reason.to_string()))
            }
            (UiState::Validating, UiEvent::ValidationPassed { token }) => {
                Some(UiState::Loading { token: *token })
            }

            (UiState::Validating, UiEvent::PredictionResolved { .. } | UiEvent::PredictionFailed { .. }) => None,
            (_, UiEvent::PredictionResolved { token, result, reference_close }) => {
                Self::accepts_response(*token, ordering, latest).then(|| UiState::Success {
                    result: *result,
                    reference_close: *reference_close,
                })
            }
            (_, UiEvent::PredictionFailed { token, message }) => {
                Self::accepts_response(*token, ordering, latest).then(|| UiState::Error(message.clone()))
            }

            (UiState::Error(_), UiEvent::Edited) => Some(UiState::Idle),

            _ => None,
        }
    }

    fn accepts_response(token: RequestToken, ordering: RequestOrdering, latest: RequestToken) -> bool {
        match ordering {
            RequestOrdering::Unordered => true,
            RequestOrdering::LatestOnly => token == latest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::Trend;

    const RESULT: PredictionResult = PredictionResult { prediction: 13.5, trend: Trend::Up };

    fn resolved(token: RequestToken) -> UiEvent {
        UiEvent::PredictionResolved { token, result: RESULT, reference_close: 12.0 }
    }

    #[test]
    fn happy_path() {
        let ordering = RequestOrdering::LatestOnly;
        let state = UiState::Idle.transition(&UiEvent::Submitted, ordering, 0).unwrap();
        assert_eq!(state, UiState::Validating);
        let state = state.transition(&UiEvent::ValidationPassed { token: 1 }, ordering, 1).unwrap();
        assert!(state.is_loading());
        let state = state.transition(&resolved(1), ordering, 1).unwrap();
        assert!(matches!(state, UiState::Success { reference_close, .. } if reference_close == 12.0));
    }

    #[test]
    fn validation_failure_carries_message() {
        let state = UiState::Validating
            .transition(&UiEvent::ValidationFailed(ValidationError::HighBelowLow), RequestOrdering::LatestOnly, 0)
            .unwrap();
        assert_eq!(state.error_message(), Some("High price cannot be less than low price"));
    }

    #[test]
    fn stale_token_is_ignored_only_when_latest_only() {
        let loading = UiState::Loading { token: 2 };
        assert_eq!(loading.transition(&resolved(1), RequestOrdering::LatestOnly, 2), None);
        assert!(loading.transition(&resolved(1), RequestOrdering::Unordered, 2).is_some());
    }

    #[test]
    fn latest_token_is_accepted_after_a_rejected_resubmit() {
        let error = UiState::Error(ValidationError::NoCompanySelected.to_string());
        let state = error.transition(&resolved(1), RequestOrdering::LatestOnly, 1);
        assert!(matches!(state, Some(UiState::Success { .. })));
        assert_eq!(error.transition(&resolved(1), RequestOrdering::LatestOnly, 2), None);
    }

    #[test]
    fn responses_are_ignored_while_validating() {
        let validating = UiState::Validating;
        assert_eq!(validating.transition(&resolved(1), RequestOrdering::LatestOnly, 1), None);
        assert_eq!(validating.transition(&resolved(1), RequestOrdering::Unordered, 1), None);
    }

    #[test]
    fn edit_clears_error_only() {
        let error = UiState::Error("x".into());
        assert_eq!(error.transition(&UiEvent::Edited, RequestOrdering::LatestOnly, 0), Some(UiState::Idle));
        assert_eq!(UiState::Idle.transition(&UiEvent::Edited, RequestOrdering::LatestOnly, 0), None);
    }

    #[test]
    fn ordering_parses_from_kebab_case() {
        assert_eq!("latest-only".parse::<RequestOrdering>(), Ok(RequestOrdering::LatestOnly));
        assert_eq!(RequestOrdering::Unordered.to_string(), "unordered");
    }
}
