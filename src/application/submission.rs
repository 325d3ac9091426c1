use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::application::render;
use crate::application::ui_state::{RequestOrdering, RequestToken, UiEvent, UiState};
use crate::application::view::{FormView, ResultPanel};
use crate::domain::errors::{SubmissionError, ValidationError};
use crate::domain::forecast::{ForecastRepository, PredictionResult, PriceQuote, QuoteValidator};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};

/// How a single submission attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Validation failed; no request was sent.
    Rejected(ValidationError),
    Predicted(PredictionResult),
    Failed(SubmissionError),
    /// A newer submission owns the view; this response was dropped.
    Superseded,
}

/// Drives the submit flow: validate, show loading, call predict, render,
/// and always restore the submit control afterwards.
pub struct SubmissionOrchestrator<R, V> {
    repository: Rc<R>,
    view: Rc<V>,
    validator: QuoteValidator,
    ordering: RequestOrdering,
    state: RefCell<UiState>,
    last_token: Cell<RequestToken>,
}

impl<R: ForecastRepository, V: FormView> SubmissionOrchestrator<R, V> {
    pub fn new(repository: Rc<R>, view: Rc<V>, validator: QuoteValidator, ordering: RequestOrdering) -> Self {
        Self {
            repository,
            view,
            validator,
            ordering,
            state: RefCell::new(UiState::Idle),
            last_token: Cell::new(0),
        }
    }

    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn ordering(&self) -> RequestOrdering {
        self.ordering
    }

    /// Handle one form submission.
    pub async fn submit(&self) -> SubmissionOutcome {
        let values = self.view.form_values();
        let quote = PriceQuote::from(&values);
        self.apply(UiEvent::Submitted);

        if let Err(reason) = self.validator.validate(&quote) {
            crate::log_debug!(
                LogComponent::Application("Submission"),
                "Rejected before sending: {}",
                reason.reason()
            );
            self.apply(UiEvent::ValidationFailed(reason));
            render::render_error(self.view.as_ref(), &reason.to_string());
            return SubmissionOutcome::Rejected(reason);
        }

        let token = self.issue_token();
        self.apply(UiEvent::ValidationPassed { token });
        render::enter_loading(self.view.as_ref());
        let _cleanup = LoadingGuard { orchestrator: self, token };

        crate::log_info!(
            LogComponent::Application("Submission"),
            "📡 Requesting prediction #{} for {}",
            token,
            quote.company
        );

        let response = self.repository.predict(&quote).await;
        let reference_close = quote.close.value();

        match response {
            Ok(result) => {
                let event = UiEvent::PredictionResolved { token, result, reference_close };
                if !self.apply(event) {
                    return self.superseded(token);
                }
                render::render_result(self.view.as_ref(), &ResultPanel::new(&result, reference_close));
                crate::log_info!(
                    LogComponent::Application("Submission"),
                    "✅ Prediction #{}: {:.2} ({})",
                    token,
                    result.prediction,
                    result.trend
                );
                SubmissionOutcome::Predicted(result)
            }
            Err(network_error) => {
                let error = SubmissionError::from(network_error);
                let event = UiEvent::PredictionFailed { token, message: error.notice().to_string() };
                if !self.apply(event) {
                    return self.superseded(token);
                }
                crate::log_error!(
                    LogComponent::Application("Submission"),
                    "❌ Prediction #{} failed: {}",
                    token,
                    error
                );
                render::render_error(self.view.as_ref(), error.notice());
                SubmissionOutcome::Failed(error)
            }
        }
    }

    /// An input changed: drop the error notice.
    pub fn field_edited(&self) {
        self.view.hide_error();
        self.apply(UiEvent::Edited);
    }

    fn superseded(&self, token: RequestToken) -> SubmissionOutcome {
        get_logger().log_with_metadata(
            LogLevel::Warn,
            LogComponent::Application("Submission"),
            "Discarding response for superseded request",
            &format!("token={} latest={}", token, self.last_token.get()),
        );
        SubmissionOutcome::Superseded
    }

    fn issue_token(&self) -> RequestToken {
        let token = self.last_token.get() + 1;
        self.last_token.set(token);
        token
    }

    /// Returns whether the event was applied.
    fn apply(&self, event: UiEvent) -> bool {
        let next = self.state.borrow().transition(&event, self.ordering, self.last_token.get());
        match next {
            Some(state) => {
                *self.state.borrow_mut() = state;
                true
            }
            None => false,
        }
    }

    fn owns_view(&self, token: RequestToken) -> bool {
        match self.ordering {
            RequestOrdering::Unordered => true,
            RequestOrdering::LatestOnly => token == self.last_token.get(),
        }
    }
}

/// Restores the submit control when the request settles, or when the
/// pending future is dropped.
struct LoadingGuard<'a, R: ForecastRepository, V: FormView> {
    orchestrator: &'a SubmissionOrchestrator<R, V>,
    token: RequestToken,
}

impl<R: ForecastRepository, V: FormView> Drop for LoadingGuard<'_, R, V> {
    fn drop(&mut self) {
        if self.orchestrator.owns_view(self.token) {
            render::leave_loading(self.orchestrator.view.as_ref());
        }
    }
}
