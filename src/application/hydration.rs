use std::rc::Rc;

use crate::application::render;
use crate::application::view::FormView;
use crate::domain::errors::HydrationError;
use crate::domain::forecast::{CompanyId, ForecastRepository, OhlcSnapshot};
use crate::domain::logging::LogComponent;

/// Result of one hydration call. Failures have already been rendered and logged.
#[derive(Debug, Clone, PartialEq)]
pub enum HydrationOutcome {
    CompaniesLoaded(usize),
    PricesLoaded(OhlcSnapshot),
    /// Nothing to do (placeholder selected); no request was made.
    Skipped,
    Failed(HydrationError),
}

/// Populates the form from the read endpoints. Nothing is cached: every call
/// fetches and renders from scratch.
pub struct HydrationService<R, V> {
    repository: Rc<R>,
    view: Rc<V>,
}

impl<R: ForecastRepository, V: FormView> HydrationService<R, V> {
    pub fn new(repository: Rc<R>, view: Rc<V>) -> Self {
        Self { repository, view }
    }

    /// Replace the company selector with the fetched catalog behind a placeholder.
    pub async fn load_companies(&self) -> HydrationOutcome {
        match self.repository.list_companies().await {
            Ok(catalog) => {
                self.view.set_company_options(&catalog.options());
                crate::log_info!(
                    LogComponent::Application("Hydration"),
                    "📋 Loaded {} companies",
                    catalog.len()
                );
                HydrationOutcome::CompaniesLoaded(catalog.len())
            }
            Err(source) => self.fail(HydrationError::Companies(source)),
        }
    }

    /// Overwrite the four price inputs with the latest snapshot for `company`.
    pub async fn load_latest_price(&self, company: &str) -> HydrationOutcome {
        let company = CompanyId::new(company);
        if company.is_unselected() {
            return HydrationOutcome::Skipped;
        }

        match self.repository.latest_quote(&company).await {
            Ok(snapshot) => {
                self.view.set_price_fields(&snapshot);
                crate::log_debug!(
                    LogComponent::Application("Hydration"),
                    "Latest {}: O:{} H:{} L:{} C:{}",
                    company,
                    snapshot.open.value(),
                    snapshot.high.value(),
                    snapshot.low.value(),
                    snapshot.close.value()
                );
                HydrationOutcome::PricesLoaded(snapshot)
            }
            Err(source) => self.fail(HydrationError::LatestQuote {
                company: company.value().to_string(),
                source,
            }),
        }
    }

    fn fail(&self, error: HydrationError) -> HydrationOutcome {
        crate::log_error!(LogComponent::Application("Hydration"), "❌ {}", error);
        render::render_error(self.view.as_ref(), &error.notice());
        HydrationOutcome::Failed(error)
    }
}
