use crate::domain::errors::NetworkError;
use crate::domain::forecast::{CompanyCatalog, CompanyId, OhlcSnapshot, PredictionResult, PriceQuote};

/// Remote forecast service: two read endpoints and the prediction endpoint.
///
/// Futures are polled on the single UI thread, so implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait ForecastRepository {
    /// `GET /companies`
    async fn list_companies(&self) -> Result<CompanyCatalog, NetworkError>;

    /// `GET /latest/{company}`
    async fn latest_quote(&self, company: &CompanyId) -> Result<OhlcSnapshot, NetworkError>;

    /// `POST /predict`
    async fn predict(&self, quote: &PriceQuote) -> Result<PredictionResult, NetworkError>;
}
