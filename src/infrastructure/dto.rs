use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::NetworkError;
use crate::domain::forecast::{
    CompanyCatalog, CompanyId, OhlcSnapshot, PredictionResult, PriceQuote, Trend,
    parse_price_input,
};

/// Body of `POST /predict`
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub company: &'a str,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl<'a> From<&'a PriceQuote> for PredictRequest<'a> {
    fn from(quote: &'a PriceQuote) -> Self {
        Self {
            company: quote.company.value(),
            open: quote.open.value(),
            high: quote.high.value(),
            low: quote.low.value(),
            close: quote.close.value(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: Value,
    #[serde(default)]
    trend: Option<String>,
}

/// The backend answers unknown companies with `200 {"error": ...}`. Any
/// object carrying an `error` key is a rejection, whatever else it holds.
fn parse<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, NetworkError> {
    let invalid =
        |e: serde_json::Error| NetworkError::InvalidPayload(format!("Failed to parse {}: {}", what, e));
    let value: Value = serde_json::from_str(body).map_err(invalid)?;
    if let Some(error) = value.get("error") {
        let reason = match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        return Err(NetworkError::ApiRejected(reason));
    }
    serde_json::from_value(value).map_err(invalid)
}

/// Numbers pass through, strings go through the lenient parse, anything else is NaN.
pub fn normalize_number(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_price_input(text),
        _ => f64::NAN,
    }
}

pub fn decode_companies(body: &str) -> Result<CompanyCatalog, NetworkError> {
    let names: Vec<String> = parse(body, "company list")?;
    let companies = names
        .iter()
        .map(|name| CompanyId::new(name))
        .filter(|company| !company.is_unselected())
        .collect();
    Ok(CompanyCatalog::new(companies))
}

pub fn decode_latest_quote(body: &str) -> Result<OhlcSnapshot, NetworkError> {
    parse(body, "latest quote")
}

pub fn decode_prediction(body: &str) -> Result<PredictionResult, NetworkError> {
    let response: PredictResponse = parse(body, "prediction")?;
    Ok(PredictionResult {
        prediction: normalize_number(&response.prediction),
        trend: Trend::from_wire(response.trend.as_deref().unwrap_or_default()),
    })
}

pub fn encode_predict_request(quote: &PriceQuote) -> Result<String, NetworkError> {
    serde_json::to_string(&PredictRequest::from(quote))
        .map_err(|e| NetworkError::InvalidPayload(format!("Failed to serialize body: {}", e)))
}
