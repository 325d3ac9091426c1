use crate::domain::errors::ValidationError;
use crate::domain::forecast::PriceQuote;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// How much of the OHLC ordering is enforced before submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, StrumDisplay, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// All five checks.
    #[default]
    Strict,
    /// Skips the high-is-maximum and low-is-minimum checks.
    Relaxed,
}

/// Validate a quote with the strict rule set.
pub fn validate(quote: &PriceQuote) -> Result<(), ValidationError> {
    validate_with(quote, ValidationMode::Strict)
}

/// Checks run in a fixed order and stop at the first violation.
pub fn validate_with(quote: &PriceQuote, mode: ValidationMode) -> Result<(), ValidationError> {
    if quote.company.is_unselected() {
        return Err(ValidationError::NoCompanySelected);
    }

    if quote.prices().iter().any(|price| !price.is_positive()) {
        return Err(ValidationError::NonPositivePrice);
    }

    if quote.high < quote.low {
        return Err(ValidationError::HighBelowLow);
    }

    if mode == ValidationMode::Relaxed {
        return Ok(());
    }

    if quote.high < quote.open || quote.high < quote.close {
        return Err(ValidationError::HighNotMaximum);
    }

    if quote.low > quote.open || quote.low > quote.close {
        return Err(ValidationError::LowNotMinimum);
    }

    Ok(())
}

/// Stateless validator bound to a mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteValidator {
    mode: ValidationMode,
}

impl QuoteValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn validate(&self, quote: &PriceQuote) -> Result<(), ValidationError> {
        validate_with(quote, self.mode)
    }
}
