use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - a single price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// NaN is not positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Text written back into a numeric input field.
    pub fn to_input_string(&self) -> String {
        format!("{}", self.0)
    }
}

/// Value Object - company identifier as served by the catalog endpoint.
/// The empty identifier is the "no selection" placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_unselected(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CompanyId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CompanyId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

/// Direction of the forecast relative to the submitted close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, Serialize)]
pub enum Trend {
    #[strum(serialize = "UP")]
    #[serde(rename = "UP")]
    Up,
    #[strum(serialize = "DOWN")]
    #[serde(rename = "DOWN")]
    Down,
}

impl Trend {
    /// Only an exact `"UP"` is upward; anything else reads as downward.
    pub fn from_wire(raw: &str) -> Self {
        match Trend::from_str(raw) {
            Ok(Trend::Up) => Trend::Up,
            _ => Trend::Down,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "📈",
            Trend::Down => "📉",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "UPWARD",
            Trend::Down => "DOWNWARD",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// Price record submitted for prediction. Built once per submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub company: CompanyId,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl PriceQuote {
    pub fn new(company: CompanyId, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            company,
            open: Price::new(open),
            high: Price::new(high),
            low: Price::new(low),
            close: Price::new(close),
        }
    }

    pub fn prices(&self) -> [Price; 4] {
        [self.open, self.high, self.low, self.close]
    }
}

/// Latest known OHLC values for a company
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcSnapshot {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub prediction: f64,
    pub trend: Trend,
}

/// One entry of the company selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyOption {
    pub value: String,
    pub label: String,
}

impl CompanyOption {
    pub const PLACEHOLDER_LABEL: &'static str = "-- Select a company --";

    pub fn placeholder() -> Self {
        Self { value: String::new(), label: Self::PLACEHOLDER_LABEL.to_string() }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<&CompanyId> for CompanyOption {
    fn from(company: &CompanyId) -> Self {
        Self { value: company.value().to_string(), label: company.value().to_string() }
    }
}

/// Ordered set of selectable companies, read-only once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyCatalog {
    companies: Vec<CompanyId>,
}

impl CompanyCatalog {
    pub fn new(companies: Vec<CompanyId>) -> Self {
        Self { companies }
    }

    pub fn companies(&self) -> &[CompanyId] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Selector entries: the placeholder followed by every company in order.
    pub fn options(&self) -> Vec<CompanyOption> {
        std::iter::once(CompanyOption::placeholder())
            .chain(self.companies.iter().map(CompanyOption::from))
            .collect()
    }
}
