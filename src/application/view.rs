use crate::domain::forecast::{
    CompanyId, CompanyOption, OhlcSnapshot, PredictionResult, PriceQuote, format_currency,
    parse_price_input,
};

/// Raw text of the five form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub company: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
}

impl FormValues {
    pub fn new(company: &str, open: &str, high: &str, low: &str, close: &str) -> Self {
        Self {
            company: company.to_string(),
            open: open.to_string(),
            high: high.to_string(),
            low: low.to_string(),
            close: close.to_string(),
        }
    }
}

impl From<&FormValues> for PriceQuote {
    fn from(values: &FormValues) -> Self {
        PriceQuote::new(
            CompanyId::new(&values.company),
            parse_price_input(&values.open),
            parse_price_input(&values.high),
            parse_price_input(&values.low),
            parse_price_input(&values.close),
        )
    }
}

/// Everything the result panel shows, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub reference_price: String,
    pub predicted_price: String,
    pub trend_glyph: &'static str,
    pub trend_label: &'static str,
    pub trend_class: &'static str,
}

impl ResultPanel {
    pub fn new(result: &PredictionResult, reference_close: f64) -> Self {
        Self {
            reference_price: format_currency(reference_close),
            predicted_price: format_currency(result.prediction),
            trend_glyph: result.trend.glyph(),
            trend_label: result.trend.label(),
            trend_class: result.trend.css_class(),
        }
    }
}

/// Rendering surface the services read from and write into.
///
/// Methods take `&self`; implementations use interior mutability the way
/// reactive signals do.
pub trait FormView {
    fn form_values(&self) -> FormValues;

    /// Overwrite open/high/low/close. The company field is left alone.
    fn set_price_fields(&self, snapshot: &OhlcSnapshot);

    /// Replace the whole option list.
    fn set_company_options(&self, options: &[CompanyOption]);

    fn show_error(&self, message: &str);
    fn hide_error(&self);

    fn show_result(&self, panel: &ResultPanel);
    fn hide_result(&self);

    /// `true` disables the submit control, hides its label and shows the loader.
    fn set_loading(&self, loading: bool);
}
