use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the whole application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Validation(ValidationError),
    Hydration(HydrationError),
    Submission(SubmissionError),
}

/// Local, synchronous rejection of a price record. Variants are declared in
/// the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NoCompanySelected,
    NonPositivePrice,
    HighBelowLow,
    HighNotMaximum,
    LowNotMinimum,
}

impl ValidationError {
    /// Short machine-oriented reason.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::NoCompanySelected => "no company selected",
            ValidationError::NonPositivePrice => "non-positive price",
            ValidationError::HighBelowLow => "high below low",
            ValidationError::HighNotMaximum => "high not the maximum",
            ValidationError::LowNotMinimum => "low not the minimum",
        }
    }
}

/// Transport-level failures
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    RequestFailed(String),
    HttpStatus { status: u16, status_text: String },
    InvalidPayload(String),
    /// The service answered successfully but with an `{"error": ...}` body.
    ApiRejected(String),
}

/// Failure while populating the form from the read endpoints
#[derive(Debug, Clone, PartialEq)]
pub enum HydrationError {
    Companies(NetworkError),
    LatestQuote { company: String, source: NetworkError },
}

impl HydrationError {
    /// Generic text shown to the user; details go to the log.
    pub fn notice(&self) -> String {
        match self {
            HydrationError::Companies(_) => "Cannot load company list.".to_string(),
            HydrationError::LatestQuote { company, .. } => {
                format!("Cannot load latest price for {}.", company)
            }
        }
    }

    pub fn source_error(&self) -> &NetworkError {
        match self {
            HydrationError::Companies(source) => source,
            HydrationError::LatestQuote { source, .. } => source,
        }
    }
}

/// Failure of the prediction round-trip
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionError(pub NetworkError);

impl SubmissionError {
    pub const NOTICE: &'static str = "Cannot connect to backend server.";

    pub fn notice(&self) -> &'static str {
        Self::NOTICE
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Validation(e) => write!(f, "Validation Error: {}", e),
            AppError::Hydration(e) => write!(f, "Hydration Error: {}", e),
            AppError::Submission(e) => write!(f, "Submission Error: {}", e),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let message = match self {
            ValidationError::NoCompanySelected => "Please select a company",
            ValidationError::NonPositivePrice => "All prices must be greater than 0",
            ValidationError::HighBelowLow => "High price cannot be less than low price",
            ValidationError::HighNotMaximum => "High price must be the highest value",
            ValidationError::LowNotMinimum => "Low price must be the lowest value",
        };
        f.write_str(message)
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            NetworkError::HttpStatus { status, status_text } => {
                write!(f, "HTTP error: {} - {}", status, status_text)
            }
            NetworkError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            NetworkError::ApiRejected(msg) => write!(f, "Rejected by API: {}", msg),
        }
    }
}

impl Display for HydrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            HydrationError::Companies(e) => write!(f, "companies: {}", e),
            HydrationError::LatestQuote { company, source } => {
                write!(f, "latest quote for {}: {}", company, source)
            }
        }
    }
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "prediction: {}", self.0)
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for NetworkError {}
impl std::error::Error for HydrationError {}
impl std::error::Error for SubmissionError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<HydrationError> for AppError {
    fn from(error: HydrationError) -> Self {
        AppError::Hydration(error)
    }
}

impl From<SubmissionError> for AppError {
    fn from(error: SubmissionError) -> Self {
        AppError::Submission(error)
    }
}

impl From<NetworkError> for SubmissionError {
    fn from(error: NetworkError) -> Self {
        SubmissionError(error)
    }
}
