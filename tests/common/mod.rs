#![allow(dead_code)]

use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use stock_forecast_wasm::application::{FormValues, FormView, ResultPanel};
use stock_forecast_wasm::domain::errors::NetworkError;
use stock_forecast_wasm::domain::forecast::{
    CompanyCatalog, CompanyId, CompanyOption, ForecastRepository, OhlcSnapshot, Price,
    PredictionResult, PriceQuote, Trend,
};

pub type Reply<T> = Result<T, NetworkError>;
type Queue<T> = RefCell<VecDeque<oneshot::Receiver<Reply<T>>>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Companies,
    Latest(String),
    Predict(PriceQuote),
}

/// Repository answering from scripted replies, in call order
#[derive(Default)]
pub struct MockRepository {
    calls: RefCell<Vec<Call>>,
    companies: Queue<CompanyCatalog>,
    latest: Queue<OhlcSnapshot>,
    predictions: Queue<PredictionResult>,
}

fn ready<T>(queue: &Queue<T>, reply: Reply<T>) {
    let (tx, rx) = oneshot::channel();
    let _ = tx.send(reply);
    queue.borrow_mut().push_back(rx);
}

fn deferred<T>(queue: &Queue<T>) -> oneshot::Sender<Reply<T>> {
    let (tx, rx) = oneshot::channel();
    queue.borrow_mut().push_back(rx);
    tx
}

async fn next<T>(queue: &Queue<T>) -> Reply<T> {
    let pending = queue.borrow_mut().pop_front();
    match pending {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(NetworkError::RequestFailed("reply dropped".into()))),
        None => Err(NetworkError::RequestFailed("no scripted reply".into())),
    }
}

impl MockRepository {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply_companies(&self, reply: Reply<CompanyCatalog>) {
        ready(&self.companies, reply);
    }

    pub fn reply_latest(&self, reply: Reply<OhlcSnapshot>) {
        ready(&self.latest, reply);
    }

    pub fn reply_prediction(&self, reply: Reply<PredictionResult>) {
        ready(&self.predictions, reply);
    }

    pub fn defer_prediction(&self) -> oneshot::Sender<Reply<PredictionResult>> {
        deferred(&self.predictions)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn predict_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|call| matches!(call, Call::Predict(_))).count()
    }
}

impl ForecastRepository for MockRepository {
    async fn list_companies(&self) -> Result<CompanyCatalog, NetworkError> {
        self.calls.borrow_mut().push(Call::Companies);
        next(&self.companies).await
    }

    async fn latest_quote(&self, company: &CompanyId) -> Result<OhlcSnapshot, NetworkError> {
        self.calls.borrow_mut().push(Call::Latest(company.value().to_string()));
        next(&self.latest).await
    }

    async fn predict(&self, quote: &PriceQuote) -> Result<PredictionResult, NetworkError> {
        self.calls.borrow_mut().push(Call::Predict(quote.clone()));
        next(&self.predictions).await
    }
}

/// In-memory view that records what was rendered
#[derive(Default)]
pub struct RecordingView {
    values: RefCell<FormValues>,
    options: RefCell<Vec<CompanyOption>>,
    error: RefCell<Option<String>>,
    result: RefCell<Option<ResultPanel>>,
    loading: Cell<bool>,
    loading_changes: RefCell<Vec<bool>>,
    price_writes: Cell<usize>,
    overlaps: Cell<usize>,
}

impl RecordingView {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_values(values: FormValues) -> Rc<Self> {
        let view = Self::default();
        *view.values.borrow_mut() = values;
        Rc::new(view)
    }

    pub fn set_values(&self, values: FormValues) {
        *self.values.borrow_mut() = values;
    }

    pub fn values(&self) -> FormValues {
        self.values.borrow().clone()
    }

    pub fn options(&self) -> Vec<CompanyOption> {
        self.options.borrow().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn result(&self) -> Option<ResultPanel> {
        self.result.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn loading_changes(&self) -> Vec<bool> {
        self.loading_changes.borrow().clone()
    }

    pub fn price_writes(&self) -> usize {
        self.price_writes.get()
    }

    /// Number of times the error notice and result panel were visible together.
    pub fn overlaps(&self) -> usize {
        self.overlaps.get()
    }

    fn check_exclusive(&self) {
        if self.error.borrow().is_some() && self.result.borrow().is_some() {
            self.overlaps.set(self.overlaps.get() + 1);
        }
    }
}

impl FormView for RecordingView {
    fn form_values(&self) -> FormValues {
        self.values()
    }

    fn set_price_fields(&self, snapshot: &OhlcSnapshot) {
        let mut values = self.values.borrow_mut();
        values.open = snapshot.open.to_input_string();
        values.high = snapshot.high.to_input_string();
        values.low = snapshot.low.to_input_string();
        values.close = snapshot.close.to_input_string();
        self.price_writes.set(self.price_writes.get() + 1);
    }

    fn set_company_options(&self, options: &[CompanyOption]) {
        *self.options.borrow_mut() = options.to_vec();
    }

    fn show_error(&self, message: &str) {
        *self.error.borrow_mut() = Some(message.to_string());
        self.check_exclusive();
    }

    fn hide_error(&self) {
        *self.error.borrow_mut() = None;
    }

    fn show_result(&self, panel: &ResultPanel) {
        *self.result.borrow_mut() = Some(panel.clone());
        self.check_exclusive();
    }

    fn hide_result(&self) {
        *self.result.borrow_mut() = None;
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.loading_changes.borrow_mut().push(loading);
    }
}

pub fn form(company: &str, open: f64, high: f64, low: f64, close: f64) -> FormValues {
    FormValues::new(
        company,
        &open.to_string(),
        &high.to_string(),
        &low.to_string(),
        &close.to_string(),
    )
}

pub fn prediction(value: f64, trend: Trend) -> PredictionResult {
    PredictionResult { prediction: value, trend }
}

pub fn snapshot(open: f64, high: f64, low: f64, close: f64) -> OhlcSnapshot {
    OhlcSnapshot {
        open: Price::new(open),
        high: Price::new(high),
        low: Price::new(low),
        close: Price::new(close),
    }
}

pub fn catalog(names: &[&str]) -> CompanyCatalog {
    CompanyCatalog::new(names.iter().map(|name| CompanyId::from(*name)).collect())
}

pub fn server_error() -> NetworkError {
    NetworkError::HttpStatus { status: 500, status_text: "Internal Server Error".into() }
}
