use crate::application::ResultPanel;
use crate::domain::forecast::CompanyOption;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive state backing the prediction form
#[derive(Clone, Copy)]
pub struct Globals {
    pub company: RwSignal<String>,
    pub open: RwSignal<String>,
    pub high: RwSignal<String>,
    pub low: RwSignal<String>,
    pub close: RwSignal<String>,
    pub company_options: RwSignal<Vec<CompanyOption>>,
    pub error_message: RwSignal<String>,
    pub error_visible: RwSignal<bool>,
    pub result_panel: RwSignal<Option<ResultPanel>>,
    pub loading: RwSignal<bool>,
}

impl Globals {
    /// Fresh, unshared signals.
    pub fn create() -> Self {
        Self {
            company: create_rw_signal(String::new()),
            open: create_rw_signal(String::new()),
            high: create_rw_signal(String::new()),
            low: create_rw_signal(String::new()),
            close: create_rw_signal(String::new()),
            company_options: create_rw_signal(vec![CompanyOption::placeholder()]),
            error_message: create_rw_signal(String::new()),
            error_visible: create_rw_signal(false),
            result_panel: create_rw_signal(None),
            loading: create_rw_signal(false),
        }
    }
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(Globals::create)
}

crate::global_signals! {
    pub company_input => company: String,
    pub open_input => open: String,
    pub high_input => high: String,
    pub low_input => low: String,
    pub close_input => close: String,
    pub company_options => company_options: Vec<CompanyOption>,
    pub error_message => error_message: String,
    pub error_visible => error_visible: bool,
    pub result_panel => result_panel: Option<ResultPanel>,
    pub is_loading => loading: bool,
}
