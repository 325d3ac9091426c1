use leptos::*;

use crate::application::{FormValues, FormView, ResultPanel};
use crate::domain::forecast::{CompanyOption, OhlcSnapshot};
use crate::global_state::{Globals, globals};

/// `FormView` over Leptos signals; the DOM follows reactively.
#[derive(Clone, Copy)]
pub struct SignalFormView {
    signals: Globals,
}

impl SignalFormView {
    pub fn new(signals: Globals) -> Self {
        Self { signals }
    }

    /// View bound to the application-wide signals.
    pub fn global() -> Self {
        Self::new(*globals())
    }

    pub fn signals(&self) -> &Globals {
        &self.signals
    }
}

impl FormView for SignalFormView {
    fn form_values(&self) -> FormValues {
        let s = &self.signals;
        FormValues {
            company: s.company.get_untracked(),
            open: s.open.get_untracked(),
            high: s.high.get_untracked(),
            low: s.low.get_untracked(),
            close: s.close.get_untracked(),
        }
    }

    fn set_price_fields(&self, snapshot: &OhlcSnapshot) {
        let s = &self.signals;
        s.open.set(snapshot.open.to_input_string());
        s.high.set(snapshot.high.to_input_string());
        s.low.set(snapshot.low.to_input_string());
        s.close.set(snapshot.close.to_input_string());
    }

    fn set_company_options(&self, options: &[CompanyOption]) {
        self.signals.company_options.set(options.to_vec());
    }

    fn show_error(&self, message: &str) {
        self.signals.error_message.set(message.to_string());
        self.signals.error_visible.set(true);
    }

    fn hide_error(&self) {
        self.signals.error_visible.set(false);
    }

    fn show_result(&self, panel: &ResultPanel) {
        self.signals.result_panel.set(Some(panel.clone()));
    }

    fn hide_result(&self) {
        self.signals.result_panel.set(None);
    }

    fn set_loading(&self, loading: bool) {
        self.signals.loading.set(loading);
    }
}
