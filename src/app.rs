use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::{HydrationService, SubmissionOrchestrator},
    config::AppConfig,
    domain::forecast::QuoteValidator,
    global_state::{
        close_input, company_input, company_options, error_message, error_visible, high_input,
        is_loading, low_input, open_input, result_panel,
    },
    infrastructure::ForecastApiClient,
    presentation::SignalFormView,
};

type AppHydration = HydrationService<ForecastApiClient, SignalFormView>;
type AppOrchestrator = SubmissionOrchestrator<ForecastApiClient, SignalFormView>;

const STYLES: &str = r#"
.forecast-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
    min-height: 100vh;
    padding: 20px;
    color: white;
}

.header, .prediction-form, .result-section {
    max-width: 640px;
    margin: 0 auto 20px;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(10px);
    padding: 20px;
    border-radius: 15px;
    border: 1px solid rgba(255, 255, 255, 0.2);
}

.header { text-align: center; }

.prediction-form label {
    display: block;
    font-size: 12px;
    color: #d0d0d0;
    margin: 10px 0 4px;
}

.prediction-form select, .prediction-form input {
    width: 100%;
    padding: 8px;
    border-radius: 6px;
    border: 1px solid #4a5d73;
    background: #2c3e50;
    color: white;
}

.price-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 0 16px;
}

.predict-btn {
    margin-top: 16px;
    width: 100%;
    padding: 10px;
    border: none;
    border-radius: 8px;
    background: #72c685;
    color: #1e3c72;
    font-weight: 700;
    cursor: pointer;
}

.predict-btn:disabled { opacity: 0.6; cursor: wait; }

.btn-loader {
    width: 14px;
    height: 14px;
    border: 2px solid #1e3c72;
    border-top-color: transparent;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.error-message {
    max-width: 640px;
    margin: 0 auto 20px;
    gap: 8px;
    align-items: center;
    padding: 10px;
    background: #ffeeee;
    color: #990000;
    border: 1px solid #ff0000;
    border-radius: 5px;
}

.result-section {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

.price-label { font-size: 12px; color: #a0a0a0; }

.price-value {
    font-family: 'Courier New', monospace;
    font-size: 24px;
    font-weight: 700;
}

.trend-card {
    grid-column: span 2;
    text-align: center;
    padding: 10px;
    border-radius: 10px;
}

.trend-card.up, .trend-value.up { color: #72c685; }
.trend-card.down, .trend-value.down { color: #ff6b6b; }
"#;

/// Prediction form with hydration, error banner and result panel
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = Rc::new(ForecastApiClient::new(&config.api_base_url));
    let view = Rc::new(SignalFormView::global());
    let hydration: Rc<AppHydration> = Rc::new(HydrationService::new(client.clone(), view.clone()));
    let orchestrator: Rc<AppOrchestrator> = Rc::new(SubmissionOrchestrator::new(
        client,
        view,
        QuoteValidator::new(config.validation),
        config.ordering,
    ));

    crate::log_info!(
        crate::domain::logging::LogComponent::Presentation("App"),
        "Using forecast API at {} ({} validation, {} ordering)",
        config.api_base_url,
        config.validation,
        config.ordering
    );

    {
        let hydration = hydration.clone();
        spawn_local(async move {
            hydration.load_companies().await;
        });
    }

    let on_submit = {
        let orchestrator = orchestrator.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let orchestrator = orchestrator.clone();
            spawn_local(async move {
                orchestrator.submit().await;
            });
        }
    };

    let on_company_change = {
        let orchestrator = orchestrator.clone();
        move |ev: ev::Event| {
            let company = event_target_value(&ev);
            company_input().set(company.clone());
            orchestrator.field_edited();
            let hydration = hydration.clone();
            spawn_local(async move {
                hydration.load_latest_price(&company).await;
            });
        }
    };

    let loading = is_loading();

    view! {
        <style>{STYLES}</style>
        <div class="forecast-app">
            <div class="header">
                <h1>"📊 Stock Price Forecast"</h1>
                <p>"Next close prediction from the latest OHLC values"</p>
            </div>

            <form class="prediction-form" on:submit=on_submit>
                <label for="company">"Company"</label>
                <select id="company" on:change=on_company_change prop:value=move || company_input().get()>
                    <For
                        each=move || company_options().get()
                        key=|option| option.value.clone()
                        children=move |option| {
                            view! { <option value=option.value.clone()>{option.label.clone()}</option> }
                        }
                    />
                </select>

                <div class="price-grid">
                    <PriceInput id="open" label="Open" signal=open_input() orchestrator=orchestrator.clone() />
                    <PriceInput id="high" label="High" signal=high_input() orchestrator=orchestrator.clone() />
                    <PriceInput id="low" label="Low" signal=low_input() orchestrator=orchestrator.clone() />
                    <PriceInput id="close" label="Close" signal=close_input() orchestrator=orchestrator.clone() />
                </div>

                <button id="predictBtn" class="predict-btn" type="submit" prop:disabled=move || loading.get()>
                    <span class="btn-text" style:display=move || if loading.get() { "none" } else { "inline" }>
                        "🔮 Predict"
                    </span>
                    <span class="btn-loader" style:display=move || if loading.get() { "inline-block" } else { "none" }></span>
                </button>
            </form>

            <ErrorBanner />
            <ResultSection />
        </div>
    }
}

/// Numeric input bound to one price signal; editing dismisses the error notice.
#[component]
fn PriceInput(
    id: &'static str,
    label: &'static str,
    signal: RwSignal<String>,
    orchestrator: Rc<AppOrchestrator>,
) -> impl IntoView {
    let on_input = move |ev: ev::Event| {
        signal.set(event_target_value(&ev));
        orchestrator.field_edited();
    };

    view! {
        <div>
            <label for=id>{label}</label>
            <input
                id=id
                type="number"
                step="any"
                min="0"
                placeholder=label
                prop:value=move || signal.get()
                on:input=on_input
            />
        </div>
    }
}

#[component]
fn ErrorBanner() -> impl IntoView {
    view! {
        <div class="error-message" style:display=move || if error_visible().get() { "flex" } else { "none" }>
            <span>"⚠️"</span>
            <span class="error-text">{move || error_message().get()}</span>
        </div>
    }
}

#[component]
fn ResultSection() -> impl IntoView {
    move || {
        result_panel().get().map(|panel| {
            view! {
                <div class="result-section">
                    <div class="price-card">
                        <div class="price-label">"Current Price"</div>
                        <div class="price-value">{panel.reference_price.clone()}</div>
                    </div>
                    <div class="price-card">
                        <div class="price-label">"Predicted Price"</div>
                        <div class="price-value">{panel.predicted_price.clone()}</div>
                    </div>
                    <div class=format!("trend-card {}", panel.trend_class)>
                        <span class="trend-icon">{panel.trend_glyph}</span>
                        " "
                        <span class=format!("trend-value {}", panel.trend_class)>{panel.trend_label}</span>
                    </div>
                </div>
            }
        })
    }
}

/// Mount the application on `<body>`.
pub fn mount(config: AppConfig) {
    mount_to_body(move || view! { <App config=config /> });
}
