mod common;

use common::{Call, MockRepository, RecordingView, catalog, form, server_error, snapshot};
use futures::executor::block_on;
use std::rc::Rc;

use stock_forecast_wasm::application::{HydrationOutcome, HydrationService};
use stock_forecast_wasm::domain::errors::{HydrationError, NetworkError};
use stock_forecast_wasm::domain::forecast::CompanyOption;

fn service(
    repo: &Rc<MockRepository>,
    view: &Rc<RecordingView>,
) -> HydrationService<MockRepository, RecordingView> {
    HydrationService::new(repo.clone(), view.clone())
}

#[test]
fn companies_are_listed_behind_a_placeholder() {
    let repo = MockRepository::new();
    let view = RecordingView::new();
    repo.reply_companies(Ok(catalog(&["ACME", "GLOBEX"])));

    let outcome = block_on(service(&repo, &view).load_companies());

    assert_eq!(outcome, HydrationOutcome::CompaniesLoaded(2));
    let options = view.options();
    assert_eq!(options.len(), 3);
    assert!(options[0].is_placeholder());
    assert_eq!(options[0].label, CompanyOption::PLACEHOLDER_LABEL);
    assert_eq!(options[1].value, "ACME");
    assert_eq!(options[2].label, "GLOBEX");
}

#[test]
fn reloading_companies_does_not_accumulate_options() {
    let repo = MockRepository::new();
    let view = RecordingView::new();
    repo.reply_companies(Ok(catalog(&["ACME", "GLOBEX"])));
    repo.reply_companies(Ok(catalog(&["ACME", "GLOBEX"])));
    let hydration = service(&repo, &view);

    block_on(hydration.load_companies());
    let first = view.options();
    block_on(hydration.load_companies());

    assert_eq!(view.options(), first);
    assert_eq!(repo.calls(), vec![Call::Companies, Call::Companies]);
}

#[test]
fn empty_catalog_leaves_only_the_placeholder() {
    let repo = MockRepository::new();
    let view = RecordingView::new();
    repo.reply_companies(Ok(catalog(&[])));

    let outcome = block_on(service(&repo, &view).load_companies());

    assert_eq!(outcome, HydrationOutcome::CompaniesLoaded(0));
    assert_eq!(view.options(), vec![CompanyOption::placeholder()]);
}

#[test]
fn company_failure_shows_notice() {
    let repo = MockRepository::new();
    let view = RecordingView::new();
    repo.reply_companies(Err(server_error()));

    let outcome = block_on(service(&repo, &view).load_companies());

    assert_eq!(outcome, HydrationOutcome::Failed(HydrationError::Companies(server_error())));
    assert_eq!(view.error().as_deref(), Some("Cannot load company list."));
    assert!(view.options().is_empty());
}

#[test]
fn placeholder_selection_makes_no_request() {
    let repo = MockRepository::new();
    let values = form("", 10.0, 15.0, 8.0, 12.0);
    let view = RecordingView::with_values(values.clone());
    let hydration = service(&repo, &view);

    assert_eq!(block_on(hydration.load_latest_price("")), HydrationOutcome::Skipped);
    assert_eq!(block_on(hydration.load_latest_price("  ")), HydrationOutcome::Skipped);

    assert!(repo.calls().is_empty());
    assert_eq!(view.price_writes(), 0);
    assert_eq!(view.values(), values);
    assert_eq!(view.error(), None);
}

#[test]
fn latest_price_overwrites_the_four_prices_only() {
    let repo = MockRepository::new();
    let view = RecordingView::with_values(form("ACME", 1.0, 2.0, 0.5, 1.5));
    repo.reply_latest(Ok(snapshot(101.5, 110.0, 99.25, 105.0)));

    let outcome = block_on(service(&repo, &view).load_latest_price("ACME"));

    assert_eq!(outcome, HydrationOutcome::PricesLoaded(snapshot(101.5, 110.0, 99.25, 105.0)));
    let values = view.values();
    assert_eq!(values.company, "ACME");
    assert_eq!(values.open, "101.5");
    assert_eq!(values.high, "110");
    assert_eq!(values.low, "99.25");
    assert_eq!(values.close, "105");
    assert_eq!(repo.calls(), vec![Call::Latest("ACME".into())]);
}

#[test]
fn latest_price_failure_keeps_current_values() {
    let repo = MockRepository::new();
    let values = form("ACME", 1.0, 2.0, 0.5, 1.5);
    let view = RecordingView::with_values(values.clone());
    repo.reply_latest(Err(NetworkError::RequestFailed("connection refused".into())));

    let outcome = block_on(service(&repo, &view).load_latest_price("ACME"));

    assert!(matches!(outcome, HydrationOutcome::Failed(HydrationError::LatestQuote { .. })));
    assert_eq!(view.values(), values);
    assert_eq!(view.price_writes(), 0);
    assert_eq!(view.error().as_deref(), Some("Cannot load latest price for ACME."));
}

#[test]
fn rejected_lookup_is_reported_like_a_network_failure() {
    let repo = MockRepository::new();
    let view = RecordingView::with_values(form("ACME", 1.0, 2.0, 0.5, 1.5));
    repo.reply_latest(Err(NetworkError::ApiRejected("unknown company".into())));

    let outcome = block_on(service(&repo, &view).load_latest_price("ACME"));

    match outcome {
        HydrationOutcome::Failed(error) => {
            assert_eq!(error.source_error(), &NetworkError::ApiRejected("unknown company".into()));
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(view.error().is_some());
}

#[test]
fn hydration_error_hides_a_visible_result() {
    use stock_forecast_wasm::application::{FormView, ResultPanel};
    use stock_forecast_wasm::domain::forecast::{PredictionResult, Trend};

    let repo = MockRepository::new();
    let view = RecordingView::new();
    view.show_result(&ResultPanel::new(
        &PredictionResult { prediction: 13.5, trend: Trend::Up },
        12.0,
    ));
    repo.reply_companies(Err(server_error()));

    block_on(service(&repo, &view).load_companies());

    assert_eq!(view.result(), None);
    assert_eq!(view.overlaps(), 0);
}
