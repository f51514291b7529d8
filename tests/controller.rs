use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use insider_term::api::types::{Company, DashboardSnapshot, ScanResult, ScanSignal, Sector};
use insider_term::api::ApiClient;
use insider_term::config::Settings;
use insider_term::state::route::{Page, ViewState};
use insider_term::state::scan::ScanView;
use insider_term::state::{App, Msg};
use tokio::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn snapshot(sector: &str, symbols: &[&str]) -> DashboardSnapshot {
    DashboardSnapshot {
        as_of: "2024-01-01".to_string(),
        total_companies: symbols.len(),
        sectors: vec![Sector {
            name: sector.to_string(),
            companies: symbols
                .iter()
                .map(|s| Company {
                    symbol: s.to_string(),
                    name: format!("{s} Inc."),
                    ..Company::default()
                })
                .collect(),
        }],
        available_sectors: vec![sector.to_string()],
        ..DashboardSnapshot::default()
    }
}

fn app_with(initial: ViewState) -> App {
    let settings = Settings::default();
    let client = ApiClient::new(&settings).expect("client builds");
    let (tx, _rx) = mpsc::unbounded_channel();
    App::new(settings, client, tx, initial)
}

#[test]
fn snapshot_applies_and_sizes_the_table_cursor() {
    let mut app = app_with(ViewState::default());
    app.apply(Msg::Dashboard {
        generation: 0,
        sector: None,
        result: Ok(snapshot("Technology", &["AAPL", "MSFT"])),
    });
    assert_eq!(app.table.len(), 2);
    assert!(app.error.is_none());
    assert!(!app.loading);
}

#[tokio::test]
async fn stale_generation_responses_are_discarded() {
    let mut app = app_with(ViewState::default());
    app.load(None); // generation 1
    app.load(None); // generation 2 supersedes it
    app.apply(Msg::Dashboard {
        generation: 1,
        sector: Some("Energy".to_string()),
        result: Ok(snapshot("Energy", &["XOM"])),
    });
    assert!(app.snapshot.is_none(), "stale response must not apply");

    app.apply(Msg::Dashboard {
        generation: 2,
        sector: None,
        result: Ok(snapshot("Technology", &["AAPL"])),
    });
    assert!(app.snapshot.is_some());
}

#[tokio::test]
async fn failed_reload_preserves_previous_snapshot() {
    let mut app = app_with(ViewState::default());
    app.load(None);
    app.apply(Msg::Dashboard {
        generation: 1,
        sector: None,
        result: Ok(snapshot("Technology", &["AAPL"])),
    });

    app.load(None);
    app.apply(Msg::Dashboard {
        generation: 2,
        sector: None,
        result: Err("connection refused".to_string()),
    });
    assert!(app.snapshot.is_some(), "stale data beats no data");
    assert_eq!(app.error.as_deref(), Some("connection refused"));
    assert!(!app.toasts.is_empty());
}

#[test]
fn body_level_error_is_surfaced_without_discarding_payload() {
    let mut app = app_with(ViewState::default());
    let mut snap = snapshot("Technology", &["AAPL"]);
    snap.error = Some("provider quota exceeded".to_string());
    app.apply(Msg::Dashboard {
        generation: 0,
        sector: None,
        result: Ok(snap),
    });
    assert!(app.snapshot.is_some());
    assert_eq!(app.error.as_deref(), Some("provider quota exceeded"));
}

#[test]
fn select_stock_is_a_toggle() {
    let mut app = app_with(ViewState::parse("sector=Technology"));
    app.select_stock("AAPL");
    assert_eq!(app.view().stock.as_deref(), Some("AAPL"));
    app.select_stock("AAPL");
    assert_eq!(app.view().stock, None);
    assert_eq!(app.view().sector.as_deref(), Some("Technology"));
}

#[tokio::test]
async fn change_sector_clears_stock_selection() {
    let mut app = app_with(ViewState::parse("sector=Tech&stock=AAPL"));
    app.change_sector("Energy");
    assert_eq!(app.view().serialize(), "sector=Energy");
}

#[test]
fn selection_not_in_snapshot_is_treated_as_absent() {
    let mut app = app_with(ViewState::parse("stock=TSLA"));
    app.apply(Msg::Dashboard {
        generation: 0,
        sector: None,
        result: Ok(snapshot("Technology", &["AAPL"])),
    });
    assert!(app.selected_company().is_none());
}

#[test]
fn close_detail_keeps_sector() {
    let mut app = app_with(ViewState::parse("sector=Tech&stock=AAPL"));
    app.close_detail();
    assert_eq!(app.view().serialize(), "sector=Tech");
}

#[test]
fn history_back_restores_prior_selection() {
    let mut app = app_with(ViewState::default());
    app.apply(Msg::Dashboard {
        generation: 0,
        sector: None,
        result: Ok(snapshot("Technology", &["AAPL"])),
    });
    app.select_stock("AAPL");
    app.history_back();
    assert_eq!(app.view().stock, None);
    app.history_forward();
    assert_eq!(app.view().stock.as_deref(), Some("AAPL"));
}

#[test]
fn scan_result_defaults_to_anomalies_view() {
    let mut app = app_with(ViewState::default());
    app.scan.in_flight = true;
    let anomalies: Vec<ScanSignal> = (0..3)
        .map(|i| ScanSignal {
            ticker: format!("T{i}"),
            current_shares_sold: 1000.0,
            baseline_mean: 100.0,
            baseline_std: 10.0,
            z_score: 3.0,
            is_anomaly: true,
        })
        .collect();
    let mut all_signals = anomalies.clone();
    all_signals.push(ScanSignal {
        ticker: "OK".to_string(),
        current_shares_sold: 90.0,
        baseline_mean: 100.0,
        baseline_std: 10.0,
        z_score: -1.0,
        is_anomaly: false,
    });
    app.apply(Msg::Scan(Ok(ScanResult {
        tickers_count: 4,
        records_count: 40,
        anomalies_count: 3,
        anomalies,
        all_signals,
        ..ScanResult::default()
    })));

    assert!(!app.scan.in_flight, "trigger re-enabled on completion");
    let visible = app.scan.visible_signals();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|s| s.is_anomaly));
}

#[test]
fn scan_fields_capture_digits_without_navigating() {
    let mut app = app_with(ViewState::default());
    app.goto(Page::Scan);
    for _ in 0..3 {
        app.on_key(key(KeyCode::Backspace));
    }
    for c in ['1', '2', '3'] {
        app.on_key(key(KeyCode::Char(c)));
    }
    assert_eq!(app.page, Page::Scan, "typing digits must not switch pages");
    assert_eq!(app.scan.fields[0].buffer, "123");
}

#[test]
fn single_key_shortcuts_are_suppressed_while_a_scan_field_has_focus() {
    let mut app = app_with(ViewState::default());
    app.goto(Page::Scan);
    app.on_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit, "q belongs to the focused field, not quit");
    assert_eq!(app.scan.fields[0].buffer, "365", "non-numeric input ignored");
    app.on_key(key(KeyCode::Char('r')));
    assert!(!app.loading, "r must not trigger a dashboard reload here");
}

#[test]
fn view_toggle_key_flips_between_anomalies_and_all() {
    let mut app = app_with(ViewState::default());
    app.goto(Page::Scan);
    app.on_key(key(KeyCode::Char('a')));
    assert_eq!(app.scan.view, ScanView::All);
    app.on_key(key(KeyCode::Char('a')));
    assert_eq!(app.scan.view, ScanView::Anomalies);
}

#[test]
fn page_shortcuts_still_navigate_outside_the_scan_form() {
    let mut app = app_with(ViewState::default());
    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.page, Page::Scan);
}

#[tokio::test]
async fn clearing_the_sector_filter_loads_without_a_sector_scope() {
    let settings = Settings {
        api_base_url: "http://127.0.0.1:9".to_string(),
        http_timeout_secs: 1,
        ..Settings::default()
    };
    let client = ApiClient::new(&settings).expect("client builds");
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(settings, client, tx, ViewState::parse("sector=Energy"));

    app.change_sector("");
    let msg = rx.recv().await.expect("fetch reports back");
    let Msg::Dashboard { sector, .. } = msg else {
        panic!("dashboard message expected");
    };
    assert_eq!(sector, None, "empty filter must not be sent as a sector");
}

#[test]
fn snapshot_arrival_refreshes_an_open_palette() {
    let mut app = app_with(ViewState::default());
    app.on_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
    for c in ['a', 'a'] {
        app.on_key(key(KeyCode::Char(c)));
    }
    assert!(
        app.palette.items().iter().all(|i| i.section != "Stocks"),
        "no data, no company entries"
    );

    app.apply(Msg::Dashboard {
        generation: 0,
        sector: None,
        result: Ok(snapshot("Technology", &["AAPL"])),
    });
    assert!(
        app.palette
            .items()
            .iter()
            .any(|i| i.section == "Stocks" && i.label.contains("AAPL")),
        "arriving data must show up without another keystroke"
    );
}

#[test]
fn scan_failure_reenables_the_trigger() {
    let mut app = app_with(ViewState::default());
    app.scan.in_flight = true;
    app.apply(Msg::Scan(Err("timeout".to_string())));
    assert!(!app.scan.in_flight);
    assert_eq!(app.scan.error.as_deref(), Some("timeout"));
}
