use insider_term::api::types::Company;
use insider_term::state::palette::{Palette, PaletteAction};
use proptest::prelude::*;

fn company(symbol: &str, name: &str) -> Company {
    Company {
        symbol: symbol.to_string(),
        name: name.to_string(),
        ..Company::default()
    }
}

fn companies() -> Vec<Company> {
    vec![
        company("AAPL", "Apple Inc."),
        company("MSFT", "Microsoft Corporation"),
        company("XOM", "Exxon Mobil"),
    ]
}

fn sectors() -> Vec<String> {
    vec!["Technology".to_string(), "Energy".to_string()]
}

fn open_with_query(query: &str) -> Palette {
    let companies = companies();
    let sectors = sectors();
    let mut palette = Palette::default();
    palette.open(companies.iter(), &sectors);
    for c in query.chars() {
        palette.query_push(c);
    }
    palette.rebuild(companies.iter(), &sectors);
    palette
}

#[test]
fn empty_query_lists_all_static_actions_and_no_stocks() {
    let palette = open_with_query("");
    assert!(palette.items().iter().all(|i| i.section != "Stocks"));
    assert!(palette
        .items()
        .iter()
        .any(|i| i.label == "Go to Dashboard"));
    assert!(palette
        .items()
        .iter()
        .any(|i| i.label == "Filter: Energy"));
}

#[test]
fn query_matches_symbol_or_name_case_insensitively() {
    let palette = open_with_query("aap");
    assert_eq!(
        palette.confirm(),
        Some(PaletteAction::SelectStock("AAPL".to_string()))
    );

    let palette = open_with_query("microsoft");
    assert!(matches!(
        palette.confirm(),
        Some(PaletteAction::SelectStock(s)) if s == "MSFT"
    ));
}

#[test]
fn stocks_precede_static_actions_and_sections_keep_first_seen_order() {
    let palette = open_with_query("e");
    let grouped = palette.grouped();
    let sections: Vec<&str> = grouped.keys().copied().collect();
    assert_eq!(sections.first(), Some(&"Stocks"));
    // Flat indices inside each section stay in filter-result order.
    for items in grouped.values() {
        let indices: Vec<usize> = items.iter().map(|(i, _)| *i).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }
}

#[test]
fn no_results_confirm_is_noop() {
    let palette = open_with_query("zzzzzz");
    assert!(palette.items().is_empty());
    assert_eq!(palette.confirm(), None);
}

#[test]
fn reopening_clears_query_and_cursor() {
    let companies = companies();
    let sectors = sectors();
    let mut palette = open_with_query("aap");
    palette.cursor_down();
    palette.close();
    palette.open(companies.iter(), &sectors);
    assert_eq!(palette.query(), "");
    assert_eq!(palette.cursor(), 0);
}

#[test]
fn filter_shrink_clamps_cursor() {
    let companies = companies();
    let sectors = sectors();
    let mut palette = Palette::default();
    palette.open(companies.iter(), &sectors);
    for _ in 0..20 {
        palette.cursor_down();
    }
    let wide = palette.cursor();
    assert!(wide < palette.items().len());

    for c in "dashboard".chars() {
        palette.query_push(c);
    }
    palette.rebuild(companies.iter(), &sectors);
    assert!(palette.items().len() < wide + 1);
    assert!(palette.cursor() < palette.items().len());
}

proptest! {
    // Every filtered item matches the query in at least one of its two
    // matched fields.
    #[test]
    fn filtered_items_contain_query(query in "[a-zA-Z]{1,6}") {
        let palette = open_with_query(&query);
        let q = query.to_lowercase();
        for item in palette.items() {
            let label = item.label.to_lowercase();
            let alt = item.alt.to_lowercase();
            prop_assert!(label.contains(&q) || alt.contains(&q));
        }
    }

    // Cursor stays in [0, max(0, len-1)] under arbitrary key sequences.
    #[test]
    fn cursor_never_leaves_bounds(query in "[a-z]{0,4}", moves in proptest::collection::vec(any::<bool>(), 0..40)) {
        let mut palette = open_with_query(&query);
        for down in moves {
            if down {
                palette.cursor_down();
            } else {
                palette.cursor_up();
            }
            if palette.items().is_empty() {
                prop_assert_eq!(palette.cursor(), 0);
            } else {
                prop_assert!(palette.cursor() < palette.items().len());
            }
        }
    }
}
