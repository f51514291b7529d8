use insider_term::state::route::ViewState;

#[test]
fn parse_reads_sector_and_stock() {
    let state = ViewState::parse("sector=Information%20Technology&stock=AAPL");
    assert_eq!(state.sector.as_deref(), Some("Information Technology"));
    assert_eq!(state.stock.as_deref(), Some("AAPL"));
}

#[test]
fn parse_drops_unknown_keys_and_empty_values() {
    let state = ViewState::parse("?sector=&stock=MSFT&theme=dark");
    assert_eq!(state.sector, None);
    assert_eq!(state.stock.as_deref(), Some("MSFT"));
}

#[test]
fn serialize_round_trips() {
    let state = ViewState::parse("sector=Health%20Care&stock=JNJ");
    assert_eq!(ViewState::parse(&state.serialize()), state);
}

#[test]
fn toggle_same_symbol_twice_restores_original_state() {
    let mut state = ViewState::parse("sector=Technology");
    let original = state.serialize();
    state.toggle_stock("AAPL");
    assert_eq!(state.stock.as_deref(), Some("AAPL"));
    state.toggle_stock("AAPL");
    assert_eq!(state.stock, None);
    assert_eq!(state.serialize(), original);
}

#[test]
fn changing_sector_clears_stock_selection() {
    let mut state = ViewState::parse("sector=Tech&stock=AAPL");
    state.set_sector("Energy");
    assert_eq!(state.serialize(), "sector=Energy");
}

#[test]
fn clearing_sector_also_clears_stock() {
    let mut state = ViewState::parse("sector=Tech&stock=AAPL");
    state.set_sector("");
    assert_eq!(state.serialize(), "");
}
