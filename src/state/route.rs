//! Serializable view state and navigation history.
//!
//! Selection and filter state live in one small struct with pure
//! `parse`/`serialize` functions; everything the shell renders derives from
//! the current entry, so back/forward navigation and shareable state links
//! need no extra plumbing.

/// The dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Scan,
    Settings,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "S&P 500 Dashboard",
            Page::Scan => "Anomaly Scan",
            Page::Settings => "Settings",
        }
    }
}

/// Filter and selection state, the analogue of a shareable query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Active sector filter; `None` means all sectors.
    pub sector: Option<String>,
    /// Selected company symbol; drives detail-panel visibility.
    pub stock: Option<String>,
}

impl ViewState {
    /// Parse a `key=value&key=value` state string. Unknown keys are dropped;
    /// empty values are treated as absent.
    pub fn parse(input: &str) -> Self {
        let mut state = Self::default();
        for pair in input.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let raw = parts.next().unwrap_or_default();
            let value = urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            if value.is_empty() {
                continue;
            }
            match key {
                "sector" => state.sector = Some(value),
                "stock" => state.stock = Some(value),
                _ => {}
            }
        }
        state
    }

    /// Serialize back to a state string. Absent components are omitted.
    pub fn serialize(&self) -> String {
        let mut parts = Vec::new();
        if let Some(sector) = &self.sector {
            parts.push(format!("sector={}", urlencoding::encode(sector)));
        }
        if let Some(stock) = &self.stock {
            parts.push(format!("stock={}", urlencoding::encode(stock)));
        }
        parts.join("&")
    }

    /// Toggle semantics: selecting an already-selected symbol clears it.
    pub fn toggle_stock(&mut self, symbol: &str) {
        if self.stock.as_deref() == Some(symbol) || symbol.is_empty() {
            self.stock = None;
        } else {
            self.stock = Some(symbol.to_string());
        }
    }

    /// Set or clear the sector filter; always drops the stock selection.
    pub fn set_sector(&mut self, sector: &str) {
        self.sector = (!sector.is_empty()).then(|| sector.to_string());
        self.stock = None;
    }
}

const HISTORY_CAP: usize = 64;

/// Bounded view-state history with back/forward traversal.
#[derive(Debug)]
pub struct History {
    entries: Vec<ViewState>,
    cursor: usize,
}

impl History {
    pub fn new(initial: ViewState) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &ViewState {
        &self.entries[self.cursor]
    }

    /// Push a new state, truncating any forward entries. Pushing the current
    /// state again is a no-op so key repeats do not pollute history.
    pub fn push(&mut self, state: ViewState) {
        if *self.current() == state {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        if self.entries.len() > HISTORY_CAP {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back; returns the new current state when a step was taken.
    pub fn back(&mut self) -> Option<&ViewState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward; returns the new current state when a step was taken.
    pub fn forward(&mut self) -> Option<&ViewState> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_back_forward_round_trip() {
        let mut history = History::default();
        let mut state = ViewState::default();
        state.set_sector("Technology");
        history.push(state.clone());
        state.toggle_stock("AAPL");
        history.push(state);

        assert_eq!(history.current().stock.as_deref(), Some("AAPL"));
        assert_eq!(history.back().and_then(|s| s.stock.clone()), None);
        assert_eq!(
            history.forward().and_then(|s| s.stock.clone()).as_deref(),
            Some("AAPL")
        );
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = History::default();
        history.push(ViewState::parse("sector=Energy"));
        history.back();
        history.push(ViewState::parse("sector=Utilities"));
        assert!(history.forward().is_none());
        assert_eq!(history.current().sector.as_deref(), Some("Utilities"));
    }
}
