//! Command palette state machine.
//!
//! A flattened, filtered action list under a clamped cursor. Company matches
//! come first, then static actions; items are grouped by section label in
//! first-seen order for rendering, while cross-section ordering stays
//! filter-result order.

use indexmap::IndexMap;

use crate::api::types::Company;
use crate::state::cursor::ListCursor;
use crate::state::route::Page;

const STOCK_MATCH_CAP: usize = 12;

/// What a confirmed palette item asks the controller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteAction {
    Go(Page),
    Reload,
    ForceRefresh,
    CopyStateLink,
    ClearSector,
    FilterSector(String),
    SelectStock(String),
}

#[derive(Debug, Clone)]
pub struct PaletteItem {
    pub label: String,
    pub section: &'static str,
    /// Secondary match field; company items match on symbol as well as name.
    pub alt: String,
    pub action: PaletteAction,
}

impl PaletteItem {
    fn fixed(label: &str, section: &'static str, action: PaletteAction) -> Self {
        Self {
            label: label.to_string(),
            section,
            alt: String::new(),
            action,
        }
    }

    /// Case-insensitive substring match against label or the alternate
    /// field.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.label.to_lowercase().contains(&q) || self.alt.to_lowercase().contains(&q)
    }
}

#[derive(Debug, Default)]
pub struct Palette {
    open: bool,
    query: String,
    items: Vec<PaletteItem>,
    cursor: ListCursor,
}

impl Palette {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[PaletteItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    /// Opening clears the query and resets the cursor to the top.
    pub fn open<'a>(
        &mut self,
        companies: impl Iterator<Item = &'a Company>,
        sectors: &[String],
    ) {
        self.open = true;
        self.query.clear();
        self.cursor.reset();
        self.rebuild(companies, sectors);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Append to the query; the caller follows up with [`Palette::rebuild`].
    pub fn query_push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Delete the last query character; the caller follows up with
    /// [`Palette::rebuild`].
    pub fn query_pop(&mut self) {
        self.query.pop();
    }

    pub fn cursor_down(&mut self) {
        self.cursor.down();
    }

    pub fn cursor_up(&mut self) {
        self.cursor.up();
    }

    pub fn cursor_set(&mut self, index: usize) {
        self.cursor.set(index);
    }

    /// Action at the cursor; `None` when the filtered list is empty.
    pub fn confirm(&self) -> Option<PaletteAction> {
        self.cursor
            .selected()
            .and_then(|i| self.items.get(i))
            .map(|item| item.action.clone())
    }

    /// Recompute the filtered item list; the cursor clamps to the new range.
    pub fn rebuild<'a>(
        &mut self,
        companies: impl Iterator<Item = &'a Company>,
        sectors: &[String],
    ) {
        let query = self.query.trim().to_string();
        let mut items = Vec::new();

        // Company results only appear once the user has typed something.
        if !query.is_empty() {
            let q = query.to_lowercase();
            items.extend(
                companies
                    .filter(|c| {
                        c.symbol.to_lowercase().contains(&q)
                            || c.name.to_lowercase().contains(&q)
                    })
                    .take(STOCK_MATCH_CAP)
                    .map(|c| PaletteItem {
                        label: format!("{} — {}", c.symbol, c.name),
                        section: "Stocks",
                        alt: c.symbol.clone(),
                        action: PaletteAction::SelectStock(c.symbol.clone()),
                    }),
            );
        }

        let mut fixed = vec![
            PaletteItem::fixed("Go to Dashboard", "Navigation", PaletteAction::Go(Page::Dashboard)),
            PaletteItem::fixed("Go to Anomaly Scan", "Navigation", PaletteAction::Go(Page::Scan)),
            PaletteItem::fixed("Go to Settings", "Navigation", PaletteAction::Go(Page::Settings)),
            PaletteItem::fixed("Reload Dashboard Data", "Actions", PaletteAction::Reload),
            PaletteItem::fixed("Force Dashboard Refresh", "Actions", PaletteAction::ForceRefresh),
            PaletteItem::fixed("Copy State Link", "Actions", PaletteAction::CopyStateLink),
            PaletteItem::fixed("Clear Sector Filter", "Actions", PaletteAction::ClearSector),
        ];
        fixed.extend(sectors.iter().map(|s| PaletteItem {
            label: format!("Filter: {s}"),
            section: "Sectors",
            alt: s.clone(),
            action: PaletteAction::FilterSector(s.clone()),
        }));

        if query.is_empty() {
            items.extend(fixed);
        } else {
            items.extend(fixed.into_iter().filter(|i| i.matches(&query)));
        }

        self.cursor.set_len(items.len());
        self.items = items;
    }

    /// Group items by section, preserving first-seen section order. Indices
    /// refer back into the flat filtered list.
    pub fn grouped(&self) -> IndexMap<&'static str, Vec<(usize, &PaletteItem)>> {
        let mut sections: IndexMap<&'static str, Vec<(usize, &PaletteItem)>> = IndexMap::new();
        for (idx, item) in self.items.iter().enumerate() {
            sections.entry(item.section).or_default().push((idx, item));
        }
        sections
    }
}
