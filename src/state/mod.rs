//! View-state controller: the single source of truth reconciling the active
//! page, the serializable view state, and fetched server data.
//!
//! All mutation happens on the event-loop task. Network calls run as spawned
//! tasks that report back through the message channel; dashboard responses
//! carry a generation stamp and stale ones are discarded on application, so
//! the last *request* wins rather than the last response to arrive.

pub mod cursor;
pub mod palette;
pub mod route;
pub mod scan;
pub mod toast;

use std::cmp::Ordering;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::types::{Company, DashboardSnapshot, HealthStatus, ScanResult};
use crate::api::{ApiClient, ScanOptions};
use crate::config::Settings;
use cursor::ListCursor;
use palette::{Palette, PaletteAction};
use route::{History, Page, ViewState};
use scan::{ScanForm, ScanView};
use toast::{Notifier, Severity};

/// Lifecycle of one remotely fetched value.
#[derive(Debug, Clone, Default)]
pub enum Remote<T> {
    #[default]
    NotStarted,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Completed asynchronous work, applied on the event-loop task.
#[derive(Debug)]
pub enum Msg {
    Dashboard {
        generation: u64,
        sector: Option<String>,
        result: Result<DashboardSnapshot, String>,
    },
    Scan(Result<ScanResult, String>),
    RefreshDone(Result<(), String>),
    Health(Result<HealthStatus, String>),
    Providers(Result<serde_json::Value, String>),
}

/// In-sector ordering of company rows; a pure reordering at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Natural,
    ChangeDesc,
    PriceDesc,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            SortMode::Natural => SortMode::ChangeDesc,
            SortMode::ChangeDesc => SortMode::PriceDesc,
            SortMode::PriceDesc => SortMode::Natural,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Natural => "natural",
            SortMode::ChangeDesc => "% change",
            SortMode::PriceDesc => "price",
        }
    }
}

/// One row of the flattened dashboard table.
#[derive(Debug)]
pub enum FlatRow<'a> {
    Header { name: &'a str, count: usize },
    Company(&'a Company),
}

/// Screen regions recorded by the renderer each frame so mouse events can be
/// hit-tested back onto list indices. Hover and keyboard cursor are unified.
#[derive(Debug, Default)]
pub struct HitRegions {
    pub table: Option<Rect>,
    /// Screen row to company-cursor index for visible table rows.
    pub table_rows: Vec<(u16, usize)>,
    pub palette: Option<Rect>,
    /// Screen row to palette item index for visible palette rows.
    pub palette_rows: Vec<(u16, usize)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.table = None;
        self.table_rows.clear();
        self.palette = None;
        self.palette_rows.clear();
    }
}

pub struct App {
    pub settings: Settings,
    client: ApiClient,
    tx: mpsc::UnboundedSender<Msg>,

    pub page: Page,
    pub history: History,
    pub snapshot: Option<DashboardSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
    /// Sector the current snapshot was fetched for; drives reload decisions
    /// on history traversal.
    loaded_sector: Option<String>,

    pub sort: SortMode,
    pub table: ListCursor,
    /// First visible company row, maintained by the renderer for
    /// scroll-into-view.
    pub table_offset: usize,

    pub palette: Palette,
    pub scan: ScanForm,
    pub toasts: Notifier,
    pub health: Remote<HealthStatus>,
    pub providers: Remote<serde_json::Value>,

    pub hit: HitRegions,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        settings: Settings,
        client: ApiClient,
        tx: mpsc::UnboundedSender<Msg>,
        initial: ViewState,
    ) -> Self {
        Self {
            settings,
            client,
            tx,
            page: Page::Dashboard,
            history: History::new(initial),
            snapshot: None,
            loading: false,
            error: None,
            generation: 0,
            loaded_sector: None,
            sort: SortMode::default(),
            table: ListCursor::default(),
            table_offset: 0,
            palette: Palette::default(),
            scan: ScanForm::new(),
            toasts: Notifier::new(),
            health: Remote::NotStarted,
            providers: Remote::NotStarted,
            hit: HitRegions::default(),
            should_quit: false,
        }
    }

    pub fn view(&self) -> &ViewState {
        self.history.current()
    }

    pub fn sector(&self) -> Option<&str> {
        self.view().sector.as_deref()
    }

    /// The selected company, resolved against the current snapshot. A stock
    /// component that no longer resolves is treated as absent.
    pub fn selected_company(&self) -> Option<&Company> {
        let symbol = self.view().stock.as_deref()?;
        self.snapshot.as_ref()?.company(symbol)
    }

    /// Sector-grouped rows with the active sort applied. Missing sort keys
    /// order last within their sector.
    pub fn flat_rows(&self) -> Vec<FlatRow<'_>> {
        let Some(snapshot) = &self.snapshot else {
            return Vec::new();
        };
        let mut rows = Vec::new();
        for sector in &snapshot.sectors {
            rows.push(FlatRow::Header {
                name: &sector.name,
                count: sector.companies.len(),
            });
            let mut companies: Vec<&Company> = sector.companies.iter().collect();
            match self.sort {
                SortMode::Natural => {}
                SortMode::ChangeDesc => companies.sort_by(|a, b| desc_opt(a.change_pct, b.change_pct)),
                SortMode::PriceDesc => companies.sort_by(|a, b| desc_opt(a.price, b.price)),
            }
            rows.extend(companies.into_iter().map(FlatRow::Company));
        }
        rows
    }

    /// Company under the table cursor, in flattened/sorted order.
    pub fn focused_company(&self) -> Option<&Company> {
        let target = self.table.selected()?;
        self.flat_rows()
            .into_iter()
            .filter_map(|row| match row {
                FlatRow::Company(c) => Some(c),
                FlatRow::Header { .. } => None,
            })
            .nth(target)
    }

    // ---- operations -------------------------------------------------------

    /// Issue a dashboard fetch for the given sector (or the current one).
    /// Bumps the generation; any response from a superseded load is dropped
    /// when it eventually arrives.
    pub fn load(&mut self, sector_override: Option<String>) {
        // An empty override means "all sectors"; normalize before the fetch
        // so `loaded_sector` compares cleanly against the view state.
        let sector = sector_override
            .or_else(|| self.view().sector.clone())
            .filter(|s| !s.is_empty());
        self.generation += 1;
        self.loading = true;
        self.error = None;

        let generation = self.generation;
        let limit = self.settings.page_limit;
        let client = self.client.clone();
        let tx = self.tx.clone();
        info!(generation, ?sector, "loading dashboard");
        tokio::spawn(async move {
            let result = client
                .dashboard(sector.as_deref(), limit)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Msg::Dashboard {
                generation,
                sector,
                result,
            });
        });
    }

    /// Rewrite the sector filter, clear any stock selection, reload scoped
    /// to the new sector.
    pub fn change_sector(&mut self, sector: &str) {
        let mut next = self.view().clone();
        next.set_sector(sector);
        self.history.push(next);
        self.load(Some(sector.to_string()));
    }

    /// Toggle the stock selection: same symbol twice returns to no
    /// selection.
    pub fn select_stock(&mut self, symbol: &str) {
        let mut next = self.view().clone();
        next.toggle_stock(symbol);
        self.history.push(next);
    }

    /// Clear the stock selection, leaving the sector filter untouched.
    pub fn close_detail(&mut self) {
        let mut next = self.view().clone();
        next.stock = None;
        self.history.push(next);
    }

    pub fn history_back(&mut self) {
        if self.history.back().is_some() {
            self.after_history_step();
        }
    }

    pub fn history_forward(&mut self) {
        if self.history.forward().is_some() {
            self.after_history_step();
        }
    }

    fn after_history_step(&mut self) {
        if self.view().sector != self.loaded_sector {
            self.load(None);
        }
    }

    pub fn run_scan(&mut self) {
        if self.scan.in_flight {
            return;
        }
        let opts = match self.scan.options() {
            Ok(opts) => opts,
            Err(message) => {
                self.scan.error = Some(message);
                return;
            }
        };
        self.scan.in_flight = true;
        self.scan.error = None;
        self.spawn_scan(opts);
    }

    fn spawn_scan(&self, opts: ScanOptions) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.scan(opts).await.map_err(|e| e.to_string());
            let _ = tx.send(Msg::Scan(result));
        });
    }

    pub fn trigger_refresh(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.refresh().await.map_err(|e| e.to_string());
            let _ = tx.send(Msg::RefreshDone(result));
        });
    }

    fn fetch_diagnostics(&mut self) {
        self.health = Remote::Loading;
        self.providers = Remote::Loading;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let health = client.health().await.map_err(|e| e.to_string());
            let _ = tx.send(Msg::Health(health));
            let providers = client.providers().await.map_err(|e| e.to_string());
            let _ = tx.send(Msg::Providers(providers));
        });
    }

    pub fn goto(&mut self, page: Page) {
        self.page = page;
        if page == Page::Settings {
            self.fetch_diagnostics();
        }
    }

    // ---- message application ---------------------------------------------

    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::Dashboard {
                generation,
                sector,
                result,
            } => {
                if generation != self.generation {
                    debug!(generation, latest = self.generation, "dropping stale dashboard response");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(snapshot) => {
                        // A body-level error is surfaced without discarding
                        // the payload that carried it.
                        self.error = snapshot.error.clone();
                        let count = snapshot.all_companies().count();
                        self.snapshot = Some(snapshot);
                        self.loaded_sector = sector;
                        self.table.set_len(count);
                        // Refresh an open palette so company results reflect
                        // the data that just arrived.
                        if self.palette.is_open() {
                            self.rebuild_palette(|_| {});
                        }
                    }
                    Err(message) => {
                        // Previous snapshot is preserved; the error renders
                        // as a banner over it.
                        warn!(%message, "dashboard load failed");
                        self.toasts.notify(message.clone(), Severity::Error);
                        self.error = Some(message);
                    }
                }
            }
            Msg::Scan(result) => match result {
                Ok(result) => self.scan.apply_result(result),
                Err(message) => {
                    self.toasts.notify(message.clone(), Severity::Error);
                    self.scan.apply_error(message);
                }
            },
            Msg::RefreshDone(result) => match result {
                Ok(()) => {
                    self.toasts
                        .notify("Dashboard refresh triggered", Severity::Success);
                }
                Err(message) => {
                    self.toasts
                        .notify(format!("Refresh failed: {message}"), Severity::Error);
                }
            },
            Msg::Health(result) => {
                self.health = match result {
                    Ok(status) => Remote::Loaded(status),
                    Err(message) => Remote::Failed(message),
                };
            }
            Msg::Providers(result) => {
                self.providers = match result {
                    Ok(value) => Remote::Loaded(value),
                    Err(message) => Remote::Failed(message),
                };
            }
        }
    }

    /// Expire old toasts; called from the render tick so expiry is
    /// independent of network state.
    pub fn tick(&mut self) {
        self.toasts.sweep(Instant::now());
    }

    // ---- input routing ----------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        // Palette toggle works from anywhere, even mid-load.
        if key.code == KeyCode::Char('k') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.palette.is_open() {
                self.palette.close();
            } else {
                self.open_palette();
            }
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.palette.is_open() {
            self.on_palette_key(key);
            return;
        }

        // A scan field always has focus on the scan page, so printable
        // shortcuts would shadow digit entry there; the form sees every key
        // and the palette remains the way off the page.
        if self.page == Page::Scan {
            self.on_scan_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.goto(Page::Dashboard),
            KeyCode::Char('2') => self.goto(Page::Scan),
            KeyCode::Char('3') => self.goto(Page::Settings),
            KeyCode::Char('[') => self.history_back(),
            KeyCode::Char(']') => self.history_forward(),
            KeyCode::Char('r') => self.load(None),
            KeyCode::Esc => {
                if self.view().stock.is_some() {
                    self.close_detail();
                }
            }
            _ => match self.page {
                Page::Dashboard => self.on_dashboard_key(key),
                Page::Settings => self.on_settings_key(key),
                Page::Scan => {}
            },
        }
    }

    fn open_palette(&mut self) {
        let companies: Vec<&Company> = self
            .snapshot
            .iter()
            .flat_map(|s| s.all_companies())
            .collect();
        let sectors = self
            .snapshot
            .as_ref()
            .map(|s| s.available_sectors.clone())
            .unwrap_or_default();
        self.palette.open(companies.into_iter(), &sectors);
    }

    fn rebuild_palette(&mut self, edit: impl FnOnce(&mut Palette)) {
        edit(&mut self.palette);
        let companies: Vec<&Company> = self
            .snapshot
            .iter()
            .flat_map(|s| s.all_companies())
            .collect();
        let sectors = self
            .snapshot
            .as_ref()
            .map(|s| s.available_sectors.clone())
            .unwrap_or_default();
        self.palette.rebuild(companies.into_iter(), &sectors);
    }

    fn on_palette_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.palette.close(),
            KeyCode::Down => self.palette.cursor_down(),
            KeyCode::Up => self.palette.cursor_up(),
            KeyCode::Enter => {
                if let Some(action) = self.palette.confirm() {
                    self.palette.close();
                    self.run_action(action);
                }
            }
            KeyCode::Backspace => {
                self.rebuild_palette(|p| {
                    p.query_pop();
                });
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.rebuild_palette(|p| {
                    p.query_push(c);
                });
            }
            _ => {}
        }
    }

    fn run_action(&mut self, action: PaletteAction) {
        match action {
            PaletteAction::Go(page) => self.goto(page),
            PaletteAction::Reload => self.load(None),
            PaletteAction::ForceRefresh => self.trigger_refresh(),
            PaletteAction::CopyStateLink => {
                let link = self.view().serialize();
                let message = if link.is_empty() {
                    "State link: (default view)".to_string()
                } else {
                    format!("State link: {link}")
                };
                self.toasts.notify(message, Severity::Info);
            }
            PaletteAction::ClearSector => self.change_sector(""),
            PaletteAction::FilterSector(sector) => self.change_sector(&sector),
            PaletteAction::SelectStock(symbol) => {
                self.page = Page::Dashboard;
                self.select_stock(&symbol);
            }
        }
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.table.down(),
            KeyCode::Char('k') | KeyCode::Up => self.table.up(),
            KeyCode::Char('o') => self.sort = self.sort.next(),
            KeyCode::Char('c') => self.change_sector(""),
            KeyCode::Enter => {
                if let Some(symbol) = self.focused_company().map(|c| c.symbol.clone()) {
                    self.select_stock(&symbol);
                }
            }
            _ => {}
        }
    }

    fn on_scan_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.scan.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.scan.focus_prev(),
            KeyCode::Enter => self.run_scan(),
            KeyCode::Backspace => self.scan.focused_field_mut().backspace(),
            KeyCode::Char('a') => {
                self.scan.view = match self.scan.view {
                    ScanView::Anomalies => ScanView::All,
                    ScanView::All => ScanView::Anomalies,
                };
            }
            KeyCode::Char(c) => self.scan.focused_field_mut().push_char(c),
            _ => {}
        }
    }

    fn on_settings_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('f') {
            self.trigger_refresh();
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                if self.palette.is_open() {
                    if let Some(idx) = hit_row(&self.hit.palette_rows, self.hit.palette, position) {
                        self.palette.cursor_set(idx);
                    }
                } else if let Some(idx) = hit_row(&self.hit.table_rows, self.hit.table, position) {
                    self.table.set(idx);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.palette.is_open() {
                    if let Some(idx) = hit_row(&self.hit.palette_rows, self.hit.palette, position) {
                        self.palette.cursor_set(idx);
                        if let Some(action) = self.palette.confirm() {
                            self.palette.close();
                            self.run_action(action);
                        }
                    }
                } else if let Some(idx) = hit_row(&self.hit.table_rows, self.hit.table, position) {
                    self.table.set(idx);
                    if let Some(symbol) = self.focused_company().map(|c| c.symbol.clone()) {
                        self.select_stock(&symbol);
                    }
                }
            }
            _ => {}
        }
    }
}

fn hit_row(rows: &[(u16, usize)], area: Option<Rect>, position: Position) -> Option<usize> {
    let area = area?;
    if !area.contains(position) {
        return None;
    }
    rows.iter()
        .find(|(y, _)| *y == position.y)
        .map(|(_, idx)| *idx)
}

/// Descending comparison where missing values sort last.
fn desc_opt(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
