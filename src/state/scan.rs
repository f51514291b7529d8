//! Anomaly-scan form state: four numeric parameters, range validation, and
//! the toggle between the anomalies-only and all-signals views of one
//! fetched result.

use crate::api::types::{ScanResult, ScanSignal};
use crate::api::ScanOptions;

/// One numeric form field with its documented valid range.
#[derive(Debug, Clone)]
pub struct ScanField {
    pub label: &'static str,
    pub buffer: String,
    pub min: f64,
    pub max: f64,
    pub integer: bool,
}

impl ScanField {
    fn new(label: &'static str, default: &str, min: f64, max: f64, integer: bool) -> Self {
        Self {
            label,
            buffer: default.to_string(),
            min,
            max,
            integer,
        }
    }

    /// Parse and range-check the buffer.
    pub fn value(&self) -> Result<f64, String> {
        let value: f64 = self
            .buffer
            .parse()
            .map_err(|_| format!("{}: not a number", self.label))?;
        if self.integer && value.fract() != 0.0 {
            return Err(format!("{}: whole number required", self.label));
        }
        if value < self.min || value > self.max {
            return Err(format!(
                "{}: must be between {} and {}",
                self.label, self.min, self.max
            ));
        }
        Ok(value)
    }

    pub fn push_char(&mut self, c: char) {
        let numeric = c.is_ascii_digit() || (!self.integer && c == '.' && !self.buffer.contains('.'));
        if numeric && self.buffer.len() < 8 {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }
}

pub const FIELD_COUNT: usize = 4;

/// Which result view the table shows; switching performs no network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanView {
    #[default]
    Anomalies,
    All,
}

#[derive(Debug)]
pub struct ScanForm {
    pub fields: [ScanField; FIELD_COUNT],
    pub focused: usize,
    pub in_flight: bool,
    pub result: Option<ScanResult>,
    pub error: Option<String>,
    pub view: ScanView,
}

impl ScanForm {
    pub fn new() -> Self {
        Self {
            fields: [
                ScanField::new("Baseline days", "365", 30.0, 730.0, true),
                ScanField::new("Current window", "30", 7.0, 90.0, true),
                ScanField::new("Z-score threshold", "2.0", 1.0, 5.0, false),
                ScanField::new("Ticker limit", "25", 5.0, 503.0, true),
            ],
            focused: 0,
            in_flight: false,
            result: None,
            error: None,
            view: ScanView::default(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn focused_field_mut(&mut self) -> &mut ScanField {
        &mut self.fields[self.focused]
    }

    /// Validate all fields into request options. The first failing field
    /// reports; nothing is submitted on error.
    pub fn options(&self) -> Result<ScanOptions, String> {
        let baseline_days = self.fields[0].value()? as u32;
        let current_days = self.fields[1].value()? as u32;
        let std_threshold = self.fields[2].value()?;
        let limit = self.fields[3].value()? as u32;
        Ok(ScanOptions {
            limit,
            baseline_days,
            current_days,
            std_threshold,
        })
    }

    /// Rows for the active view, both sourced from the one fetched result.
    pub fn visible_signals(&self) -> &[ScanSignal] {
        match (&self.result, self.view) {
            (Some(result), ScanView::Anomalies) => &result.anomalies,
            (Some(result), ScanView::All) => &result.all_signals,
            (None, _) => &[],
        }
    }

    /// A fresh result resets to the default anomalies-only view.
    pub fn apply_result(&mut self, result: ScanResult) {
        self.error = result.error.clone();
        self.view = ScanView::Anomalies;
        self.result = Some(result);
        self.in_flight = false;
    }

    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.in_flight = false;
    }
}

impl Default for ScanForm {
    fn default() -> Self {
        Self::new()
    }
}
