use wasm_bindgen::prelude::*;

pub mod category;
pub mod clock;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod money;
pub mod report;
pub mod settings;
pub mod transaction;
pub mod view;

pub use category::Category;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ReportError, ValidationError};
pub use ledger::{Chronological, Ledger, Order};
pub use money::Money;
pub use report::{generate_report, generate_report_from_input, CategoryTotal, Report};
pub use settings::Settings;
pub use transaction::{AmountInput, Draft, Kind, Transaction, TransactionForm, TransactionId};
pub use view::{FeedRow, FeedView, ReportRow, ReportView};

/// The page's handle on one session: a ledger plus the settings used to
/// present it.
#[wasm_bindgen]
pub struct Tracker {
    ledger: Ledger,
    settings: Settings,
    clock: Box<dyn Clock>,
}

#[wasm_bindgen]
impl Tracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Tracker {
        Tracker::with_parts(Settings::default(), Box::new(SystemClock))
    }

    /// Builds a tracker from a (possibly partial) settings object.
    pub fn with_settings(js_settings: JsValue) -> Result<Tracker, JsError> {
        let settings: Settings = if js_settings.is_undefined() || js_settings.is_null() {
            Settings::default()
        } else {
            serde_wasm_bindgen::from_value(js_settings)
                .map_err(|e| JsError::new(&format!("invalid settings: {e}")))?
        };
        Ok(Tracker::with_parts(settings, Box::new(SystemClock)))
    }

    /// Validates the entry form and records it. Returns the new feed row.
    pub fn add_transaction(&mut self, js_form: JsValue) -> Result<JsValue, JsError> {
        let form: TransactionForm = serde_wasm_bindgen::from_value(js_form)
            .map_err(|e| JsError::new(&format!("invalid transaction form: {e}")))?;
        let row = self.submit(&form)?;
        to_js(&row)
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance().as_decimal()
    }

    pub fn formatted_balance(&self) -> String {
        self.settings.format_money(self.ledger.balance())
    }

    /// Newest-first feed rows with the balance, or the empty-state message.
    pub fn feed(&self) -> Result<JsValue, JsError> {
        to_js(&self.feed_view())
    }

    /// Stored transactions in `insertion` or `reverse` order. Amounts are
    /// integer cents.
    pub fn transactions(&self, order: &str) -> Result<js_sys::Array, JsError> {
        let order = order.parse::<Order>()?;
        let array = js_sys::Array::new();
        for transaction in self.ledger.list_chronological(order) {
            array.push(&to_js(transaction)?);
        }
        Ok(array)
    }

    /// Spending report for the inclusive `YYYY-MM-DD` range.
    pub fn report(&self, start: &str, end: &str) -> Result<JsValue, JsError> {
        let view = self.report_view(start, end)?;
        to_js(&view)
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.len()
    }
}

impl Tracker {
    pub fn with_parts(settings: Settings, clock: Box<dyn Clock>) -> Tracker {
        // Hook up panic handler for better debugging in browser console
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        logging::init_tracing(&settings.log_level);

        Tracker {
            ledger: Ledger::new(),
            settings,
            clock,
        }
    }

    pub fn submit(&mut self, form: &TransactionForm) -> Result<FeedRow, ValidationError> {
        let draft = form.parse(self.clock.today()).map_err(|e| {
            tracing::warn!(error = %e, "rejected transaction form");
            e
        })?;
        let transaction = self.ledger.append_draft(draft)?;
        Ok(FeedRow::new(transaction, &self.settings))
    }

    pub fn feed_view(&self) -> FeedView {
        view::feed(&self.ledger, &self.settings)
    }

    pub fn report_view(&self, start: &str, end: &str) -> Result<ReportView, ReportError> {
        let report = generate_report_from_input(&self.ledger, start, end).map_err(|e| {
            tracing::warn!(error = %e, "report request rejected");
            e
        })?;
        Ok(view::report_view(&report, &self.settings))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Tracker::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}
