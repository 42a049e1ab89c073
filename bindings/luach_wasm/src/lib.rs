//! WASM bindings for luach.
//!
//! The kiosk calls `report` once per day and resolves its configured prayer
//! rows against the returned times. Failures are thrown as
//! `{ message, clientError }` objects.

use luach_core::{
    DayReport, Luach, LuachConfig, LuachError, PrayerRecord, ResolvedPrayer, ZmanimRequest,
};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// What the kiosk receives when a call fails.
///
/// `client_error` is set when the caller sent something unusable (bad
/// coordinates, an unsupported date, an unknown zone, a malformed row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, tsify::Tsify)]
#[serde(rename_all = "camelCase")]
#[tsify(into_wasm_abi)]
pub struct WasmError {
    pub message: String,
    pub client_error: bool,
}

impl From<&LuachError> for WasmError {
    fn from(err: &LuachError) -> Self {
        Self {
            message: err.to_string(),
            client_error: err.is_client_error(),
        }
    }
}

impl WasmError {
    /// Values coming from JS that do not deserialize are the caller's fault.
    fn malformed(e: impl std::fmt::Display) -> Self {
        Self {
            message: e.to_string(),
            client_error: true,
        }
    }

    fn into_js_value(self) -> JsValue {
        let message = self.message.clone();
        to_js(&self).unwrap_or_else(|_| JsValue::from_str(&message))
    }
}

fn engine_error(err: LuachError) -> JsValue {
    WasmError::from(&err).into_js_value()
}

/// Plain objects, never JS `Map`s, so the times read as `report.times.sunset`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WasmError::malformed(e).into_js_value())
}

fn request(lat: f64, lng: f64, date: Option<String>) -> ZmanimRequest {
    ZmanimRequest {
        latitude: Some(lat),
        longitude: Some(lng),
        date,
    }
}

/// Day report with the default (Jerusalem) configuration.
///
/// # Example (JavaScript)
/// ```js
/// const r = report(31.7683, -35.2137, "2025-06-20");
/// console.log(r.parasha, r.times.shabbatCandles22);
/// ```
#[wasm_bindgen]
pub fn report(lat: f64, lng: f64, date: Option<String>) -> Result<JsValue, JsValue> {
    let report = Luach::default().handle(&request(lat, lng, date)).map_err(engine_error)?;
    to_js(&report)
}

/// Resolves one prayer row (`{name, time?, zman?, offset?}`) against a
/// report. Returns `"HH:MM"`, or `undefined` when it cannot be resolved.
#[wasm_bindgen(js_name = resolvePrayer)]
pub fn resolve_prayer(entry: JsValue, report: JsValue) -> Result<Option<String>, JsValue> {
    let record: PrayerRecord = from_js(entry)?;
    let report: DayReport = from_js(report)?;
    Ok(luach_core::resolve_record(&record, &report.times)
        .time()
        .map(|t| t.format("%H:%M").to_string()))
}

/// A resolved row for TypeScript consumers.
#[derive(Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct WasmPrayer {
    pub name: String,
    pub time: Option<String>,
}

impl From<ResolvedPrayer> for WasmPrayer {
    fn from(prayer: ResolvedPrayer) -> Self {
        Self {
            name: prayer.name,
            time: prayer.time.time().map(|t| t.format("%H:%M").to_string()),
        }
    }
}

/// Engine configured for one board.
///
/// # Example (JavaScript)
/// ```js
/// const board = new Board('{"rabbeinu_tam_minutes": 90}');
/// const r = board.report(31.7683, -35.2137);
/// const rows = board.resolveSchedule(prayers, r);
/// ```
#[wasm_bindgen]
pub struct Board {
    engine: Luach,
}

#[wasm_bindgen]
impl Board {
    /// `config` is the JSON form of the board configuration; omit for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<Board, JsValue> {
        console_error_panic_hook::set_once();
        let config = match config.as_deref() {
            Some(json) => LuachConfig::from_json(json),
            None => Ok(LuachConfig::default()),
        }
        .map_err(engine_error)?;
        let engine = Luach::new(config).map_err(engine_error)?;
        Ok(Board { engine })
    }

    pub fn report(&self, lat: f64, lng: f64, date: Option<String>) -> Result<JsValue, JsValue> {
        let report = self
            .engine
            .handle(&request(lat, lng, date))
            .map_err(engine_error)?;
        to_js(&report)
    }

    #[wasm_bindgen(js_name = resolveSchedule)]
    pub fn resolve_schedule(&self, rows: JsValue, report: JsValue) -> Result<JsValue, JsValue> {
        let records: Vec<PrayerRecord> = from_js(rows)?;
        let report: DayReport = from_js(report)?;
        let prayers: Vec<WasmPrayer> = self
            .engine
            .resolve_prayers(&records, &report.times)
            .into_iter()
            .map(WasmPrayer::from)
            .collect();
        to_js(&prayers)
    }
}

impl Board {
    pub fn engine(&self) -> &Luach {
        &self.engine
    }
}
