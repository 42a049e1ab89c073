//! Engine configuration.

use luach_calendar::{DEFAULT_TIMEZONE, TimezoneResolver};
use luach_types::{CandleOffset, LuachError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RABBEINU_TAM_MINUTES: i64 = 72;
pub const MAX_RABBEINU_TAM_MINUTES: i64 = 180;

/// Community settings consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuachConfig {
    /// IANA timezone of the board.
    pub timezone: String,
    /// Minutes after Saturday sunset. Clamped to [0, 180].
    pub rabbeinu_tam_minutes: i64,
    /// Candle-lighting variant the display highlights; all three are computed.
    pub candle_lighting: CandleOffset,
    /// Memo cache entries; 0 disables the cache.
    pub cache_capacity: usize,
}

impl Default for LuachConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_owned(),
            rabbeinu_tam_minutes: DEFAULT_RABBEINU_TAM_MINUTES,
            candle_lighting: CandleOffset::default(),
            cache_capacity: 0,
        }
    }
}

impl LuachConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn rabbeinu_tam_minutes(mut self, minutes: i64) -> Self {
        self.rabbeinu_tam_minutes = minutes.clamp(0, MAX_RABBEINU_TAM_MINUTES);
        self
    }

    pub fn candle_lighting(mut self, offset: CandleOffset) -> Self {
        self.candle_lighting = offset;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Parses JSON; absent fields take their defaults.
    ///
    /// # Errors
    /// `InvalidConfiguration` on malformed JSON or out-of-range values,
    /// `UnknownTimezone` for an unknown zone id.
    pub fn from_json(json: &str) -> Result<Self, LuachError> {
        let config: LuachConfig = serde_json::from_str(json)
            .map_err(|e| LuachError::invalid_config(format!("config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LuachError> {
        if !(0..=MAX_RABBEINU_TAM_MINUTES).contains(&self.rabbeinu_tam_minutes) {
            return Err(LuachError::invalid_config(format!(
                "Rabbeinu Tam offset {} outside [0, {}]",
                self.rabbeinu_tam_minutes, MAX_RABBEINU_TAM_MINUTES
            )));
        }
        TimezoneResolver::new(&self.timezone)?;
        Ok(())
    }

    pub fn resolver(&self) -> Result<TimezoneResolver, LuachError> {
        TimezoneResolver::new(&self.timezone)
    }
}

/// Builder with validation for `LuachConfig`.
#[derive(Debug, Default)]
pub struct LuachConfigBuilder {
    timezone: Option<String>,
    rabbeinu_tam_minutes: Option<i64>,
    candle_lighting: Option<CandleOffset>,
    cache_capacity: Option<usize>,
}

impl LuachConfigBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self { self.timezone = Some(timezone.into()); self }
    pub fn rabbeinu_tam_minutes(mut self, minutes: i64) -> Self { self.rabbeinu_tam_minutes = Some(minutes); self }
    pub fn candle_lighting(mut self, offset: CandleOffset) -> Self { self.candle_lighting = Some(offset); self }
    pub fn cache_capacity(mut self, capacity: usize) -> Self { self.cache_capacity = Some(capacity); self }

    /// Builds and validates. Out-of-range offsets are rejected, not clamped.
    pub fn build(self) -> Result<LuachConfig, LuachError> {
        let defaults = LuachConfig::default();
        let config = LuachConfig {
            timezone: self.timezone.unwrap_or(defaults.timezone),
            rabbeinu_tam_minutes: self.rabbeinu_tam_minutes.unwrap_or(defaults.rabbeinu_tam_minutes),
            candle_lighting: self.candle_lighting.unwrap_or_default(),
            cache_capacity: self.cache_capacity.unwrap_or(defaults.cache_capacity),
        };
        config.validate()?;
        Ok(config)
    }
}
