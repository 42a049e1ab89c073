use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named halachic instants.
///
/// Declaration order follows the course of the day so that a `ZmanimSet`
/// iterates chronologically for any normal latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZmanKey {
    /// Dawn, sun at 19.75° below the horizon.
    Dawn90,
    /// Dawn, sun at 15.99° below the horizon.
    Dawn72,
    /// Earliest tallit and tefillin, sun at 11.5° below the horizon.
    TallitTefillin,
    Sunrise,
    SofZmanShmaMga,
    SofZmanShmaGra,
    SofZmanTefilaMga,
    SofZmanTefilaGra,
    SofZmanBiurChametzMga,
    SofZmanBiurChametzGra,
    /// Solar midday.
    Chatzot,
    MinchaGedolaGra,
    MinchaGedolaMga,
    /// Seven proportional hours into the day.
    SevenHoursGra,
    SevenHoursMga,
    /// Nine proportional hours into the day.
    NineHoursGra,
    NineHoursMga,
    MinchaKetanaGra,
    MinchaKetanaMga,
    PlagHaminchaGra,
    PlagHaminchaMga,
    Sunset,
    /// Nightfall, sun at 4.65° below the horizon.
    Nightfall,
    /// Late nightfall, mirror of `Dawn72` after midday.
    Nightfall90,
    ShabbatCandles22,
    ShabbatCandles30,
    ShabbatCandles40,
    ShabbatEnd,
    RabbeinuTam,
}

impl ZmanKey {
    pub const ALL: [ZmanKey; 29] = [
        ZmanKey::Dawn90,
        ZmanKey::Dawn72,
        ZmanKey::TallitTefillin,
        ZmanKey::Sunrise,
        ZmanKey::SofZmanShmaMga,
        ZmanKey::SofZmanShmaGra,
        ZmanKey::SofZmanTefilaMga,
        ZmanKey::SofZmanTefilaGra,
        ZmanKey::SofZmanBiurChametzMga,
        ZmanKey::SofZmanBiurChametzGra,
        ZmanKey::Chatzot,
        ZmanKey::MinchaGedolaGra,
        ZmanKey::MinchaGedolaMga,
        ZmanKey::SevenHoursGra,
        ZmanKey::SevenHoursMga,
        ZmanKey::NineHoursGra,
        ZmanKey::NineHoursMga,
        ZmanKey::MinchaKetanaGra,
        ZmanKey::MinchaKetanaMga,
        ZmanKey::PlagHaminchaGra,
        ZmanKey::PlagHaminchaMga,
        ZmanKey::Sunset,
        ZmanKey::Nightfall,
        ZmanKey::Nightfall90,
        ZmanKey::ShabbatCandles22,
        ZmanKey::ShabbatCandles30,
        ZmanKey::ShabbatCandles40,
        ZmanKey::ShabbatEnd,
        ZmanKey::RabbeinuTam,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ZmanKey::Dawn90 => "dawn90",
            ZmanKey::Dawn72 => "dawn72",
            ZmanKey::TallitTefillin => "tallitTefillin",
            ZmanKey::Sunrise => "sunrise",
            ZmanKey::SofZmanShmaMga => "sofZmanShmaMga",
            ZmanKey::SofZmanShmaGra => "sofZmanShmaGra",
            ZmanKey::SofZmanTefilaMga => "sofZmanTefilaMga",
            ZmanKey::SofZmanTefilaGra => "sofZmanTefilaGra",
            ZmanKey::SofZmanBiurChametzMga => "sofZmanBiurChametzMga",
            ZmanKey::SofZmanBiurChametzGra => "sofZmanBiurChametzGra",
            ZmanKey::Chatzot => "chatzot",
            ZmanKey::MinchaGedolaGra => "minchaGedolaGra",
            ZmanKey::MinchaGedolaMga => "minchaGedolaMga",
            ZmanKey::SevenHoursGra => "sevenHoursGra",
            ZmanKey::SevenHoursMga => "sevenHoursMga",
            ZmanKey::NineHoursGra => "nineHoursGra",
            ZmanKey::NineHoursMga => "nineHoursMga",
            ZmanKey::MinchaKetanaGra => "minchaKetanaGra",
            ZmanKey::MinchaKetanaMga => "minchaKetanaMga",
            ZmanKey::PlagHaminchaGra => "plagHaminchaGra",
            ZmanKey::PlagHaminchaMga => "plagHaminchaMga",
            ZmanKey::Sunset => "sunset",
            ZmanKey::Nightfall => "nightfall",
            ZmanKey::Nightfall90 => "nightfall90",
            ZmanKey::ShabbatCandles22 => "shabbatCandles22",
            ZmanKey::ShabbatCandles30 => "shabbatCandles30",
            ZmanKey::ShabbatCandles40 => "shabbatCandles40",
            ZmanKey::ShabbatEnd => "shabbatEnd",
            ZmanKey::RabbeinuTam => "rabbeinuTam",
        }
    }

    /// True for keys that come from the week's Friday/Saturday rather than the day itself.
    pub fn is_shabbat(&self) -> bool {
        matches!(
            self,
            ZmanKey::ShabbatCandles22
                | ZmanKey::ShabbatCandles30
                | ZmanKey::ShabbatCandles40
                | ZmanKey::ShabbatEnd
                | ZmanKey::RabbeinuTam
        )
    }
}

impl fmt::Display for ZmanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known zman.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zman key `{0}`")]
pub struct UnknownZmanKey(pub String);

impl FromStr for ZmanKey {
    type Err = UnknownZmanKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZmanKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownZmanKey(s.to_owned()))
    }
}

/// Candle-lighting variants, in minutes before Friday sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CandleOffset {
    #[default]
    Minutes22,
    Minutes30,
    Minutes40,
}

impl CandleOffset {
    pub const ALL: [CandleOffset; 3] = [
        CandleOffset::Minutes22,
        CandleOffset::Minutes30,
        CandleOffset::Minutes40,
    ];

    pub fn minutes(&self) -> i64 {
        match self {
            CandleOffset::Minutes22 => 22,
            CandleOffset::Minutes30 => 30,
            CandleOffset::Minutes40 => 40,
        }
    }

    pub fn key(&self) -> ZmanKey {
        match self {
            CandleOffset::Minutes22 => ZmanKey::ShabbatCandles22,
            CandleOffset::Minutes30 => ZmanKey::ShabbatCandles30,
            CandleOffset::Minutes40 => ZmanKey::ShabbatCandles40,
        }
    }
}

/// Immutable set of computed instants for one day and location.
///
/// Values are anchored at local midnight in the observer's UTC shift, so the
/// wall-clock reading of each value is already local time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZmanimSet {
    times: BTreeMap<ZmanKey, DateTime<FixedOffset>>,
}

impl ZmanimSet {
    pub fn get(&self, key: ZmanKey) -> Option<DateTime<FixedOffset>> {
        self.times.get(&key).copied()
    }

    /// Looks up a key by its wire name.
    pub fn get_named(&self, name: &str) -> Option<DateTime<FixedOffset>> {
        name.parse::<ZmanKey>().ok().and_then(|k| self.get(k))
    }

    pub fn contains(&self, key: ZmanKey) -> bool {
        self.times.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZmanKey, DateTime<FixedOffset>)> + '_ {
        self.times.iter().map(|(k, v)| (*k, *v))
    }

    /// Returns a new set holding both; entries of `other` win on conflict.
    pub fn merged(&self, other: &ZmanimSet) -> ZmanimSet {
        let mut times = self.times.clone();
        times.extend(other.times.iter().map(|(k, v)| (*k, *v)));
        ZmanimSet { times }
    }
}

impl FromIterator<(ZmanKey, DateTime<FixedOffset>)> for ZmanimSet {
    fn from_iter<I: IntoIterator<Item = (ZmanKey, DateTime<FixedOffset>)>>(iter: I) -> Self {
        Self {
            times: iter.into_iter().collect(),
        }
    }
}
