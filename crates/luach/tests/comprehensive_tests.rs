use chrono::{Datelike, Duration, NaiveDate, Timelike, Weekday};
use luach::{
    CandleOffset, GeoCoordinate, Luach, LuachConfigBuilder, LuachError, PrayerEntry, ResolvedTime,
    ZmanKey, ZmanimRequest, compute_day, parasha_name, resolve,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_jerusalem_solstice_scenario() {
    let report = compute_day(date(2025, 6, 21), &GeoCoordinate::jerusalem()).unwrap();
    let sunrise = report.times.get(ZmanKey::Sunrise).unwrap();
    let sunset = report.times.get(ZmanKey::Sunset).unwrap();
    let chatzot = report.times.get(ZmanKey::Chatzot).unwrap();

    assert!(sunrise.hour() < 6);
    assert!(sunset.hour() * 60 + sunset.minute() > 18 * 60 + 30);
    // Israel summer time is one hour ahead of standard time.
    let standard = chatzot - Duration::hours(1);
    let from_noon = i64::from(standard.hour() * 60 + standard.minute()) - 720;
    assert!(from_noon.abs() <= 30, "{}", from_noon);
}

#[test]
fn test_candles_every_friday_of_a_year() {
    let engine = Luach::default();
    let loc = GeoCoordinate::jerusalem();
    let mut day = date(2025, 1, 3);
    let mut fridays = 0;
    while day.year() == 2025 {
        assert_eq!(day.weekday(), Weekday::Fri);
        let set = engine.zmanim(day, &loc).unwrap();
        let sunset = set.get(ZmanKey::Sunset).unwrap();
        for offset in CandleOffset::ALL {
            let lit = set.get(offset.key()).unwrap();
            assert_eq!(sunset - lit, Duration::minutes(offset.minutes()), "{}", day);
        }
        fridays += 1;
        day += Duration::days(7);
    }
    assert_eq!(fridays, 52);
}

#[test]
fn test_shabbat_end_follows_saturday_sunset() {
    let engine = Luach::default();
    let loc = GeoCoordinate::jerusalem();
    let monday = engine.zmanim(date(2025, 3, 10), &loc).unwrap();
    let saturday = engine.day_zmanim(date(2025, 3, 15), &loc).unwrap();
    let sunset = saturday.get(ZmanKey::Sunset).unwrap();
    assert_eq!(monday.get(ZmanKey::ShabbatEnd).unwrap() - sunset, Duration::minutes(35));
    assert_eq!(monday.get(ZmanKey::RabbeinuTam).unwrap() - sunset, Duration::minutes(72));
}

#[test]
fn test_parasha_fixtures() {
    assert_eq!(parasha_name(date(2024, 11, 9)).unwrap(), "לך לך");
    assert_eq!(parasha_name(date(2024, 11, 21)).unwrap(), "חיי שרה");
    assert_eq!(parasha_name(date(2024, 8, 3)).unwrap(), "מטות-מסעי");
    assert_eq!(parasha_name(date(2031, 1, 4)).unwrap(), "");
}

#[test]
fn test_prayer_relative_to_report() {
    let report = compute_day(date(2025, 1, 3), &GeoCoordinate::jerusalem()).unwrap();
    let sunset = report.times.get(ZmanKey::Sunset).unwrap();

    let resolved = resolve(&PrayerEntry::relative("sunset", 0), &report.times);
    let t = resolved.time().unwrap();
    assert_eq!((t.hour(), t.minute()), (sunset.hour(), sunset.minute()));

    let missing = resolve(&PrayerEntry::relative("misheyakir", 0), &report.times);
    assert_eq!(missing, ResolvedTime::Unresolved);
}

#[test]
fn test_request_contract() -> anyhow::Result<()> {
    let engine = LuachConfigBuilder::new()
        .rabbeinu_tam_minutes(90)
        .build()
        .and_then(Luach::new)?;
    let report = engine.handle(&ZmanimRequest::new(31.7683, -35.2137).on(date(2025, 6, 20)))?;
    let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;

    for field in ["date", "location", "hebrew", "parasha", "times"] {
        assert!(json.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(json["hebrew"]["year"], 5785);
    assert!(json["times"].as_object().map_or(0, |m| m.len()) >= 20);

    let err = engine.handle(&ZmanimRequest::new(0.0, -35.2137)).unwrap_err();
    assert!(matches!(err, LuachError::InvalidInput { .. }));
    Ok(())
}

#[test]
fn test_new_york_uses_configured_clock() {
    let engine = LuachConfigBuilder::new()
        .timezone("America/New_York")
        .build()
        .and_then(Luach::new)
        .unwrap();
    // New York, longitude pre-negated.
    let loc = GeoCoordinate::new(40.7128, 74.0060);
    let winter = engine.day_zmanim(date(2025, 1, 15), &loc).unwrap();
    let summer = engine.day_zmanim(date(2025, 7, 15), &loc).unwrap();
    assert_eq!(winter.get(ZmanKey::Sunrise).unwrap().offset().local_minus_utc(), -5 * 3600);
    assert_eq!(summer.get(ZmanKey::Sunrise).unwrap().offset().local_minus_utc(), -4 * 3600);
    let noon = winter.get(ZmanKey::Chatzot).unwrap();
    assert_eq!(noon.hour(), 12);
}
