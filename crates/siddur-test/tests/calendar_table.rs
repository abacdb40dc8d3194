//! Holiday regression table, checked through the public calendar API.

use chrono::NaiveDate;
use siddur_test::core::types::Location;
use siddur_test::luach::{Flag, evaluate_gregorian};

/// (civil date, flag, Israel, diaspora)
const TABLE: &[((i32, u32, u32), Flag, bool, bool)] = &[
    ((2025, 9, 23), Flag::RoshHashana, true, true),
    ((2025, 9, 23), Flag::AseretYemeiTeshuva, true, true),
    ((2025, 10, 2), Flag::YomKippur, true, true),
    ((2025, 10, 7), Flag::Sukkot, true, true),
    ((2025, 10, 14), Flag::SheminiAtzeret, true, true),
    ((2025, 10, 14), Flag::SimchatTorah, true, false),
    ((2025, 10, 15), Flag::SimchatTorah, false, true),
    ((2025, 12, 15), Flag::Chanukah, true, true),
    ((2025, 12, 30), Flag::AsaraBetevet, true, true),
    ((2026, 3, 2), Flag::TaanitEsther, true, true),
    ((2026, 3, 3), Flag::Purim, true, true),
    ((2026, 4, 2), Flag::Pesach, true, true),
    ((2026, 5, 22), Flag::Shavuot, true, true),
    ((2026, 5, 23), Flag::Shavuot, false, true),
    ((2026, 7, 2), Flag::ShivaAsarBetammuz, true, true),
    ((2026, 7, 2), Flag::ThreeWeeks, true, true),
    ((2026, 7, 23), Flag::TishaBeav, true, true),
    ((2026, 7, 23), Flag::NineDays, true, true),
];

#[test_log::test]
fn holidays_5786() {
    for &((y, m, d), flag, israel, diaspora) in TABLE {
        let civil = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let in_israel = evaluate_gregorian(civil, Location::Israel).unwrap();
        let abroad = evaluate_gregorian(civil, Location::Diaspora).unwrap();
        assert_eq!(in_israel[flag], israel, "{flag} on {civil} in Israel");
        assert_eq!(abroad[flag], diaspora, "{flag} on {civil} in the diaspora");
    }
}

#[test]
fn fasts_are_fast_days() {
    for &((y, m, d), flag, ..) in TABLE {
        let civil = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let flags = evaluate_gregorian(civil, Location::Israel).unwrap();
        let is_fast = matches!(
            flag,
            Flag::AsaraBetevet | Flag::TaanitEsther | Flag::ShivaAsarBetammuz | Flag::TishaBeav
        );
        if is_fast {
            assert!(flags[Flag::FastDay], "{flag} on {civil}");
        }
    }
}
