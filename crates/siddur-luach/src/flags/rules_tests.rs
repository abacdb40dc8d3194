//! Tests for the flag rules against known calendar dates.

use chrono::{NaiveDate, Weekday};
use siddur_core::types::Location;

use super::{Flag, FlagSet, evaluate, evaluate_gregorian, evaluate_with, omer_day};
use crate::error::CalendarError;
use crate::hebrew::month::{AV, ELUL, NISAN, SIVAN, TEVET, TISHRI};
use crate::hebrew::{CalendarDate, YearInfo};

fn civil(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn israel(y: i32, m: u32, d: u32) -> FlagSet {
    evaluate_gregorian(civil(y, m, d), Location::Israel).unwrap()
}

fn diaspora(y: i32, m: u32, d: u32) -> FlagSet {
    evaluate_gregorian(civil(y, m, d), Location::Diaspora).unwrap()
}

fn hebrew(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

/// Flags for a Hebrew date in Israel.
fn on(year: i32, month: u8, day: u8) -> FlagSet {
    evaluate(hebrew(year, month, day))
}

fn days_of_year(year: i32) -> impl Iterator<Item = CalendarDate> {
    let start = hebrew(year, TISHRI, 1).fixed();
    let end = hebrew(year + 1, TISHRI, 1).fixed();
    (start..end).map(|fixed| CalendarDate::from_fixed(fixed).unwrap())
}

#[test]
fn chanukah_and_rosh_chodesh_are_independent() {
    // 1 Tevet 5784
    let flags = israel(2023, 12, 13);
    assert!(flags[Flag::Chanukah]);
    assert!(flags[Flag::RoshChodesh]);
    assert!(flags[Flag::FullHallel]);
    assert!(!flags[Flag::HalfHallel]);
    assert!(flags[Flag::AlHanissim]);
    assert!(flags[Flag::YaalehVeyavo]);

    // First night's day, no Rosh Chodesh
    let first = israel(2023, 12, 8);
    assert!(first[Flag::Chanukah]);
    assert!(!first[Flag::RoshChodesh]);
}

#[test]
fn chanukah_length_follows_kislev() {
    // Kislev 5784 has 29 days: Chanukah ends 3 Tevet.
    assert!(israel(2023, 12, 15)[Flag::Chanukah]);
    assert!(!israel(2023, 12, 16)[Flag::Chanukah]);

    // Kislev 5785 has 30 days: two days of Rosh Chodesh inside Chanukah, ends 2 Tevet.
    assert!(israel(2024, 12, 31)[Flag::RoshChodesh]);
    assert!(israel(2025, 1, 1)[Flag::RoshChodesh]);
    assert!(israel(2025, 1, 2)[Flag::Chanukah]);
    assert!(!israel(2025, 1, 3)[Flag::Chanukah]);
}

#[test]
fn purim_and_esther_in_a_leap_year() {
    // 5784: 13 Adar II is Shabbat, the fast moves to Thursday.
    let fast = israel(2024, 3, 21);
    assert!(fast[Flag::TaanitEsther]);
    assert!(fast[Flag::FastDay]);
    assert!(!israel(2024, 3, 23)[Flag::TaanitEsther]);

    let purim = israel(2024, 3, 24);
    assert!(purim[Flag::Purim]);
    assert!(purim[Flag::AlHanissim]);
    assert!(purim[Flag::OmitTachanun]);
    assert!(israel(2024, 3, 25)[Flag::ShushanPurim]);

    // Purim Katan is 14 Adar I, a month earlier.
    let katan = hebrew(5784, 12, 14);
    let flags = evaluate(katan);
    assert!(flags[Flag::PurimKatan]);
    assert!(!flags[Flag::Purim]);
}

#[test]
fn purim_in_a_common_year() {
    let flags = israel(2025, 3, 14);
    assert!(flags[Flag::Purim]);
    assert!(!flags[Flag::PurimKatan]);
    assert!(israel(2025, 3, 13)[Flag::TaanitEsther]);
}

#[test]
fn fasts_on_shabbat_are_deferred() {
    // 5782: 17 Tammuz and 9 Av fall on Shabbat.
    assert!(!israel(2022, 7, 16)[Flag::ShivaAsarBetammuz]);
    assert!(israel(2022, 7, 16)[Flag::ThreeWeeks]);
    assert!(israel(2022, 7, 17)[Flag::ShivaAsarBetammuz]);

    let shabbat_chazon = israel(2022, 8, 6);
    assert!(!shabbat_chazon[Flag::TishaBeav]);
    assert!(shabbat_chazon[Flag::NineDays]);

    let observed = israel(2022, 8, 7);
    assert!(observed[Flag::TishaBeav]);
    assert!(observed[Flag::FastDay]);
    assert!(observed[Flag::NineDays]);
    assert!(observed[Flag::ThreeWeeks]);
    assert!(observed[Flag::OmitTachanun]);
    assert!(!israel(2022, 8, 8)[Flag::ThreeWeeks]);

    // 3 Tishri 5785 is Shabbat.
    assert!(!israel(2024, 10, 5)[Flag::TzomGedaliah]);
    assert!(israel(2024, 10, 6)[Flag::TzomGedaliah]);
}

#[test]
fn asara_betevet_never_on_shabbat() {
    for year in 5600..5900 {
        let date = hebrew(year, TEVET, 10);
        assert_ne!(date.weekday(), Weekday::Sat, "10 Tevet {year}");
    }

    for year in [5784, 5785, 5786] {
        for date in days_of_year(year) {
            if evaluate(date)[Flag::AsaraBetevet] {
                assert_ne!(date.weekday(), Weekday::Sat);
            }
        }
    }

    // Friday 10 Tevet 5784 is kept on the day.
    assert!(israel(2023, 12, 22)[Flag::AsaraBetevet]);
}

#[test]
fn rosh_chodesh_spans_one_or_two_days() {
    let mut saw_one = false;
    let mut saw_two = false;

    for year in 5780..5790 {
        let mut run = 0;
        for date in days_of_year(year) {
            if evaluate(date)[Flag::RoshChodesh] {
                run += 1;
            } else if run > 0 {
                assert!(run == 1 || run == 2, "run of {run} in {year}");
                saw_one |= run == 1;
                saw_two |= run == 2;
                run = 0;
            }
        }
    }

    assert!(saw_one);
    assert!(saw_two);
}

#[test]
fn every_month_has_one_or_two_rosh_chodesh_days() {
    for year in 5700..5800 {
        let info = YearInfo::for_year(year).unwrap();
        for month in info.months() {
            let first = hebrew(year, month, 1);
            let eve = first.add_days(-1).unwrap();
            let days = [eve, first]
                .into_iter()
                .filter(|date| evaluate(*date)[Flag::RoshChodesh])
                .count();
            let context = format!("month {month} of {year}");
            assert!((1..=2).contains(&days), "{days} days for {context}");
            assert!(evaluate(first)[Flag::RoshChodesh], "{context}");
            assert!(!evaluate(first.next_day().unwrap())[Flag::RoshChodesh]);
        }
    }
}

#[test]
fn rosh_hashana_is_rosh_chodesh_without_hallel() {
    let flags = on(5785, TISHRI, 1);
    assert!(flags[Flag::RoshHashana]);
    assert!(flags[Flag::RoshChodesh]);
    assert!(flags[Flag::YomTov]);
    assert!(flags[Flag::AseretYemeiTeshuva]);
    assert!(!flags[Flag::HalfHallel]);
    assert!(!flags[Flag::FullHallel]);

    // Elul has 29 days, so Tishri has a single day of Rosh Chodesh.
    let elul_29 = on(5784, ELUL, 29);
    assert!(!elul_29[Flag::RoshChodesh]);
    assert!(!on(5785, TISHRI, 2)[Flag::RoshChodesh]);
}

#[test]
fn yom_haatzmaut_moves_with_the_weekday() {
    // 5784: 5 Iyyar is Monday, moved to Tuesday.
    assert!(israel(2024, 5, 13)[Flag::YomHazikaron]);
    assert!(israel(2024, 5, 14)[Flag::YomHaatzmaut]);

    // 5785: 5 Iyyar is Shabbat, moved back to Thursday 3 Iyyar.
    assert!(israel(2025, 4, 30)[Flag::YomHazikaron]);
    let atzmaut = israel(2025, 5, 1);
    assert!(atzmaut[Flag::YomHaatzmaut]);
    assert!(atzmaut[Flag::FullHallel]);
    assert!(!israel(2025, 5, 3)[Flag::YomHaatzmaut]);

    // Not kept before the state existed.
    let before = on(5700, 2, 5);
    assert!(!before[Flag::YomHaatzmaut]);
    assert!(!before[Flag::YomHazikaron]);
    assert!(!on(5720, 2, 28)[Flag::YomYerushalayim]);
    assert!(on(5784, 2, 28)[Flag::YomYerushalayim]);
}

#[test]
fn diaspora_keeps_second_days() {
    // 22 Nisan 5785
    assert!(!israel(2025, 4, 20)[Flag::Pesach]);
    let second = diaspora(2025, 4, 20);
    assert!(second[Flag::Pesach]);
    assert!(second[Flag::YomTov]);

    // 7 Sivan 5785
    assert!(!israel(2025, 6, 3)[Flag::Shavuot]);
    assert!(diaspora(2025, 6, 3)[Flag::Shavuot]);

    // 23 Tishri 5785
    assert!(!israel(2024, 10, 25)[Flag::SimchatTorah]);
    assert!(diaspora(2024, 10, 25)[Flag::SimchatTorah]);

    let second_day = hebrew(5785, NISAN, 16);
    assert!(evaluate(second_day)[Flag::CholHamoed]);
    assert!(evaluate(second_day)[Flag::HalfHallel]);
    let abroad = evaluate_with(second_day, Location::Diaspora);
    assert!(!abroad[Flag::CholHamoed]);
    assert!(abroad[Flag::FullHallel]);
    assert!(abroad[Flag::YomTov]);
}

#[test]
fn tal_umatar_start_depends_on_location() {
    let israel_start = hebrew(5784, 8, 7);
    assert!(evaluate(israel_start)[Flag::TalUmatar]);
    let eve = israel_start.add_days(-1).unwrap();
    assert!(!evaluate(eve)[Flag::TalUmatar]);
    let abroad = evaluate_with(israel_start, Location::Diaspora);
    assert!(!abroad[Flag::TalUmatar]);

    // The civil year after 2023 is a leap year, so the start is one day later.
    assert!(!diaspora(2023, 12, 5)[Flag::TalUmatar]);
    assert!(diaspora(2023, 12, 6)[Flag::TalUmatar]);
    assert!(!diaspora(2024, 12, 4)[Flag::TalUmatar]);
    assert!(diaspora(2024, 12, 5)[Flag::TalUmatar]);

    let erev_pesach = hebrew(5785, NISAN, 14);
    assert!(evaluate(erev_pesach)[Flag::TalUmatar]);
    assert!(!evaluate(erev_pesach.next_day().unwrap())[Flag::TalUmatar]);
}

#[test]
fn mashiv_haruach_season() {
    assert!(!on(5785, TISHRI, 22)[Flag::MashivHaruach]);
    assert!(on(5785, TISHRI, 23)[Flag::MashivHaruach]);
    assert!(on(5785, NISAN, 15)[Flag::MashivHaruach]);
    assert!(!on(5785, NISAN, 16)[Flag::MashivHaruach]);
    assert!(!on(5785, AV, 1)[Flag::MashivHaruach]);
}

#[test]
fn omer_count() {
    assert_eq!(omer_day(hebrew(5784, NISAN, 15)), None);
    assert_eq!(omer_day(hebrew(5784, NISAN, 16)), Some(1));
    assert_eq!(omer_day(hebrew(5784, NISAN, 22)), Some(7));

    let lag_baomer = hebrew(5784, 2, 18);
    assert_eq!(omer_day(lag_baomer), Some(33));
    assert!(evaluate(lag_baomer)[Flag::LagBaomer]);
    assert!(evaluate(lag_baomer)[Flag::SefiratHaomer]);

    assert_eq!(omer_day(hebrew(5784, SIVAN, 5)), Some(49));
    assert_eq!(omer_day(hebrew(5784, SIVAN, 6)), None);
    assert!(on(5784, SIVAN, 6)[Flag::Shavuot]);
}

#[test]
fn ledavid_and_teshuva_seasons() {
    let elul = on(5784, 6, 1);
    assert!(elul[Flag::Ledavid]);
    assert!(!elul[Flag::AseretYemeiTeshuva]);

    let yom_kippur = on(5785, TISHRI, 10);
    assert!(yom_kippur[Flag::YomKippur]);
    assert!(yom_kippur[Flag::AseretYemeiTeshuva]);
    assert!(!yom_kippur[Flag::FastDay]);

    let hoshana_raba = on(5785, TISHRI, 21);
    assert!(hoshana_raba[Flag::Ledavid]);
    assert!(hoshana_raba[Flag::HoshanaRaba]);
    assert!(hoshana_raba[Flag::CholHamoed]);
    assert!(!on(5785, TISHRI, 22)[Flag::Ledavid]);
}

#[test]
fn ordinary_weekday_has_no_special_flags() {
    // Wednesday 12 Marheshvan 5785, outside every season except the rains.
    let flags = israel(2024, 11, 13);
    let active: Vec<Flag> = flags.active().collect();
    assert_eq!(active, vec![Flag::MashivHaruach, Flag::TalUmatar]);
}

#[test]
fn evaluation_is_total_and_deterministic() {
    for date in days_of_year(5784) {
        let first = evaluate(date);
        assert_eq!(first.entries().count(), Flag::COUNT);
        assert_eq!(first, evaluate(date));
    }
}

#[test]
fn out_of_range_dates_fail() {
    assert!(matches!(
        evaluate_gregorian(civil(-3800, 1, 1), Location::Israel),
        Err(CalendarError::OutOfRange { .. })
    ));
}
