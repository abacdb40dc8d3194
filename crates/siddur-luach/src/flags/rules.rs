//! One rule per flag.
//!
//! Every rule is a function of the [`DayContext`] alone. Composite rules call
//! the rules they are made of; none of them reads a partially built `FlagSet`,
//! so evaluation order cannot matter.

use chrono::Weekday;

use super::context::DayContext;
use super::flag::Flag;
use crate::hebrew::fixed_from_julian;
use crate::hebrew::month::{
    ADAR, AV, ELUL, IYYAR, KISLEV, MARHESHVAN, NISAN, SHEVAT, SIVAN, TAMMUZ, TEVET, TISHRI,
};
use crate::hebrew::weekday_from_fixed;

/// First year in which Yom Haatzmaut and Yom Hazikaron are kept.
const STATE_OF_ISRAEL_YEAR: i32 = 5708;
/// First year in which Yom Yerushalayim is kept.
const REUNIFICATION_YEAR: i32 = 5728;
/// From this year Yom Haatzmaut falling on Monday moves to Tuesday.
const MONDAY_POSTPONEMENT_YEAR: i32 = 5764;

/// Difference between a Hebrew year and the civil year in which its autumn falls.
const CIVIL_YEAR_OFFSET: i64 = 3761;

impl Flag {
    /// Evaluates this flag's rule.
    pub(crate) fn holds(self, day: &DayContext) -> bool {
        match self {
            Self::Shabbat => shabbat(day),
            Self::RoshChodesh => rosh_chodesh(day),
            Self::RoshHashana => rosh_hashana(day),
            Self::AseretYemeiTeshuva => aseret_yemei_teshuva(day),
            Self::YomKippur => yom_kippur(day),
            Self::Sukkot => sukkot(day),
            Self::HoshanaRaba => hoshana_raba(day),
            Self::SheminiAtzeret => shemini_atzeret(day),
            Self::SimchatTorah => simchat_torah(day),
            Self::Chanukah => chanukah(day),
            Self::TuBishvat => tu_bishvat(day),
            Self::PurimKatan => purim_katan(day),
            Self::Purim => purim(day),
            Self::ShushanPurim => shushan_purim(day),
            Self::Pesach => pesach(day),
            Self::CholHamoed => chol_hamoed(day),
            Self::SefiratHaomer => omer_count(day).is_some(),
            Self::LagBaomer => day.is(IYYAR, 18),
            Self::YomHazikaron => yom_hazikaron(day),
            Self::YomHaatzmaut => yom_haatzmaut(day),
            Self::YomYerushalayim => yom_yerushalayim(day),
            Self::Shavuot => shavuot(day),
            Self::TzomGedaliah => tzom_gedaliah(day),
            Self::AsaraBetevet => asara_betevet(day),
            Self::TaanitEsther => taanit_esther(day),
            Self::ShivaAsarBetammuz => shiva_asar_betammuz(day),
            Self::TishaBeav => tisha_beav(day),
            Self::FastDay => fast_day(day),
            Self::ThreeWeeks => three_weeks(day),
            Self::NineDays => nine_days(day),
            Self::TuBeav => day.is(AV, 15),
            Self::Ledavid => ledavid(day),
            Self::YomTov => yom_tov(day),
            Self::YaalehVeyavo => yaaleh_veyavo(day),
            Self::AlHanissim => chanukah(day) || purim(day),
            Self::FullHallel => full_hallel(day),
            Self::HalfHallel => half_hallel(day),
            Self::OmitTachanun => omit_tachanun(day),
            Self::MashivHaruach => mashiv_haruach(day),
            Self::TalUmatar => tal_umatar(day),
        }
    }
}

fn shabbat(day: &DayContext) -> bool {
    day.weekday == Weekday::Sat
}

/// The 30th of a month and the 1st of the next. A 29-day month gives a
/// one-day Rosh Chodesh. 1 Tishri is both Rosh Chodesh and Rosh Hashana.
fn rosh_chodesh(day: &DayContext) -> bool {
    day.day() == 30 || day.day() == 1
}

fn rosh_hashana(day: &DayContext) -> bool {
    day.within(TISHRI, 1, 2)
}

fn aseret_yemei_teshuva(day: &DayContext) -> bool {
    day.within(TISHRI, 1, 10)
}

fn yom_kippur(day: &DayContext) -> bool {
    day.is(TISHRI, 10)
}

fn sukkot(day: &DayContext) -> bool {
    day.within(TISHRI, 15, 21)
}

fn hoshana_raba(day: &DayContext) -> bool {
    day.is(TISHRI, 21)
}

fn shemini_atzeret(day: &DayContext) -> bool {
    day.is(TISHRI, 22)
}

fn simchat_torah(day: &DayContext) -> bool {
    day.is(TISHRI, if day.diaspora() { 23 } else { 22 })
}

/// Eight days from 25 Kislev. Whether it ends on 2 or 3 Tevet depends on
/// the length of Kislev, so the range is counted in fixed days.
fn chanukah(day: &DayContext) -> bool {
    let first = day.year.fixed(KISLEV, 25);
    day.between(first, first + 7)
}

fn tu_bishvat(day: &DayContext) -> bool {
    day.is(SHEVAT, 15)
}

fn purim_katan(day: &DayContext) -> bool {
    day.year.is_leap() && day.is(ADAR, 14)
}

fn purim(day: &DayContext) -> bool {
    day.is(day.year.purim_month(), 14)
}

fn shushan_purim(day: &DayContext) -> bool {
    day.is(day.year.purim_month(), 15)
}

fn last_day_of_pesach(day: &DayContext) -> u8 {
    if day.diaspora() { 22 } else { 21 }
}

fn pesach(day: &DayContext) -> bool {
    day.within(NISAN, 15, last_day_of_pesach(day))
}

fn chol_hamoed(day: &DayContext) -> bool {
    let first = if day.diaspora() { 17 } else { 16 };
    day.within(NISAN, first, 20) || day.within(TISHRI, first, 21)
}

/// Day of the Omer count, 16 Nisan = 1 through 5 Sivan = 49.
pub(crate) fn omer_count(day: &DayContext) -> Option<u8> {
    let offset = day.fixed - day.year.fixed(NISAN, 16);
    u8::try_from(offset + 1)
        .ok()
        .filter(|count| (1..=49).contains(count))
}

/// Day of Iyyar on which Yom Haatzmaut is kept.
///
/// 5 Iyyar only falls on Monday, Wednesday, Friday or Shabbat. Friday and
/// Shabbat move back to Thursday; Monday moves forward to Tuesday so that
/// Yom Hazikaron does not follow Shabbat.
fn atzmaut_day(day: &DayContext) -> Option<u8> {
    let year = day.year.year();
    if year < STATE_OF_ISRAEL_YEAR {
        return None;
    }
    let observed = match weekday_from_fixed(day.year.fixed(IYYAR, 5)) {
        Weekday::Fri => 4,
        Weekday::Sat => 3,
        Weekday::Mon if year >= MONDAY_POSTPONEMENT_YEAR => 6,
        _ => 5,
    };
    Some(observed)
}

fn yom_haatzmaut(day: &DayContext) -> bool {
    atzmaut_day(day).is_some_and(|d| day.is(IYYAR, d))
}

fn yom_hazikaron(day: &DayContext) -> bool {
    atzmaut_day(day).is_some_and(|d| day.is(IYYAR, d - 1))
}

fn yom_yerushalayim(day: &DayContext) -> bool {
    day.year.year() >= REUNIFICATION_YEAR && day.is(IYYAR, 28)
}

fn shavuot(day: &DayContext) -> bool {
    day.within(SIVAN, 6, if day.diaspora() { 7 } else { 6 })
}

/// Fixed day on which a fast dated `month`/`day` is kept: a fast that falls
/// on Shabbat is deferred to Sunday.
fn deferred_fast(day: &DayContext, month: u8, date: u8) -> i64 {
    let fixed = day.year.fixed(month, date);
    if weekday_from_fixed(fixed) == Weekday::Sat {
        fixed + 1
    } else {
        fixed
    }
}

fn tzom_gedaliah(day: &DayContext) -> bool {
    day.fixed == deferred_fast(day, TISHRI, 3)
}

fn asara_betevet(day: &DayContext) -> bool {
    day.fixed == deferred_fast(day, TEVET, 10)
}

/// 13 Adar, advanced to Thursday when it falls on Shabbat.
fn taanit_esther(day: &DayContext) -> bool {
    let fixed = day.year.fixed(day.year.purim_month(), 13);
    let observed = if weekday_from_fixed(fixed) == Weekday::Sat {
        fixed - 2
    } else {
        fixed
    };
    day.fixed == observed
}

fn shiva_asar_betammuz(day: &DayContext) -> bool {
    day.fixed == deferred_fast(day, TAMMUZ, 17)
}

fn tisha_beav(day: &DayContext) -> bool {
    day.fixed == deferred_fast(day, AV, 9)
}

fn fast_day(day: &DayContext) -> bool {
    tzom_gedaliah(day)
        || asara_betevet(day)
        || taanit_esther(day)
        || shiva_asar_betammuz(day)
        || tisha_beav(day)
}

fn three_weeks(day: &DayContext) -> bool {
    day.between(day.year.fixed(TAMMUZ, 17), deferred_fast(day, AV, 9))
}

fn nine_days(day: &DayContext) -> bool {
    day.between(day.year.fixed(AV, 1), deferred_fast(day, AV, 9))
}

/// Psalm 27 from 1 Elul through Hoshana Raba.
fn ledavid(day: &DayContext) -> bool {
    day.month() == ELUL || day.within(TISHRI, 1, 21)
}

fn yom_tov(day: &DayContext) -> bool {
    let second_day = u8::from(day.diaspora());
    rosh_hashana(day)
        || yom_kippur(day)
        || day.within(TISHRI, 15, 15 + second_day)
        || shemini_atzeret(day)
        || simchat_torah(day)
        || day.within(NISAN, 15, 15 + second_day)
        || day.within(NISAN, 21, last_day_of_pesach(day))
        || shavuot(day)
}

fn yaaleh_veyavo(day: &DayContext) -> bool {
    rosh_chodesh(day)
        || rosh_hashana(day)
        || yom_kippur(day)
        || sukkot(day)
        || shemini_atzeret(day)
        || simchat_torah(day)
        || pesach(day)
        || shavuot(day)
}

fn full_hallel(day: &DayContext) -> bool {
    let second_day = u8::from(day.diaspora());
    chanukah(day)
        || sukkot(day)
        || shemini_atzeret(day)
        || simchat_torah(day)
        || day.within(NISAN, 15, 15 + second_day)
        || shavuot(day)
        || yom_haatzmaut(day)
        || yom_yerushalayim(day)
}

/// Rosh Chodesh and the later days of Pesach, unless the complete Hallel
/// is said (Rosh Chodesh Tevet falls in Chanukah).
fn half_hallel(day: &DayContext) -> bool {
    let first = 16 + u8::from(day.diaspora());
    let later_pesach = day.within(NISAN, first, last_day_of_pesach(day));
    !full_hallel(day) && !rosh_hashana(day) && (rosh_chodesh(day) || later_pesach)
}

fn omit_tachanun(day: &DayContext) -> bool {
    shabbat(day)
        || rosh_chodesh(day)
        || day.is(ELUL, 29)
        || rosh_hashana(day)
        || day.within(TISHRI, 9, 30)
        || chanukah(day)
        || tu_bishvat(day)
        || (day.year.is_leap() && day.within(ADAR, 14, 15))
        || purim(day)
        || shushan_purim(day)
        || day.month() == NISAN
        || day.is(IYYAR, 14)
        || day.is(IYYAR, 18)
        || yom_haatzmaut(day)
        || yom_yerushalayim(day)
        || day.within(SIVAN, 1, 12)
        || tisha_beav(day)
        || day.is(AV, 15)
}

/// From the day after Shemini Atzeret through the first day of Pesach.
fn mashiv_haruach(day: &DayContext) -> bool {
    let month = day.month();
    month > TISHRI || day.within(TISHRI, 23, 30) || day.within(NISAN, 1, 15)
}

/// Through 14 Nisan, starting 7 Marheshvan in Israel. The diaspora starts on
/// the sixtieth day after the Julian autumnal equinox: Julian 22 November, or
/// 23 November when the following civil year is a leap year.
fn tal_umatar(day: &DayContext) -> bool {
    let month = day.month();
    if day.within(NISAN, 1, 14) {
        return true;
    }
    if month < TISHRI {
        return false;
    }
    if day.diaspora() {
        let civil_year = i64::from(day.year.year()) - CIVIL_YEAR_OFFSET;
        let start_day = if (civil_year + 1).rem_euclid(4) == 0 {
            23
        } else {
            22
        };
        day.fixed >= fixed_from_julian(civil_year, 11, start_day)
    } else {
        month > MARHESHVAN || day.within(MARHESHVAN, 7, 30)
    }
}
