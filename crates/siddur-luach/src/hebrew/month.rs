//! Month numbers, counted from Nisan as in the Torah.
//!
//! The year itself starts at Tishri, so month numbers are not chronological
//! within a year. Month 13 exists only in leap years; in those years month 12
//! is Adar I.

pub const NISAN: u8 = 1;
pub const IYYAR: u8 = 2;
pub const SIVAN: u8 = 3;
pub const TAMMUZ: u8 = 4;
pub const AV: u8 = 5;
pub const ELUL: u8 = 6;
pub const TISHRI: u8 = 7;
pub const MARHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const TEVET: u8 = 10;
pub const SHEVAT: u8 = 11;
pub const ADAR: u8 = 12;
pub const ADAR_II: u8 = 13;

/// Months of a year in calendar order, starting from Tishri.
pub(crate) fn in_year_order(leap: bool) -> impl Iterator<Item = u8> {
    let last = if leap { ADAR_II } else { ADAR };
    (TISHRI..=last).chain(NISAN..TISHRI)
}

/// Transliterated name of `month`. Month 12 is "Adar I" in leap years.
#[must_use]
pub const fn name(month: u8, leap: bool) -> &'static str {
    match month {
        NISAN => "Nisan",
        IYYAR => "Iyyar",
        SIVAN => "Sivan",
        TAMMUZ => "Tammuz",
        AV => "Av",
        ELUL => "Elul",
        TISHRI => "Tishri",
        MARHESHVAN => "Marheshvan",
        KISLEV => "Kislev",
        TEVET => "Tevet",
        SHEVAT => "Shevat",
        ADAR if leap => "Adar I",
        ADAR => "Adar",
        ADAR_II => "Adar II",
        _ => "?",
    }
}
