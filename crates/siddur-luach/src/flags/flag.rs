//! The flag vocabulary.
//!
//! Adding a flag means adding a variant here and a rule in `rules.rs`; the
//! exhaustive match there keeps the two in step.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::CalendarError;

macro_rules! vocabulary {
    ($( $variant:ident => $name:literal, $description:literal; )+) => {
        /// A named boolean fact about a calendar day.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Flag {
            $( $variant, )+
        }

        impl Flag {
            /// Every flag, in the order a `FlagSet` reports them.
            pub const ALL: &'static [Flag] = &[$( Flag::$variant, )+];

            /// Number of flags in the vocabulary.
            pub const COUNT: usize = Self::ALL.len();

            /// Canonical name used in documents.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $description, )+
                }
            }

            fn from_canonical(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

vocabulary! {
    Shabbat => "shabbat", "Shabbat";
    RoshChodesh => "rosh_chodesh", "New month (30th of the old month and 1st of the new)";
    RoshHashana => "rosh_hashana", "Rosh Hashana, 1-2 Tishri";
    AseretYemeiTeshuva => "aseret_yemei_teshuva", "Ten days of repentance, 1-10 Tishri";
    YomKippur => "yom_kippur", "Yom Kippur, 10 Tishri";
    Sukkot => "sukkot", "Sukkot, 15-21 Tishri";
    HoshanaRaba => "hoshana_raba", "Hoshana Raba, 21 Tishri";
    SheminiAtzeret => "shemini_atzeret", "Shemini Atzeret, 22 Tishri";
    SimchatTorah => "simchat_torah", "Simchat Torah (22 Tishri, 23 in the diaspora)";
    Chanukah => "chanukah", "Chanukah, eight days from 25 Kislev";
    TuBishvat => "tu_bishvat", "Tu BiShvat, 15 Shevat";
    PurimKatan => "purim_katan", "Purim Katan, 14 Adar I in leap years";
    Purim => "purim", "Purim, 14 Adar (Adar II in leap years)";
    ShushanPurim => "shushan_purim", "Shushan Purim, 15 Adar";
    Pesach => "pesach", "Pesach, 15-21 Nisan (22 in the diaspora)";
    CholHamoed => "chol_hamoed", "Intermediate days of Pesach and Sukkot";
    SefiratHaomer => "sefirat_haomer", "Counting of the Omer, 16 Nisan - 5 Sivan";
    LagBaomer => "lag_baomer", "Lag BaOmer, 18 Iyyar";
    YomHazikaron => "yom_hazikaron", "Memorial Day, the day before Yom HaAtzmaut";
    YomHaatzmaut => "yom_haatzmaut", "Independence Day, 5 Iyyar as adjusted for Shabbat";
    YomYerushalayim => "yom_yerushalayim", "Jerusalem Day, 28 Iyyar";
    Shavuot => "shavuot", "Shavuot, 6 Sivan (and 7 in the diaspora)";
    TzomGedaliah => "tzom_gedaliah", "Fast of Gedaliah, 3 Tishri";
    AsaraBetevet => "asara_betevet", "Fast of 10 Tevet";
    TaanitEsther => "taanit_esther", "Fast of Esther, 13 Adar";
    ShivaAsarBetammuz => "shiva_asar_betammuz", "Fast of 17 Tammuz";
    TishaBeav => "tisha_beav", "Fast of 9 Av";
    FastDay => "fast_day", "Any public fast other than Yom Kippur";
    ThreeWeeks => "three_weeks", "17 Tammuz through 9 Av";
    NineDays => "nine_days", "1 Av through 9 Av";
    TuBeav => "tu_beav", "Tu B'Av, 15 Av";
    Ledavid => "ledavid", "Psalm 27 season, 1 Elul - 21 Tishri";
    YomTov => "yom_tov", "Festival day on which work is prohibited";
    YaalehVeyavo => "yaaleh_veyavo", "Ya'aleh VeYavo is added";
    AlHanissim => "al_hanissim", "Al HaNissim is added";
    FullHallel => "full_hallel", "Complete Hallel is recited";
    HalfHallel => "half_hallel", "Partial Hallel is recited";
    OmitTachanun => "omit_tachanun", "Tachanun is omitted";
    MashivHaruach => "mashiv_haruach", "Mashiv HaRuach season";
    TalUmatar => "tal_umatar", "Ten Tal UMatar season";
}

/// Names used by earlier prayer texts.
const LEGACY_ALIASES: [(&str, Flag); 7] = [
    ("pesah", Flag::Pesach),
    ("shemini", Flag::SheminiAtzeret),
    ("hanukka", Flag::Chanukah),
    ("rosh-hodesh", Flag::RoshChodesh),
    ("Omer", Flag::SefiratHaomer),
    ("LeDavid", Flag::Ledavid),
    ("tshuva", Flag::AseretYemeiTeshuva),
];

impl Flag {
    /// Looks up a flag by canonical name or legacy alias.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_canonical(name).or_else(|| {
            LEGACY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == name)
                .map(|(_, flag)| *flag)
        })
    }

    /// Position in [`Flag::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Flag {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CalendarError::UnknownFlag(s.to_string()))
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
