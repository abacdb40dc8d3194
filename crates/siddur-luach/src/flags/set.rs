use std::fmt;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::flag::Flag;

/// Truth value of every flag for one day.
///
/// Total over the vocabulary: there is no "unknown" state. Values are built
/// once by the evaluator and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet {
    values: [bool; Flag::COUNT],
}

impl FlagSet {
    pub(crate) fn from_fn(mut f: impl FnMut(Flag) -> bool) -> Self {
        let mut values = [false; Flag::COUNT];
        for flag in Flag::ALL {
            values[flag.index()] = f(*flag);
        }
        Self { values }
    }

    /// A set where every flag is false.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            values: [false; Flag::COUNT],
        }
    }

    /// A set where exactly the given flags are true.
    #[must_use]
    pub fn from_active(active: impl IntoIterator<Item = Flag>) -> Self {
        active
            .into_iter()
            .fold(Self::none(), |set, flag| set.with(flag, true))
    }

    /// Copy of this set with one flag overridden.
    #[must_use]
    pub const fn with(mut self, flag: Flag, value: bool) -> Self {
        self.values[flag.index()] = value;
        self
    }

    #[must_use]
    pub const fn get(&self, flag: Flag) -> bool {
        self.values[flag.index()]
    }

    /// Looks up a flag by name (canonical or legacy alias).
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<bool> {
        Flag::from_name(name).map(|flag| self.get(flag))
    }

    /// Every flag with its value, in vocabulary order.
    pub fn entries(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        Flag::ALL.iter().map(|flag| (*flag, self.get(*flag)))
    }

    /// The flags that are true, in vocabulary order.
    pub fn active(&self) -> impl Iterator<Item = Flag> + '_ {
        self.entries()
            .filter_map(|(flag, value)| value.then_some(flag))
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        Self::none()
    }
}

impl Index<Flag> for FlagSet {
    type Output = bool;

    fn index(&self, flag: Flag) -> &bool {
        &self.values[flag.index()]
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Flag::COUNT))?;
        for (flag, value) in self.entries() {
            map.serialize_entry(flag.as_str(), &value)?;
        }
        map.end()
    }
}

/// Active flags joined with `|`, e.g. `rosh_chodesh|chanukah`.
impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, flag) in self.active().enumerate() {
            if position > 0 {
                f.write_str("|")?;
            }
            f.write_str(flag.as_str())?;
        }
        Ok(())
    }
}
