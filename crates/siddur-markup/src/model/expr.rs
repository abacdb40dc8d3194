use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use siddur_luach::{Flag, FlagSet};

/// A boolean condition over flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanExpr {
    Flag(Flag),
    Not(Box<BooleanExpr>),
    /// True when every operand is true.
    All(Vec<BooleanExpr>),
    /// True when any operand is true.
    Any(Vec<BooleanExpr>),
}

impl BooleanExpr {
    #[must_use]
    pub fn flag(flag: Flag) -> Self {
        Self::Flag(flag)
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Evaluates against a flag set, short-circuiting `All` and `Any`.
    #[must_use]
    pub fn evaluate(&self, flags: &FlagSet) -> bool {
        match self {
            Self::Flag(flag) => flags[*flag],
            Self::Not(inner) => !inner.evaluate(flags),
            Self::All(operands) => operands.iter().all(|op| op.evaluate(flags)),
            Self::Any(operands) => operands.iter().any(|op| op.evaluate(flags)),
        }
    }

    pub(crate) fn collect_flags(&self, flags: &mut BTreeSet<Flag>) {
        match self {
            Self::Flag(flag) => {
                flags.insert(*flag);
            }
            Self::Not(inner) => inner.collect_flags(flags),
            Self::All(operands) | Self::Any(operands) => {
                for op in operands {
                    op.collect_flags(flags);
                }
            }
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All(_) | Self::Any(_) => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

/// Canonical form, parseable by [`parse_condition`](crate::parse_condition).
impl fmt::Display for BooleanExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (operands, separator) = match self {
            Self::Flag(flag) => return f.write_str(flag.as_str()),
            Self::Not(inner) => {
                f.write_str("!")?;
                return inner.fmt_operand(f);
            }
            Self::All(operands) => (operands, " & "),
            Self::Any(operands) => (operands, " | "),
        };
        for (position, op) in operands.iter().enumerate() {
            if position > 0 {
                f.write_str(separator)?;
            }
            op.fmt_operand(f)?;
        }
        Ok(())
    }
}
