use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Driving intent of a tracked vehicle.
///
/// The declaration order is the class order used everywhere in the crate:
/// priors, statistics and posteriors are stored left, keep, right, and the
/// arg-max tie-break prefers the earlier class.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Label {
    Left,
    Keep,
    Right,
}

impl Label {
    pub const COUNT: usize = 3;
    pub const ALL: [Label; Label::COUNT] = [Label::Left, Label::Keep, Label::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Label::Left => 0,
            Label::Keep => 1,
            Label::Right => 2,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Label> {
        Label::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
