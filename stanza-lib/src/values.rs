//! Typed views over raw field values.
//!
//! Storage is always a string; these conversions only happen when a value is
//! read or written through [`crate::ConfigFile`]. A value that can't be
//! interpreted as the requested type reads as `None`.

use std::sync::LazyLock;

use regex::Regex;

pub const FLAG_INDEXES_GROUP_NAME: &str = "indexes";

static FLAG_LIST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\(\s*(?P<{FLAG_INDEXES_GROUP_NAME}>\d+(?:\s*,\s*\d+)*)?\s*\)$"))
        .expect("flag list regex is valid")
});

pub trait ConfigValue: Sized {
    fn from_raw(raw: &str) -> Option<Self>;
    fn to_raw(&self) -> String;
}

impl ConfigValue for String {
    fn from_raw(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }

    fn to_raw(&self) -> String {
        self.clone()
    }
}

macro_rules! integer_config_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConfigValue for $ty {
                fn from_raw(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }

                fn to_raw(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_config_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Stored as an integer; anything non-zero is `true`.
impl ConfigValue for bool {
    fn from_raw(raw: &str) -> Option<Self> {
        i64::from_raw(raw).map(|value| value != 0)
    }

    fn to_raw(&self) -> String {
        String::from(if *self { "1" } else { "0" })
    }
}

macro_rules! float_config_value {
    ($($ty:ty),*) => {
        $(
            /// A decimal comma is read as a decimal point.
            impl ConfigValue for $ty {
                fn from_raw(raw: &str) -> Option<Self> {
                    raw.replace(',', ".").parse().ok()
                }

                fn to_raw(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

float_config_value!(f32, f64);

impl ConfigValue for char {
    fn from_raw(raw: &str) -> Option<Self> {
        raw.chars().next()
    }

    fn to_raw(&self) -> String {
        self.to_string()
    }
}

/// A set of bit flags, written as the list of set bit indexes: `(0, 4, 7)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet(pub u64);

impl FlagSet {
    pub fn from_bit_indexes(indexes: impl IntoIterator<Item = u32>) -> Option<Self> {
        indexes
            .into_iter()
            .try_fold(0u64, |bits, index| Some(bits | 1u64.checked_shl(index)?))
            .map(Self)
    }

    pub fn bit_indexes(&self) -> impl Iterator<Item = u32> + use<> {
        let bits = self.0;
        (0..u64::BITS).filter(move |index| bits & (1u64 << *index) != 0)
    }

    pub fn contains(&self, index: u32) -> bool {
        index < u64::BITS && self.0 & (1u64 << index) != 0
    }
}

impl ConfigValue for FlagSet {
    fn from_raw(raw: &str) -> Option<Self> {
        let captures = FLAG_LIST_REGEX.captures(raw.trim())?;
        let Some(indexes) = captures.name(FLAG_INDEXES_GROUP_NAME) else {
            return Some(Self::default());
        };

        let indexes = indexes
            .as_str()
            .split(',')
            .map(|index| index.trim().parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()?;

        Self::from_bit_indexes(indexes)
    }

    fn to_raw(&self) -> String {
        let indexes: Vec<String> = self.bit_indexes().map(|index| index.to_string()).collect();
        format!("({})", indexes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_round_trip_at_every_width() {
        assert_eq!(i8::from_raw(&(-123i8).to_raw()), Some(-123));
        assert_eq!(i64::from_raw("-1234567890"), Some(-1234567890));
        assert_eq!(u64::from_raw(&u64::MAX.to_raw()), Some(u64::MAX));
        assert_eq!(u8::from_raw("256"), None);
        assert_eq!(i32::from_raw("twelve"), None);
    }

    #[test]
    fn booleans_are_integers() {
        assert_eq!(true.to_raw(), "1");
        assert_eq!(false.to_raw(), "0");
        assert_eq!(bool::from_raw("7"), Some(true));
        assert_eq!(bool::from_raw("0"), Some(false));
        assert_eq!(bool::from_raw("yes"), None);
    }

    #[test]
    fn floats_accept_decimal_comma() {
        assert_eq!(f64::from_raw("12345,12345"), Some(12345.12345));
        assert_eq!(f32::from_raw(&123.123f32.to_raw()), Some(123.123));
    }

    #[test]
    fn char_is_the_first_character() {
        assert_eq!(char::from_raw("🐉 dragon"), Some('🐉'));
        assert_eq!(char::from_raw(""), None);
    }

    #[test]
    fn flag_sets_use_bit_index_lists() {
        let flags = FlagSet::from_bit_indexes([0, 4, 7]).unwrap();
        assert_eq!(flags.to_raw(), "(0, 4, 7)");
        assert_eq!(FlagSet::from_raw("(0, 4, 7)"), Some(flags));
        assert_eq!(FlagSet::from_raw("(0,4,7)"), Some(flags));
        assert_eq!(FlagSet::from_raw("()"), Some(FlagSet(0)));
        assert_eq!(FlagSet(1 << 63).to_raw(), "(63)");
        assert!(flags.contains(4) && !flags.contains(5) && !flags.contains(64));
    }

    #[test]
    fn malformed_flag_sets_are_absent() {
        assert_eq!(FlagSet::from_raw("0, 4"), None);
        assert_eq!(FlagSet::from_raw("(0, x)"), None);
        assert_eq!(FlagSet::from_raw("(64)"), None);
        assert_eq!(FlagSet::from_bit_indexes([64]), None);
    }
}
