use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Global 1-based cup number, counted sector-major around the disk.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
)]
#[serde(transparent)]
pub struct SlotNumber(u32);

crate::impl_index_newtype!(SlotNumber, u32);

/// 0-based sector position around the disk.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
)]
#[serde(transparent)]
pub struct SectorIndex(usize);

crate::impl_index_newtype!(SectorIndex, usize);

/// Cup state as reported by the instrument. The numeric aliases are the
/// instrument's wire codes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    #[default]
    #[strum(to_string = "spare", serialize = "0")]
    Spare,
    #[strum(to_string = "fill_a", serialize = "r1", serialize = "1")]
    FillA,
    #[strum(to_string = "fill_b", serialize = "r2", serialize = "2")]
    FillB,
    #[strum(to_string = "wait_clean", serialize = "3")]
    WaitClean,
    #[strum(to_string = "disabled", serialize = "disable", serialize = "4")]
    Disabled,
}

impl SlotStatus {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::iter().nth(code as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialization() {
        let cases = vec![
            ("\"spare\"", SlotStatus::Spare),
            ("\"SPARE\"", SlotStatus::Spare),
            ("\"0\"", SlotStatus::Spare),
            ("\"fill_a\"", SlotStatus::FillA),
            ("\"R1\"", SlotStatus::FillA),
            ("\"fill_b\"", SlotStatus::FillB),
            ("\"3\"", SlotStatus::WaitClean),
            ("\"Disabled\"", SlotStatus::Disabled),
            ("\"disable\"", SlotStatus::Disabled),
            ("\"4\"", SlotStatus::Disabled),
        ];

        for (json, expected) in cases {
            let deserialized: SlotStatus = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }

        assert!(serde_json::from_str::<SlotStatus>("\"5\"").is_err());
    }

    #[test]
    fn test_status_display_parses_back() {
        for status in SlotStatus::iter() {
            assert_eq!(status.to_string().parse::<SlotStatus>().unwrap(), status);
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{status}\"")
            );
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SlotStatus::Spare.code(), 0);
        assert_eq!(SlotStatus::Disabled.code(), 4);
        assert_eq!(SlotStatus::from_code(2), Some(SlotStatus::FillB));
        assert_eq!(SlotStatus::from_code(5), None);
    }

    #[test]
    fn test_index_newtypes() {
        let n = SlotNumber::new(13);
        assert_eq!(*n, 13);
        assert_eq!(n.get(), 13);
        assert_eq!(n.to_string(), "13");
        assert_eq!(SectorIndex::from(2).get(), 2);
        assert_eq!(serde_json::to_string(&SectorIndex::new(4)).unwrap(), "4");
    }
}
