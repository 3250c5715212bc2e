use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Field, FieldError};

/// A closed set of options the respondent picks one of.
///
/// Every option has a wire value (what the collector receives) and a label
/// (what the respondent reads). For zones and purposes both are the same.
pub trait Choice: Copy + PartialEq + 'static {
    /// All options, in display order.
    const ALL: &'static [Self];

    /// The field this choice is stored in.
    const FIELD: Field;

    /// The value sent to the collector.
    fn as_str(self) -> &'static str;

    /// The human-readable label.
    fn label(self) -> &'static str;

    /// Parse an option from its wire value.
    fn parse(value: &str) -> Result<Self, FieldError> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.as_str() == value)
            .ok_or_else(|| FieldError::UnknownOption {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }

    /// Position of this option in `ALL`.
    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .unwrap_or_default()
    }

    /// The following option, wrapping around.
    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding option, wrapping around.
    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident in $field:expr => {
            $( $(#[$vmeta:meta])* $variant:ident = ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const FIELD: Field = $field;

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Choice>::parse(s)
            }
        }
    };
}

choice! {
    /// Service zone of the respondent's connection.
    Zone in Field::Zone => {
        North = ("North Zone", "North Zone"),
        East = ("East Zone", "East Zone"),
        South = ("South Zone", "South Zone"),
        West = ("West Zone", "West Zone"),
        #[default]
        Central = ("Central Zone", "Central Zone"),
    }
}

choice! {
    /// Why the respondent was in contact with the utility.
    Purpose in Field::Purpose => {
        #[default]
        Residential = ("Residential service", "Residential service"),
        Commercial = ("Commercial service", "Commercial service"),
        MoveInOut = ("Move-in or move-out", "Move-in or move-out"),
        ReportingIssue = ("Reporting an issue", "Reporting an issue"),
    }
}

choice! {
    /// Overall impression of the water service.
    Experience in Field::Experience => {
        Excellent = ("excellent", "Excellent"),
        #[default]
        Good = ("good", "Good"),
        Ok = ("ok", "Okay"),
        Poor = ("poor", "Needs work"),
    }
}

choice! {
    /// One of the four rated service dimensions.
    Topic in Field::Topics => {
        #[default]
        Pressure = ("pressure", "Water pressure"),
        Quality = ("quality", "Water quality"),
        Billing = ("billing", "Billing clarity"),
        Support = ("support", "Customer support"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Zone::default(), Zone::Central);
        assert_eq!(Purpose::default(), Purpose::Residential);
        assert_eq!(Experience::default(), Experience::Good);
    }

    #[test]
    fn parse_wire_values() {
        assert_eq!("West Zone".parse::<Zone>().unwrap(), Zone::West);
        assert_eq!("ok".parse::<Experience>().unwrap(), Experience::Ok);
        assert_eq!(
            "Move-in or move-out".parse::<Purpose>().unwrap(),
            Purpose::MoveInOut
        );
    }

    #[test]
    fn parse_rejects_labels_that_are_not_wire_values() {
        let result = "Needs work".parse::<Experience>();
        assert!(matches!(
            result,
            Err(FieldError::UnknownOption {
                field: Field::Experience,
                ..
            })
        ));
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Zone::Central.next(), Zone::North);
        assert_eq!(Zone::North.prev(), Zone::Central);
        assert_eq!(Experience::Excellent.next(), Experience::Good);
    }

    #[test]
    fn serializes_to_wire_value() {
        assert_eq!(
            serde_json::to_string(&Zone::Central).unwrap(),
            "\"Central Zone\""
        );
        assert_eq!(serde_json::to_string(&Experience::Poor).unwrap(), "\"poor\"");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Experience::Ok.to_string(), "Okay");
        assert_eq!(Topic::Billing.to_string(), "Billing clarity");
    }
}
