//! Status and triage enums for storefront entities.
//!
//! Wire values (serde and `Display`) match what the dashboard sends and what
//! the database stores as text, including the multi-word forms
//! ("Out of Stock", "In Progress", "On Leave").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a status string does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// The enum a parse was attempted for.
    pub expected: &'static str,
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.expected, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire representation, as stored in the database.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ParseEnumError {
                        expected: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Lifecycle status of a catalog product.
    ProductStatus {
        Active => "Active",
        Draft => "Draft",
        OutOfStock => "Out of Stock",
    }
}

wire_enum! {
    /// Lifecycle status of a blog post.
    PostStatus {
        Draft => "Draft",
        Published => "Published",
        Scheduled => "Scheduled",
    }
}

wire_enum! {
    /// Triage status of a contact inquiry.
    ContactStatus {
        New => "New",
        InProgress => "In Progress",
        Replied => "Replied",
        Closed => "Closed",
    }
}

wire_enum! {
    /// Triage priority of a contact inquiry.
    ContactPriority {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

wire_enum! {
    /// Employment status of a team member.
    MemberStatus {
        Active => "Active",
        OnLeave => "On Leave",
        Inactive => "Inactive",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_wire_values_round_trip() {
        assert_eq!(ProductStatus::OutOfStock.as_str(), "Out of Stock");
        assert_eq!("Out of Stock".parse(), Ok(ProductStatus::OutOfStock));
        assert_eq!("In Progress".parse(), Ok(ContactStatus::InProgress));
        assert_eq!("On Leave".parse(), Ok(MemberStatus::OnLeave));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "Archived".parse::<ProductStatus>().unwrap_err();
        assert_eq!(err.expected, "ProductStatus");
        assert_eq!(err.value, "Archived");
    }

    #[test]
    fn parse_is_case_sensitive() {
        // Wire values are canonical; "active" is not a valid status.
        assert!("active".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn serde_uses_wire_values() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&ContactStatus::InProgress)?;
        assert_eq!(json, "\"In Progress\"");
        let back: ContactStatus = serde_json::from_str(&json)?;
        assert_eq!(back, ContactStatus::InProgress);
        Ok(())
    }

    #[test]
    fn display_matches_serde() -> Result<(), serde_json::Error> {
        let display = PostStatus::Scheduled.to_string();
        let json: String = serde_json::from_str(&serde_json::to_string(&PostStatus::Scheduled)?)?;
        assert_eq!(display, json);
        Ok(())
    }
}
