//! Macro for implementing string conversions on choice enums
//!
//! Choice fields on the hosted tables carry their value as a display label
//! (`"In Progress"`, `"X Large (51+)"`). This macro maps each variant to its
//! label once and derives `Display`, `FromStr`, `as_str` and an ordered `ALL`
//! list from that single table.
//!
//! # Example
//!
//! ```rust
//! use rfshop_domain::impl_choice_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Urgency {
//!     Low,
//!     High,
//! }
//!
//! impl_choice_conversions!(Urgency {
//!     Low => "Low",
//!     High => "High",
//! });
//!
//! assert_eq!(Urgency::ALL, &[Urgency::Low, Urgency::High]);
//! assert_eq!("High".parse::<Urgency>(), Ok(Urgency::High));
//! ```

/// Implements label conversions for a choice enum
///
/// This macro generates:
/// - `ALL`: every variant in declaration order
/// - `as_str`: the backend label for a variant
/// - `labels`: the labels of `ALL`, owned
/// - Display: writes the label
/// - FromStr: exact, case-sensitive label match
///
/// Matching is exact because the backend compares labels exactly; `"sent"`
/// is not the status `"SENT"`.
#[macro_export]
macro_rules! impl_choice_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in backend declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Backend label for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }

            /// Backend labels for every variant, in declaration order.
            pub fn labels() -> Vec<String> {
                Self::ALL.iter().map(|v| v.as_str().to_string()).collect()
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        NotStarted,
        InProgress,
        Done,
    }

    impl_choice_conversions!(TestStatus {
        NotStarted => "Not started",
        InProgress => "In Progress",
        Done => "Done",
    });

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TestStatus::NotStarted.to_string(), "Not started");
        assert_eq!(TestStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_fromstr_exact_label() {
        assert_eq!(TestStatus::from_str("In Progress").unwrap(), TestStatus::InProgress);
        assert_eq!(TestStatus::from_str("Done").unwrap(), TestStatus::Done);
    }

    #[test]
    fn test_fromstr_is_case_sensitive() {
        assert!(TestStatus::from_str("in progress").is_err());
        assert!(TestStatus::from_str("DONE").is_err());
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("Blocked");
        assert!(result.unwrap_err().contains("Invalid TestStatus: Blocked"));
        assert!(TestStatus::from_str("").is_err());
    }

    #[test]
    fn test_all_and_labels_keep_declaration_order() {
        assert_eq!(
            TestStatus::ALL,
            &[TestStatus::NotStarted, TestStatus::InProgress, TestStatus::Done]
        );
        assert_eq!(TestStatus::labels(), vec!["Not started", "In Progress", "Done"]);
    }
}
