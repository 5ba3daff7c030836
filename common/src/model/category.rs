use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a data-quality check.
///
/// When a check carries generated code its category is never chosen by hand:
/// it is derived from the code with [`CheckCategory::infer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum CheckCategory {
    Completeness,
    ContainedIn,
    Pattern,
    Satisfies,
    DataType,
    Uniqueness,
    #[serde(rename = "Row Count")]
    RowCount,
    #[serde(rename = "Numeric Ranges")]
    NumericRanges,
    #[default]
    Other,
}

/// Method-call markers tested against generated code, in precedence order.
/// The first row with a matching marker wins.
const MARKERS: &[(&[&str], CheckCategory)] = &[
    (&[".isComplete"], CheckCategory::Completeness),
    (&[".isContainedIn"], CheckCategory::ContainedIn),
    (&[".hasPattern"], CheckCategory::Pattern),
    (&[".satisfies"], CheckCategory::Satisfies),
    (&[".hasDataType"], CheckCategory::DataType),
    (&[".isUnique"], CheckCategory::Uniqueness),
    (&[".hasSize"], CheckCategory::RowCount),
    (
        &[".hasMin", ".hasMean", ".hasMax", ".hasStandardDeviation"],
        CheckCategory::NumericRanges,
    ),
];

impl CheckCategory {
    /// Every category, in the order the editor lists them.
    pub const ALL: [CheckCategory; 9] = [
        CheckCategory::Completeness,
        CheckCategory::ContainedIn,
        CheckCategory::Pattern,
        CheckCategory::Satisfies,
        CheckCategory::DataType,
        CheckCategory::Uniqueness,
        CheckCategory::RowCount,
        CheckCategory::NumericRanges,
        CheckCategory::Other,
    ];

    /// Classifies generated verification code. Total: empty or unknown code is `Other`.
    pub fn infer(code: &str) -> CheckCategory {
        MARKERS
            .iter()
            .find(|(markers, _)| markers.iter().any(|marker| code.contains(marker)))
            .map(|(_, category)| *category)
            .unwrap_or(CheckCategory::Other)
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckCategory::Completeness => "Completeness",
            CheckCategory::ContainedIn => "ContainedIn",
            CheckCategory::Pattern => "Pattern",
            CheckCategory::Satisfies => "Satisfies",
            CheckCategory::DataType => "DataType",
            CheckCategory::Uniqueness => "Uniqueness",
            CheckCategory::RowCount => "Row Count",
            CheckCategory::NumericRanges => "Numeric Ranges",
            CheckCategory::Other => "Other",
        }
    }

    /// Example description shown in the editor for this category and column.
    pub fn description_hint(self, column: &str) -> String {
        match self {
            CheckCategory::Completeness => format!("e.g., '{column}' is not null"),
            CheckCategory::ContainedIn => format!("e.g., '{column}' has value range 'A', 'B', 'C'"),
            CheckCategory::Pattern => {
                format!("e.g., '{column}' matches pattern '^[A-Z]{{3}}[0-9]{{2}}$'")
            }
            CheckCategory::Satisfies => format!("e.g., '{column}' has less than 2% missing values"),
            CheckCategory::DataType => format!("e.g., '{column}' has type Integral"),
            CheckCategory::Uniqueness => format!("e.g., '{column}' is unique"),
            CheckCategory::RowCount => "e.g., Row count is greater than 0".to_string(),
            CheckCategory::NumericRanges => format!("e.g., '{column}' has no negative values"),
            CheckCategory::Other => "Enter check description".to_string(),
        }
    }

    /// CSS modifier used by the list badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            CheckCategory::Completeness => "badge-completeness",
            CheckCategory::ContainedIn => "badge-contained-in",
            CheckCategory::Pattern => "badge-pattern",
            CheckCategory::Satisfies => "badge-satisfies",
            CheckCategory::DataType => "badge-data-type",
            CheckCategory::Uniqueness => "badge-uniqueness",
            CheckCategory::RowCount => "badge-row-count",
            CheckCategory::NumericRanges => "badge-numeric-ranges",
            CheckCategory::Other => "badge-other",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown check category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for CheckCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_marker_maps_to_its_category() {
        let cases = [
            (".isComplete(\"a\")", CheckCategory::Completeness),
            (".isContainedIn(\"a\", Array(\"x\"))", CheckCategory::ContainedIn),
            (".hasPattern(\"a\", \"^x$\".r)", CheckCategory::Pattern),
            (".satisfies(\"a > 0\", \"positive\")", CheckCategory::Satisfies),
            (".hasDataType(\"a\", ConstrainableDataTypes.Integral)", CheckCategory::DataType),
            (".isUnique(\"a\")", CheckCategory::Uniqueness),
            (".hasSize(_ > 0)", CheckCategory::RowCount),
            (".hasMin(\"a\", _ >= 0)", CheckCategory::NumericRanges),
            (".hasMean(\"a\", _ < 10)", CheckCategory::NumericRanges),
            (".hasMax(\"a\", _ <= 99)", CheckCategory::NumericRanges),
            (".hasStandardDeviation(\"a\", _ < 2)", CheckCategory::NumericRanges),
        ];
        for (code, expected) in cases {
            assert_eq!(CheckCategory::infer(code), expected, "code: {code}");
        }
    }

    #[test]
    fn empty_or_unknown_code_is_other() {
        assert_eq!(CheckCategory::infer(""), CheckCategory::Other);
        assert_eq!(CheckCategory::infer("-"), CheckCategory::Other);
        assert_eq!(CheckCategory::infer(".hasCompleteness(\"a\", _ > 0.9)"), CheckCategory::Other);
    }

    #[test]
    fn earlier_marker_takes_precedence() {
        let code = ".hasMin(\"a\", _ > 0).isComplete(\"a\")";
        assert_eq!(CheckCategory::infer(code), CheckCategory::Completeness);

        let code = ".hasSize(_ > 0).isUnique(\"id\")";
        assert_eq!(CheckCategory::infer(code), CheckCategory::Uniqueness);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for category in CheckCategory::ALL {
            assert_eq!(category.label().parse::<CheckCategory>(), Ok(category));
        }
        assert!("size".parse::<CheckCategory>().is_err());
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&CheckCategory::RowCount).unwrap();
        assert_eq!(json, "\"Row Count\"");
        let parsed: CheckCategory = serde_json::from_str("\"Numeric Ranges\"").unwrap();
        assert_eq!(parsed, CheckCategory::NumericRanges);
    }

    #[test]
    fn hint_mentions_the_column() {
        assert_eq!(
            CheckCategory::Completeness.description_hint("AMT"),
            "e.g., 'AMT' is not null"
        );
        assert_eq!(
            CheckCategory::RowCount.description_hint("AMT"),
            "e.g., Row count is greater than 0"
        );
    }
}
