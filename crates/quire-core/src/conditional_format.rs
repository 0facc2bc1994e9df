//! Conditional formatting
//!
//! A rule highlights cells with a differential format (DXF) when its
//! condition holds. The format is a regular [`FormatId`]; it gets its DXF
//! index when the rule is added to a worksheet.
//!
//! ## Example
//!
//! ```rust
//! use quire_core::{CellRange, ConditionalFormatRule, Workbook};
//! use quire_core::style::{Color, Style};
//!
//! let mut workbook = Workbook::new();
//! let red = workbook.add_format(Style::new().font_color(Color::RED));
//! let sheet_index = workbook.add_worksheet().unwrap();
//!
//! let rule = ConditionalFormatRule::cell_is_greater_than("100").with_format(red);
//! workbook
//!     .worksheet_mut(sheet_index)
//!     .unwrap()
//!     .conditional_format(CellRange::parse("A1:A10").unwrap(), rule)
//!     .unwrap();
//! ```

use crate::cell::CellRange;
use crate::style::FormatId;

/// A conditional formatting rule
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormatRule {
    /// Rule type
    pub rule_type: CfRuleType,
    /// Format applied when the rule matches
    pub format: Option<FormatId>,
    /// Stop evaluating lower priority rules when this one matches
    pub stop_if_true: bool,
}

impl ConditionalFormatRule {
    /// Create a new conditional format rule
    pub fn new(rule_type: CfRuleType) -> Self {
        Self {
            rule_type,
            format: None,
            stop_if_true: false,
        }
    }

    /// Cells comparing to one value with `operator`
    pub fn cell_is(operator: CfOperator, value: impl Into<String>) -> Self {
        Self::new(CfRuleType::CellIs {
            operator,
            formula1: value.into(),
            formula2: None,
        })
    }

    /// Highlight cells greater than a value
    pub fn cell_is_greater_than(value: impl Into<String>) -> Self {
        Self::cell_is(CfOperator::GreaterThan, value)
    }

    /// Highlight cells less than a value
    pub fn cell_is_less_than(value: impl Into<String>) -> Self {
        Self::cell_is(CfOperator::LessThan, value)
    }

    /// Highlight cells equal to a value
    pub fn cell_is_equal_to(value: impl Into<String>) -> Self {
        Self::cell_is(CfOperator::Equal, value)
    }

    /// Highlight cells between two values
    pub fn cell_is_between(value1: impl Into<String>, value2: impl Into<String>) -> Self {
        Self::new(CfRuleType::CellIs {
            operator: CfOperator::Between,
            formula1: value1.into(),
            formula2: Some(value2.into()),
        })
    }

    /// Highlight cells outside two values
    pub fn cell_is_not_between(value1: impl Into<String>, value2: impl Into<String>) -> Self {
        Self::new(CfRuleType::CellIs {
            operator: CfOperator::NotBetween,
            formula1: value1.into(),
            formula2: Some(value2.into()),
        })
    }

    /// Highlight cells where formula evaluates to TRUE
    pub fn expression(formula: impl Into<String>) -> Self {
        Self::new(CfRuleType::Expression {
            formula: formula.into(),
        })
    }

    /// Set the format to apply when rule matches
    pub fn with_format(mut self, format: FormatId) -> Self {
        self.format = Some(format);
        self
    }

    /// Set whether to stop processing further rules if this one matches
    pub fn with_stop_if_true(mut self, stop: bool) -> Self {
        self.stop_if_true = stop;
        self
    }
}

/// Types of conditional formatting rules
#[derive(Debug, Clone, PartialEq)]
pub enum CfRuleType {
    /// Cell value comparison (e.g., "greater than 100")
    CellIs {
        operator: CfOperator,
        formula1: String,
        formula2: Option<String>,
    },

    /// Formula evaluates to TRUE
    Expression { formula: String },
}

impl CfRuleType {
    /// The `type` attribute of `<cfRule>`
    pub fn xlsx_type(&self) -> &'static str {
        match self {
            CfRuleType::CellIs { .. } => "cellIs",
            CfRuleType::Expression { .. } => "expression",
        }
    }
}

/// Comparison operators for `cellIs` rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CfOperator {
    /// Value is between formula1 and formula2
    #[default]
    Between,
    /// Value is NOT between formula1 and formula2
    NotBetween,
    /// Value equals formula1
    Equal,
    /// Value does NOT equal formula1
    NotEqual,
    /// Value is greater than formula1
    GreaterThan,
    /// Value is less than formula1
    LessThan,
    /// Value is greater than or equal to formula1
    GreaterThanOrEqual,
    /// Value is less than or equal to formula1
    LessThanOrEqual,
}

impl CfOperator {
    /// Get the XLSX operator string
    pub fn xlsx_operator(&self) -> &'static str {
        match self {
            CfOperator::Between => "between",
            CfOperator::NotBetween => "notBetween",
            CfOperator::Equal => "equal",
            CfOperator::NotEqual => "notEqual",
            CfOperator::GreaterThan => "greaterThan",
            CfOperator::LessThan => "lessThan",
            CfOperator::GreaterThanOrEqual => "greaterThanOrEqual",
            CfOperator::LessThanOrEqual => "lessThanOrEqual",
        }
    }
}

/// A rule placed on a worksheet range, with its resolved indices
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormat {
    /// Cells the rule covers
    pub range: CellRange,
    /// The rule itself
    pub rule: ConditionalFormatRule,
    /// Rule priority within the sheet, starting at 1
    pub priority: u32,
    /// DXF index of the rule's format
    pub dxf_index: Option<u32>,
}
