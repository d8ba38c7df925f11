//! Billable line item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WeekKey;

/// The pricing tier of a line item.
///
/// # Example
///
/// ```
/// use overtime_billing::models::LineItemType;
///
/// let json = serde_json::to_string(&LineItemType::OvertimeTier1).unwrap();
/// assert_eq!(json, "\"OVERTIME_TIER1\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemType {
    /// Normal hours at 100%.
    Normal,
    /// First overtime tier at 125%.
    OvertimeTier1,
    /// Second overtime tier at 150%.
    OvertimeTier2,
}

/// One priced row handed to the document renderer.
///
/// Values are copied verbatim from the week's calculation, so the rendered
/// document always matches the on-screen totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The employee the hours belong to.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// The week the hours were worked in.
    pub week_key: WeekKey,
    /// Display label of the week, e.g. `2026-01-12 to 2026-01-18`.
    pub week_period: String,
    /// The pricing tier.
    #[serde(rename = "type")]
    pub line_type: LineItemType,
    /// Hours billed on this line.
    pub hours: Decimal,
    /// Tier multiplier applied to the week's rate.
    pub coefficient: Decimal,
    /// Price per hour on this line (rate multiplied by coefficient).
    pub unit_price: Decimal,
    /// Amount for this line.
    pub amount: Decimal,
}
