//! Weekly tiered overtime calculation.
//!
//! This module prices one calendar week of time entries.
//!
//! ## Tier Structure
//!
//! **Weekly hours are split into three bands:**
//! - First 35 hours: normal, 100%
//! - Hours 35 to 43: first overtime tier, 125%
//! - Beyond 43 hours: second overtime tier, 150%
//!
//! All three bands are priced at the single rate resolved for the week by
//! [`RatePolicy`]. No rounding happens here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{
    CalculationWarning, Severity, TimeEntry, WARN_NEGATIVE_HOURS_IGNORED, WeekCalculation,
};

use super::{RatePolicy, checked_add, checked_mul};

/// Weekly hours billed at the normal rate before overtime starts.
pub const NORMAL_HOURS_LIMIT: Decimal = Decimal::from_parts(35, 0, 0, false, 0);

/// Weekly hours after which the second overtime tier starts.
pub const TIER1_HOURS_LIMIT: Decimal = Decimal::from_parts(43, 0, 0, false, 0);

/// Multiplier for normal hours.
pub const NORMAL_COEFFICIENT: Decimal = Decimal::from_parts(100, 0, 0, false, 2);

/// Multiplier for the first overtime tier.
pub const TIER1_COEFFICIENT: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Multiplier for the second overtime tier.
pub const TIER2_COEFFICIENT: Decimal = Decimal::from_parts(150, 0, 0, false, 2);

/// A week's hours split into the three tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierHours {
    /// Hours up to 35.
    pub normal: Decimal,
    /// Hours between 35 and 43.
    pub tier1: Decimal,
    /// Hours beyond 43.
    pub tier2: Decimal,
}

/// The result of pricing one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCalculationResult {
    /// The priced breakdown.
    pub calculation: WeekCalculation,
    /// Warnings raised for the week's entries or rate.
    pub warnings: Vec<CalculationWarning>,
}

/// Splits a week's total hours into the three tiers.
///
/// Negative totals are treated as zero.
///
/// # Examples
///
/// ```
/// use overtime_billing::calculation::split_week_hours;
/// use rust_decimal::Decimal;
///
/// let tiers = split_week_hours(Decimal::from(45));
/// assert_eq!(tiers.normal, Decimal::from(35));
/// assert_eq!(tiers.tier1, Decimal::from(8));
/// assert_eq!(tiers.tier2, Decimal::from(2));
/// ```
pub fn split_week_hours(total_hours: Decimal) -> TierHours {
    let total = total_hours.max(Decimal::ZERO);

    let normal = total.min(NORMAL_HOURS_LIMIT);
    let tier1 = (total - NORMAL_HOURS_LIMIT)
        .max(Decimal::ZERO)
        .min(TIER1_HOURS_LIMIT - NORMAL_HOURS_LIMIT);
    let tier2 = (total - TIER1_HOURS_LIMIT).max(Decimal::ZERO);

    TierHours {
        normal,
        tier1,
        tier2,
    }
}

/// Prices one week of entries.
///
/// # Arguments
///
/// * `entries` - The week's entries, in week order
/// * `policy` - The rate policy resolving the week's billing rate
///
/// # Returns
///
/// A [`WeekCalculationResult`] with the breakdown and any warnings. An empty
/// week yields an all-zero calculation and no warnings.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`](crate::error::EngineError::ArithmeticOverflow)
/// if the summed hours or any tier amount exceeds the `Decimal` range.
///
/// # Examples
///
/// ## 40 hours at 20
///
/// ```
/// use overtime_billing::calculation::{calculate_week, RatePolicy};
/// use overtime_billing::models::TimeEntry;
/// use rust_decimal::Decimal;
///
/// let entries: Vec<TimeEntry> = (12..=16)
///     .map(|day| TimeEntry {
///         id: format!("te_{}", day),
///         employee_id: "emp_001".to_string(),
///         contract_id: "ctr_001".to_string(),
///         contract_title: "Site maintenance".to_string(),
///         date: format!("2026-01-{}", day),
///         start_time: None,
///         end_time: None,
///         total_hours: Some(Decimal::from(8)),
///         billing_rate: Some(Decimal::from(20)),
///         notes: None,
///     })
///     .collect();
///
/// let result = calculate_week(&entries, &RatePolicy::default()).unwrap();
/// assert_eq!(result.calculation.normal_amount, Decimal::from(700));
/// assert_eq!(result.calculation.overtime125_amount, Decimal::from(125));
/// assert_eq!(result.calculation.total_week_amount, Decimal::from(825));
/// ```
pub fn calculate_week(
    entries: &[TimeEntry],
    policy: &RatePolicy,
) -> EngineResult<WeekCalculationResult> {
    let mut warnings = Vec::new();
    let level = format!(
        "week of {}",
        entries.first().map(|e| e.employee_id.as_str()).unwrap_or_default()
    );

    for entry in entries.iter().filter(|e| e.has_negative_hours()) {
        warn!(
            employee_id = %entry.employee_id,
            entry_id = %entry.id,
            "Negative hours on time entry counted as zero"
        );
        warnings.push(
            CalculationWarning::new(
                WARN_NEGATIVE_HOURS_IGNORED,
                format!(
                    "Entry dated {} has negative hours; counted as zero",
                    entry.date
                ),
                Severity::Low,
            )
            .for_employee(&entry.employee_id)
            .for_entry(&entry.id),
        );
    }

    let total_week_hours = entries.iter().try_fold(Decimal::ZERO, |sum, entry| {
        checked_add(sum, entry.effective_hours(), &level)
    })?;
    let tiers = split_week_hours(total_week_hours);

    let resolution = policy.resolve(entries);
    warnings.extend(resolution.warnings);
    let rate = resolution.rate;

    let normal_amount = tier_amount(tiers.normal, rate, NORMAL_COEFFICIENT, &level)?;
    let overtime125_amount = tier_amount(tiers.tier1, rate, TIER1_COEFFICIENT, &level)?;
    let overtime150_amount = tier_amount(tiers.tier2, rate, TIER2_COEFFICIENT, &level)?;
    let total_week_amount = checked_add(
        checked_add(normal_amount, overtime125_amount, &level)?,
        overtime150_amount,
        &level,
    )?;

    debug!(
        entries = entries.len(),
        total_hours = %total_week_hours,
        normal_hours = %tiers.normal,
        overtime125 = %tiers.tier1,
        overtime150 = %tiers.tier2,
        rate = %rate,
        total_amount = %total_week_amount,
        "Week calculated"
    );

    Ok(WeekCalculationResult {
        calculation: WeekCalculation {
            total_week_hours,
            normal_hours: tiers.normal,
            overtime125: tiers.tier1,
            overtime150: tiers.tier2,
            normal_amount,
            overtime125_amount,
            overtime150_amount,
            total_week_amount,
            average_billing_rate: rate,
            rate_source: resolution.source,
        },
        warnings,
    })
}

/// Hours × (rate × coefficient). The unit price is checked even for zero
/// hours so line items can derive it without overflow.
fn tier_amount(
    hours: Decimal,
    rate: Decimal,
    coefficient: Decimal,
    level: &str,
) -> EngineResult<Decimal> {
    let unit_price = checked_mul(rate, coefficient, level)?;
    checked_mul(hours, unit_price, level)
}
