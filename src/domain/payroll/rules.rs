//! Tiered commission and session-price rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// A commission tier keyed by monthly new-contract revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRule {
    /// Minimum new-contract revenue for this tier to apply.
    pub threshold: f64,
    pub commission_rate: Percentage,
    /// Flat bonus paid on top of commission when the tier applies.
    #[serde(default)]
    pub incentive: f64,
}

/// The tier selected for a trainer-month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTier {
    pub rate: Percentage,
    pub incentive: f64,
    /// Threshold of the matched rule; `None` when nothing matched.
    pub threshold: Option<f64>,
}

impl CommissionTier {
    /// Result when no rule applies: zero rate, zero incentive.
    pub const NONE: Self = Self {
        rate: Percentage::ZERO,
        incentive: 0.0,
        threshold: None,
    };
}

impl From<&CommissionRule> for CommissionTier {
    fn from(rule: &CommissionRule) -> Self {
        Self {
            rate: rule.commission_rate,
            incentive: rule.incentive,
            threshold: Some(rule.threshold),
        }
    }
}

/// Selects the tier with the highest threshold not exceeding `revenue`.
///
/// Rules need not be sorted. Among rules sharing a threshold, the one listed
/// first wins.
pub fn resolve_commission_tier(rules: &[CommissionRule], revenue: f64) -> CommissionTier {
    let mut by_threshold: Vec<&CommissionRule> = rules.iter().collect();
    by_threshold.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));

    by_threshold
        .into_iter()
        .find(|rule| rule.threshold <= revenue)
        .map(CommissionTier::from)
        .unwrap_or(CommissionTier::NONE)
}

/// A suggested per-session price for packages within a session-count range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPriceRule {
    pub min_sessions: u32,
    /// Inclusive upper bound; `None` leaves the range open.
    #[serde(default)]
    pub max_sessions: Option<u32>,
    pub price_per_session: f64,
}

impl SessionPriceRule {
    pub fn covers(&self, session_count: u32) -> bool {
        session_count >= self.min_sessions
            && self.max_sessions.map_or(true, |max| session_count <= max)
    }
}

/// Suggested per-session price for a package of `session_count` sessions.
///
/// When ranges overlap the rule with the highest minimum wins.
pub fn suggest_session_price(rules: &[SessionPriceRule], session_count: u32) -> Option<f64> {
    if session_count == 0 {
        return None;
    }
    rules
        .iter()
        .filter(|rule| rule.covers(session_count))
        .max_by_key(|rule| rule.min_sessions)
        .map(|rule| rule.price_per_session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(threshold: f64, rate: f64, incentive: f64) -> CommissionRule {
        CommissionRule {
            threshold,
            commission_rate: Percentage::new(rate),
            incentive,
        }
    }

    fn price_rule(min: u32, max: Option<u32>, price: f64) -> SessionPriceRule {
        SessionPriceRule {
            min_sessions: min,
            max_sessions: max,
            price_per_session: price,
        }
    }

    #[test]
    fn picks_highest_threshold_not_exceeding_revenue() {
        let rules = vec![
            rule(0.0, 30.0, 0.0),
            rule(5_000_000.0, 40.0, 200_000.0),
            rule(2_000_000.0, 35.0, 100_000.0),
        ];

        let tier = resolve_commission_tier(&rules, 3_000_000.0);
        assert_eq!(tier.rate, Percentage::new(35.0));
        assert_eq!(tier.incentive, 100_000.0);
        assert_eq!(tier.threshold, Some(2_000_000.0));
    }

    #[test]
    fn threshold_equal_to_revenue_matches() {
        let rules = vec![rule(1_000_000.0, 40.0, 50_000.0)];
        let tier = resolve_commission_tier(&rules, 1_000_000.0);
        assert_eq!(tier.rate, Percentage::new(40.0));
    }

    #[test]
    fn no_matching_rule_yields_zero_tier() {
        let rules = vec![rule(1_000_000.0, 40.0, 50_000.0)];
        assert_eq!(resolve_commission_tier(&rules, 999_999.0), CommissionTier::NONE);
        assert_eq!(resolve_commission_tier(&[], 10_000_000.0), CommissionTier::NONE);
    }

    #[test]
    fn duplicate_thresholds_keep_listing_order() {
        let rules = vec![rule(0.0, 30.0, 0.0), rule(0.0, 45.0, 0.0)];
        assert_eq!(resolve_commission_tier(&rules, 10.0).rate, Percentage::new(30.0));
    }

    #[test]
    fn price_rule_range_is_inclusive() {
        let r = price_rule(10, Some(19), 70_000.0);
        assert!(r.covers(10));
        assert!(r.covers(19));
        assert!(!r.covers(20));
        assert!(!r.covers(9));
    }

    #[test]
    fn suggests_price_from_matching_range() {
        let rules = vec![
            price_rule(1, Some(9), 80_000.0),
            price_rule(10, Some(29), 70_000.0),
            price_rule(30, None, 60_000.0),
        ];
        assert_eq!(suggest_session_price(&rules, 5), Some(80_000.0));
        assert_eq!(suggest_session_price(&rules, 10), Some(70_000.0));
        assert_eq!(suggest_session_price(&rules, 100), Some(60_000.0));
    }

    #[test]
    fn overlapping_ranges_prefer_highest_minimum() {
        let rules = vec![price_rule(1, None, 80_000.0), price_rule(20, None, 65_000.0)];
        assert_eq!(suggest_session_price(&rules, 25), Some(65_000.0));
    }

    #[test]
    fn no_suggestion_for_zero_or_uncovered_counts() {
        let rules = vec![price_rule(10, Some(20), 70_000.0)];
        assert_eq!(suggest_session_price(&rules, 0), None);
        assert_eq!(suggest_session_price(&rules, 5), None);
    }
}
