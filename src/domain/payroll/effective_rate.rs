//! Per-contract commission rate resolution.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// Where a row's commission rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Set on the contract itself.
    Override,
    /// The trainer's monthly tier.
    Tiered,
}

/// A commission rate tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectiveRate {
    Override(Percentage),
    Tiered(Percentage),
}

impl EffectiveRate {
    pub fn rate(&self) -> Percentage {
        match self {
            EffectiveRate::Override(rate) | EffectiveRate::Tiered(rate) => *rate,
        }
    }

    pub fn source(&self) -> RateSource {
        match self {
            EffectiveRate::Override(_) => RateSource::Override,
            EffectiveRate::Tiered(_) => RateSource::Tiered,
        }
    }
}

/// The contract's own rate when set, otherwise the monthly tiered rate.
pub fn resolve_effective_rate(override_rate: Option<Percentage>, fallback: Percentage) -> EffectiveRate {
    match override_rate {
        Some(rate) => EffectiveRate::Override(rate),
        None => EffectiveRate::Tiered(fallback),
    }
}
