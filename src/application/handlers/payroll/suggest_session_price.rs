//! SuggestSessionPriceHandler - Price quote for a package of N sessions.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::CenterId;
use crate::domain::payroll::suggest_session_price;
use crate::ports::{PayrollError, PayrollReader};

#[derive(Debug, Clone)]
pub struct SuggestSessionPriceQuery {
    pub center_id: CenterId,
    pub session_count: u32,
}

/// Suggested per-session and package price.
///
/// Both prices are `None` when no configured tier covers the count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPriceSuggestion {
    pub session_count: u32,
    pub price_per_session: Option<f64>,
    pub total_price: Option<f64>,
}

pub struct SuggestSessionPriceHandler {
    reader: Arc<dyn PayrollReader>,
}

impl SuggestSessionPriceHandler {
    pub fn new(reader: Arc<dyn PayrollReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: SuggestSessionPriceQuery,
    ) -> Result<SessionPriceSuggestion, PayrollError> {
        let rules = self.reader.session_price_rules(query.center_id).await?;
        let price_per_session = suggest_session_price(&rules, query.session_count);

        if price_per_session.is_none() {
            tracing::debug!(
                center_id = %query.center_id,
                sessions = query.session_count,
                "No session price tier covers count"
            );
        }

        Ok(SessionPriceSuggestion {
            session_count: query.session_count,
            price_per_session,
            total_price: price_per_session.map(|price| price * f64::from(query.session_count)),
        })
    }
}
