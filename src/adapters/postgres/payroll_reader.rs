//! PostgreSQL implementation of PayrollReader.
//!
//! Date columns are selected as text and parsed by the domain, so a row with
//! an odd timestamp still loads and is simply left out of every window.
//! Window filters compare wall-clock time in the session time zone.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    CenterId, DateWindow, MemberId, MembershipId, Percentage, PtSessionId, RecordDate, TrainerId,
};
use crate::domain::payroll::{
    CommissionRule, Member, MembershipContract, PaymentMethod, PtSession, RegistrationType,
    SessionPriceRule, SessionStatus, TrainerSettings,
};
use crate::ports::{PayrollError, PayrollReader};

/// PostgreSQL implementation of the PayrollReader port.
pub struct PostgresPayrollReader {
    pool: PgPool,
}

impl PostgresPayrollReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    id: Uuid,
    member_id: Uuid,
    trainer_id: Uuid,
    contract_date: String,
    start_date: String,
    total_sessions: i32,
    remaining_sessions: i32,
    session_price: f64,
    commission_rate: Option<f64>,
    registration_type: String,
    payment_method: String,
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    trainer_id: Uuid,
    membership_id: Uuid,
    status: String,
    end_time: Option<String>,
    price: Option<f64>,
}

#[derive(Debug, sqlx::FromRow)]
struct CommissionRuleRow {
    threshold: f64,
    commission_rate: f64,
    incentive: f64,
}

#[derive(Debug, sqlx::FromRow)]
struct SessionPriceRuleRow {
    min_sessions: i32,
    max_sessions: Option<i32>,
    price_per_session: f64,
}

#[derive(Debug, sqlx::FromRow)]
struct TrainerSettingsRow {
    trainer_id: Uuid,
    center_id: Uuid,
    base_salary: f64,
    target_revenue: Option<f64>,
}

#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    name: String,
}

fn parse_registration_type(s: &str) -> Result<RegistrationType, PayrollError> {
    match s.to_lowercase().as_str() {
        "new" => Ok(RegistrationType::New),
        "renewal" => Ok(RegistrationType::Renewal),
        _ => Err(PayrollError::Database(format!(
            "Invalid registration type value: {}",
            s
        ))),
    }
}

fn parse_payment_method(s: &str) -> PaymentMethod {
    match s.to_lowercase().as_str() {
        "card" => PaymentMethod::Card,
        "cash" => PaymentMethod::Cash,
        "transfer" => PaymentMethod::Transfer,
        _ => PaymentMethod::Other,
    }
}

fn parse_status(s: &str) -> Result<SessionStatus, PayrollError> {
    match s.to_lowercase().as_str() {
        "scheduled" => Ok(SessionStatus::Scheduled),
        "completed" => Ok(SessionStatus::Completed),
        "canceled" | "cancelled" => Ok(SessionStatus::Canceled),
        _ => Err(PayrollError::Database(format!("Invalid status value: {}", s))),
    }
}

fn rate(column: &str, value: f64) -> Result<Percentage, PayrollError> {
    Percentage::try_new(value)
        .map_err(|e| PayrollError::Database(format!("Invalid {} value: {}", column, e)))
}

fn session_count(column: &str, value: i32) -> Result<u32, PayrollError> {
    u32::try_from(value)
        .map_err(|_| PayrollError::Database(format!("Negative {} value: {}", column, value)))
}

impl TryFrom<MembershipRow> for MembershipContract {
    type Error = PayrollError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        Ok(MembershipContract {
            id: MembershipId::from_uuid(row.id),
            member_id: MemberId::from_uuid(row.member_id),
            trainer_id: TrainerId::from_uuid(row.trainer_id),
            contract_date: RecordDate::new(row.contract_date),
            start_date: RecordDate::new(row.start_date),
            total_sessions: session_count("total_sessions", row.total_sessions)?,
            remaining_sessions: session_count("remaining_sessions", row.remaining_sessions)?,
            session_price: row.session_price,
            commission_rate: row
                .commission_rate
                .map(|value| rate("commission_rate", value))
                .transpose()?,
            registration_type: parse_registration_type(&row.registration_type)?,
            payment_method: parse_payment_method(&row.payment_method),
        })
    }
}

impl TryFrom<SessionRow> for PtSession {
    type Error = PayrollError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        Ok(PtSession {
            id: PtSessionId::from_uuid(row.id),
            trainer_id: TrainerId::from_uuid(row.trainer_id),
            membership_id: MembershipId::from_uuid(row.membership_id),
            status: parse_status(&row.status)?,
            end_time: row.end_time.map(RecordDate::new),
            price: row.price,
        })
    }
}

impl TryFrom<SessionPriceRuleRow> for SessionPriceRule {
    type Error = PayrollError;

    fn try_from(row: SessionPriceRuleRow) -> Result<Self, Self::Error> {
        Ok(SessionPriceRule {
            min_sessions: session_count("min_sessions", row.min_sessions)?,
            max_sessions: row
                .max_sessions
                .map(|max| session_count("max_sessions", max))
                .transpose()?,
            price_per_session: row.price_per_session,
        })
    }
}

impl TryFrom<CommissionRuleRow> for CommissionRule {
    type Error = PayrollError;

    fn try_from(row: CommissionRuleRow) -> Result<Self, Self::Error> {
        Ok(CommissionRule {
            threshold: row.threshold,
            commission_rate: rate("commission_rate", row.commission_rate)?,
            incentive: row.incentive,
        })
    }
}

impl From<TrainerSettingsRow> for TrainerSettings {
    fn from(row: TrainerSettingsRow) -> Self {
        TrainerSettings {
            trainer_id: TrainerId::from_uuid(row.trainer_id),
            center_id: CenterId::from_uuid(row.center_id),
            base_salary: row.base_salary,
            target_revenue: row.target_revenue,
        }
    }
}

#[async_trait]
impl PayrollReader for PostgresPayrollReader {
    async fn trainer_center(&self, trainer_id: TrainerId) -> Result<CenterId, PayrollError> {
        let center: Option<Uuid> = sqlx::query_scalar(
            r#"
            SELECT center_id FROM trainers WHERE id = $1
            "#,
        )
        .bind(*trainer_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        center
            .map(CenterId::from_uuid)
            .ok_or(PayrollError::TrainerNotFound(trainer_id))
    }

    async fn memberships_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<MembershipContract>, PayrollError> {
        let rows: Vec<MembershipRow> = sqlx::query_as(
            r#"
            SELECT m.id, m.member_id, m.trainer_id,
                   m.contract_date::text AS contract_date,
                   m.start_date::text AS start_date,
                   m.total_sessions, m.remaining_sessions, m.session_price,
                   m.commission_rate, m.registration_type, m.payment_method
            FROM memberships m
            WHERE m.trainer_id = $1
              AND m.contract_date::timestamp < $3
              AND (
                  m.contract_date::timestamp >= $2
                  OR m.remaining_sessions > 0
                  OR EXISTS (
                      SELECT 1 FROM pt_sessions s
                      WHERE s.membership_id = m.id
                        AND s.end_time::timestamp >= $2
                        AND s.end_time::timestamp < $3
                  )
              )
            ORDER BY m.contract_date
            "#,
        )
        .bind(*trainer_id.as_uuid())
        .bind(window.start())
        .bind(window.end_exclusive())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MembershipContract::try_from).collect()
    }

    async fn sessions_for_trainer(
        &self,
        trainer_id: TrainerId,
        window: DateWindow,
    ) -> Result<Vec<PtSession>, PayrollError> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, trainer_id, membership_id, status,
                   end_time::text AS end_time, price
            FROM pt_sessions
            WHERE trainer_id = $1
              AND end_time::timestamp >= $2
              AND end_time::timestamp < $3
            ORDER BY end_time
            "#,
        )
        .bind(*trainer_id.as_uuid())
        .bind(window.start())
        .bind(window.end_exclusive())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PtSession::try_from).collect()
    }

    async fn trainer_settings(
        &self,
        trainer_id: TrainerId,
        center_id: CenterId,
    ) -> Result<Option<TrainerSettings>, PayrollError> {
        let row: Option<TrainerSettingsRow> = sqlx::query_as(
            r#"
            SELECT trainer_id, center_id, base_salary, target_revenue
            FROM trainer_settings
            WHERE trainer_id = $1 AND center_id = $2
            "#,
        )
        .bind(*trainer_id.as_uuid())
        .bind(*center_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TrainerSettings::from))
    }

    async fn commission_rules(&self, center_id: CenterId) -> Result<Vec<CommissionRule>, PayrollError> {
        let rows: Vec<CommissionRuleRow> = sqlx::query_as(
            r#"
            SELECT threshold, commission_rate, incentive
            FROM commission_rules
            WHERE center_id = $1
            "#,
        )
        .bind(*center_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CommissionRule::try_from).collect()
    }

    async fn session_price_rules(
        &self,
        center_id: CenterId,
    ) -> Result<Vec<SessionPriceRule>, PayrollError> {
        let rows: Vec<SessionPriceRuleRow> = sqlx::query_as(
            r#"
            SELECT min_sessions, max_sessions, price_per_session
            FROM session_price_rules
            WHERE center_id = $1
            ORDER BY min_sessions
            "#,
        )
        .bind(*center_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SessionPriceRule::try_from).collect()
    }

    async fn members(&self) -> Result<Vec<Member>, PayrollError> {
        let rows: Vec<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, name FROM members ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Member {
                id: MemberId::from_uuid(row.id),
                name: row.name,
            })
            .collect())
    }
}
