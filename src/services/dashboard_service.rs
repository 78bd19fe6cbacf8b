// src/services/dashboard_service.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::dashboard::{DashboardResponse, ReportRows},
    reporting::{aggregator::aggregate, presenter::present_dashboard, window::ReportWindow},
};

/// De onde vêm as linhas do relatório de um dono.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn load(&self, owner_id: i32, window: &ReportWindow) -> Result<ReportRows, AppError>;
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn ReportSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    pub async fn get_dashboard(
        &self,
        owner_id: i32,
        window: &ReportWindow,
        lang: &str,
    ) -> Result<DashboardResponse, AppError> {
        let rows = self.source.load(owner_id, window).await?;
        let stats = aggregate(&rows, window);

        tracing::debug!(
            owner_id,
            reference = %window.reference,
            payments = rows.payments.len(),
            appointments = rows.appointments.len(),
            "dashboard agregado"
        );

        Ok(present_dashboard(&stats, lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        agenda::AppointmentStatus,
        dashboard::{AppointmentRecord, GoalRecord, PaymentRecord},
        finance::{GoalPeriod, PaymentStatus},
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use chrono_tz::America::Sao_Paulo;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    struct FakeSource {
        rows: ReportRows,
        seen_owner: Mutex<Option<i32>>,
    }

    #[async_trait]
    impl ReportSource for FakeSource {
        async fn load(&self, owner_id: i32, _window: &ReportWindow) -> Result<ReportRows, AppError> {
            *self.seen_owner.lock().unwrap() = Some(owner_id);
            Ok(self.rows.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ReportSource for FailingSource {
        async fn load(&self, _owner_id: i32, _window: &ReportWindow) -> Result<ReportRows, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn window() -> ReportWindow {
        ReportWindow::for_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), Sao_Paulo).unwrap()
    }

    fn local(d: u32, h: u32, m: u32) -> chrono::DateTime<Utc> {
        Sao_Paulo
            .with_ymd_and_hms(2026, 10, d, h, m, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[tokio::test]
    async fn builds_the_dashboard_from_the_source_rows() {
        let source = Arc::new(FakeSource {
            rows: ReportRows {
                payments: vec![
                    PaymentRecord { amount: Some(dec("700")), paid_at: local(3, 10, 0), status: PaymentStatus::Confirmed },
                    PaymentRecord { amount: Some(dec("500")), paid_at: local(18, 15, 0), status: PaymentStatus::Confirmed },
                    PaymentRecord { amount: Some(dec("999")), paid_at: local(18, 16, 0), status: PaymentStatus::Pending },
                ],
                appointments: vec![
                    AppointmentRecord {
                        scheduled_at: local(19, 14, 30),
                        procedure: None,
                        service_name: Some("Massagem".to_string()),
                        amount: None,
                        service_price: Some(dec("150")),
                        status: AppointmentStatus::Scheduled,
                    },
                    AppointmentRecord {
                        scheduled_at: local(19, 9, 0),
                        procedure: Some("Limpeza de Pele".to_string()),
                        service_name: None,
                        amount: Some(dec("180")),
                        service_price: None,
                        status: AppointmentStatus::Done,
                    },
                    AppointmentRecord {
                        scheduled_at: local(19, 11, 0),
                        procedure: Some("Peeling".to_string()),
                        service_name: None,
                        amount: Some(dec("90")),
                        service_price: None,
                        status: AppointmentStatus::Canceled,
                    },
                ],
                goals: vec![GoalRecord {
                    target_amount: Some(dec("1000")),
                    period: GoalPeriod::Monthly,
                    achieved: false,
                    created_at: local(1, 8, 0),
                }],
            },
            seen_owner: Mutex::new(None),
        });

        let service = DashboardService::new(source.clone());
        let response = service.get_dashboard(7, &window(), "pt").await.unwrap();

        assert_eq!(*source.seen_owner.lock().unwrap(), Some(7));
        assert_eq!(response.faturamento, dec("1200"));
        assert_eq!(response.atendimentos, 2);
        assert_eq!(response.ticket_medio, dec("600"));
        assert_eq!(response.meta_mensal, dec("1000"));
        assert_eq!(response.progresso_meta, dec("100"));
        assert_eq!(response.chart_data.len(), 6);
        assert_eq!(response.chart_data[5].revenue, dec("1200"));

        let agenda: Vec<(&str, &str)> = response
            .daily_agenda
            .iter()
            .map(|a| (a.time.as_str(), a.procedure.as_str()))
            .collect();
        assert_eq!(agenda, vec![("09:00", "Limpeza de Pele"), ("14:30", "Massagem")]);
        assert_eq!(response.daily_agenda[1].value, dec("150"));
    }

    #[tokio::test]
    async fn empty_source_gives_zeroed_dashboard() {
        let service = DashboardService::new(Arc::new(FakeSource {
            rows: ReportRows::default(),
            seen_owner: Mutex::new(None),
        }));

        let response = service.get_dashboard(1, &window(), "pt").await.unwrap();

        assert_eq!(response.faturamento, Decimal::ZERO);
        assert_eq!(response.atendimentos, 0);
        assert_eq!(response.ticket_medio, Decimal::ZERO);
        assert_eq!(response.meta_mensal, Decimal::ZERO);
        assert_eq!(response.progresso_meta, Decimal::ZERO);
        assert!(response.chart_data.iter().all(|c| c.revenue.is_zero()));
        assert!(response.daily_agenda.is_empty());
    }

    #[tokio::test]
    async fn source_failure_is_propagated() {
        let service = DashboardService::new(Arc::new(FailingSource));

        let err = service.get_dashboard(1, &window(), "pt").await.unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
