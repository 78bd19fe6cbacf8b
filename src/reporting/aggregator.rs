// src/reporting/aggregator.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    common::money::amount_or_zero,
    models::{
        dashboard::{AppointmentRecord, GoalRecord, PaymentRecord, ReportRows},
        finance::{GoalPeriod, PaymentStatus},
    },
    reporting::window::{ReportWindow, YearMonth},
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Estatísticas do dashboard para um dono e uma janela.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStats {
    pub total_revenue: Decimal,
    pub attendance_count: u32,
    pub average_ticket: Decimal,
    pub monthly_goal: Decimal,
    pub goal_progress: Decimal,
    pub trailing_revenue: Vec<MonthlyRevenue>,
    pub daily_agenda: Vec<AgendaItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub month: YearMonth,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaItem {
    /// "HH:MM" no fuso local
    pub time: String,
    pub procedure: String,
    pub value: Decimal,
}

pub fn aggregate(rows: &ReportRows, window: &ReportWindow) -> ReportStats {
    let total_revenue = confirmed_revenue(&rows.payments, window);
    let attendance_count = attendance_count(&rows.appointments, window);
    let average_ticket = average_ticket(total_revenue, attendance_count);

    let monthly_goal = select_goal(&rows.goals)
        .and_then(|goal| goal.target_amount)
        .unwrap_or(Decimal::ZERO);

    ReportStats {
        total_revenue,
        attendance_count,
        average_ticket,
        monthly_goal,
        goal_progress: goal_progress(total_revenue, monthly_goal),
        trailing_revenue: trailing_revenue(&rows.payments, window),
        daily_agenda: daily_agenda(&rows.appointments, window),
    }
}

fn is_confirmed(payment: &PaymentRecord) -> bool {
    payment.status == PaymentStatus::Confirmed
}

/// Soma dos pagamentos confirmados dentro do mês de referência.
pub fn confirmed_revenue(payments: &[PaymentRecord], window: &ReportWindow) -> Decimal {
    payments
        .iter()
        .filter(|p| is_confirmed(p) && window.month.contains(p.paid_at))
        .map(|p| amount_or_zero(p.amount))
        .sum()
}

pub fn attendance_count(appointments: &[AppointmentRecord], window: &ReportWindow) -> u32 {
    let count = appointments
        .iter()
        .filter(|a| a.status.counts_as_attendance() && window.month.contains(a.scheduled_at))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

pub fn average_ticket(total_revenue: Decimal, attendance_count: u32) -> Decimal {
    if attendance_count == 0 {
        return Decimal::ZERO;
    }
    total_revenue / Decimal::from(attendance_count)
}

/// A meta mais recente ainda não atingida; se todas foram atingidas, a
/// primeira meta mensal cadastrada.
pub fn select_goal(goals: &[GoalRecord]) -> Option<&GoalRecord> {
    goals
        .iter()
        .filter(|g| !g.achieved)
        .max_by_key(|g| g.created_at)
        .or_else(|| {
            goals
                .iter()
                .filter(|g| g.period == GoalPeriod::Monthly)
                .min_by_key(|g| g.created_at)
        })
}

/// Percentual da meta, sempre em [0, 100].
pub fn goal_progress(total_revenue: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (total_revenue / target * HUNDRED).clamp(Decimal::ZERO, HUNDRED)
}

pub fn trailing_revenue(payments: &[PaymentRecord], window: &ReportWindow) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<YearMonth, Decimal> =
        window.months.iter().map(|m| (*m, Decimal::ZERO)).collect();

    for payment in payments
        .iter()
        .filter(|p| is_confirmed(p) && window.trailing.contains(p.paid_at))
    {
        if let Some(total) = buckets.get_mut(&window.local_month_of(payment.paid_at)) {
            *total += amount_or_zero(payment.amount);
        }
    }

    // BTreeMap já itera em ordem cronológica
    buckets
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

pub fn daily_agenda(appointments: &[AppointmentRecord], window: &ReportWindow) -> Vec<AgendaItem> {
    let mut today: Vec<&AppointmentRecord> = appointments
        .iter()
        .filter(|a| a.status.counts_as_attendance() && window.today.contains(a.scheduled_at))
        .collect();
    today.sort_by_key(|a| a.scheduled_at);

    today
        .into_iter()
        .map(|a| AgendaItem {
            time: a.scheduled_at.with_timezone(&window.tz).format("%H:%M").to_string(),
            procedure: procedure_label(a),
            value: a.amount.or(a.service_price).unwrap_or(Decimal::ZERO),
        })
        .collect()
}

fn procedure_label(appointment: &AppointmentRecord) -> String {
    appointment
        .procedure
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .or(appointment.service_name.as_deref())
        .unwrap_or("Atendimento")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::agenda::AppointmentStatus;
    use chrono::{DateTime, NaiveDate, Utc};
    use chrono_tz::America::Sao_Paulo;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // Referência: 19/10/2026 em São Paulo (UTC-3)
    fn window() -> ReportWindow {
        ReportWindow::for_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), Sao_Paulo).unwrap()
    }

    fn payment(amount: Option<&str>, paid_at: &str, status: PaymentStatus) -> PaymentRecord {
        PaymentRecord { amount: amount.map(dec), paid_at: utc(paid_at), status }
    }

    fn appointment(at: &str, status: AppointmentStatus) -> AppointmentRecord {
        AppointmentRecord {
            scheduled_at: utc(at),
            procedure: None,
            service_name: Some("Limpeza de Pele".to_string()),
            amount: None,
            service_price: Some(dec("180")),
            status,
        }
    }

    fn goal(target: Option<&str>, period: GoalPeriod, achieved: bool, created_at: &str) -> GoalRecord {
        GoalRecord { target_amount: target.map(dec), period, achieved, created_at: utc(created_at) }
    }

    #[test]
    fn empty_rows_produce_zeroes() {
        let stats = aggregate(&ReportRows::default(), &window());

        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.attendance_count, 0);
        assert_eq!(stats.average_ticket, Decimal::ZERO);
        assert_eq!(stats.monthly_goal, Decimal::ZERO);
        assert_eq!(stats.goal_progress, Decimal::ZERO);
        assert_eq!(stats.trailing_revenue.len(), 6);
        assert!(stats.trailing_revenue.iter().all(|m| m.revenue == Decimal::ZERO));
        assert!(stats.daily_agenda.is_empty());
    }

    #[test]
    fn revenue_counts_only_confirmed_payments_in_the_month() {
        let payments = vec![
            payment(Some("150.50"), "2026-10-05T15:00:00Z", PaymentStatus::Confirmed),
            payment(Some("100"), "2026-10-06T15:00:00Z", PaymentStatus::Pending),
            payment(Some("80"), "2026-10-07T15:00:00Z", PaymentStatus::Refunded),
            payment(None, "2026-10-08T15:00:00Z", PaymentStatus::Confirmed),
            // Ainda é setembro no horário local
            payment(Some("999"), "2026-10-01T02:59:59Z", PaymentStatus::Confirmed),
        ];

        assert_eq!(confirmed_revenue(&payments, &window()), dec("150.50"));
    }

    #[test]
    fn attendance_ignores_cancellations() {
        let appointments = vec![
            appointment("2026-10-02T13:00:00Z", AppointmentStatus::Done),
            appointment("2026-10-19T13:00:00Z", AppointmentStatus::Scheduled),
            appointment("2026-10-20T13:00:00Z", AppointmentStatus::Canceled),
            appointment("2026-09-29T13:00:00Z", AppointmentStatus::Done),
        ];

        assert_eq!(attendance_count(&appointments, &window()), 2);
    }

    #[test]
    fn average_ticket_divides_revenue_by_attendance() {
        assert_eq!(average_ticket(dec("300"), 4), dec("75"));
        assert_eq!(average_ticket(dec("300"), 0), Decimal::ZERO);
    }

    #[test]
    fn goal_progress_is_capped_at_one_hundred() {
        let rows = ReportRows {
            payments: vec![
                payment(Some("700"), "2026-10-03T15:00:00Z", PaymentStatus::Confirmed),
                payment(Some("500"), "2026-10-04T15:00:00Z", PaymentStatus::Confirmed),
            ],
            appointments: vec![],
            goals: vec![goal(Some("1000"), GoalPeriod::Monthly, false, "2026-10-01T12:00:00Z")],
        };

        let stats = aggregate(&rows, &window());
        assert_eq!(stats.total_revenue, dec("1200"));
        assert_eq!(stats.monthly_goal, dec("1000"));
        assert_eq!(stats.goal_progress, dec("100"));
    }

    #[test]
    fn goal_progress_is_zero_without_a_positive_target() {
        assert_eq!(goal_progress(dec("500"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(goal_progress(dec("500"), dec("-10")), Decimal::ZERO);
        assert_eq!(goal_progress(dec("-50"), dec("100")), Decimal::ZERO);
        assert_eq!(goal_progress(dec("250"), dec("1000")), dec("25"));
    }

    #[test]
    fn goal_selection_prefers_the_latest_open_goal() {
        let goals = vec![
            goal(Some("1000"), GoalPeriod::Monthly, true, "2026-01-01T12:00:00Z"),
            goal(Some("2000"), GoalPeriod::Weekly, false, "2026-05-01T12:00:00Z"),
            goal(Some("3000"), GoalPeriod::Yearly, false, "2026-08-01T12:00:00Z"),
        ];
        assert_eq!(select_goal(&goals).and_then(|g| g.target_amount), Some(dec("3000")));

        let all_achieved = vec![
            goal(Some("900"), GoalPeriod::Yearly, true, "2025-12-01T12:00:00Z"),
            goal(Some("1000"), GoalPeriod::Monthly, true, "2026-01-01T12:00:00Z"),
            goal(Some("1500"), GoalPeriod::Monthly, true, "2026-03-01T12:00:00Z"),
        ];
        assert_eq!(select_goal(&all_achieved).and_then(|g| g.target_amount), Some(dec("1000")));

        assert!(select_goal(&[]).is_none());
    }

    #[test]
    fn missing_goal_target_defaults_to_zero() {
        let rows = ReportRows {
            goals: vec![goal(None, GoalPeriod::Monthly, false, "2026-10-01T12:00:00Z")],
            ..ReportRows::default()
        };
        let stats = aggregate(&rows, &window());
        assert_eq!(stats.monthly_goal, Decimal::ZERO);
        assert_eq!(stats.goal_progress, Decimal::ZERO);
    }

    #[test]
    fn trailing_series_has_six_chronological_months() {
        let payments = vec![
            payment(Some("100"), "2026-05-10T15:00:00Z", PaymentStatus::Confirmed),
            payment(Some("200"), "2026-07-10T15:00:00Z", PaymentStatus::Confirmed),
            payment(Some("50"), "2026-07-11T15:00:00Z", PaymentStatus::Confirmed),
            payment(Some("300"), "2026-10-10T15:00:00Z", PaymentStatus::Confirmed),
            payment(Some("400"), "2026-10-11T15:00:00Z", PaymentStatus::Pending),
            // Fora da janela (abril)
            payment(Some("1000"), "2026-04-30T15:00:00Z", PaymentStatus::Confirmed),
        ];

        let series = trailing_revenue(&payments, &window());
        let months: Vec<u32> = series.iter().map(|m| m.month.month()).collect();
        let revenue: Vec<Decimal> = series.iter().map(|m| m.revenue).collect();

        assert_eq!(months, vec![5, 6, 7, 8, 9, 10]);
        assert_eq!(
            revenue,
            vec![dec("100"), Decimal::ZERO, dec("250"), Decimal::ZERO, Decimal::ZERO, dec("300")]
        );
        let total: Decimal = revenue.iter().copied().sum();
        assert_eq!(total, dec("650"));
    }

    #[test]
    fn daily_agenda_respects_the_end_of_day() {
        let mut late = appointment("2026-10-20T02:59:59.998Z", AppointmentStatus::Scheduled);
        late.procedure = Some("Massagem Relaxante".to_string());
        late.amount = Some(dec("250"));

        let appointments = vec![
            late,
            // 00:00:00.000 de amanhã
            appointment("2026-10-20T03:00:00Z", AppointmentStatus::Scheduled),
            appointment("2026-10-19T12:00:00Z", AppointmentStatus::Done),
            appointment("2026-10-19T14:00:00Z", AppointmentStatus::Canceled),
        ];

        let agenda = daily_agenda(&appointments, &window());
        assert_eq!(
            agenda,
            vec![
                AgendaItem {
                    time: "09:00".to_string(),
                    procedure: "Limpeza de Pele".to_string(),
                    value: dec("180"),
                },
                AgendaItem {
                    time: "23:59".to_string(),
                    procedure: "Massagem Relaxante".to_string(),
                    value: dec("250"),
                },
            ]
        );
    }

    #[test]
    fn agenda_item_without_labels_uses_defaults() {
        let appointments = vec![AppointmentRecord {
            scheduled_at: utc("2026-10-19T13:30:00Z"),
            procedure: Some("  ".to_string()),
            service_name: None,
            amount: None,
            service_price: None,
            status: AppointmentStatus::Scheduled,
        }];

        let agenda = daily_agenda(&appointments, &window());
        assert_eq!(agenda[0].procedure, "Atendimento");
        assert_eq!(agenda[0].value, Decimal::ZERO);
        assert_eq!(agenda[0].time, "10:30");
    }

    #[test]
    fn full_month_statistics() {
        let rows = ReportRows {
            payments: vec![
                payment(Some("180"), "2026-10-02T15:00:00Z", PaymentStatus::Confirmed),
                payment(Some("320"), "2026-10-09T15:00:00Z", PaymentStatus::Confirmed),
            ],
            appointments: vec![
                appointment("2026-10-02T13:00:00Z", AppointmentStatus::Done),
                appointment("2026-10-09T13:00:00Z", AppointmentStatus::Done),
                appointment("2026-10-19T13:00:00Z", AppointmentStatus::Scheduled),
                appointment("2026-10-19T17:00:00Z", AppointmentStatus::Canceled),
            ],
            goals: vec![goal(Some("2000"), GoalPeriod::Monthly, false, "2026-10-01T12:00:00Z")],
        };

        let stats = aggregate(&rows, &window());
        assert_eq!(stats.total_revenue, dec("500"));
        assert_eq!(stats.attendance_count, 3);
        assert_eq!(stats.average_ticket, dec("500") / dec("3"));
        assert_eq!(stats.goal_progress, dec("25"));
        assert_eq!(stats.daily_agenda.len(), 1);
        assert_eq!(stats.trailing_revenue.last().map(|m| m.revenue), Some(dec("500")));
    }
}
