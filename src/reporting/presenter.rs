// src/reporting/presenter.rs

use rust_decimal::Decimal;

use crate::{
    models::{
        dashboard::{AgendaEntry, ChartEntry, DashboardResponse},
        finance::{PagamentoDetalhe, Transaction, TransactionKind},
    },
    reporting::aggregator::ReportStats,
};

// Casas decimais dos valores calculados (ticket médio e percentual)
const DISPLAY_SCALE: u32 = 2;

pub fn present_dashboard(stats: &ReportStats, lang: &str) -> DashboardResponse {
    DashboardResponse {
        faturamento: stats.total_revenue,
        atendimentos: stats.attendance_count,
        ticket_medio: stats.average_ticket.round_dp(DISPLAY_SCALE),
        meta_mensal: stats.monthly_goal,
        progresso_meta: stats.goal_progress.round_dp(DISPLAY_SCALE),
        chart_data: stats
            .trailing_revenue
            .iter()
            .map(|m| ChartEntry {
                month: m.month.label(lang).to_string(),
                revenue: m.revenue,
            })
            .collect(),
        daily_agenda: stats
            .daily_agenda
            .iter()
            .map(|item| AgendaEntry {
                time: item.time.clone(),
                procedure: item.procedure.clone(),
                value: item.value,
            })
            .collect(),
    }
}

/// Pagamento no formato da tela de transações.
pub fn present_transaction(detail: PagamentoDetalhe) -> Transaction {
    let PagamentoDetalhe { pagamento, procedimento, cliente_nome } = detail;

    let metodo = if pagamento.metodo_pagamento.trim().is_empty() {
        "outro".to_string()
    } else {
        pagamento.metodo_pagamento
    };

    Transaction {
        id: pagamento.id,
        tipo: TransactionKind::Receita,
        descricao: procedimento
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "Pagamento".to_string()),
        valor: pagamento.valor.unwrap_or(Decimal::ZERO),
        metodo,
        data: pagamento.data_pagamento,
        cliente: cliente_nome.filter(|c| !c.trim().is_empty()),
    }
}
