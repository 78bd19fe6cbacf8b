// src/reporting/window.rs

//! Janelas de tempo dos relatórios.
//!
//! Todas as janelas são meio-abertas: `[meia-noite local, próxima meia-noite
//! local)`. Com precisão de milissegundos isso equivale a fechar o dia em
//! 23:59:59.999.

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;

/// Quantos meses o gráfico de faturamento mostra (incluindo o atual).
pub const TRAILING_MONTHS: usize = 6;

/// Anos aceitos como dia de referência.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1900..=9999;

const MONTH_LABELS_PT: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];
const MONTH_LABELS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Um mês do calendário, guardado como o seu primeiro dia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        YearMonth(date - Days::new(u64::from(date.day0())))
    }

    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub_months(Months::new(1)).map(YearMonth)
    }

    pub fn next(self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(YearMonth)
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn label(self, lang: &str) -> &'static str {
        let labels = match lang {
            "en" => &MONTH_LABELS_EN,
            _ => &MONTH_LABELS_PT,
        };
        labels[self.0.month0() as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

/// O instante em que `date` começa no fuso `tz`.
pub fn local_midnight(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Meia-noite pulada pelo horário de verão: o dia começa na 01:00
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    }
}

pub fn day_range(tz: &Tz, date: NaiveDate) -> Option<TimeRange> {
    let next_day = date.checked_add_days(Days::new(1))?;
    Some(TimeRange {
        start: local_midnight(tz, date),
        end: local_midnight(tz, next_day),
    })
}

pub fn month_range(tz: &Tz, month: YearMonth) -> Option<TimeRange> {
    let next_month = month.next()?;
    Some(TimeRange {
        start: local_midnight(tz, month.first_day()),
        end: local_midnight(tz, next_month.first_day()),
    })
}

/// As janelas de um relatório, todas derivadas de um único dia de referência.
#[derive(Debug, Clone)]
pub struct ReportWindow {
    pub tz: Tz,
    pub reference: NaiveDate,
    pub today: TimeRange,
    pub month: TimeRange,
    pub trailing: TimeRange,
    /// Os meses do gráfico, do mais antigo para o atual.
    pub months: Vec<YearMonth>,
}

impl ReportWindow {
    pub fn at(now: DateTime<Tz>) -> Option<Self> {
        Self::for_date(now.date_naive(), now.timezone())
    }

    /// `None` quando o dia está fora de `SUPPORTED_YEARS`.
    pub fn for_date(reference: NaiveDate, tz: Tz) -> Option<Self> {
        if !SUPPORTED_YEARS.contains(&reference.year()) {
            return None;
        }
        let current = YearMonth::of(reference);

        let mut months = Vec::with_capacity(TRAILING_MONTHS);
        let mut cursor = current;
        months.push(cursor);
        while months.len() < TRAILING_MONTHS {
            cursor = cursor.previous()?;
            months.push(cursor);
        }
        months.reverse();

        let month = month_range(&tz, current)?;
        let oldest = months[0];

        Some(Self {
            tz,
            reference,
            today: day_range(&tz, reference)?,
            month,
            trailing: TimeRange {
                start: local_midnight(&tz, oldest.first_day()),
                end: month.end,
            },
            months,
        })
    }

    /// O mês (no fuso local) em que um instante cai.
    pub fn local_month_of(&self, at: DateTime<Utc>) -> YearMonth {
        YearMonth::of(at.with_timezone(&self.tz).date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Sao_Paulo;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn day_range_is_local_midnight_to_next_midnight() {
        let range = day_range(&Sao_Paulo, date(2026, 10, 19)).unwrap();
        assert_eq!(range.start, utc("2026-10-19T03:00:00Z"));
        assert_eq!(range.end, utc("2026-10-20T03:00:00Z"));

        assert!(range.contains(utc("2026-10-19T03:00:00Z")));
        assert!(range.contains(utc("2026-10-20T02:59:59.998Z")));
        assert!(!range.contains(utc("2026-10-20T03:00:00Z")));
    }

    #[test]
    fn trailing_months_cross_the_year_boundary() {
        let window = ReportWindow::for_date(date(2026, 2, 10), Sao_Paulo).unwrap();
        let months: Vec<(i32, u32)> = window.months.iter().map(|m| (m.year(), m.month())).collect();

        assert_eq!(
            months,
            vec![(2025, 9), (2025, 10), (2025, 11), (2025, 12), (2026, 1), (2026, 2)]
        );
        assert_eq!(window.trailing.start, utc("2025-09-01T03:00:00Z"));
        assert_eq!(window.trailing.end, utc("2026-03-01T03:00:00Z"));
        assert_eq!(window.month.start, utc("2026-02-01T03:00:00Z"));
    }

    #[test]
    fn skipped_midnight_starts_the_day_at_the_first_valid_hour() {
        // Em 2018 o horário de verão começou à meia-noite de 4 de novembro
        let start = local_midnight(&Sao_Paulo, date(2018, 11, 4));
        assert_eq!(start, utc("2018-11-04T03:00:00Z"));
    }

    #[test]
    fn local_month_uses_the_configured_timezone() {
        let window = ReportWindow::for_date(date(2026, 10, 19), Sao_Paulo).unwrap();
        // 01:30 UTC do dia 1º ainda é dia 30 de setembro em São Paulo
        let month = window.local_month_of(utc("2026-10-01T01:30:00Z"));
        assert_eq!((month.year(), month.month()), (2026, 9));
    }

    #[test]
    fn dates_outside_the_supported_years_have_no_window() {
        assert!(ReportWindow::for_date(NaiveDate::MAX, Sao_Paulo).is_none());
        assert!(ReportWindow::for_date(NaiveDate::MIN, Sao_Paulo).is_none());
        assert!(ReportWindow::for_date(date(262142, 12, 31), Sao_Paulo).is_none());
        assert!(ReportWindow::for_date(date(1899, 12, 31), Sao_Paulo).is_none());

        let last = ReportWindow::for_date(date(9999, 12, 31), Sao_Paulo).unwrap();
        assert_eq!(last.month.end, Utc.with_ymd_and_hms(10000, 1, 1, 3, 0, 0).unwrap());
        assert!(ReportWindow::for_date(date(1900, 1, 1), Sao_Paulo).is_some());
    }

    #[test]
    fn month_arithmetic_stops_at_the_calendar_limits() {
        assert!(YearMonth::of(NaiveDate::MAX).next().is_none());
        assert!(YearMonth::of(NaiveDate::MIN).previous().is_none());
        assert!(day_range(&Sao_Paulo, NaiveDate::MAX).is_none());
    }

    #[test]
    fn month_labels_follow_the_language() {
        let october = YearMonth::of(date(2026, 10, 19));
        assert_eq!(october.label("pt"), "Out");
        assert_eq!(october.label("en"), "Oct");
        assert_eq!(october.label("es"), "Out");
    }
}
