use chrono::NaiveDate;

use crate::domain::entities::report::{
    CashBlock, HoldingRow, OverviewRow, ReportState, RowId, Section,
};
use crate::domain::services::format::{format_currency, format_percent, format_report_date};

/// Lenient numeric read of a raw input. Thousands separators are stripped
/// (`"1,250"` is 1250) and the whole trimmed text must parse, so a numeric
/// prefix such as `"12abc"` is rejected. Anything that does not parse to a
/// finite number counts as zero.
pub fn coerce_number(value: &str) -> f64 {
    value
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

pub fn percent_of_total(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

pub fn annualize_monthly_return(monthly_percent: f64) -> f64 {
    let rate = monthly_percent / 100.0;
    ((1.0 + rate).powi(12) - 1.0) * 100.0
}

pub fn ending_cash_balance(start: f64, deposits: f64, withdrawals: f64) -> f64 {
    start + deposits - withdrawals
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewLine {
    pub id: RowId,
    pub market_value: f64,
    pub percent: f64,
    pub percent_display: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverviewView {
    pub lines: Vec<OverviewLine>,
    pub total: f64,
    pub total_display: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingLine {
    pub id: RowId,
    pub market_value: f64,
    pub market_value_display: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoldingsView {
    pub lines: Vec<HoldingLine>,
    pub total: f64,
    pub total_display: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerformanceView {
    pub annualized: f64,
    pub annualized_display: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CashView {
    pub end_balance: f64,
    pub end_balance_display: String,
}

/// Every figure shown on the report, derived from the raw inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportView {
    pub overview: OverviewView,
    pub holdings: HoldingsView,
    pub performance: PerformanceView,
    pub cash: CashView,
    pub report_date: String,
}

impl ReportView {
    pub fn overview_percent(&self, id: RowId) -> &str {
        self.overview
            .lines
            .iter()
            .find(|line| line.id == id)
            .map(|line| line.percent_display.as_str())
            .unwrap_or("0.00%")
    }

    pub fn holding_value(&self, id: RowId) -> &str {
        self.holdings
            .lines
            .iter()
            .find(|line| line.id == id)
            .map(|line| line.market_value_display.as_str())
            .unwrap_or("$0.00")
    }

    /// Refreshes only the figures that depend on `section`.
    pub fn refresh(&mut self, state: &ReportState, section: Section) {
        match section {
            Section::Header => {}
            Section::Overview => self.overview = recalculate_overview(&state.overview),
            Section::Holdings => self.holdings = recalculate_holdings(&state.holdings),
            Section::Performance => {
                self.performance = recalculate_performance(&state.performance.monthly_return)
            }
            Section::Cash => self.cash = recalculate_cash(&state.cash),
        }
    }
}

pub fn recalculate_overview(rows: &[OverviewRow]) -> OverviewView {
    let values: Vec<f64> = rows
        .iter()
        .map(|row| coerce_number(&row.market_value))
        .collect();
    let total: f64 = values.iter().sum();

    let lines = rows
        .iter()
        .zip(values)
        .map(|(row, market_value)| {
            let percent = percent_of_total(market_value, total);
            OverviewLine {
                id: row.id,
                market_value,
                percent,
                percent_display: format_percent(percent),
            }
        })
        .collect();

    OverviewView {
        lines,
        total,
        total_display: format_currency(total),
    }
}

pub fn recalculate_holdings(rows: &[HoldingRow]) -> HoldingsView {
    let lines: Vec<HoldingLine> = rows
        .iter()
        .map(|row| {
            let market_value = coerce_number(&row.quantity) * coerce_number(&row.unit_price);
            HoldingLine {
                id: row.id,
                market_value,
                market_value_display: format_currency(market_value),
            }
        })
        .collect();
    let total: f64 = lines.iter().map(|line| line.market_value).sum();

    HoldingsView {
        lines,
        total,
        total_display: format_currency(total),
    }
}

pub fn recalculate_performance(monthly_return: &str) -> PerformanceView {
    let annualized = annualize_monthly_return(coerce_number(monthly_return));
    PerformanceView {
        annualized,
        annualized_display: format_percent(annualized),
    }
}

pub fn recalculate_cash(cash: &CashBlock) -> CashView {
    let end_balance = ending_cash_balance(
        coerce_number(&cash.start_balance),
        coerce_number(&cash.deposits),
        coerce_number(&cash.withdrawals),
    );
    CashView {
        end_balance,
        end_balance_display: format_currency(end_balance),
    }
}

pub fn recalculate_all(state: &ReportState, today: NaiveDate) -> ReportView {
    ReportView {
        overview: recalculate_overview(&state.overview),
        holdings: recalculate_holdings(&state.holdings),
        performance: recalculate_performance(&state.performance.monthly_return),
        cash: recalculate_cash(&state.cash),
        report_date: format_report_date(today),
    }
}
