use dioxus::prelude::*;

use crate::domain::entities::event::ReportEvent;
use crate::domain::entities::report::{
    CashField, HeaderField, HoldingColumn, HoldingRow, OverviewColumn, OverviewRow,
};
use crate::platform::confirm_reset;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::report_service::ReportSession;

fn section_style() -> &'static str {
    "background: #fff; border: 1px solid #ddd; border-radius: 8px; padding: 12px 16px; margin-bottom: 16px;"
}

fn table_header_cell_style() -> &'static str {
    "text-align: left; padding: 6px 8px; border-bottom: 2px solid #ccc; background: #f5f5f5;"
}

fn table_cell_style() -> &'static str {
    "padding: 4px 8px; border-bottom: 1px solid #eee;"
}

fn figure_style() -> &'static str {
    "font-weight: 600; font-variant-numeric: tabular-nums;"
}

#[component]
fn LabeledInput(
    label: &'static str,
    value: String,
    numeric: bool,
    on_input: EventHandler<String>,
) -> Element {
    let input_type = if numeric { "number" } else { "text" };
    rsx! {
        label {
            style: "display: grid; grid-template-columns: 160px 1fr; gap: 8px; align-items: center; margin: 4px 0;",
            span { "{label}" }
            input {
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |event| on_input.call(event.value()),
            }
        }
    }
}

#[component]
fn OverviewTable(mut session: Signal<ReportSession>) -> Element {
    let (rows, total_display) = {
        let current = session.read();
        let view = current.view();
        let rows: Vec<(OverviewRow, String)> = current
            .state()
            .overview
            .iter()
            .map(|row| (row.clone(), view.overview_percent(row.id).to_string()))
            .collect();
        (rows, view.overview.total_display.clone())
    };

    rsx! {
        section { style: "{section_style()}",
            h2 { "Asset Overview" }
            table { style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}", "Asset Type" }
                        th { style: "{table_header_cell_style()}", "Market Value" }
                        th { style: "{table_header_cell_style()}", "% of Assets" }
                        th { style: "{table_header_cell_style()}", class: "no-print", "" }
                    }
                }
                tbody {
                    for (row, percent) in rows {
                        tr { key: "{row.id.0}",
                            td { style: "{table_cell_style()}",
                                input {
                                    r#type: "text",
                                    placeholder: "Type",
                                    value: "{row.asset_type}",
                                    oninput: move |event| {
                                        session.write().dispatch(ReportEvent::OverviewCellEdited(
                                            row.id,
                                            OverviewColumn::AssetType,
                                            event.value(),
                                        ));
                                    }
                                }
                            }
                            td { style: "{table_cell_style()}",
                                input {
                                    r#type: "number",
                                    value: "{row.market_value}",
                                    oninput: move |event| {
                                        session.write().dispatch(ReportEvent::OverviewCellEdited(
                                            row.id,
                                            OverviewColumn::MarketValue,
                                            event.value(),
                                        ));
                                    }
                                }
                            }
                            td { style: "{table_cell_style()}",
                                span { "{percent}" }
                            }
                            td { style: "{table_cell_style()}", class: "no-print",
                                button {
                                    onclick: move |_| {
                                        session.write().dispatch(ReportEvent::RowDeleted(row.id));
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { style: "{table_cell_style()}", strong { "Total" } }
                        td { style: "{table_cell_style()}",
                            span { style: "{figure_style()}", "{total_display}" }
                        }
                        td { style: "{table_cell_style()}", "" }
                        td { style: "{table_cell_style()}", class: "no-print", "" }
                    }
                }
            }
            button {
                class: "no-print",
                style: "margin-top: 8px;",
                onclick: move |_| {
                    session.write().dispatch(ReportEvent::OverviewRowAdded);
                },
                "+ Add asset"
            }
        }
    }
}

const HOLDING_COLUMNS: [HoldingColumn; 4] = [
    HoldingColumn::Symbol,
    HoldingColumn::Name,
    HoldingColumn::Quantity,
    HoldingColumn::UnitPrice,
];

fn holding_inputs(row: &HoldingRow) -> Vec<(HoldingColumn, &'static str, &'static str, String)> {
    HOLDING_COLUMNS
        .iter()
        .map(|&column| {
            let (input_type, placeholder) = match column {
                HoldingColumn::Symbol => ("text", "Symbol"),
                HoldingColumn::Name => ("text", "Name"),
                HoldingColumn::Quantity | HoldingColumn::UnitPrice => ("number", ""),
            };
            (column, input_type, placeholder, row.get(column).to_string())
        })
        .collect()
}

#[component]
fn HoldingsTable(mut session: Signal<ReportSession>) -> Element {
    let (rows, total_display) = {
        let current = session.read();
        let view = current.view();
        let rows: Vec<(HoldingRow, String)> = current
            .state()
            .holdings
            .iter()
            .map(|row| (row.clone(), view.holding_value(row.id).to_string()))
            .collect();
        (rows, view.holdings.total_display.clone())
    };

    rsx! {
        section { style: "{section_style()}",
            h2 { "Holdings" }
            table { style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}", "Symbol" }
                        th { style: "{table_header_cell_style()}", "Name" }
                        th { style: "{table_header_cell_style()}", "Quantity" }
                        th { style: "{table_header_cell_style()}", "Price" }
                        th { style: "{table_header_cell_style()}", "Market Value" }
                        th { style: "{table_header_cell_style()}", class: "no-print", "" }
                    }
                }
                tbody {
                    for (row, market_value) in rows {
                        tr { key: "{row.id.0}",
                            for (column, input_type, placeholder, value) in holding_inputs(&row) {
                                td { style: "{table_cell_style()}",
                                    input {
                                        r#type: "{input_type}",
                                        placeholder: "{placeholder}",
                                        value: "{value}",
                                        oninput: move |event| {
                                            session.write().dispatch(ReportEvent::HoldingCellEdited(
                                                row.id,
                                                column,
                                                event.value(),
                                            ));
                                        }
                                    }
                                }
                            }
                            td { style: "{table_cell_style()}",
                                span { "{market_value}" }
                            }
                            td { style: "{table_cell_style()}", class: "no-print",
                                button {
                                    onclick: move |_| {
                                        session.write().dispatch(ReportEvent::RowDeleted(row.id));
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { style: "{table_cell_style()}", colspan: "4", strong { "Total" } }
                        td { style: "{table_cell_style()}",
                            span { style: "{figure_style()}", "{total_display}" }
                        }
                        td { style: "{table_cell_style()}", class: "no-print", "" }
                    }
                }
            }
            button {
                class: "no-print",
                style: "margin-top: 8px;",
                onclick: move |_| {
                    session.write().dispatch(ReportEvent::HoldingRowAdded);
                },
                "+ Add holding"
            }
        }
    }
}

const HEADER_FIELDS: [(HeaderField, &str); 3] = [
    (HeaderField::FundName, "Fund name"),
    (HeaderField::AccountNumber, "Account number"),
    (HeaderField::ReportPeriod, "Report period"),
];

const CASH_FIELDS: [(CashField, &str); 3] = [
    (CashField::StartBalance, "Starting balance"),
    (CashField::Deposits, "Deposits"),
    (CashField::Withdrawals, "Withdrawals"),
];

#[component]
pub fn App() -> Element {
    let AppState {
        mut session,
        mut status,
    } = AppState::new();

    let (state, view) = {
        let current = session.read();
        (current.state().clone(), current.view().clone())
    };
    let saved_at = state
        .timestamp
        .clone()
        .unwrap_or_else(|| "not saved yet".to_string());

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, sans-serif; background: #fafafa;",
            header {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h1 { "Client Report" }
                span { "Date: {view.report_date}" }
            }

            section { style: "{section_style()}",
                h2 { "Fund" }
                for (field, label) in HEADER_FIELDS {
                    LabeledInput {
                        key: "{label}",
                        label: label,
                        value: state.header.get(field).to_string(),
                        numeric: false,
                        on_input: move |value| {
                            session.write().dispatch(ReportEvent::HeaderEdited(field, value));
                        },
                    }
                }
            }

            OverviewTable { session: session }
            HoldingsTable { session: session }

            section { style: "{section_style()}",
                h2 { "Performance" }
                LabeledInput {
                    label: "Monthly return (%)",
                    value: state.performance.monthly_return.clone(),
                    numeric: true,
                    on_input: move |value| {
                        session.write().dispatch(ReportEvent::MonthlyReturnEdited(value));
                    },
                }
                div { "Annualized return: "
                    span { style: "{figure_style()}", "{view.performance.annualized_display}" }
                }
            }

            section { style: "{section_style()}",
                h2 { "Cash Reconciliation" }
                for (field, label) in CASH_FIELDS {
                    LabeledInput {
                        key: "{label}",
                        label: label,
                        value: state.cash.get(field).to_string(),
                        numeric: true,
                        on_input: move |value| {
                            session.write().dispatch(ReportEvent::CashEdited(field, value));
                        },
                    }
                }
                div { "Ending balance: "
                    span { style: "{figure_style()}", "{view.cash.end_balance_display}" }
                }
            }

            footer {
                class: "no-print",
                style: "display: flex; gap: 12px; align-items: center;",
                button {
                    style: "color: #b00020;",
                    onclick: move |_| {
                        if !confirm_reset() {
                            *status.write() = "Reset cancelled".to_string();
                            return;
                        }
                        session.write().reset();
                        *status.write() = "Report reset".to_string();
                    },
                    "Reset report"
                }
                span { style: "color: #666;", "{status} · last saved: {saved_at}" }
            }
        }
    }
}
