use crate::domain::entities::report::{
    CashField, HeaderField, HoldingColumn, OverviewColumn, ReportState, RowId, Section,
};

/// Every user input the editor accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    HeaderEdited(HeaderField, String),
    OverviewRowAdded,
    HoldingRowAdded,
    OverviewCellEdited(RowId, OverviewColumn, String),
    HoldingCellEdited(RowId, HoldingColumn, String),
    RowDeleted(RowId),
    MonthlyReturnEdited(String),
    CashEdited(CashField, String),
}

/// Applies `event` to `state` and returns the section that changed, or `None`
/// when the event referenced a row that no longer exists.
pub fn apply_event(state: &mut ReportState, event: ReportEvent) -> Option<Section> {
    match event {
        ReportEvent::HeaderEdited(field, value) => {
            state.header.set(field, value);
            Some(Section::Header)
        }
        ReportEvent::OverviewRowAdded => {
            state.append_blank_overview_row();
            Some(Section::Overview)
        }
        ReportEvent::HoldingRowAdded => {
            state.append_blank_holding_row();
            Some(Section::Holdings)
        }
        ReportEvent::OverviewCellEdited(id, column, value) => state
            .set_overview_cell(id, column, value)
            .then_some(Section::Overview),
        ReportEvent::HoldingCellEdited(id, column, value) => state
            .set_holding_cell(id, column, value)
            .then_some(Section::Holdings),
        ReportEvent::RowDeleted(id) => state.delete_row(id),
        ReportEvent::MonthlyReturnEdited(value) => {
            state.performance.monthly_return = value;
            Some(Section::Performance)
        }
        ReportEvent::CashEdited(field, value) => {
            state.cash.set(field, value);
            Some(Section::Cash)
        }
    }
}
