#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

/// Part of the report a mutation touched. Drives which derived figures are
/// recomputed before the snapshot is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Overview,
    Holdings,
    Performance,
    Cash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    FundName,
    AccountNumber,
    ReportPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewColumn {
    AssetType,
    MarketValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingColumn {
    Symbol,
    Name,
    Quantity,
    UnitPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashField {
    StartBalance,
    Deposits,
    Withdrawals,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportHeader {
    pub fund_name: String,
    pub account_number: String,
    pub report_period: String,
}

impl ReportHeader {
    pub fn get(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::FundName => &self.fund_name,
            HeaderField::AccountNumber => &self.account_number,
            HeaderField::ReportPeriod => &self.report_period,
        }
    }

    pub fn set(&mut self, field: HeaderField, value: String) {
        match field {
            HeaderField::FundName => self.fund_name = value,
            HeaderField::AccountNumber => self.account_number = value,
            HeaderField::ReportPeriod => self.report_period = value,
        }
    }
}

/// Numeric fields keep the raw text typed by the user; coercion happens only
/// when figures are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    pub id: RowId,
    pub asset_type: String,
    pub market_value: String,
}

impl OverviewRow {
    fn set(&mut self, column: OverviewColumn, value: String) {
        match column {
            OverviewColumn::AssetType => self.asset_type = value,
            OverviewColumn::MarketValue => self.market_value = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingRow {
    pub id: RowId,
    pub symbol: String,
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
}

impl HoldingRow {
    pub fn get(&self, column: HoldingColumn) -> &str {
        match column {
            HoldingColumn::Symbol => &self.symbol,
            HoldingColumn::Name => &self.name,
            HoldingColumn::Quantity => &self.quantity,
            HoldingColumn::UnitPrice => &self.unit_price,
        }
    }

    fn set(&mut self, column: HoldingColumn, value: String) {
        match column {
            HoldingColumn::Symbol => self.symbol = value,
            HoldingColumn::Name => self.name = value,
            HoldingColumn::Quantity => self.quantity = value,
            HoldingColumn::UnitPrice => self.unit_price = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performance {
    pub monthly_return: String,
}

impl Default for Performance {
    fn default() -> Self {
        Self {
            monthly_return: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashBlock {
    pub start_balance: String,
    pub deposits: String,
    pub withdrawals: String,
}

impl Default for CashBlock {
    fn default() -> Self {
        Self {
            start_balance: "0".to_string(),
            deposits: "0".to_string(),
            withdrawals: "0".to_string(),
        }
    }
}

impl CashBlock {
    pub fn get(&self, field: CashField) -> &str {
        match field {
            CashField::StartBalance => &self.start_balance,
            CashField::Deposits => &self.deposits,
            CashField::Withdrawals => &self.withdrawals,
        }
    }

    pub fn set(&mut self, field: CashField, value: String) {
        match field {
            CashField::StartBalance => self.start_balance = value,
            CashField::Deposits => self.deposits = value,
            CashField::Withdrawals => self.withdrawals = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportState {
    pub header: ReportHeader,
    pub overview: Vec<OverviewRow>,
    pub holdings: Vec<HoldingRow>,
    pub performance: Performance,
    pub cash: CashBlock,
    pub timestamp: Option<String>,
    next_row_id: u64,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_row_id(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        id
    }

    pub fn append_overview_row(
        &mut self,
        asset_type: impl Into<String>,
        market_value: impl Into<String>,
    ) -> RowId {
        let id = self.allocate_row_id();
        self.overview.push(OverviewRow {
            id,
            asset_type: asset_type.into(),
            market_value: market_value.into(),
        });
        id
    }

    /// Appends an overview row with blank type and zero value.
    pub fn append_blank_overview_row(&mut self) -> RowId {
        self.append_overview_row("", "0")
    }

    pub fn append_holding_row(
        &mut self,
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> RowId {
        let id = self.allocate_row_id();
        self.holdings.push(HoldingRow {
            id,
            symbol: symbol.into(),
            name: name.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        });
        id
    }

    pub fn append_blank_holding_row(&mut self) -> RowId {
        self.append_holding_row("", "", "0", "0")
    }

    /// Removes the row from whichever table holds it and reports that table.
    /// Returns `None` when no row carries `id`.
    pub fn delete_row(&mut self, id: RowId) -> Option<Section> {
        if let Some(pos) = self.overview.iter().position(|row| row.id == id) {
            self.overview.remove(pos);
            return Some(Section::Overview);
        }
        if let Some(pos) = self.holdings.iter().position(|row| row.id == id) {
            self.holdings.remove(pos);
            return Some(Section::Holdings);
        }
        None
    }

    pub fn set_overview_cell(&mut self, id: RowId, column: OverviewColumn, value: String) -> bool {
        match self.overview.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.set(column, value);
                true
            }
            None => false,
        }
    }

    pub fn set_holding_cell(&mut self, id: RowId, column: HoldingColumn, value: String) -> bool {
        match self.holdings.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.set(column, value);
                true
            }
            None => false,
        }
    }

    /// Same raw inputs, ignoring row identities and the save timestamp.
    #[cfg(test)]
    pub fn same_inputs(&self, other: &ReportState) -> bool {
        let overview = |state: &ReportState| {
            state
                .overview
                .iter()
                .map(|row| (row.asset_type.clone(), row.market_value.clone()))
                .collect::<Vec<_>>()
        };
        let holdings = |state: &ReportState| {
            state
                .holdings
                .iter()
                .map(|row| {
                    (
                        row.symbol.clone(),
                        row.name.clone(),
                        row.quantity.clone(),
                        row.unit_price.clone(),
                    )
                })
                .collect::<Vec<_>>()
        };
        self.header == other.header
            && self.performance == other.performance
            && self.cash == other.cash
            && overview(self) == overview(other)
            && holdings(self) == holdings(other)
    }
}
