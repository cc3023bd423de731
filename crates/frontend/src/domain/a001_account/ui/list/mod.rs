use crate::controller::use_controller;
use crate::shared::components::section_header::{RefreshButton, SectionHeader};
use crate::shared::components::table::number_format::format_currency;
use crate::shared::components::table::{build_rows, Cell, DataTable, RowAction, TableRow};
use crate::shared::date_utils::format_datetime;
use crate::shared::view_bindings::Tab;
use contracts::domain::a001_account::aggregate::Account;
use contracts::enums::StatusCode;
use leptos::prelude::*;

pub const COLUMNS: &[&str] = &[
    "ID",
    "Account number",
    "Holder",
    "Type",
    "Balance",
    "Currency",
    "Status",
    "Opened",
    "Actions",
];

#[derive(Clone, Debug, PartialEq)]
pub struct AccountRow {
    pub id: Option<i64>,
    pub account_number: Option<String>,
    pub holder: Option<String>,
    pub account_type: Option<String>,
    pub balance: Option<String>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub actions: Vec<RowAction>,
}

impl From<&Account> for AccountRow {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id,
            account_number: a.account_number.clone(),
            holder: a.account_holder_name.clone(),
            account_type: a.account_type.clone(),
            balance: a.balance.map(|b| format_currency(b, a.currency.as_deref())),
            currency: a.currency.clone(),
            status: a.status.clone(),
            created_at: a.created_at.as_deref().map(format_datetime),
            actions: account_actions(a),
        }
    }
}

/// ACTIVE accounts can be frozen, FROZEN ones activated, nothing else.
pub fn account_actions(account: &Account) -> Vec<RowAction> {
    match (account.id, account.status_code()) {
        (Some(id), Some(StatusCode::Active)) => vec![RowAction::FreezeAccount(id)],
        (Some(id), Some(StatusCode::Frozen)) => vec![RowAction::ActivateAccount(id)],
        _ => Vec::new(),
    }
}

impl TableRow for AccountRow {
    fn key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id),
            Cell::strong(self.account_number.clone()),
            Cell::text(self.holder.clone()),
            Cell::badge(self.account_type.as_deref()),
            Cell::strong(self.balance.clone()),
            Cell::text(self.currency.clone()),
            Cell::badge(self.status.as_deref()),
            Cell::text(self.created_at.clone()),
            Cell::Actions(self.actions.clone()),
        ]
    }
}

/// `(id, label)` choices for the deposit and transfer selectors: active
/// accounts only.
pub fn active_account_options(accounts: &[Account]) -> Vec<(String, String)> {
    accounts
        .iter()
        .filter(|a| a.is_active())
        .filter_map(|a| {
            let id = a.id?;
            let number = a.account_number.clone().unwrap_or_else(|| format!("#{}", id));
            let label = match &a.account_holder_name {
                Some(holder) => format!("{} ({})", number, holder),
                None => number,
            };
            Some((id.to_string(), label))
        })
        .collect()
}

#[component]
pub fn AccountList() -> impl IntoView {
    let controller = use_controller();
    let accounts = controller.state.accounts;
    let body = Signal::derive(move || accounts.with(|a| build_rows::<Account, AccountRow>(a)));

    view! {
        <section class="panel">
            <SectionHeader title="Accounts">
                <RefreshButton tab=Tab::Accounts />
            </SectionHeader>
            <DataTable
                columns=COLUMNS
                body=body
                empty_text="No accounts yet"
                on_action=controller.row_actions()
            />
        </section>
    }
}
