use super::forms::{AccountForm, CustomerForm, DepositForm, TransferForm};
use super::{ActionError, Controller};
use crate::shared::api_utils::RequestOptions;
use crate::shared::components::table::number_format::format_currency;
use crate::shared::components::table::{RowAction, PLACEHOLDER};
use crate::shared::pacing::pause;
use crate::shared::transport::RequestError;
use crate::shared::view_bindings::Tab;
use contracts::domain::a001_account::aggregate::Account;
use contracts::domain::a002_customer::aggregate::Customer;
use contracts::domain::a003_transaction::aggregate::Transaction;
use contracts::domain::a004_notification::aggregate::Notification;
use leptos::prelude::*;

impl Controller {
    pub async fn load_accounts(&self) -> Result<(), RequestError> {
        self.state.log.info("Loading accounts...");
        let accounts: Vec<Account> = self
            .banking
            .make_request("/accounts", RequestOptions::get())
            .await?;
        let count = accounts.len();
        self.state.accounts.set(accounts);
        self.state
            .log
            .success(format!("Accounts loaded ({} accounts)", count));
        Ok(())
    }

    pub async fn load_customers(&self) -> Result<(), RequestError> {
        self.state.log.info("Loading customers...");
        let customers: Vec<Customer> = self
            .banking
            .make_request("/customers", RequestOptions::get())
            .await?;
        let count = customers.len();
        self.state.customers.set(customers);
        self.state
            .log
            .success(format!("Customers loaded ({} customers)", count));
        Ok(())
    }

    pub async fn load_transactions(&self) -> Result<(), RequestError> {
        self.state.log.info("Loading transactions...");
        let transactions: Vec<Transaction> = self
            .banking
            .make_request("/transactions", RequestOptions::get())
            .await?;
        let count = transactions.len();
        self.state.transactions.set(transactions);
        self.state
            .log
            .success(format!("Transactions loaded ({} transactions)", count));
        Ok(())
    }

    pub async fn load_notifications(&self) -> Result<(), RequestError> {
        self.state.log.info("Loading notifications...");
        let notifications: Vec<Notification> = self
            .banking
            .make_request("/notifications", RequestOptions::get())
            .await?;
        let count = notifications.len();
        self.state.notifications.set(notifications);
        self.state
            .log
            .success(format!("Notifications loaded ({} notifications)", count));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accounts and customers
    // ------------------------------------------------------------------

    pub async fn create_account(&self) -> Result<(), ActionError> {
        let outcome = self.open_account().await;
        self.report("Account creation", outcome)
    }

    async fn open_account(&self) -> Result<(), ActionError> {
        let form = self.state.forms.account.get_untracked();
        let dto = form.validate(&self.config.default_currency)?;
        self.state.log.info(format!(
            "Opening {} account for customer {}",
            dto.account_type, dto.customer_id
        ));

        let reply = self
            .submit(&self.banking, "/accounts", RequestOptions::post().json(&dto)?)
            .await?;

        let number = reply
            .field("accountNumber")
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        self.show_success(format!("Account opened: {}", number));
        self.state.forms.account.set(AccountForm::default());
        self.reload(Tab::Accounts).await;
        Ok(())
    }

    pub async fn create_customer(&self) -> Result<(), ActionError> {
        let outcome = self.register_customer().await;
        self.report("Customer registration", outcome)
    }

    async fn register_customer(&self) -> Result<(), ActionError> {
        let dto = self.state.forms.customer.get_untracked().validate()?;
        self.state.log.info(format!(
            "Registering customer {} ({})",
            dto.name, dto.customer_type
        ));

        let reply = self
            .submit(&self.banking, "/customers", RequestOptions::post().json(&dto)?)
            .await?;

        let number = reply
            .field("customerNumber")
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        self.show_success(format!("Customer registered: {}", number));
        self.state.forms.customer.set(CustomerForm::default());
        self.reload(Tab::Customers).await;
        Ok(())
    }

    pub async fn freeze_account(&self, id: i64) -> Result<(), ActionError> {
        if !self.confirmed(RowAction::FreezeAccount(id)) {
            return Ok(());
        }
        let outcome = self
            .account_status_change(id, "freeze", "Freezing", "Account frozen")
            .await;
        self.report("Freezing account", outcome)
    }

    pub async fn activate_account(&self, id: i64) -> Result<(), ActionError> {
        if !self.confirmed(RowAction::ActivateAccount(id)) {
            return Ok(());
        }
        let outcome = self
            .account_status_change(id, "activate", "Activating", "Account activated")
            .await;
        self.report("Activating account", outcome)
    }

    async fn account_status_change(
        &self,
        id: i64,
        verb: &str,
        progress: &str,
        done: &str,
    ) -> Result<(), ActionError> {
        self.state.log.info(format!("{} account {}", progress, id));
        self.submit(
            &self.banking,
            &format!("/accounts/{}/{}", id, verb),
            RequestOptions::post(),
        )
        .await?;
        self.show_success(done);
        self.reload(Tab::Accounts).await;
        Ok(())
    }

    pub async fn suspend_customer(&self, id: i64) -> Result<(), ActionError> {
        if !self.confirmed(RowAction::SuspendCustomer(id)) {
            return Ok(());
        }
        let outcome = async {
            self.state.log.info(format!("Suspending customer {}", id));
            self.submit(
                &self.banking,
                &format!("/customers/{}/suspend", id),
                RequestOptions::post(),
            )
            .await?;
            self.show_success("Customer suspended");
            self.reload(Tab::Customers).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Suspending customer", outcome)
    }

    // ------------------------------------------------------------------
    // Money movement
    // ------------------------------------------------------------------

    /// Deposit, then refresh balances and history. The configured pacing
    /// delay separates the notification, the form reset, the account
    /// reload and the transaction reload.
    pub async fn deposit(&self) -> Result<(), ActionError> {
        let outcome = self.process_deposit().await;
        self.report("Deposit", outcome)
    }

    async fn process_deposit(&self) -> Result<(), ActionError> {
        let dto = self
            .state
            .forms
            .deposit
            .get_untracked()
            .validate(&self.config.default_currency)?;
        let amount = format_currency(dto.amount, Some(&dto.currency));
        self.state.log.info(format!(
            "Depositing {} into account {}",
            amount, dto.account_id
        ));

        self.submit(&self.banking, "/deposit", RequestOptions::post().json(&dto)?)
            .await?;

        let pacing = self.config.deposit_pacing;
        self.show_success(format!("Deposit completed: {}", amount));
        pause(pacing).await;
        self.state.forms.deposit.set(DepositForm::default());
        pause(pacing).await;
        self.reload(Tab::Accounts).await;
        pause(pacing).await;
        self.reload(Tab::Transactions).await;
        Ok(())
    }

    pub async fn transfer(&self) -> Result<(), ActionError> {
        let outcome = self.process_transfer().await;
        self.report("Transfer", outcome)
    }

    async fn process_transfer(&self) -> Result<(), ActionError> {
        let dto = self
            .state
            .forms
            .transfer
            .get_untracked()
            .validate(&self.config.default_currency)?;
        let amount = format_currency(dto.amount, Some(&dto.currency));
        self.state.log.info(format!(
            "Transferring {} from account {} to account {}",
            amount, dto.from_account_id, dto.to_account_id
        ));

        self.submit(&self.banking, "/transfer", RequestOptions::post().json(&dto)?)
            .await?;

        self.show_success(format!("Transfer completed: {}", amount));
        self.state.forms.transfer.set(TransferForm::default());
        self.reload(Tab::Accounts).await;
        self.reload(Tab::Transactions).await;
        Ok(())
    }
}
