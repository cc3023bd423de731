//! The console controller.
//!
//! One [`Controller`] is built per page and provided through context. It owns
//! the two API clients, the prompt used for confirmations and notifications,
//! and the reactive [`ConsoleState`] the views render. Handlers are `async`
//! and are spawned from the views with `spawn_local`.

pub mod banking;
pub mod forms;
pub mod orders;
pub mod state;

#[cfg(test)]
mod tests;

pub use state::{ConsoleState, FormState};

use crate::shared::api_utils::{ApiClient, RequestOptions};
use crate::shared::components::table::RowAction;
use crate::shared::config::ConsoleConfig;
use crate::shared::pacing::pause;
use crate::shared::prompt::UserPrompt;
use crate::shared::transport::{RequestError, Transport};
use crate::shared::view_bindings::{Tab, ViewBindings};
use contracts::domain::common::ActionEnvelope;
use contracts::shared::logger::Severity;
use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Why a user action did not complete
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Request(#[from] RequestError),
}

#[derive(Clone)]
pub struct Controller {
    config: Arc<ConsoleConfig>,
    bindings: Arc<ViewBindings>,
    banking: ApiClient,
    orders: ApiClient,
    prompt: Arc<dyn UserPrompt>,
    pub state: ConsoleState,
}

impl Controller {
    pub fn new(
        config: ConsoleConfig,
        bindings: ViewBindings,
        transport: Arc<dyn Transport>,
        prompt: Arc<dyn UserPrompt>,
    ) -> Self {
        let state = ConsoleState::new(config.log_capacity, &config.default_carrier);
        state.active_tab.set(bindings.first_tab());
        let banking = ApiClient::new(config.banking_base.clone(), transport.clone(), state.log);
        let orders = ApiClient::new(config.orders_base.clone(), transport, state.log);
        Self {
            config: Arc::new(config),
            bindings: Arc::new(bindings),
            banking,
            orders,
            prompt,
            state,
        }
    }

    pub fn bindings(&self) -> &ViewBindings {
        &self.bindings
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Log at success severity and show a toast.
    pub fn show_success(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.log.success(message.clone());
        self.prompt.toast(&message, Severity::Success);
    }

    /// Log at error severity and raise an alert.
    pub fn show_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.log.error(message.clone());
        self.prompt.alert(&message);
    }

    /// `false` when the user declined the action's confirmation question.
    fn confirmed(&self, action: RowAction) -> bool {
        match action.confirmation() {
            Some(question) => self.prompt.confirm(question),
            None => true,
        }
    }

    /// Surfaces a failed action as "<what> failed: <reason>".
    fn report(&self, what: &str, outcome: Result<(), ActionError>) -> Result<(), ActionError> {
        if let Err(err) = &outcome {
            self.show_error(format!("{} failed: {}", what, err));
        }
        outcome
    }

    /// Sends a state-changing request and reads the reply envelope. Replies
    /// that are not JSON objects yield an empty envelope.
    async fn submit(
        &self,
        client: &ApiClient,
        path: &str,
        options: RequestOptions,
    ) -> Result<ActionEnvelope, ActionError> {
        let reply: Value = client.make_request(path, options).await?;
        Ok(serde_json::from_value(reply).unwrap_or_default())
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Loads the data behind one tab, replacing its collection.
    pub async fn load_tab(&self, tab: Tab) -> Result<(), RequestError> {
        match tab {
            Tab::Accounts => self.load_accounts().await,
            Tab::Customers => self.load_customers().await,
            Tab::Transactions => self.load_transactions().await,
            Tab::Notifications => self.load_notifications().await,
            Tab::Orders => self.load_orders().await,
            Tab::Inventory => self.load_inventory().await,
            Tab::Shipments => self.load_shipments().await,
        }
    }

    /// Refresh button: a failure is already in the log, so only alert.
    pub async fn refresh(&self, tab: Tab) {
        if let Err(err) = self.load_tab(tab).await {
            self.prompt
                .alert(&format!("Could not load {}: {}", tab.name(), err));
        }
    }

    /// Reload after a successful action; the action itself already succeeded.
    async fn reload(&self, tab: Tab) {
        if let Err(err) = self.load_tab(tab).await {
            log::warn!("reload of {} failed: {}", tab.name(), err);
        }
    }

    /// Concurrent first load of every bound tab except notifications and
    /// shipments. Fails with the first error in tab order once all settled.
    pub async fn load_initial_data(&self) -> Result<(), RequestError> {
        self.state
            .log
            .info(format!("Initialising {}", self.bindings.variant().title()));

        let tabs = self
            .bindings
            .tabs()
            .into_iter()
            .filter(|t| !matches!(t, Tab::Notifications | Tab::Shipments));
        let results = join_all(tabs.map(|tab| self.load_tab(tab))).await;
        results.into_iter().collect::<Result<Vec<()>, _>>()?;

        self.state.log.success("Console ready");
        Ok(())
    }

    /// Page start-up. The failing request is already logged; the aggregate
    /// failure only raises a toast.
    pub async fn start(&self) {
        if let Err(err) = self.load_initial_data().await {
            self.prompt
                .toast(&format!("Initial load failed: {}", err), Severity::Error);
        }
    }

    // ------------------------------------------------------------------
    // Tabs and log
    // ------------------------------------------------------------------

    /// Switch by tab name. Names that are unknown or not on this page only
    /// reach the developer console.
    pub async fn switch_tab(&self, name: &str) {
        match Tab::from_name(name) {
            Some(tab) if self.bindings.tabs().contains(&tab) => self.switch_to(tab).await,
            _ => log::warn!("ignoring switch to unknown tab '{}'", name),
        }
    }

    pub async fn switch_to(&self, tab: Tab) {
        self.state.active_tab.set(None);
        pause(self.config.tab_delay).await;
        self.state.active_tab.set(Some(tab));
        self.refresh(tab).await;
    }

    pub fn clear_logs(&self) {
        self.state.log.clear();
    }

    /// Callback handed to entity tables for their row buttons
    pub fn row_actions(&self) -> Callback<RowAction> {
        let controller = self.clone();
        Callback::new(move |action: RowAction| {
            let controller = controller.clone();
            spawn_local(async move {
                // already reported through the log and an alert
                let _ = controller.run_row_action(action).await;
            });
        })
    }

    /// Dispatches a row button.
    pub async fn run_row_action(&self, action: RowAction) -> Result<(), ActionError> {
        match action {
            RowAction::FreezeAccount(id) => self.freeze_account(id).await,
            RowAction::ActivateAccount(id) => self.activate_account(id).await,
            RowAction::SuspendCustomer(id) => self.suspend_customer(id).await,
            RowAction::CancelOrder(id) => self.cancel_order(id).await,
            RowAction::StartShipping(id) => self.start_shipping(id).await,
            RowAction::MarkDelivered(id) => self.deliver_shipment(id).await,
        }
    }
}

pub fn use_controller() -> Controller {
    use_context::<Controller>().expect("Controller not provided in context")
}
