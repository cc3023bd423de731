use crate::controller::use_controller;
use crate::domain::a001_account::ui::form::currency_options;
use crate::domain::a001_account::ui::list::active_account_options;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::form_binding::{bind_flag, bind_text};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DepositPanel() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.deposit;
    let accounts = controller.state.accounts;
    let options = Signal::derive(move || accounts.with(|a| active_account_options(a)));

    let (account_id, set_account_id) = bind_text(form, |f| &f.account_id, |f, v| f.account_id = v);
    let (amount, set_amount) = bind_text(form, |f| &f.amount, |f, v| f.amount = v);
    let (currency, set_currency) = bind_text(form, |f| &f.currency, |f, v| f.currency = v);
    let (description, set_description) =
        bind_text(form, |f| &f.description, |f, v| f.description = v);
    let (force_failure, set_force_failure) =
        bind_flag(form, |f| f.force_failure, |f, v| f.force_failure = v);

    let default_currency = controller.config().default_currency.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.deposit().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"Deposit"</h3>
            <Select
                label="Account"
                value=account_id
                on_change=set_account_id
                options=options
                empty_label="Select an account"
                required=true
            />
            <Input label="Amount" input_type="number" step="1" value=amount on_input=set_amount required=true />
            <Select
                label="Currency"
                value=currency
                on_change=set_currency
                options=Signal::derive(currency_options)
                empty_label=format!("Default ({})", default_currency)
            />
            <Input label="Description" value=description on_input=set_description />
            <Checkbox label="Simulate failure (rollback)" checked=force_failure on_change=set_force_failure />
            <Button button_type="submit">"Deposit"</Button>
        </form>
    }
}

#[component]
pub fn TransferPanel() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.transfer;
    let accounts = controller.state.accounts;
    let options = Signal::derive(move || accounts.with(|a| active_account_options(a)));

    let (from, set_from) =
        bind_text(form, |f| &f.from_account_id, |f, v| f.from_account_id = v);
    let (to, set_to) = bind_text(form, |f| &f.to_account_id, |f, v| f.to_account_id = v);
    let (amount, set_amount) = bind_text(form, |f| &f.amount, |f, v| f.amount = v);
    let (currency, set_currency) = bind_text(form, |f| &f.currency, |f, v| f.currency = v);
    let (description, set_description) =
        bind_text(form, |f| &f.description, |f, v| f.description = v);
    let (force_failure, set_force_failure) =
        bind_flag(form, |f| f.force_failure, |f, v| f.force_failure = v);

    let default_currency = controller.config().default_currency.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.transfer().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"Transfer"</h3>
            <Select label="From" value=from on_change=set_from options=options empty_label="Source account" required=true />
            <Select label="To" value=to on_change=set_to options=options empty_label="Destination account" required=true />
            <Input label="Amount" input_type="number" step="1" value=amount on_input=set_amount required=true />
            <Select
                label="Currency"
                value=currency
                on_change=set_currency
                options=Signal::derive(currency_options)
                empty_label=format!("Default ({})", default_currency)
            />
            <Input label="Description" value=description on_input=set_description />
            <Checkbox label="Simulate failure (rollback)" checked=force_failure on_change=set_force_failure />
            <Button button_type="submit">"Transfer"</Button>
        </form>
    }
}
