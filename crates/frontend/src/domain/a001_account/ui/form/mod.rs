use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::form_binding::{bind_flag, bind_text};
use contracts::enums::StatusCode;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const CURRENCIES: &[&str] = &["KRW", "USD", "EUR", "JPY", "GBP"];

fn code_options(codes: &[StatusCode]) -> Vec<(String, String)> {
    codes
        .iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect()
}

pub fn currency_options() -> Vec<(String, String)> {
    CURRENCIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect()
}

#[component]
pub fn NewAccountForm() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.account;

    let (customer_id, set_customer_id) =
        bind_text(form, |f| &f.customer_id, |f, v| f.customer_id = v);
    let (holder, set_holder) = bind_text(
        form,
        |f| &f.account_holder_name,
        |f, v| f.account_holder_name = v,
    );
    let (account_type, set_account_type) =
        bind_text(form, |f| &f.account_type, |f, v| f.account_type = v);
    let (currency, set_currency) = bind_text(form, |f| &f.currency, |f, v| f.currency = v);
    let (deposit, set_deposit) =
        bind_text(form, |f| &f.initial_deposit, |f, v| f.initial_deposit = v);
    let (force_failure, set_force_failure) =
        bind_flag(form, |f| f.force_failure, |f, v| f.force_failure = v);

    let default_currency = controller.config().default_currency.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.create_account().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"Open account"</h3>
            <Input label="Customer ID" input_type="number" value=customer_id on_input=set_customer_id required=true />
            <Input label="Account holder" value=holder on_input=set_holder required=true />
            <Select
                label="Account type"
                value=account_type
                on_change=set_account_type
                options=Signal::derive(|| {
                    code_options(&[StatusCode::Checking, StatusCode::Savings, StatusCode::Credit])
                })
            />
            <Select
                label="Currency"
                value=currency
                on_change=set_currency
                options=Signal::derive(currency_options)
                empty_label=format!("Default ({})", default_currency)
            />
            <Input label="Initial deposit" input_type="number" step="1" value=deposit on_input=set_deposit />
            <Checkbox label="Simulate failure (rollback)" checked=force_failure on_change=set_force_failure />
            <Button button_type="submit">"Open account"</Button>
        </form>
    }
}
