use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::form_binding::bind_text;
use contracts::enums::StatusCode;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn customer_type_options() -> Vec<(String, String)> {
    [StatusCode::Individual, StatusCode::Business]
        .iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect()
}

#[component]
pub fn NewCustomerForm() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.customer;

    let (name, set_name) = bind_text(form, |f| &f.name, |f, v| f.name = v);
    let (email, set_email) = bind_text(form, |f| &f.email, |f, v| f.email = v);
    let (phone, set_phone) = bind_text(form, |f| &f.phone_number, |f, v| f.phone_number = v);
    let (kind, set_kind) = bind_text(form, |f| &f.customer_type, |f, v| f.customer_type = v);
    let (address, set_address) = bind_text(form, |f| &f.address, |f, v| f.address = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.create_customer().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"Register customer"</h3>
            <Input label="Name" value=name on_input=set_name required=true />
            <Input label="Email" input_type="email" value=email on_input=set_email required=true />
            <Input label="Phone" input_type="tel" value=phone on_input=set_phone required=true />
            <Select
                label="Customer type"
                value=kind
                on_change=set_kind
                options=Signal::derive(customer_type_options)
            />
            <Input label="Address" value=address on_input=set_address />
            <Button button_type="submit">"Register"</Button>
        </form>
    }
}
