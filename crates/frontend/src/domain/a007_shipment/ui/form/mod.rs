use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input};
use crate::shared::form_binding::bind_text;
use crate::shared::view_bindings::{Bound, Role};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NewShipmentForm() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.shipment;

    let (order_id, set_order_id) = bind_text(form, |f| &f.order_id, |f, v| f.order_id = v);
    let (address, set_address) =
        bind_text(form, |f| &f.shipping_address, |f, v| f.shipping_address = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.create_shipment().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"Create shipment"</h3>
            <Input label="Order ID" input_type="number" value=order_id on_input=set_order_id required=true />
            <Input label="Shipping address" value=address on_input=set_address required=true />
            <Button button_type="submit">"Create shipment"</Button>
        </form>
    }
}

#[component]
pub fn ShipmentLookupForm() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.shipment_lookup;
    let (order_id, set_order_id) = bind_text(form, |f| &f.order_id, |f, v| f.order_id = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.lookup_shipment().await;
        });
    };

    view! {
        <form class="form form--inline" on:submit=on_submit>
            <Input label="Order ID" input_type="number" value=order_id on_input=set_order_id required=true />
            <Button button_type="submit" variant="secondary">"Find shipment"</Button>
        </form>
    }
}

/// Both shipment forms, each shown only where the page binds it.
#[component]
pub fn ShipmentForms() -> impl IntoView {
    view! {
        <div class="form-row">
            <Bound role=Role::ShipmentForm>
                <NewShipmentForm />
            </Bound>
            <Bound role=Role::ShipmentLookupForm>
                <ShipmentLookupForm />
            </Bound>
        </div>
    }
}
