use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::form_binding::{bind_flag, bind_text};
use contracts::domain::a006_inventory::aggregate::InventoryItem;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Product choices for a new order, one per named inventory row, with the
/// available stock in the label.
pub fn product_options(items: &[InventoryItem]) -> Vec<(String, String)> {
    items
        .iter()
        .filter_map(|item| {
            let name = item.product_name.clone()?;
            let label = match item.available() {
                Some(available) => format!("{} ({} available)", name, available),
                None => name.clone(),
            };
            Some((name, label))
        })
        .collect()
}

#[component]
pub fn NewOrderForm() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.order;
    let inventory = controller.state.inventory;
    let products = Signal::derive(move || inventory.with(|i| product_options(i)));

    let (customer, set_customer) =
        bind_text(form, |f| &f.customer_name, |f, v| f.customer_name = v);
    let (product, set_product) = bind_text(form, |f| &f.product_name, |f, v| f.product_name = v);
    let (quantity, set_quantity) = bind_text(form, |f| &f.quantity, |f, v| f.quantity = v);
    let (amount, set_amount) = bind_text(form, |f| &f.amount, |f, v| f.amount = v);
    let (force_failure, set_force_failure) = bind_flag(
        form,
        |f| f.force_payment_failure,
        |f, v| f.force_payment_failure = v,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.create_order().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"New order"</h3>
            <Input label="Customer name" value=customer on_input=set_customer required=true />
            <Select
                label="Product"
                value=product
                on_change=set_product
                options=products
                empty_label="Select a product"
                required=true
            />
            <Input label="Quantity" input_type="number" step="1" value=quantity on_input=set_quantity required=true />
            <Input label="Amount" input_type="number" step="1" value=amount on_input=set_amount required=true />
            <Checkbox
                label="Force payment failure (rollback)"
                checked=force_failure
                on_change=set_force_failure
            />
            <Button button_type="submit">"Create order"</Button>
        </form>
    }
}

#[component]
pub fn UpdateOrderForm() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.order_update;

    let (order_id, set_order_id) = bind_text(form, |f| &f.order_id, |f, v| f.order_id = v);
    let (customer, set_customer) =
        bind_text(form, |f| &f.customer_name, |f, v| f.customer_name = v);
    let (amount, set_amount) = bind_text(form, |f| &f.amount, |f, v| f.amount = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.update_order().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"Update order"</h3>
            <Input label="Order ID" input_type="number" value=order_id on_input=set_order_id required=true />
            <Input label="Customer name" value=customer on_input=set_customer required=true />
            <Input label="Amount" input_type="number" step="1" value=amount on_input=set_amount required=true />
            <Button button_type="submit" variant="secondary">"Update order"</Button>
        </form>
    }
}
