use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input};
use crate::shared::form_binding::bind_text;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NewInventoryForm() -> impl IntoView {
    let controller = use_controller();
    let form = controller.state.forms.inventory;

    let (product, set_product) = bind_text(form, |f| &f.product_name, |f, v| f.product_name = v);
    let (stock, set_stock) = bind_text(form, |f| &f.current_stock, |f, v| f.current_stock = v);
    let (minimum, set_minimum) =
        bind_text(form, |f| &f.min_stock_level, |f, v| f.min_stock_level = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            // already reported through the log and an alert
            let _ = controller.add_inventory().await;
        });
    };

    view! {
        <form class="form form--card" on:submit=on_submit>
            <h3 class="form__title">"Add product"</h3>
            <Input label="Product name" value=product on_input=set_product required=true />
            <Input label="Current stock" input_type="number" step="1" value=stock on_input=set_stock required=true />
            <Input label="Minimum level" input_type="number" step="1" value=minimum on_input=set_minimum required=true />
            <Button button_type="submit">"Add product"</Button>
        </form>
    }
}
