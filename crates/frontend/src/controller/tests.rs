use super::forms::{
    AccountForm, CustomerForm, DepositForm, InventoryForm, OrderForm, OrderUpdateForm,
    ShipmentForm, TransferForm,
};
use super::*;
use crate::shared::test_support::{ScriptedPrompt, ScriptedTransport};
use crate::shared::transport::Method;
use crate::shared::view_bindings::PageVariant;
use contracts::shared::logger::Severity;
use futures::executor::block_on;

fn setup(
    variant: PageVariant,
    confirm_answer: bool,
) -> (Controller, Arc<ScriptedTransport>, Arc<ScriptedPrompt>) {
    let transport = ScriptedTransport::new();
    let prompt = ScriptedPrompt::answering(confirm_answer);
    let controller = Controller::new(
        ConsoleConfig::immediate(variant),
        ViewBindings::for_variant(variant),
        transport.clone(),
        prompt.clone(),
    );
    (controller, transport, prompt)
}

fn messages(controller: &Controller) -> Vec<String> {
    controller
        .state
        .log
        .entries_untracked()
        .into_iter()
        .map(|e| e.message)
        .collect()
}

#[test]
fn test_first_tab_is_active() {
    let (banking, _, _) = setup(PageVariant::Banking, true);
    assert_eq!(banking.state.active_tab.get_untracked(), Some(Tab::Accounts));
    let (orders, _, _) = setup(PageVariant::Orders, true);
    assert_eq!(orders.state.active_tab.get_untracked(), Some(Tab::Orders));
}

#[test]
fn test_transfer_between_same_account_sends_nothing() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    controller.state.forms.transfer.set(TransferForm {
        from_account_id: "4".into(),
        to_account_id: "4".into(),
        amount: "5000".into(),
        ..TransferForm::default()
    });

    let result = block_on(controller.transfer());

    assert!(matches!(result, Err(ActionError::Invalid(_))));
    assert!(transport.sent().is_empty());
    assert_eq!(controller.state.log.count_untracked(Severity::Error), 1);
    assert_eq!(
        prompt.alerts(),
        vec!["Transfer failed: Source and destination accounts must differ".to_string()]
    );
}

#[test]
fn test_initial_load_with_one_failure() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(Method::Get, "/api/banking/accounts", 200, r#"[{"id":1}]"#);
    transport.respond(
        Method::Get,
        "/api/banking/customers",
        500,
        r#"{"message":"customer store offline"}"#,
    );
    transport.respond(Method::Get, "/api/banking/transactions", 200, "[]");

    block_on(controller.start());

    let log = &controller.state.log;
    assert_eq!(log.count_untracked(Severity::Error), 1);
    let messages = messages(&controller);
    assert!(messages.contains(&"Request failed: customer store offline".to_string()));
    assert!(messages.contains(&"Accounts loaded (1 accounts)".to_string()));
    assert!(messages.contains(&"Transactions loaded (0 transactions)".to_string()));
    assert!(!messages.contains(&"Console ready".to_string()));
    assert_eq!(controller.state.accounts.get_untracked().len(), 1);

    let toasts = prompt.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].1, Severity::Error);
    assert!(prompt.alerts().is_empty());
}

#[test]
fn test_initial_load_error_is_first_in_tab_order() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(Method::Get, "/api/orders", 503, r#"{"message":"orders offline"}"#);

    let err = block_on(controller.load_initial_data()).unwrap_err();

    assert_eq!(
        err,
        RequestError::Http {
            status: 503,
            message: "orders offline".into()
        }
    );
    assert_eq!(controller.state.log.count_untracked(Severity::Error), 2);
}

#[test]
fn test_full_console_initial_load() {
    let (controller, transport, _) = setup(PageVariant::Full, true);
    for path in ["accounts", "customers", "transactions"] {
        transport.respond(Method::Get, &format!("/api/banking/{}", path), 200, "[]");
    }
    transport.respond(Method::Get, "/api/orders", 200, "[]");
    transport.respond(Method::Get, "/api/orders/inventory", 200, "[]");

    block_on(controller.load_initial_data()).unwrap();

    assert_eq!(transport.sent().len(), 5);
    assert_eq!(messages(&controller).last().unwrap(), "Console ready");
}

#[test]
fn test_declined_confirmation_is_silent() {
    let (controller, transport, prompt) = setup(PageVariant::Full, false);

    block_on(controller.freeze_account(3)).unwrap();
    block_on(controller.cancel_order(8)).unwrap();
    block_on(controller.deliver_shipment(2)).unwrap();

    assert!(transport.sent().is_empty());
    assert_eq!(controller.state.log.len_untracked(), 0);
    assert_eq!(prompt.confirms.lock().unwrap().len(), 3);
}

#[test]
fn test_confirmed_freeze_posts_then_reloads() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(Method::Post, "/api/banking/accounts/3/freeze", 200, "{}");
    transport.respond(
        Method::Get,
        "/api/banking/accounts",
        200,
        r#"[{"id":3,"status":"FROZEN"}]"#,
    );

    block_on(controller.run_row_action(RowAction::FreezeAccount(3))).unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            "POST /api/banking/accounts/3/freeze",
            "GET /api/banking/accounts"
        ]
    );
    assert_eq!(messages(&controller)[0], "Freezing account 3");
    assert_eq!(
        prompt.toasts(),
        vec![("Account frozen".to_string(), Severity::Success)]
    );
    assert_eq!(
        controller.state.accounts.get_untracked()[0].status.as_deref(),
        Some("FROZEN")
    );
}

#[test]
fn test_deposit_resets_form_and_reloads_in_order() {
    let (controller, transport, _) = setup(PageVariant::Banking, true);
    transport.respond(Method::Post, "/api/banking/deposit", 200, r#"{"id":11}"#);
    transport.respond(Method::Get, "/api/banking/accounts", 200, "[]");
    transport.respond(Method::Get, "/api/banking/transactions", 200, "[]");
    controller.state.forms.deposit.set(DepositForm {
        account_id: "2".into(),
        amount: "10000".into(),
        ..DepositForm::default()
    });

    block_on(controller.deposit()).unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            "POST /api/banking/deposit",
            "GET /api/banking/accounts",
            "GET /api/banking/transactions"
        ]
    );
    assert_eq!(
        transport.sent()[0].body.as_deref(),
        Some(r#"{"accountId":2,"amount":10000.0,"currency":"KRW","forceFailure":false}"#)
    );
    assert_eq!(controller.state.forms.deposit.get_untracked(), DepositForm::default());
    assert!(messages(&controller).contains(&"Deposit completed: ₩10,000".to_string()));
}

#[test]
fn test_failed_deposit_keeps_form() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(
        Method::Post,
        "/api/banking/deposit",
        400,
        r#"{"success":false,"message":"Account is frozen"}"#,
    );
    let form = DepositForm {
        account_id: "2".into(),
        amount: "500".into(),
        ..DepositForm::default()
    };
    controller.state.forms.deposit.set(form.clone());

    let err = block_on(controller.deposit()).unwrap_err();

    assert_eq!(err.to_string(), "Account is frozen");
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(controller.state.forms.deposit.get_untracked(), form);
    assert_eq!(prompt.alerts(), vec!["Deposit failed: Account is frozen".to_string()]);
    let messages = messages(&controller);
    assert!(messages.contains(&"Request failed: Account is frozen".to_string()));
}

#[test]
fn test_order_without_product_is_rejected() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    controller.state.forms.order.set(OrderForm {
        customer_name: "Choi".into(),
        amount: "12000".into(),
        ..OrderForm::default()
    });

    let result = block_on(controller.create_order());

    assert_eq!(result, Err(ActionError::Invalid("Select a product".into())));
    assert!(transport.sent().is_empty());
}

#[test]
fn test_order_success_shows_backend_message() {
    let (controller, transport, prompt) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Post,
        "/api/orders",
        200,
        r#"{"success":true,"guid":"g-1","message":"Order 5 created","order":{"id":5}}"#,
    );
    transport.respond(Method::Get, "/api/orders", 200, r#"[{"id":5,"status":"CREATED"}]"#);
    transport.respond(Method::Get, "/api/orders/inventory", 200, "[]");
    controller.state.forms.order.set(OrderForm {
        customer_name: "Choi".into(),
        product_name: "Laptop".into(),
        quantity: "2".into(),
        amount: "12000".into(),
        force_payment_failure: false,
    });

    block_on(controller.create_order()).unwrap();

    assert_eq!(
        prompt.toasts(),
        vec![("Order 5 created".to_string(), Severity::Success)]
    );
    assert_eq!(
        transport.calls(),
        vec!["POST /api/orders", "GET /api/orders", "GET /api/orders/inventory"]
    );
    assert_eq!(controller.state.forms.order.get_untracked(), OrderForm::default());
}

#[test]
fn test_switch_tab_loads_only_that_tab() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(Method::Get, "/api/orders/inventory", 200, r#"[{"id":1}]"#);

    block_on(controller.switch_tab("inventory"));

    assert_eq!(controller.state.active_tab.get_untracked(), Some(Tab::Inventory));
    assert_eq!(transport.calls(), vec!["GET /api/orders/inventory"]);
}

#[test]
fn test_unknown_tab_is_ignored() {
    let (controller, transport, prompt) = setup(PageVariant::Orders, true);

    block_on(controller.switch_tab("reports"));
    block_on(controller.switch_tab("accounts"));

    assert_eq!(controller.state.active_tab.get_untracked(), Some(Tab::Orders));
    assert!(transport.sent().is_empty());
    assert_eq!(controller.state.log.len_untracked(), 0);
    assert!(prompt.alerts().is_empty());
}

#[test]
fn test_start_shipping_sends_carrier() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Post,
        "/api/orders/shipment/9/ship",
        200,
        r#"{"success":true,"message":"Shipped"}"#,
    );
    transport.respond(
        Method::Get,
        "/api/orders/4/shipment",
        200,
        r#"{"id":9,"orderId":4,"status":"SHIPPED"}"#,
    );
    controller.state.track_shipment_order(4);

    block_on(controller.run_row_action(RowAction::StartShipping(9))).unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].body.as_deref(), Some(r#"{"carrier":"CJ Logistics"}"#));
    assert_eq!(sent[1].url, "/api/orders/4/shipment");
    assert_eq!(
        controller.state.shipments.get_untracked()[0].status.as_deref(),
        Some("SHIPPED")
    );
}

#[test]
fn test_shipment_lookup_follows_order() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Get,
        "/api/orders/4/shipment",
        200,
        r#"{"id":9,"orderId":4,"trackingNumber":"TRK-0004","status":"PREPARING"}"#,
    );
    controller
        .state
        .forms
        .shipment_lookup
        .update(|f| f.order_id = "4".into());

    block_on(controller.lookup_shipment()).unwrap();

    assert_eq!(controller.state.shipment_orders.get_untracked(), vec![4]);
    assert_eq!(controller.state.shipments.get_untracked().len(), 1);
    assert!(messages(&controller).contains(&"Shipment found: TRK-0004".to_string()));
}

#[test]
fn test_missing_shipment_is_reported() {
    let (controller, transport, prompt) = setup(PageVariant::Orders, true);
    transport.respond(Method::Get, "/api/orders/6/shipment", 404, "");
    controller
        .state
        .forms
        .shipment_lookup
        .update(|f| f.order_id = "6".into());

    assert!(block_on(controller.lookup_shipment()).is_err());

    assert!(controller.state.shipment_orders.get_untracked().is_empty());
    assert_eq!(prompt.alerts(), vec!["Shipment lookup failed: HTTP 404".to_string()]);
}

#[test]
fn test_clear_logs() {
    let (controller, _, _) = setup(PageVariant::Banking, true);
    controller.state.log.info("one");
    controller.state.log.error("two");

    controller.clear_logs();

    assert_eq!(messages(&controller), vec!["Log cleared".to_string()]);
}

#[test]
fn test_low_stock_filter_marks_inventory() {
    let (controller, transport, prompt) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Get,
        "/api/orders/inventory/low-stock",
        200,
        r#"[{"id":3,"productName":"Monitor","currentStock":2,"minStockLevel":5}]"#,
    );

    block_on(controller.filter_low_stock());

    assert!(controller.state.low_stock_only.get_untracked());
    assert_eq!(controller.state.count(Tab::Inventory), 1);
    assert!(prompt.alerts().is_empty());
    assert_eq!(
        messages(&controller).last().map(String::as_str),
        Some("1 products are low on stock")
    );
}

#[test]
fn test_low_stock_failure_alerts_without_extra_entry() {
    let (controller, _, prompt) = setup(PageVariant::Orders, true);

    block_on(controller.filter_low_stock());

    assert_eq!(controller.state.log.count_untracked(Severity::Error), 1);
    assert_eq!(
        prompt.alerts(),
        vec!["Could not load low-stock products: Failed to fetch".to_string()]
    );
    assert!(!controller.state.low_stock_only.get_untracked());
}

#[test]
fn test_shipments_render_the_ones_that_loaded() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    controller.state.track_shipment_order(5);
    controller.state.track_shipment_order(6);
    controller.state.track_shipment_order(5);
    transport.respond(
        Method::Get,
        "/api/orders/5/shipment",
        200,
        r#"{"id":11,"orderId":5,"status":"PREPARING"}"#,
    );

    let result = block_on(controller.load_shipments());

    assert!(result.is_err());
    assert_eq!(transport.sent().len(), 2);
    let shipments = controller.state.shipments.get_untracked();
    assert_eq!(shipments.len(), 1);
    assert_eq!(shipments[0].id, Some(11));
}

#[test]
fn test_transfer_with_same_numeric_account_sends_nothing() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    controller.state.forms.transfer.set(TransferForm {
        from_account_id: "07".into(),
        to_account_id: "7".into(),
        amount: "5000".into(),
        ..TransferForm::default()
    });

    let result = block_on(controller.transfer());

    assert!(matches!(result, Err(ActionError::Invalid(_))));
    assert!(transport.sent().is_empty());
    assert_eq!(
        prompt.alerts(),
        vec!["Transfer failed: Source and destination accounts must differ".to_string()]
    );
}

#[test]
fn test_transfer_reloads_accounts_then_transactions() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(Method::Post, "/api/banking/transfer", 200, r#"{"id":21}"#);
    transport.respond(Method::Get, "/api/banking/accounts", 200, "[]");
    transport.respond(Method::Get, "/api/banking/transactions", 200, "[]");
    controller.state.forms.transfer.set(TransferForm {
        from_account_id: "1".into(),
        to_account_id: "2".into(),
        amount: "3000".into(),
        ..TransferForm::default()
    });

    block_on(controller.transfer()).unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            "POST /api/banking/transfer",
            "GET /api/banking/accounts",
            "GET /api/banking/transactions"
        ]
    );
    assert_eq!(controller.state.forms.transfer.get_untracked(), TransferForm::default());
    assert_eq!(
        prompt.toasts(),
        vec![("Transfer completed: ₩3,000".to_string(), Severity::Success)]
    );
}

#[test]
fn test_failed_transfer_keeps_form_and_skips_reload() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(
        Method::Post,
        "/api/banking/transfer",
        400,
        r#"{"message":"Insufficient balance"}"#,
    );
    let form = TransferForm {
        from_account_id: "1".into(),
        to_account_id: "2".into(),
        amount: "999999".into(),
        ..TransferForm::default()
    };
    controller.state.forms.transfer.set(form.clone());

    assert!(block_on(controller.transfer()).is_err());

    assert_eq!(transport.calls(), vec!["POST /api/banking/transfer"]);
    assert_eq!(controller.state.forms.transfer.get_untracked(), form);
    assert_eq!(
        prompt.alerts(),
        vec!["Transfer failed: Insufficient balance".to_string()]
    );
}

#[test]
fn test_create_account_resets_form_and_reloads_accounts() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(
        Method::Post,
        "/api/banking/accounts",
        200,
        r#"{"id":8,"accountNumber":"110-8"}"#,
    );
    transport.respond(Method::Get, "/api/banking/accounts", 200, r#"[{"id":8}]"#);
    controller.state.forms.account.set(AccountForm {
        customer_id: "3".into(),
        account_holder_name: "Kim".into(),
        ..AccountForm::default()
    });

    block_on(controller.create_account()).unwrap();

    assert_eq!(
        transport.calls(),
        vec!["POST /api/banking/accounts", "GET /api/banking/accounts"]
    );
    assert_eq!(controller.state.forms.account.get_untracked(), AccountForm::default());
    assert_eq!(
        prompt.toasts(),
        vec![("Account opened: 110-8".to_string(), Severity::Success)]
    );
}

#[test]
fn test_create_customer_resets_form_and_reloads_customers() {
    let (controller, transport, _) = setup(PageVariant::Banking, true);
    transport.respond(
        Method::Post,
        "/api/banking/customers",
        200,
        r#"{"customerNumber":"C-4"}"#,
    );
    transport.respond(Method::Get, "/api/banking/customers", 200, "[]");
    controller.state.forms.customer.set(CustomerForm {
        name: "Lee".into(),
        email: "lee@example.com".into(),
        phone_number: "010-1234-5678".into(),
        ..CustomerForm::default()
    });

    block_on(controller.create_customer()).unwrap();

    assert_eq!(
        transport.calls(),
        vec!["POST /api/banking/customers", "GET /api/banking/customers"]
    );
    assert_eq!(controller.state.forms.customer.get_untracked(), CustomerForm::default());
    assert!(messages(&controller).contains(&"Customer registered: C-4".to_string()));
}

#[test]
fn test_failed_customer_registration_keeps_form() {
    let (controller, transport, _) = setup(PageVariant::Banking, true);
    transport.respond(
        Method::Post,
        "/api/banking/customers",
        409,
        r#"{"message":"Email already registered"}"#,
    );
    let form = CustomerForm {
        name: "Lee".into(),
        email: "lee@example.com".into(),
        phone_number: "010-1234-5678".into(),
        ..CustomerForm::default()
    };
    controller.state.forms.customer.set(form.clone());

    assert!(block_on(controller.create_customer()).is_err());

    assert_eq!(transport.calls(), vec!["POST /api/banking/customers"]);
    assert_eq!(controller.state.forms.customer.get_untracked(), form);
}

#[test]
fn test_confirmed_activate_posts_then_reloads() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(Method::Post, "/api/banking/accounts/3/activate", 200, "{}");
    transport.respond(Method::Get, "/api/banking/accounts", 200, "[]");

    block_on(controller.run_row_action(RowAction::ActivateAccount(3))).unwrap();

    assert_eq!(
        prompt.confirms.lock().unwrap().clone(),
        vec!["Activate this account?".to_string()]
    );
    assert_eq!(
        transport.calls(),
        vec![
            "POST /api/banking/accounts/3/activate",
            "GET /api/banking/accounts"
        ]
    );
}

#[test]
fn test_confirmed_suspend_posts_then_reloads() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(Method::Post, "/api/banking/customers/6/suspend", 200, "{}");
    transport.respond(Method::Get, "/api/banking/customers", 200, "[]");

    block_on(controller.run_row_action(RowAction::SuspendCustomer(6))).unwrap();

    assert_eq!(
        prompt.confirms.lock().unwrap().clone(),
        vec!["Suspend this customer?".to_string()]
    );
    assert_eq!(
        transport.calls(),
        vec![
            "POST /api/banking/customers/6/suspend",
            "GET /api/banking/customers"
        ]
    );
    assert_eq!(
        prompt.toasts(),
        vec![("Customer suspended".to_string(), Severity::Success)]
    );
}

#[test]
fn test_failed_freeze_skips_reload() {
    let (controller, transport, prompt) = setup(PageVariant::Banking, true);
    transport.respond(
        Method::Post,
        "/api/banking/accounts/3/freeze",
        400,
        r#"{"message":"Account is closed"}"#,
    );

    assert!(block_on(controller.run_row_action(RowAction::FreezeAccount(3))).is_err());

    assert_eq!(transport.calls(), vec!["POST /api/banking/accounts/3/freeze"]);
    assert_eq!(
        prompt.alerts(),
        vec!["Freezing account failed: Account is closed".to_string()]
    );
}

#[test]
fn test_failed_order_keeps_form_and_skips_reload() {
    let (controller, transport, prompt) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Post,
        "/api/orders",
        400,
        r#"{"success":false,"message":"Payment failed, order rolled back"}"#,
    );
    let form = OrderForm {
        customer_name: "Choi".into(),
        product_name: "Laptop".into(),
        quantity: "1".into(),
        amount: "12000".into(),
        force_payment_failure: true,
    };
    controller.state.forms.order.set(form.clone());

    assert!(block_on(controller.create_order()).is_err());

    assert_eq!(transport.calls(), vec!["POST /api/orders"]);
    assert_eq!(controller.state.forms.order.get_untracked(), form);
    assert_eq!(
        prompt.alerts(),
        vec!["Order creation failed: Payment failed, order rolled back".to_string()]
    );
}

#[test]
fn test_update_order_puts_then_reloads_orders() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(Method::Put, "/api/orders/4", 200, r#"{"success":true}"#);
    transport.respond(Method::Get, "/api/orders", 200, "[]");
    controller.state.forms.order_update.set(OrderUpdateForm {
        order_id: "4".into(),
        customer_name: "Park".into(),
        amount: "15000".into(),
    });

    block_on(controller.update_order()).unwrap();

    assert_eq!(transport.calls(), vec!["PUT /api/orders/4", "GET /api/orders"]);
    assert_eq!(
        transport.sent()[0].body.as_deref(),
        Some(r#"{"customerName":"Park","amount":15000}"#)
    );
    assert_eq!(
        controller.state.forms.order_update.get_untracked(),
        OrderUpdateForm::default()
    );
    assert!(messages(&controller).contains(&"Order updated".to_string()));
}

#[test]
fn test_cancel_order_reloads_orders_then_inventory() {
    let (controller, transport, prompt) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Post,
        "/api/orders/5/cancel",
        200,
        r#"{"success":true,"message":"Order 5 cancelled, stock released"}"#,
    );
    transport.respond(Method::Get, "/api/orders", 200, "[]");
    transport.respond(Method::Get, "/api/orders/inventory", 200, "[]");

    block_on(controller.run_row_action(RowAction::CancelOrder(5))).unwrap();

    assert_eq!(prompt.confirms.lock().unwrap().len(), 1);
    assert_eq!(
        transport.calls(),
        vec![
            "POST /api/orders/5/cancel",
            "GET /api/orders",
            "GET /api/orders/inventory"
        ]
    );
    assert_eq!(
        prompt.toasts(),
        vec![("Order 5 cancelled, stock released".to_string(), Severity::Success)]
    );
}

#[test]
fn test_failed_cancel_skips_reload() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Post,
        "/api/orders/5/cancel",
        400,
        r#"{"message":"Order already shipped"}"#,
    );

    assert!(block_on(controller.run_row_action(RowAction::CancelOrder(5))).is_err());

    assert_eq!(transport.calls(), vec!["POST /api/orders/5/cancel"]);
}

#[test]
fn test_add_inventory_resets_form_and_reloads_inventory() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(Method::Post, "/api/orders/inventory", 200, r#"{"success":true}"#);
    transport.respond(Method::Get, "/api/orders/inventory", 200, "[]");
    controller.state.forms.inventory.set(InventoryForm {
        product_name: "Webcam".into(),
        current_stock: "40".into(),
        min_stock_level: "5".into(),
    });

    block_on(controller.add_inventory()).unwrap();

    assert_eq!(
        transport.calls(),
        vec!["POST /api/orders/inventory", "GET /api/orders/inventory"]
    );
    assert_eq!(controller.state.forms.inventory.get_untracked(), InventoryForm::default());
}

#[test]
fn test_create_shipment_follows_order_and_reloads() {
    let (controller, transport, prompt) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Post,
        "/api/orders/7/shipment",
        200,
        r#"{"success":true,"shipment":{"id":2},"trackingNumber":"TRK-0007"}"#,
    );
    transport.respond(
        Method::Get,
        "/api/orders/7/shipment",
        200,
        r#"{"id":2,"orderId":7,"status":"PREPARING"}"#,
    );
    transport.respond(Method::Get, "/api/orders", 200, "[]");
    controller.state.forms.shipment.set(ShipmentForm {
        order_id: "7".into(),
        shipping_address: "12 Teheran-ro, Seoul".into(),
    });

    block_on(controller.create_shipment()).unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            "POST /api/orders/7/shipment",
            "GET /api/orders/7/shipment",
            "GET /api/orders"
        ]
    );
    assert_eq!(controller.state.shipment_orders.get_untracked(), vec![7]);
    assert_eq!(controller.state.count(Tab::Shipments), 1);
    assert_eq!(controller.state.forms.shipment.get_untracked(), ShipmentForm::default());
    assert_eq!(
        prompt.toasts(),
        vec![("Shipment created: TRK-0007".to_string(), Severity::Success)]
    );
}

#[test]
fn test_failed_shipment_creation_is_not_followed() {
    let (controller, transport, _) = setup(PageVariant::Orders, true);
    transport.respond(
        Method::Post,
        "/api/orders/7/shipment",
        400,
        r#"{"message":"Order is not paid"}"#,
    );
    let form = ShipmentForm {
        order_id: "7".into(),
        shipping_address: "12 Teheran-ro, Seoul".into(),
    };
    controller.state.forms.shipment.set(form.clone());

    assert!(block_on(controller.create_shipment()).is_err());

    assert_eq!(transport.calls(), vec!["POST /api/orders/7/shipment"]);
    assert!(controller.state.shipment_orders.get_untracked().is_empty());
    assert_eq!(controller.state.forms.shipment.get_untracked(), form);
}
