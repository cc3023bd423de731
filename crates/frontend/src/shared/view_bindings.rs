//! Which interactive elements a page variant carries.
//!
//! One controller serves several pages. Each page declares the element roles
//! it renders; everything else is simply never bound, so handlers for absent
//! forms or buttons are never registered.

use crate::controller::use_controller;
use leptos::prelude::*;
use std::collections::HashSet;

/// Page flavour selected by the route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageVariant {
    Banking,
    Orders,
    Full,
}

impl PageVariant {
    pub fn title(&self) -> &'static str {
        match self {
            PageVariant::Banking => "Banking System",
            PageVariant::Orders => "Order / Inventory / Shipping Rollback Demo",
            PageVariant::Full => "Rollback Demo Console",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Accounts,
    Customers,
    Transactions,
    Notifications,
    Orders,
    Inventory,
    Shipments,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Accounts,
            Tab::Customers,
            Tab::Transactions,
            Tab::Notifications,
            Tab::Orders,
            Tab::Inventory,
            Tab::Shipments,
        ]
    }

    /// Key used by tab buttons (`data-tab`)
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Accounts => "accounts",
            Tab::Customers => "customers",
            Tab::Transactions => "transactions",
            Tab::Notifications => "notifications",
            Tab::Orders => "orders",
            Tab::Inventory => "inventory",
            Tab::Shipments => "shipments",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Accounts => "Accounts",
            Tab::Customers => "Customers",
            Tab::Transactions => "Transactions",
            Tab::Notifications => "Notifications",
            Tab::Orders => "Orders",
            Tab::Inventory => "Inventory",
            Tab::Shipments => "Shipments",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Tab::all().iter().copied().find(|t| t.name() == name)
    }
}

/// Logical element roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Tab(Tab),
    AccountForm,
    CustomerForm,
    DepositForm,
    TransferForm,
    OrderForm,
    OrderUpdateForm,
    InventoryForm,
    ShipmentForm,
    ShipmentLookupForm,
    Refresh(Tab),
    LowStockButton,
    ClearLogsButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewBindings {
    variant: PageVariant,
    roles: HashSet<Role>,
}

impl ViewBindings {
    pub fn for_variant(variant: PageVariant) -> Self {
        let banking = [
            Role::AccountForm,
            Role::CustomerForm,
            Role::DepositForm,
            Role::TransferForm,
        ];
        let orders = [
            Role::OrderForm,
            Role::OrderUpdateForm,
            Role::InventoryForm,
            Role::ShipmentForm,
            Role::ShipmentLookupForm,
            Role::LowStockButton,
        ];

        let mut roles: HashSet<Role> = HashSet::from([Role::ClearLogsButton]);
        for tab in Self::variant_tabs(variant) {
            roles.insert(Role::Tab(*tab));
            roles.insert(Role::Refresh(*tab));
        }
        if variant != PageVariant::Orders {
            roles.extend(banking);
        }
        if variant != PageVariant::Banking {
            roles.extend(orders);
        }
        Self { variant, roles }
    }

    fn variant_tabs(variant: PageVariant) -> &'static [Tab] {
        match variant {
            PageVariant::Banking => &Tab::all()[..4],
            PageVariant::Orders => &Tab::all()[4..],
            PageVariant::Full => Tab::all(),
        }
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    pub fn is_bound(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Bound tabs in display order
    pub fn tabs(&self) -> Vec<Tab> {
        Tab::all()
            .iter()
            .copied()
            .filter(|t| self.is_bound(Role::Tab(*t)))
            .collect()
    }

    pub fn first_tab(&self) -> Option<Tab> {
        self.tabs().into_iter().next()
    }
}

/// Renders `children` only when `role` is bound on the current page.
#[component]
pub fn Bound(role: Role, children: Children) -> impl IntoView {
    let controller = use_controller();
    controller.bindings().is_bound(role).then(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_tabs() {
        assert_eq!(
            ViewBindings::for_variant(PageVariant::Banking).tabs(),
            vec![Tab::Accounts, Tab::Customers, Tab::Transactions, Tab::Notifications]
        );
        assert_eq!(
            ViewBindings::for_variant(PageVariant::Orders).tabs(),
            vec![Tab::Orders, Tab::Inventory, Tab::Shipments]
        );
        assert_eq!(ViewBindings::for_variant(PageVariant::Full).tabs().len(), 7);
    }

    #[test]
    fn test_banking_page_has_no_order_forms() {
        let bindings = ViewBindings::for_variant(PageVariant::Banking);
        assert!(bindings.is_bound(Role::DepositForm));
        assert!(!bindings.is_bound(Role::OrderForm));
        assert!(!bindings.is_bound(Role::Tab(Tab::Shipments)));
    }

    #[test]
    fn test_tab_names() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_name(tab.name()), Some(*tab));
        }
        assert_eq!(Tab::from_name("reports"), None);
    }
}
