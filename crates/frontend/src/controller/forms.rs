//! Form state and input coercion.
//!
//! Every form keeps its fields as the raw strings the inputs produce;
//! `validate` turns them into the request body or an [`ActionError`].

use super::ActionError;
use contracts::domain::a001_account::aggregate::CreateAccountDto;
use contracts::domain::a002_customer::aggregate::CreateCustomerDto;
use contracts::domain::a003_transaction::aggregate::{DepositDto, TransferDto};
use contracts::domain::a005_order::aggregate::{CreateOrderDto, UpdateOrderDto};
use contracts::domain::a006_inventory::aggregate::CreateInventoryDto;
use contracts::domain::a007_shipment::aggregate::CreateShipmentDto;

fn invalid(message: impl Into<String>) -> ActionError {
    ActionError::Invalid(message.into())
}

fn required(field: &str, raw: &str) -> Result<String, ActionError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(invalid(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn optional(raw: &str) -> Option<String> {
    Some(raw.trim().to_string()).filter(|v| !v.is_empty())
}

/// Positive integer identifier
pub fn parse_id(field: &str, raw: &str) -> Result<i64, ActionError> {
    let value = required(field, raw)?;
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid(format!("{} must be a positive number", field))),
    }
}

/// Strictly positive, finite amount
pub fn parse_amount(field: &str, raw: &str) -> Result<f64, ActionError> {
    let value = required(field, raw)?;
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(invalid(format!("{} must be a positive amount", field))),
    }
}

/// Whole number, zero allowed
pub fn parse_count(field: &str, raw: &str) -> Result<i64, ActionError> {
    let value = required(field, raw)?;
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(invalid(format!("{} must be a whole number", field))),
    }
}

fn currency_or(raw: &str, default_currency: &str) -> String {
    optional(raw)
        .unwrap_or_else(|| default_currency.to_string())
        .to_uppercase()
}

// ============================================================================
// Banking
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AccountForm {
    pub customer_id: String,
    pub account_holder_name: String,
    pub account_type: String,
    pub currency: String,
    pub initial_deposit: String,
    pub force_failure: bool,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            account_holder_name: String::new(),
            account_type: "CHECKING".to_string(),
            currency: String::new(),
            initial_deposit: String::new(),
            force_failure: false,
        }
    }
}

impl AccountForm {
    pub fn validate(&self, default_currency: &str) -> Result<CreateAccountDto, ActionError> {
        let initial_deposit = match optional(&self.initial_deposit) {
            Some(raw) => Some(parse_amount("Initial deposit", &raw)?),
            None => None,
        };
        Ok(CreateAccountDto {
            customer_id: parse_id("Customer ID", &self.customer_id)?,
            account_type: required("Account type", &self.account_type)?,
            currency: currency_or(&self.currency, default_currency),
            account_holder_name: required("Account holder", &self.account_holder_name)?,
            branch_code: None,
            initial_deposit,
            force_failure: self.force_failure,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub customer_type: String,
    pub address: String,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            customer_type: "INDIVIDUAL".to_string(),
            address: String::new(),
        }
    }
}

impl CustomerForm {
    pub fn validate(&self) -> Result<CreateCustomerDto, ActionError> {
        let email = required("Email", &self.email)?;
        if !email.contains('@') {
            return Err(invalid("Email address is not valid"));
        }
        Ok(CreateCustomerDto {
            name: required("Name", &self.name)?,
            email,
            phone_number: required("Phone number", &self.phone_number)?,
            customer_type: required("Customer type", &self.customer_type)?,
            address: optional(&self.address),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepositForm {
    pub account_id: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub force_failure: bool,
}

impl DepositForm {
    pub fn validate(&self, default_currency: &str) -> Result<DepositDto, ActionError> {
        Ok(DepositDto {
            account_id: parse_id("Account", &self.account_id)?,
            amount: parse_amount("Amount", &self.amount)?,
            currency: currency_or(&self.currency, default_currency),
            description: optional(&self.description),
            force_failure: self.force_failure,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferForm {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub force_failure: bool,
}

impl TransferForm {
    pub fn validate(&self, default_currency: &str) -> Result<TransferDto, ActionError> {
        let from_account_id = parse_id("Source account", &self.from_account_id)?;
        let to_account_id = parse_id("Destination account", &self.to_account_id)?;
        // compared as ids, so "07" and "7" are the same account
        if from_account_id == to_account_id {
            return Err(invalid("Source and destination accounts must differ"));
        }
        Ok(TransferDto {
            from_account_id,
            to_account_id,
            amount: parse_amount("Amount", &self.amount)?,
            currency: currency_or(&self.currency, default_currency),
            description: optional(&self.description),
            force_failure: self.force_failure,
        })
    }
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: String,
    pub amount: String,
    pub force_payment_failure: bool,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            product_name: String::new(),
            quantity: "1".to_string(),
            amount: String::new(),
            force_payment_failure: false,
        }
    }
}

impl OrderForm {
    pub fn validate(&self) -> Result<CreateOrderDto, ActionError> {
        let product_name = optional(&self.product_name).ok_or_else(|| invalid("Select a product"))?;
        let quantity = parse_count("Quantity", &self.quantity)?;
        if quantity == 0 {
            return Err(invalid("Quantity must be at least 1"));
        }
        Ok(CreateOrderDto {
            customer_name: required("Customer name", &self.customer_name)?,
            product_name,
            quantity,
            amount: parse_count("Amount", &self.amount)?,
            force_payment_failure: self.force_payment_failure,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderUpdateForm {
    pub order_id: String,
    pub customer_name: String,
    pub amount: String,
}

impl OrderUpdateForm {
    pub fn validate(&self) -> Result<(i64, UpdateOrderDto), ActionError> {
        let id = parse_id("Order ID", &self.order_id)?;
        Ok((
            id,
            UpdateOrderDto {
                customer_name: required("Customer name", &self.customer_name)?,
                amount: parse_count("Amount", &self.amount)?,
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub product_name: String,
    pub current_stock: String,
    pub min_stock_level: String,
}

impl InventoryForm {
    pub fn validate(&self) -> Result<CreateInventoryDto, ActionError> {
        Ok(CreateInventoryDto {
            product_name: required("Product name", &self.product_name)?,
            current_stock: parse_count("Current stock", &self.current_stock)?,
            min_stock_level: parse_count("Minimum stock", &self.min_stock_level)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentForm {
    pub order_id: String,
    pub shipping_address: String,
}

impl ShipmentForm {
    pub fn validate(&self) -> Result<(i64, CreateShipmentDto), ActionError> {
        let id = parse_id("Order ID", &self.order_id)?;
        Ok((
            id,
            CreateShipmentDto {
                shipping_address: required("Shipping address", &self.shipping_address)?,
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentLookupForm {
    pub order_id: String,
}

impl ShipmentLookupForm {
    pub fn validate(&self) -> Result<i64, ActionError> {
        parse_id("Order ID", &self.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_id("Account", " 12 ").unwrap(), 12);
        assert!(parse_id("Account", "0").is_err());
        assert!(parse_id("Account", "abc").is_err());
        assert_eq!(parse_amount("Amount", "1500.5").unwrap(), 1500.5);
        assert!(parse_amount("Amount", "-3").is_err());
        assert!(parse_amount("Amount", "NaN").is_err());
        assert_eq!(parse_count("Stock", "0").unwrap(), 0);
        assert_eq!(
            parse_amount("Amount", "").unwrap_err(),
            ActionError::Invalid("Amount is required".into())
        );
    }

    #[test]
    fn test_transfer_rejects_same_account_first() {
        let form = TransferForm {
            from_account_id: "7".into(),
            to_account_id: " 7".into(),
            amount: "not a number".into(),
            ..TransferForm::default()
        };
        assert_eq!(
            form.validate("KRW").unwrap_err(),
            ActionError::Invalid("Source and destination accounts must differ".into())
        );
    }

    #[test]
    fn test_transfer_empty_accounts_are_required() {
        let form = TransferForm {
            amount: "100".into(),
            ..TransferForm::default()
        };
        assert_eq!(
            form.validate("KRW").unwrap_err(),
            ActionError::Invalid("Source account is required".into())
        );
    }

    #[test]
    fn test_deposit_defaults_currency() {
        let form = DepositForm {
            account_id: "3".into(),
            amount: "10000".into(),
            ..DepositForm::default()
        };
        let dto = form.validate("KRW").unwrap();
        assert_eq!(dto.account_id, 3);
        assert_eq!(dto.currency, "KRW");
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_order_requires_product() {
        let form = OrderForm {
            customer_name: "Lee".into(),
            amount: "30000".into(),
            ..OrderForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            ActionError::Invalid("Select a product".into())
        );
    }

    #[test]
    fn test_account_form_optional_deposit() {
        let mut form = AccountForm {
            customer_id: "1".into(),
            account_holder_name: "Park".into(),
            currency: "usd".into(),
            ..AccountForm::default()
        };
        let dto = form.validate("KRW").unwrap();
        assert_eq!(dto.initial_deposit, None);
        assert_eq!(dto.currency, "USD");
        assert_eq!(dto.account_type, "CHECKING");

        form.initial_deposit = "abc".into();
        assert!(form.validate("KRW").is_err());
    }
}
