//! Common test utilities

use taquilla::SaleForm;

/// The first scenario sale: Ana Lopez, VIP, 2 tickets.
pub fn ana_vip_form() -> SaleForm {
    SaleForm::new("Ana Lopez", "vip", "2")
}

/// The second scenario sale: Luis Ruiz, general admission, 3 tickets.
pub fn luis_general_form() -> SaleForm {
    SaleForm::new("Luis Ruiz", "generales", "3")
}
