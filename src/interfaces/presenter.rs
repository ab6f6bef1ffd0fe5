//! Text rendering of the storefront pages.
//!
//! Every view is a borrowed snapshot with a `Display` impl; none of them hold
//! or mutate flow state.

use crate::application::catalog::CatalogPage;
use crate::application::checkout::CheckoutState;
use crate::application::selection::ProductSelectionFlow;
use crate::domain::order::CaptureResult;
use std::fmt;

pub const STORE_TITLE: &str = "Mock E-Commerce Store";
pub const PENDING_MESSAGE: &str = "Finalizing your payment with PayPal...";
const BACK_TO_STORE: &str = "Back to store (/)";

/// The single view the return page shows for a given checkout state.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutView<'a> {
    Pending,
    Error { message: &'a str },
    Success(&'a CaptureResult),
}

impl<'a> CheckoutView<'a> {
    pub fn from_state(state: &'a CheckoutState) -> Self {
        match state {
            CheckoutState::AwaitingToken | CheckoutState::Capturing => CheckoutView::Pending,
            CheckoutState::Failed(message) => CheckoutView::Error {
                message: message.as_str(),
            },
            CheckoutState::Succeeded(result) => CheckoutView::Success(result),
        }
    }
}

impl fmt::Display for CheckoutView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutView::Pending => writeln!(f, "{PENDING_MESSAGE}"),
            CheckoutView::Error { message } => {
                writeln!(f, "Error: {message}")?;
                writeln!(f, "{BACK_TO_STORE}")
            }
            CheckoutView::Success(result) => {
                writeln!(f, "Payment Successful")?;
                writeln!(f, "Your product has been purchased successfully.")?;
                writeln!(f)?;
                writeln!(f, "Product: {}", result.product_name)?;
                writeln!(f, "Paid amount: {} {}", result.amount, result.currency_code)?;
                writeln!(f, "Status from PayPal: {}", result.status)?;
                writeln!(f)?;
                writeln!(f, "{BACK_TO_STORE}")
            }
        }
    }
}

/// Shown when the user backs out of the provider's approval page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CancelView;

impl fmt::Display for CancelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Payment Cancelled")?;
        writeln!(f, "You cancelled the PayPal payment.")?;
        writeln!(f, "{BACK_TO_STORE}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotFoundView;

impl fmt::Display for NotFoundView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page not found")?;
        writeln!(f, "{BACK_TO_STORE}")
    }
}

/// Product grid with each product's purchase control.
pub struct CatalogView<'a> {
    pub page: &'a CatalogPage,
    pub selection: &'a ProductSelectionFlow,
}

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let products = match self.page {
            CatalogPage::Loaded(products) => products,
            CatalogPage::Failed(message) => return writeln!(f, "Error: {message}"),
        };

        writeln!(f, "{STORE_TITLE}")?;
        writeln!(f, "Select a product and pay using PayPal Sandbox.")?;
        if let Some(error) = self.selection.error() {
            writeln!(f, "Error: {error}")?;
        }
        writeln!(f)?;
        for product in products {
            let control = self.selection.control(product.id);
            write!(
                f,
                "#{} {} ${} [{}]",
                product.id, product.name, product.price, control.label
            )?;
            if control.disabled {
                write!(f, " (disabled)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
