//! Application layer: the storefront flows.
//!
//! `ProductSelectionFlow` sends the user off to approve a payment,
//! `CheckoutOrchestrator` captures it exactly once when they come back, and
//! `CatalogPage` loads what there is to buy. Each flow owns its own guard
//! state and turns every error into a user-facing message at its boundary.

pub mod catalog;
pub mod checkout;
pub mod selection;
