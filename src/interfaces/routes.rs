use url::Url;

pub const CATALOG_PATH: &str = "/";
pub const CHECKOUT_SUCCESS_PATH: &str = "/checkout/success";
pub const CHECKOUT_CANCEL_PATH: &str = "/checkout/cancel";

/// Page an application URL lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Catalog,
    CheckoutSuccess,
    CheckoutCancel,
    NotFound,
}

impl Route {
    /// Matches on the path only; query and fragment belong to the page.
    /// A single trailing slash is tolerated.
    pub fn resolve(url: &Url) -> Self {
        let path = url.path();
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        match path {
            CATALOG_PATH | "" => Route::Catalog,
            CHECKOUT_SUCCESS_PATH => Route::CheckoutSuccess,
            CHECKOUT_CANCEL_PATH => Route::CheckoutCancel,
            _ => Route::NotFound,
        }
    }
}
