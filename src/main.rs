use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::process::ExitCode;
use std::sync::Arc;
use storefront_checkout::application::catalog::CatalogPage;
use storefront_checkout::application::checkout::{CheckoutOrchestrator, CheckoutState};
use storefront_checkout::application::selection::{ProductSelectionFlow, SelectionOutcome};
use storefront_checkout::config::{DEFAULT_API_BASE, GatewayConfig};
use storefront_checkout::domain::ports::{NavigatorRef, PaymentGatewayRef};
use storefront_checkout::domain::product::ProductId;
use storefront_checkout::infrastructure::http::HttpPaymentGateway;
use storefront_checkout::infrastructure::navigator::StdoutNavigator;
use storefront_checkout::interfaces::presenter::{
    CancelView, CatalogView, CheckoutView, NotFoundView,
};
use storefront_checkout::interfaces::routes::Route;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the storefront backend
    #[arg(long, env = "STOREFRONT_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    api_base: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the catalog with each product's purchase control
    Products,
    /// Start a PayPal checkout for a product and print the approval URL
    Buy {
        /// Catalog identifier of the product
        product_id: u64,
    },
    /// Open an application URL, e.g. the provider's return URL
    Open {
        /// Absolute URL such as http://localhost:5173/checkout/success?token=...
        url: Url,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig::new(&cli.api_base).into_diagnostic()?;
    let gateway: PaymentGatewayRef = Arc::new(HttpPaymentGateway::new(config));
    let navigator: NavigatorRef = Arc::new(StdoutNavigator);

    let code = match cli.command {
        Command::Products => show_catalog(gateway, navigator).await,
        Command::Buy { product_id } => {
            let flow = ProductSelectionFlow::new(gateway, navigator);
            match flow.initiate(ProductId(product_id)).await {
                SelectionOutcome::Redirected(_) => ExitCode::SUCCESS,
                SelectionOutcome::Busy => ExitCode::SUCCESS,
                SelectionOutcome::Failed(message) => {
                    println!("Error: {message}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Open { url } => match Route::resolve(&url) {
            Route::Catalog => show_catalog(gateway, navigator).await,
            Route::CheckoutSuccess => {
                let orchestrator = CheckoutOrchestrator::new(gateway);
                let state = orchestrator.activate(&url).await;
                print!("{}", CheckoutView::from_state(&state));
                if matches!(state, CheckoutState::Failed(_)) {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }
            Route::CheckoutCancel => {
                print!("{}", CancelView);
                ExitCode::SUCCESS
            }
            Route::NotFound => {
                print!("{}", NotFoundView);
                ExitCode::FAILURE
            }
        },
    };

    Ok(code)
}

async fn show_catalog(gateway: PaymentGatewayRef, navigator: NavigatorRef) -> ExitCode {
    let page = CatalogPage::load(gateway.as_ref()).await;
    let selection = ProductSelectionFlow::new(gateway, navigator);
    print!(
        "{}",
        CatalogView {
            page: &page,
            selection: &selection,
        }
    );
    match page {
        CatalogPage::Loaded(_) => ExitCode::SUCCESS,
        CatalogPage::Failed(_) => ExitCode::FAILURE,
    }
}
