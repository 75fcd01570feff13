use gbdx_client::prelude::*;
use gbdx_client::utils::get_env_or_default;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    let token: String = get_env_or_default("GBDX_TOKEN", String::new());
    if token.is_empty() {
        error!("GBDX_TOKEN not found in environment variables or .env file");
    }

    info!("Creating client");
    let client = GbdxClient::new(&token)?;

    let me = client.users.me().await?;
    info!("Current user: {}", me);

    let filters = SearchFilters::new().with("type", "org");
    match client.accounts.search(&filters, 1).await {
        Ok(accounts) => info!("Accounts: {}", accounts),
        Err(AppError::Api(failure)) => error!("Search rejected: {}", failure),
        Err(e) => return Err(e.into()),
    }

    let plans = client.billing.fetch_plans().await?;
    info!("Plans: {}", plans);

    Ok(())
}
