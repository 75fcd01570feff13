use gbdx_client::prelude::*;
use gbdx_client::utils::get_env_or_default;
use serde_json::json;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let username: String = get_env_or_default("GBDX_USERNAME", String::new());
    let password: String = get_env_or_default("GBDX_PASSWORD", String::new());

    // The initial token is not needed for the password grant
    let client = GbdxClient::new("")?;
    let token = client.login(&username, &password).await?;
    info!("Logged in, token expires in {:?} seconds", token.expires_in);

    let me = client.users.me().await?;
    info!("Current user: {}", me);

    if let Some(id) = me.as_json().and_then(|v| v["id"].as_str()) {
        let updated = client
            .users
            .update(id, &json!({"last_login_client": "gbdx-client"}))
            .await?;
        info!("Updated user: {}", updated);
    }

    Ok(())
}
