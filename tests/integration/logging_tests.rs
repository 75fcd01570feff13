use gbdx_client::prelude::*;
use mockito::{Server, ServerGuard};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing::subscriber::DefaultGuard;

/// In-memory sink for `tracing` output
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Routes every event of the current thread, down to DEBUG, into the sink
    fn install(&self) -> DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

async fn mock_traffic(server: &mut ServerGuard) {
    server
        .mock("GET", "/users/v1/users")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"email":"jane@example.com"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/accounts/v1/accounts")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("POST", "/auth/v1/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"fresh"}"#)
        .create_async()
        .await;
}

async fn exercise(client: &GbdxClient) {
    let filters = SearchFilters::new().with("email", "jane@example.com");
    client.users.search(&filters, 1).await.unwrap();
    client
        .accounts
        .search(&SearchFilters::new().with("owner", "jane"), 1)
        .await
        .unwrap();
    client.login("jane", "s3cret").await.unwrap();
}

#[tokio::test]
async fn test_production_config_logs_no_request_details() {
    let mut server = Server::new_async().await;
    mock_traffic(&mut server).await;

    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let client = GbdxClient::with_config(Config::with_root_url(server.url()), "abc").unwrap();
    assert!(!client.config().should_log_traffic());
    exercise(&client).await;

    let out = logs.contents();
    assert!(!out.contains("jane"), "request details leaked: {out}");
    assert!(!out.contains("s3cret"), "password leaked: {out}");
    assert!(!out.contains("per_page"), "search string leaked: {out}");
    assert!(!out.contains("limit=100"), "search string leaked: {out}");
}

#[tokio::test]
async fn test_development_traffic_logging_records_requests() {
    let mut server = Server::new_async().await;
    mock_traffic(&mut server).await;

    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let config = Config::with_root_url(server.url())
        .mode(Mode::Development)
        .log_traffic(true);
    let client = GbdxClient::with_config(config, "abc").unwrap();
    exercise(&client).await;

    let out = logs.contents();
    assert!(out.contains("per_page=100&page=1&email=jane@example.com"));
    assert!(out.contains("limit=100&page=1&owner=jane"));
    assert!(!out.contains("s3cret"), "password leaked: {out}");
}
