use reqwest::Client;

/// Client for report submission.
///
/// No timeouts are set; a request runs until the transport itself gives up.
/// `verify_tls = false` accepts any certificate.
pub fn build_report_client(verify_tls: bool) -> Client {
    Client::builder()
        .danger_accept_invalid_certs(!verify_tls)
        .user_agent(concat!("telepath/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default HTTP client");
            Client::new()
        })
}
