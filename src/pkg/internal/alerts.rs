use serde_json::json;

use crate::conf::settings;

/// Best-effort side channel for notification failures. Never escalates to
/// the caller.
pub async fn notify(message: &str) {
    if settings.slack_webhook_url.is_empty() {
        tracing::warn!("alert dropped, no webhook configured: {}", message);
        return;
    }
    let payload = json!({ "text": format!("🚨 {}", message) });
    match reqwest::Client::new()
        .post(&settings.slack_webhook_url)
        .json(&payload)
        .send()
        .await
    {
        Ok(res) if !res.status().is_success() => {
            tracing::error!("slack alert failed: {}", res.status());
        }
        Err(e) => {
            tracing::error!("slack alert failed: {}", e);
        }
        _ => {}
    }
}
