//! HTTP client for the budget REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::BudgetApi;
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Account, AccountId, Category, CategoryId, Expense, Income, NewAccount, NewCategory,
    NewExpense, NewIncome, SummaryItem,
};

/// Longest body excerpt written to the log for unexpected responses
const LOG_BODY_LIMIT: usize = 200;

/// reqwest-backed implementation of [`BudgetApi`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> BudgetResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BudgetError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from user settings
    pub fn from_settings(settings: &Settings) -> BudgetResult<Self> {
        Self::new(
            settings.effective_api_url(),
            Duration::from_secs(settings.request_timeout_secs.max(1)),
        )
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> BudgetResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "API request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "API request failed");
            BudgetError::from(e)
        })?;

        decode_response(response, &url).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> BudgetResult<T> {
        self.send::<T, ()>(Method::GET, path, None).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> BudgetResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> BudgetResult<T> {
        self.send::<T, ()>(Method::DELETE, path, None).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response, url: &str) -> BudgetResult<T> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    let body = response.text().await?;

    tracing::debug!(%url, status = status.as_u16(), "API response");

    if !status.is_success() {
        let detail = extract_detail(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());
        tracing::warn!(%url, status = status.as_u16(), %detail, "API error");
        return Err(BudgetError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    if !content_type.contains("application/json") {
        tracing::warn!(
            %url,
            status = status.as_u16(),
            %content_type,
            body = %truncate_body(&body, LOG_BODY_LIMIT),
            "non-JSON response"
        );
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(%url, error = %e, "failed to parse JSON");
        BudgetError::Json(format!("{}: {}", url, e))
    })
}

/// Pull a human-readable message out of a FastAPI error body
///
/// Handles `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "...", ...}]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

/// Shorten a body for logging, marking the cut with `...`
pub fn truncate_body(body: &str, limit: usize) -> String {
    if body.chars().count() <= limit {
        body.to_string()
    } else {
        let mut cut: String = body.chars().take(limit).collect();
        cut.push_str("...");
        cut
    }
}

#[async_trait(?Send)]
impl BudgetApi for ApiClient {
    async fn list_expenses(&self) -> BudgetResult<Vec<Expense>> {
        self.get("/api/expenses/").await
    }

    async fn expense_summary(&self) -> BudgetResult<Vec<SummaryItem>> {
        self.get("/api/expenses/summary").await
    }

    async fn create_expense(&self, expense: &NewExpense) -> BudgetResult<Expense> {
        self.post("/api/expenses/", expense).await
    }

    async fn list_incomes(&self) -> BudgetResult<Vec<Income>> {
        self.get("/api/incomes/").await
    }

    async fn create_income(&self, income: &NewIncome) -> BudgetResult<Income> {
        self.post("/api/incomes/", income).await
    }

    async fn list_accounts(&self) -> BudgetResult<Vec<Account>> {
        self.get("/api/accounts/").await
    }

    async fn create_account(&self, account: &NewAccount) -> BudgetResult<Account> {
        self.post("/api/accounts/", account).await
    }

    async fn delete_account(&self, id: &AccountId) -> BudgetResult<Account> {
        self.delete(&format!("/api/accounts/{}", id)).await
    }

    async fn list_categories(&self) -> BudgetResult<Vec<Category>> {
        self.get("/api/categories/").await
    }

    async fn create_category(&self, category: &NewCategory) -> BudgetResult<Category> {
        self.post("/api/categories/", category).await
    }

    async fn delete_category(&self, id: &CategoryId) -> BudgetResult<Category> {
        self.delete(&format!("/api/categories/{}", id)).await
    }

    async fn health(&self) -> BudgetResult<()> {
        let _: serde_json::Value = self.get("/api/health").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/expenses/"),
            "http://localhost:8000/api/expenses/"
        );
        assert_eq!(client.url("api/health"), "http://localhost:8000/api/health");
    }

    #[test]
    fn test_from_settings_uses_configured_url() {
        if std::env::var(crate::config::settings::API_URL_ENV).is_ok() {
            return;
        }
        let mut settings = Settings::default();
        settings.api_base_url = "http://budget.lan:9000".into();

        let client = ApiClient::from_settings(&settings).unwrap();
        assert_eq!(client.base_url(), "http://budget.lan:9000");
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "Insufficient funds"}"#).as_deref(),
            Some("Insufficient funds")
        );
        assert_eq!(
            extract_detail(
                r#"{"detail": [{"loc": ["body", "amount"], "msg": "field required"},
                               {"msg": "value is not a valid decimal"}]}"#
            )
            .as_deref(),
            Some("field required; value is not a valid decimal")
        );
        assert_eq!(extract_detail("<html>oops</html>"), None);
        assert_eq!(extract_detail(r#"{"error": "x"}"#), None);
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short", 10), "short");
        assert_eq!(truncate_body("абвгд", 3), "абв...");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        // Bind then release a port so nothing is listening on it
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client = ApiClient::new(format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let err = client.list_categories().await.unwrap_err();
        assert!(matches!(err, BudgetError::Http(_)));
    }
}
