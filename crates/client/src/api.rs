//! REST API client for the todo service.
//!
//! Wraps the `/api/todos` and `/api/categories` endpoints using
//! [`reqwest`]. Error bodies are read for their `message` field so callers
//! see the same text the server produced.

use serde::Deserialize;
use todo_core::listing::{SortKey, StatusFilter};
use todo_store::models::category::{Category, CreateCategory, UpdateCategory};
use todo_store::models::todo::{CreateTodo, Todo, UpdateTodo};

/// HTTP client for a single todo server.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the todo REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, or the raw body.
        message: String,
    },
}

impl ClientError {
    /// HTTP status of an API error, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Parameters for `GET /api/todos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilters {
    pub status: StatusFilter,
    pub sort: Option<SortKey>,
    pub category_id: Option<String>,
}

impl TodoFilters {
    /// Query pairs for the non-empty filters only.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("status", self.status.as_str().to_string())];
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(category_id) = self.category_id.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("categoryId", category_id.to_string()));
        }
        pairs
    }
}

impl TodoApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Server origin, e.g. `http://localhost:5000`. The
    ///   `/api` prefix is added per request.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    // ---- todos ----

    pub async fn list_todos(&self, filters: &TodoFilters) -> Result<Vec<Todo>, ClientError> {
        let response = self
            .client
            .get(self.url("/todos"))
            .query(&filters.query_pairs())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn get_todo(&self, id: &str) -> Result<Todo, ClientError> {
        let response = self.client.get(self.url(&format!("/todos/{id}"))).send().await?;

        Self::parse_response(response).await
    }

    pub async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(self.url("/todos"))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn update_todo(&self, id: &str, changes: &UpdateTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/todos/{id}")))
            .json(changes)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a todo, returning the removed record.
    pub async fn delete_todo(&self, id: &str) -> Result<Todo, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- categories ----

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self.client.get(self.url("/categories")).send().await?;

        Self::parse_response(response).await
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/categories/{id}")))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Todos filed under a category.
    pub async fn list_category_todos(&self, id: &str) -> Result<Vec<Todo>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/categories/{id}/todos")))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, ClientError> {
        let response = self
            .client
            .post(self.url("/categories"))
            .json(&CreateCategory::named(name))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn update_category(&self, id: &str, name: &str) -> Result<Category, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/categories/{id}")))
            .json(&UpdateCategory::named(name))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a category, returning the removed record.
    pub async fn delete_category(&self, id: &str) -> Result<Category, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/categories/{id}")))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure the
    /// body's `message` field (or the raw text) becomes the error message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            tracing::debug!(status = status.as_u16(), %message, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
