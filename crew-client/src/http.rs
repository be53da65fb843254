//! HTTP client for the employee REST backend

use crate::{ClientConfig, ClientError, ClientResult, LoginRequest, LoginResponse};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Employee, NewEmployee};

/// HTTP client for making network requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request (no response body expected)
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Handle the HTTP response, decoding the body on success
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Map non-success statuses to the client error taxonomy
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %text, "backend returned an error status");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(response)
    }

    // ========== Auth API ==========

    /// Login with email and password.
    ///
    /// The auth contract is a boolean: `Ok(false)` means the backend rejected
    /// the credentials, `Err` means the request itself failed.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<bool> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.post::<LoginResponse, _>("auth/login", &request).await {
            Ok(response) => Ok(response.success),
            Err(ClientError::Unauthorized) => Ok(false),
            Err(e) => Err(e),
        }
    }

    // ========== Employee API ==========

    /// Fetch the full employee collection
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("employees").await
    }

    /// Create an employee; the backend assigns and echoes the id
    pub async fn create_employee(&self, employee: &NewEmployee) -> ClientResult<Employee> {
        self.post("employees", employee).await
    }

    /// Replace an employee record in full (the body carries the id)
    pub async fn update_employee(&self, employee: &Employee) -> ClientResult<Employee> {
        self.put(&format!("employees/{}", employee.id), employee)
            .await
    }

    /// Delete a single employee
    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("employees/{}", id)).await
    }
}
