//! Request construction and the status→error boundary.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::ServerMessage;

/// HTTP client for the portal backend.
///
/// Holds the one configured base URL and, once a user has logged in, the
/// bearer token for the active role. Cheap to clone; views construct one per
/// operation from the session context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Attach the bearer token sent in the `Authorization` header.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and map non-2xx statuses into [`ApiError`].
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Most error responses carry a `{ "message": ... }` envelope; absence
        // of one just means a generic toast.
        let message = response
            .json::<ServerMessage>()
            .await
            .ok()
            .and_then(|m| m.message);
        let err = ApiError::from_status(status.as_u16(), message);
        tracing::warn!(status = status.as_u16(), "backend request failed: {err}");
        Err(err)
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.http.post(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST where the caller only cares that the backend accepted it.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.http.post(self.url(path))).await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.http.patch(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute(self.http.patch(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute(self.http.put(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// POST a single file as a multipart form under `field_name`.
    pub(crate) async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        field_name: &str,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<T, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(ApiError::Network)?;
        let form = reqwest::multipart::Form::new().part(field_name.to_string(), part);
        let response = self
            .execute(self.http.post(self.url(path)).multipart(form))
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5003/");
        assert_eq!(
            client.url("student/login"),
            "http://localhost:5003/student/login"
        );
        let client = ApiClient::new("http://localhost:5003");
        assert_eq!(client.url("admin/info"), "http://localhost:5003/admin/info");
    }
}
