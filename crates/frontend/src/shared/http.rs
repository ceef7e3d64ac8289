//! Authenticated JSON requests against the REST backend.
//!
//! Transport failures become `ClientError::Network`, non-2xx statuses become
//! `ClientError::Api` with the server's message when it sent one.

use contracts::domain::common::{ClientError, ClientResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;
use crate::system::auth::context::SessionStore;

async fn check(response: Response) -> ClientResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_response(status, &body))
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ClientResult<Response> {
    let response = builder
        .json(body)
        .map_err(|e| ClientError::network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ClientError::network(format!("Failed to send request: {}", e)))?;
    check(response).await
}

/// GET with the session's bearer token
pub async fn get_with_auth<T: DeserializeOwned>(session: SessionStore, path: &str) -> ClientResult<T> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &session.authorization()?)
        .send()
        .await
        .map_err(|e| ClientError::network(format!("Failed to send request: {}", e)))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ClientError::api(200, format!("Failed to parse response: {}", e)))
}

/// PUT a JSON body with the session's bearer token; the response body is ignored
pub async fn put_with_auth<B: Serialize>(session: SessionStore, path: &str, body: &B) -> ClientResult<()> {
    let builder = Request::put(&api_url(path)).header("Authorization", &session.authorization()?);
    send_json(builder, body).await.map(|_| ())
}

/// Unauthenticated POST, returning the parsed response
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ClientResult<T> {
    send_json(Request::post(&api_url(path)), body)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ClientError::api(200, format!("Failed to parse response: {}", e)))
}
