//! File upload to object storage, behind the backend's `/upload` endpoint.
//! The storage itself is opaque: we send the file and get a public URL back.

use contracts::domain::common::{ClientError, ClientResult};
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

use super::api_utils::api_url;
use crate::system::auth::context::SessionStore;

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

pub async fn upload_file(session: SessionStore, file: File) -> ClientResult<String> {
    let auth = session.authorization()?;

    let form = FormData::new().map_err(|e| ClientError::network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| ClientError::network(format!("{e:?}")))?;

    let response = Request::post(&api_url("/upload"))
        .header("Authorization", &auth)
        .body(form)
        .map_err(|e| ClientError::network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| ClientError::network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::from_response(status, &body));
    }

    let data = response
        .json::<UploadResponse>()
        .await
        .map_err(|e| ClientError::api(200, format!("Failed to parse response: {}", e)))?;
    log::info!("Uploaded {} to {}", file.name(), data.url);
    Ok(data.url)
}
