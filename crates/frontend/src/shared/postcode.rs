//! Calls to the postcodes.io lookup service

use contracts::domain::common::{ClientError, ClientResult};
use contracts::shared::postcode::{validate_url, PostcodeStatus, ValidateResponse};
use gloo_net::http::Request;

use super::config::config;

/// Ask postcodes.io whether `postcode` exists.
///
/// A non-200 answer counts as invalid; only transport failures are errors.
pub async fn check_postcode(postcode: &str) -> ClientResult<PostcodeStatus> {
    let url = validate_url(&config().postcodes.base_url, postcode);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::warn!("Postcode service unreachable: {}", e);
        ClientError::network(format!("Postcode service unreachable: {}", e))
    })?;

    if !response.ok() {
        log::info!("Postcode service answered {} for {}", response.status(), postcode);
        return Ok(PostcodeStatus::Invalid);
    }

    let body = response
        .json::<ValidateResponse>()
        .await
        .map_err(|e| ClientError::network(format!("Unexpected postcode response: {}", e)))?;
    Ok(body.status())
}
