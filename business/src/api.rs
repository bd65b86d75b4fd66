//! REST client for the taxes mock API.
//!
//! Every function here is the single place where transport failures become
//! [`ApiError`]s. Nothing is retried; failures are logged and returned once.

use log::{error, info};
use serde_json::Value;

use crate::config::BusinessConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{Client, RequestBuilder, Response};
use crate::model::{Country, TaxRecord, normalize_countries, normalize_records};

async fn send(request: RequestBuilder, config: &BusinessConfig) -> ApiResult<Response> {
    let response = request.timeout(config.request_timeout).send().await?;
    if !response.is_success() {
        return Err(ApiError::server(response.status, response.reason.clone()));
    }
    Ok(response)
}

/// Logs `err` with `context` and hands it back, for use in `map_err`.
fn logged(context: &str) -> impl Fn(ApiError) -> ApiError + '_ {
    move |err| {
        error!("Error {context}: {err}");
        err
    }
}

/// GET `/taxes`
pub async fn list_records(config: &BusinessConfig) -> ApiResult<Vec<TaxRecord>> {
    let url = config.url("/taxes");
    info!("Fetching records from {url}");

    let response = send(Client::get(&url), config)
        .await
        .map_err(logged("fetching taxes"))?;
    let values: Vec<Value> = response
        .json()
        .map_err(ApiError::from)
        .map_err(logged("parsing taxes"))?;

    Ok(normalize_records(values))
}

/// GET `/taxes/{id}`
pub async fn get_record(config: &BusinessConfig, id: &str) -> ApiResult<TaxRecord> {
    fetch_record(config, id)
        .await
        .map_err(logged("fetching tax"))
}

async fn fetch_record(config: &BusinessConfig, id: &str) -> ApiResult<TaxRecord> {
    let url = config.url(&format!("/taxes/{id}"));

    let response = match send(Client::get(&url), config).await {
        Err(ApiError::Server { status: 404, .. }) => {
            return Err(ApiError::NotFound { id: id.to_owned() });
        }
        other => other?,
    };

    let value: Value = response.json()?;
    TaxRecord::from_json(value).ok_or_else(|| ApiError::NotFound { id: id.to_owned() })
}

/// PUT `/taxes/{id}` with the full merged record as the body.
///
/// Returns the representation the server stored.
pub async fn update_record(config: &BusinessConfig, record: &TaxRecord) -> ApiResult<TaxRecord> {
    info!("Updating record {}", record.id);
    put_record(config, record)
        .await
        .map_err(logged("updating tax"))
}

async fn put_record(config: &BusinessConfig, record: &TaxRecord) -> ApiResult<TaxRecord> {
    let url = config.url(&format!("/taxes/{}", record.id));
    let request = Client::put(&url)
        .header("accept", "application/json")
        .json(&record.to_json())?;
    let response = send(request, config).await?;

    let value: Value = response.json()?;
    TaxRecord::from_json(value)
        .ok_or_else(|| ApiError::Decode("updated record has no id".to_owned()))
}

/// GET `/countries`
pub async fn list_countries(config: &BusinessConfig) -> ApiResult<Vec<Country>> {
    fetch_countries(config)
        .await
        .map_err(logged("fetching countries"))
}

async fn fetch_countries(config: &BusinessConfig) -> ApiResult<Vec<Country>> {
    let url = config.url("/countries");
    let response = send(Client::get(&url), config).await?;
    let values: Vec<Value> = response.json()?;

    Ok(normalize_countries(&values))
}
