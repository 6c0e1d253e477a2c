use futures_util::StreamExt;
use modeshare::options::{GraphqlOptions, OPTIONS_QUERY, OptionLists};
use reqwest::{Client, header::ACCEPT_ENCODING};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("GraphQL error: {0}")]
    Graphql(String),
    #[error("GraphQL response has no data")]
    MissingData,
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// Fetches area types and transport modes from the GraphQL backend.
pub async fn fetch_options(client: &Client, url: &str) -> Result<OptionLists, Error> {
    let response = client
        .post(url)
        .json(&GraphqlRequest {
            query: OPTIONS_QUERY,
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body: GraphqlResponse<GraphqlOptions> = response.json().await?;
    if let Some(err) = body.errors.as_deref().and_then(|errors| errors.first()) {
        return Err(Error::Graphql(err.message.clone()));
    }
    let data = body.data.ok_or(Error::MissingData)?;
    Ok(data.into())
}

/// Downloads a daily statistics file into memory.
pub async fn download(client: &Client, url: &str) -> Result<Vec<u8>, Error> {
    let response = client
        .get(url)
        .header(ACCEPT_ENCODING, "gzip, deflate")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }

    let mut buffer: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk?);
    }
    debug!("Downloaded {} bytes from {url}", buffer.len());
    Ok(buffer)
}
