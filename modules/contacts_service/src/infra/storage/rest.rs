//! Store client for a hosted database exposing a PostgREST-style API
//!
//! Requests go to `{base_url}/rest/v1/{table}` with the API key sent both as the
//! `apikey` header and as a bearer token. Row filters use the `column=eq.value`
//! query syntax and writes ask for the affected rows back with
//! `Prefer: return=representation`.

use super::entity::{ContactRow, ErrorBody, InsertRow, PatchRow};
use super::mapper::rows_to_contacts;
use crate::contract::{Contact, ContactId, ContactPatch, NewContact};
use crate::domain::{ContactStore, StoreError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;
use url::Url;

pub static API_KEY_HEADER: &str = "apikey";
static PREFER_HEADER: &str = "prefer";
static RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Clone)]
pub struct RestContactStore {
    endpoint: String,
    client: reqwest::Client,
}

impl RestContactStore {
    pub fn new(
        base_url: &Url,
        table: &str,
        api_key: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key).context("store api key is not a valid header value")?,
        );
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .context("store api key is not a valid header value")?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("could not build store http client")?;

        let endpoint = format!(
            "{}/rest/v1/{}",
            base_url.as_str().trim_end_matches('/'),
            table
        );

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn eq_filter(id: &ContactId) -> [(&'static str, String); 1] {
    [("id", format!("eq.{}", id))]
}

fn transport_error(err: reqwest::Error) -> StoreError {
    tracing::warn!(error = %err, "store request failed");
    StoreError::new(err.to_string())
}

/// Turn a non-2xx response into the store's own error message
async fn error_from_response(response: reqwest::Response) -> StoreError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return transport_error(err),
    };

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            message: Some(message),
            code,
            details,
            hint,
        }) => {
            tracing::warn!(
                status = %status,
                code = code.as_deref().unwrap_or(""),
                details = details.as_deref().unwrap_or(""),
                hint = hint.as_deref().unwrap_or(""),
                message = %message,
                "store rejected request"
            );
            StoreError::new(message)
        }
        _ => {
            tracing::warn!(status = %status, body = %body, "unexpected response from store");
            StoreError::new(format!("HTTP {}: {}", status, body))
        }
    }
}

async fn read_rows(response: reqwest::Response) -> Result<Vec<ContactRow>, StoreError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    response.json::<Vec<ContactRow>>().await.map_err(|err| {
        tracing::warn!(error = %err, "could not decode store rows");
        StoreError::new(format!("could not decode store response: {}", err))
    })
}

#[async_trait]
impl ContactStore for RestContactStore {
    #[tracing::instrument(skip(self), err)]
    async fn select_all(&self) -> Result<Vec<Contact>, StoreError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(transport_error)?;

        rows_to_contacts(read_rows(response).await?)
    }

    #[tracing::instrument(skip(self, contact), err)]
    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("select", "*")])
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(&[InsertRow::from(contact)])
            .send()
            .await
            .map_err(transport_error)?;

        rows_to_contacts(read_rows(response).await?)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::new("store returned no row for the insert"))
    }

    #[tracing::instrument(skip(self), err)]
    async fn select_one(&self, id: &ContactId) -> Result<Option<Contact>, StoreError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*")])
            .query(&eq_filter(id))
            .send()
            .await
            .map_err(transport_error)?;

        let mut contacts = rows_to_contacts(read_rows(response).await?)?;
        match contacts.len() {
            0 => Ok(None),
            1 => Ok(contacts.pop()),
            n => Err(StoreError::new(format!(
                "expected a single contact for id {}, store returned {}",
                id, n
            ))),
        }
    }

    #[tracing::instrument(skip(self, patch), err)]
    async fn update(
        &self,
        id: &ContactId,
        patch: &ContactPatch,
    ) -> Result<Vec<Contact>, StoreError> {
        let response = self
            .client
            .patch(&self.endpoint)
            .query(&eq_filter(id))
            .query(&[("select", "*")])
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(&PatchRow::from(patch))
            .send()
            .await
            .map_err(transport_error)?;

        rows_to_contacts(read_rows(response).await?)
    }

    #[tracing::instrument(skip(self), err)]
    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(&self.endpoint)
            .query(&eq_filter(id))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }
}
