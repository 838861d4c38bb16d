//! Nomis API.

use crate::client::NomiClient;
use crate::error::{Error, Result};
use crate::types::{ChatRequest, ChatResponse, ListNomisResponse, Nomi};

/// Nomis API client.
pub struct NomisApi {
    client: NomiClient,
}

impl NomisApi {
    pub(crate) fn new(client: NomiClient) -> Self {
        Self { client }
    }

    /// List all Nomis.
    pub async fn list(&self) -> Result<ListNomisResponse> {
        self.client.get("nomis").await
    }

    /// Get a Nomi by ID.
    pub async fn get(&self, id: &str) -> Result<Nomi> {
        self.client.get(&format!("nomis/{}", id)).await
    }

    /// Look a Nomi up by display name, ignoring case.
    ///
    /// Lists every Nomi and returns the first exact match in server order.
    pub async fn find_by_name(&self, name: &str) -> Result<Nomi> {
        let response = self.list().await?;
        find_by_name(&response.nomis, name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Send a message to a Nomi and wait for its reply.
    pub async fn chat(&self, id: &str, text: impl Into<String>) -> Result<ChatResponse> {
        self.client
            .post(&format!("nomis/{}/chat", id), &ChatRequest::new(text))
            .await
    }
}

/// First Nomi whose name equals `name` ignoring case.
///
/// Names are not unique on the server; when several match, the earliest in
/// `nomis` wins.
pub fn find_by_name<'a>(nomis: &'a [Nomi], name: &str) -> Option<&'a Nomi> {
    let wanted = name.to_lowercase();
    let mut matches = nomis.iter().filter(|n| n.name.to_lowercase() == wanted);
    let first = matches.next()?;

    let extra = matches.count();
    if extra > 0 {
        tracing::warn!(
            name,
            uuid = %first.uuid,
            others = extra,
            "several Nomis share this name; using the first"
        );
    }

    Some(first)
}
