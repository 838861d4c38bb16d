//! Rooms API.

use crate::client::NomiClient;
use crate::error::Result;
use crate::types::ListRoomsResponse;

/// Rooms API client.
pub struct RoomsApi {
    client: NomiClient,
}

impl RoomsApi {
    pub(crate) fn new(client: NomiClient) -> Self {
        Self { client }
    }

    /// List all rooms.
    pub async fn list(&self) -> Result<ListRoomsResponse> {
        self.client.get("rooms").await
    }
}
