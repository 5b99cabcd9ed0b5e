//! One-shot fan-out/fan-in loader for the first page of creatures.

use crate::client::EntitySource;
use crate::error::LoadError;
use crate::models::EntityRecord;
use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub const LIST_OFFSET: u32 = 0;
pub const LIST_LIMIT: u32 = 10;

/// Fetch the name list, then every detail concurrently.
///
/// Records come back in list order. Any failing request fails the whole
/// batch, and cancelling `cancel` drops every request still in flight.
pub async fn load_entities<S>(
    source: &S,
    cancel: &CancellationToken,
) -> Result<Vec<EntityRecord>, LoadError>
where
    S: EntitySource + ?Sized,
{
    let fetch = async {
        let names = source.list_names(LIST_OFFSET, LIST_LIMIT).await?;
        debug!(count = names.len(), "fetched creature names");

        let records =
            try_join_all(names.iter().map(|name| source.entity_by_name(name))).await?;
        info!(count = records.len(), "loaded creature details");
        Ok(records)
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(LoadError::Cancelled),
        result = fetch => result,
    }
}
