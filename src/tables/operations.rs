//! Fetch-and-dispatch operations, one per resource kind.
//!
//! Each operation issues exactly one GET. A successful response is decoded
//! and dispatched as a tables action; any failure is logged and dropped, so
//! callers never see an error and the store is left untouched.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::api::{ApiClient, Endpoint, FetchError};
use crate::store::{Action, Dispatch};
use crate::tables::actions::TablesAction;
use crate::tables::kind::ResourceKind;

/// What happened to one operation call. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was dispatched into the store.
    Dispatched(ResourceKind),
    /// The fetch failed and was logged; nothing was dispatched.
    Dropped(ResourceKind),
}

impl FetchOutcome {
    pub fn kind(&self) -> ResourceKind {
        match self {
            FetchOutcome::Dispatched(kind) | FetchOutcome::Dropped(kind) => *kind,
        }
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, FetchOutcome::Dispatched(_))
    }
}

/// Operations bound to an API client.
///
/// Cheap to clone; spawn one task per call. Concurrent calls are
/// independent and not coalesced.
#[derive(Clone)]
pub struct Operations {
    client: Arc<dyn ApiClient>,
}

impl Operations {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn block_list(
        &self,
        dispatch: &dyn Dispatch,
        channel: &str,
        offset: u64,
    ) -> FetchOutcome {
        self.fetch(
            dispatch,
            Endpoint::BlockList {
                channel: channel.to_string(),
                offset,
            },
        )
        .await
    }

    pub async fn chaincode_list(&self, dispatch: &dyn Dispatch, channel: &str) -> FetchOutcome {
        self.fetch(
            dispatch,
            Endpoint::ChaincodeList {
                channel: channel.to_string(),
            },
        )
        .await
    }

    pub async fn channels(&self, dispatch: &dyn Dispatch) -> FetchOutcome {
        self.fetch(dispatch, Endpoint::Channels).await
    }

    pub async fn peer_list(&self, dispatch: &dyn Dispatch, channel: &str) -> FetchOutcome {
        self.fetch(
            dispatch,
            Endpoint::PeerList {
                channel: channel.to_string(),
            },
        )
        .await
    }

    pub async fn transaction(
        &self,
        dispatch: &dyn Dispatch,
        channel: &str,
        tx_id: &str,
    ) -> FetchOutcome {
        self.fetch(
            dispatch,
            Endpoint::Transaction {
                channel: channel.to_string(),
                tx_id: tx_id.to_string(),
            },
        )
        .await
    }

    pub async fn transaction_list(
        &self,
        dispatch: &dyn Dispatch,
        channel: &str,
        from: u64,
        to: u64,
    ) -> FetchOutcome {
        self.fetch(
            dispatch,
            Endpoint::TransactionList {
                channel: channel.to_string(),
                from,
                to,
            },
        )
        .await
    }

    /// Fetch any endpoint and dispatch the decoded action for its kind.
    pub async fn fetch(&self, dispatch: &dyn Dispatch, endpoint: Endpoint) -> FetchOutcome {
        let kind = endpoint.kind();
        let span = tracing::debug_span!(
            "fetch",
            request_id = %Uuid::new_v4(),
            kind = %kind,
            path = %endpoint,
        );

        async move {
            match self.load(&endpoint).await {
                Ok(action) => {
                    dispatch.dispatch(Action::Tables(action));
                    tracing::debug!("dispatched {}", kind.action_type());
                    FetchOutcome::Dispatched(kind)
                }
                Err(err) => {
                    tracing::error!(error_type = err.error_type(), "{}", err);
                    FetchOutcome::Dropped(kind)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn load(&self, endpoint: &Endpoint) -> Result<TablesAction, FetchError> {
        let body = self.client.get_json(endpoint).await?;
        Ok(TablesAction::decode(endpoint.kind(), body))
    }
}
