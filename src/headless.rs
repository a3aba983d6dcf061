//! `explorer-tui fetch`: run one operation and print the selected slice.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use serde_json::Value;

use crate::api::RestClient;
use crate::cli::{FetchArgs, Resource};
use crate::config::ConfigStore;
use crate::store::{AppState, Store};
use crate::tables::selectors::{
    block_list_selector, chaincode_list_selector, channels_selector, peer_list_selector,
    transaction_list_selector, transaction_selector,
};
use crate::tables::{Operations, Record};

/// Fetch `args.resource` and return the selector output as JSON.
///
/// Returns `Value::Null` when the fetch was dropped, mirroring an absent
/// slice in the store.
pub fn fetch(config: &ConfigStore, args: &FetchArgs) -> anyhow::Result<Value> {
    let settings = config.get();
    let channel = settings.ui.channel.clone().unwrap_or_default();
    if args.resource.needs_channel() && channel.is_empty() {
        return Err(anyhow!(
            "--channel is required for {}",
            resource_name(args.resource)
        ));
    }

    if args.resource == Resource::Transaction && args.tx.is_none() {
        return Err(anyhow!("--tx is required for transaction"));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = RestClient::new(&settings.api).context("failed to build HTTP client")?;
    let operations = Operations::new(Arc::new(client));
    let store = Store::new();

    let outcome = runtime.block_on(async {
        match args.resource {
            Resource::Blocks => operations.block_list(&store, &channel, args.offset).await,
            Resource::Chaincodes => operations.chaincode_list(&store, &channel).await,
            Resource::Channels => operations.channels(&store).await,
            Resource::Peers => operations.peer_list(&store, &channel).await,
            Resource::Transaction => {
                let tx_id = args.tx.as_deref().unwrap_or_default();
                operations.transaction(&store, &channel, tx_id).await
            }
            Resource::Transactions => {
                operations
                    .transaction_list(&store, &channel, args.from, args.to)
                    .await
            }
        }
    });
    tracing::debug!(
        kind = %outcome.kind(),
        dispatched = outcome.is_dispatched(),
        "fetch finished"
    );

    Ok(store.select(|state| select(state, args.resource)))
}

fn select(state: &AppState, resource: Resource) -> Value {
    let rows = |rows: Option<&[Record]>| rows.map_or(Value::Null, |rows| Value::Array(rows.to_vec()));
    match resource {
        Resource::Blocks => rows(block_list_selector(state)),
        Resource::Chaincodes => rows(chaincode_list_selector(state)),
        Resource::Channels => rows(channels_selector(state)),
        Resource::Peers => rows(peer_list_selector(state)),
        Resource::Transactions => rows(transaction_list_selector(state)),
        Resource::Transaction => transaction_selector(state).cloned().unwrap_or(Value::Null),
    }
}

fn resource_name(resource: Resource) -> &'static str {
    match resource {
        Resource::Blocks => "blocks",
        Resource::Chaincodes => "chaincodes",
        Resource::Channels => "channels",
        Resource::Peers => "peers",
        Resource::Transaction => "transaction",
        Resource::Transactions => "transactions",
    }
}
