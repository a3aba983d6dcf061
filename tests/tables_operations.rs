//! Operations against a live HTTP mock and against a refused connection.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{operations_for, refused_base_url, Recorder};
use explorer_tui::store::{Action, AppState, Dispatch, Store};
use explorer_tui::tables::selectors::{
    block_list_selector, channels_selector, peer_list_selector, rows_selector,
    transaction_selector,
};
use explorer_tui::tables::{FetchOutcome, Operations, ResourceKind};
use serde_json::{json, Value};

async fn run_into(ops: &Operations, dispatch: &dyn Dispatch, kind: ResourceKind) -> FetchOutcome {
    match kind {
        ResourceKind::BlockList => ops.block_list(dispatch, "mychannel", 0).await,
        ResourceKind::ChaincodeList => ops.chaincode_list(dispatch, "mychannel").await,
        ResourceKind::Channels => ops.channels(dispatch).await,
        ResourceKind::PeerList => ops.peer_list(dispatch, "mychannel").await,
        ResourceKind::Transaction => ops.transaction(dispatch, "mychannel", "1").await,
        ResourceKind::TransactionList => ops.transaction_list(dispatch, "mychannel", 0, 0).await,
    }
}

async fn run(ops: &Operations, recorder: &Recorder, kind: ResourceKind) -> FetchOutcome {
    run_into(ops, recorder, kind).await
}

fn expected_path(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::BlockList => "/api/blockAndTxList/mychannel/0",
        ResourceKind::ChaincodeList => "/api/chaincode/mychannel",
        ResourceKind::Channels => "/api/channels/info",
        ResourceKind::PeerList => "/api/peers/mychannel",
        ResourceKind::Transaction => "/api/transaction/mychannel/1",
        ResourceKind::TransactionList => "/api/txList/mychannel/0/0/",
    }
}

fn response_body(kind: ResourceKind) -> Value {
    match kind {
        ResourceKind::Channels => json!({ "channels": [{ "test": "rows" }] }),
        _ => json!({ "rows": [{ "test": "rows" }] }),
    }
}

fn selected(state: &AppState, kind: ResourceKind) -> Option<Value> {
    match kind {
        ResourceKind::Transaction => transaction_selector(state).cloned(),
        _ => rows_selector(state, kind).map(|rows| Value::Array(rows.to_vec())),
    }
}

#[tokio::test]
async fn each_operation_dispatches_one_matching_action() {
    for kind in ResourceKind::ALL {
        let mock = MockBackend::start().await;
        mock.route(expected_path(kind), MockResponse::json(response_body(kind)))
            .await;
        let ops = operations_for(&mock.base_url());
        let recorder = Recorder::default();

        let outcome = run(&ops, &recorder, kind).await;

        assert_eq!(outcome, FetchOutcome::Dispatched(kind), "{kind}");
        let actions = recorder.actions();
        assert_eq!(actions.len(), 1, "{kind}");
        assert!(
            matches!(&actions[0], Action::Tables(action) if action.kind() == kind),
            "{kind}"
        );
        assert_eq!(mock.captured_paths().await, vec![expected_path(kind)]);
    }
}

#[tokio::test]
async fn each_operation_stores_the_extracted_field() {
    for kind in ResourceKind::ALL {
        let mock = MockBackend::start().await;
        mock.route(expected_path(kind), MockResponse::json(response_body(kind)))
            .await;
        let ops = operations_for(&mock.base_url());
        let store = Store::new();

        run_into(&ops, &store, kind).await;

        // `rows` feeds chaincode, peers and the single transaction record.
        let stored = store.select(|state| selected(state, kind));
        assert_eq!(stored, Some(json!([{ "test": "rows" }])), "{kind}");
    }
}

#[tokio::test]
async fn wrong_typed_field_stores_empty_rows() {
    let mock = MockBackend::start().await;
    mock.route(
        "/api/blockAndTxList/mychannel/0",
        MockResponse::json(json!({ "rows": "test" })),
    )
    .await;
    let ops = operations_for(&mock.base_url());
    let store = Store::new();

    let outcome = ops.block_list(&store, "mychannel", 0).await;

    assert!(outcome.is_dispatched());
    assert_eq!(
        store.select(|state| block_list_selector(state).map(<[_]>::len)),
        Some(0)
    );
}

#[tokio::test]
async fn each_operation_dispatches_nothing_when_refused() {
    let ops = operations_for(&refused_base_url());
    for kind in ResourceKind::ALL {
        let recorder = Recorder::default();

        let outcome = run(&ops, &recorder, kind).await;

        assert_eq!(outcome, FetchOutcome::Dropped(kind), "{kind}");
        assert!(recorder.actions().is_empty(), "{kind}");
    }
}

#[tokio::test]
async fn refused_peer_list_leaves_store_untouched() {
    let store = Store::new();
    let ops = operations_for(&refused_base_url());

    ops.peer_list(&store, "mychannel").await;

    assert_eq!(store.snapshot(), AppState::default());
    assert!(store.select(|state| peer_list_selector(state).is_none()));
}

#[tokio::test]
async fn channels_info_populates_selector() {
    let mock = MockBackend::start().await;
    mock.route(
        "/api/channels/info",
        MockResponse::json(json!({ "channels": [{ "test": "rows" }] })),
    )
    .await;
    let store = Store::new();
    let ops = operations_for(&mock.base_url());

    let outcome = ops.channels(&store).await;

    assert!(outcome.is_dispatched());
    let channels = store.select(|state| channels_selector(state).map(|rows| rows.to_vec()));
    assert_eq!(channels, Some(vec![json!({ "test": "rows" })]));
}

#[tokio::test]
async fn non_success_status_is_dropped() {
    let mock = MockBackend::start().await;
    mock.route("/api/peers/mychannel", MockResponse::error(500, "boom"))
        .await;
    let ops = operations_for(&mock.base_url());
    let recorder = Recorder::default();

    let outcome = ops.peer_list(&recorder, "mychannel").await;

    assert_eq!(outcome, FetchOutcome::Dropped(ResourceKind::PeerList));
    assert!(recorder.actions().is_empty());
}

#[tokio::test]
async fn malformed_body_is_dropped() {
    let mock = MockBackend::start().await;
    mock.route(
        "/api/blockAndTxList/mychannel/0",
        MockResponse::raw(200, "<html>not json</html>"),
    )
    .await;
    let ops = operations_for(&mock.base_url());
    let recorder = Recorder::default();

    let outcome = ops.block_list(&recorder, "mychannel", 0).await;

    assert!(!outcome.is_dispatched());
    assert!(recorder.actions().is_empty());
}

#[tokio::test]
async fn failure_keeps_previous_rows() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(json!({ "peers": [{ "server_hostname": "peer0" }] })))
        .await;
    mock.enqueue_response(MockResponse::error(503, "down")).await;
    let store = Store::new();
    let ops = operations_for(&mock.base_url());

    assert!(ops.peer_list(&store, "mychannel").await.is_dispatched());
    assert!(!ops.peer_list(&store, "mychannel").await.is_dispatched());

    let peers = store.select(|state| peer_list_selector(state).map(|rows| rows.to_vec()));
    assert_eq!(peers, Some(vec![json!({ "server_hostname": "peer0" })]));
}

#[tokio::test]
async fn requests_accept_json() {
    let mock = MockBackend::start().await;
    mock.route("/api/channels/info", MockResponse::json(json!({ "channels": [] })))
        .await;
    let ops = operations_for(&mock.base_url());

    ops.channels(&Recorder::default()).await;

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].header("accept"), Some("application/json"));
}
