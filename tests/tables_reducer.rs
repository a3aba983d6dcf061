use explorer_tui::store::{Action, AppReducer, AppState};
use explorer_tui::tables::actions::{
    get_block_list, get_chaincode_list, get_channels, get_peer_list, get_transaction,
    get_transaction_list,
};
use explorer_tui::tables::{
    BlockListPayload, ChaincodeListPayload, ChannelsPayload, PeerListPayload, ResourceKind,
    TablesAction, TablesReducer, TablesState, TransactionListPayload, TransactionPayload,
};
use explorer_tui::ui::mvi::Reducer;
use serde_json::{json, Value};

fn reduce(state: TablesState, action: Action) -> TablesState {
    TablesReducer::reduce(state, action)
}

fn every_action() -> Vec<Action> {
    vec![
        get_block_list(BlockListPayload {
            rows: vec![json!({ "blocknum": 1 })],
        }),
        get_chaincode_list(ChaincodeListPayload {
            chaincode: vec![json!({ "chaincodename": "mycc" })],
        }),
        get_channels(ChannelsPayload {
            channels: vec![json!({ "channelname": "mychannel" })],
        }),
        get_peer_list(PeerListPayload {
            peers: vec![json!({ "server_hostname": "peer0" })],
        }),
        get_transaction(TransactionPayload {
            row: Some(json!({ "txhash": "abc" })),
        }),
        get_transaction_list(TransactionListPayload {
            rows: vec![json!({ "txhash": "abc" })],
        }),
    ]
}

#[test]
fn block_list_rows_are_stored() {
    let state = reduce(
        TablesState::default(),
        get_block_list(BlockListPayload {
            rows: vec![json!("test")],
        }),
    );

    let slice = state.block_list.expect("block list slice");
    assert_eq!(&slice.rows[..], &[json!("test")]);
}

#[test]
fn transaction_row_is_stored_as_transaction() {
    let action = TablesAction::decode(ResourceKind::Transaction, json!({ "row": "test" }));
    let state = reduce(TablesState::default(), Action::Tables(action));

    let slice = state.transaction.expect("transaction slice");
    assert_eq!(slice.transaction.as_deref(), Some(&json!("test")));
}

#[test]
fn transaction_list_accepts_bare_array() {
    let action = TablesAction::decode(ResourceKind::TransactionList, json!([{ "txhash": "a" }]));
    let state = reduce(TablesState::default(), Action::Tables(action));

    let rows = state.transaction_list.expect("transaction list slice").rows;
    assert_eq!(&rows[..], &[json!({ "txhash": "a" })]);
}

#[test]
fn missing_field_stores_empty_rows() {
    let action = TablesAction::decode(ResourceKind::PeerList, json!({}));
    let state = reduce(TablesState::default(), Action::Tables(action));

    assert!(state.peer_list.expect("peer list slice").rows.is_empty());
}

#[test]
fn wrong_typed_rows_store_empty_slice() {
    let action = TablesAction::decode(ResourceKind::BlockList, json!({ "rows": "test" }));
    let state = reduce(TablesState::default(), Action::Tables(action));

    assert!(state.block_list.expect("block list slice").rows.is_empty());
}

#[test]
fn reducing_twice_equals_reducing_once() {
    for action in every_action() {
        let once = reduce(TablesState::default(), action.clone());
        let twice = reduce(once.clone(), action);
        assert_eq!(once, twice);
    }
}

#[test]
fn each_action_touches_only_its_slice() {
    for action in every_action() {
        let state = reduce(TablesState::default(), action);
        let populated = [
            state.block_list.is_some(),
            state.chaincode_list.is_some(),
            state.channels.is_some(),
            state.peer_list.is_some(),
            state.transaction.is_some(),
            state.transaction_list.is_some(),
        ];
        assert_eq!(populated.iter().filter(|p| **p).count(), 1);
    }
}

#[test]
fn slices_coexist() {
    let state = every_action()
        .into_iter()
        .fold(TablesState::default(), reduce);

    assert!(state.block_list.is_some());
    assert!(state.chaincode_list.is_some());
    assert!(state.channels.is_some());
    assert!(state.peer_list.is_some());
    assert!(state.transaction.is_some());
    assert!(state.transaction_list.is_some());
}

#[test]
fn non_table_actions_are_identity() {
    let populated = every_action()
        .into_iter()
        .fold(TablesState::default(), reduce);

    for action in [
        Action::Init,
        Action::SelectChannel {
            channel: "other".to_string(),
        },
    ] {
        assert_eq!(reduce(populated.clone(), action.clone()), populated);
        assert_eq!(reduce(TablesState::default(), action), TablesState::default());
    }
}

#[test]
fn root_reducer_tracks_channel_and_tables() {
    let state = AppReducer::reduce(
        AppState::default(),
        Action::SelectChannel {
            channel: "mychannel".to_string(),
        },
    );
    let state = AppReducer::reduce(
        state,
        get_channels(ChannelsPayload {
            channels: vec![Value::from("mychannel")],
        }),
    );

    assert_eq!(state.current_channel.as_deref(), Some("mychannel"));
    assert!(state.tables.channels.is_some());
}
