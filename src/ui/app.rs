use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::api::RestClient;
use crate::clipboard::ClipboardHandler;
use crate::config::ConfigStore;
use crate::store::{Action, AppState, Dispatch, Store};
use crate::tables::selectors::{
    block_list_selector, channel_names_selector, current_channel_selector, rows_selector,
    transaction_selector,
};
use crate::tables::FetchOutcome;
use crate::tables::Operations;
use crate::ui::lists::{cell_text, TRANSACTION_TX_KEY};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Tab};
use crate::ui::view::{BlocksProps, BlocksView};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Dashboard controller: owns navigation state and turns input into
/// operations. All fetched data lives in the [`Store`].
pub struct App {
    should_quit: bool,
    config: ConfigStore,
    base_url: String,
    store: Store,
    operations: Operations,
    runtime: Handle,
    nav: NavState,
    last_refresh: Instant,
    clipboard: Option<ClipboardHandler>,
}

impl App {
    pub fn new(config: ConfigStore, store: Store, operations: Operations, runtime: Handle) -> Self {
        let base_url = config.get().api.base_url;
        Self {
            should_quit: false,
            config,
            base_url,
            store,
            operations,
            runtime,
            nav: NavState::default(),
            last_refresh: Instant::now(),
            clipboard: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
    }

    /// Number of rows in the active tab's listing.
    pub fn rows_len(&self) -> usize {
        let kind = self.nav.tab.resource();
        self.store
            .select(|state| rows_selector(state, kind).map_or(0, <[_]>::len))
    }

    /// True once the active tab's listing has been fetched.
    pub fn is_loaded(&self, state: &AppState) -> bool {
        rows_selector(state, self.nav.tab.resource()).is_some()
    }

    pub fn current_channel(&self) -> Option<String> {
        self.store
            .select(|state| current_channel_selector(state).map(str::to_string))
    }

    /// Props for the blocks tab. The transaction is shown only while the
    /// detail pane is open.
    pub fn blocks_props<'a>(
        &self,
        state: &'a AppState,
        get_transaction: &'a dyn Fn(&str, &str),
    ) -> BlocksProps<'a> {
        BlocksProps {
            block_list: block_list_selector(state),
            current_channel: current_channel_selector(state),
            transaction: if self.nav.detail {
                transaction_selector(state)
            } else {
                None
            },
            get_transaction,
        }
    }

    fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Operations, Store) -> Fut,
        Fut: Future<Output = FetchOutcome> + Send + 'static,
    {
        let fut = op(self.operations.clone(), self.store.clone());
        self.runtime.spawn(fut);
    }

    /// Fetch the channel list and, when a channel is selected, every listing
    /// for it. Each fetch is an independent task.
    pub fn refresh(&mut self) {
        self.last_refresh = Instant::now();
        self.spawn(|ops, store| async move { ops.channels(&store).await });

        let Some(channel) = self.current_channel() else {
            return;
        };
        self.refresh_channel(channel);
    }

    fn refresh_channel(&self, channel: String) {
        let ch = channel.clone();
        self.spawn(|ops, store| async move { ops.block_list(&store, &ch, 0).await });
        let ch = channel.clone();
        self.spawn(|ops, store| async move { ops.transaction_list(&store, &ch, 0, 0).await });
        let ch = channel.clone();
        self.spawn(|ops, store| async move { ops.peer_list(&store, &ch).await });
        self.spawn(|ops, store| async move { ops.chaincode_list(&store, &channel).await });
    }

    /// `getTransaction` callback handed to the views.
    pub fn get_transaction(&self, channel: &str, tx_id: &str) {
        let channel = channel.to_string();
        let tx_id = tx_id.to_string();
        self.spawn(|ops, store| async move { ops.transaction(&store, &channel, &tx_id).await });
    }

    pub fn select_channel(&mut self, channel: String) {
        if self.current_channel().as_deref() == Some(channel.as_str()) {
            return;
        }
        tracing::info!("switching to channel {}", channel);
        self.store.dispatch(Action::SelectChannel {
            channel: channel.clone(),
        });
        self.dispatch_nav(NavIntent::Clamp { len: 0 });
        self.dispatch_nav(NavIntent::CloseDetail);
        self.refresh_channel(channel);
    }

    /// Move to the next channel reported by the backend.
    pub fn cycle_channel(&mut self) {
        let next = self.store.select(|state| {
            let names = channel_names_selector(state);
            if names.is_empty() {
                return None;
            }
            let position = current_channel_selector(state)
                .and_then(|current| names.iter().position(|name| *name == current));
            let next = match position {
                Some(index) => (index + 1) % names.len(),
                None => 0,
            };
            Some(names[next].to_string())
        });

        if let Some(channel) = next {
            self.select_channel(channel);
        }
    }

    /// Called after every store update.
    pub fn on_state_changed(&mut self, action_type: &'static str) {
        if action_type == "CHANNELS" && self.current_channel().is_none() {
            let first = self.store.select(|state| {
                channel_names_selector(state)
                    .first()
                    .map(|name| name.to_string())
            });
            if let Some(channel) = first {
                self.select_channel(channel);
            }
        }
        let len = self.rows_len();
        self.dispatch_nav(NavIntent::Clamp { len });
    }

    pub fn on_tick(&mut self) {
        let Some(interval) = self.config.get().ui.refresh_interval() else {
            return;
        };
        if self.last_refresh.elapsed() >= interval {
            self.refresh();
        }
    }

    /// Open the transaction behind the selected row.
    pub fn activate(&mut self) {
        let state = self.store.snapshot();
        let index = self.nav.selected;
        let opened = match self.nav.tab {
            Tab::Blocks => {
                let get_transaction =
                    |channel: &str, tx_id: &str| self.get_transaction(channel, tx_id);
                BlocksView::new(self.blocks_props(&state, &get_transaction)).activate(index)
            }
            Tab::Transactions => {
                match (current_channel_selector(&state), self.selected_tx_hash(&state)) {
                    (Some(channel), Some(tx_id)) => {
                        self.get_transaction(channel, &tx_id);
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        };

        if opened {
            self.dispatch_nav(NavIntent::OpenDetail);
        }
    }

    fn selected_tx_hash(&self, state: &AppState) -> Option<String> {
        match self.nav.tab {
            Tab::Blocks => {
                let noop = |_: &str, _: &str| {};
                BlocksView::new(self.blocks_props(state, &noop)).tx_hash(self.nav.selected)
            }
            Tab::Transactions => rows_selector(state, self.nav.tab.resource())?
                .get(self.nav.selected)
                .map(|record| cell_text(record, TRANSACTION_TX_KEY))
                .filter(|hash| hash != "-"),
            _ => None,
        }
    }

    /// Copy the selected row's transaction hash to the system clipboard.
    pub fn copy_tx_hash(&mut self) {
        let state = self.store.snapshot();
        let Some(hash) = self.selected_tx_hash(&state) else {
            return;
        };

        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(handler),
                Err(err) => {
                    tracing::warn!("clipboard unavailable: {}", err);
                    return;
                }
            }
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            if let Err(err) = clipboard.set_text(&hash) {
                tracing::warn!("failed to copy {}: {}", hash, err);
            }
        }
    }

    /// Re-read the config file and point operations at its API settings.
    /// Keeps the current config and client on failure. The tick rate only
    /// takes effect on restart.
    pub fn reload_config(&mut self) {
        if let Err(err) = self.config.reload() {
            tracing::warn!("config reload failed: {}", err);
            return;
        }
        let config = self.config.get();
        let client = match RestClient::new(&config.api) {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!("keeping previous API client: {}", err);
                return;
            }
        };
        self.operations = Operations::new(Arc::new(client));
        self.base_url = config.api.base_url;
        tracing::info!("config reloaded, API at {}", self.base_url);

        if let Some(channel) = config.ui.channel {
            self.select_channel(channel);
        }
        self.refresh();
    }
}
