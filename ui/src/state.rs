use std::sync::Arc;

use flume::{Receiver, Sender, TryRecvError};
use log::warn;
use usergrid_business::{
    BusinessConfig, EhttpFetcher, FetchError, FetchService, FetchUsersResult, Record, fetch_users,
};

type FetchOutcome = Result<Vec<Record>, FetchError>;

/// The main application state.
///
/// Holds the fetch plumbing and the dataset handed to the table. The dataset is
/// an `Arc` so the table can tell a new upstream dataset from the one it already
/// copied.
pub struct State {
    pub config: BusinessConfig,
    pub users: FetchUsersResult,
    fetcher: Arc<dyn FetchService>,
    send: Sender<FetchOutcome>,
    recv: Receiver<FetchOutcome>,
    empty: Arc<Vec<Record>>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_fetcher(config, Arc::new(EhttpFetcher))
    }

    pub fn with_fetcher(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            config,
            users: FetchUsersResult::Idle,
            fetcher,
            send,
            recv,
            empty: Arc::new(Vec::new()),
        }
    }

    /// State pointed at a test server.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    /// Starts the users fetch. Only the first call does anything.
    pub fn start_fetch(&mut self) {
        if !matches!(self.users, FetchUsersResult::Idle) {
            return;
        }

        self.users = FetchUsersResult::Pending;
        let send = self.send.clone();
        fetch_users(self.fetcher.as_ref(), &self.config, move |outcome| {
            send.send(outcome).unwrap_or(());
        });
    }

    /// Picks up a finished fetch, if any.
    pub fn poll_fetch(&mut self) {
        match self.recv.try_recv() {
            Ok(outcome) => self.users = outcome.into(),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => warn!("Fetch channel disconnected"),
        }
    }

    /// Dataset for the table: the fetched users, or an empty list until then.
    pub fn dataset(&self) -> &Arc<Vec<Record>> {
        self.users.users().unwrap_or(&self.empty)
    }
}
