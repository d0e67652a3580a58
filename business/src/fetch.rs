//! One-shot fetch of the users dataset.
//!
//! The request goes through a [`FetchService`] so tests can swap the transport.
//! There is no retry: the caller gets exactly one [`FetchUsersResult`] back and a
//! failure leaves the dataset empty.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::sync::Arc;

use ehttp::{Request, Response};
use log::{error, info};
use serde::Deserialize;
use serde_json::Value;

use crate::{BusinessConfig, FetchError, Record, RecordError};

/// Callback handed to a [`FetchService`].
pub type OnDone = Box<dyn FnOnce(ehttp::Result<Response>) + Send + 'static>;

/// Transport used for the users request.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done);
    }
}

/// Result of fetching the users dataset.
#[derive(Debug, Clone, Default)]
pub enum FetchUsersResult {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// Fetch in progress.
    Pending,
    /// Users fetched successfully.
    Success(Arc<Vec<Record>>),
    /// Fetch failed with an error message.
    Error(String),
}

impl FetchUsersResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the list of users if the fetch succeeded.
    pub fn users(&self) -> Option<&Arc<Vec<Record>>> {
        match self {
            Self::Success(users) => Some(users),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Result<Vec<Record>, FetchError>> for FetchUsersResult {
    fn from(result: Result<Vec<Record>, FetchError>) -> Self {
        match result {
            Ok(users) => Self::Success(Arc::new(users)),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

/// Body of the users endpoint: a bare array, or an object wrapping it.
#[derive(Deserialize)]
#[serde(untagged)]
enum UsersPayload {
    List(Vec<Value>),
    Wrapped { users: Vec<Value> },
}

/// Decodes the users endpoint body, rejecting duplicate ids.
pub fn parse_users(bytes: &[u8]) -> Result<Vec<Record>, FetchError> {
    let values = match serde_json::from_slice::<UsersPayload>(bytes)? {
        UsersPayload::List(values) | UsersPayload::Wrapped { users: values } => values,
    };

    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(values.len());
    for value in &values {
        let record = Record::try_from(value)?;
        if !seen.insert(record.id()) {
            return Err(RecordError::DuplicateId(record.id()).into());
        }
        records.push(record);
    }

    Ok(records)
}

fn handle_response(result: ehttp::Result<Response>) -> Result<Vec<Record>, FetchError> {
    let response = result.map_err(FetchError::Transport)?;
    if !response.ok {
        return Err(FetchError::Status(response.status));
    }
    parse_users(&response.bytes)
}

/// Requests the users list once and reports the outcome through `on_done`.
pub fn fetch_users(
    service: &dyn FetchService,
    config: &BusinessConfig,
    on_done: impl FnOnce(Result<Vec<Record>, FetchError>) + Send + 'static,
) {
    let url = config.users_url();
    info!("Fetching users from {url}");

    service.fetch(
        Request::get(&url),
        Box::new(move |result| {
            let outcome = handle_response(result);
            match &outcome {
                Ok(users) => info!("Fetched {} users successfully", users.len()),
                Err(err) => error!("Failed to fetch users: {err}"),
            }
            on_done(outcome);
        }),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::RecordId;

    /// Answers every request synchronously with a canned result.
    #[derive(Debug)]
    struct CannedFetcher {
        response: ehttp::Result<Response>,
        requested: Mutex<Vec<String>>,
    }

    impl CannedFetcher {
        fn new(response: ehttp::Result<Response>) -> Self {
            Self {
                response,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl FetchService for CannedFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            self.requested.lock().unwrap().push(request.url);
            on_done(self.response.clone());
        }
    }

    fn response(status: u16, body: &str) -> Response {
        Response {
            url: "http://test/api/users".to_owned(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            headers: ehttp::Headers::default(),
            bytes: body.as_bytes().to_vec(),
        }
    }

    fn run(fetcher: &CannedFetcher) -> FetchUsersResult {
        let config = BusinessConfig::new("http://test".to_owned());
        let slot = Arc::new(Mutex::new(FetchUsersResult::Pending));
        let out = Arc::clone(&slot);
        fetch_users(fetcher, &config, move |result| {
            *out.lock().unwrap() = result.into();
        });
        slot.lock().unwrap().clone()
    }

    #[test]
    fn parses_bare_array() {
        let users = parse_users(br#"[{"id": 1, "firstname": "Ada"}, {"id": 2}]"#).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id(), RecordId(2));
    }

    #[test]
    fn parses_wrapped_users() {
        let users = parse_users(br#"{"users": [{"id": 5, "country": "PL"}]}"#).unwrap();
        assert_eq!(users, vec![Record::new(5).with("country", "PL")]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_users(br#"[{"id": 1}, {"id": 1}]"#).unwrap_err();
        assert!(matches!(
            err,
            FetchError::Record(RecordError::DuplicateId(RecordId(1)))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_users(b"not json"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn successful_fetch_hits_users_url() {
        let fetcher = CannedFetcher::new(Ok(response(200, r#"[{"id": 1}]"#)));

        let result = run(&fetcher);

        assert_eq!(result.users().map(|u| u.len()), Some(1));
        assert_eq!(
            fetcher.requested.lock().unwrap().as_slice(),
            ["http://test/api/users".to_owned()]
        );
    }

    #[test]
    fn non_success_status_is_an_error() {
        let fetcher = CannedFetcher::new(Ok(response(500, "")));
        let result = run(&fetcher);
        assert_eq!(result.error_message(), Some("API returned status: 500"));
        assert!(result.users().is_none());
    }

    #[test]
    fn transport_failure_is_an_error() {
        let fetcher = CannedFetcher::new(Err("connection refused".to_owned()));
        let result = run(&fetcher);
        assert_eq!(
            result.error_message(),
            Some("Request failed: connection refused")
        );
    }
}
