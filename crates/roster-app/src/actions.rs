//! Action handlers: data-port calls and background task spawning
//!
//! Both executors turn a data-port outcome into a settlement message with the
//! helpers here, so the controller and the engine settle identically.

use std::sync::Arc;

use roster_backend::CustomerSource;
use roster_core::prelude::*;
use roster_core::{CustomerId, CustomerRecord, ListQuery, PageResult};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::{FetchOrigin, ListMessage, Message};

/// Map a page fetch outcome to its settlement message.
///
/// Every failure kind is flattened to its display text; the list protocol
/// prefixes it.
pub fn page_outcome(origin: FetchOrigin, result: Result<PageResult>) -> ListMessage {
    match result {
        Ok(page) => ListMessage::PageLoaded { origin, page },
        Err(e) => {
            if !e.is_fetch_failure() {
                warn!("Unexpected error kind from customer source: {:?}", e);
            }
            ListMessage::PageFailed {
                origin,
                error: e.to_string(),
            }
        }
    }
}

/// Map a single-record fetch outcome to its settlement message
pub fn customer_outcome(id: CustomerId, result: Result<Option<CustomerRecord>>) -> Message {
    match result {
        Ok(record) => Message::CustomerLoaded { id, record },
        Err(e) => Message::CustomerFetchFailed {
            id,
            error: e.to_string(),
        },
    }
}

/// Fetch one page in the background and post the settlement to `tx`
pub fn spawn_page_fetch<S>(
    source: Arc<S>,
    query: ListQuery,
    origin: FetchOrigin,
    tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    S: CustomerSource + Sync + 'static,
{
    tokio::spawn(async move {
        debug!(
            "Fetching customers ({} fetch, limit {}, cursor {:?})",
            origin.label(),
            query.limit,
            query.cursor
        );
        let result = source.list_customers(query).await;
        let msg = page_outcome(origin, result);
        if tx.send(msg.into()).await.is_err() {
            debug!("Event queue closed, dropping {} fetch result", origin.label());
        }
    })
}

/// Fetch one record in the background for the detail view
pub fn spawn_customer_fetch<S>(
    source: Arc<S>,
    id: CustomerId,
    tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    S: CustomerSource + Sync + 'static,
{
    tokio::spawn(async move {
        let result = source.get_customer(&id).await;
        if tx.send(customer_outcome(id, result)).await.is_err() {
            debug!("Event queue closed, dropping customer fetch result");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_backend::test_utils::{david_and_lynn, test_record, FakeCustomerSource};

    #[test]
    fn test_page_outcome_success() {
        let msg = page_outcome(FetchOrigin::Initial, Ok(david_and_lynn()));
        assert!(matches!(
            msg,
            ListMessage::PageLoaded { origin: FetchOrigin::Initial, ref page } if page.items.len() == 2
        ));
    }

    #[test]
    fn test_page_outcome_keeps_underlying_text() {
        let msg = page_outcome(
            FetchOrigin::Refresh,
            Err(Error::malformed_response("{\"data\":null}")),
        );
        match msg {
            ListMessage::PageFailed { origin, error } => {
                assert_eq!(origin, FetchOrigin::Refresh);
                assert!(error.contains("Invalid API response"));
            }
            other => panic!("expected PageFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_page_fetch_posts_settlement() {
        let source = Arc::new(FakeCustomerSource::new().push_failure("Network Error"));
        let (tx, mut rx) = mpsc::channel(4);

        spawn_page_fetch(source.clone(), ListQuery::default(), FetchOrigin::Initial, tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(Message::List(ListMessage::PageFailed { error, .. })) => {
                assert!(error.contains("Network Error"))
            }
            other => panic!("expected PageFailed, got {:?}", other),
        }
        assert_eq!(source.queries(), vec![ListQuery::default()]);
    }

    #[tokio::test]
    async fn test_spawn_customer_fetch_posts_record() {
        let source =
            Arc::new(FakeCustomerSource::new().with_customer(test_record("4", "Ana", "ADMIN")));
        let (tx, mut rx) = mpsc::channel(4);

        spawn_customer_fetch(source, CustomerId::new("4"), tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(Message::CustomerLoaded { id, record }) => {
                assert_eq!(id.as_str(), "4");
                assert!(record.is_some());
            }
            other => panic!("expected CustomerLoaded, got {:?}", other),
        }
    }
}
