//! Fetch-parse-deliver pipeline for a single person.
//!
//! Every failure is logged here and collapsed into `None`; callers only learn
//! whether a person was found.

use rand::Rng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::{PeopleSource, SwapiClient};
use crate::config::PersonApiConfig;
use crate::error::{PersonApiError, PersonApiResult};
use crate::person::Person;

/// Highest id the random picker draws from.
pub const MAX_PERSON_ID: u64 = 87;

/// Draws a person id uniformly from `1..=MAX_PERSON_ID`.
pub fn random_person_id<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(1..=MAX_PERSON_ID)
}

/// Fetches people by id and delivers `Some(person)` or `None`.
///
/// Cheap to clone; clones share the underlying source. Calls are independent
/// and may run concurrently.
#[derive(Clone)]
pub struct PersonFetcher {
    source: Arc<dyn PeopleSource>
}

impl PersonFetcher {
    /// Creates a fetcher backed by a [`SwapiClient`].
    pub fn new(config: PersonApiConfig) -> PersonApiResult<Self> {
        Ok(Self::with_source(Arc::new(SwapiClient::new(config)?)))
    }

    pub fn with_source(source: Arc<dyn PeopleSource>) -> Self {
        Self { source }
    }

    /// Issues one request for `id` and returns the decoded person, or `None`
    /// on any failure.
    pub async fn fetch_by_id(&self, id: u64) -> Option<Person> {
        match self.source.get_person(id).await {
            Ok(person) => {
                debug!(person_id = id, name = %person.name, "Fetched person");
                Some(person)
            }
            Err(e) => {
                log_failure(id, &e);
                None
            }
        }
    }

    /// Continuation form of [`Self::fetch_by_id`].
    ///
    /// The request runs on a task spawned onto the current tokio runtime and
    /// `continuation` is invoked exactly once on that task, including when
    /// the endpoint cannot be built. Must be called from within a runtime.
    pub fn fetch_by_id_with<F>(&self, id: u64, continuation: F) -> JoinHandle<()>
    where
        F: FnOnce(Option<Person>) + Send + 'static
    {
        let fetcher = self.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch_by_id(id).await;
            continuation(result);
        })
    }

    /// Draws an id from `rng` and fetches it. Returns the id alongside the
    /// result.
    pub async fn fetch_random<R: Rng + ?Sized>(&self, rng: &mut R) -> (u64, Option<Person>) {
        let id = random_person_id(rng);
        (id, self.fetch_by_id(id).await)
    }
}

fn log_failure(id: u64, error: &PersonApiError) {
    match error {
        PersonApiError::InvalidEndpoint { url, reason } => {
            warn!(person_id = id, url = %url, reason = %reason, "Invalid person endpoint");
        }
        e if e.is_transport() => {
            warn!(person_id = id, error = %e, "Person request failed");
        }
        e => {
            warn!(person_id = id, error = %e, "Failed to decode person");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    struct StubSource {
        calls: AtomicUsize,
        fail: bool
    }

    impl StubSource {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail
            })
        }
    }

    #[async_trait]
    impl PeopleSource for StubSource {
        async fn get_person(&self, id: u64) -> PersonApiResult<Person> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PersonApiError::Status {
                    status: 503,
                    url: format!("http://stub/{id}")
                });
            }
            Ok(Person {
                name: format!("person-{id}"),
                ..Person::default()
            })
        }
    }

    #[test]
    fn test_random_person_id_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let id = random_person_id(&mut rng);
            assert!((1..=MAX_PERSON_ID).contains(&id));
        }
    }

    #[tokio::test]
    async fn test_fetch_by_id_success() {
        let source = StubSource::new(false);
        let fetcher = PersonFetcher::with_source(source.clone());

        let person = fetcher.fetch_by_id(3).await.unwrap();
        assert_eq!(person.name, "person-3");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_by_id_failure_is_absence() {
        let source = StubSource::new(true);
        let fetcher = PersonFetcher::with_source(source.clone());

        assert!(fetcher.fetch_by_id(3).await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_continuation_invoked_once() {
        let fetcher = PersonFetcher::with_source(StubSource::new(false));
        let invocations = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();

        let counter = invocations.clone();
        fetcher
            .fetch_by_id_with(5, move |person| {
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(person);
            })
            .await
            .unwrap();

        let person = rx.await.unwrap().unwrap();
        assert_eq!(person.name, "person-5");
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_continuation_receives_absence_on_failure() {
        let fetcher = PersonFetcher::with_source(StubSource::new(true));
        let (tx, rx) = oneshot::channel();

        fetcher
            .fetch_by_id_with(5, move |person| {
                let _ = tx.send(person);
            })
            .await
            .unwrap();

        assert!(rx.await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_continuation_fires_for_malformed_endpoint() {
        let config = PersonApiConfig {
            base_url: "not a url/".to_string(),
            ..PersonApiConfig::default()
        };
        let fetcher = PersonFetcher::new(config).unwrap();
        let (tx, rx) = oneshot::channel();

        fetcher
            .fetch_by_id_with(1, move |person| {
                let _ = tx.send(person);
            })
            .await
            .unwrap();

        assert!(rx.await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_random_uses_drawn_id() {
        let fetcher = PersonFetcher::with_source(StubSource::new(false));
        let expected = random_person_id(&mut StdRng::seed_from_u64(42));

        let (id, person) = fetcher.fetch_random(&mut StdRng::seed_from_u64(42)).await;
        assert_eq!(id, expected);
        assert_eq!(person.unwrap().name, format!("person-{id}"));
    }

    #[tokio::test]
    async fn test_fetch_random_is_deterministic_for_seed() {
        let fetcher = PersonFetcher::with_source(StubSource::new(false));

        let (first, _) = fetcher.fetch_random(&mut StdRng::seed_from_u64(1977)).await;
        let (second, _) = fetcher.fetch_random(&mut StdRng::seed_from_u64(1977)).await;
        assert_eq!(first, second);
        assert!((1..=MAX_PERSON_ID).contains(&first));
    }
}
