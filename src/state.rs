use std::{
    collections::HashMap,
    fmt,
    num::NonZeroUsize,
    str::FromStr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use lru::LruCache;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    contact::{ContactMessage, FormRelay},
    error::Error,
    ui::FormStatus,
    Arguments,
};

pub struct SharedState {
    pub args: Arguments,
    pub relay: FormRelay,
    pub submissions: Submissions,
}

impl SharedState {
    pub fn new(args: Arguments) -> Result<Self, Error> {
        let relay = FormRelay::new(
            args.relay_url.clone(),
            args.relay_access_key.clone(),
            args.relay_timeout_secs.map(Duration::from_secs),
        )?;
        let cache_size =
            NonZeroUsize::new(args.submission_cache_size).unwrap_or(NonZeroUsize::MIN);
        let submissions =
            Submissions::new(cache_size, Duration::from_millis(args.status_reset_ms));

        Ok(Self {
            args,
            relay,
            submissions,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(SubmissionId)
            .map_err(|_| Error::InvalidQuery("submission", s.to_string()))
    }
}

/// A contact form submission as seen by the page rendering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub status: FormStatus,

    /// Values to fill the form with, `None` renders empty fields.
    pub draft: Option<ContactMessage>,
}

/// Recent submissions, each going Sending -> Success|Error -> Idle.
///
/// A failed submission keeps its draft once back to Idle so the form can be filled again.
///
/// The return to Idle is driven by a timer per submission, owned by the registry: dropping the
/// registry (or calling [`Submissions::shutdown`]) aborts the timers still pending.
pub struct Submissions {
    entries: Arc<Mutex<LruCache<SubmissionId, Submission>>>,
    timers: Mutex<HashMap<SubmissionId, JoinHandle<()>>>,
    next_id: AtomicU64,
    reset_after: Duration,
}

impl Submissions {
    pub fn new(capacity: NonZeroUsize, reset_after: Duration) -> Self {
        Submissions {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
            timers: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            reset_after,
        }
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    /// Record a new submission of `message`, now Sending.
    pub async fn begin(&self, message: ContactMessage) -> SubmissionId {
        let id = SubmissionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut status = FormStatus::Idle;
        status.start();
        self.entries.lock().await.put(
            id,
            Submission {
                status,
                draft: Some(message),
            },
        );
        log::debug!("submission {id} sending");
        id
    }

    /// Record the relay outcome and schedule the return to Idle.
    pub async fn finish(&self, id: SubmissionId, outcome: Result<(), Error>) {
        {
            let mut entries = self.entries.lock().await;
            let entry = entries.get_or_insert_mut(id, Submission::default);
            entry.status.finish(&outcome);
            if outcome.is_ok() {
                entry.draft = None;
            }
            log::debug!("submission {id} {:?}", entry.status);
        }

        let entries = self.entries.clone();
        let reset_after = self.reset_after;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(reset_after).await;
            if let Some(entry) = entries.lock().await.peek_mut(&id) {
                entry.status.reset();
                log::trace!("submission {id} back to idle");
            }
        });

        let mut timers = self.timers.lock().await;
        timers.retain(|_, t| !t.is_finished());
        if let Some(previous) = timers.insert(id, timer) {
            previous.abort();
        }
    }

    /// Current state of `id`, unknown ids are Idle.
    pub async fn get(&self, id: SubmissionId) -> Submission {
        self.entries
            .lock()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of resets still waiting for their delay to elapse.
    pub async fn pending_resets(&self) -> usize {
        self.timers
            .lock()
            .await
            .values()
            .filter(|t| !t.is_finished())
            .count()
    }

    /// Abort every pending reset.
    pub async fn shutdown(&self) {
        abort_all(&mut *self.timers.lock().await);
    }
}

impl Drop for Submissions {
    fn drop(&mut self) {
        abort_all(self.timers.get_mut());
    }
}

fn abort_all(timers: &mut HashMap<SubmissionId, JoinHandle<()>>) {
    for (_, timer) in timers.drain() {
        timer.abort();
    }
}
