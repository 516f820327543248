//! Reaction controller
//!
//! Owns the like/bookmark state of one post as seen by one viewer. Toggles
//! are applied optimistically, the store mutation runs in the background and
//! a failed mutation is reverted with the relative inverse of the toggle.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use blug_core::entities::PostReactions;
use blug_core::error::DomainError;
use blug_core::panel::{BeginRejection, ReactionAxis, ReactionIntent, ReactionPanel, ReactionViewState};
use blug_core::traits::{ReactionStore, RepoResult};
use blug_core::value_objects::{AuthorId, PostId, Viewer};

use super::notification::{Notification, Notifier};

/// Login page linked from sign-in prompts unless overridden
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// How a like/unlike/bookmark/unbookmark request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionOutcome {
    /// The store accepted the mutation; the optimistic state stands
    Confirmed,
    /// The store rejected the mutation; the optimistic state was undone
    Reverted,
    /// Anonymous viewer; nothing was changed
    AuthRequired,
    /// The axis already had an operation in flight; ignored
    InFlight,
    /// The view already showed the requested state; ignored
    Redundant,
    /// The controller was dropped before the mutation finished
    Discarded,
}

impl From<BeginRejection> for ReactionOutcome {
    fn from(rejection: BeginRejection) -> Self {
        match rejection {
            BeginRejection::InFlight => Self::InFlight,
            BeginRejection::Redundant => Self::Redundant,
        }
    }
}

/// Result of an explicit refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshOutcome {
    Refreshed,
    /// An operation was in flight; the state was left alone
    Busy,
    /// The read failed; the state was left alone
    Failed,
}

struct Inner {
    post_id: PostId,
    viewer: Viewer,
    panel: Mutex<ReactionPanel>,
    store: Arc<dyn ReactionStore>,
    notifier: Notifier,
}

impl Inner {
    /// Settle a finished mutation and report failures
    fn finish(&self, axis: ReactionAxis, intent: ReactionIntent, result: RepoResult<()>) -> ReactionOutcome {
        let succeeded = result.is_ok();
        if self.panel.lock().settle(axis, succeeded).is_none() {
            warn!(post_id = %self.post_id, axis = %axis, "Settled an axis that was not pending");
        }

        match result {
            Ok(()) => {
                info!(post_id = %self.post_id, axis = %axis, intent = ?intent, "Reaction confirmed");
                ReactionOutcome::Confirmed
            }
            Err(e) => {
                warn!(
                    post_id = %self.post_id,
                    axis = %axis,
                    intent = ?intent,
                    error = %e,
                    "Reaction mutation failed, reverted"
                );
                self.notifier.notify(Notification::error(failure_message(axis, intent)));
                ReactionOutcome::Reverted
            }
        }
    }
}

/// Optimistic like/bookmark controller for one post-view session
///
/// Dropping the controller ends the session: mutations still in flight run
/// to completion against the store but their results are discarded.
///
/// Toggles spawn onto the current Tokio runtime and panic outside of one.
pub struct ReactionController {
    inner: Arc<Inner>,
    login_path: String,
}

impl ReactionController {
    /// Start a session from an embedded reactions snapshot
    pub fn from_snapshot(
        post_id: PostId,
        reactions: &PostReactions,
        viewer: Viewer,
        store: Arc<dyn ReactionStore>,
        notifier: Notifier,
    ) -> Self {
        Self::with_panel(post_id, ReactionPanel::derive(reactions, &viewer), viewer, store, notifier)
    }

    /// Start a session by reading the post's reactions from the store
    ///
    /// A failed read starts from the all-false, zero-count state instead of
    /// failing.
    #[instrument(skip(store, notifier))]
    pub async fn load(
        post_id: PostId,
        viewer: Viewer,
        store: Arc<dyn ReactionStore>,
        notifier: Notifier,
    ) -> Self {
        let panel = match store.fetch_post_reactions(post_id).await {
            Ok(reactions) => ReactionPanel::derive(&reactions, &viewer),
            Err(e) => {
                warn!(post_id = %post_id, error = %e, "Failed to read reactions, starting degraded");
                ReactionPanel::degraded()
            }
        };

        Self::with_panel(post_id, panel, viewer, store, notifier)
    }

    fn with_panel(
        post_id: PostId,
        panel: ReactionPanel,
        viewer: Viewer,
        store: Arc<dyn ReactionStore>,
        notifier: Notifier,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                post_id,
                viewer,
                panel: Mutex::new(panel),
                store,
                notifier,
            }),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// Link sign-in prompts to `path`
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    #[inline]
    pub fn post_id(&self) -> PostId {
        self.inner.post_id
    }

    #[inline]
    pub fn viewer(&self) -> Viewer {
        self.inner.viewer
    }

    /// Current view state, optimistic values included
    pub fn state(&self) -> ReactionViewState {
        self.inner.panel.lock().view()
    }

    /// Whether `axis` has a mutation in flight (its control is disabled)
    pub fn is_pending(&self, axis: ReactionAxis) -> bool {
        self.inner.panel.lock().is_pending(axis)
    }

    /// Like the post
    ///
    /// The optimistic update is applied before this returns; the returned
    /// future resolves once the store has answered.
    pub fn like(&self) -> impl Future<Output = ReactionOutcome> + Send + 'static {
        self.toggle(ReactionAxis::Like, ReactionIntent::Add)
    }

    /// Remove the viewer's like
    pub fn unlike(&self) -> impl Future<Output = ReactionOutcome> + Send + 'static {
        self.toggle(ReactionAxis::Like, ReactionIntent::Remove)
    }

    /// Save the post to the viewer's reading list
    pub fn bookmark(&self) -> impl Future<Output = ReactionOutcome> + Send + 'static {
        self.toggle(ReactionAxis::Bookmark, ReactionIntent::Add)
    }

    /// Remove the post from the viewer's reading list
    pub fn unbookmark(&self) -> impl Future<Output = ReactionOutcome> + Send + 'static {
        self.toggle(ReactionAxis::Bookmark, ReactionIntent::Remove)
    }

    /// Re-derive the state from a fresh read
    ///
    /// Refused while any axis is pending. A failed read keeps the current
    /// state and emits an error notification.
    #[instrument(skip(self), fields(post_id = %self.inner.post_id))]
    pub async fn refresh(&self) -> RefreshOutcome {
        if self.inner.panel.lock().any_pending() {
            return RefreshOutcome::Busy;
        }

        match self.inner.store.fetch_post_reactions(self.inner.post_id).await {
            Ok(reactions) => {
                if self.inner.panel.lock().rederive(&reactions, &self.inner.viewer) {
                    debug!("Reactions refreshed");
                    RefreshOutcome::Refreshed
                } else {
                    RefreshOutcome::Busy
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to refresh reactions");
                self.inner
                    .notifier
                    .notify(Notification::error("Sorry, we couldn't refresh this post's reactions."));
                RefreshOutcome::Failed
            }
        }
    }

    fn toggle(
        &self,
        axis: ReactionAxis,
        intent: ReactionIntent,
    ) -> impl Future<Output = ReactionOutcome> + Send + 'static {
        let started = self.start(axis, intent);
        async move {
            match started {
                Started::Done(outcome) => outcome,
                Started::Spawned { handle, inner } => join_mutation(handle, inner, axis, intent).await,
            }
        }
    }

    /// Gate, apply the optimistic effect and spawn the store mutation
    fn start(&self, axis: ReactionAxis, intent: ReactionIntent) -> Started {
        let Some(author_id) = self.inner.viewer.author_id() else {
            debug!(post_id = %self.inner.post_id, axis = %axis, "Anonymous viewer, prompting sign-in");
            self.inner.notifier.notify(
                Notification::info(auth_required_message(axis)).with_action("Go login", &self.login_path),
            );
            return Started::Done(ReactionOutcome::AuthRequired);
        };

        if let Err(rejection) = self.inner.panel.lock().begin(axis, intent) {
            debug!(post_id = %self.inner.post_id, axis = %axis, reason = %rejection, "Toggle ignored");
            return Started::Done(rejection.into());
        }

        let weak = Arc::downgrade(&self.inner);
        let store = Arc::clone(&self.inner.store);
        let post_id = self.inner.post_id;
        let handle = tokio::spawn(async move {
            let result = mutate(store.as_ref(), post_id, author_id, axis, intent).await;
            match weak.upgrade() {
                Some(inner) => inner.finish(axis, intent, result),
                None => {
                    debug!(post_id = %post_id, axis = %axis, "Session ended, discarding mutation result");
                    ReactionOutcome::Discarded
                }
            }
        });

        Started::Spawned {
            handle,
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl fmt::Debug for ReactionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionController")
            .field("post_id", &self.inner.post_id)
            .field("viewer", &self.inner.viewer)
            .field("panel", &*self.inner.panel.lock())
            .finish_non_exhaustive()
    }
}

enum Started {
    Done(ReactionOutcome),
    Spawned {
        handle: JoinHandle<ReactionOutcome>,
        inner: Weak<Inner>,
    },
}

async fn join_mutation(
    handle: JoinHandle<ReactionOutcome>,
    inner: Weak<Inner>,
    axis: ReactionAxis,
    intent: ReactionIntent,
) -> ReactionOutcome {
    match handle.await {
        Ok(outcome) => outcome,
        Err(e) => {
            // The task never settled the axis
            error!(axis = %axis, error = %e, "Reaction mutation task failed");
            match inner.upgrade() {
                Some(inner) => inner.finish(axis, intent, Err(DomainError::InternalError(e.to_string()))),
                None => ReactionOutcome::Discarded,
            }
        }
    }
}

async fn mutate(
    store: &dyn ReactionStore,
    post_id: PostId,
    author_id: AuthorId,
    axis: ReactionAxis,
    intent: ReactionIntent,
) -> RepoResult<()> {
    match (axis, intent) {
        (ReactionAxis::Like, ReactionIntent::Add) => store.insert_like(post_id, author_id).await,
        (ReactionAxis::Like, ReactionIntent::Remove) => store.delete_like(post_id, author_id).await,
        (ReactionAxis::Bookmark, ReactionIntent::Add) => store.insert_bookmark(post_id, author_id).await,
        (ReactionAxis::Bookmark, ReactionIntent::Remove) => store.delete_bookmark(post_id, author_id).await,
    }
}

fn auth_required_message(axis: ReactionAxis) -> &'static str {
    match axis {
        ReactionAxis::Like => "You must be logged in to like a post",
        ReactionAxis::Bookmark => "You must be logged in to save a post",
    }
}

fn failure_message(axis: ReactionAxis, intent: ReactionIntent) -> &'static str {
    match (axis, intent) {
        (ReactionAxis::Like, ReactionIntent::Add) => "Sorry, we couldn't like this post.",
        (ReactionAxis::Like, ReactionIntent::Remove) => "Sorry, we couldn't remove your like.",
        (ReactionAxis::Bookmark, ReactionIntent::Add) => "Sorry, we couldn't save this post.",
        (ReactionAxis::Bookmark, ReactionIntent::Remove) => "Sorry, we couldn't remove this post from your reading list.",
    }
}
