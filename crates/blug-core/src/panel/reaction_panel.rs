//! Optimistic like/bookmark state for one viewer of one post

use std::fmt;

use serde::Serialize;

use crate::entities::PostReactions;
use crate::value_objects::Viewer;

/// What the presentation layer renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReactionViewState {
    pub liked: bool,
    pub like_count: u32,
    pub bookmarked: bool,
    pub has_comments: bool,
}

/// Independent toggle line of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionAxis {
    Like,
    Bookmark,
}

impl fmt::Display for ReactionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like => f.write_str("like"),
            Self::Bookmark => f.write_str("bookmark"),
        }
    }
}

/// Direction of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionIntent {
    /// Like / Bookmark
    Add,
    /// Unlike / Unbookmark
    Remove,
}

/// Per-axis lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AxisState {
    #[default]
    Idle,
    Pending(ReactionIntent),
}

/// Why `begin` refused to start an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BeginRejection {
    #[error("an operation on this axis is already in flight")]
    InFlight,

    #[error("the view already reflects this intent")]
    Redundant,
}

/// View state plus the in-flight bookkeeping for each axis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionPanel {
    view: ReactionViewState,
    like_axis: AxisState,
    bookmark_axis: AxisState,
}

impl ReactionPanel {
    /// Derive the initial state from an embedded snapshot
    ///
    /// Anonymous viewers never start liked or bookmarked.
    pub fn derive(reactions: &PostReactions, viewer: &Viewer) -> Self {
        let (liked, bookmarked) = match viewer.author_id() {
            Some(author_id) => (
                reactions.liked_by(author_id),
                reactions.bookmarked_by(author_id),
            ),
            None => (false, false),
        };

        Self {
            view: ReactionViewState {
                liked,
                like_count: reactions.like_count(),
                bookmarked,
                has_comments: reactions.has_comments(),
            },
            ..Self::default()
        }
    }

    /// All-false, zero-count state used when the initial read fails
    pub fn degraded() -> Self {
        Self::default()
    }

    #[inline]
    pub fn view(&self) -> ReactionViewState {
        self.view
    }

    #[inline]
    pub fn axis_state(&self, axis: ReactionAxis) -> AxisState {
        match axis {
            ReactionAxis::Like => self.like_axis,
            ReactionAxis::Bookmark => self.bookmark_axis,
        }
    }

    #[inline]
    pub fn is_pending(&self, axis: ReactionAxis) -> bool {
        matches!(self.axis_state(axis), AxisState::Pending(_))
    }

    #[inline]
    pub fn any_pending(&self) -> bool {
        self.is_pending(ReactionAxis::Like) || self.is_pending(ReactionAxis::Bookmark)
    }

    /// Apply the optimistic effect of `intent` and mark the axis pending
    ///
    /// # Errors
    /// `InFlight` if the axis is already pending, `Redundant` if the view
    /// already shows the requested state. The panel is unchanged on error.
    pub fn begin(&mut self, axis: ReactionAxis, intent: ReactionIntent) -> Result<(), BeginRejection> {
        if self.is_pending(axis) {
            return Err(BeginRejection::InFlight);
        }

        let current = match axis {
            ReactionAxis::Like => self.view.liked,
            ReactionAxis::Bookmark => self.view.bookmarked,
        };
        if current == (intent == ReactionIntent::Add) {
            return Err(BeginRejection::Redundant);
        }

        self.apply(axis, intent);
        *self.axis_mut(axis) = AxisState::Pending(intent);
        Ok(())
    }

    /// Finish the pending operation on `axis`
    ///
    /// On failure the inverse of the pending intent is applied as a relative
    /// adjustment. Settling an idle axis is a no-op and returns `None`.
    pub fn settle(&mut self, axis: ReactionAxis, succeeded: bool) -> Option<ReactionIntent> {
        let AxisState::Pending(intent) = self.axis_state(axis) else {
            return None;
        };

        if !succeeded {
            let inverse = match intent {
                ReactionIntent::Add => ReactionIntent::Remove,
                ReactionIntent::Remove => ReactionIntent::Add,
            };
            self.apply(axis, inverse);
        }

        *self.axis_mut(axis) = AxisState::Idle;
        Some(intent)
    }

    /// Replace the view with a fresh derivation
    ///
    /// Only valid while nothing is in flight; returns false otherwise.
    pub fn rederive(&mut self, reactions: &PostReactions, viewer: &Viewer) -> bool {
        if self.any_pending() {
            return false;
        }
        *self = Self::derive(reactions, viewer);
        true
    }

    fn apply(&mut self, axis: ReactionAxis, intent: ReactionIntent) {
        match (axis, intent) {
            (ReactionAxis::Like, ReactionIntent::Add) => {
                self.view.like_count = self.view.like_count.saturating_add(1);
                self.view.liked = true;
            }
            (ReactionAxis::Like, ReactionIntent::Remove) => {
                self.view.like_count = self.view.like_count.saturating_sub(1);
                self.view.liked = false;
            }
            (ReactionAxis::Bookmark, ReactionIntent::Add) => self.view.bookmarked = true,
            (ReactionAxis::Bookmark, ReactionIntent::Remove) => self.view.bookmarked = false,
        }
    }

    fn axis_mut(&mut self, axis: ReactionAxis) -> &mut AxisState {
        match axis {
            ReactionAxis::Like => &mut self.like_axis,
            ReactionAxis::Bookmark => &mut self.bookmark_axis,
        }
    }
}
