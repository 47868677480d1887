//! Checker state containers — app-owned, SDK-provided update logic.

use crate::domain::market::PriceSnapshot;
use crate::error::LookupError;

// ─── RequestState ────────────────────────────────────────────────────────────

/// Lifecycle of one submit→result cycle in a lane.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(PriceSnapshot),
    /// Carries the line the shell shows the user.
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

// ─── Lanes ───────────────────────────────────────────────────────────────────

/// The two independent submission lanes of the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneId {
    /// The popup's main search input.
    Primary,
    /// The re-search input inside the open result dialog.
    Dialog,
}

/// One-shot token for an in-flight submission.
///
/// Issued by [`CheckerState::begin`] and consumed by [`CheckerState::commit`].
/// A token whose lane has since issued a newer one is stale; its commit is
/// discarded.
#[derive(Debug)]
pub struct Submission {
    lane: LaneId,
    generation: u64,
}

impl Submission {
    /// The lane this submission was issued on. Shells holding tokens for both
    /// lanes route each result back through this.
    pub fn lane(&self) -> LaneId {
        self.lane
    }
}

/// One lane's state machine: Idle → Loading → Success | Error.
#[derive(Debug, Clone, Default)]
pub struct RequestLane {
    state: RequestState,
    generation: u64,
}

impl RequestLane {
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Whether the shell should show this lane's loading indicator.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    fn is_current(&self, submission: &Submission) -> bool {
        submission.generation == self.generation
    }
}

// ─── CheckerState ────────────────────────────────────────────────────────────

/// Full checker state: both lanes plus the single display snapshot they both
/// render into.
///
/// The app owns one instance per popup session. The SDK provides the
/// transitions; the shell only reads.
#[derive(Debug, Clone, Default)]
pub struct CheckerState {
    primary: RequestLane,
    dialog: RequestLane,
    snapshot: Option<PriceSnapshot>,
}

impl CheckerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lane(&self, id: LaneId) -> &RequestLane {
        match id {
            LaneId::Primary => &self.primary,
            LaneId::Dialog => &self.dialog,
        }
    }

    fn lane_mut(&mut self, id: LaneId) -> &mut RequestLane {
        match id {
            LaneId::Primary => &mut self.primary,
            LaneId::Dialog => &mut self.dialog,
        }
    }

    /// The snapshot the result view renders, if any submission has succeeded.
    pub fn snapshot(&self) -> Option<&PriceSnapshot> {
        self.snapshot.as_ref()
    }

    /// Start a submission on `lane`: the lane enters Loading (clearing any
    /// prior error) and any submission still in flight there is superseded.
    pub fn begin(&mut self, lane: LaneId) -> Submission {
        let l = self.lane_mut(lane);
        l.generation += 1;
        l.state = RequestState::Loading;
        Submission {
            lane,
            generation: l.generation,
        }
    }

    /// Settle a submission with its pipeline outcome.
    ///
    /// A stale submission (superseded by a newer `begin` on the same lane) is
    /// discarded and leaves all state untouched. A committed success replaces
    /// the shared snapshot wholesale; a committed error keeps the previous
    /// snapshot so the user retries without losing context.
    ///
    /// Returns whether the outcome was committed.
    pub fn commit(
        &mut self,
        submission: Submission,
        result: Result<PriceSnapshot, LookupError>,
    ) -> bool {
        if !self.lane(submission.lane).is_current(&submission) {
            return false;
        }
        let settled = match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot.clone());
                RequestState::Success(snapshot)
            }
            Err(e) => RequestState::Error(e.user_message()),
        };
        self.lane_mut(submission.lane).state = settled;
        true
    }
}
