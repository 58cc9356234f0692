// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use crate::errors::ProbeError;

const SHORT_SLEEP: Duration = Duration::from_secs(1);
const LONG_SLEEP: Duration = Duration::from_secs(5);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresenceState {
    /// The display answers and the frontend is believed to be running.
    Present,
    /// The display is gone and the frontend has been stopped.
    Absent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PollInterval {
    Short,
    Long,
}

impl PollInterval {
    pub fn duration(self) -> Duration {
        match self {
            PollInterval::Short => SHORT_SLEEP,
            PollInterval::Long => LONG_SLEEP,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    BecameAbsent,
    BecamePresent,
}

impl Transition {
    /// The settled state and poll cadence once the transition has been acted on.
    pub fn target(self) -> (PresenceState, PollInterval) {
        match self {
            Transition::BecameAbsent => (PresenceState::Absent, PollInterval::Short),
            Transition::BecamePresent => (PresenceState::Present, PollInterval::Long),
        }
    }
}

/// Decides whether a probe result requires acting on the frontend.
///
/// Settled states produce nothing, so a steady signal never repeats a call.
pub fn evaluate(state: PresenceState, probe: &Result<(), ProbeError>) -> Option<Transition> {
    match (state, probe) {
        (PresenceState::Present, Err(_)) => Some(Transition::BecameAbsent),
        (PresenceState::Absent, Ok(())) => Some(Transition::BecamePresent),
        _ => None,
    }
}

#[derive(Debug)]
pub struct PresenceTracker {
    state:    PresenceState,
    interval: PollInterval,
}

impl Default for PresenceTracker {
    /// The frontend is assumed to be running when we start.
    fn default() -> Self { Self { state: PresenceState::Present, interval: PollInterval::Short } }
}

impl PresenceTracker {
    pub fn state(&self) -> PresenceState { self.state }

    pub fn interval(&self) -> PollInterval { self.interval }

    pub fn evaluate(&self, probe: &Result<(), ProbeError>) -> Option<Transition> {
        evaluate(self.state, probe)
    }

    /// Records a transition whose remote action succeeded.
    pub fn commit(&mut self, transition: Transition) {
        let (state, interval) = transition.target();
        self.state = state;
        self.interval = interval;
    }
}
