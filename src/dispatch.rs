//! Dispatch policy: decides when a smoothed gesture becomes an action.
//!
//! A gesture turns into an action token only if its vote count meets the
//! minimum, the system is armed, the hand passes the active hand filter,
//! the token is not `NONE`, and the cooldown has elapsed. The cooldown
//! clock is shared by all hands: one hand's action blocks the other's
//! until the window passes.

use crate::gestures::GestureLabel;
use crate::landmarks::Handedness;
use crate::{constants, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Symbolic output command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionToken {
    PlayPause,
    Next,
    Prev,
    VolUp,
    VolDown,
    Confirm,
    Click,
    /// No-op; never produces an external effect
    None,
}

impl ActionToken {
    /// Wire name of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlayPause => "PLAY_PAUSE",
            Self::Next => "NEXT",
            Self::Prev => "PREV",
            Self::VolUp => "VOL_UP",
            Self::VolDown => "VOL_DOWN",
            Self::Confirm => "CONFIRM",
            Self::Click => "CLICK",
            Self::None => "NONE",
        }
    }

    /// Token bound to `label` in the default gesture table
    pub fn for_gesture(label: GestureLabel) -> Self {
        match label {
            GestureLabel::OpenPalm => Self::PlayPause,
            GestureLabel::Peace => Self::Next,
            GestureLabel::Fist => Self::Prev,
            GestureLabel::ThumbsUp => Self::VolUp,
            GestureLabel::ThumbsDown => Self::VolDown,
            GestureLabel::Ok => Self::Confirm,
            GestureLabel::Pointing => Self::Click,
            GestureLabel::Unknown => Self::None,
        }
    }

    /// Key a desktop executor would press for this token.
    ///
    /// `CLICK` is a mouse click and `NONE` does nothing, so both have no key.
    pub fn default_key(&self) -> Option<&'static str> {
        match self {
            Self::PlayPause => Some("space"),
            Self::Next => Some("right"),
            Self::Prev => Some("left"),
            Self::VolUp => Some("volumeup"),
            Self::VolDown => Some("volumedown"),
            Self::Confirm => Some("enter"),
            Self::Click | Self::None => None,
        }
    }

    /// Whether this token has an external effect
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ActionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "PLAY_PAUSE" => Ok(Self::PlayPause),
            "NEXT" => Ok(Self::Next),
            "PREV" => Ok(Self::Prev),
            "VOL_UP" => Ok(Self::VolUp),
            "VOL_DOWN" => Ok(Self::VolDown),
            "CONFIRM" => Ok(Self::Confirm),
            "CLICK" => Ok(Self::Click),
            "NONE" => Ok(Self::None),
            _ => Err(Error::InvalidInput(format!("Unknown action token: {s}"))),
        }
    }
}

/// Which hand may trigger actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandFilter {
    #[serde(alias = "left")]
    Left,
    #[serde(alias = "right")]
    Right,
    #[serde(alias = "any")]
    Any,
}

impl HandFilter {
    /// Whether `hand` passes this filter
    pub fn allows(&self, hand: Handedness) -> bool {
        match self {
            Self::Any => true,
            Self::Left => hand == Handedness::Left,
            Self::Right => hand == Handedness::Right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Any => "Any",
        }
    }
}

impl Default for HandFilter {
    fn default() -> Self {
        Self::Right
    }
}

impl fmt::Display for HandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "any" => Ok(Self::Any),
            other => Err(Error::InvalidInput(format!("Unknown hand filter: {other}"))),
        }
    }
}

/// Gesture to action table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionMap {
    bindings: BTreeMap<GestureLabel, ActionToken>,
}

impl ActionMap {
    /// Table with no bindings; every gesture maps to `NONE`
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Bind `label` to `token`
    pub fn bind(&mut self, label: GestureLabel, token: ActionToken) {
        self.bindings.insert(label, token);
    }

    /// Token for `label`. `Unknown` and unbound labels give `NONE`.
    pub fn token_for(&self, label: GestureLabel) -> ActionToken {
        if label == GestureLabel::Unknown {
            return ActionToken::None;
        }
        self.bindings.get(&label).copied().unwrap_or(ActionToken::None)
    }

    /// Explicit binding for `label`, if any
    pub fn binding(&self, label: GestureLabel) -> Option<ActionToken> {
        self.bindings.get(&label).copied()
    }
}

impl Default for ActionMap {
    fn default() -> Self {
        Self {
            bindings: GestureLabel::ALL
                .iter()
                .map(|&label| (label, ActionToken::for_gesture(label)))
                .collect(),
        }
    }
}

/// Why a gesture did or did not become an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Token emitted
    Dispatched(ActionToken),
    /// Actions are disarmed
    Disarmed,
    /// Hand does not match the active hand filter
    HandFiltered,
    /// Gesture maps to `NONE`
    NoAction,
    /// Previous action is still inside the cooldown window
    CoolingDown,
}

/// Result of one `evaluate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Smoothed label after the minimum-vote gate
    pub label: GestureLabel,
    /// Token the label maps to
    pub token: ActionToken,
    pub outcome: DispatchOutcome,
}

impl Decision {
    /// The emitted token, if any
    pub fn dispatched(&self) -> Option<ActionToken> {
        match self.outcome {
            DispatchOutcome::Dispatched(token) => Some(token),
            _ => None,
        }
    }
}

/// Arming state, hand filter and shared cooldown clock
#[derive(Debug, Clone)]
pub struct DispatchPolicy {
    armed: bool,
    hand_filter: HandFilter,
    cooldown_s: f64,
    last_action_at: Option<f64>,
    actions: ActionMap,
}

impl DispatchPolicy {
    /// Create a policy with the default action table
    pub fn new(cooldown_s: f64, hand_filter: HandFilter, armed: bool) -> Self {
        Self {
            armed,
            hand_filter,
            cooldown_s: cooldown_s.max(0.0),
            last_action_at: None,
            actions: ActionMap::default(),
        }
    }

    /// Replace the action table
    pub fn with_actions(mut self, actions: ActionMap) -> Self {
        self.actions = actions;
        self
    }

    /// Decide whether the smoothed gesture fires an action at time `now`
    /// (seconds). Only a dispatch mutates state.
    pub fn evaluate(
        &mut self,
        smoothed_label: GestureLabel,
        vote_count: usize,
        min_votes: usize,
        hand: Handedness,
        now: f64,
    ) -> Decision {
        let label = if vote_count < min_votes {
            GestureLabel::Unknown
        } else {
            smoothed_label
        };
        let token = self.actions.token_for(label);

        let outcome = if !self.armed {
            DispatchOutcome::Disarmed
        } else if !self.hand_filter.allows(hand) {
            DispatchOutcome::HandFiltered
        } else if token.is_none() {
            DispatchOutcome::NoAction
        } else if self.in_cooldown(now) {
            DispatchOutcome::CoolingDown
        } else {
            self.last_action_at = Some(now);
            DispatchOutcome::Dispatched(token)
        };

        Decision { label, token, outcome }
    }

    fn in_cooldown(&self, now: f64) -> bool {
        self.last_action_at
            .map_or(false, |last| now - last <= self.cooldown_s)
    }

    /// Flip the armed flag, returning the new state
    pub fn toggle_armed(&mut self) -> bool {
        self.armed = !self.armed;
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn set_hand_filter(&mut self, filter: HandFilter) {
        self.hand_filter = filter;
    }

    pub fn hand_filter(&self) -> HandFilter {
        self.hand_filter
    }

    /// Time of the last dispatched action, if any
    pub fn last_action_at(&self) -> Option<f64> {
        self.last_action_at
    }

    pub fn cooldown_s(&self) -> f64 {
        self.cooldown_s
    }

    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self::new(constants::DEFAULT_ACTION_COOLDOWN_S, HandFilter::default(), false)
    }
}
