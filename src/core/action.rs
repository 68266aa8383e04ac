//! Action identifiers and joint actions.
//!
//! Both players share one ordered action set; an [`ActionId`] doubles as the
//! dense index of that action in every reward table and value tensor. A
//! [`JointAction`] is the pair of actions the two players choose
//! simultaneously at one state.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::player::PlayerId;

/// Identifier of a single action, shared by both players.
///
/// The i-th action declared by a game must be `ActionId(i)`, so the
/// identifier can be used directly as a table index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u8);

impl ActionId {
    /// Create a new action ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the dense table index of this action.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The pair of actions chosen simultaneously by both players at one state.
///
/// ## Example
///
/// ```
/// use equilearn::core::{ActionId, JointAction, PlayerId};
///
/// let joint = JointAction::new(ActionId::new(0), ActionId::new(1));
/// assert_eq!(joint.of(PlayerId::new(1)), ActionId::new(1));
///
/// // Functional update: replace one player's action, keep the other's.
/// let updated = joint.with(PlayerId::new(0), ActionId::new(1));
/// assert_eq!(updated.pair(), (ActionId::new(1), ActionId::new(1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JointAction([ActionId; 2]);

impl JointAction {
    /// Create a joint action from the two players' actions.
    #[must_use]
    pub const fn new(first: ActionId, second: ActionId) -> Self {
        Self([first, second])
    }

    /// The action of one player.
    #[must_use]
    pub fn of(self, player: PlayerId) -> ActionId {
        self.0[player.index()]
    }

    /// A copy with one player's action replaced.
    #[must_use]
    pub fn with(self, player: PlayerId, action: ActionId) -> JointAction {
        let mut actions = self.0;
        actions[player.index()] = action;
        Self(actions)
    }

    /// Both actions as a `(player 0, player 1)` tuple.
    #[must_use]
    pub fn pair(self) -> (ActionId, ActionId) {
        (self.0[0], self.0[1])
    }
}

impl Index<PlayerId> for JointAction {
    type Output = ActionId;

    fn index(&self, player: PlayerId) -> &ActionId {
        &self.0[player.index()]
    }
}

impl std::fmt::Display for JointAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_action_of() {
        let joint = JointAction::new(ActionId::new(0), ActionId::new(1));
        assert_eq!(joint.of(PlayerId::new(0)), ActionId::new(0));
        assert_eq!(joint.of(PlayerId::new(1)), ActionId::new(1));
    }

    #[test]
    fn test_joint_action_with_keeps_other() {
        let joint = JointAction::new(ActionId::new(0), ActionId::new(0));
        let updated = joint.with(PlayerId::new(1), ActionId::new(1));

        assert_eq!(updated.of(PlayerId::new(0)), ActionId::new(0));
        assert_eq!(updated.of(PlayerId::new(1)), ActionId::new(1));
        // The original is untouched.
        assert_eq!(joint.of(PlayerId::new(1)), ActionId::new(0));
    }

    #[test]
    fn test_joint_action_equality() {
        let a = JointAction::new(ActionId::new(0), ActionId::new(1));
        let b = JointAction::new(ActionId::new(0), ActionId::new(1));
        let c = JointAction::new(ActionId::new(1), ActionId::new(0));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_joint_action_display() {
        let joint = JointAction::new(ActionId::new(1), ActionId::new(0));
        assert_eq!(joint.to_string(), "(1, 0)");
    }

    #[test]
    fn test_joint_action_serialization() {
        let joint = JointAction::new(ActionId::new(0), ActionId::new(1));
        let json = serde_json::to_string(&joint).unwrap();
        let deserialized: JointAction = serde_json::from_str(&json).unwrap();
        assert_eq!(joint, deserialized);
    }
}
