//! Round queue construction and Perfect-Deflect detection.
//!
//! Submitted actions are sorted once per Combat phase: speed descending,
//! speed ties broken by polarity (enemies first) then type priority. The
//! sort is stable, so actions with identical `(speed, polarity, type)` keep
//! their submission order. Given the same submissions, the queue is always
//! the same sequence.
//!
//! Deflects resolve at execution time, when a pair reaches the head of the
//! queue: one deflect consumes both queue entries before scanning resumes.

use std::cmp::Reverse;
use std::collections::VecDeque;

use super::ActionDescriptor;

/// Which of an adjacent equal-speed pair survives a Perfect Deflect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeflectOutcome {
    /// The earlier action counters the later one: the later entry is
    /// cancelled and the earlier executes normally in place.
    EarlierWins,
    /// The later action counters the earlier one: the earlier entry is
    /// cancelled and the later is promoted to execute immediately.
    LaterWins,
}

/// Ordered action sequence for one combat round.
///
/// Rebuilt every Combat phase; consumed from the front as actions execute,
/// with deflects removing a second entry.
#[derive(Clone, Debug, Default)]
pub struct RoundQueue {
    actions: VecDeque<ActionDescriptor>,
}

impl RoundQueue {
    /// Sorts the submissions into execution order.
    pub fn build(mut submitted: Vec<ActionDescriptor>) -> Self {
        // Stable sort: equal (speed, polarity, type) keeps submission order.
        submitted.sort_by_key(|a| {
            (
                Reverse(a.speed),
                a.polarity.tie_rank(),
                a.action_type.tie_priority(),
            )
        });
        Self {
            actions: submitted.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn front(&self) -> Option<&ActionDescriptor> {
        self.actions.front()
    }

    pub fn second(&self) -> Option<&ActionDescriptor> {
        self.actions.get(1)
    }

    pub fn pop_front(&mut self) -> Option<ActionDescriptor> {
        self.actions.pop_front()
    }

    pub fn remove_second(&mut self) -> Option<ActionDescriptor> {
        self.actions.remove(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.actions.iter()
    }

    /// Checks the pair at the head of the queue for a Perfect Deflect.
    ///
    /// Only adjacent entries with equal speed qualify. When both directions
    /// would counter (impossible with the cyclic relation, but checked in
    /// order), the earlier action wins.
    pub fn check_front_deflect(&self) -> Option<DeflectOutcome> {
        let earlier = self.front()?;
        let later = self.second()?;
        if earlier.speed != later.speed {
            return None;
        }
        if earlier.action_type.counters(later.action_type) {
            Some(DeflectOutcome::EarlierWins)
        } else if later.action_type.counters(earlier.action_type) {
            Some(DeflectOutcome::LaterWins)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionType, EffectPayload};
    use crate::state::{CharacterId, Polarity};

    fn action(
        actor: u32,
        polarity: Polarity,
        speed: i32,
        action_type: ActionType,
    ) -> ActionDescriptor {
        ActionDescriptor {
            actor: CharacterId(actor),
            polarity,
            speed,
            action_type,
            payload: EffectPayload::default(),
            target: CharacterId(0),
        }
    }

    fn actors(queue: &RoundQueue) -> Vec<u32> {
        queue.iter().map(|a| a.actor.0).collect()
    }

    #[test]
    fn sorts_by_speed_descending() {
        let queue = RoundQueue::build(vec![
            action(1, Polarity::Player, 3, ActionType::Normal),
            action(2, Polarity::Player, 9, ActionType::Normal),
            action(3, Polarity::Player, 6, ActionType::Normal),
        ]);
        assert_eq!(actors(&queue), vec![2, 3, 1]);
    }

    #[test]
    fn equal_speed_puts_enemies_first_then_type_priority() {
        let queue = RoundQueue::build(vec![
            action(1, Polarity::Player, 5, ActionType::Swift),
            action(2, Polarity::Enemy, 5, ActionType::None),
            action(3, Polarity::Enemy, 5, ActionType::Swift),
            action(4, Polarity::Player, 5, ActionType::Strong),
        ]);
        // Enemies before players; within a side Swift < Normal < Strong < None.
        assert_eq!(actors(&queue), vec![3, 2, 1, 4]);
    }

    #[test]
    fn identical_keys_keep_submission_order() {
        let submitted = vec![
            action(1, Polarity::Player, 4, ActionType::Normal),
            action(2, Polarity::Player, 4, ActionType::Normal),
            action(3, Polarity::Player, 4, ActionType::Normal),
        ];
        let queue = RoundQueue::build(submitted.clone());
        assert_eq!(actors(&queue), vec![1, 2, 3]);

        // Re-building from the same submissions yields the same sequence.
        let again = RoundQueue::build(submitted);
        assert_eq!(actors(&queue), actors(&again));
    }

    #[test]
    fn deflect_requires_equal_speed() {
        let queue = RoundQueue::build(vec![
            action(1, Polarity::Player, 6, ActionType::Swift),
            action(2, Polarity::Player, 5, ActionType::Strong),
        ]);
        assert_eq!(queue.check_front_deflect(), None);
    }

    #[test]
    fn swift_beats_strong_regardless_of_queue_position() {
        // Swift sorts first, counters Strong behind it.
        let queue = RoundQueue::build(vec![
            action(1, Polarity::Player, 5, ActionType::Strong),
            action(2, Polarity::Player, 5, ActionType::Swift),
        ]);
        assert_eq!(actors(&queue), vec![2, 1]);
        assert_eq!(
            queue.check_front_deflect(),
            Some(DeflectOutcome::EarlierWins)
        );

        // Enemy Strong sorts ahead of player Swift; the later Swift still wins.
        let queue = RoundQueue::build(vec![
            action(1, Polarity::Enemy, 5, ActionType::Strong),
            action(2, Polarity::Player, 5, ActionType::Swift),
        ]);
        assert_eq!(actors(&queue), vec![1, 2]);
        assert_eq!(queue.check_front_deflect(), Some(DeflectOutcome::LaterWins));
    }

    #[test]
    fn none_type_never_deflects() {
        let queue = RoundQueue::build(vec![
            action(1, Polarity::Enemy, 5, ActionType::None),
            action(2, Polarity::Player, 5, ActionType::Swift),
        ]);
        assert_eq!(queue.check_front_deflect(), None);
    }
}
