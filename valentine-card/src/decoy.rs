//! Decoy accept buttons spawned by rejections.
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::{BatchPolicy, CardConfig};
use crate::constants::LOG_TARGET_DECOY;
use crate::state::DecoyButton;

/// Decoys produced by a single rejection.
pub type DecoyBatch = SmallVec<[DecoyButton; 4]>;

/// What one spawn pass did to the decoy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpawnReport {
    /// Batch size the policy asked for.
    pub requested: usize,
    /// Decoys actually appended after truncation.
    pub added: usize,
    /// The collection sits at the cap after this pass.
    pub saturated: bool,
}

/// Number of decoys a rejection asks for, given the rejections counted before it.
#[must_use]
pub fn batch_size(policy: BatchPolicy, rejection_count: u32) -> usize {
    let size = match policy {
        BatchPolicy::Escalating => rejection_count.saturating_add(1),
        BatchPolicy::Fixed { size } => size,
    };
    usize::try_from(size).unwrap_or(usize::MAX)
}

/// First stack order free for a new decoy.
///
/// New decoys always paint above the rejection control (`floor`) and above
/// every decoy already on the letter.
#[must_use]
pub fn next_stack_order(decoys: &[DecoyButton], floor: u32) -> u32 {
    decoys
        .iter()
        .map(|decoy| decoy.stack_order)
        .fold(floor, u32::max)
        .saturating_add(1)
}

/// Build the batch for one rejection without touching `decoys`.
///
/// The batch is already truncated so that appending it keeps the collection
/// within `config.max_decoys`.
pub fn spawn_batch<R: Rng + ?Sized>(
    decoys: &[DecoyButton],
    rejection_count: u32,
    config: &CardConfig,
    rng: &mut R,
) -> DecoyBatch {
    let room = config.max_decoys.saturating_sub(decoys.len());
    let count = batch_size(config.batch, rejection_count).min(room);
    let mut stack_order = next_stack_order(decoys, config.reject_stack_order);
    let mut batch = DecoyBatch::with_capacity(count);
    for _ in 0..count {
        batch.push(DecoyButton {
            position: config.placement.sample_position(rng),
            stack_order,
        });
        stack_order = stack_order.saturating_add(1);
    }
    batch
}

/// Grow `decoys` for one rejection, honoring the cap.
pub fn spawn_decoys<R: Rng + ?Sized>(
    decoys: &mut Vec<DecoyButton>,
    rejection_count: u32,
    config: &CardConfig,
    rng: &mut R,
) -> SpawnReport {
    let requested = batch_size(config.batch, rejection_count);
    if decoys.len() >= config.max_decoys {
        log::debug!(
            target: LOG_TARGET_DECOY,
            "decoy cap {} reached, rejection {} spawns nothing",
            config.max_decoys,
            rejection_count.saturating_add(1)
        );
        return SpawnReport {
            requested,
            added: 0,
            saturated: true,
        };
    }

    let batch = spawn_batch(decoys, rejection_count, config, rng);
    let added = batch.len();
    decoys.extend(batch);
    log::trace!(
        target: LOG_TARGET_DECOY,
        "spawned {added}/{requested} decoys, {} on the letter",
        decoys.len()
    );
    SpawnReport {
        requested,
        added,
        saturated: decoys.len() >= config.max_decoys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{PercentRange, Position};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn decoy(stack_order: u32) -> DecoyButton {
        DecoyButton {
            position: Position::new(50.0, 50.0),
            stack_order,
        }
    }

    #[test]
    fn escalating_batches_grow_with_rejections() {
        assert_eq!(batch_size(BatchPolicy::Escalating, 0), 1);
        assert_eq!(batch_size(BatchPolicy::Escalating, 4), 5);
        assert_eq!(batch_size(BatchPolicy::fixed(3), 9), 3);
    }

    #[test]
    fn stack_order_starts_above_reject_control() {
        assert_eq!(next_stack_order(&[], 0), 1);
        assert_eq!(next_stack_order(&[], 5), 6);
        assert_eq!(next_stack_order(&[decoy(3), decoy(9), decoy(4)], 0), 10);
    }

    #[test]
    fn batch_is_truncated_at_cap() {
        let config = CardConfig {
            max_decoys: 5,
            batch: BatchPolicy::fixed(3),
            ..CardConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let mut decoys = vec![decoy(1), decoy(2), decoy(3)];
        let report = spawn_decoys(&mut decoys, 1, &config, &mut rng);
        assert_eq!(decoys.len(), 5);
        assert_eq!(
            report,
            SpawnReport {
                requested: 3,
                added: 2,
                saturated: true
            }
        );

        let report = spawn_decoys(&mut decoys, 2, &config, &mut rng);
        assert_eq!(decoys.len(), 5);
        assert_eq!(report.added, 0);
        assert!(report.saturated);
    }

    #[test]
    fn new_decoys_respect_range_and_order() {
        let config = CardConfig {
            placement: PercentRange::new(30.0, 70.0),
            batch: BatchPolicy::fixed(4),
            ..CardConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(11);
        let mut decoys = vec![decoy(7)];
        spawn_decoys(&mut decoys, 0, &config, &mut rng);
        let orders: Vec<u32> = decoys.iter().map(|d| d.stack_order).collect();
        assert_eq!(orders, vec![7, 8, 9, 10, 11]);
        for added in &decoys[1..] {
            assert!(config.placement.contains_position(added.position));
        }
    }

    #[test]
    fn spawn_batch_leaves_input_untouched() {
        let config = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let decoys = vec![decoy(1)];
        let batch = spawn_batch(&decoys, 2, &config, &mut rng);
        assert_eq!(batch.len(), 3);
        assert_eq!(decoys.len(), 1);
    }
}
