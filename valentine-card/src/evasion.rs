//! The rejection control that runs away from the pointer.
use rand::Rng;

use crate::config::CardConfig;
use crate::constants::LOG_TARGET_EVASION;
use crate::state::EvasiveButton;

/// Move the control to a fresh random spot inside the placement range.
///
/// Works the same from `AtRest` and `Relocated`; once moved, the control is
/// absolutely positioned until the card restarts.
pub fn relocate<R: Rng + ?Sized>(
    current: EvasiveButton,
    config: &CardConfig,
    rng: &mut R,
) -> EvasiveButton {
    let position = config.placement.sample_position(rng);
    log::trace!(
        target: LOG_TARGET_EVASION,
        "reject control {} to {position:?}",
        if current.is_relocated() { "jumps" } else { "leaves rest" }
    );
    EvasiveButton::Relocated(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::PercentRange;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn relocation_leaves_rest_and_stays_relocated() {
        let config = CardConfig {
            placement: PercentRange::new(5.0, 95.0),
            ..CardConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(21);
        let first = relocate(EvasiveButton::AtRest, &config, &mut rng);
        let first_pos = first.position().unwrap();
        assert!(config.placement.contains_position(first_pos));

        let second = relocate(first, &config, &mut rng);
        let second_pos = second.position().unwrap();
        assert!(config.placement.contains_position(second_pos));
        assert_ne!(first_pos, second_pos);
    }
}
