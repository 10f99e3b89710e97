//! Bounded integer partitioning for puzzle values.
//!
//! [`divide`] splits a target into parts that sum to it exactly, each part in
//! `1..=99`, with at most `max_count` parts. The feasibility precondition
//! (`target <= max_count * 99`) is checked when the [`PartitionPlan`] is
//! built, so `divide` itself never fails.

use crate::config::DungeonConfig;
use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};

const MAX_PART: u32 = DungeonConfig::MAX_CELL_VALUE;

/// How the remainder is handled once the part budget is used up.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PartitionStrategy {
    /// Stop drawing at a remainder of 5; an over-budget remainder is carried
    /// through the parts in order, topping each up to 99.
    #[default]
    CapAndCarry,
    /// Stop drawing at a remainder of 2; an over-budget remainder is folded
    /// into one randomly drawn part, overflow carried on to the following parts.
    RandomFold,
}

impl PartitionStrategy {
    /// Remainder at or below which drawing stops and the rest becomes the last part.
    pub const fn threshold(self) -> u32 {
        match self {
            Self::CapAndCarry => 5,
            Self::RandomFold => 2,
        }
    }
}

/// A partition request known to be satisfiable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionPlan {
    target: u32,
    max_count: usize,
}

impl PartitionPlan {
    pub const MIN_COUNT: usize = 2;

    pub fn new(target: u32, max_count: usize) -> Result<Self, PartitionError> {
        if target == 0 {
            return Err(PartitionError::ZeroTarget);
        }
        if max_count < Self::MIN_COUNT {
            return Err(PartitionError::CountTooSmall { max_count });
        }
        if u64::from(target) > Self::capacity(max_count) {
            return Err(PartitionError::Infeasible { target, max_count });
        }
        Ok(Self { target, max_count })
    }

    /// Largest target `max_count` parts can sum to.
    pub fn capacity(max_count: usize) -> u64 {
        max_count as u64 * u64::from(MAX_PART)
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

/// Rejected partition request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("cannot partition a zero target")]
    ZeroTarget,

    #[error("a partition needs room for at least 2 parts, got {max_count}")]
    CountTooSmall { max_count: usize },

    #[error("{target} does not fit in {max_count} parts of at most 99")]
    Infeasible { target: u32, max_count: usize },
}

impl GameError for PartitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTarget => "PARTITION_ZERO_TARGET",
            Self::CountTooSmall { .. } => "PARTITION_COUNT_TOO_SMALL",
            Self::Infeasible { .. } => "PARTITION_INFEASIBLE",
        }
    }
}

/// Splits the plan's target into ordered parts.
///
/// Parts are drawn uniformly from `2..=min(remaining - 1, 99)` until the
/// remainder drops to the strategy threshold or the count budget is reached.
pub fn divide<R>(plan: PartitionPlan, strategy: PartitionStrategy, rng: &mut R) -> Vec<u32>
where
    R: RngOracle + ?Sized,
{
    let threshold = strategy.threshold();
    let mut remaining = plan.target;
    let mut parts = Vec::with_capacity(plan.max_count);

    while remaining > threshold {
        let part = rng.range(2, (remaining - 1).min(MAX_PART));
        remaining -= part;
        parts.push(part);

        if parts.len() == plan.max_count {
            let start = match strategy {
                PartitionStrategy::CapAndCarry => 0,
                PartitionStrategy::RandomFold => rng.range(0, parts.len() as u32 - 1) as usize,
            };
            carry_remainder(&mut parts, start, &mut remaining);
            break;
        }
    }

    if remaining > 0 {
        parts.push(remaining);
    }

    tracing::trace!(
        target = plan.target,
        max_count = plan.max_count,
        ?parts,
        "divided target"
    );
    parts
}

/// Tops parts up to the cap starting at `start`, wrapping, until the
/// remainder is gone or every part is full.
fn carry_remainder(parts: &mut [u32], start: usize, remaining: &mut u32) {
    let len = parts.len();
    for offset in 0..len {
        if *remaining == 0 {
            break;
        }
        let part = &mut parts[(start + offset) % len];
        let take = (MAX_PART - *part).min(*remaining);
        *part += take;
        *remaining -= take;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};

    fn assert_valid(parts: &[u32], target: u32, max_count: usize) {
        assert_eq!(parts.iter().sum::<u32>(), target, "parts {parts:?}");
        assert!(
            (1..=max_count).contains(&parts.len()),
            "length {} for max {max_count}: {parts:?}",
            parts.len()
        );
        assert!(
            parts.iter().all(|part| (1..=MAX_PART).contains(part)),
            "out of range part in {parts:?}"
        );
    }

    #[test]
    fn every_feasible_request_meets_the_contract() {
        for strategy in [PartitionStrategy::CapAndCarry, PartitionStrategy::RandomFold] {
            for seed in 0..3 {
                let mut rng = PcgRng::new(seed);
                for max_count in 2..=10usize {
                    for target in 3..=1000u32 {
                        let Ok(plan) = PartitionPlan::new(target, max_count) else {
                            assert!(u64::from(target) > PartitionPlan::capacity(max_count));
                            continue;
                        };
                        let parts = divide(plan, strategy, &mut rng);
                        assert_valid(&parts, target, max_count);
                    }
                }
            }
        }
    }

    #[test]
    fn divides_one_hundred_into_at_most_five_parts() {
        let mut rng = PcgRng::new(2024);
        for _ in 0..200 {
            let plan = PartitionPlan::new(100, 5).unwrap();
            let parts = divide(plan, PartitionStrategy::CapAndCarry, &mut rng);
            assert_valid(&parts, 100, 5);
        }
    }

    #[test]
    fn small_targets_become_a_single_part() {
        let mut rng = PcgRng::new(0);
        let plan = PartitionPlan::new(4, 3).unwrap();
        assert_eq!(divide(plan, PartitionStrategy::CapAndCarry, &mut rng), vec![4]);

        let plan = PartitionPlan::new(2, 3).unwrap();
        assert_eq!(divide(plan, PartitionStrategy::RandomFold, &mut rng), vec![2]);
    }

    #[test]
    fn cap_and_carry_tops_up_parts_in_order() {
        // 12, then 2, leaving 176 to carry over two parts.
        let mut rng = SequenceRng::new(vec![10, 0]);
        let plan = PartitionPlan::new(190, 2).unwrap();
        let parts = divide(plan, PartitionStrategy::CapAndCarry, &mut rng);
        assert_eq!(parts, vec![99, 91]);
    }

    #[test]
    fn random_fold_starts_at_the_drawn_part() {
        let mut rng = SequenceRng::new(vec![10, 0, 1]);
        let plan = PartitionPlan::new(190, 2).unwrap();
        let parts = divide(plan, PartitionStrategy::RandomFold, &mut rng);
        assert_eq!(parts, vec![91, 99]);
    }

    #[test]
    fn plans_reject_infeasible_requests() {
        assert_eq!(PartitionPlan::new(0, 4), Err(PartitionError::ZeroTarget));
        assert_eq!(
            PartitionPlan::new(10, 1),
            Err(PartitionError::CountTooSmall { max_count: 1 })
        );
        assert_eq!(
            PartitionPlan::new(199, 2),
            Err(PartitionError::Infeasible {
                target: 199,
                max_count: 2
            })
        );

        let plan = PartitionPlan::new(198, 2).unwrap();
        assert_eq!((plan.target(), plan.max_count()), (198, 2));
    }

    #[test]
    fn strategy_names_parse() {
        assert_eq!(
            "random_fold".parse::<PartitionStrategy>(),
            Ok(PartitionStrategy::RandomFold)
        );
        assert_eq!(PartitionStrategy::CapAndCarry.to_string(), "cap_and_carry");
        assert_eq!(PartitionStrategy::RandomFold.threshold(), 2);
    }
}
