// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Decides which matched (noisy, clean) pairs go to validation.
//
// A sample of round(ratio * n) clean names is drawn without
// replacement from the matched clean list; every pair whose
// clean name is in that sample is a validation pair, all other
// pairs are training pairs.
//
// The random generator is passed in by the caller. Seeding a
// StdRng with the same value and feeding the same matched
// lists always produces the same assignment, and two splits
// running side by side cannot disturb each other.
//
// Nothing here touches the filesystem; copying happens in the
// split use case.
//
// Reference: rand crate documentation (SliceRandom)

use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::data::matcher::Matched;
use crate::domain::error::DatasetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitLabel {
    Train,
    Validation,
}

/// One matched pair and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub noisy: String,
    pub clean: String,
    pub label: SplitLabel,
}

/// Assign every matched pair to train or validation.
///
/// # Arguments
/// * `matched` - Aligned filename lists (checked for equal length here)
/// * `ratio`   - Fraction of pairs for validation, within [0, 1]
/// * `rng`     - Caller-owned generator, e.g. `StdRng::seed_from_u64(42)`
pub fn assign_splits<R: Rng + ?Sized>(
    matched: Matched<String>,
    ratio:   f64,
    rng:     &mut R,
) -> Result<Vec<Assignment>, DatasetError> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(DatasetError::InvalidRatio(ratio));
    }
    let matched = matched.ensure_aligned()?;

    let total    = matched.clean.len();
    let val_size = ((total as f64) * ratio).round() as usize;
    let val_size = val_size.min(total);

    let validation: HashSet<&String> = matched
        .clean
        .choose_multiple(rng, val_size)
        .collect();

    let assignments: Vec<Assignment> = matched
        .pairs()
        .map(|(noisy, clean)| Assignment {
            noisy: noisy.clone(),
            clean: clean.clone(),
            label: if validation.contains(clean) {
                SplitLabel::Validation
            } else {
                SplitLabel::Train
            },
        })
        .collect();

    tracing::debug!(
        "Split plan: {} training, {} validation",
        total - val_size,
        val_size
    );

    Ok(assignments)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn matched(n: usize) -> Matched<String> {
        let names: Vec<String> = (0..n).map(|i| format!("{i:03}.wav")).collect();
        Matched { noisy: names.clone(), clean: names }
    }

    fn validation_names(plan: &[Assignment]) -> Vec<String> {
        plan.iter()
            .filter(|a| a.label == SplitLabel::Validation)
            .map(|a| a.clean.clone())
            .collect()
    }

    #[test]
    fn test_validation_size_is_rounded_ratio() {
        let plan = assign_splits(matched(25), 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(plan.len(), 25);
        // 2.5 rounds away from zero
        assert_eq!(validation_names(&plan).len(), 3);
    }

    #[test]
    fn test_same_seed_same_validation_set() {
        let a = assign_splits(matched(100), 0.2, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = assign_splits(matched(100), 0.2, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_validation_set() {
        let a = assign_splits(matched(100), 0.2, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = assign_splits(matched(100), 0.2, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(validation_names(&a), validation_names(&b));
    }

    #[test]
    fn test_zero_ratio_sends_everything_to_train() {
        let plan = assign_splits(matched(10), 0.0, &mut StdRng::seed_from_u64(42)).unwrap();
        assert!(plan.iter().all(|a| a.label == SplitLabel::Train));
    }

    #[test]
    fn test_full_ratio_sends_everything_to_validation() {
        let plan = assign_splits(matched(10), 1.0, &mut StdRng::seed_from_u64(42)).unwrap();
        assert!(plan.iter().all(|a| a.label == SplitLabel::Validation));
    }

    #[test]
    fn test_pairs_keep_matched_positions() {
        let m = Matched {
            noisy: vec!["n_b".to_string(), "n_a".to_string()],
            clean: vec!["c_b".to_string(), "c_a".to_string()],
        };
        let plan = assign_splits(m, 0.5, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(plan[0].noisy, "n_b");
        assert_eq!(plan[0].clean, "c_b");
        assert_eq!(plan[1].noisy, "n_a");
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let err = assign_splits(matched(3), 1.5, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRatio(r) if r == 1.5));
        assert!(assign_splits(matched(3), f64::NAN, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_misaligned_lists_are_rejected() {
        let m = Matched { noisy: vec!["a".to_string()], clean: Vec::new() };
        let err = assign_splits(m, 0.1, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, DatasetError::LengthMismatch { noisy: 1, clean: 0 }));
    }

    #[test]
    fn test_empty_dataset() {
        let plan = assign_splits(matched(0), 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        assert!(plan.is_empty());
    }
}
