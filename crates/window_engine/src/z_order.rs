//! Stack index allocation across sibling windows.

/// Returns one more than the largest observed stack index, or `1` when nothing is observed.
///
/// Two windows allocating from the same snapshot can receive the same value; the later writer
/// wins, which is acceptable for single-pointer interaction.
pub fn next_stack_index<I>(indices: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    indices
        .into_iter()
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_registry_starts_at_one() {
        assert_eq!(next_stack_index(Vec::new()), 1);
    }

    #[test]
    fn next_index_is_strictly_greater_than_every_sibling() {
        let samples: [&[u32]; 4] = [&[1], &[3, 1, 2], &[7, 7, 7], &[1, 40, 12, 9]];
        for sample in samples {
            let next = next_stack_index(sample.iter().copied());
            assert!(sample.iter().all(|index| next > *index), "{sample:?} -> {next}");
        }
    }

    #[test]
    fn non_contiguous_indices_are_fine() {
        assert_eq!(next_stack_index([2, 9, 5]), 10);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(next_stack_index([u32::MAX]), u32::MAX);
    }
}
