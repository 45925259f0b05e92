//! Natural (numeric-aware) string ordering for unit numbers.

use std::cmp::Ordering;

/// Compare two strings treating embedded digit runs as numbers, so that
/// `"2" < "10"` and `"A2" < "A10"`. Non-digit bytes compare as plain bytes.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let start_a = i;
            while i < a.len() && a[i].is_ascii_digit() {
                i += 1;
            }
            let start_b = j;
            while j < b.len() && b[j].is_ascii_digit() {
                j += 1;
            }
            let run_a = strip_leading_zeros(&a[start_a..i]);
            let run_b = strip_leading_zeros(&b[start_b..j]);
            // longer digit run = larger number; equal lengths compare bytewise
            let ordering = run_a.len().cmp(&run_b.len()).then_with(|| run_a.cmp(run_b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        } else {
            let ordering = a[i].cmp(&b[j]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i += 1;
            j += 1;
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

fn strip_leading_zeros(run: &[u8]) -> &[u8] {
    let mut start = 0;
    while start + 1 < run.len() && run[start] == b'0' {
        start += 1;
    }
    &run[start..]
}

/// Order unit numbers for display, with empty numbers after any non-empty
/// value.
pub fn unit_num_cmp(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => natural_cmp(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_compare_numerically() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("10", "2"), Ordering::Greater);
        assert_eq!(natural_cmp("10", "10"), Ordering::Equal);
        assert_eq!(natural_cmp("1a", "1b"), Ordering::Less);
        assert_eq!(natural_cmp("A2", "A10"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_do_not_change_magnitude() {
        assert_eq!(natural_cmp("02", "10"), Ordering::Less);
        assert_eq!(natural_cmp("010", "2"), Ordering::Greater);
        assert_eq!(natural_cmp("01", "1"), Ordering::Equal);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(natural_cmp("1", "1a"), Ordering::Less);
        assert_eq!(natural_cmp("", "1"), Ordering::Less);
    }

    #[test]
    fn empty_unit_numbers_sort_last() {
        assert_eq!(unit_num_cmp("", "99"), Ordering::Greater);
        assert_eq!(unit_num_cmp("99", ""), Ordering::Less);
        assert_eq!(unit_num_cmp("", ""), Ordering::Equal);

        let mut nums = vec!["10", "", "2", "1"];
        nums.sort_by(|a, b| unit_num_cmp(a, b));
        assert_eq!(nums, vec!["1", "2", "10", ""]);
    }
}
