use std::{cmp::Ordering, iter::Peekable, str::Chars};

/// Compares strings with embedded digit runs ordered by numeric value, so `"2"` sorts before `"10"`.
///
/// Numerically equal runs such as `"01"` and `"1"` fall back to plain string order
/// to keep the ordering total.
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    let mut left_chars = left.chars().peekable();
    let mut right_chars = right.chars().peekable();

    loop {
        match (left_chars.peek().copied(), right_chars.peek().copied()) {
            (None, None) => return left.cmp(right),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let left_run = digit_run(&mut left_chars);
                let right_run = digit_run(&mut right_chars);
                match numeric_cmp(&left_run, &right_run) {
                    Ordering::Equal => {}
                    unequal => return unequal,
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left_chars.next();
                right_chars.next();
            }
        }
    }
}

fn digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        run.push(digit);
    }
    run
}

// Arbitrary-length digit runs, compared without parsing into an integer.
fn numeric_cmp(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<'a>(mut names: Vec<&'a str>) -> Vec<&'a str> {
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn digit_runs_compare_numerically() {
        assert_eq!(sorted(vec!["2", "10", "1"]), ["1", "2", "10"]);
        assert_eq!(sorted(vec!["item10", "item9", "item100"]), ["item9", "item10", "item100"]);
    }

    #[test]
    fn text_compares_by_character() {
        assert_eq!(sorted(vec!["TYPES", "", "MAIN", "B", "A"]), ["", "A", "B", "MAIN", "TYPES"]);
        assert_eq!(natural_cmp("a", "ab"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_tie_break_deterministically() {
        assert_eq!(natural_cmp("01", "1"), Ordering::Less);
        assert_eq!(natural_cmp("x1", "x1"), Ordering::Equal);
        assert_eq!(natural_cmp("99999999999999999999999", "100000000000000000000000"), Ordering::Less);
    }
}
