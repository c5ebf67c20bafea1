//! Text front end: instance parsing and report formatting.
//!
//! The accepted format is whitespace separated integers: the item count `N`
//! and capacity `W`, followed by `N` `weight value` pairs. Line breaks carry
//! no meaning, and anything after the last pair is ignored.

use crate::error::{KnapsackError, Result};
use crate::problem::KnapsackProblem;
use crate::tabu::TabuResult;

/// Parses an instance from text such as `"3 5\n2 3\n3 4\n4 5"`.
///
/// # Examples
///
/// ```
/// use knapsack_tabu::input::parse_instance;
///
/// let problem = parse_instance("3 5\n2 3\n3 4\n4 5\n").unwrap();
/// assert_eq!(problem.item_count(), 3);
/// assert!(parse_instance("3 5\n2 x").is_err());
/// ```
pub fn parse_instance(text: &str) -> Result<KnapsackProblem> {
    let mut tokens = text.split_whitespace();

    let item_count = next_int(&mut tokens, "item count")?;
    let capacity = next_int(&mut tokens, "capacity")?;
    if item_count <= 0 {
        return Err(KnapsackError::invalid(format!(
            "item_count must be positive, got {item_count}"
        )));
    }

    let mut items = Vec::with_capacity(item_count.min(1 << 16) as usize);
    for i in 1..=item_count {
        let weight = next_int(&mut tokens, &format!("weight of item {i}"))?;
        let value = next_int(&mut tokens, &format!("value of item {i}"))?;
        items.push((weight, value));
    }

    KnapsackProblem::load(item_count, capacity, &items)
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<i64> {
    let token = tokens
        .next()
        .ok_or_else(|| KnapsackError::invalid(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| KnapsackError::invalid(format!("{what}: '{token}' is not an integer")))
}

/// Human-readable report: best value, selection bit string, then the
/// selected items (1-based) and their total weight.
pub fn format_report(problem: &KnapsackProblem, result: &TabuResult) -> String {
    let mut out = format!(
        "max profit:{}\nsolution:{}\nselected items:\n",
        result.best_value, result.best
    );
    for i in result.best.selected_indices() {
        let item = problem.item(i);
        out.push_str(&format!(
            "  item {}: weight={}, value={}\n",
            i + 1,
            item.weight,
            item.value
        ));
    }
    out.push_str(&format!("total weight: {}\n", result.best_weight));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Solution;

    #[test]
    fn test_parse_line_oriented() {
        let p = parse_instance("3 5\n2 3\n3 4\n4 5\n").unwrap();
        assert_eq!(p.capacity(), 5);
        assert_eq!(p.item(2).weight, 4);
        assert_eq!(p.item(2).value, 5);
    }

    #[test]
    fn test_parse_ignores_layout() {
        let a = parse_instance("2 10 1 2 3 4").unwrap();
        let b = parse_instance("2\n10\n\n1 2\n  3\t4").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_missing_pair() {
        let err = parse_instance("3 5\n2 3\n3 4\n").unwrap_err();
        assert_eq!(
            err,
            KnapsackError::InvalidInput("missing weight of item 3".into())
        );
    }

    #[test]
    fn test_parse_malformed_token() {
        let err = parse_instance("2 five\n1 1\n1 1").unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_instance("0 5").is_err());
        assert!(parse_instance("1 -5 1 1").is_err());
        assert!(parse_instance("").is_err());
    }

    #[test]
    fn test_format_report_empty_selection() {
        let p = parse_instance("2 0\n1 1\n1 1").unwrap();
        let result = TabuResult {
            best: Solution::empty(2),
            best_value: 0,
            best_weight: 0,
            rounds: 1,
            iterations: 10,
            best_iteration: 0,
            value_history: vec![0],
            cancelled: false,
            timed_out: false,
        };
        assert_eq!(
            format_report(&p, &result),
            "max profit:0\nsolution:00\nselected items:\ntotal weight: 0\n"
        );
    }

    #[test]
    fn test_format_report() {
        let p = parse_instance("3 5\n2 3\n3 4\n4 5").unwrap();
        let result = TabuResult {
            best: Solution::from_indices(3, &[0, 1]),
            best_value: 7,
            best_weight: 5,
            rounds: 1,
            iterations: 1000,
            best_iteration: 12,
            value_history: vec![7],
            cancelled: false,
            timed_out: false,
        };
        let report = format_report(&p, &result);
        assert_eq!(
            report,
            "max profit:7\n\
             solution:110\n\
             selected items:\n  \
             item 1: weight=2, value=3\n  \
             item 2: weight=3, value=4\n\
             total weight: 5\n"
        );
    }
}
