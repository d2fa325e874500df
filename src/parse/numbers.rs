use regex::Regex;

/// A numeric token found in the request text.
///
/// Transient: only used during parsing to disambiguate the budget figure
/// from quantity candidates. Spans are byte offsets into the lowercased
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    pub value: u64,
    pub start: usize,
    pub end: usize,
}

/// Grouped-thousands ("5.000.000") first, so the alternation captures the
/// whole figure as one token instead of three.
pub(crate) const NUMBER_PATTERN: &str = r"\d{1,3}(?:\.\d{3})+|\d+";

pub(crate) fn scan_numbers(pattern: &Regex, text: &str) -> Vec<NumberToken> {
    pattern
        .find_iter(text)
        .map(|m| {
            let digits: String = m.as_str().chars().filter(|c| *c != '.').collect();
            NumberToken {
                // Digit runs longer than u64 saturate rather than fail the parse.
                value: digits.parse().unwrap_or(u64::MAX),
                start: m.start(),
                end: m.end(),
            }
        })
        .collect()
}

/// Split the token list into the budget token and the quantity-candidate
/// pool (scan order preserved).
///
/// Budget is the token with the largest value, the earliest occurrence
/// winning ties. This heuristic is intentionally naive: "chair 9000000,
/// budget 50000" treats the larger literal as the budget unconditionally.
pub(crate) fn split_budget(tokens: Vec<NumberToken>) -> Option<(NumberToken, Vec<NumberToken>)> {
    let mut best: Option<usize> = None;
    for (i, token) in tokens.iter().enumerate() {
        match best {
            // Strict > keeps the earliest occurrence on equal values.
            Some(b) if tokens[b].value >= token.value => {}
            _ => best = Some(i),
        }
    }

    let best = best?;
    let mut pool = tokens;
    let budget = pool.remove(best);
    Some((budget, pool))
}
