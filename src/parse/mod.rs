pub mod numbers;

use regex::Regex;

pub use numbers::NumberToken;

use crate::types::{CategoryRequest, ParseError, ParsedRequest};

/// A known category name with its compiled whole-word pattern.
struct CategoryPattern {
    name: String,
    word: Regex,
}

/// Free-text request parser.
///
/// Extracts a budget figure and an ordered list of (category, quantity)
/// asks from unstructured text. All patterns are compiled once at
/// construction; every `parse` call works on its own candidate pool, so one
/// parser can serve any number of requests.
pub struct RequestParser {
    number_pattern: Regex,
    categories: Vec<CategoryPattern>,
}

impl RequestParser {
    /// Build a parser for the given category names, in the given order.
    /// The order is a documented tie-break: categories scanned earlier
    /// consume quantity candidates first.
    pub fn new(categories: &[String]) -> Self {
        let categories = categories
            .iter()
            .map(|category| {
                let name = category.to_ascii_lowercase();
                // Whole-word match only: "bed" must not hit inside "bedroom".
                // (?i) so the pattern also matches any remaining case
                // variants after lowercasing the input.
                let word =
                    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&name))).unwrap();
                CategoryPattern { name, word }
            })
            .collect();

        RequestParser {
            number_pattern: Regex::new(numbers::NUMBER_PATTERN).unwrap(),
            categories,
        }
    }

    /// Parse `text` against the known category names.
    ///
    /// Rules, in order:
    /// 1. Lowercase the input.
    /// 2. Scan numeric tokens (grouped-thousands figures are one token).
    ///    No token at all fails with [`ParseError::NoBudgetFound`].
    /// 3. The largest-valued token is the budget; the rest form the
    ///    quantity-candidate pool.
    /// 4. Each whole-word category occurrence consumes its nearest
    ///    unconsumed candidate as quantity (default 1 when the pool is
    ///    empty) and appends one request. Occurrences are never merged.
    ///
    /// An empty request list with a found budget is a valid result: it
    /// means "no specific category was asked for".
    pub fn parse(&self, text: &str) -> Result<ParsedRequest, ParseError> {
        let text = text.to_lowercase();

        let tokens = numbers::scan_numbers(&self.number_pattern, &text);
        let (budget, mut pool) =
            numbers::split_budget(tokens).ok_or(ParseError::NoBudgetFound)?;

        let mut requests = Vec::new();
        for category in &self.categories {
            for occurrence in category.word.find_iter(&text) {
                let quantity = match take_nearest(&mut pool, occurrence.start()) {
                    Some(token) => token.value,
                    None => 1,
                };
                requests.push(CategoryRequest::new(category.name.clone(), quantity));
            }
        }

        Ok(ParsedRequest {
            budget: budget.value,
            requests,
        })
    }
}

/// Remove and return the candidate nearest to a category occurrence.
///
/// Distance is the smaller of |token.start - at| and |token.end - at|.
/// Strict < keeps the first-encountered candidate when two are equidistant;
/// pool order is scan order, so the tie-break is deterministic.
fn take_nearest(pool: &mut Vec<NumberToken>, at: usize) -> Option<NumberToken> {
    let mut best: Option<(usize, usize)> = None;
    for (i, token) in pool.iter().enumerate() {
        let distance = token.start.abs_diff(at).min(token.end.abs_diff(at));
        match best {
            Some((d, _)) if d <= distance => {}
            _ => best = Some((distance, i)),
        }
    }
    best.map(|(_, i)| pool.remove(i))
}
