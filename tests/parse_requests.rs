use furnish_core::parse::RequestParser;
use furnish_core::types::{CategoryRequest, ParseError, ParsedRequest};

fn cats(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn parse(text: &str, categories: &[&str]) -> ParsedRequest {
    RequestParser::new(&cats(categories))
        .parse(text)
        .expect("parse should succeed")
}

#[test]
fn golden_budget_and_quantities() {
    let parsed = parse(
        "Budget Rp 5.000.000, bed 2, chair",
        &["bed", "chair", "table"],
    );

    assert_eq!(parsed.budget, 5_000_000);
    assert_eq!(
        parsed.requests,
        vec![
            CategoryRequest::new("bed", 2),
            CategoryRequest::new("chair", 1),
        ],
        "bed takes the nearby 2, chair defaults to 1 with the pool empty"
    );
}

#[test]
fn no_digits_fails_with_no_budget_found() {
    let result = RequestParser::new(&cats(&["sofa"])).parse("a cozy sofa please");
    assert!(matches!(result, Err(ParseError::NoBudgetFound)));
}

#[test]
fn one_parser_serves_many_requests() {
    // Patterns are compiled at construction; each parse call gets a fresh
    // candidate pool.
    let parser = RequestParser::new(&cats(&["bed", "chair"]));

    let first = parser.parse("budget 1000, bed 2").expect("parse should succeed");
    assert_eq!(first.budget, 1000);
    assert_eq!(first.requests, vec![CategoryRequest::new("bed", 2)]);

    let second = parser.parse("chair for 500").expect("parse should succeed");
    assert_eq!(second.budget, 500);
    assert_eq!(second.requests, vec![CategoryRequest::new("chair", 1)]);
}

#[test]
fn mixed_case_and_non_ascii_categories_match_mentions() {
    let parser = RequestParser::new(&cats(&["Étagère", "SOFA"]));
    let parsed = parser
        .parse("Budget 1.000, étagère 2 and a sofa")
        .expect("parse should succeed");

    assert_eq!(parsed.budget, 1000);
    // ASCII case folding normalizes the names; non-ASCII letters pass
    // through unchanged and still match via case-insensitive patterns.
    assert_eq!(
        parsed.requests,
        vec![
            CategoryRequest::new("Étagère", 2),
            CategoryRequest::new("sofa", 1),
        ]
    );
}

#[test]
fn grouped_thousands_is_one_token() {
    // "5.000.000" must not decompose into 5, 000, 000.
    let parsed = parse("5.000.000 for a chair", &["chair"]);
    assert_eq!(parsed.budget, 5_000_000);
    assert_eq!(
        parsed.requests,
        vec![CategoryRequest::new("chair", 1)],
        "no quantity candidates should remain after the budget is taken"
    );
}

#[test]
fn largest_number_is_budget_regardless_of_position() {
    let parsed = parse("2 chair, budget 100", &["chair"]);
    assert_eq!(parsed.budget, 100);
    assert_eq!(parsed.requests, vec![CategoryRequest::new("chair", 2)]);
}

#[test]
fn largest_number_wins_even_when_it_reads_like_a_quantity() {
    // Documented naive heuristic: the larger literal is the budget, full stop.
    let parsed = parse("chair 9000000, budget 50000", &["chair"]);
    assert_eq!(parsed.budget, 9_000_000);
    assert_eq!(parsed.requests, vec![CategoryRequest::new("chair", 50_000)]);
}

#[test]
fn category_match_is_whole_word() {
    let parsed = parse("bedroom makeover, 1.000.000", &["bed"]);
    assert_eq!(parsed.budget, 1_000_000);
    assert!(
        parsed.requests.is_empty(),
        "'bed' must not match inside 'bedroom'"
    );

    let parsed = parse("bedroom and one bed, 1.000.000", &["bed"]);
    assert_eq!(parsed.requests, vec![CategoryRequest::new("bed", 1)]);
}

#[test]
fn empty_requests_is_a_valid_result() {
    let parsed = parse("around 750 to furnish the office", &["chair", "table"]);
    assert_eq!(parsed.budget, 750);
    assert!(parsed.requests.is_empty());
}

#[test]
fn repeated_mentions_produce_separate_requests() {
    let parsed = parse("budget 1000: chair 2 and one more chair", &["chair"]);
    assert_eq!(parsed.budget, 1000);
    assert_eq!(
        parsed.requests,
        vec![
            CategoryRequest::new("chair", 2),
            CategoryRequest::new("chair", 1),
        ]
    );
}

#[test]
fn consumed_candidates_are_not_reused() {
    // One candidate, two mentions: the second mention defaults to 1.
    let parsed = parse("budget 5000, table 3, desk", &["table", "desk"]);
    assert_eq!(
        parsed.requests,
        vec![
            CategoryRequest::new("table", 3),
            CategoryRequest::new("desk", 1),
        ]
    );
}

#[test]
fn equidistant_candidates_break_ties_in_scan_order() {
    // "2" ends 4 bytes before "bed" starts; "9" starts 4 bytes after.
    // The earlier-scanned candidate wins the tie.
    let parsed = parse("100 2    bed 9", &["bed"]);
    assert_eq!(parsed.budget, 100);
    assert_eq!(parsed.requests, vec![CategoryRequest::new("bed", 2)]);
}

#[test]
fn category_iteration_order_drives_association() {
    // Same text, different category order: the category scanned first
    // consumes the shared candidate.
    let text = "budget 1000, bed 2, chair";

    let bed_first = parse(text, &["bed", "chair"]);
    assert_eq!(
        bed_first.requests,
        vec![
            CategoryRequest::new("bed", 2),
            CategoryRequest::new("chair", 1),
        ]
    );

    let chair_first = parse(text, &["chair", "bed"]);
    assert_eq!(
        chair_first.requests,
        vec![
            CategoryRequest::new("chair", 2),
            CategoryRequest::new("bed", 1),
        ],
        "chair sits nearer the 2 than bed's start-distance when scanned first"
    );
}
