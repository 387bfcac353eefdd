//! Unit tests for the individual checks, without file I/O.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use botc_model::{DocumentKind, Row, ValidationResult};
use botc_validate::RuleSet;
use botc_validate::checks::{characters, headers, ids, run_all, scripts};

const PATH: &str = "sheet.csv";

fn path() -> &'static Path {
    Path::new(PATH)
}

fn character_rules() -> &'static RuleSet {
    RuleSet::for_kind(DocumentKind::Characters)
}

fn script_rules() -> &'static RuleSet {
    RuleSet::for_kind(DocumentKind::Scripts)
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn script_row(line: usize, overrides: &[(&str, &str)]) -> Row {
    let mut row = Row::from_pairs(
        line,
        [
            ("id", "imp_script"),
            ("name", "Imp Script"),
            ("author", "someone"),
            ("synopsis", "A script"),
            ("json", "/translations/assets/imp.json"),
            ("pdf", "/translations/assets/imp.pdf"),
        ],
    );
    for (key, value) in overrides {
        row.insert(*key, *value);
    }
    row
}

#[test]
fn required_headers_one_error_per_missing_name() {
    let rules = RuleSet::for_kind(DocumentKind::Characters);
    let result = headers::check_required(path(), &owned(&["id", "team", "flavor"]), rules);

    assert_eq!(
        result.errors,
        vec![
            "sheet.csv: missing required header 'ability'",
            "sheet.csv: missing required header 'edition'",
            "sheet.csv: missing required header 'name'",
        ]
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn unknown_header_is_an_error() {
    let rules = RuleSet::for_kind(DocumentKind::Scripts);
    let result = headers::check_known(
        path(),
        &owned(&["id", "name", "autor", "logo", "autor"]),
        rules,
    );

    assert_eq!(result.errors, vec!["sheet.csv: unknown header 'autor'"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn empty_id_with_data_is_an_error() {
    let rows = vec![Row::from_pairs(4, [("id", ""), ("name", "Imp")])];
    let result = ids::check(path(), &rows);
    assert_eq!(result.errors, vec!["sheet.csv:4 has data but empty 'id'"]);
}

#[test]
fn blank_rows_are_skipped() {
    let rows = vec![
        Row::from_pairs(2, [("id", "imp")]),
        Row::from_pairs(3, [("id", ""), ("name", "  ")]),
        Row::from_pairs(4, [("id", ""), ("name", "")]),
    ];
    let result = ids::check(path(), &rows);
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn duplicate_id_cites_first_line() {
    let mut rows = Vec::new();
    for line in 2..=9 {
        let id = if line == 3 || line == 9 {
            "imp".to_string()
        } else {
            format!("role_{line}")
        };
        rows.push(Row::from_pairs(line, [("id", id)]));
    }

    let result = ids::check(path(), &rows);
    assert_eq!(
        result.errors,
        vec!["sheet.csv:9 duplicated id 'imp' (first defined at line 3)"]
    );
}

#[test]
fn triple_id_reports_each_repeat_against_first() {
    let rows = vec![
        Row::from_pairs(2, [("id", "imp")]),
        Row::from_pairs(3, [("id", "imp")]),
        Row::from_pairs(4, [("id", " imp ")]),
    ];
    let result = ids::check(path(), &rows);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors.iter().all(|e| e.ends_with("(first defined at line 2)")));
}

#[test]
fn team_comparison_is_case_insensitive() {
    let rows = vec![
        Row::from_pairs(2, [("id", "washerwoman"), ("team", "Townsfolk")]),
        Row::from_pairs(3, [("id", "imp"), ("team", "DEMON")]),
    ];
    let result = characters::check(character_rules(), path(), &rows);
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn unknown_team_is_a_warning() {
    let rows = vec![Row::from_pairs(2, [("id", "merlin"), ("team", "wizard")])];
    let result = characters::check(character_rules(), path(), &rows);

    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec!["sheet.csv:2 id='merlin' uses unknown team 'wizard'"]
    );
}

#[test]
fn night_order_must_be_numeric() {
    let rows = vec![Row::from_pairs(
        5,
        [
            ("id", "poisoner"),
            ("firstNight", "17"),
            ("otherNight", "early"),
        ],
    )];
    let result = characters::check(character_rules(), path(), &rows);

    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec!["sheet.csv:5 id='poisoner' has non-numeric 'otherNight' value 'early'"]
    );

    let negative = vec![Row::from_pairs(6, [("id", "x"), ("firstNight", "-1")])];
    let result = characters::check(character_rules(), path(), &negative);
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn character_rules_skip_rows_without_id() {
    let rows = vec![Row::from_pairs(2, [("id", ""), ("team", "wizard")])];
    let result = characters::check(character_rules(), path(), &rows);
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn valid_script_row_is_clean() {
    let result = scripts::check(script_rules(), path(), &[script_row(2, &[])]);
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn script_id_must_match_pattern() {
    let row = script_row(2, &[("id", "My Script")]);
    let result = scripts::check(script_rules(), path(), &[row]);
    assert_eq!(
        result.errors,
        vec!["sheet.csv:2 id='My Script' must match regex '^[a-z0-9_]+$'"]
    );
}

#[test]
fn each_empty_required_value_is_separate_error() {
    let row = script_row(3, &[("name", ""), ("author", " "), ("synopsis", "")]);
    let result = scripts::check(script_rules(), path(), &[row]);
    assert_eq!(
        result.errors,
        vec![
            "sheet.csv:3 id='imp_script' has empty 'name'",
            "sheet.csv:3 id='imp_script' has empty 'author'",
            "sheet.csv:3 id='imp_script' has empty 'synopsis'",
        ]
    );
}

#[test]
fn json_path_without_allowed_prefix_is_error() {
    let row = script_row(2, &[("json", "notes/x.json")]);
    let result = scripts::check(script_rules(), path(), &[row]);
    assert_eq!(
        result.errors,
        vec!["sheet.csv:2 id='imp_script' has unsupported json path 'notes/x.json'"]
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn allowed_json_path_passes_prefix_and_extension() {
    let result = scripts::check(
        script_rules(),
        path(),
        &[script_row(2, &[("json", "/translations/assets/x.json")])],
    );
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn wrong_extension_is_only_a_warning() {
    let result = scripts::check(
        script_rules(),
        path(),
        &[script_row(2, &[("pdf", "https://example.com/imp.docx")])],
    );
    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec!["sheet.csv:2 id='imp_script' has pdf path not ending with .pdf"]
    );
}

#[test]
fn whitespace_in_path_is_error() {
    let result = scripts::check(
        script_rules(),
        path(),
        &[script_row(2, &[("json", "/translations/assets/my imp.json")])],
    );
    assert_eq!(
        result.errors,
        vec!["sheet.csv:2 id='imp_script' has whitespace in json path"]
    );
}

#[test]
fn boolean_columns_are_checked_when_present() {
    let ok = script_row(2, &[("official", "Yes"), ("teensyville", "")]);
    let bad = script_row(3, &[("id", "other"), ("official", "maybe")]);
    let result = scripts::check(script_rules(), path(), &[ok, bad]);

    assert_eq!(
        result.errors,
        vec!["sheet.csv:3 id='other' has invalid boolean 'official=maybe'"]
    );
}

#[test]
fn invalid_boolean_message_cites_cleaned_value() {
    let row = script_row(2, &[("teensyville", " maybe\u{0007}\r\n")]);
    let result = scripts::check(script_rules(), path(), &[row]);

    assert_eq!(
        result.errors,
        vec!["sheet.csv:2 id='imp_script' has invalid boolean 'teensyville=maybe'"]
    );
}

#[test]
fn boolean_columns_come_from_the_rule_set() {
    let only_official = RuleSet {
        boolean: BTreeSet::from(["official"]),
        ..RuleSet::clone(script_rules())
    };
    let row = script_row(2, &[("official", "maybe"), ("teensyville", "maybe")]);

    let result = scripts::check(&only_official, path(), &[row]);

    assert_eq!(
        result.errors,
        vec!["sheet.csv:2 id='imp_script' has invalid boolean 'official=maybe'"]
    );
}

#[test]
fn run_all_concatenates_every_check() {
    let rules = RuleSet::for_kind(DocumentKind::Scripts);
    let headers = owned(&["id", "name", "author", "synopsis", "json", "pdf", "extra"]);
    let rows = vec![
        script_row(2, &[]),
        script_row(3, &[("pdf", "/a/b.txt")]),
        Row::from_pairs(4, [("id", ""), ("name", "orphan")]),
    ];

    let result = run_all(rules, path(), &headers, &rows);

    assert_eq!(
        result.errors,
        vec![
            "sheet.csv: unknown header 'extra'",
            "sheet.csv:3 duplicated id 'imp_script' (first defined at line 2)",
            "sheet.csv:4 has data but empty 'id'",
        ]
    );
    assert_eq!(
        result.warnings,
        vec!["sheet.csv:3 id='imp_script' has pdf path not ending with .pdf"]
    );
}

proptest! {
    #[test]
    fn required_check_reports_exactly_missing(mask in prop::collection::vec(any::<bool>(), 6)) {
        let rules = RuleSet::for_kind(DocumentKind::Scripts);
        let required: Vec<&str> = rules.required.iter().copied().collect();
        let present: Vec<String> = required
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| (*name).to_string())
            .collect();

        let result = headers::check_required(path(), &present, rules);

        prop_assert_eq!(result.errors.len(), required.len() - present.len());
        for name in &required {
            let reported = result
                .errors
                .iter()
                .any(|error| error.ends_with(&format!("'{name}'")));
            prop_assert_eq!(reported, !present.iter().any(|p| p == name));
        }
    }
}
