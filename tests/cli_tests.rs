// tests/cli_tests.rs

use serde_json::json;
use sift_lang::cli::{
    CheckOptions, CheckResult, CliError, RulesOptions, execute_check, execute_rules,
    get_doc_category, get_docs_overview, render_tokens, render_tree, result_to_json,
};

fn check(expression: &str, input: Option<&str>) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        expression: expression.to_string(),
        input: input.map(str::to_string),
        syntax_only: false,
    })
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_success() {
    match check("age >= 18 AND country = 'US'", Some(r#"{"age": 22, "country": "UK"}"#)).unwrap() {
        CheckResult::Success(result) => assert_eq!(
            result_to_json(&result).unwrap(),
            json!({
                "overallResult": false,
                "clauses": [
                    {"clauseText": "age >= 18", "result": true},
                    {"clauseText": "country = 'US'", "result": false}
                ]
            })
        ),
        CheckResult::SyntaxValid => panic!("Expected evaluation"),
    }
}

#[test]
fn test_check_syntax_only() {
    let options = CheckOptions {
        expression: "age > 18".to_string(),
        input: None,
        syntax_only: true,
    };
    assert!(matches!(execute_check(&options).unwrap(), CheckResult::SyntaxValid));
}

#[test]
fn test_check_errors() {
    assert!(matches!(check("age >", Some("{}")), Err(CliError::Parse(_))));
    assert!(matches!(check("age > 1", None), Err(CliError::NoInput)));
    assert!(matches!(check("age > 1", Some("[1, 2]")), Err(CliError::Json(_))));
    assert!(matches!(check("age > 1", Some(r#"{"age": {"years": 3}}"#)), Err(CliError::Json(_))));
    assert!(matches!(check("age > 1", Some(r#"{"age": "old"}"#)), Err(CliError::Eval(_))));
}

#[test]
fn test_check_error_message() {
    let err = check("age 18", Some("{}")).unwrap_err();
    assert_eq!(err.to_string(), "Parse error: unexpected trailing '18' at position 4");
}

// ============================================================================
// tokens / parse
// ============================================================================

#[test]
fn test_render_tokens() {
    let output = render_tokens("age >= 18");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "   0  Identifier     age");
    assert_eq!(lines[1], "   4  GreaterOrEqual >=");
    assert_eq!(lines[2], "   7  Number         18");
    assert_eq!(lines[3], "   9  EndOfInput");
}

#[test]
fn test_render_tree() {
    assert_eq!(
        render_tree("(a=1 OR b=2)AND c='x'").unwrap(),
        "(a = 1 OR b = 2) AND c = 'x'"
    );
    assert!(matches!(render_tree("a = "), Err(CliError::Parse(_))));
}

// ============================================================================
// rules
// ============================================================================

const RULES: &str = r#"[
    {"id": "adult", "expression": "age >= 18"},
    {"id": "typed", "expression": "country > 1"},
    {"id": "us", "expression": "country = 'US'"}
]"#;

#[test]
fn test_rules_all() {
    let options = RulesOptions {
        rules: RULES.to_string(),
        input: Some(r#"{"age": 30, "country": "US"}"#.to_string()),
        rule: None,
    };
    let output = execute_rules(&options).unwrap();
    let entries = output.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["id"], "adult");
    assert_eq!(entries[0]["overallResult"], true);
    assert_eq!(entries[1]["id"], "typed");
    assert!(entries[1]["error"].as_str().unwrap().contains("non-numeric comparison"));
    assert_eq!(entries[2]["clauses"], json!([{"clauseText": "country = 'US'", "result": true}]));
}

#[test]
fn test_rules_single() {
    let options = RulesOptions {
        rules: RULES.to_string(),
        input: Some(r#"{"age": 12}"#.to_string()),
        rule: Some("adult".to_string()),
    };
    assert_eq!(
        execute_rules(&options).unwrap(),
        json!({
            "id": "adult",
            "overallResult": false,
            "clauses": [{"clauseText": "age >= 18", "result": false}]
        })
    );

    let options = RulesOptions {
        rule: Some("typed".to_string()),
        input: Some(r#"{"country": "US"}"#.to_string()),
        ..options
    };
    assert!(matches!(execute_rules(&options), Err(CliError::Rule(_))));
}

#[test]
fn test_rules_bad_file() {
    let options = RulesOptions {
        rules: r#"[{"id": "x", "expression": "x >"}]"#.to_string(),
        input: Some("{}".to_string()),
        rule: None,
    };
    assert!(matches!(execute_rules(&options), Err(CliError::Rule(_))));
}

// ============================================================================
// docs
// ============================================================================

#[test]
fn test_docs() {
    assert!(get_docs_overview().contains("DOCUMENTATION CATEGORIES"));
    for category in ["syntax", "operators", "ops", "TYPES"] {
        assert!(get_doc_category(category).is_ok(), "Failed for category: {}", category);
    }
    let err = get_doc_category("methods").unwrap_err();
    assert!(matches!(err, CliError::UnknownCategory(ref c) if c == "methods"));
}
