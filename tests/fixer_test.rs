use email_typo_fixer::{fix, fix_with_domains, CorrectionResult};

fn suggestion(input: &str) -> Option<String> {
    let result = fix(input);
    assert!(
        result.has_correction,
        "expected a correction for {:?}, got {:?}",
        input, result
    );
    result.suggested
}

fn assert_fixed(input: &str, expected: &str) {
    assert_eq!(suggestion(input).as_deref(), Some(expected), "input: {:?}", input);
}

fn assert_untouched(input: &str) {
    let result = fix(input);
    assert_eq!(result, CorrectionResult::unchanged(input), "input: {:?}", input);
}

#[test]
fn test_invalid_inputs() {
    let result = fix("");
    assert!(!result.has_correction);
    assert_eq!(result.original, "");
    assert_eq!(result.suggested, None);

    assert_untouched("notanemail");
}

#[test]
fn test_space_removal() {
    assert_fixed("test user@gmail.com", "testuser@gmail.com");
    assert_fixed("test  user @ gmail.com", "testuser@gmail.com");
    assert_fixed(" user@gmail.com ", "user@gmail.com");
}

#[test]
fn test_comma_replacement() {
    assert_fixed("user@gmail,com", "user@gmail.com");
    assert_fixed("us,er@gmail.com", "us.er@gmail.com");
    assert_fixed("us,er@sub,domain,com", "us.er@sub.domain.com");
}

#[test]
fn test_multiple_dots() {
    assert_fixed("user@gmail..com", "user@gmail.com");
    assert_fixed("us..er@gmail.com", "us.er@gmail.com");
    assert_fixed("user..name@gmail...com", "user.name@gmail.com");
}

#[test]
fn test_repeated_domain() {
    assert_fixed("user@gmail.com@gmail.com", "user@gmail.com");
    assert_fixed("user@Gmail.com@gmail.COM", "user@gmail.com");
}

#[test]
fn test_domain_typos() {
    assert_fixed("user@gmial.com", "user@gmail.com");
    assert_fixed("TestUser@gmial.com", "TestUser@gmail.com");
    assert_fixed("user@gmail.com.html", "user@gmail.com");
}

#[test]
fn test_custom_domains() {
    let result = fix_with_domains("user@custom,domian.com", &["custom.domain.com"]);
    assert!(result.has_correction);
    assert_eq!(result.suggested.as_deref(), Some("user@custom.domain.com"));
}

#[test]
fn test_prefixes() {
    assert_fixed("mailto:user@gmail.com", "user@gmail.com");
    assert_fixed("email:user@gmail.com", "user@gmail.com");
    assert_fixed("TO:user@gmail.com", "user@gmail.com");
}

#[test]
fn test_spelled_out_separators() {
    assert_fixed("user[at]gmail.com", "user@gmail.com");
    assert_fixed("user(at)gmail.com", "user@gmail.com");
    assert_fixed("user@gmail[dot]com", "user@gmail.com");
    assert_fixed("(user)@[gmail].com", "user@gmail.com");
}

#[test]
fn test_missing_at() {
    assert_fixed("usergmail.com", "user@gmail.com");
}

#[test]
fn test_display_name_formats() {
    assert_fixed("Patrick Ullrich <test@gmail.com>", "test@gmail.com");
    assert_fixed("<<test@gmail.com>>", "test@gmail.com");
    assert_fixed("O'Neil, Patrick <patrick@example.com>", "patrick@example.com");
}

#[test]
fn test_local_part_dots() {
    assert_fixed(".user@gmail.com", "user@gmail.com");
    assert_fixed("user.@gmail.com", "user@gmail.com");
}

#[test]
fn test_multiple_at() {
    assert_fixed("user@@gmail.com", "user@gmail.com");
    assert_fixed("user@domain@gmail.com", "userdomain@gmail.com");
    assert_fixed("first@second@third@example.com", "firstsecondthird@example.com");
}

#[test]
fn test_trailing_and_problem_characters() {
    assert_fixed("test@test.com$", "test@test.com");
    assert_fixed("test@test.com$#!", "test@test.com");
    assert_fixed("user@gmail.com$#", "user@gmail.com");

    assert_fixed("user&name@domain.com", "username@domain.com");
    assert_fixed("user\\name@domain.com", "username@domain.com");
    assert_fixed("user;name@domain.com", "username@domain.com");
    assert_fixed("user^name@domain.com", "username@domain.com");
    assert_fixed("user#name@domain.com", "username@domain.com");
    assert_fixed("user*name@domain.com", "username@domain.com");
    assert_fixed("user;^*%&#name@domain.com", "username@domain.com");
}

#[test]
fn test_valid_special_characters_preserved() {
    assert_untouched("user.name+tag@domain.com");
    assert_untouched("first_last-1@gmail.com");
}

#[test]
fn test_combined_fixes() {
    assert_fixed("mailto:.user[at]gmail[dot]con.", "user@gmail.com");
    assert_fixed("to: user (at) gmial[dot]co @gmail.com", "user@gmail.com");
    assert_fixed("Patrick O'Neil <  test,user@@gmial..com$> ", "test.user@gmail.com");
}

#[test]
fn test_suggestions_are_already_normalized() {
    let inputs = [
        "test user@gmail.com",
        "user@gmail,com",
        "user@gmail..com",
        "user@gmail.com@gmail.com",
        "user@gmial.com",
        "Patrick Ullrich <test@gmail.com>",
        "user@@gmail.com",
        "user@domain@gmail.com",
        "usergmail.com",
        "mailto:.user[at]gmail[dot]con.",
        "to: user (at) gmial[dot]co @gmail.com",
        "Patrick O'Neil <  test,user@@gmial..com$> ",
        "test@test.com$#!",
        "user;^*%&#name@domain.com",
    ];

    for input in inputs {
        let first = fix(input);
        let suggested = first.suggested.expect("correction expected");
        let second = fix(&suggested);
        assert!(
            !second.has_correction,
            "{:?} -> {:?} -> {:?}",
            input, suggested, second.suggested
        );
    }
}

#[test]
fn test_pathological_inputs_do_not_panic() {
    let inputs = [
        "@", "@@", "<", ">", "<>", ".", "..", "a", "é", "@é", "é@", "<@>", "[at]", "mailto:",
        "gmail.com", "\u{00a0}", "ü@ü.ü",
    ];
    for input in inputs {
        let result = fix(input);
        assert_eq!(result.original, input);
        assert_eq!(result.has_correction, result.suggested.is_some());
    }
}
