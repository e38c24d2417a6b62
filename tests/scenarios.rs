use rex::Regex;

#[test]
fn star_of_star_followed_by_letter() {
    let re = Regex::new("(o*)*a").unwrap();
    assert!(re.is_match(&format!("{}a", "o".repeat(16))));
    assert!(re.is_not_match(&"o".repeat(16)));
}

#[test]
fn email_like_pattern_accepts_and_rejects() {
    let re = Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,6}").unwrap();
    assert!(re.is_match("erik@osheim.org"));
    assert!(re.is_not_match("erik@osheim.org."));
}

#[test]
fn alternation() {
    let re = Regex::new("a|b").unwrap();
    assert!(re.is_match("a"));
    assert!(re.is_not_match("c"));
}

#[test]
fn empty_language_rejects_everything() {
    let re = Regex::new("\u{2205}").unwrap();
    assert!(re.is_not_match(""));
    assert!(re.is_not_match("x"));
}

#[test]
fn empty_pattern_matches_only_empty_string() {
    let re = Regex::new("").unwrap();
    assert!(re.is_match(""));
    assert!(re.is_not_match("x"));
}

#[test]
fn negated_class() {
    let re = Regex::new("[^abc]").unwrap();
    assert!(re.is_match("d"));
    assert!(re.is_not_match("a"));
}

#[test]
fn single_character() {
    let re = Regex::new("A").unwrap();
    assert!(re.is_match("A"));
}

#[test]
fn determinism_across_repeated_matches() {
    let re = Regex::new("(a|b)*c").unwrap();
    for _ in 0..5 {
        assert!(re.is_match("ababc"));
        assert!(re.is_not_match("abab"));
    }
}
