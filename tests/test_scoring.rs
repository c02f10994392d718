use skillguard::finding::{Category, Finding, RiskLevel, Severity};
use skillguard::scoring::calculate_score;

fn finding(rule_id: &'static str, weight: u32, hard_trigger: bool) -> Finding {
    Finding {
        rule_id,
        rule_name: "test rule",
        severity: Severity::High,
        category: Category::CommandInjection,
        file: "scripts/run.sh".to_string(),
        line: 1,
        snippet: "snippet".to_string(),
        weight,
        hard_trigger,
    }
}

#[test]
fn no_findings_is_safe_with_zero_score() {
    assert_eq!(calculate_score(&[]), (0, RiskLevel::Safe, false));
}

#[test]
fn single_hard_trigger_scores_its_weight() {
    let findings = vec![finding("CURL_PIPE_SH", 90, true)];
    assert_eq!(
        calculate_score(&findings),
        (90, RiskLevel::Dangerous, true)
    );
}

#[test]
fn repeats_of_one_rule_decay_to_half() {
    let findings = vec![
        finding("A", 60, false),
        finding("A", 60, false),
        finding("A", 60, false),
    ];
    // 60 + 30 + 30 = 120, clamped to 100; dangerous by score alone.
    assert_eq!(
        calculate_score(&findings),
        (100, RiskLevel::Dangerous, false)
    );
}

#[test]
fn decay_is_per_rule_id_not_global() {
    let findings = vec![finding("A", 30, false), finding("B", 30, false)];
    // Two distinct rules contribute in full.
    assert_eq!(calculate_score(&findings), (60, RiskLevel::High, false));
}

#[test]
fn decay_uses_integer_floor() {
    let findings = vec![finding("A", 35, false), finding("A", 35, false)];
    // 35 + floor(35/2) = 35 + 17 = 52.
    assert_eq!(calculate_score(&findings), (52, RiskLevel::High, false));
}

#[test]
fn decay_law_holds_for_k_matches_of_one_rule() {
    for k in 1..=6u32 {
        let findings: Vec<_> = (0..k).map(|_| finding("A", 40, false)).collect();
        let expected = (40 + (k - 1) * 20).min(100);
        let (score, _, _) = calculate_score(&findings);
        assert_eq!(score, expected, "decay law failed for k = {k}");
    }
}

#[test]
fn hard_trigger_floors_the_score_at_75() {
    let findings = vec![finding("A", 10, true)];
    assert_eq!(calculate_score(&findings), (75, RiskLevel::Dangerous, true));
}

#[test]
fn hard_trigger_dominates_regardless_of_other_findings() {
    let findings = vec![finding("A", 10, true), finding("B", 5, false)];
    let (score, level, hard) = calculate_score(&findings);
    assert!(score >= 75);
    assert_eq!(level, RiskLevel::Dangerous);
    assert!(hard);
}

#[test]
fn score_is_clamped_to_100() {
    let findings = vec![finding("A", 100, true), finding("B", 100, true)];
    assert_eq!(
        calculate_score(&findings),
        (100, RiskLevel::Dangerous, true)
    );
}

#[test]
fn threshold_boundaries_classify_correctly() {
    let cases = [
        (20, RiskLevel::Low),
        (24, RiskLevel::Low),
        (25, RiskLevel::Medium),
        (40, RiskLevel::Medium),
        (49, RiskLevel::Medium),
        (50, RiskLevel::High),
        (74, RiskLevel::High),
        (75, RiskLevel::Dangerous),
        (100, RiskLevel::Dangerous),
    ];
    for (weight, expected) in cases {
        let findings = vec![finding("A", weight, false)];
        let (score, level, _) = calculate_score(&findings);
        assert_eq!(score, weight);
        assert_eq!(level, expected, "weight {weight} should be {expected:?}");
    }
}

#[test]
fn adding_a_finding_never_decreases_score_or_level() {
    let base = vec![finding("A", 40, false)];
    let extended = vec![finding("A", 40, false), finding("B", 55, false)];
    let (s1, l1, _) = calculate_score(&base);
    let (s2, l2, _) = calculate_score(&extended);
    assert!(s2 >= s1);
    assert!(l2 >= l1);
}
