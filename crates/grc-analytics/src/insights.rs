//! # Cross-Entity Insights
//!
//! The three derived views that cut across collections: risks whose
//! linked controls are failing, policies with obligation coverage gaps,
//! and "key" controls relied on by multiple policies.
//!
//! Ordering is deterministic throughout: stable sort on the stated
//! numeric key descending, so ties keep original collection order. All
//! lists are capped at [`INSIGHT_CAP`] and recomputed fresh on every
//! request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use grc_core::{ControlId, PolicyId, RiskId};
use grc_model::{Control, Policy, Risk};

/// Maximum entries per insight list.
pub const INSIGHT_CAP: usize = 5;

/// A risk with at least one failing linked control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskControlFailure {
    /// Risk identifier.
    pub risk_id: RiskId,
    /// Short reference code.
    pub reference: String,
    /// Risk name.
    pub name: String,
    /// Linked controls counted as failing.
    pub fail_count: usize,
    /// Linked controls that resolved to a live control record.
    pub total_controls: usize,
}

/// A policy with uncovered obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyGap {
    /// Policy identifier.
    pub policy_id: PolicyId,
    /// Short reference code.
    pub reference: String,
    /// Policy name.
    pub name: String,
    /// Obligations with no control mapping, directly or via sections.
    pub uncovered: usize,
    /// Total obligations on the policy.
    pub total: usize,
}

/// A control relied on by two or more policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyControl {
    /// Control identifier.
    pub control_id: ControlId,
    /// Short reference code.
    pub reference: String,
    /// Control name.
    pub name: String,
    /// Distinct policies linking to this control.
    pub policy_count: usize,
}

/// The insights block for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardInsights {
    /// Risks ranked by failing-control count, descending.
    pub risks_with_failing_controls: Vec<RiskControlFailure>,
    /// Policies ranked by uncovered/total ratio, descending.
    pub policy_gaps: Vec<PolicyGap>,
    /// Controls ranked by distinct policy count, descending.
    pub key_controls: Vec<KeyControl>,
    /// Whether any list is non-empty; the whole block renders nothing
    /// when false.
    pub has_data: bool,
}

/// Compute the full insights block.
pub fn dashboard_insights(
    risks: &[Risk],
    controls: &[Control],
    policies: &[Policy],
) -> DashboardInsights {
    let risks_with_failing_controls = risks_with_failing_controls(risks, controls);
    let policy_gaps = policy_gaps(policies);
    let key_controls = key_controls(controls, policies);
    let has_data = !risks_with_failing_controls.is_empty()
        || !policy_gaps.is_empty()
        || !key_controls.is_empty();

    DashboardInsights {
        risks_with_failing_controls,
        policy_gaps,
        key_controls,
        has_data,
    }
}

/// Risks whose linked controls are failing.
///
/// A linked control counts as failing when its most recent test result
/// is red, or when it has never been tested — untested is treated as
/// failing here, by policy. Links to controls that no longer exist are
/// skipped silently and count toward neither side.
fn risks_with_failing_controls(risks: &[Risk], controls: &[Control]) -> Vec<RiskControlFailure> {
    let by_id: HashMap<&ControlId, &Control> = controls.iter().map(|c| (&c.id, c)).collect();

    let mut out: Vec<RiskControlFailure> = risks
        .iter()
        .filter(|risk| !risk.control_links.is_empty())
        .filter_map(|risk| {
            let mut fail_count = 0;
            let mut total_controls = 0;
            for link in &risk.control_links {
                let Some(control) = by_id.get(link) else {
                    continue;
                };
                total_controls += 1;
                match control.latest_test_result() {
                    Some(result) if result.outcome.is_fail() => fail_count += 1,
                    Some(_) => {}
                    None => fail_count += 1,
                }
            }
            (fail_count > 0).then(|| RiskControlFailure {
                risk_id: risk.id.clone(),
                reference: risk.reference.clone(),
                name: risk.name.clone(),
                fail_count,
                total_controls,
            })
        })
        .collect();

    out.sort_by(|a, b| b.fail_count.cmp(&a.fail_count));
    out.truncate(INSIGHT_CAP);
    out
}

/// Policies with obligation coverage gaps.
///
/// A policy with zero obligations is skipped outright — no obligations
/// means no gap signal, not a 100% gap. Ranking is by uncovered/total
/// ratio descending, compared exactly via cross-multiplication.
fn policy_gaps(policies: &[Policy]) -> Vec<PolicyGap> {
    let mut out: Vec<PolicyGap> = policies
        .iter()
        .filter(|p| !p.obligations.is_empty())
        .filter_map(|p| {
            let uncovered = p.obligations.iter().filter(|o| !o.is_covered()).count();
            (uncovered > 0).then(|| PolicyGap {
                policy_id: p.id.clone(),
                reference: p.reference.clone(),
                name: p.name.clone(),
                uncovered,
                total: p.obligations.len(),
            })
        })
        .collect();

    out.sort_by(|a, b| (b.uncovered * a.total).cmp(&(a.uncovered * b.total)));
    out.truncate(INSIGHT_CAP);
    out
}

/// Controls linked by two or more distinct policies.
fn key_controls(controls: &[Control], policies: &[Policy]) -> Vec<KeyControl> {
    let mut out: Vec<KeyControl> = controls
        .iter()
        .filter_map(|control| {
            let policy_count = policies
                .iter()
                .filter(|p| p.control_links.contains(&control.id))
                .count();
            (policy_count >= 2).then(|| KeyControl {
                control_id: control.id.clone(),
                reference: control.reference.clone(),
                name: control.name.clone(),
                policy_count,
            })
        })
        .collect();

    out.sort_by(|a, b| b.policy_count.cmp(&a.policy_count));
    out.truncate(INSIGHT_CAP);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use grc_model::{
        ControlTestResult, ControlType, Obligation, ObligationSection, RagStatus, RiskStatus,
    };

    fn risk(id: &str, links: &[&str]) -> Risk {
        Risk {
            id: RiskId::new(id),
            reference: format!("R-{id}"),
            name: format!("Risk {id}"),
            status: RiskStatus::Open,
            owner: None,
            control_links: links.iter().map(|c| ControlId::new(*c)).collect(),
            review_requested: false,
            last_reviewed: None,
            review_frequency_days: None,
            due_date: None,
            changes: Vec::new(),
        }
    }

    fn control(id: &str, outcomes: &[RagStatus]) -> Control {
        Control {
            id: ControlId::new(id),
            reference: format!("C-{id}"),
            name: format!("Control {id}"),
            control_type: ControlType::Preventive,
            is_active: true,
            test_results: outcomes
                .iter()
                .enumerate()
                .map(|(i, outcome)| ControlTestResult {
                    tested_at: Utc.with_ymd_and_hms(2026, 1, 1 + i as u32, 0, 0, 0).unwrap(),
                    outcome: *outcome,
                    notes: None,
                })
                .collect(),
            changes: Vec::new(),
        }
    }

    fn obligation(id: &str, covered: bool) -> Obligation {
        Obligation {
            id: grc_core::ObligationId::new(id),
            title: format!("Obligation {id}"),
            control_refs: if covered {
                vec![ControlId::new("c-any")]
            } else {
                Vec::new()
            },
            sections: Vec::new(),
        }
    }

    fn policy(id: &str, links: &[&str], obligations: Vec<Obligation>) -> Policy {
        Policy {
            id: PolicyId::new(id),
            reference: format!("POL-{id}"),
            name: format!("Policy {id}"),
            control_links: links.iter().map(|c| ControlId::new(*c)).collect(),
            obligations,
        }
    }

    // ── Risks with failing controls ──────────────────────────────────

    #[test]
    fn test_untested_control_counts_as_failing() {
        let risks = vec![risk("1", &["c1"])];
        let controls = vec![control("c1", &[])];
        let out = risks_with_failing_controls(&risks, &controls);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].fail_count, 1);
        assert_eq!(out[0].total_controls, 1);
    }

    #[test]
    fn test_latest_result_decides_failure() {
        let risks = vec![risk("1", &["pass", "fail"])];
        let controls = vec![
            // Failed once, passed since: not failing.
            control("pass", &[RagStatus::Red, RagStatus::Green]),
            // Passed once, failed since: failing.
            control("fail", &[RagStatus::Green, RagStatus::Red]),
        ];
        let out = risks_with_failing_controls(&risks, &controls);
        assert_eq!(out[0].fail_count, 1);
        assert_eq!(out[0].total_controls, 2);
    }

    #[test]
    fn test_amber_latest_is_not_failing() {
        let risks = vec![risk("1", &["c1"])];
        let controls = vec![control("c1", &[RagStatus::Amber])];
        assert!(risks_with_failing_controls(&risks, &controls).is_empty());
    }

    #[test]
    fn test_dangling_link_skipped_silently() {
        let risks = vec![risk("1", &["gone", "c1"])];
        let controls = vec![control("c1", &[RagStatus::Red])];
        let out = risks_with_failing_controls(&risks, &controls);
        assert_eq!(out[0].fail_count, 1);
        assert_eq!(out[0].total_controls, 1);
    }

    #[test]
    fn test_all_green_risk_excluded() {
        let risks = vec![risk("1", &["c1"])];
        let controls = vec![control("c1", &[RagStatus::Green])];
        assert!(risks_with_failing_controls(&risks, &controls).is_empty());
    }

    #[test]
    fn test_ranking_descending_with_stable_ties_and_cap() {
        let controls: Vec<Control> = (0..4).map(|i| control(&format!("c{i}"), &[])).collect();
        let risks = vec![
            risk("one", &["c0"]),
            risk("two", &["c0", "c1"]),
            risk("tie-a", &["c0", "c1", "c2"]),
            risk("tie-b", &["c1", "c2", "c3"]),
            risk("three", &["c0", "c1", "c2", "c3"]),
            risk("zero", &[]),
            risk("extra", &["c0"]),
        ];
        let out = risks_with_failing_controls(&risks, &controls);
        assert_eq!(out.len(), INSIGHT_CAP);
        let ids: Vec<_> = out.iter().map(|r| r.risk_id.as_str()).collect();
        // Descending by fail count; tie between tie-a and tie-b keeps
        // register order; the cap drops the last single-failure risk.
        assert_eq!(ids, vec!["three", "tie-a", "tie-b", "two", "one"]);
    }

    // ── Policy gaps ──────────────────────────────────────────────────

    #[test]
    fn test_scenario_one_uncovered_of_three_and_empty_policy_skipped() {
        let policies = vec![
            policy(
                "p1",
                &[],
                vec![
                    obligation("o1", false),
                    obligation("o2", true),
                    obligation("o3", true),
                ],
            ),
            policy("p2", &[], Vec::new()),
        ];
        let out = policy_gaps(&policies);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].policy_id.as_str(), "p1");
        assert_eq!(out[0].uncovered, 1);
        assert_eq!(out[0].total, 3);
    }

    #[test]
    fn test_section_coverage_counts() {
        let mut ob = obligation("o1", false);
        ob.sections = vec![ObligationSection {
            id: grc_core::ObligationId::new("o1.1"),
            title: "s".to_string(),
            control_refs: vec![ControlId::new("c1")],
        }];
        let policies = vec![policy("p1", &[], vec![ob])];
        assert!(policy_gaps(&policies).is_empty());
    }

    #[test]
    fn test_gap_ranking_by_ratio() {
        let policies = vec![
            // 1/3 uncovered.
            policy(
                "low",
                &[],
                vec![
                    obligation("a", false),
                    obligation("b", true),
                    obligation("c", true),
                ],
            ),
            // 2/2 uncovered.
            policy("high", &[], vec![obligation("d", false), obligation("e", false)]),
            // 1/2 uncovered.
            policy("mid", &[], vec![obligation("f", false), obligation("g", true)]),
        ];
        let out = policy_gaps(&policies);
        let ids: Vec<_> = out.iter().map(|p| p.policy_id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_fully_covered_policy_absent() {
        let policies = vec![policy("p1", &[], vec![obligation("o1", true)])];
        assert!(policy_gaps(&policies).is_empty());
    }

    // ── Key controls ─────────────────────────────────────────────────

    #[test]
    fn test_key_control_threshold_is_two_policies() {
        let controls = vec![control("shared", &[]), control("single", &[])];
        let policies = vec![
            policy("p1", &["shared", "single"], Vec::new()),
            policy("p2", &["shared"], Vec::new()),
        ];
        let out = key_controls(&controls, &policies);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].control_id.as_str(), "shared");
        assert_eq!(out[0].policy_count, 2);
    }

    #[test]
    fn test_key_controls_ranked_descending() {
        let controls = vec![control("a", &[]), control("b", &[])];
        let policies = vec![
            policy("p1", &["a", "b"], Vec::new()),
            policy("p2", &["a", "b"], Vec::new()),
            policy("p3", &["b"], Vec::new()),
        ];
        let out = key_controls(&controls, &policies);
        let ids: Vec<_> = out.iter().map(|c| c.control_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(out[0].policy_count, 3);
    }

    // ── has_data ─────────────────────────────────────────────────────

    #[test]
    fn test_has_data_false_when_all_lists_empty() {
        let insights = dashboard_insights(&[], &[], &[]);
        assert!(!insights.has_data);
        assert!(insights.risks_with_failing_controls.is_empty());
        assert!(insights.policy_gaps.is_empty());
        assert!(insights.key_controls.is_empty());
    }

    #[test]
    fn test_has_data_true_with_any_list() {
        let risks = vec![risk("1", &["c1"])];
        let controls = vec![control("c1", &[])];
        let insights = dashboard_insights(&risks, &controls, &[]);
        assert!(insights.has_data);
    }

    #[test]
    fn test_insights_serialize() {
        let risks = vec![risk("1", &["c1"])];
        let controls = vec![control("c1", &[])];
        let insights = dashboard_insights(&risks, &controls, &[]);
        let json = serde_json::to_value(&insights).unwrap();
        assert_eq!(json["has_data"], serde_json::json!(true));
        assert_eq!(
            json["risks_with_failing_controls"][0]["fail_count"],
            serde_json::json!(1)
        );
    }
}
