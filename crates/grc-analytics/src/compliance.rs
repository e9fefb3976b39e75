//! # Compliance Health
//!
//! Health of the regulatory compliance position, computed only when the
//! viewer holds the compliance capability and at least one applicable
//! regulation exists. The empty-register guard matters: with zero
//! applicable regulations a percentage would be a division by zero, and
//! rendering "0% compliant" over no data is a false alarm, not a fact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::days_until;
use grc_core::CapabilitySet;
use grc_model::{ComplianceStatus, Regulation};

/// Summary of regulatory compliance health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceHealth {
    /// Number of applicable regulations.
    pub applicable: usize,
    /// Percentage of applicable regulations assessed compliant,
    /// rounded half-up.
    pub compliant_pct: u8,
    /// Non-compliant plus gap-identified regulations.
    pub gaps: usize,
    /// Applicable regulations whose assessment review date has passed.
    pub overdue_assessments: usize,
    /// Certified persons whose certification is due or lapsed, across
    /// applicable regulations.
    pub pending_certifications: usize,
}

/// Compute compliance health, or `None` when there is nothing sound to
/// report.
///
/// Returns `None` when the viewer lacks the compliance capability or
/// when no applicable regulation exists.
pub fn compliance_health(
    regulations: &[Regulation],
    capabilities: &CapabilitySet,
    now: DateTime<Utc>,
) -> Option<ComplianceHealth> {
    if !capabilities.view_compliance {
        return None;
    }

    let applicable: Vec<&Regulation> = regulations.iter().filter(|r| r.applicable).collect();
    if applicable.is_empty() {
        return None;
    }

    let compliant = applicable
        .iter()
        .filter(|r| r.compliance_status == ComplianceStatus::Compliant)
        .count();
    let gaps = applicable
        .iter()
        .filter(|r| r.compliance_status.is_gap())
        .count();
    let overdue_assessments = applicable
        .iter()
        .filter(|r| matches!(days_until(r.next_review_date, now), Some(d) if d <= 0))
        .count();
    let pending_certifications = applicable
        .iter()
        .flat_map(|r| r.certified_persons.iter())
        .filter(|p| p.status.needs_attention())
        .count();

    Some(ComplianceHealth {
        applicable: applicable.len(),
        compliant_pct: percent_rounded(compliant, applicable.len()),
        gaps,
        overdue_assessments,
        pending_certifications,
    })
}

/// Integer percentage with half-up rounding. Caller guarantees a
/// non-zero denominator.
fn percent_rounded(numerator: usize, denominator: usize) -> u8 {
    ((numerator * 200 + denominator) / (denominator * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use grc_core::RegulationId;
    use grc_model::{CertificationStatus, CertifiedPerson};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    fn all_caps() -> CapabilitySet {
        CapabilitySet {
            view_compliance: true,
            ..CapabilitySet::default()
        }
    }

    fn regulation(id: &str, applicable: bool, status: ComplianceStatus) -> Regulation {
        Regulation {
            id: RegulationId::new(id),
            reference: format!("REG-{id}"),
            name: format!("Regulation {id}"),
            applicable,
            compliance_status: status,
            next_review_date: None,
            certified_persons: Vec::new(),
        }
    }

    #[test]
    fn test_no_capability_yields_none() {
        let regs = vec![regulation("1", true, ComplianceStatus::Compliant)];
        assert_eq!(
            compliance_health(&regs, &CapabilitySet::default(), now()),
            None
        );
    }

    #[test]
    fn test_zero_applicable_regulations_yields_none_not_zero_pct() {
        let regs = vec![regulation("1", false, ComplianceStatus::NonCompliant)];
        assert_eq!(compliance_health(&regs, &all_caps(), now()), None);
        assert_eq!(compliance_health(&[], &all_caps(), now()), None);
    }

    #[test]
    fn test_compliant_pct_rounds_half_up() {
        let regs = vec![
            regulation("1", true, ComplianceStatus::Compliant),
            regulation("2", true, ComplianceStatus::Compliant),
            regulation("3", true, ComplianceStatus::NonCompliant),
        ];
        let health = compliance_health(&regs, &all_caps(), now()).unwrap();
        // 2/3 = 66.67 → 67.
        assert_eq!(health.compliant_pct, 67);

        let regs = vec![
            regulation("1", true, ComplianceStatus::Compliant),
            regulation("2", true, ComplianceStatus::UnderReview),
        ];
        let health = compliance_health(&regs, &all_caps(), now()).unwrap();
        assert_eq!(health.compliant_pct, 50);
    }

    #[test]
    fn test_gaps_counts_both_gap_statuses() {
        let regs = vec![
            regulation("1", true, ComplianceStatus::NonCompliant),
            regulation("2", true, ComplianceStatus::GapIdentified),
            regulation("3", true, ComplianceStatus::UnderReview),
            regulation("4", true, ComplianceStatus::Compliant),
        ];
        let health = compliance_health(&regs, &all_caps(), now()).unwrap();
        assert_eq!(health.gaps, 2);
    }

    #[test]
    fn test_overdue_assessments_ignores_inapplicable() {
        let mut overdue = regulation("1", true, ComplianceStatus::Compliant);
        overdue.next_review_date = Some(now() - Duration::days(10));
        let mut future = regulation("2", true, ComplianceStatus::Compliant);
        future.next_review_date = Some(now() + Duration::days(10));
        let mut inapplicable = regulation("3", false, ComplianceStatus::Compliant);
        inapplicable.next_review_date = Some(now() - Duration::days(10));

        let regs = vec![overdue, future, inapplicable];
        let health = compliance_health(&regs, &all_caps(), now()).unwrap();
        assert_eq!(health.overdue_assessments, 1);
        assert_eq!(health.applicable, 2);
    }

    #[test]
    fn test_pending_certifications_counts_due_and_overdue() {
        let mut reg = regulation("1", true, ComplianceStatus::Compliant);
        reg.certified_persons = vec![
            CertifiedPerson {
                name: "A".to_string(),
                role_title: "SMF16".to_string(),
                status: CertificationStatus::Current,
            },
            CertifiedPerson {
                name: "B".to_string(),
                role_title: "SMF17".to_string(),
                status: CertificationStatus::Due,
            },
            CertifiedPerson {
                name: "C".to_string(),
                role_title: "SMF1".to_string(),
                status: CertificationStatus::Overdue,
            },
        ];
        let health = compliance_health(&[reg], &all_caps(), now()).unwrap();
        assert_eq!(health.pending_certifications, 2);
    }

    #[test]
    fn test_fully_compliant_is_one_hundred() {
        let regs = vec![
            regulation("1", true, ComplianceStatus::Compliant),
            regulation("2", true, ComplianceStatus::Compliant),
        ];
        let health = compliance_health(&regs, &all_caps(), now()).unwrap();
        assert_eq!(health.compliant_pct, 100);
        assert_eq!(health.gaps, 0);
    }
}
