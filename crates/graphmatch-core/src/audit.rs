//! Invariant diagnostics for matching state.
//!
//! The store never checks its own invariants on the hot path. Callers that
//! want to know *why* a matching is inconsistent opt in through
//! [`InvariantAudit`], either by calling it directly or by enabling
//! `audit_on_augment` in the store's config.

use std::fmt;

use graphmatch_types::{GraphMatchError, Result, Vertex};

use crate::MatchingStore;

/// One broken matching invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `vertex` names `partner`, but `partner` names someone else or nobody.
    Asymmetric {
        vertex: Vertex,
        partner: Vertex,
        partner_of_partner: Option<Vertex>,
    },
    /// `vertex` is matched to itself.
    SelfLoop { vertex: Vertex },
    /// An odd number of vertices have a partner, so `size()` is truncated.
    OddMatchedCount { count: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asymmetric {
                vertex,
                partner,
                partner_of_partner: Some(other),
            } => write!(
                f,
                "vertex {vertex} is matched to {partner}, but {partner} is matched to {other}"
            ),
            Self::Asymmetric {
                vertex,
                partner,
                partner_of_partner: None,
            } => write!(
                f,
                "vertex {vertex} is matched to {partner}, but {partner} is unmatched"
            ),
            Self::SelfLoop { vertex } => write!(f, "vertex {vertex} is matched to itself"),
            Self::OddMatchedCount { count } => {
                write!(f, "{count} matched vertices cannot pair up")
            }
        }
    }
}

/// Anything that can describe how it breaks the matching invariants.
pub trait InvariantAudit {
    /// Every violation found, in ascending vertex order.
    fn violations(&self) -> Vec<InvariantViolation>;

    fn is_consistent(&self) -> bool {
        self.violations().is_empty()
    }

    /// `GM_ERR_200` listing every violation, or `Ok` if there are none.
    fn ensure_consistent(&self) -> Result<()> {
        let violations = self.violations();
        if violations.is_empty() {
            return Ok(());
        }
        let reason = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(GraphMatchError::InvariantViolation { reason })
    }
}

impl InvariantAudit for MatchingStore {
    fn violations(&self) -> Vec<InvariantViolation> {
        let mut found = Vec::new();
        let mut count = 0usize;
        for (vertex, partner) in self.matched() {
            count += 1;
            if vertex == partner {
                found.push(InvariantViolation::SelfLoop { vertex });
                continue;
            }
            let partner_of_partner = self.partner(partner);
            if partner_of_partner != Some(vertex) {
                found.push(InvariantViolation::Asymmetric {
                    vertex,
                    partner,
                    partner_of_partner,
                });
            }
        }
        if count % 2 == 1 {
            found.push(InvariantViolation::OddMatchedCount { count });
        }
        found
    }
}

/// Emit one `warn!` per violation of `subject`. Returns how many there were.
pub fn log_violations<A: InvariantAudit + ?Sized>(subject: &A) -> usize {
    let violations = subject.violations();
    for violation in &violations {
        tracing::warn!(%violation, "Matching invariant violated");
    }
    violations.len()
}

#[cfg(test)]
mod tests {
    use graphmatch_types::AlternatingPath;

    use super::*;

    #[test]
    fn consistent_store_has_no_violations() {
        let mut m = MatchingStore::from_edges([(0, 1), (2, 3)]);
        m.augment(&AlternatingPath::from([4, 3, 2, 5])).unwrap();
        assert!(m.is_consistent());
        assert!(m.ensure_consistent().is_ok());
        assert_eq!(log_violations(&m), 0);
    }

    #[test]
    fn overwrite_leaves_asymmetric_pair() {
        let mut m = MatchingStore::new();
        m.add((1, 2));
        m.add((1, 3));

        let violations = m.violations();
        assert_eq!(
            violations,
            vec![
                InvariantViolation::Asymmetric {
                    vertex: 2,
                    partner: 1,
                    partner_of_partner: Some(3),
                },
                InvariantViolation::OddMatchedCount { count: 3 },
            ]
        );
        assert_eq!(log_violations(&m), 2);
    }

    #[test]
    fn half_deleted_pair_names_unmatched_partner() {
        let mut m = MatchingStore::from_edges([(4, 6)]);
        // Clearing (4, 5) wipes 4 but not 6.
        m.delete((4, 5));
        let violations = m.violations();
        assert!(violations.contains(&InvariantViolation::Asymmetric {
            vertex: 6,
            partner: 4,
            partner_of_partner: None,
        }));
    }

    #[test]
    fn self_loop_is_reported() {
        let m = MatchingStore::from_edges([(3, 3)]);
        let violations = m.violations();
        assert!(violations.contains(&InvariantViolation::SelfLoop { vertex: 3 }));
        assert!(violations.contains(&InvariantViolation::OddMatchedCount { count: 1 }));
    }

    #[test]
    fn ensure_consistent_joins_reasons() {
        let mut m = MatchingStore::new();
        m.add((1, 2));
        m.add((1, 3));
        let err = m.ensure_consistent().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("GM_ERR_200"), "Got: {msg}");
        assert!(msg.contains("vertex 2 is matched to 1, but 1 is matched to 3"));
        assert!(msg.contains("3 matched vertices cannot pair up"));
    }

    #[test]
    fn display_of_each_violation() {
        assert_eq!(
            InvariantViolation::SelfLoop { vertex: 9 }.to_string(),
            "vertex 9 is matched to itself"
        );
        assert_eq!(
            InvariantViolation::Asymmetric {
                vertex: 1,
                partner: 2,
                partner_of_partner: None,
            }
            .to_string(),
            "vertex 1 is matched to 2, but 2 is unmatched"
        );
    }
}
