//! Conversion to and from Gabow's partner-array layout.
//!
//! Gabow (1976) stores a matching as one array slot per vertex holding the
//! partner's number or an "unmatched" marker. Here the marker is `None`.
//! His original numbering starts at 1 and uses `0` as the marker; that
//! layout is accepted through [`MatchingStore::from_gabow_one_based`].

use graphmatch_types::{Edge, GraphMatchError, Result, Vertex, constants};

use crate::MatchingStore;

impl MatchingStore {
    /// Build a matching from a partner array.
    ///
    /// Each reciprocal pair `mate[i] == Some(j)`, `mate[j] == Some(i)` is
    /// added once. Entries whose partner does not point back are skipped
    /// with a warning.
    pub fn from_gabow(mate: &[Option<Vertex>]) -> Self {
        let mut store = Self::new();
        for (ix, &partner) in mate.iter().enumerate() {
            let Some(partner) = partner else { continue };
            if mate.get(partner).copied().flatten() != Some(ix) {
                tracing::warn!(
                    vertex = ix,
                    partner,
                    "Skipping one-sided Gabow entry"
                );
                continue;
            }
            if ix <= partner {
                store.add(Edge(partner, ix));
            }
        }
        store
    }

    /// Like [`from_gabow`](Self::from_gabow), but a one-sided entry is an
    /// error instead of a warning.
    pub fn try_from_gabow(mate: &[Option<Vertex>]) -> Result<Self> {
        for (ix, &partner) in mate.iter().enumerate() {
            let Some(partner) = partner else { continue };
            if mate.get(partner).copied().flatten() != Some(ix) {
                return Err(GraphMatchError::InconsistentGabowArray { index: ix, partner });
            }
        }
        Ok(Self::from_gabow(mate))
    }

    /// Build a matching from Gabow's 1-based array, where slot 0 is unused
    /// and a `0` value means unmatched. Vertex numbers are kept as given.
    pub fn from_gabow_one_based(mate: &[usize]) -> Self {
        let mate: Vec<Option<Vertex>> = mate
            .iter()
            .enumerate()
            .map(|(ix, &partner)| (ix != 0 && partner != 0).then_some(partner))
            .collect();
        Self::from_gabow(&mate)
    }

    /// Export as a partner array, one slot per vertex up to the highest
    /// matched vertex.
    ///
    /// The array is dense, so matchings whose highest vertex is at or above
    /// `constants::MAX_GABOW_VERTICES` are refused with `GM_ERR_202`.
    pub fn to_gabow(&self) -> Result<Vec<Option<Vertex>>> {
        let Some((highest, _)) = self.matched().last() else {
            return Ok(Vec::new());
        };
        if highest >= constants::MAX_GABOW_VERTICES {
            return Err(GraphMatchError::GabowArrayTooLarge { highest });
        }
        Ok((0..=highest).map(|v| self.partner(v)).collect())
    }
}
