//! Quorum aggregation over a quote's sentences.

/// Number of quote sentences that must contribute:
/// `floor(sentence_count * coeff) + 1`.
pub fn quorum_size(sentence_count: usize, match_sentence_coeff: f32) -> usize {
    let required = (sentence_count as f32 * match_sentence_coeff.max(0.0)).floor();
    required as usize + 1
}

/// Fixed-size window holding the best scores seen so far, highest first.
///
/// Slots start at `0.0` and a score only enters by beating the lowest slot,
/// so slots that never get filled stay at zero and drag the mean down.
#[derive(Debug, Clone, PartialEq)]
pub struct QuorumBuffer {
    slots: Vec<f32>,
}

impl QuorumBuffer {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![0.0; size.max(1)],
        }
    }

    /// Inserts `score` if it beats the lowest slot. Returns whether it entered.
    /// Non-finite scores never enter.
    pub fn offer(&mut self, score: f32) -> bool {
        let Some(&lowest) = self.slots.last() else {
            return false;
        };
        if !score.is_finite() || score <= lowest {
            return false;
        }

        let position = self
            .slots
            .iter()
            .position(|&slot| score > slot)
            .unwrap_or(self.slots.len() - 1);
        self.slots.insert(position, score);
        self.slots.pop();
        true
    }

    pub fn mean(&self) -> f32 {
        self.slots.iter().sum::<f32>() / self.slots.len() as f32
    }

    pub fn slots(&self) -> &[f32] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
