// RevealSet
//
// fade-in state of a fixed set of page regions.  regions start hidden and are
// revealed once their top edge comes within `margin` of the viewport bottom.
// nothing is ever hidden again, so re-evaluating is always safe
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        RevealSet {
            revealed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    // regions register as they mount, so the set only ever grows
    pub fn ensure_len(&mut self, len: usize) {
        if self.revealed.len() < len {
            self.revealed.resize(len, false);
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    // tops are viewport-relative (bounding rect) and positionally matched to
    // the regions; a None top means the region is not mounted.  returns true if
    // anything changed
    pub fn evaluate(&mut self, tops: &[Option<f64>], viewport_height: f64, margin: f64) -> bool {
        let mut changed = false;

        for (revealed, top) in self.revealed.iter_mut().zip(tops) {
            if let Some(top) = top {
                if !*revealed && *top < viewport_height - margin {
                    *revealed = true;
                    changed = true;
                }
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_within_margin_of_viewport_bottom() {
        let mut set = RevealSet::new(3);

        let changed = set.evaluate(&[Some(100.0), Some(699.0), Some(700.0)], 800.0, 100.0);

        assert!(changed);
        assert!(set.is_revealed(0));
        assert!(set.is_revealed(1));
        assert!(!set.is_revealed(2));
    }

    #[test]
    fn reveal_is_sticky_and_idempotent() {
        let mut set = RevealSet::new(1);

        assert!(set.evaluate(&[Some(10.0)], 800.0, 100.0));
        assert!(!set.evaluate(&[Some(10.0)], 800.0, 100.0));
        assert!(!set.evaluate(&[Some(5000.0)], 800.0, 100.0));
        assert!(set.is_revealed(0));
    }

    #[test]
    fn growing_keeps_existing_state() {
        let mut set = RevealSet::new(1);
        set.evaluate(&[Some(0.0)], 800.0, 100.0);

        set.ensure_len(3);
        set.ensure_len(2);

        assert_eq!(set.len(), 3);
        assert!(set.is_revealed(0));
        assert!(!set.is_revealed(2));
    }

    #[test]
    fn unmounted_regions_stay_hidden() {
        let mut set = RevealSet::new(2);

        set.evaluate(&[None, Some(0.0)], 800.0, 100.0);

        assert!(!set.is_revealed(0));
        assert!(set.is_revealed(1));
        assert!(!set.is_revealed(7));
    }
}
