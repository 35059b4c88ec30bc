use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Opacity below which a series is treated as invisible while fading.
pub const VISIBLE_OPACITY_THRESHOLD: f64 = 0.05;

/// Per-view hidden flags indexed by series position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibilityVector {
    hidden: SmallVec<[bool; 8]>,
}

impl VisibilityVector {
    /// All `series_count` series visible.
    #[must_use]
    pub fn all_visible(series_count: usize) -> Self {
        Self {
            hidden: SmallVec::from_elem(false, series_count),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.hidden.get(index).is_some_and(|hidden| !hidden)
    }

    #[must_use]
    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(true)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|hidden| !**hidden).count()
    }

    /// Index of the first visible series.
    #[must_use]
    pub fn first_visible(&self) -> Option<usize> {
        self.hidden.iter().position(|hidden| !hidden)
    }

    /// `0` for hidden and `1` for visible series.
    #[must_use]
    pub fn opacities(&self) -> Vec<f64> {
        self.hidden
            .iter()
            .map(|hidden| if *hidden { 0.0 } else { 1.0 })
            .collect()
    }

    /// Sets one flag and returns the opacity endpoints of the change.
    pub fn set_hidden(&mut self, index: usize, hidden: bool) -> ChartResult<VisibilityTransition> {
        let len = self.hidden.len();
        let from = self.opacities();
        let flag = self
            .hidden
            .get_mut(index)
            .ok_or(ChartError::SeriesIndexOutOfRange { index, len })?;
        *flag = hidden;
        Ok(VisibilityTransition {
            from,
            to: self.opacities(),
        })
    }
}

/// Start and end opacity per series for one visibility fade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityTransition {
    pub from: Vec<f64>,
    pub to: Vec<f64>,
}

impl VisibilityTransition {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_index_is_reported_as_hidden() {
        let visibility = VisibilityVector::all_visible(2);
        assert!(visibility.is_hidden(5));
        assert!(!visibility.is_visible(5));
    }

    #[test]
    fn set_hidden_reports_endpoints() {
        let mut visibility = VisibilityVector::all_visible(3);
        let transition = visibility.set_hidden(1, true).expect("valid index");
        assert_eq!(transition.from, vec![1.0, 1.0, 1.0]);
        assert_eq!(transition.to, vec![1.0, 0.0, 1.0]);
        assert_eq!(visibility.first_visible(), Some(0));
    }
}
