//! Pairing edge crossings into segments.
//!
//! Crossings for one level are found by visiting a cell's edges in a fixed
//! order (left, top, right, bottom). Consecutive crossings are joined: the
//! first starts a segment, the second ends it, and the search starts over.
//!
//! A saddle cell has all four edges crossed by the same level, so there are
//! two ways to join them. [`SaddleResolution`] chooses between the legacy
//! visit-order pairing and a centre-value test.

use serde::{Deserialize, Serialize};
use topo_common::Coordinate;

use crate::cell::{Corners, Segment};

/// Where the pairing scan is for the current level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchState {
    /// Waiting for the crossing that starts a segment.
    Start,
    /// Holding a start crossing, waiting for the one that ends it.
    End(Coordinate),
}

/// Joins crossings for a single contour level in the order they arrive.
#[derive(Debug, Clone)]
pub struct CrossingPairer {
    level: i32,
    state: SearchState,
    crossings: usize,
}

impl CrossingPairer {
    pub fn new(level: i32) -> Self {
        Self {
            level,
            state: SearchState::Start,
            crossings: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Feed the next crossing; returns a segment every second call.
    pub fn push(&mut self, crossing: Coordinate) -> Option<Segment> {
        self.crossings += 1;
        match self.state {
            SearchState::Start => {
                self.state = SearchState::End(crossing);
                None
            }
            SearchState::End(start) => {
                self.state = SearchState::Start;
                Some(Segment {
                    level: self.level,
                    start,
                    end: crossing,
                })
            }
        }
    }

    /// Close the scan. Fails with the number of crossings seen if one was
    /// left without a partner.
    pub fn finish(self) -> Result<(), usize> {
        match self.state {
            SearchState::Start => Ok(()),
            SearchState::End(_) => Err(self.crossings),
        }
    }
}

/// How four crossings of one level in a saddle cell are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaddleResolution {
    /// Join strictly in visit order: (left, top) and (right, bottom).
    ///
    /// Compatible with existing output, but can link the wrong crossings
    /// when the cell centre lies on the other side of the level.
    #[default]
    #[serde(alias = "legacy")]
    VisitOrder,
    /// Compare the mean of the four corners with the band midpoint
    /// `lower + 0.5` and keep the centre connected to the corners on the
    /// same side. A centre exactly on the midpoint counts as above.
    #[serde(alias = "center")]
    CenterValue,
}

impl SaddleResolution {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "visit_order" | "visit-order" | "legacy" => Some(Self::VisitOrder),
            "center_value" | "center-value" | "center" => Some(Self::CenterValue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisitOrder => "visit_order",
            Self::CenterValue => "center_value",
        }
    }

    /// Join the crossings of level `lower`, given in visit order.
    ///
    /// Fails with the crossing count when it is odd.
    pub fn pair(
        &self,
        corners: &Corners,
        lower: i32,
        crossings: &[Coordinate],
    ) -> Result<Vec<Segment>, usize> {
        if let (Self::CenterValue, &[left, top, right, bottom]) = (self, crossings) {
            let center_above = corners.center() >= lower as f64 + 0.5;
            let top_left_above = corners.top_left > lower;

            // The diagonal through the centre stays connected; the two
            // corners on the other side are each cut off by a segment.
            if center_above == top_left_above {
                tracing::trace!(level = lower, "saddle joined top-right / left-bottom");
                return Ok(vec![
                    Segment {
                        level: lower,
                        start: top,
                        end: right,
                    },
                    Segment {
                        level: lower,
                        start: left,
                        end: bottom,
                    },
                ]);
            }
            tracing::trace!(level = lower, "saddle joined in visit order");
        }

        let mut pairer = CrossingPairer::new(lower);
        let segments = crossings.iter().filter_map(|&c| pairer.push(c)).collect();
        pairer.finish()?;
        Ok(segments)
    }
}
