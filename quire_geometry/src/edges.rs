// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge values for boxes.

/// One side of an axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// The `y0` side.
    Top,
    /// The `x1` side.
    Right,
    /// The `y1` side.
    Bottom,
    /// The `x0` side.
    Left,
}

impl Edge {
    /// All edges in clockwise order starting from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The edge on the opposite side of the box.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

/// A value for each of the four edges of a box.
///
/// Used for margins and paddings (`Edges<f64>`), borders, and the stroke ids
/// a region was cut from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges<T> {
    /// Value for the top edge.
    pub top: T,
    /// Value for the right edge.
    pub right: T,
    /// Value for the bottom edge.
    pub bottom: T,
    /// Value for the left edge.
    pub left: T,
}

impl<T: Clone> Edges<T> {
    /// The same value on every edge.
    pub fn all(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }
}

impl<T> Edges<T> {
    /// Create from explicit values, clockwise from the top.
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Borrow the value of one edge.
    pub const fn get(&self, edge: Edge) -> &T {
        match edge {
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
        }
    }

    /// Mutably borrow the value of one edge.
    pub fn get_mut(&mut self, edge: Edge) -> &mut T {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    /// Return a copy with one edge replaced.
    #[must_use]
    pub fn with(mut self, edge: Edge, value: T) -> Self {
        *self.get_mut(edge) = value;
        self
    }

    /// Iterate `(edge, value)` pairs clockwise from the top.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &T)> {
        Edge::ALL.into_iter().map(move |edge| (edge, self.get(edge)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_replaces_single_edge() {
        let edges = Edges::all(0.0).with(Edge::Left, 4.0);
        assert_eq!(edges, Edges::new(0.0, 0.0, 0.0, 4.0));
        assert_eq!(*edges.get(Edge::Left), 4.0);
    }

    #[test]
    fn iter_is_clockwise() {
        let edges = Edges::new(1, 2, 3, 4);
        let mut order = [0; 4];
        for (slot, (_, value)) in order.iter_mut().zip(edges.iter()) {
            *slot = *value;
        }
        assert_eq!(order, [1, 2, 3, 4]);
        assert_eq!(Edge::Top.opposite(), Edge::Bottom);
    }
}
