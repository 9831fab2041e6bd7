//! Positions occupied by the moving body, oldest first.

use super::heading::Heading;
use crate::games::grid::Point;
use std::collections::VecDeque;

/// Ordered positions occupied in motion mode.
///
/// The head is the most recently added position and sits at the back;
/// the tail is the oldest and sits at the front. Moving pushes a new head
/// and drops the tail, so the length never changes. Growing would skip
/// the tail drop; nothing in the engine grows the body yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    segments: VecDeque<Point>,
}

impl Body {
    /// Lays out `length` segments ending at `head`, trailing `step` apart
    /// opposite to `heading`. A length of zero is treated as one.
    /// Segments whose coordinates would not fit in `i32` are left out.
    pub fn new(head: Point, heading: Heading, length: usize, step: i32) -> Self {
        let (dx, dy) = heading.opposite().delta();
        let segments = (0..length.max(1))
            .rev()
            .filter_map(|back| {
                let distance = step.checked_mul(i32::try_from(back).ok()?)?;
                head.moved_by(dx.checked_mul(distance)?, dy.checked_mul(distance)?)
            })
            .collect();
        Self { segments }
    }

    /// Get the head position.
    pub fn head(&self) -> Point {
        // Never empty: constructed with at least one segment and
        // `advance` pushes before it pops.
        self.segments.back().copied().unwrap_or(Point::new(0, 0))
    }

    /// Get the tail position.
    pub fn tail(&self) -> Point {
        self.segments.front().copied().unwrap_or(Point::new(0, 0))
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Checks if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Positions from tail to head.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter()
    }

    /// Moves the head to `new_head` and drops the tail.
    pub fn advance(&mut self, new_head: Point) {
        self.segments.push_back(new_head);
        self.segments.pop_front();
    }

    /// Copies the positions, tail first.
    pub fn to_vec(&self) -> Vec<Point> {
        self.segments.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_layout() {
        let body = Body::new(Point::new(150, 100), Heading::Right, 3, 50);
        assert_eq!(body.len(), 3);
        assert_eq!(body.head(), Point::new(150, 100));
        assert_eq!(body.tail(), Point::new(50, 100));
        assert_eq!(
            body.to_vec(),
            vec![Point::new(50, 100), Point::new(100, 100), Point::new(150, 100)]
        );
    }

    #[test]
    fn test_zero_length_is_one_segment() {
        let body = Body::new(Point::new(0, 0), Heading::Up, 0, 50);
        assert_eq!(body.len(), 1);
        assert!(!body.is_empty());
    }

    #[test]
    fn test_advance_translates() {
        let mut body = Body::new(Point::new(100, 0), Heading::Right, 2, 50);
        body.advance(Point::new(100, 50));
        assert_eq!(body.len(), 2);
        assert_eq!(body.head(), Point::new(100, 50));
        assert_eq!(body.tail(), Point::new(100, 0));
        assert!(body.iter().all(|p| *p != Point::new(50, 0)));
    }
}
