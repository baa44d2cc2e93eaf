use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head first. The deque carries the segment order, the set
/// answers occupancy queries in O(1); the two are kept in lockstep.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    segments: VecDeque<Point>,
    occupied: HashSet<Point>,
}

impl SnakeBody {
    pub fn single(head: Point) -> Self {
        let mut segments = VecDeque::new();
        let mut occupied = HashSet::new();
        segments.push_back(head);
        occupied.insert(head);
        Self { segments, occupied }
    }

    pub fn head(&self) -> Point {
        *self.segments.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, cell: Point) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn push_head(&mut self, cell: Point) {
        self.segments.push_front(cell);
        self.occupied.insert(cell);
    }

    pub fn pop_tail(&mut self) {
        let tail = self.segments.pop_back().expect("snake body is never empty");
        self.occupied.remove(&tail);
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    #[cfg(test)]
    pub fn from_cells(cells: Vec<Point>) -> Self {
        assert!(!cells.is_empty(), "snake body is never empty");
        let mut segments = VecDeque::new();
        let mut occupied = HashSet::new();
        for cell in cells {
            segments.push_back(cell);
            occupied.insert(cell);
        }
        Self { segments, occupied }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_keep_order_and_occupancy() {
        let mut body = SnakeBody::single(Point::new(100, 100));
        body.push_head(Point::new(120, 100));

        assert_eq!(body.head(), Point::new(120, 100));
        assert_eq!(body.len(), 2);
        assert!(body.contains(Point::new(100, 100)));

        body.pop_tail();
        assert_eq!(body.len(), 1);
        assert!(!body.contains(Point::new(100, 100)));
        assert!(body.contains(Point::new(120, 100)));
    }

    #[test]
    fn test_from_cells_is_head_first() {
        let body = SnakeBody::from_cells(vec![Point::new(40, 0), Point::new(20, 0)]);
        assert_eq!(body.head(), Point::new(40, 0));
        assert_eq!(
            body.segments().collect::<Vec<_>>(),
            vec![Point::new(40, 0), Point::new(20, 0)]
        );
    }
}
