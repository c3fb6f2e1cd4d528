/// A cell on the unbounded integer grid. Right is `+x`, up is `+y`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    pub fn left(self) -> Point {
        Point { x: self.x - 1, ..self }
    }

    pub fn right(self) -> Point {
        Point { x: self.x + 1, ..self }
    }

    pub fn up(self) -> Point {
        Point { y: self.y + 1, ..self }
    }

    pub fn down(self) -> Point {
        Point { y: self.y - 1, ..self }
    }

    /// The four orthogonal neighbours.
    pub fn crosswalk(self) -> [Point; 4] {
        [self.left(), self.right(), self.down(), self.up()]
    }

    /// The four diagonal neighbours.
    pub fn diagonals(self) -> [Point; 4] {
        [
            self.right().up(),
            self.left().up(),
            self.right().down(),
            self.left().down(),
        ]
    }

    /// True when `other` is an orthogonal neighbour, or two cells away along
    /// a single axis with one empty cell in between.
    pub fn on_same_vertical_or_horizontal(self, other: Point) -> bool {
        self.crosswalk().contains(&other)
            || [
                self.right().right(),
                self.left().left(),
                self.up().up(),
                self.down().down(),
            ]
            .contains(&other)
    }

    /// Euclidean distance. Only used to rank candidate moves.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }

    /// Chebyshev distance of at most one.
    pub fn is_touching(self, other: Point) -> bool {
        self == other || self.crosswalk().contains(&other) || self.diagonals().contains(&other)
    }

    /// The candidate closest to `target`; the first one wins a tie.
    pub fn nearest_to<I>(candidates: I, target: Point) -> Option<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        candidates
            .into_iter()
            .map(|p| (p, p.distance_to(target)))
            .reduce(|best, next| if next.1 < best.1 { next } else { best })
            .map(|(p, _)| p)
    }

    /// Where a knot at `self` moves to so that it touches `leader` again, or
    /// `None` when it already does.
    pub fn follow(self, leader: Point) -> Option<Point> {
        if self.is_touching(leader) {
            None
        } else if self.on_same_vertical_or_horizontal(leader) {
            Point::nearest_to(self.crosswalk(), leader)
        } else {
            Point::nearest_to(self.diagonals(), leader)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;

    fn grid(radius: i64) -> impl Iterator<Item = Point> + Clone {
        (-radius..=radius)
            .cartesian_product(-radius..=radius)
            .map(|(x, y)| Point::new(x, y))
    }

    #[test]
    fn test_unit_moves() {
        let p = Point::new(3, -2);

        assert_eq!(p.left(), Point::new(2, -2));
        assert_eq!(p.right(), Point::new(4, -2));
        assert_eq!(p.up(), Point::new(3, -1));
        assert_eq!(p.down(), Point::new(3, -3));
        assert_eq!(p.left().right(), p);
        assert_eq!(p.up().down(), p);
    }

    #[test]
    fn test_neighbours() {
        let crosswalk: HashSet<_> = Point::ORIGIN.crosswalk().into_iter().collect();
        let diagonals: HashSet<_> = Point::ORIGIN.diagonals().into_iter().collect();

        assert_eq!(
            crosswalk,
            [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect()
        );
        assert_eq!(
            diagonals,
            [(1, 1), (-1, 1), (1, -1), (-1, -1)]
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect()
        );
        assert!(crosswalk.is_disjoint(&diagonals));
    }

    #[test]
    fn test_on_same_vertical_or_horizontal() {
        let p = Point::new(1, 1);

        assert!(p.on_same_vertical_or_horizontal(Point::new(3, 1)));
        assert!(p.on_same_vertical_or_horizontal(Point::new(1, -1)));
        assert!(p.on_same_vertical_or_horizontal(Point::new(2, 1)));
        assert!(!p.on_same_vertical_or_horizontal(p));
        assert!(!p.on_same_vertical_or_horizontal(Point::new(4, 1)));
        assert!(!p.on_same_vertical_or_horizontal(Point::new(3, 2)));
    }

    #[test]
    fn test_distance_to() {
        assert_eq!(Point::ORIGIN.distance_to(Point::new(3, 4)), 5.0);
        assert_eq!(Point::new(-1, -1).distance_to(Point::new(-1, -1)), 0.0);
    }

    #[test]
    fn test_is_touching_matches_chebyshev() {
        for (p, q) in grid(2).cartesian_product(grid(2)) {
            let chebyshev = i64::max((p.x - q.x).abs(), (p.y - q.y).abs());

            assert_eq!(p.is_touching(q), chebyshev <= 1, "{p:?} {q:?}");
            assert_eq!(p.is_touching(q), q.is_touching(p));
        }

        for p in grid(3) {
            assert!(p.is_touching(p));
        }
    }

    #[test]
    fn test_nearest_to() {
        let target = Point::new(2, 0);

        assert_eq!(
            Point::nearest_to(Point::ORIGIN.crosswalk(), target),
            Some(Point::new(1, 0))
        );
        assert_eq!(Point::nearest_to(std::iter::empty(), target), None);
    }

    #[test]
    fn test_follow() {
        let tail = Point::ORIGIN;

        assert_eq!(tail.follow(Point::new(1, 1)), None);
        assert_eq!(tail.follow(Point::new(0, -2)), Some(Point::new(0, -1)));
        assert_eq!(tail.follow(Point::new(2, 1)), Some(Point::new(1, 1)));
        assert_eq!(tail.follow(Point::new(-1, 2)), Some(Point::new(-1, 1)));
        assert_eq!(tail.follow(Point::new(-2, -2)), Some(Point::new(-1, -1)));
    }

    #[test]
    fn test_follow_restores_touching() {
        // Every leader position reachable one step after the pair was touching.
        for (leader, tail) in grid(2).cartesian_product(grid(1)) {
            let moved_from = [leader.left(), leader.right(), leader.up(), leader.down()]
                .into_iter()
                .chain(leader.diagonals())
                .any(|from| from.is_touching(tail));
            if !moved_from {
                continue;
            }

            let next = tail.follow(leader).unwrap_or(tail);
            assert!(next.is_touching(leader), "{tail:?} -> {next:?} {leader:?}");
            assert_eq!(next.follow(leader), None);
        }
    }
}
