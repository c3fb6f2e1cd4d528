use std::collections::HashSet;

use itertools::Itertools;
use tracing::{debug, info, trace};

use crate::command::{Command, Direction};
use crate::point::Point;
use crate::{Error, Result};

/// One link of a [`Chain`]. Only the last knot keeps a record of where it has
/// been.
#[derive(Clone, Debug)]
pub struct Knot {
    position: Point,
    visited: Option<HashSet<Point>>,
}

impl Knot {
    fn untracked() -> Knot {
        Knot {
            position: Point::ORIGIN,
            visited: None,
        }
    }

    fn tracked() -> Knot {
        Knot {
            position: Point::ORIGIN,
            visited: Some(HashSet::from([Point::ORIGIN])),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn visited(&self) -> Option<&HashSet<Point>> {
        self.visited.as_ref()
    }

    /// Moves the knot and, if it is tracked, records the new cell.
    fn move_to(&mut self, position: Point) {
        self.position = position;
        if let Some(visited) = &mut self.visited {
            visited.insert(position);
        }
    }

    /// Head move: exactly one cell in `direction`.
    pub fn step(&mut self, direction: Direction) {
        self.move_to(direction.apply(self.position));
    }

    /// Follower move: catch up with `leader` if no longer touching it.
    pub fn follow(&mut self, leader: Point) {
        if let Some(next) = self.position.follow(leader) {
            self.move_to(next);
        }
    }
}

/// The head knot followed by its trailing knots, head first.
#[derive(Clone, Debug)]
pub struct Chain {
    knots: Vec<Knot>,
}

impl Chain {
    pub fn new(len: usize) -> Result<Chain> {
        if len < 2 {
            return Err(Error::ChainTooShort(len));
        }

        let knots = std::iter::repeat(Knot::untracked())
            .take(len - 1)
            .chain(std::iter::once(Knot::tracked()))
            .collect();

        Ok(Chain { knots })
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn head(&self) -> &Knot {
        &self.knots[0]
    }

    pub fn tail(&self) -> &Knot {
        &self.knots[self.knots.len() - 1]
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.knots.iter().map(Knot::position)
    }

    /// True when every knot touches the one in front of it.
    pub fn is_taut(&self) -> bool {
        self.positions()
            .tuple_windows()
            .all(|(leader, follower)| leader.is_touching(follower))
    }

    /// Moves the head one cell, then lets each follower catch up in order.
    pub fn step(&mut self, direction: Direction) {
        let head = &mut self.knots[0];
        head.step(direction);
        let mut prev = head.position();

        for knot in self.knots[1..].iter_mut() {
            knot.follow(prev);
            prev = knot.position();
        }

        trace!(?direction, head = ?self.head().position(), tail = ?prev, "step");
        debug_assert!(self.is_taut(), "chain came apart: {:?}", self.knots);
    }

    pub fn apply(&mut self, command: &Command) {
        for _ in 0..command.count {
            self.step(command.direction);
        }

        debug!(
            direction = ?command.direction,
            count = command.count,
            head = ?self.head().position(),
            tail = ?self.tail().position(),
            "applied command"
        );
    }

    /// Parses one `<direction> <count>` line and applies it. Nothing moves if
    /// the line is rejected.
    pub fn process(&mut self, line: &str) -> Result<()> {
        let command = line.parse()?;
        self.apply(&command);
        Ok(())
    }

    /// Processes every line in order and returns [`Chain::visited_count`].
    /// A blank line is a malformed command.
    pub fn run<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut processed = 0;

        for (i, line) in lines.into_iter().enumerate() {
            self.process(line.as_ref()).map_err(|e| e.at_line(i + 1))?;
            processed += 1;
        }

        let visited = self.visited_count();
        info!(knots = self.len(), commands = processed, visited, "run finished");

        Ok(visited)
    }

    /// Number of distinct cells the last knot has been in.
    pub fn visited_count(&self) -> usize {
        self.tail().visited().map_or(0, HashSet::len)
    }
}
