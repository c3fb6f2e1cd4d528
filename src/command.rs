use std::str::FromStr;

use crate::parser::nom_parse_to_owned;
use crate::point::Point;
use crate::{Error, Result};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn apply(self, point: Point) -> Point {
        use Direction::*;

        match self {
            Left => point.left(),
            Right => point.right(),
            Up => point.up(),
            Down => point.down(),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Direction> {
        match s {
            "L" => Ok(Direction::Left),
            "R" => Ok(Direction::Right),
            "U" => Ok(Direction::Up),
            "D" => Ok(Direction::Down),
            _ => Err(Error::UnknownDirection(s.to_owned())),
        }
    }
}

/// `count` unit moves of the head in one direction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Command {
    pub direction: Direction,
    pub count: usize,
}

impl FromStr for Command {
    type Err = Error;

    /// The direction is checked here, before anything moves, so `X 0` is an
    /// [`Error::UnknownDirection`] even though it would take no steps.
    fn from_str(s: &str) -> Result<Command> {
        let (direction, count) =
            nom_parse_to_owned(parser::command, s).map_err(|source| Error::MalformedCommand {
                line: s.to_owned(),
                source,
            })?;

        Ok(Command {
            direction: direction.parse()?,
            count,
        })
    }
}

/// Parses every line, stopping at the first bad one. A blank line is a
/// malformed command; only the empty tail after a final newline is dropped.
pub fn parse_commands(input: &str) -> Result<Vec<Command>> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| line.parse().map_err(|e: Error| e.at_line(i + 1)))
        .collect()
}

mod parser {
    use crate::parser::base10_numeric;

    use nom::bytes::complete::take_till1;
    use nom::character::complete::{space0, space1};
    use nom::combinator::all_consuming;
    use nom::sequence::{separated_pair, terminated};
    use nom::{IResult, Parser};

    /// `<direction> <count>`; the direction token is checked by the caller.
    pub(super) fn command(input: &str) -> IResult<&str, (String, usize)> {
        all_consuming(terminated(
            separated_pair(
                take_till1(|c: char| c.is_whitespace()).map(str::to_owned),
                space1,
                base10_numeric::<usize>,
            ),
            space0,
        ))
        .parse(input)
    }
}
