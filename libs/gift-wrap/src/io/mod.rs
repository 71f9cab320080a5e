//! # Text Format
//!
//! Whitespace-delimited point input and face-list output.
//!
//! ## Input
//!
//! ```text
//! T                 number of cases (batch form only), may be 0
//! n                 points in the case, positive
//! x y z             n lines of coordinates
//! ```
//!
//! ## Output
//!
//! Per case, the face count and then one `3 a b c` line per face, with
//! 0-based indices into that case's points.


use std::io::{self, Write};
use std::str::{FromStr, SplitWhitespace};

use crate::core::vec3::Point;
use crate::error::{HullError, HullResult};
use crate::hull::Hull;

/// Pulls typed tokens from whitespace-separated text, tracking the token
/// position for error messages.
struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> TokenReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            position: 0,
        }
    }

    fn parse_next<T: FromStr>(&mut self, what: &str) -> HullResult<T> {
        let position = self.position;
        let token = self
            .tokens
            .next()
            .ok_or_else(|| HullError::parse(position, format!("expected {what}, found end of input")))?;
        self.position += 1;
        token
            .parse()
            .map_err(|_| HullError::parse(position, format!("expected {what}, found '{token}'")))
    }

    fn count(&mut self, what: &str) -> HullResult<usize> {
        let position = self.position;
        let n: usize = self.parse_next(what)?;
        if n == 0 {
            return Err(HullError::parse(position, format!("{what} must be positive")));
        }
        Ok(n)
    }

    fn point_set(&mut self) -> HullResult<Vec<Point>> {
        let n = self.count("point count")?;
        (0..n)
            .map(|_| -> HullResult<Point> {
                let x = self.parse_next("x coordinate")?;
                let y = self.parse_next("y coordinate")?;
                let z = self.parse_next("z coordinate")?;
                Ok(Point::new(x, y, z))
            })
            .collect()
    }

    fn finish(mut self) -> HullResult<()> {
        match self.tokens.next() {
            Some(token) => Err(HullError::parse(
                self.position,
                format!("unexpected trailing token '{token}'"),
            )),
            None => Ok(()),
        }
    }
}

/// Parses a single case: a point count followed by that many triples.
///
/// # Examples
/// ```
/// use gift_wrap::{parse_point_set, Point};
/// let points = parse_point_set("2\n0 0 0\n1 2 3\n").unwrap();
/// assert_eq!(points, vec![Point::ZERO, Point::new(1.0, 2.0, 3.0)]);
/// ```
pub fn parse_point_set(input: &str) -> HullResult<Vec<Point>> {
    let mut reader = TokenReader::new(input);
    let points = reader.point_set()?;
    reader.finish()?;
    Ok(points)
}

/// Parses the batch form: a case count followed by that many cases. A
/// count of zero gives an empty batch.
///
/// # Examples
/// ```
/// use gift_wrap::parse_batch;
/// let cases = parse_batch("2\n1\n0 0 0\n2\n1 1 1 2 2 2\n").unwrap();
/// assert_eq!(cases.len(), 2);
/// assert_eq!(cases[1].len(), 2);
/// ```
pub fn parse_batch(input: &str) -> HullResult<Vec<Vec<Point>>> {
    let mut reader = TokenReader::new(input);
    let cases: usize = reader.parse_next("case count")?;
    let batch = (0..cases)
        .map(|_| reader.point_set())
        .collect::<HullResult<Vec<_>>>()?;
    reader.finish()?;
    Ok(batch)
}

/// Writes one hull in the output format.
pub fn write_hull<W: Write>(out: &mut W, hull: &Hull) -> io::Result<()> {
    write!(out, "{hull}")
}

/// Renders hulls one after another in the output format.
pub fn render_batch(hulls: &[Hull]) -> String {
    hulls.iter().map(ToString::to_string).collect()
}
