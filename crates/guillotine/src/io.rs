//! Text format shared by the checker, the generators and the plotting tools.
//!
//! ```text
//! N
//! x1 y1 x2 y2     (N records; opposite corners in any order)
//! ```
//!
//! Tokens are whitespace-separated, so line breaks are not significant.
//! Anything inconsistent with the count is an error; there is no partial result.

use crate::geom::Rect;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input holds no tokens at all.
    MissingCount,
    InvalidCount { token: String },
    /// A coordinate is not an `i64`. `position` is the 1-based token index.
    InvalidToken { position: usize, token: String },
    /// Fewer complete records than announced.
    Truncated { expected: usize, found: usize },
    /// Tokens left over after `expected` records.
    TrailingTokens { expected: usize, extra: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCount => f.write_str("empty input: expected a rectangle count"),
            Self::InvalidCount { token } => write!(f, "invalid rectangle count {token:?}"),
            Self::InvalidToken { position, token } => {
                write!(f, "token #{position} {token:?} is not an integer")
            }
            Self::Truncated { expected, found } => write!(
                f,
                "expected {expected} rectangles, input ends after {found}"
            ),
            Self::TrailingTokens { expected, extra } => write!(
                f,
                "{extra} unexpected tokens after {expected} rectangles"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a full instance. Corners are normalized.
pub fn parse_instance(input: &str) -> Result<Vec<Rect>, ParseError> {
    let mut tokens = input
        .split_ascii_whitespace()
        .enumerate()
        .map(|(i, t)| (i + 1, t));
    let (_, first) = tokens.next().ok_or(ParseError::MissingCount)?;
    let count: usize = first.parse().map_err(|_| ParseError::InvalidCount {
        token: first.to_string(),
    })?;
    // The count is untrusted; do not let it drive a huge allocation up front.
    let mut rects = Vec::with_capacity(count.min(1 << 16));
    let mut coords = [0i64; 4];
    for found in 0..count {
        for c in coords.iter_mut() {
            let (position, token) = tokens
                .next()
                .ok_or(ParseError::Truncated { expected: count, found })?;
            *c = token.parse().map_err(|_| ParseError::InvalidToken {
                position,
                token: token.to_string(),
            })?;
        }
        rects.push(Rect::from_corners(coords[0], coords[1], coords[2], coords[3]));
    }
    let extra = tokens.count();
    if extra > 0 {
        return Err(ParseError::TrailingTokens {
            expected: count,
            extra,
        });
    }
    Ok(rects)
}

/// Write `rects` in the input format, normalized corners, one record per line.
pub fn write_instance<W: fmt::Write>(out: &mut W, rects: &[Rect]) -> fmt::Result {
    writeln!(out, "{}", rects.len())?;
    for r in rects {
        let (a, b) = (r.bottom_left(), r.top_right());
        writeln!(out, "{} {} {} {}", a.x, a.y, b.x, b.y)?;
    }
    Ok(())
}

pub fn format_instance(rects: &[Rect]) -> String {
    let mut s = String::with_capacity(16 * (rects.len() + 1));
    // Writing into a String cannot fail.
    let _ = write_instance(&mut s, rects);
    s
}
