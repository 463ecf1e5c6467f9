use crate::error::{PathError, Result};

/// Path command letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `M`: move without emitting a segment.
    Move,
    /// `L`: linear segment.
    Line,
    /// `C`: cubic segment with explicit control points.
    Cubic,
    /// `S`: smooth run through the following points.
    Smooth,
    /// `Z`: sub-path end marker.
    Close,
}

/// Which end of another boundary a connector refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorEnd {
    First,
    Last,
}

/// A single token of the path language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A command; lowercase letters select relative coordinates.
    Command { command: Command, relative: bool },
    /// A numeric literal.
    Number(f64),
    /// A `name:FIRST` / `name:LAST` cross-reference.
    Connector { name: &'a str, end: ConnectorEnd },
}

/// Splits a path string on whitespace and commas and classifies each piece.
///
/// # Errors
///
/// Returns `PathError::Syntax` for a token that is neither a command, a
/// number nor a `name:end` connector, and `PathError::UnknownConnector` for
/// a connector whose end keyword is not `FIRST` or `LAST`.
pub fn tokenize(path: &str) -> Result<Vec<Token<'_>>> {
    path.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(classify)
        .collect()
}

fn classify(raw: &str) -> Result<Token<'_>> {
    if let Some(token) = command(raw) {
        return Ok(token);
    }
    if let Ok(value) = raw.parse::<f64>() {
        return Ok(Token::Number(value));
    }
    let Some((name, end)) = raw.split_once(':') else {
        return Err(PathError::Syntax {
            token: raw.to_owned(),
            reason: "expected a command, a number or a `boundary:FIRST|LAST` connector".into(),
        }
        .into());
    };
    let end = if end.eq_ignore_ascii_case("FIRST") {
        ConnectorEnd::First
    } else if end.eq_ignore_ascii_case("LAST") {
        ConnectorEnd::Last
    } else {
        return Err(PathError::UnknownConnector(end.to_owned()).into());
    };
    Ok(Token::Connector { name, end })
}

fn command(raw: &str) -> Option<Token<'_>> {
    let mut chars = raw.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let command = match c.to_ascii_uppercase() {
        'M' => Command::Move,
        'L' => Command::Line,
        'C' => Command::Cubic,
        'S' => Command::Smooth,
        'Z' => Command::Close,
        _ => return None,
    };
    Some(Token::Command {
        command,
        relative: c.is_ascii_lowercase(),
    })
}
