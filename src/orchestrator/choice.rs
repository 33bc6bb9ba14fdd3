//! Parsing of the interactive `d <rank>` / `s <rank>` / `q` command.

use thiserror::Error;

/// A valid user command at the result prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `d <rank>`: download now.
    Download(usize),
    /// `s <rank>`: store in the shopping list.
    Store(usize),
    /// `q`: leave without doing anything.
    Quit,
}

/// Why a prompt line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// Nothing was typed.
    #[error("choice: invalid input (empty)")]
    Empty,
    /// First token is not `d`, `s` or `q`.
    #[error("choice: invalid input '{0}' (expected d, s or q)")]
    UnknownCommand(String),
    /// `d` or `s` without a rank.
    #[error("choice: invalid input (missing index after '{0}')")]
    MissingRank(String),
    /// Rank is not a non-negative integer.
    #[error("choice: invalid input (index '{0}' is not a number)")]
    InvalidRank(String),
    /// Extra tokens after a complete command.
    #[error("choice: invalid input (unexpected '{0}')")]
    UnexpectedArgument(String),
}

/// Parses one prompt line.
///
/// # Errors
///
/// Returns [`ChoiceError`] describing the first problem found.
pub fn parse_choice(line: &str) -> Result<Choice, ChoiceError> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Err(ChoiceError::Empty);
    };

    let choice = match command {
        "q" => Choice::Quit,
        "d" | "s" => {
            let raw_rank = tokens
                .next()
                .ok_or_else(|| ChoiceError::MissingRank(command.to_string()))?;
            let rank = raw_rank
                .parse::<usize>()
                .map_err(|_| ChoiceError::InvalidRank(raw_rank.to_string()))?;
            if command == "d" {
                Choice::Download(rank)
            } else {
                Choice::Store(rank)
            }
        }
        other => return Err(ChoiceError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = tokens.next() {
        return Err(ChoiceError::UnexpectedArgument(extra.to_string()));
    }
    Ok(choice)
}
