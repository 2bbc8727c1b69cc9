//! Bundled board selection and file loading.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use nonet_core::{Board, BoardFormatError};

/// The fixed set of bundled puzzle boards.
///
/// Each name resolves to a `<name>.sudoku` file in the boards directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoardName {
    /// A nearly finished board, for quickly exercising the win check.
    Debug,
    /// An easy puzzle.
    N00b,
    /// A hard puzzle.
    L33t,
    /// A deliberately malformed board file, for demonstrating load errors.
    Error,
}

impl BoardName {
    /// Returns the lowercase board name used on the command line and in
    /// file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::N00b => "n00b",
            Self::L33t => "l33t",
            Self::Error => "error",
        }
    }

    /// Returns the board's file name, `<name>.sudoku`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.sudoku", self.as_str())
    }
}

/// Errors from loading a board file.
///
/// Either way the puzzle session cannot start; the error is reported and
/// the application exits rather than presenting a partial board.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadBoardError {
    /// The board file could not be read.
    #[display("failed to read board file {}: {source}", path.display())]
    Io {
        /// Path of the board file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The board file's contents violate the 9×9-digits format.
    #[display("malformed board file {}: {source}", path.display())]
    Format {
        /// Path of the board file.
        path: PathBuf,
        /// The underlying format error.
        source: BoardFormatError,
    },
}

/// Reads and parses `<dir>/<name>.sudoku`.
///
/// # Errors
///
/// Returns [`LoadBoardError`] if the file cannot be read or does not parse
/// as a board.
pub fn load_board(dir: &Path, name: BoardName) -> Result<Board, LoadBoardError> {
    let path = dir.join(name.file_name());
    let text = fs::read_to_string(&path).map_err(|source| LoadBoardError::Io {
        path: path.clone(),
        source,
    })?;
    let board = text.parse().map_err(|source| LoadBoardError::Format {
        path: path.clone(),
        source,
    })?;
    log::info!("loaded board {} from {}", name.as_str(), path.display());
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(BoardName::Debug.file_name(), "debug.sudoku");
        assert_eq!(BoardName::N00b.file_name(), "n00b.sudoku");
        assert_eq!(BoardName::L33t.file_name(), "l33t.sudoku");
        assert_eq!(BoardName::Error.file_name(), "error.sudoku");
    }

    #[test]
    fn test_value_enum_names_match_file_names() {
        for name in [
            BoardName::Debug,
            BoardName::N00b,
            BoardName::L33t,
            BoardName::Error,
        ] {
            let value = name.to_possible_value().expect("no skipped variants");
            assert_eq!(value.get_name(), name.as_str());
        }
    }

    #[test]
    fn test_load_board_missing_file() {
        let result = load_board(Path::new("does-not-exist"), BoardName::Debug);
        assert!(matches!(result, Err(LoadBoardError::Io { .. })));
    }
}
