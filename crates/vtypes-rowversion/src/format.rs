//! # Row Version Format Selectors
//!
//! A row version format string is exactly one letter, or blank:
//!
//! | Selector | Encoding | Output |
//! |----------|----------|--------|
//! | `G` `g`  | General  | `0x` + 16 hex digits, most-significant byte first |
//! | `S` `s`  | MsSql    | same as General (SQL Server `rowversion` literal) |
//! | `O` `o`  | Oracle   | unsigned decimal (`ORA_ROWSCN` style) |
//! | `M` `m`  | MySql    | tick timestamp as `yyyy-MM-dd HH:mm:ss` |
//! | `H` `h`  | HexViewer | 8 space-separated hex bytes, storage order |
//!
//! The letter's case selects the case of hex digits; it never changes the
//! encoding. A blank string means lowercase General.

use std::str::FromStr;

use vtypes_core::RowVersionError;

/// Which textual encoding to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// `0x` + big-endian hex.
    General,
    /// SQL Server literal; identical to [`Encoding::General`].
    MsSql,
    /// Unsigned 64-bit decimal.
    Oracle,
    /// Tick timestamp, `yyyy-MM-dd HH:mm:ss`.
    MySql,
    /// Storage-order hex bytes separated by spaces.
    HexViewer,
}

/// Case of hexadecimal digits in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// `0x000000000000000a`
    Lower,
    /// `0x000000000000000A`
    Upper,
}

/// A parsed row version format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowVersionFormat {
    /// Encoding named by the selector letter.
    pub encoding: Encoding,
    /// Hex digit case, from the letter's case.
    pub case: LetterCase,
}

impl RowVersionFormat {
    /// `G`
    pub const GENERAL_UPPERCASE: Self = Self::new(Encoding::General, LetterCase::Upper);
    /// `g`
    pub const GENERAL_LOWERCASE: Self = Self::new(Encoding::General, LetterCase::Lower);
    /// `S`
    pub const MSSQL_UPPERCASE: Self = Self::new(Encoding::MsSql, LetterCase::Upper);
    /// `s`
    pub const MSSQL_LOWERCASE: Self = Self::new(Encoding::MsSql, LetterCase::Lower);
    /// `O`
    pub const ORACLE_UPPERCASE: Self = Self::new(Encoding::Oracle, LetterCase::Upper);
    /// `o`
    pub const ORACLE_LOWERCASE: Self = Self::new(Encoding::Oracle, LetterCase::Lower);
    /// `M`
    pub const MYSQL_UPPERCASE: Self = Self::new(Encoding::MySql, LetterCase::Upper);
    /// `m`
    pub const MYSQL_LOWERCASE: Self = Self::new(Encoding::MySql, LetterCase::Lower);
    /// `H`
    pub const HEX_VIEWER_UPPERCASE: Self = Self::new(Encoding::HexViewer, LetterCase::Upper);
    /// `h`
    pub const HEX_VIEWER_LOWERCASE: Self = Self::new(Encoding::HexViewer, LetterCase::Lower);

    /// Format used when no format string is given.
    pub const DEFAULT: Self = Self::GENERAL_LOWERCASE;

    /// All ten selectors, uppercase first within each encoding.
    pub const ALL: [Self; 10] = [
        Self::GENERAL_UPPERCASE,
        Self::GENERAL_LOWERCASE,
        Self::MSSQL_UPPERCASE,
        Self::MSSQL_LOWERCASE,
        Self::ORACLE_UPPERCASE,
        Self::ORACLE_LOWERCASE,
        Self::MYSQL_UPPERCASE,
        Self::MYSQL_LOWERCASE,
        Self::HEX_VIEWER_UPPERCASE,
        Self::HEX_VIEWER_LOWERCASE,
    ];

    /// Selector for `encoding` with hex digits in `case`.
    pub const fn new(encoding: Encoding, case: LetterCase) -> Self {
        Self { encoding, case }
    }

    /// Parse a format string. Blank (or whitespace-only) input yields
    /// [`RowVersionFormat::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`RowVersionError::InvalidFormatString`] for anything other
    /// than a single selector letter.
    pub fn parse(format: &str) -> Result<Self, RowVersionError> {
        if format.trim().is_empty() {
            return Ok(Self::DEFAULT);
        }
        let mut chars = format.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(RowVersionError::InvalidFormatString(format.to_string()));
        };
        let encoding = match letter.to_ascii_uppercase() {
            'G' => Encoding::General,
            'S' => Encoding::MsSql,
            'O' => Encoding::Oracle,
            'M' => Encoding::MySql,
            'H' => Encoding::HexViewer,
            _ => return Err(RowVersionError::InvalidFormatString(format.to_string())),
        };
        let case = if letter.is_ascii_uppercase() {
            LetterCase::Upper
        } else {
            LetterCase::Lower
        };
        Ok(Self::new(encoding, case))
    }

    /// The selector letter for this format.
    pub fn as_char(&self) -> char {
        let upper = match self.encoding {
            Encoding::General => 'G',
            Encoding::MsSql => 'S',
            Encoding::Oracle => 'O',
            Encoding::MySql => 'M',
            Encoding::HexViewer => 'H',
        };
        match self.case {
            LetterCase::Upper => upper,
            LetterCase::Lower => upper.to_ascii_lowercase(),
        }
    }
}

impl Default for RowVersionFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for RowVersionFormat {
    type Err = RowVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RowVersionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
