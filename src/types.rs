use core::fmt;
use std::str::FromStr;

use crate::error::SeparatorError;

/// Разделитель полей: один символ, отличный от двойной кавычки.
///
/// По умолчанию используется точка с запятой, так как экспортируемые данные
/// разделяются именно ею.
///
/// ```rust
/// use csvrow::types::Separator;
///
/// assert_eq!(Separator::default().as_char(), ';');
/// assert!(Separator::new('"').is_err());
/// assert_eq!("\t".parse::<Separator>().unwrap(), Separator::TAB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separator(char);

impl Separator {
    pub const SEMICOLON: Separator = Separator(';');
    pub const COMMA: Separator = Separator(',');
    pub const TAB: Separator = Separator('\t');

    pub fn new(c: char) -> Result<Self, SeparatorError> {
        if c == '"' {
            return Err(SeparatorError::QuoteCharacter);
        }
        Ok(Separator(c))
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::SEMICOLON
    }
}

impl TryFrom<char> for Separator {
    type Error = SeparatorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Separator::new(c)
    }
}

impl FromStr for Separator {
    type Err = SeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Separator::new(c),
            _ => Err(SeparatorError::NotSingleChar(s.to_string())),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Режим разбора строки.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteMode {
    /// Разбор никогда не падает, некорректные кавычки обрабатываются как есть.
    #[default]
    Lenient,
    /// Некорректные кавычки приводят к [`crate::error::ParseError`].
    Strict,
}
