use thiserror::Error;

/// Ошибки строгого разбора строки.
///
/// Нестрогий разбор ([`crate::parse_row`]) никогда не возвращает ошибок,
/// эти варианты появляются только в режиме [`crate::types::QuoteMode::Strict`].
/// Все смещения указаны в байтах от начала строки.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Строка закончилась внутри кавычек. `offset` указывает на открывающую кавычку.
    #[error("unterminated quoted field starting at byte {offset}")]
    UnterminatedQuote { offset: usize },

    /// Кавычка внутри поля, которое не начиналось с кавычки.
    #[error("unexpected quote inside unquoted field at byte {offset}")]
    StrayQuote { offset: usize },

    /// После закрывающей кавычки идет что-то кроме разделителя или конца строки.
    #[error("unexpected character {found:?} after closing quote at byte {offset}")]
    TrailingCharacter { offset: usize, found: char },
}

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Ошибки построения [`crate::types::Separator`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeparatorError {
    #[error("the double-quote character cannot be used as a separator")]
    QuoteCharacter,

    #[error("separator must be exactly one character, got {0:?}")]
    NotSingleChar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::TrailingCharacter {
            offset: 3,
            found: 'b',
        };
        assert_eq!(
            err.to_string(),
            "unexpected character 'b' after closing quote at byte 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DumpError = io_error.into();
        assert!(matches!(err, DumpError::Output(_)));
        assert!(err.to_string().starts_with("output error"));
    }

    #[test]
    fn test_separator_error_display() {
        let err = SeparatorError::NotSingleChar(";;".to_string());
        assert_eq!(
            err.to_string(),
            "separator must be exactly one character, got \";;\""
        );
    }
}
