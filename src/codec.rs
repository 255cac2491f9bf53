use std::borrow::Cow;
use std::io;

use crate::error::{DumpError, ParseError};
use crate::types::{QuoteMode, Separator};

/// Настройки кодирования строк: разделитель и режим разбора.
///
/// Значение по умолчанию: `;` и нестрогий разбор.
///
/// ```rust
/// use csvrow::{RowCodec, types::{QuoteMode, Separator}};
///
/// let codec = RowCodec::new(Separator::COMMA).with_mode(QuoteMode::Strict);
/// let row = codec.encode(["a,b", "c"]);
/// assert_eq!(row, "\"a,b\",c");
/// assert_eq!(codec.decode(&row).unwrap(), ["a,b", "c"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCodec {
    separator: Separator,
    mode: QuoteMode,
}

impl RowCodec {
    pub fn new(separator: Separator) -> Self {
        RowCodec {
            separator,
            mode: QuoteMode::default(),
        }
    }

    pub fn with_mode(self, mode: QuoteMode) -> Self {
        RowCodec { mode, ..self }
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    pub fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        crate::escape::escape_field(field, self.separator)
    }

    pub fn encode<I, S>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::escape::encode_row(fields, self.separator)
    }

    /// Записывает строку во `writer`, см. [`crate::write_row`].
    pub fn dump<I, S>(&self, writer: &mut impl io::Write, fields: I) -> Result<(), DumpError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::escape::write_row(writer, fields, self.separator)
    }

    /// Разбирает строку в соответствии с режимом.
    ///
    /// В режиме [`QuoteMode::Lenient`] всегда возвращает `Ok`.
    pub fn decode(&self, row: &str) -> Result<Vec<String>, ParseError> {
        let fields = match self.mode {
            QuoteMode::Lenient => crate::parser::parse_row(row, self.separator),
            QuoteMode::Strict => crate::parser::parse_row_strict(row, self.separator)?,
        };
        log::trace!(
            "decoded {} fields with separator {:?}",
            fields.len(),
            self.separator.as_char()
        );
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codec() {
        let codec = RowCodec::default();
        assert_eq!(codec.separator(), Separator::SEMICOLON);
        assert_eq!(codec.mode(), QuoteMode::Lenient);
    }

    #[test]
    fn test_lenient_decode_never_fails() {
        let codec = RowCodec::default();
        assert_eq!(codec.decode("a;\"b").unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_strict_decode_reports_errors() {
        let codec = RowCodec::default().with_mode(QuoteMode::Strict);
        assert_eq!(
            codec.decode("a;\"b"),
            Err(ParseError::UnterminatedQuote { offset: 2 })
        );
    }

    #[test]
    fn test_round_trip_with_german_notes() {
        let codec = RowCodec::default();
        let original = [
            "2026-02-10",
            "Montag",
            "Home Office",
            "08:15",
            "16:37",
            "8.37",
            "0.50",
            "7.87",
            "Meeting; Konferenz, \"wichtig\"",
        ];
        let row = codec.encode(original);
        assert_eq!(
            row,
            "2026-02-10;Montag;Home Office;08:15;16:37;8.37;0.50;7.87;\"Meeting; Konferenz, \"\"wichtig\"\"\""
        );
        assert_eq!(codec.decode(&row).unwrap(), original);
    }

    #[test]
    fn test_dump_uses_codec_separator() {
        let codec = RowCodec::new(Separator::COMMA);
        let mut buffer = Vec::new();
        codec.dump(&mut buffer, ["a", "b,c", "d;e"]).unwrap();
        assert_eq!(String::from_utf8_lossy(&buffer), "a,\"b,c\",d;e\n");
    }

    #[test]
    fn test_escape_uses_codec_separator() {
        let codec = RowCodec::new(Separator::TAB);
        assert_eq!(codec.escape("a;b"), "a;b");
        assert_eq!(codec.escape("a\tb"), "\"a\tb\"");
    }
}
