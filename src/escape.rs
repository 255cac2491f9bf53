use std::borrow::Cow;
use std::io;

use crate::error::DumpError;
use crate::types::Separator;
use crate::utils::{QUOTE, double_quotes, wrap_with_quotes};

/// Проверяет, нужно ли брать поле в кавычки.
///
/// Кавычки нужны, если поле содержит разделитель, двойную кавычку,
/// `\r` или `\n`.
pub fn needs_quoting(field: &str, separator: Separator) -> bool {
    let sep = separator.as_char();
    field
        .chars()
        .any(|c| c == sep || c == QUOTE || c == '\r' || c == '\n')
}

/// Экранирует одно поле по правилам RFC 4180.
///
/// Если кавычки не нужны, поле возвращается как есть (без аллокации).
/// Иначе каждая `"` удваивается, а результат оборачивается в кавычки.
///
/// # Пример
///
/// ```rust
/// use csvrow::{escape_field, types::Separator};
///
/// let sep = Separator::default();
/// assert_eq!(escape_field("Simple text", sep), "Simple text");
/// assert_eq!(escape_field("Meeting; Konferenz", sep), "\"Meeting; Konferenz\"");
/// assert_eq!(escape_field("Er sagte \"Hallo\"", sep), "\"Er sagte \"\"Hallo\"\"\"");
/// ```
pub fn escape_field(field: &str, separator: Separator) -> Cow<'_, str> {
    if !needs_quoting(field, separator) {
        return Cow::Borrowed(field);
    }
    Cow::Owned(wrap_with_quotes(&double_quotes(field)))
}

/// Собирает строку из полей: каждое поле экранируется, поля склеиваются разделителем.
///
/// ```rust
/// use csvrow::{encode_row, types::Separator};
///
/// let row = encode_row(["2026-02-10", "Montag", "Meeting; Konferenz"], Separator::default());
/// assert_eq!(row, "2026-02-10;Montag;\"Meeting; Konferenz\"");
/// ```
pub fn encode_row<I, S>(fields: I, separator: Separator) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut row = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            row.push(separator.as_char());
        }
        row.push_str(&escape_field(field.as_ref(), separator));
    }
    row
}

/// Записывает одну строку в `writer` и завершает ее переводом строки.
///
/// # Ошибки
///
/// Возвращает [`DumpError::Output`], если запись во `writer` не удалась.
///
/// # Пример
///
/// ```rust
/// use csvrow::{write_row, types::Separator};
///
/// let mut buffer = Vec::new();
/// write_row(&mut buffer, ["a", "b;c"], Separator::default()).expect("Ошибка записи");
/// assert_eq!(String::from_utf8(buffer).unwrap(), "a;\"b;c\"\n");
/// ```
pub fn write_row<I, S>(
    writer: &mut impl io::Write,
    fields: I,
    separator: Separator,
) -> Result<(), DumpError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    writeln!(writer, "{}", encode_row(fields, separator))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: Separator = Separator::SEMICOLON;

    #[test]
    fn test_plain_field_is_borrowed() {
        let escaped = escape_field("Simple text", SEP);
        assert!(matches!(escaped, Cow::Borrowed("Simple text")));
    }

    #[test]
    fn test_empty_field_is_unquoted() {
        assert_eq!(escape_field("", SEP), "");
        assert!(!needs_quoting("", SEP));
    }

    #[test]
    fn test_escape_reference_cases() {
        let cases = [
            ("Simple text", "Simple text"),
            ("Meeting; Konferenz", "\"Meeting; Konferenz\""),
            ("Er sagte \"Hallo\"", "\"Er sagte \"\"Hallo\"\"\""),
            ("Zeile 1\nZeile 2", "\"Zeile 1\nZeile 2\""),
            ("Multiple; semicolons; here", "\"Multiple; semicolons; here\""),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_field(input, SEP), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_carriage_return_triggers_quoting() {
        assert_eq!(escape_field("a\rb", SEP), "\"a\rb\"");
    }

    #[test]
    fn test_only_configured_separator_triggers_quoting() {
        assert_eq!(escape_field("a,b", SEP), "a,b");
        assert_eq!(escape_field("a,b", Separator::COMMA), "\"a,b\"");
        assert_eq!(escape_field("a;b", Separator::COMMA), "a;b");
    }

    #[test]
    fn test_lone_quote() {
        assert_eq!(escape_field("\"", SEP), "\"\"\"\"");
    }

    #[test]
    fn test_encode_row_keeps_empty_fields() {
        assert_eq!(encode_row(["a", "", "c", ""], SEP), "a;;c;");
        assert_eq!(encode_row(["", "", ""], SEP), ";;");
        assert_eq!(encode_row(Vec::<String>::new(), SEP), "");
    }

    #[test]
    fn test_write_row_appends_newline() {
        let mut buffer = Vec::new();
        write_row(&mut buffer, vec!["x".to_string(), "y\"z".to_string()], SEP).unwrap();
        assert_eq!(String::from_utf8_lossy(&buffer), "x;\"y\"\"z\"\n");
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_row_reports_output_error() {
        let res = write_row(&mut ClosedPipe, ["a"], SEP);
        assert!(matches!(res, Err(DumpError::Output(_))));
    }
}
