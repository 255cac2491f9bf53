//! Разбор одной строки CSV на поля.
//!
//! [`parse_row`] повторяет поведение эталонного экспорта и никогда не падает.
//! [`parse_row_strict`] дает тот же результат на корректных строках, но
//! отклоняет строки с некорректными кавычками.

use crate::error::ParseError;
use crate::types::Separator;
use crate::utils::QUOTE;

/// Разбирает строку на поля.
///
/// Кавычка вне кавычек открывает экранированную секцию, внутри секции `""`
/// дает одну литеральную кавычку, одиночная `"` закрывает секцию.
/// Разделитель внутри кавычек считается обычным символом.
/// Последнее поле добавляется всегда, поэтому строка без разделителей
/// дает ровно одно поле, а строка с разделителем в конце дает пустое поле в конце.
///
/// Некорректные строки (незакрытая кавычка, кавычка посреди поля) не приводят
/// к ошибке, результат определяется тем же автоматом.
///
/// # Пример
///
/// ```rust
/// use csvrow::{parse_row, types::Separator};
///
/// let fields = parse_row("a;b;\"c; d\";", Separator::default());
/// assert_eq!(fields, ["a", "b", "c; d", ""]);
///
/// let fields = parse_row("a;\"He said \"\"hi\"\"\"", Separator::default());
/// assert_eq!(fields, ["a", "He said \"hi\""]);
/// ```
pub fn parse_row(row: &str, separator: Separator) -> Vec<String> {
    let sep = separator.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if !in_quotes => in_quotes = true,
            QUOTE => {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            c if c == sep && !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted { opened_at: usize },
    Closed,
}

/// Строгий вариант [`parse_row`].
///
/// Кавычка допускается только в начале поля, после закрывающей кавычки
/// может идти только разделитель или конец строки.
///
/// # Ошибки
///
/// * [`ParseError::StrayQuote`] - кавычка внутри неэкранированного поля.
/// * [`ParseError::TrailingCharacter`] - символ после закрывающей кавычки.
/// * [`ParseError::UnterminatedQuote`] - строка закончилась внутри кавычек.
///
/// # Пример
///
/// ```rust
/// use csvrow::{parse_row_strict, error::ParseError, types::Separator};
///
/// let sep = Separator::default();
/// assert_eq!(parse_row_strict("a;\"b;c\"", sep).unwrap(), ["a", "b;c"]);
/// assert_eq!(
///     parse_row_strict("a;\"b", sep),
///     Err(ParseError::UnterminatedQuote { offset: 2 })
/// );
/// ```
pub fn parse_row_strict(row: &str, separator: Separator) -> Result<Vec<String>, ParseError> {
    let sep = separator.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = FieldState::Start;
    let mut chars = row.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        state = match (state, c) {
            (FieldState::Start, QUOTE) => FieldState::Quoted { opened_at: offset },
            (FieldState::Quoted { .. }, QUOTE) => {
                if matches!(chars.peek(), Some(&(_, QUOTE))) {
                    current.push(QUOTE);
                    chars.next();
                    state
                } else {
                    FieldState::Closed
                }
            }
            (FieldState::Quoted { .. }, c) => {
                current.push(c);
                state
            }
            (_, c) if c == sep => {
                fields.push(std::mem::take(&mut current));
                FieldState::Start
            }
            (FieldState::Closed, found) => {
                log::debug!("rejecting row: {found:?} after closing quote at byte {offset}");
                return Err(ParseError::TrailingCharacter { offset, found });
            }
            (FieldState::Start | FieldState::Unquoted, QUOTE) => {
                log::debug!("rejecting row: stray quote at byte {offset}");
                return Err(ParseError::StrayQuote { offset });
            }
            (FieldState::Start | FieldState::Unquoted, c) => {
                current.push(c);
                FieldState::Unquoted
            }
        };
    }

    if let FieldState::Quoted { opened_at } = state {
        log::debug!("rejecting row: quote opened at byte {opened_at} is never closed");
        return Err(ParseError::UnterminatedQuote { offset: opened_at });
    }
    fields.push(current);
    Ok(fields)
}
