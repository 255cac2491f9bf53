//! # csvrow
//!
//! Библиотека для экранирования и разбора одной строки CSV по правилам RFC 4180
//! с настраиваемым разделителем (по умолчанию `;`).
//!
//! Ядро состоит из двух взаимно обратных преобразований:
//! * **экранирование** поля ([`escape_field`], [`encode_row`], [`write_row`]);
//! * **разбор** строки на поля ([`parse_row`], [`parse_row_strict`]).
//!
//! ## Быстрый старт
//!
//! ```rust
//! use csvrow::{encode_row, parse_row, types::Separator};
//!
//! let sep = Separator::default();
//! let fields = ["2026-02-10", "Montag", "Er sagte \"Hallo\""];
//!
//! let row = encode_row(fields, sep);
//! assert_eq!(row, "2026-02-10;Montag;\"Er sagte \"\"Hallo\"\"\"");
//! assert_eq!(parse_row(&row, sep), fields);
//! ```
//!
//! ## Обработка ошибок
//! Экранирование и нестрогий разбор не возвращают ошибок. Строгий разбор возвращает
//! [`error::ParseError`], запись во `writer` возвращает [`error::DumpError`].

pub mod error;
pub mod types;

mod codec;
mod escape;
mod parser;
mod utils;

pub use codec::RowCodec;

pub use escape::{encode_row, escape_field, needs_quoting, write_row};

pub use parser::{parse_row, parse_row_strict};
