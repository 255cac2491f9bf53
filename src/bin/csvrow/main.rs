use std::io::{self, Read, Write};

use clap::{Parser, Subcommand};
use csvrow::{
    RowCodec, error,
    types::{QuoteMode, Separator},
};

mod verify;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Разделитель полей (ровно один символ, не `"`)
    #[arg(long, short, default_value = ";")]
    separator: Separator,

    /// Режим разбора: lenient/strict
    #[arg(long, value_enum, default_value = "lenient")]
    mode: KnownQuoteMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Экранирует поля и печатает их одной строкой
    Encode {
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Разбирает строку на поля; без аргумента строка читается из stdin
    Decode { row: Option<String> },
    /// Прогоняет встроенный набор проверок с разделителем `;`
    Verify,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum KnownQuoteMode {
    Lenient,
    Strict,
}

impl KnownQuoteMode {
    fn as_supported(&self) -> QuoteMode {
        match self {
            KnownQuoteMode::Lenient => QuoteMode::Lenient,
            KnownQuoteMode::Strict => QuoteMode::Strict,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("{0} of the built-in checks failed")]
    Verify(usize),
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Dump(String),
    #[error("{0}")]
    Usage(String),
    #[error("IO error: {0}")]
    IO(String),
}

impl Error {
    fn code(&self) -> i32 {
        match self {
            Self::Verify(_) => 1,
            Self::Parse(_) => 2,
            Self::Dump(_) => 3,
            Self::Usage(_) => 4,
            Self::IO(_) => 5,
        }
    }
}

impl From<error::ParseError> for Error {
    fn from(value: error::ParseError) -> Self {
        Error::Parse(format!("ошибка разбора строки: {value}"))
    }
}

impl From<error::DumpError> for Error {
    fn from(value: error::DumpError) -> Self {
        Error::Dump(value.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IO(format!("ошибка ввода-вывода: {}", err))
    }
}

fn read_row_from_stdin() -> Result<String, Error> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn run() -> Result<(), Error> {
    let args = Args::parse();
    log::debug!("{:?}", args);

    let codec = RowCodec::new(args.separator).with_mode(args.mode.as_supported());
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Encode { fields } => codec.dump(&mut stdout, &fields)?,
        Command::Decode { row } => {
            let row = match row {
                Some(row) => row,
                None => read_row_from_stdin()?,
            };
            let fields = codec.decode(&row)?;
            for (i, field) in fields.iter().enumerate() {
                writeln!(stdout, "{}: {:?}", i + 1, field)?;
            }
        }
        Command::Verify => {
            if args.separator != Separator::default() {
                return Err(Error::Usage(format!(
                    "встроенные проверки рассчитаны на разделитель ';', получен {:?}",
                    args.separator.as_char()
                )));
            }
            let summary = verify::run(&codec, &mut stdout)?;
            log::info!(
                "verification finished: {} passed, {} failed",
                summary.passed,
                summary.failed
            );
            if summary.failed > 0 {
                return Err(Error::Verify(summary.failed));
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.code());
        }
    }
}
