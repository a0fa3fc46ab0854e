use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CountLinesError {
    #[error("Usage: count-lines <entry-file.ts>")]
    #[diagnostic(
        code(count_lines::usage),
        help("pass the module to start counting from, e.g. `count-lines src/index.ts`")
    )]
    MissingEntry,

    #[error(transparent)]
    #[diagnostic(code(count_lines::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(count_lines::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CountLinesError>;
