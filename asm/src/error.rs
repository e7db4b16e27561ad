use color_print::cprintln;
use thiserror::Error;

use crate::line::Line;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    UnknownDest(String),

    #[error("{0}")]
    UnknownComp(String),

    #[error("{0}")]
    UnknownJump(String),

    #[error("More argument required")]
    MissingArgument,

    #[error("Out of address space: `{0}`")]
    AddressOverflow(String),

    #[error("Syntax Error: `{0}`")]
    SyntaxError(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Line {}: {1}", .0.no())]
    Line(Line, #[source] Box<Error>),

    #[error("Not an assembly file: {0}")]
    FileExt(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    pub fn at(self, line: &Line) -> Error {
        Error::Line(line.clone(), Box::new(self))
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        match self {
            Error::Line(line, err) => {
                cprintln!("<red,bold>error</>: {}", err);
                cprintln!("     <blue>--></> <underline>{}:{}</>", file, line.no());
                cprintln!("      <blue>|</>");
                cprintln!(" <blue>{:>4} |</> {}", line.no(), line.raw());
                cprintln!("      <blue>|</>");
            }
            _ => {
                cprintln!("<red,bold>error</>: {}", self);
                cprintln!("     <blue>--></> <underline>{}</>", file);
            }
        }
    }
}
