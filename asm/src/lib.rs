//! Assembler for the Hack 16-bit architecture.
//!
//! ```
//! let words = hackasm::assemble("@2\nD=A\n").unwrap();
//! assert_eq!(words, vec!["0000000000000010", "1110110000010000"]);
//! ```

pub mod error;
pub mod line;
pub mod parser;
pub mod symbols;
pub mod util;

use arch::inst::Inst;

pub use error::Error;
use line::Line;
use parser::Stmt;
use symbols::Symbols;

pub struct Assembly {
    pub symbols: Symbols,
    pub code: Vec<(Line, Stmt, Inst)>,
}

impl Assembly {
    pub fn build(source: &str) -> Result<Assembly, Error> {
        // 1. Filter & parse
        let stmts = line::filter(source)
            .into_iter()
            .map(|line| Stmt::parse(&line).map(|stmt| (line, stmt)))
            .collect::<Result<Vec<_>, _>>()?;

        // 2. Labels, then variables
        let mut symbols = Symbols::new();
        let stmts = symbols.collect_labels(stmts)?;
        symbols.allocate_variables(&stmts)?;

        // 3. Translate
        let mut code = Vec::with_capacity(stmts.len());
        for (line, stmt) in stmts {
            let inst = stmt.resolve(&symbols).map_err(|err| err.at(&line))?;
            code.push((line, stmt, inst));
        }

        Ok(Assembly { symbols, code })
    }

    pub fn words(&self) -> Vec<String> {
        self.code.iter().map(|(_, _, inst)| inst.to_word()).collect()
    }
}

/// Translate source text into machine words, one per instruction.
pub fn assemble(source: &str) -> Result<Vec<String>, Error> {
    Ok(Assembly::build(source)?.words())
}
