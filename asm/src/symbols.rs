use arch::symbol::{predefined, VAR_BASE};
use indexmap::IndexMap;

use crate::{
    error::Error,
    line::Line,
    parser::{Addr, Stmt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ident {
    Register,
    Predefined,
    Label,
    Variable,
}

pub struct Symbols {
    idents: IndexMap<String, (Ident, u16)>,
    next_var: u16,
}

impl Symbols {
    pub fn new() -> Self {
        let mut idents = IndexMap::new();
        for (idx, (name, val)) in predefined().enumerate() {
            let kind = if idx < 16 {
                Ident::Register
            } else {
                Ident::Predefined
            };
            idents.insert(name, (kind, val));
        }
        Symbols {
            idents,
            next_var: VAR_BASE,
        }
    }

    /// Bind `name` once; an existing binding is never overwritten.
    pub fn insert(&mut self, name: &str, kind: Ident, value: u16) -> Result<(), Error> {
        if self.idents.contains_key(name) {
            return Err(Error::RedefinedLabel(name.to_string()));
        }
        self.idents.insert(name.to_string(), (kind, value));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&(Ident, u16)> {
        self.idents.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.idents.get(name).map(|(_, val)| *val)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &(Ident, u16))> {
        self.idents.iter()
    }

    /// Remove label statements and bind each to the address of the next instruction.
    pub fn collect_labels(&mut self, stmts: Vec<(Line, Stmt)>) -> Result<Vec<(Line, Stmt)>, Error> {
        let mut code = Vec::with_capacity(stmts.len());
        for (line, stmt) in stmts {
            match stmt {
                Stmt::Label(name) => {
                    let pc = u16::try_from(code.len())
                        .map_err(|_| Error::AddressOverflow(name.clone()).at(&line))?;
                    self.insert(&name, Ident::Label, pc)
                        .map_err(|err| err.at(&line))?;
                }
                stmt => code.push((line, stmt)),
            }
        }
        Ok(code)
    }

    /// Give every unknown `@symbol` the next free RAM address, in order of first use.
    ///
    /// Fails only once the 16-bit cursor is exhausted.
    pub fn allocate_variables(&mut self, stmts: &[(Line, Stmt)]) -> Result<(), Error> {
        for (line, stmt) in stmts {
            if let Stmt::Addr(Addr::Symbol(name)) = stmt {
                if !self.idents.contains_key(name) {
                    let next = self
                        .next_var
                        .checked_add(1)
                        .ok_or_else(|| Error::AddressOverflow(name.clone()).at(line))?;
                    self.idents
                        .insert(name.clone(), (Ident::Variable, self.next_var));
                    self.next_var = next;
                }
            }
        }
        Ok(())
    }
}
