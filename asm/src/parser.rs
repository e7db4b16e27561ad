use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};
use color_print::cformat;

use crate::{error::Error, line::Line, symbols::Symbols};

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Label(String),
    Addr(Addr),
    Comp { dest: Dest, comp: Comp, jump: Jump },
}

impl Stmt {
    pub fn parse(line: &Line) -> Result<Stmt, Error> {
        Stmt::parse_code(line.code()).map_err(|err| err.at(line))
    }

    fn parse_code(code: &str) -> Result<Stmt, Error> {
        // (LOOP)
        if let Some(label) = code.strip_prefix('(') {
            return match label.strip_suffix(')').map(str::trim) {
                Some(name) if !name.is_empty() => Ok(Stmt::Label(name.to_string())),
                _ => Err(Error::SyntaxError(code.to_string())),
            };
        }

        // @value
        if let Some(token) = code.strip_prefix('@') {
            return Ok(Stmt::Addr(Addr::parse(token.trim())?));
        }

        // dest=comp;jump
        let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        let (rest, jump) = match code.split_once(';') {
            Some((_, "")) => return Err(Error::SyntaxError(code.clone())),
            Some((rest, jump)) => (rest, Jump::parse(jump).map_err(Error::UnknownJump)?),
            None => (code.as_str(), Jump::Null),
        };
        let (dest, comp) = match rest.split_once('=') {
            Some(("", _)) => return Err(Error::SyntaxError(code.clone())),
            Some((dest, comp)) => (Dest::parse(dest).map_err(Error::UnknownDest)?, comp),
            None => (Dest::Null, rest),
        };
        let comp = Comp::parse(comp).map_err(Error::UnknownComp)?;
        Ok(Stmt::Comp { dest, comp, jump })
    }
}

impl Stmt {
    pub fn resolve(&self, symbols: &Symbols) -> Result<Inst, Error> {
        match self {
            Stmt::Addr(addr) => Ok(Inst::A(addr.resolve(symbols)?)),
            Stmt::Comp { dest, comp, jump } => Ok(Inst::C {
                dest: *dest,
                comp: *comp,
                jump: *jump,
            }),
            Stmt::Label(name) => Err(Error::SyntaxError(format!("({})", name))),
        }
    }
}

impl Stmt {
    pub fn cformat(&self) -> String {
        match self {
            Stmt::Label(name) => cformat!("<green>({})</>", name),
            Stmt::Addr(addr) => cformat!("<red>@</>{}", addr.cfmt()),
            Stmt::Comp { dest, comp, jump } => Inst::C {
                dest: *dest,
                comp: *comp,
                jump: *jump,
            }
            .cformat(),
        }
    }
}

// ----------------------------------------------------------------------------
// Address

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addr {
    Literal(u16),
    Symbol(String),
}

impl Addr {
    fn parse(token: &str) -> Result<Addr, Error> {
        if token.is_empty() {
            return Err(Error::MissingArgument);
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            // only the low 15 bits fit in an A-instruction
            let val = token
                .bytes()
                .fold(0u32, |acc, b| (acc * 10 + (b - b'0') as u32) & 0x7FFF);
            Ok(Addr::Literal(val as u16))
        } else {
            Ok(Addr::Symbol(token.to_string()))
        }
    }

    pub fn resolve(&self, symbols: &Symbols) -> Result<u16, Error> {
        match self {
            Addr::Literal(v) => Ok(*v),
            Addr::Symbol(s) => match symbols.get_val(s) {
                Some(v) => Ok(v),
                None => Err(Error::UndefinedSymbol(s.clone())),
            },
        }
    }

    fn cfmt(&self) -> String {
        match self {
            Addr::Literal(v) => cformat!("<y>{}</>", v),
            Addr::Symbol(s) => cformat!("<c>{}</>", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> Result<Stmt, Error> {
        Stmt::parse(&Line::new(0, code))
    }

    fn inner(err: Error) -> Error {
        match err {
            Error::Line(_, err) => *err,
            other => other,
        }
    }

    #[test]
    fn label() {
        assert_eq!(parse("(LOOP)").unwrap(), Stmt::Label("LOOP".to_string()));
        assert!(matches!(inner(parse("()").unwrap_err()), Error::SyntaxError(_)));
        assert!(matches!(inner(parse("(LOOP").unwrap_err()), Error::SyntaxError(_)));
    }

    #[test]
    fn address() {
        assert_eq!(parse("@21").unwrap(), Stmt::Addr(Addr::Literal(21)));
        assert_eq!(parse("@32768").unwrap(), Stmt::Addr(Addr::Literal(0)));
        assert_eq!(
            parse("@i").unwrap(),
            Stmt::Addr(Addr::Symbol("i".to_string()))
        );
        assert_eq!(
            parse("@1x").unwrap(),
            Stmt::Addr(Addr::Symbol("1x".to_string()))
        );
        assert!(matches!(inner(parse("@").unwrap_err()), Error::MissingArgument));
        assert_eq!(
            parse("@99999999999").unwrap(),
            Stmt::Addr(Addr::Literal(26623))
        );
        assert_eq!(
            parse("@123456789012345678901234567890").unwrap(),
            Stmt::Addr(Addr::Literal(2770))
        );
    }

    #[test]
    fn compute() {
        assert_eq!(
            parse("AM=M+1;JNE").unwrap(),
            Stmt::Comp {
                dest: Dest::AM,
                comp: Comp::MPlusOne,
                jump: Jump::JNE
            }
        );
        assert_eq!(
            parse("D;JGT").unwrap(),
            Stmt::Comp {
                dest: Dest::Null,
                comp: Comp::D,
                jump: Jump::JGT
            }
        );
        assert_eq!(
            parse("M = D - 1").unwrap(),
            Stmt::Comp {
                dest: Dest::M,
                comp: Comp::DMinusOne,
                jump: Jump::Null
            }
        );
    }

    #[test]
    fn unknown_mnemonic() {
        assert!(matches!(inner(parse("D=Q").unwrap_err()), Error::UnknownComp(_)));
        assert!(matches!(inner(parse("X=D").unwrap_err()), Error::UnknownDest(_)));
        assert!(matches!(inner(parse("0;JMPX").unwrap_err()), Error::UnknownJump(_)));
        assert!(matches!(inner(parse("=D").unwrap_err()), Error::SyntaxError(_)));
        assert!(matches!(inner(parse("D;").unwrap_err()), Error::SyntaxError(_)));
    }

    #[test]
    fn error_keeps_line() {
        let err = Stmt::parse(&Line::new(6, "  D=Q // bad")).unwrap_err();
        match err {
            Error::Line(line, _) => {
                assert_eq!(line.no(), 7);
                assert_eq!(line.raw(), "  D=Q // bad");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
