use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    A(u16),
    /// `dest=comp;jump`
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(value) => value & 0x7FFF,
            Inst::C { dest, comp, jump } => {
                0b111 << 13 | comp.bits() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    /// Machine word as 16 `0`/`1` characters.
    pub fn to_word(self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<red>@</><yellow>{}</>", value),
            Inst::C { dest, comp, jump } => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    _ => cformat!("<blue>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    _ => cformat!(";<red>{}</>", jump),
                };
                let comp = if comp.reads_memory() {
                    cformat!("<magenta>{}</>", comp)
                } else {
                    cformat!("<green>{}</>", comp)
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}
