use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// First RAM address handed out to variables, right after `R0`..`R15`.
pub const VAR_BASE: u16 = 16;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, EnumString, EnumIter, Display,
)]
#[repr(u16)]
pub enum Reg {
    #[default]
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

/// Named pointers and memory-mapped I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
pub enum Builtin {
    SP,
    LCL,
    ARG,
    THIS,
    THAT,
    SCREEN,
    KBD,
}

impl Builtin {
    pub fn addr(self) -> u16 {
        match self {
            Builtin::SP => 0,
            Builtin::LCL => 1,
            Builtin::ARG => 2,
            Builtin::THIS => 3,
            Builtin::THAT => 4,
            Builtin::SCREEN => 0x4000,
            Builtin::KBD => 0x6000,
        }
    }
}

/// Registers first, then builtins.
pub fn predefined() -> impl Iterator<Item = (String, u16)> {
    let regs = Reg::iter().map(|r| (r.to_string(), u16::from(r)));
    let builtins = Builtin::iter().map(|b| (b.to_string(), b.addr()));
    regs.chain(builtins)
}

#[test]
fn test() {
    assert_eq!("R13".parse::<Reg>(), Ok(Reg::R13));
    assert_eq!(u16::from(Reg::R15), 15);
    assert!("r1".parse::<Reg>().is_err());
    assert_eq!("SCREEN".parse::<Builtin>().map(Builtin::addr), Ok(16384));
    assert_eq!(Builtin::KBD.addr(), 24576);

    let table: Vec<(String, u16)> = predefined().collect();
    assert_eq!(table.len(), 23);
    assert_eq!(table[0], ("R0".to_string(), 0));
    assert_eq!(table[15], ("R15".to_string(), 15));
    assert_eq!(table[16], ("SP".to_string(), 0));
    assert_eq!(table[22], ("KBD".to_string(), 24576));
}
