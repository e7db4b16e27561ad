use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        // `null` only names an absent field
        match s.parse::<Self>() {
            Ok(Self::Null) => Err(format!("Unknown jump: `{s}`")),
            Ok(j) => Ok(j),
            Err(_) => Err(format!("Unknown jump: `{s}`")),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("JMP").map(Jump::bits), Ok(0b111));
    assert_eq!(Jump::parse("JGT").map(Jump::bits), Ok(0b001));
    assert_eq!(Jump::parse("JLE").map(Jump::bits), Ok(0b110));
    assert_eq!(Jump::Null.bits(), 0);
    assert!(Jump::parse("JMPP").is_err());
    assert!(Jump::parse("jmp").is_err());
    assert!(Jump::parse("null").is_err());
}
