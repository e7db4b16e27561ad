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
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        // `null` only names an absent field
        match s.parse::<Self>() {
            Ok(Self::Null) => Err(format!("Unknown dest: `{s}`")),
            Ok(d) => Ok(d),
            Err(_) => Err(format!("Unknown dest: `{s}`")),
        }
    }

    /// 3-bit field `d1 d2 d3`
    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Dest::parse("M"), Ok(Dest::M));
    assert_eq!(Dest::parse("AMD").map(Dest::bits), Ok(0b111));
    assert!(Dest::parse("null").is_err());
    assert_eq!(Dest::Null.to_string(), "null");
    assert_eq!(Dest::Null.bits(), 0);
    assert!(Dest::parse("DM").is_err());
    assert!(Dest::parse("m").is_err());
    assert_eq!(Dest::AD.to_string(), "AD");
}
