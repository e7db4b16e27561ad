use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt::Display;

/// ALU computation of a C-instruction.
///
/// Variants ending in `A` read the A register, the matching `M` variants read
/// `RAM[A]` and differ only in the leading `a` bit of the encoding.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Comp {
    #[default]
    Zero,
    One,
    NegOne,
    D,
    A,
    NotD,
    NotA,
    NegD,
    NegA,
    DPlusOne,
    APlusOne,
    DMinusOne,
    AMinusOne,
    DPlusA,
    DMinusA,
    AMinusD,
    DAndA,
    DOrA,
    M,
    NotM,
    NegM,
    MPlusOne,
    MMinusOne,
    DPlusM,
    DMinusM,
    MMinusD,
    DAndM,
    DOrM,
}

static COMP_STR: Lazy<BiMap<&'static str, Comp>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, Comp> = BiMap::new();
    map.insert("0", Comp::Zero);
    map.insert("1", Comp::One);
    map.insert("-1", Comp::NegOne);
    map.insert("D", Comp::D);
    map.insert("A", Comp::A);
    map.insert("!D", Comp::NotD);
    map.insert("!A", Comp::NotA);
    map.insert("-D", Comp::NegD);
    map.insert("-A", Comp::NegA);
    map.insert("D+1", Comp::DPlusOne);
    map.insert("A+1", Comp::APlusOne);
    map.insert("D-1", Comp::DMinusOne);
    map.insert("A-1", Comp::AMinusOne);
    map.insert("D+A", Comp::DPlusA);
    map.insert("D-A", Comp::DMinusA);
    map.insert("A-D", Comp::AMinusD);
    map.insert("D&A", Comp::DAndA);
    map.insert("D|A", Comp::DOrA);
    map.insert("M", Comp::M);
    map.insert("!M", Comp::NotM);
    map.insert("-M", Comp::NegM);
    map.insert("M+1", Comp::MPlusOne);
    map.insert("M-1", Comp::MMinusOne);
    map.insert("D+M", Comp::DPlusM);
    map.insert("D-M", Comp::DMinusM);
    map.insert("M-D", Comp::MMinusD);
    map.insert("D&M", Comp::DAndM);
    map.insert("D|M", Comp::DOrM);
    map
});

impl Comp {
    pub fn parse(s: &str) -> Result<Comp, String> {
        if let Some(comp) = COMP_STR.get_by_left(s) {
            Ok(*comp)
        } else {
            Err(format!("Unknown comp: `{}`", s))
        }
    }

    pub fn format(&self) -> &'static str {
        COMP_STR.get_by_right(self).copied().unwrap_or("?")
    }

    /// 7-bit field `a c1..c6`
    pub fn bits(&self) -> u16 {
        match self {
            Comp::Zero => 0b0_101010,
            Comp::One => 0b0_111111,
            Comp::NegOne => 0b0_111010,
            Comp::D => 0b0_001100,
            Comp::A => 0b0_110000,
            Comp::NotD => 0b0_001101,
            Comp::NotA => 0b0_110001,
            Comp::NegD => 0b0_001111,
            Comp::NegA => 0b0_110011,
            Comp::DPlusOne => 0b0_011111,
            Comp::APlusOne => 0b0_110111,
            Comp::DMinusOne => 0b0_001110,
            Comp::AMinusOne => 0b0_110010,
            Comp::DPlusA => 0b0_000010,
            Comp::DMinusA => 0b0_010011,
            Comp::AMinusD => 0b0_000111,
            Comp::DAndA => 0b0_000000,
            Comp::DOrA => 0b0_010101,
            Comp::M => 0b1_110000,
            Comp::NotM => 0b1_110001,
            Comp::NegM => 0b1_110011,
            Comp::MPlusOne => 0b1_110111,
            Comp::MMinusOne => 0b1_110010,
            Comp::DPlusM => 0b1_000010,
            Comp::DMinusM => 0b1_010011,
            Comp::MMinusD => 0b1_000111,
            Comp::DAndM => 0b1_000000,
            Comp::DOrM => 0b1_010101,
        }
    }

    /// Whether the computation reads `RAM[A]` instead of `A`.
    pub fn reads_memory(&self) -> bool {
        self.bits() & 0b1_000000 != 0
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mnemonic_has_a_distinct_code() {
        assert_eq!(COMP_STR.len(), 28);
        let mut codes: Vec<u16> = COMP_STR.iter().map(|(_, comp)| comp.bits()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 28);
        for (name, comp) in COMP_STR.iter() {
            assert_eq!(comp.format(), *name);
        }
    }

    #[test]
    fn canonical_codes() {
        assert_eq!(Comp::parse("0").map(|c| c.bits()), Ok(0b0101010));
        assert_eq!(Comp::parse("A").map(|c| c.bits()), Ok(0b0110000));
        assert_eq!(Comp::parse("M").map(|c| c.bits()), Ok(0b1110000));
        assert_eq!(Comp::parse("D+1").map(|c| c.bits()), Ok(0b0011111));
        assert_eq!(Comp::parse("D|M").map(|c| c.bits()), Ok(0b1010101));
        assert_eq!(Comp::parse("D&A").map(|c| c.bits()), Ok(0b0000000));
    }

    #[test]
    fn memory_variants_set_a_bit() {
        assert!(Comp::DPlusM.reads_memory());
        assert!(!Comp::DPlusA.reads_memory());
        assert_eq!(Comp::DPlusM.bits() & 0b0_111111, Comp::DPlusA.bits());
    }

    #[test]
    fn lookup_is_strict() {
        assert!(Comp::parse("Q").is_err());
        assert!(Comp::parse("A+D").is_err());
        assert!(Comp::parse("").is_err());
    }
}
