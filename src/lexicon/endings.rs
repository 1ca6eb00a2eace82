//! Terminaciones de las centenas 500-900 y decenas 50-80
//!
//! Estos numerales no tienen entrada propia: se forman con la cifra base
//! declinada más una terminación fija por caso ("пяти" + "сот").

use crate::grammar::Case;

/// "-сот", "-стам", ... en el orden de `Case::ALL`
pub const HUNDREDS_ENDINGS: [&str; 6] = ["сот", "сот", "стам", "сот", "стами", "стах"];

/// "-десят", "-десяти", ... en el orden de `Case::ALL`
pub const TENS_ENDINGS: [&str; 6] = ["десят", "десяти", "десяти", "десят", "десятью", "десяти"];

pub fn hundreds_ending(case: Case) -> &'static str {
    HUNDREDS_ENDINGS[case.index()]
}

pub fn tens_ending(case: Case) -> &'static str {
    TENS_ENDINGS[case.index()]
}
