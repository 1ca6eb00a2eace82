//! Escalas y sus multiplicadores (тысяча, миллион, миллиард)

use std::fmt;

use crate::grammar::Gender;

/// Escala de un grupo de tres cifras (potencia de 1000)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Unit,
    Thousand,
    Million,
    Billion,
}

impl Scale {
    /// Escala para el exponente k de 1000^k
    pub fn from_exponent(exponent: u32) -> Option<Self> {
        match exponent {
            0 => Some(Scale::Unit),
            1 => Some(Scale::Thousand),
            2 => Some(Scale::Million),
            3 => Some(Scale::Billion),
            _ => None,
        }
    }

    /// Género propio del sustantivo de la escala.
    /// `None` para las unidades: se usa el género pedido por el llamador.
    pub fn gender(self) -> Option<Gender> {
        match self {
            Scale::Unit => None,
            Scale::Thousand => Some(Gender::Feminine),
            Scale::Million | Scale::Billion => Some(Gender::Masculine),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Scale::Unit => "unidades",
            Scale::Thousand => "miles",
            Scale::Million => "millones",
            Scale::Billion => "miles de millones",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formas por clase de concordancia (First, Few, Many) y caso
pub(crate) type FactorTable = [[&'static str; 6]; 3];

static THOUSAND: FactorTable = [
    ["тысяча", "тысячи", "тысяче", "тысячу", "тысячей", "тысяче"],
    ["тысячи", "тысяч", "тысячам", "тысячи", "тысячами", "тысячах"],
    ["тысяч", "тысяч", "тысячам", "тысяч", "тысячами", "тысячах"],
];

static MILLION: FactorTable = [
    ["миллион", "миллиона", "миллиону", "миллион", "миллионом", "миллионе"],
    ["миллиона", "миллионов", "миллионам", "миллиона", "миллионами", "миллионах"],
    ["миллионов", "миллионов", "миллионам", "миллионов", "миллионами", "миллионах"],
];

static BILLION: FactorTable = [
    ["миллиард", "миллиарда", "миллиарду", "миллиард", "миллиардом", "миллиарде"],
    ["миллиарда", "миллиардов", "миллиардам", "миллиарда", "миллиардами", "миллиардах"],
    ["миллиардов", "миллиардов", "миллиардам", "миллиардов", "миллиардами", "миллиардах"],
];

pub(crate) fn factor_table(scale: Scale) -> Option<&'static FactorTable> {
    match scale {
        Scale::Unit => None,
        Scale::Thousand => Some(&THOUSAND),
        Scale::Million => Some(&MILLION),
        Scale::Billion => Some(&BILLION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponents() {
        assert_eq!(Scale::from_exponent(0), Some(Scale::Unit));
        assert_eq!(Scale::from_exponent(1), Some(Scale::Thousand));
        assert_eq!(Scale::from_exponent(2), Some(Scale::Million));
        assert_eq!(Scale::from_exponent(3), Some(Scale::Billion));
        assert_eq!(Scale::from_exponent(4), None);
    }

    #[test]
    fn test_genders() {
        assert_eq!(Scale::Unit.gender(), None);
        assert_eq!(Scale::Thousand.gender(), Some(Gender::Feminine));
        assert_eq!(Scale::Million.gender(), Some(Gender::Masculine));
        assert_eq!(Scale::Billion.gender(), Some(Gender::Masculine));
    }

    #[test]
    fn test_only_units_lack_table() {
        assert!(factor_table(Scale::Unit).is_none());
        for scale in [Scale::Thousand, Scale::Million, Scale::Billion] {
            let table = factor_table(scale).unwrap();
            assert!(table.iter().flatten().all(|w| !w.is_empty()));
        }
    }
}
