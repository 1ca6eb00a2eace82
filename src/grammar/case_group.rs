//! Clases de concordancia de los multiplicadores
//!
//! El sustantivo que sigue a un numeral (тысяча, миллион, миллиард) toma
//! una de tres formas según las dos últimas cifras del número.

/// Clase de concordancia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseGroup {
    /// Termina en 1, salvo 11: "одна тысяча"
    First,
    /// Termina en 2, 3 o 4, salvo 12-14: "две тысячи"
    Few,
    /// Todo lo demás, incluidos 11-19: "пять тысяч"
    Many,
}

impl CaseGroup {
    /// Posición de la clase en las tablas de multiplicadores
    pub fn index(self) -> usize {
        match self {
            CaseGroup::First => 0,
            CaseGroup::Few => 1,
            CaseGroup::Many => 2,
        }
    }
}

/// Clasifica un número por sus dos últimas cifras
pub fn classify(value: u64) -> CaseGroup {
    // La decena 1 manda sobre las unidades (11-19)
    if (value / 10) % 10 == 1 {
        return CaseGroup::Many;
    }

    match value % 10 {
        1 => CaseGroup::First,
        2..=4 => CaseGroup::Few,
        _ => CaseGroup::Many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first() {
        assert_eq!(classify(1), CaseGroup::First);
        assert_eq!(classify(21), CaseGroup::First);
        assert_eq!(classify(101), CaseGroup::First);
        assert_eq!(classify(931), CaseGroup::First);
    }

    #[test]
    fn test_few() {
        assert_eq!(classify(2), CaseGroup::Few);
        assert_eq!(classify(34), CaseGroup::Few);
        assert_eq!(classify(123), CaseGroup::Few);
        assert_eq!(classify(994), CaseGroup::Few);
    }

    #[test]
    fn test_many() {
        assert_eq!(classify(0), CaseGroup::Many);
        assert_eq!(classify(5), CaseGroup::Many);
        assert_eq!(classify(20), CaseGroup::Many);
        assert_eq!(classify(100), CaseGroup::Many);
        assert_eq!(classify(999), CaseGroup::Many);
    }

    #[test]
    fn test_teens_override_units() {
        for value in [11, 12, 13, 14, 111, 212, 313, 914] {
            assert_eq!(classify(value), CaseGroup::Many, "valor {}", value);
        }
    }

    #[test]
    fn test_only_last_two_digits_matter() {
        assert_eq!(classify(41), classify(1_000_041));
        assert_eq!(classify(12), classify(999_912));
    }
}
