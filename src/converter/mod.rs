//! Conversión de enteros a numerales rusos
//!
//! Divide el número en grupos de tres cifras (unidades, miles, millones,
//! miles de millones), declina cada grupo y añade el multiplicador de su
//! escala concordado con el grupo.

pub mod group;

pub use group::render_group;

use std::fmt;
use std::sync::Arc;

use crate::diagnostics::{DiagnosticsSink, Event};
use crate::error::{NumeralError, Result};
use crate::grammar::{classify, Case, Gender};
use crate::lexicon::{lookup_factor, lookup_numeral, scale_gender, Scale};

/// Mayor número soportado
pub const MAX_NUMBER: u64 = 999_999_999_999;

const GROUP_DIVISOR: u64 = 1000;

/// Conversor de enteros a numerales.
///
/// No guarda estado entre llamadas; se puede compartir entre hilos.
#[derive(Clone, Default)]
pub struct NumberConverter {
    diagnostics: Option<Arc<dyn DiagnosticsSink>>,
}

impl fmt::Debug for NumberConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberConverter")
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl NumberConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Convierte un número declinado en el caso y género indicados.
    ///
    /// El género sólo afecta al grupo de las unidades: los grupos de miles,
    /// millones y miles de millones concuerdan con el sustantivo de su escala.
    pub fn convert(&self, number: i64, gender: Gender, case: Case) -> Result<String> {
        let number = validate_number(number)?;

        let text = if number == 0 {
            lookup_numeral(0, gender, case)?.to_string()
        } else {
            self.compose(number, gender, case)?
        };

        self.emit(&Event::Converted {
            number,
            gender,
            case,
            text: &text,
        });
        Ok(text)
    }

    /// Como `convert`, con género y caso dados por alias ("M", "G", ...)
    pub fn convert_aliases(&self, number: i64, gender: &str, case: &str) -> Result<String> {
        validate_number(number)?;
        let gender: Gender = gender.parse()?;
        let case: Case = case.parse()?;
        self.convert(number, gender, case)
    }

    /// El número declinado en los seis casos
    pub fn declension_table(&self, number: i64, gender: Gender) -> Result<Vec<(Case, String)>> {
        Case::ALL
            .iter()
            .map(|&case| self.convert(number, gender, case).map(|text| (case, text)))
            .collect()
    }

    fn compose(&self, number: u64, gender: Gender, case: Case) -> Result<String> {
        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut rest = number;
        let mut exponent = 0;

        while rest != 0 {
            let value = (rest % GROUP_DIVISOR) as u32;
            rest /= GROUP_DIVISOR;

            let scale = Scale::from_exponent(exponent).ok_or_else(|| NumeralError::UnknownScale {
                scale: format!("1000^{}", exponent),
            })?;
            exponent += 1;

            // Un grupo nulo no aporta palabras ("миллион тысяч" no existe)
            if value == 0 {
                continue;
            }

            // La escala impone su género: "одна тысяча", "один миллион"
            let group_gender = scale_gender(scale).unwrap_or(gender);
            let mut words = render_group(value, group_gender, case)?;

            if scale != Scale::Unit {
                let factor = lookup_factor(scale, classify(u64::from(value)), case)?;
                words.push(factor.to_string());
            }

            self.emit(&Event::GroupRendered {
                scale,
                value,
                gender: group_gender,
                words: &words,
            });
            groups.push(words);
        }

        Ok(groups
            .into_iter()
            .rev()
            .flatten()
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn emit(&self, event: &Event<'_>) {
        if let Some(sink) = &self.diagnostics {
            sink.record(event);
        }
    }
}

/// Comprueba que el número esté en [0, MAX_NUMBER]
pub fn validate_number(number: i64) -> Result<u64> {
    u64::try_from(number)
        .ok()
        .filter(|n| *n <= MAX_NUMBER)
        .ok_or(NumeralError::NumberRange {
            number: i128::from(number),
            max: MAX_NUMBER,
        })
}

/// Interpreta un número entero escrito en decimal.
///
/// Admite signo y separadores `_` entre cifras ("1_000_000"). Un texto que
/// no es entero ("12.5", "abc") da `InvalidType`; un entero fuera de rango,
/// `NumberRange`.
pub fn parse_number(text: &str) -> Result<i64> {
    let invalid = || NumeralError::InvalidType {
        input: text.to_string(),
    };

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if unsigned.is_empty() || unsigned.starts_with('_') || unsigned.ends_with('_') {
        return Err(invalid());
    }
    if !unsigned.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return Err(invalid());
    }

    let digits: String = unsigned.chars().filter(|c| *c != '_').collect();
    // Sólo puede fallar por desbordamiento: las cifras ya están validadas
    let magnitude = digits.parse::<i128>().unwrap_or(i128::MAX);
    let number = if negative { -magnitude } else { magnitude };

    if !(0..=i128::from(MAX_NUMBER)).contains(&number) {
        return Err(NumeralError::NumberRange {
            number,
            max: MAX_NUMBER,
        });
    }

    i64::try_from(number).map_err(|_| NumeralError::NumberRange {
        number,
        max: MAX_NUMBER,
    })
}

/// Convierte con género y caso dados por alias: `convert(31, "M", "G")`
pub fn convert(number: i64, gender: &str, case: &str) -> Result<String> {
    NumberConverter::new().convert_aliases(number, gender, case)
}

/// Convierte con género y caso tipados
pub fn convert_number(number: i64, gender: Gender, case: Case) -> Result<String> {
    NumberConverter::new().convert(number, gender, case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        groups: Mutex<Vec<(Scale, u32, Gender)>>,
        converted: Mutex<Vec<String>>,
    }

    impl DiagnosticsSink for Recorder {
        fn record(&self, event: &Event<'_>) {
            match event {
                Event::GroupRendered {
                    scale,
                    value,
                    gender,
                    ..
                } => self.groups.lock().unwrap().push((*scale, *value, *gender)),
                Event::Converted { text, .. } => {
                    self.converted.lock().unwrap().push(text.to_string())
                }
            }
        }
    }

    #[test]
    fn test_zero_bypasses_groups() {
        assert_eq!(convert_number(0, Gender::Masculine, Case::Nominative).unwrap(), "ноль");
        assert_eq!(convert_number(0, Gender::Feminine, Case::Genitive).unwrap(), "ноля");
        assert_eq!(convert_number(0, Gender::Neuter, Case::Instrumental).unwrap(), "нолём");
    }

    #[test]
    fn test_scale_gender_overrides_caller() {
        for gender in Gender::ALL {
            assert_eq!(convert_number(1000, gender, Case::Nominative).unwrap(), "одна тысяча");
            assert_eq!(
                convert_number(2_000_000, gender, Case::Nominative).unwrap(),
                "два миллиона"
            );
        }
    }

    #[test]
    fn test_caller_gender_applies_to_units_group() {
        assert_eq!(
            convert_number(1001, Gender::Masculine, Case::Nominative).unwrap(),
            "одна тысяча один"
        );
        assert_eq!(
            convert_number(2002, Gender::Neuter, Case::Nominative).unwrap(),
            "две тысячи два"
        );
        assert_eq!(
            convert_number(2002, Gender::Feminine, Case::Nominative).unwrap(),
            "две тысячи две"
        );
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(
            convert_number(1_000_001, Gender::Masculine, Case::Nominative).unwrap(),
            "один миллион один"
        );
        assert_eq!(
            convert_number(5_000_000_000, Gender::Masculine, Case::Genitive).unwrap(),
            "пяти миллиардов"
        );
    }

    #[test]
    fn test_diagnostics_receive_groups_in_order() {
        let recorder = Arc::new(Recorder::default());
        let converter = NumberConverter::new().with_diagnostics(recorder.clone());

        let text = converter
            .convert(2_000_031, Gender::Neuter, Case::Nominative)
            .unwrap();
        assert_eq!(text, "два миллиона тридцать одно");

        let groups = recorder.groups.lock().unwrap().clone();
        assert_eq!(
            groups,
            vec![
                (Scale::Unit, 31, Gender::Neuter),
                (Scale::Million, 2, Gender::Masculine),
            ]
        );
        assert_eq!(recorder.converted.lock().unwrap().clone(), vec![text]);
    }

    #[test]
    fn test_declension_table() {
        let table = NumberConverter::new()
            .declension_table(21, Gender::Feminine)
            .unwrap();
        let expected = [
            (Case::Nominative, "двадцать одна"),
            (Case::Genitive, "двадцати одной"),
            (Case::Dative, "двадцати одной"),
            (Case::Accusative, "двадцать одну"),
            (Case::Instrumental, "двадцатью одной"),
            (Case::Prepositional, "двадцати одной"),
        ];
        assert_eq!(table.len(), expected.len());
        for ((case, text), (expected_case, expected_text)) in table.iter().zip(expected) {
            assert_eq!(*case, expected_case);
            assert_eq!(text, expected_text);
        }
    }

    #[test]
    fn test_validate_number() {
        assert_eq!(validate_number(0).unwrap(), 0);
        assert_eq!(validate_number(999_999_999_999).unwrap(), MAX_NUMBER);
        assert!(validate_number(-1).is_err());
        assert!(validate_number(1_000_000_000_000).is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("154323").unwrap(), 154_323);
        assert_eq!(parse_number(" 1_000_000 ").unwrap(), 1_000_000);
        assert_eq!(parse_number("+7").unwrap(), 7);
        assert_eq!(parse_number("-0").unwrap(), 0);
    }

    #[test]
    fn test_parse_number_invalid_type() {
        for text in ["", "12.5", "abc", "1e3", "_1", "1_", "--1", "0x10"] {
            assert!(
                matches!(parse_number(text), Err(NumeralError::InvalidType { .. })),
                "'{}' debería ser InvalidType",
                text
            );
        }
    }

    #[test]
    fn test_parse_number_out_of_range() {
        assert_eq!(
            parse_number("-1"),
            Err(NumeralError::NumberRange {
                number: -1,
                max: MAX_NUMBER
            })
        );
        assert!(matches!(
            parse_number("1000000000000"),
            Err(NumeralError::NumberRange { .. })
        ));
        assert!(matches!(
            parse_number("99999999999999999999999999999999999999999999"),
            Err(NumeralError::NumberRange { .. })
        ));
    }
}
