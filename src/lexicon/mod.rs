//! Léxico de numerales rusos
//!
//! Datos estáticos de solo lectura: numerales con declinación propia,
//! multiplicadores de cada escala y terminaciones de las reglas generativas.
//! Se pueden consultar desde varios hilos sin coordinación.

pub mod endings;
pub mod factors;
pub mod numerals;

pub use endings::{hundreds_ending, tens_ending};
pub use factors::Scale;

use crate::error::{NumeralError, Result};
use crate::grammar::{Case, CaseGroup, Gender};

/// Formas de un numeral en un caso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forms {
    /// Misma forma para los tres géneros
    Invariant(&'static str),
    /// Masculino, femenino, neutro
    ByGender([&'static str; 3]),
}

impl Forms {
    pub fn get(&self, gender: Gender) -> &'static str {
        match self {
            Forms::Invariant(word) => word,
            Forms::ByGender(words) => words[gender.index()],
        }
    }
}

/// Numeral con declinación irregular
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralEntry {
    pub value: u32,
    pub cases: [Forms; 6],
}

impl NumeralEntry {
    pub fn word(&self, gender: Gender, case: Case) -> &'static str {
        self.cases[case.index()].get(gender)
    }
}

/// Busca la entrada de un numeral con declinación propia
pub fn numeral_entry(value: u32) -> Option<&'static NumeralEntry> {
    numerals::NUMERALS
        .binary_search_by_key(&value, |e| e.value)
        .ok()
        .map(|i| &numerals::NUMERALS[i])
}

/// Forma declinada de un numeral del léxico
pub fn lookup_numeral(value: u32, gender: Gender, case: Case) -> Result<&'static str> {
    numeral_entry(value)
        .map(|entry| entry.word(gender, case))
        .ok_or_else(|| NumeralError::UnknownNumeral {
            value,
            known: known_numerals(),
        })
}

/// Números con entrada propia, en orden
pub fn known_numerals() -> Vec<u32> {
    numerals::NUMERALS.iter().map(|e| e.value).collect()
}

/// Forma del multiplicador de una escala según la clase de concordancia
pub fn lookup_factor(scale: Scale, group: CaseGroup, case: Case) -> Result<&'static str> {
    factors::factor_table(scale)
        .map(|table| table[group.index()][case.index()])
        .ok_or_else(|| NumeralError::UnknownScale {
            scale: scale.to_string(),
        })
}

/// Género que impone la escala a su grupo (`None` = el del llamador)
pub fn scale_gender(scale: Scale) -> Option<Gender> {
    scale.gender()
}
