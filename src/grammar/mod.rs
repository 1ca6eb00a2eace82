//! Categorías gramaticales del ruso
//!
//! Define el género y el caso con los que se declina un numeral, junto con
//! los alias cortos que acepta la interfaz pública (`M`/`F`/`N` y
//! `N`/`G`/`D`/`A`/`I`/`P`).

pub mod case_group;

pub use case_group::{classify, CaseGroup};

use std::fmt;
use std::str::FromStr;

use crate::error::{AliasKind, NumeralError};

/// Género gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    /// Posición del género en las tablas del léxico
    pub fn index(self) -> usize {
        match self {
            Gender::Masculine => 0,
            Gender::Feminine => 1,
            Gender::Neuter => 2,
        }
    }

    /// Alias de una letra
    pub fn alias(self) -> &'static str {
        match self {
            Gender::Masculine => "M",
            Gender::Feminine => "F",
            Gender::Neuter => "N",
        }
    }
}

impl FromStr for Gender {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "masc" | "masculine" => Ok(Gender::Masculine),
            "f" | "fem" | "feminine" => Ok(Gender::Feminine),
            "n" | "neut" | "neuter" => Ok(Gender::Neuter),
            _ => Err(NumeralError::unknown_alias(AliasKind::Gender, s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

/// Caso gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Posición del caso en las tablas del léxico
    pub fn index(self) -> usize {
        match self {
            Case::Nominative => 0,
            Case::Genitive => 1,
            Case::Dative => 2,
            Case::Accusative => 3,
            Case::Instrumental => 4,
            Case::Prepositional => 5,
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            Case::Nominative => "N",
            Case::Genitive => "G",
            Case::Dative => "D",
            Case::Accusative => "A",
            Case::Instrumental => "I",
            Case::Prepositional => "P",
        }
    }
}

impl FromStr for Case {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "nom" | "nominative" => Ok(Case::Nominative),
            "g" | "gen" | "genitive" => Ok(Case::Genitive),
            "d" | "dat" | "dative" => Ok(Case::Dative),
            "a" | "acc" | "accusative" => Ok(Case::Accusative),
            "i" | "ins" | "instrumental" => Ok(Case::Instrumental),
            "p" | "prep" | "prepositional" => Ok(Case::Prepositional),
            _ => Err(NumeralError::unknown_alias(AliasKind::Case, s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}
