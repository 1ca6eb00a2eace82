//! Errores de conversión

use std::fmt;
use thiserror::Error;

/// Tipo de alias rechazado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    Gender,
    Case,
}

impl fmt::Display for AliasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasKind::Gender => f.write_str("género"),
            AliasKind::Case => f.write_str("caso"),
        }
    }
}

/// Error principal de la biblioteca
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// La entrada no es un número entero
    #[error("se esperaba un número entero, se recibió '{input}'")]
    InvalidType { input: String },

    /// Entero fuera del rango soportado
    #[error("número fuera de rango: {number} (rango soportado: 0..={max})")]
    NumberRange { number: i128, max: u64 },

    /// Alias de género o caso desconocido
    #[error("alias de {kind} desconocido: '{alias}'")]
    UnknownAlias { kind: AliasKind, alias: String },

    /// El léxico no tiene entrada para el número (error de datos)
    #[error("el léxico no define el numeral {value}, usar uno de {known:?}")]
    UnknownNumeral { value: u32, known: Vec<u32> },

    /// El léxico no tiene multiplicador para la escala (error de datos)
    #[error("la escala {scale} no tiene multiplicador")]
    UnknownScale { scale: String },
}

impl NumeralError {
    pub fn unknown_alias(kind: AliasKind, alias: &str) -> Self {
        Self::UnknownAlias {
            kind,
            alias: alias.to_string(),
        }
    }

    /// Indica un léxico incompleto, no un error del llamador
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            NumeralError::UnknownNumeral { .. } | NumeralError::UnknownScale { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NumeralError>;
