//! Numeral - Conversión de enteros a numerales cardinales rusos
//!
//! Declina cualquier número entre 0 y 999 999 999 999 en los seis casos
//! del ruso, con concordancia de género en las unidades y en los
//! multiplicadores (тысяча, миллион, миллиард).

pub mod config;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod lexicon;

pub use config::Config;
pub use converter::{convert, convert_number, parse_number, NumberConverter, MAX_NUMBER};
pub use diagnostics::{DiagnosticsSink, Event, TracingDiagnostics};
pub use error::{AliasKind, NumeralError, Result};
pub use grammar::{Case, CaseGroup, Gender};
pub use lexicon::Scale;
