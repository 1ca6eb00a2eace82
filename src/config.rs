//! Configuración y argumentos CLI

use clap::Parser;

use crate::converter::parse_number;
use crate::error::Result;
use crate::grammar::{Case, Gender};

#[derive(Parser, Debug, Clone)]
#[command(name = "numeral")]
#[command(about = "Escribe un número entero como numeral ruso declinado", long_about = None)]
#[command(version)]
pub struct Config {
    /// Número a convertir (0..=999999999999, admite separadores "_")
    #[arg(allow_negative_numbers = true)]
    pub number: String,

    /// Género gramatical: M, F o N
    #[arg(short, long, default_value = "M")]
    pub gender: String,

    /// Caso gramatical: N, G, D, A, I o P
    #[arg(short, long, default_value = "N")]
    pub case: String,

    /// Muestra el número declinado en los seis casos
    #[arg(short, long)]
    pub table: bool,

    /// Muestra el diagnóstico de cada grupo
    #[arg(short, long)]
    pub verbose: bool,
}

/// Petición ya validada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub number: i64,
    pub gender: Gender,
    pub case: Case,
}

impl Config {
    /// Valida número y alias antes de convertir nada
    pub fn request(&self) -> Result<Request> {
        Ok(Request {
            number: parse_number(&self.number)?,
            gender: self.gender.parse()?,
            case: self.case.parse()?,
        })
    }

    /// Directiva de filtro para `tracing-subscriber`
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "numeral=trace"
        } else {
            "numeral=warn"
        }
    }
}
