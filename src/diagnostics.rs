//! Diagnóstico opcional de la conversión
//!
//! El motor no registra nada por sí mismo: quien quiera seguir la
//! conversión inyecta un `DiagnosticsSink` en el `NumberConverter`.

use crate::grammar::{Case, Gender};
use crate::lexicon::Scale;

/// Evento emitido durante una conversión
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// Un grupo de tres cifras ya declinado, multiplicador incluido
    GroupRendered {
        scale: Scale,
        value: u32,
        gender: Gender,
        words: &'a [String],
    },
    /// Resultado final de la conversión
    Converted {
        number: u64,
        gender: Gender,
        case: Case,
        text: &'a str,
    },
}

/// Receptor de eventos de diagnóstico
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, event: &Event<'_>);
}

/// Reenvía los eventos a `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn record(&self, event: &Event<'_>) {
        match event {
            Event::GroupRendered {
                scale,
                value,
                gender,
                words,
            } => {
                tracing::trace!(
                    scale = %scale,
                    value,
                    gender = %gender,
                    words = %words.join(" "),
                    "grupo declinado"
                );
            }
            Event::Converted {
                number,
                gender,
                case,
                text,
            } => {
                tracing::debug!(number, gender = %gender, case = %case, text, "número convertido");
            }
        }
    }
}
