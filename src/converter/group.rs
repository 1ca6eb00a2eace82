//! Declinación de un grupo de tres cifras (1-999)

use crate::error::{NumeralError, Result};
use crate::grammar::{Case, Gender};
use crate::lexicon::{hundreds_ending, lookup_numeral, tens_ending};

/// Centenas con entrada propia en el léxico (100-400)
const LITERAL_HUNDREDS: [u32; 4] = [1, 2, 3, 4];

/// Decenas con entrada propia en el léxico (20, 30, 40, 90)
const LITERAL_TENS: [u32; 4] = [2, 3, 4, 9];

/// Declina un número entre 1 y 999.
///
/// Devuelve las palabras en orden: centenas, decenas (o el número 10-19
/// completo) y unidades. El cero no se acepta: los grupos nulos se filtran
/// antes de llegar aquí.
pub fn render_group(value: u32, gender: Gender, case: Case) -> Result<Vec<String>> {
    if value == 0 || value > 999 {
        return Err(NumeralError::NumberRange {
            number: i128::from(value),
            max: 999,
        });
    }

    let mut words = Vec::with_capacity(3);

    let hundreds = value / 100;
    if hundreds != 0 {
        if LITERAL_HUNDREDS.contains(&hundreds) {
            words.push(lookup_numeral(hundreds * 100, gender, case)?.to_string());
        } else {
            // 500-900: cifra base + "сот"/"стам"/...
            words.push(generative(hundreds, gender, case, hundreds_ending(case))?);
        }
    }

    let tens = (value / 10) % 10;
    if tens == 1 {
        // 10-19 es una sola palabra y ya incluye las unidades
        words.push(lookup_numeral(value % 100, gender, case)?.to_string());
        return Ok(words);
    }
    if tens != 0 {
        if LITERAL_TENS.contains(&tens) {
            words.push(lookup_numeral(tens * 10, gender, case)?.to_string());
        } else {
            // 50-80: cifra base + "десят"/"десяти"/...
            words.push(generative(tens, gender, case, tens_ending(case))?);
        }
    }

    let units = value % 10;
    if units != 0 {
        words.push(lookup_numeral(units, gender, case)?.to_string());
    }

    Ok(words)
}

/// Forma generativa: sólo se declina la cifra base
fn generative(digit: u32, gender: Gender, case: Case, ending: &str) -> Result<String> {
    let base = lookup_numeral(digit, gender, case)?;
    Ok(format!("{}{}", base, ending))
}
