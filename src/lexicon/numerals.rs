//! Numerales con declinación propia
//!
//! Cada entrada guarda las seis formas de caso (en el orden de `Case::ALL`),
//! invariables o con una forma por género. La tabla está ordenada por valor
//! para la búsqueda binaria de `lookup_numeral`.

use super::{Forms, NumeralEntry};

const fn invariant(words: [&'static str; 6]) -> [Forms; 6] {
    [
        Forms::Invariant(words[0]),
        Forms::Invariant(words[1]),
        Forms::Invariant(words[2]),
        Forms::Invariant(words[3]),
        Forms::Invariant(words[4]),
        Forms::Invariant(words[5]),
    ]
}

const fn entry(value: u32, cases: [Forms; 6]) -> NumeralEntry {
    NumeralEntry { value, cases }
}

pub(crate) static NUMERALS: [NumeralEntry; 28] = [
    entry(0, invariant(["ноль", "ноля", "нолю", "ноль", "нолём", "ноле"])),
    entry(
        1,
        [
            Forms::ByGender(["один", "одна", "одно"]),
            Forms::ByGender(["одного", "одной", "одного"]),
            Forms::ByGender(["одному", "одной", "одному"]),
            Forms::ByGender(["один", "одну", "одно"]),
            Forms::ByGender(["одним", "одной", "одним"]),
            Forms::ByGender(["одном", "одной", "одном"]),
        ],
    ),
    entry(
        2,
        [
            Forms::ByGender(["два", "две", "два"]),
            Forms::Invariant("двух"),
            Forms::Invariant("двум"),
            Forms::ByGender(["два", "две", "два"]),
            Forms::Invariant("двумя"),
            Forms::Invariant("двух"),
        ],
    ),
    entry(3, invariant(["три", "трёх", "трём", "три", "тремя", "трёх"])),
    entry(
        4,
        invariant(["четыре", "четырёх", "четырём", "четыре", "четырьмя", "четырёх"]),
    ),
    entry(5, invariant(["пять", "пяти", "пяти", "пять", "пятью", "пяти"])),
    entry(6, invariant(["шесть", "шести", "шести", "шесть", "шестью", "шести"])),
    entry(7, invariant(["семь", "семи", "семи", "семь", "семью", "семи"])),
    // "восьмью" y no "восемью": es la base de "восьмьюстами"
    entry(8, invariant(["восемь", "восьми", "восьми", "восемь", "восьмью", "восьми"])),
    entry(9, invariant(["девять", "девяти", "девяти", "девять", "девятью", "девяти"])),
    entry(10, invariant(["десять", "десяти", "десяти", "десять", "десятью", "десяти"])),
    entry(
        11,
        invariant([
            "одиннадцать",
            "одиннадцати",
            "одиннадцати",
            "одиннадцать",
            "одиннадцатью",
            "одиннадцати",
        ]),
    ),
    entry(
        12,
        invariant([
            "двенадцать",
            "двенадцати",
            "двенадцати",
            "двенадцать",
            "двенадцатью",
            "двенадцати",
        ]),
    ),
    entry(
        13,
        invariant([
            "тринадцать",
            "тринадцати",
            "тринадцати",
            "тринадцать",
            "тринадцатью",
            "тринадцати",
        ]),
    ),
    entry(
        14,
        invariant([
            "четырнадцать",
            "четырнадцати",
            "четырнадцати",
            "четырнадцать",
            "четырнадцатью",
            "четырнадцати",
        ]),
    ),
    entry(
        15,
        invariant([
            "пятнадцать",
            "пятнадцати",
            "пятнадцати",
            "пятнадцать",
            "пятнадцатью",
            "пятнадцати",
        ]),
    ),
    entry(
        16,
        invariant([
            "шестнадцать",
            "шестнадцати",
            "шестнадцати",
            "шестнадцать",
            "шестнадцатью",
            "шестнадцати",
        ]),
    ),
    entry(
        17,
        invariant([
            "семнадцать",
            "семнадцати",
            "семнадцати",
            "семнадцать",
            "семнадцатью",
            "семнадцати",
        ]),
    ),
    entry(
        18,
        invariant([
            "восемнадцать",
            "восемнадцати",
            "восемнадцати",
            "восемнадцать",
            "восемнадцатью",
            "восемнадцати",
        ]),
    ),
    entry(
        19,
        invariant([
            "девятнадцать",
            "девятнадцати",
            "девятнадцати",
            "девятнадцать",
            "девятнадцатью",
            "девятнадцати",
        ]),
    ),
    entry(
        20,
        invariant(["двадцать", "двадцати", "двадцати", "двадцать", "двадцатью", "двадцати"]),
    ),
    entry(
        30,
        invariant(["тридцать", "тридцати", "тридцати", "тридцать", "тридцатью", "тридцати"]),
    ),
    entry(40, invariant(["сорок", "сорока", "сорока", "сорок", "сорока", "сорока"])),
    entry(
        90,
        invariant(["девяносто", "девяноста", "девяноста", "девяносто", "девяноста", "девяноста"]),
    ),
    entry(100, invariant(["сто", "ста", "ста", "сто", "ста", "ста"])),
    entry(
        200,
        invariant(["двести", "двухсот", "двумстам", "двести", "двумястами", "двухстах"]),
    ),
    entry(
        300,
        invariant(["триста", "трёхсот", "трёмстам", "триста", "тремястами", "трёхстах"]),
    ),
    entry(
        400,
        invariant([
            "четыреста",
            "четырёхсот",
            "четырёмстам",
            "четыреста",
            "четырьмястами",
            "четырёхстах",
        ]),
    ),
];
