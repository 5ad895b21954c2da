//! Spanish title casing
//!
//! Upper-cases the first letter of every space- or hyphen-delimited word and
//! lower-cases the rest. Spanish (and the Catalan/Galician letters that show
//! up in Spanish names) go through a fixed table; anything else falls back to
//! Unicode default case mapping, so the conversion never depends on which
//! locales the host has installed.

/// (lower, upper)
const SPANISH_CASE_PAIRS: &[(char, char)] = &[
    ('á', 'Á'),
    ('é', 'É'),
    ('í', 'Í'),
    ('ó', 'Ó'),
    ('ú', 'Ú'),
    ('ü', 'Ü'),
    ('ñ', 'Ñ'),
    ('à', 'À'),
    ('è', 'È'),
    ('ò', 'Ò'),
    ('ï', 'Ï'),
    ('ç', 'Ç'),
];

fn is_word_break(c: char) -> bool {
    c == ' ' || c == '-'
}

fn push_upper(out: &mut String, c: char) {
    match SPANISH_CASE_PAIRS.iter().find(|(lower, _)| *lower == c) {
        Some(&(_, upper)) => out.push(upper),
        None => out.extend(c.to_uppercase()),
    }
}

fn push_lower(out: &mut String, c: char) {
    match SPANISH_CASE_PAIRS.iter().find(|(_, upper)| *upper == c) {
        Some(&(lower, _)) => out.push(lower),
        None => out.extend(c.to_lowercase()),
    }
}

/// "maria de la o garcía-ÑÚÑEZ" -> "Maria De La O García-Ñúñez"
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if is_word_break(c) {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            push_upper(&mut out, c);
            at_word_start = false;
        } else {
            push_lower(&mut out, c);
        }
    }
    out
}
