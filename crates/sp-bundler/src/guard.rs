//! Stage 5: Guard — shield preprocessor conditionals from renaming.

// Escape order is longest-token-first so `#if` never matches inside
// `#ifdef`/`#ifndef`. The `\x00` delimiters keep any placeholder from being
// a substring of another, so restore order does not matter.
const GUARDED: &[(&str, &str)] = &[
    ("#ifndef", "\x00PP_IFNDEF\x00"),
    ("#ifdef", "\x00PP_IFDEF\x00"),
    ("#endif", "\x00PP_ENDIF\x00"),
    ("#if", "\x00PP_IF\x00"),
];

/// Replace each reserved directive introducer with its placeholder.
pub fn escape(text: &str) -> String {
    let mut result = text.to_string();
    for (token, placeholder) in GUARDED {
        result = result.replace(token, placeholder);
    }
    result
}

/// Replace each placeholder back with its original directive token.
pub fn restore(text: &str) -> String {
    let mut result = text.to_string();
    for (token, placeholder) in GUARDED {
        result = result.replace(placeholder, token);
    }
    result
}
