//! Built-in word list
//!
//! A word list compiled into the binary so the game runs without any files.
//! A custom list can be appended at startup with `--wordlist`.

/// Number of built-in words
pub const BUILTIN_COUNT: usize = 100;

/// Built-in 5-letter words, all lowercase
pub const BUILTIN: &[&str] = &[
    "fiber", "movie", "local", "ready", "drill", //
    "green", "occur", "smith", "drawn", "party", //
    "undue", "peace", "stuck", "those", "river", //
    "guest", "block", "shirt", "proud", "royal", //
    "about", "above", "actor", "adult", "agent", //
    "agree", "ahead", "alarm", "album", "alert", //
    "alone", "along", "among", "angle", "apple", //
    "apply", "arena", "argue", "arise", "avoid", //
    "awake", "aware", "basic", "beach", "begin", //
    "being", "below", "bench", "birth", "black", //
    "blame", "blind", "board", "boost", "booth", //
    "bound", "brain", "brand", "bread", "break", //
    "brief", "bring", "broad", "brown", "build", //
    "burst", "cabin", "cable", "carry", "catch", //
    "cause", "chain", "chair", "chaos", "charm", //
    "chart", "chase", "cheap", "check", "chest", //
    "chief", "child", "china", "chose", "civil", //
    "claim", "class", "clean", "clear", "climb", //
    "clock", "close", "coach", "coast", "could", //
    "count", "court", "cover", "craft", "crash", //
];
