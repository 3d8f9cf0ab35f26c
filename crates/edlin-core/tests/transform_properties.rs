//! Randomized checks of the line transforms.
//!
//! Inputs are drawn from a small alphabet rich in whitespace and line terminators so that blank
//! lines, mixed endings and edge delimiters come up often. Seeds are fixed to keep failures
//! reproducible.

use edlin_core::transform::{
    DEFAULT_DELIMITER, combine_lines, remove_blank_lines, resolve_delimiter, split_line,
    trim_lines,
};
use edlin_core::{LineEnding, SplitMode, TrimSide};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[&str] = &[
    "a", "b", "z", "é", "中", " ", "\t", "\u{3000}", ",", ";", "\n", "\r", "\r\n",
];

const ITERATIONS: usize = 2_000;

fn random_text(rng: &mut StdRng, max_tokens: usize) -> String {
    let len = rng.gen_range(0..=max_tokens);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn random_line(rng: &mut StdRng, max_tokens: usize) -> String {
    random_text(rng, max_tokens).replace(&['\r', '\n'][..], "")
}

#[test]
fn test_detection_defaults_without_terminators() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ITERATIONS {
        let line = random_line(&mut rng, 24);
        assert_eq!(LineEnding::detect_in_text(&line), LineEnding::Crlf);
    }
}

#[test]
fn test_detection_matches_reference_priority() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng, 24);
        let expected = if text.contains("\r\n") {
            LineEnding::Crlf
        } else if text.contains('\r') {
            LineEnding::Cr
        } else if text.contains('\n') {
            LineEnding::Lf
        } else {
            LineEnding::Crlf
        };
        assert_eq!(LineEnding::detect_in_text(&text), expected, "{text:?}");
    }
}

#[test]
fn test_split_is_identity_without_delimiter() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ITERATIONS {
        let line = random_line(&mut rng, 24).replace('|', "");
        for mode in [SplitMode::Discard, SplitMode::Keep] {
            assert_eq!(split_line(&line, "|", LineEnding::Lf, mode), line);
        }
    }
}

#[test]
fn test_combine_undoes_plain_split() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ITERATIONS {
        let line = random_line(&mut rng, 24);
        let delimiter = resolve_delimiter(if rng.gen_bool(0.5) { "," } else { "" });
        let split = split_line(&line, delimiter, LineEnding::Lf, SplitMode::Discard);
        assert_eq!(combine_lines(&split), line.replace(delimiter, ""));
    }
}

#[test]
fn test_split_and_keep_then_combine_restores_line() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ITERATIONS {
        let line = random_line(&mut rng, 24);
        let split = split_line(&line, DEFAULT_DELIMITER, LineEnding::Crlf, SplitMode::Keep);
        assert_eq!(combine_lines(&split), line);
    }
}

#[test]
fn test_remove_blank_lines_keeps_only_content_in_order() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng, 32);
        let ending = LineEnding::detect_in_text(&text);
        let out = remove_blank_lines(&text);

        let expected: Vec<&str> = text
            .split(ending.as_str())
            .filter(|line| !line.trim().is_empty())
            .collect();
        let actual: Vec<&str> = if out.is_empty() {
            Vec::new()
        } else {
            out.split(ending.as_str()).collect()
        };
        assert_eq!(actual, expected, "{text:?}");
        assert!(actual.iter().all(|line| !line.trim().is_empty()));
    }
}

#[test]
fn test_trim_both_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng, 32);
        let once = trim_lines(&text, TrimSide::Both);
        let twice = trim_lines(&once, TrimSide::Both);
        assert_eq!(once, twice, "{text:?}");
    }
}

#[test]
fn test_trim_preserves_line_count() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng, 32);
        let ending = LineEnding::detect_in_text(&text);
        for side in [TrimSide::Left, TrimSide::Right, TrimSide::Both] {
            let out = trim_lines(&text, side);
            assert_eq!(
                out.split(ending.as_str()).count(),
                text.split(ending.as_str()).count(),
                "{side:?} {text:?}"
            );
        }
    }
}
