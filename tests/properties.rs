//! Encoding invariants over arbitrary input.

use code39::{encode, encode_with, pattern, sanitize, Code39, RenderConfig, SENTINEL, SYMBOLS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn payload_chars() -> Vec<char> {
    SYMBOLS.iter().map(|&(c, _)| c).filter(|&c| c != SENTINEL).collect()
}

fn payload_char() -> impl Strategy<Value = char> {
    proptest::sample::select(payload_chars())
}

#[test]
fn test_payload_alphabet() {
    let chars: String = payload_chars().into_iter().collect();
    assert_eq!(chars, "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%");
}

#[test]
fn test_lowercase_is_recognized() {
    for c in payload_chars() {
        let lower: String = c.to_lowercase().collect();
        assert_eq!(sanitize(&lower), c.to_uppercase().to_string());
    }
}

#[test]
fn test_reserved_star_is_stripped() {
    assert_eq!(sanitize("AB*CD"), "ABCD");
    let (a, b) = (encode("AB*CD"), encode("ABCD"));
    assert_eq!(a.bars, b.bars);
    assert_eq!(a.total_width, b.total_width);
    assert_eq!(a.label.as_deref(), Some("AB*CD"));
}

proptest! {
    #[test]
    fn sanitize_only_keeps_payload(s in ".*") {
        let alphabet = payload_chars();
        prop_assert!(sanitize(&s).chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn sanitize_is_idempotent(s in ".*") {
        let once = sanitize(&s);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn message_is_framed_by_sentinels(s in ".*") {
        let code = Code39::new(&s);
        let symbols: Vec<_> = code.symbols().collect();
        let star = pattern(SENTINEL).unwrap();

        prop_assert!(symbols.len() >= 2);
        prop_assert_eq!(symbols[0], star);
        prop_assert_eq!(symbols[symbols.len() - 1], star);
        prop_assert!(symbols[1..symbols.len() - 1].iter().all(|&p| p != star));
    }

    #[test]
    fn each_symbol_adds_thirteen_elements(
        s in proptest::collection::vec(payload_char(), 0..40),
        c in payload_char(),
        bar_width in 1u32..8,
        quiet_zone in 0u32..32,
    ) {
        let config = RenderConfig::new().with_bar_width(bar_width).with_quiet_zone(quiet_zone);
        let short: String = s.iter().collect();
        let long: String = s.iter().chain(core::iter::once(&c)).collect();

        let a = encode_with(&short, &config).unwrap();
        let b = encode_with(&long, &config).unwrap();

        prop_assert_eq!(b.total_width, a.total_width + 13 * bar_width);
        prop_assert_eq!(a.total_width, 2 * quiet_zone + 13 * bar_width * (s.len() as u32 + 2));
    }

    #[test]
    fn bar_count_matches_patterns(s in ".*") {
        let g = encode(&s);
        let expected: u32 = Code39::new(&s).symbols().map(|p| p.bars()).sum();
        prop_assert_eq!(g.bars.len() as u32, expected);
    }

    #[test]
    fn bars_stay_inside_quiet_zones(s in ".{0,64}", bar_width in 1u32..5, quiet_zone in 0u32..20) {
        let config = RenderConfig::new().with_bar_width(bar_width).with_quiet_zone(quiet_zone);
        let g = encode_with(&s, &config).unwrap();

        prop_assert!(g.bars.windows(2).all(|w| w[0].x + w[0].width <= w[1].x));
        prop_assert_eq!(g.bars[0].x, quiet_zone);
        let last = g.bars[g.bars.len() - 1];
        // stop character ends on a bar, followed by its gap
        prop_assert_eq!(last.x + last.width + bar_width + quiet_zone, g.total_width);
    }

    #[test]
    fn encoding_is_deterministic(s in ".*") {
        prop_assert_eq!(encode(&s), encode(&s));
        prop_assert_eq!(encode(&s).to_svg(), encode(&s).to_svg());
    }

    #[test]
    fn label_is_the_original_value(s in ".*") {
        prop_assert_eq!(encode(&s).label, Some(s.clone()));
    }
}
