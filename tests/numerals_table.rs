// Numeral decoding invariants, checked against the documented example table.

use guess_toc::numerals::PARSERS;
use rstest::rstest;

fn parser(name: &str) -> &'static guess_toc::numerals::NumeralParser {
    PARSERS.iter().find(|p| p.name == name).expect("parser should be configured")
}

#[rstest]
#[case("一", 1)]
#[case("十", 10)]
#[case("二十", 20)]
#[case("一百零一", 101)]
#[case("三千二百", 3200)]
fn han_common_decodes_clear_inputs(#[case] infix: &str, #[case] expected: i64) {
    let han = parser("han-common");
    let line = format!("第{infix}章");
    let matched = han.extract(&line).expect("expected a Han numeral match");
    assert_eq!(matched.number, expected);
}

#[rstest]
#[case("IV", 4)]
#[case("IX", 9)]
#[case("MCMLXXXIV", 1984)]
fn ascii_roman_decodes_clear_inputs(#[case] infix: &str, #[case] expected: i64) {
    let roman = parser("roman-ascii-upper");
    let line = format!("Chapter {infix}.");
    let matched = roman.extract(&line).expect("expected a Roman numeral match");
    assert_eq!(matched.number, expected);
}

#[test]
fn full_width_arabic_decodes_to_12() {
    let arabic = parser("arabic-fullwidth");
    let matched = arabic.extract("第０１２页").expect("expected a full-width digit match");
    assert_eq!(matched.number, 12);
}
