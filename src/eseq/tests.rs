use super::*;

use rstest::rstest;

#[rstest]
#[case::reset(Mode::Reset.into(), "0")]
#[case::bold(Mode::Bold.into(), "1")]
#[case::black(Color::Black.fg(), "30")]
#[case::red(Color::Red.fg(), "31")]
#[case::yellow(Color::Yellow.fg(), "33")]
#[case::blue(Color::Blue.fg(), "34")]
#[case::white(Color::White.fg(), "37")]
fn test_style_code_render(#[case] code: StyleCode, #[case] expected: &str) {
    let mut buf = String::new();
    code.render(&mut buf);
    assert_eq!(buf, expected);
}

#[test]
fn test_sequence() {
    assert_eq!(Sequence::reset().to_string(), "\x1b[0m");
    assert_eq!(Sequence::from(Color::Red.fg()).to_string(), "\x1b[31m");
    assert_eq!(Sequence::new([Mode::Bold.into(), Color::Red.fg()]).to_string(), "\x1b[1;31m");
    assert_eq!(Sequence::new(Vec::<StyleCode>::new()).to_string(), "\x1b[m");
}
