use super::*;

#[test]
fn test_parse_include_exact_form() {
    assert_eq!(parse_include(r#"#include "a.txt""#), Some("a.txt"));
    assert_eq!(parse_include(r#"   #include "dir/b.glsl"   "#), Some("dir/b.glsl"));
    assert_eq!(parse_include("\t#include \"c\"\r"), Some("c"));
}

#[test]
fn test_parse_include_rejects_near_misses() {
    for line in [
        "#include <a.txt>",
        r#"# include "a.txt""#,
        r#"#include  "a.txt""#,
        r#"#include"a.txt""#,
        r#"#include """#,
        r#"#include "a"b""#,
        r#"#include "a.txt" // trailing"#,
        r#"#include "a.txt"#,
        r#"#import "a.txt""#,
    ] {
        assert_eq!(parse_include(line), None, "{line:?} should not be a directive");
    }
}

#[test]
fn test_classify_line() {
    assert_eq!(classify_line(""), HeaderLine::Blank);
    assert_eq!(classify_line("   \t\r\n"), HeaderLine::Blank);
    assert_eq!(classify_line("// comment"), HeaderLine::Comment);
    assert_eq!(classify_line("   //indented"), HeaderLine::Comment);
    assert_eq!(classify_line("#include \"x.h\"\n"), HeaderLine::Include("x.h"));
    assert_eq!(classify_line("void main() {}"), HeaderLine::Content);
    assert_eq!(classify_line("/* block */"), HeaderLine::Content);
}

#[test]
fn test_is_malformed_include() {
    assert!(is_malformed_include("#include <a>"));
    assert!(is_malformed_include(r#"# include "a""#));
    assert!(is_malformed_include(r#"#include  "a""#));
    assert!(!is_malformed_include(r#"#include "a""#));
    assert!(!is_malformed_include("#define X 1"));
    assert!(!is_malformed_include("#includes"));
}
