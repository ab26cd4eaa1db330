//! `#define` extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize;
use super::types::DefineEntry;

/// `#define NAME VALUE` on one line. The name is the first run of
/// non-space characters, so function-like macros keep their parameter list.
static DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^ *#define +([^ \n]+) +(.+)$").expect("define pattern is valid")
});

/// Return the `(name, value)` pairs of every `#define NAME VALUE` line.
///
/// Values are captured verbatim and never evaluated. A `#define` without a
/// value, or one continued onto the next line with `\`, is skipped.
pub fn extract_defines(contents: &str) -> Vec<DefineEntry> {
    let contents = normalize(contents);
    let mut defines = Vec::new();

    for caps in DEFINE.captures_iter(&contents) {
        let name = &caps[1];
        let value = &caps[2];

        if value.ends_with('\\') {
            tracing::debug!("skipping multi-line #define {}", name);
            continue;
        }

        defines.push(DefineEntry::new(name, value));
    }

    defines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(src: &str) -> Vec<(String, String)> {
        extract_defines(src)
            .into_iter()
            .map(|d| (d.name, d.value))
            .collect()
    }

    #[test]
    fn test_simple_defines() {
        assert_eq!(
            pairs("#define X 42\n#define Y \"str\""),
            vec![
                ("X".to_string(), "42".to_string()),
                ("Y".to_string(), "\"str\"".to_string())
            ]
        );
    }

    #[test]
    fn test_value_is_rest_of_line() {
        let defines = extract_defines("#define OFPFW_ALL ((1 << 22) - 1) /* all */\n");
        assert_eq!(defines, vec![DefineEntry::new("OFPFW_ALL", "((1 << 22) - 1)")]);
    }

    #[test]
    fn test_function_like_macro_keeps_params() {
        let defines = extract_defines("#define MAX(a,b) ((a) > (b) ? (a) : (b))");
        assert_eq!(defines[0].name, "MAX(a,b)");
        assert_eq!(defines[0].value, "((a) > (b) ? (a) : (b))");
    }

    #[test]
    fn test_skips_malformed_lines() {
        let src = "#define GUARD_H\n#define EMPTY   \n#define LONG \\\n  1 + 2\n#include <stdint.h>\nint x;\n";
        assert!(extract_defines(src).is_empty());
    }

    #[test]
    fn test_tabs_and_duplicates() {
        let src = "#define\tA\t1\n#define A 2\n";
        assert_eq!(
            extract_defines(src),
            vec![DefineEntry::new("A", "1"), DefineEntry::new("A", "2")]
        );
    }

    #[test]
    fn test_indented_define() {
        assert_eq!(
            extract_defines("#ifdef X\n  #define Y 3\n#endif\n"),
            vec![DefineEntry::new("Y", "3")]
        );
    }
}
