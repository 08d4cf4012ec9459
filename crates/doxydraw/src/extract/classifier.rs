//! Member-line heuristics
//!
//! Best-effort text classification of flattened member lines. This is not
//! a language parser: access comes from substring search, the
//! function/variable split from the presence of a parameter list, and the
//! type guess from the first token left after stripping modifiers. The
//! heuristics live here, isolated, so they can be tested against crafted
//! line fixtures.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Access;

/// Bracketed attribute annotations such as `[Range(0, 10)]` or
/// `[SerializeField]`; they pollute access and type detection.
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());

/// `<name>(<params>)`: the name capture is the contiguous identifier run
/// immediately preceding the opening parenthesis.
static SIGNATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*\(([^)]*)\)").unwrap());

/// Access and inheritance modifiers stripped before type inference.
static MODIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(public|protected|private|static|override|virtual|abstract)\b").unwrap()
});

/// Bracket groups inside a parameter list, e.g. array ranks of generic
/// parameter types.
static BRACKET_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());

/// Leading identifier token, the type-guess candidate.
static FIRST_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+").unwrap());

/// Tagged classification of one member line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// A parenthesized parameter list was found and split
    Function { name: String, params: String },
    /// No parameter list; the member reference name stands alone
    Variable { name: String },
    /// A parameter list is present but the signature pattern cannot
    /// split it
    Unrecognized,
}

/// Remove bracketed attribute annotations from a line.
pub fn strip_attributes(text: &str) -> String {
    ATTRIBUTE_RE.replace_all(text, "").trim().to_string()
}

/// Classify the access level of a line by substring search.
///
/// `public` wins over `protected`; everything else is treated as
/// private/default. `Access::Unknown` stays reserved for lines no branch
/// claims, which cannot happen with this priority chain.
pub fn detect_access(text: &str) -> Access {
    if text.contains("public") {
        Access::Public
    } else if text.contains("protected") {
        Access::Protected
    } else {
        Access::Private
    }
}

/// Classify a flattened member line.
///
/// A line containing both `(` and `)` is a function; its signature is
/// split by [`SIGNATURE_RE`] and commas inside bracket groups of the
/// parameter text are removed so they cannot be mistaken for parameter
/// separators. Anything else is a variable named by the member reference.
pub fn classify(text: &str, ref_name: &str) -> Classified {
    if text.contains('(') && text.contains(')') {
        match SIGNATURE_RE.captures(text) {
            Some(caps) => {
                let name = caps[1].to_string();
                let raw_params = caps[2].trim();
                let params = BRACKET_GROUP_RE
                    .replace_all(raw_params, |group: &regex::Captures<'_>| {
                        format!("[{}]", group[1].replace(',', ""))
                    })
                    .into_owned();
                Classified::Function { name, params }
            }
            None => Classified::Unrecognized,
        }
    } else {
        Classified::Variable {
            name: ref_name.to_string(),
        }
    }
}

/// Guess a member's type: strip modifiers, take the first remaining
/// token, default to `void`.
///
/// Known limitation carried over from the heuristics this replaces:
/// multi-word types (`unsigned long`) and generic types collapse to
/// their first token.
pub fn infer_type(text: &str) -> String {
    let stripped = MODIFIER_RE.replace_all(text, "");
    let stripped = stripped.trim();
    FIRST_TOKEN_RE
        .find(stripped)
        .map(|token| token.as_str().to_string())
        .unwrap_or_else(|| "void".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_attributes() {
        assert_eq!(
            strip_attributes("[SerializeField] private float speed"),
            "private float speed"
        );
        assert_eq!(
            strip_attributes("[Range(0, 10)] public int health"),
            "public int health"
        );
        assert_eq!(strip_attributes("public int health"), "public int health");
    }

    #[test]
    fn test_detect_access_priority() {
        assert_eq!(detect_access("public void Jump()"), Access::Public);
        assert_eq!(detect_access("protected int shield"), Access::Protected);
        assert_eq!(detect_access("int counter"), Access::Private);
        // "public" wins even when both words appear
        assert_eq!(detect_access("public protected x"), Access::Public);
    }

    #[test]
    fn test_classify_variable() {
        assert_eq!(
            classify("public int health", "health"),
            Classified::Variable {
                name: "health".to_string()
            }
        );
    }

    #[test]
    fn test_classify_function_no_params() {
        assert_eq!(
            classify("public void Jump()", "Jump"),
            Classified::Function {
                name: "Jump".to_string(),
                params: String::new()
            }
        );
    }

    #[test]
    fn test_classify_function_with_params() {
        assert_eq!(
            classify("public void Move(float dx, float dy)", "Move"),
            Classified::Function {
                name: "Move".to_string(),
                params: "float dx, float dy".to_string()
            }
        );
    }

    #[test]
    fn test_classify_name_is_last_identifier_before_paren() {
        let got = classify("public static int Count(string s)", "Count");
        assert_eq!(
            got,
            Classified::Function {
                name: "Count".to_string(),
                params: "string s".to_string()
            }
        );
    }

    #[test]
    fn test_classify_strips_commas_inside_brackets() {
        let got = classify("void Fill(int[,] grid, int value)", "Fill");
        assert_eq!(
            got,
            Classified::Function {
                name: "Fill".to_string(),
                params: "int[] grid, int value".to_string()
            }
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify("( )", "x"), Classified::Unrecognized);
    }

    #[test]
    fn test_infer_type_strips_modifiers() {
        assert_eq!(infer_type("public int health"), "int");
        assert_eq!(infer_type("public static override float Speed()"), "float");
        assert_eq!(infer_type("protected virtual void Digest()"), "void");
    }

    #[test]
    fn test_infer_type_defaults_to_void() {
        assert_eq!(infer_type("public"), "void");
        assert_eq!(infer_type(""), "void");
    }

    #[test]
    fn test_infer_type_first_token_limitation() {
        // Multi-word and generic types collapse to their first token.
        assert_eq!(infer_type("unsigned long ticks"), "unsigned");
        assert_eq!(infer_type("List<Item> items"), "List");
    }
}
