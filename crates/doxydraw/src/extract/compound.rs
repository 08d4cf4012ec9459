//! Doxygen compound-XML reader
//!
//! Streams one compound document (one class) with quick-xml and collects
//! the raw material the classifier works on: the compound name and the
//! flattened text of every code line tagged as a member reference.
//!
//! Flattening concatenates all text fragments inside a `codeline`,
//! substituting `<sp/>` markup with a literal space. Lines without a
//! nested `ref` element carry no usable member name and are skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::PipelineError;

/// A code line tagged as a member declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberLine {
    /// Member name from the line's first `ref` element
    pub name: String,
    /// Flattened text of the whole line
    pub text: String,
}

/// Raw contents of one compound document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundDoc {
    /// Text of the first `compoundname` element, if any
    pub name: Option<String>,
    /// Member-tagged code lines in document order
    pub members: Vec<MemberLine>,
}

fn attr_value(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, PipelineError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| PipelineError::xml(err.to_string()))?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|err| PipelineError::xml(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Resolve a general entity reference to its character, if it is one of
/// the predefined XML entities or a numeric character reference.
fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Parse one Doxygen compound document.
///
/// Returns an XML syntax error for malformed input; structural gaps (no
/// compound name, member lines without a `ref`) degrade to `None`/skipped
/// entries instead of failing.
pub fn parse_compound(xml: &str) -> Result<CompoundDoc, PipelineError> {
    let mut reader = Reader::from_str(xml);
    let mut doc = CompoundDoc::default();

    let mut in_compoundname = false;
    let mut name_buf = String::new();
    let mut in_member_line = false;
    // Capturing the first ref of the current line; later refs only
    // contribute to the flattened text.
    let mut in_ref = false;
    let mut line_text = String::new();
    let mut ref_name: Option<String> = None;

    loop {
        match reader.read_event() {
            Err(e) => return Err(PipelineError::xml(e.to_string())),
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"compoundname" if doc.name.is_none() => {
                    in_compoundname = true;
                    name_buf.clear();
                }
                b"codeline" => {
                    if attr_value(&e, "refkind")?.as_deref() == Some("member") {
                        in_member_line = true;
                        line_text.clear();
                        ref_name = None;
                    }
                }
                b"ref" if in_member_line && ref_name.is_none() => in_ref = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if in_member_line && e.local_name().as_ref() == b"sp" {
                    line_text.push(' ');
                }
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .decode()
                    .map_err(|err| PipelineError::xml(err.to_string()))?;
                if in_compoundname {
                    name_buf.push_str(&text);
                } else if in_member_line {
                    if in_ref {
                        ref_name = Some(text.trim().to_string());
                    }
                    line_text.push_str(&text);
                }
            }
            Ok(Event::GeneralRef(r)) => {
                if in_compoundname || in_member_line {
                    let entity = r
                        .decode()
                        .map_err(|err| PipelineError::xml(err.to_string()))?;
                    if let Some(c) = resolve_entity(&entity) {
                        if in_compoundname {
                            name_buf.push(c);
                        } else {
                            line_text.push(c);
                        }
                    }
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"compoundname" => {
                    if in_compoundname {
                        doc.name = Some(name_buf.trim().to_string());
                        in_compoundname = false;
                    }
                }
                b"ref" => in_ref = false,
                b"codeline" => {
                    if in_member_line {
                        match ref_name.take() {
                            Some(name) if !name.is_empty() => doc.members.push(MemberLine {
                                name,
                                text: line_text.clone(),
                            }),
                            // No usable member reference on this line.
                            _ => {}
                        }
                        in_member_line = false;
                    }
                }
                _ => {}
            },
            Ok(_) => {}
        }
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<doxygen>
  <compounddef id="class_player" kind="class">
    <compoundname>Player</compoundname>
    <programlisting>
      <codeline refkind="member"><highlight class="normal">public<sp/>int<sp/><ref refid="a1" kindref="member">health</ref></highlight></codeline>
      <codeline refkind="member"><highlight class="normal">public<sp/>void<sp/><ref refid="a2" kindref="member">Jump</ref>()</highlight></codeline>
      <codeline><highlight class="comment">// just a comment</highlight></codeline>
    </programlisting>
  </compounddef>
</doxygen>"#;

    #[test]
    fn test_parse_compound_name() {
        let doc = parse_compound(PLAYER_XML).unwrap();
        assert_eq!(doc.name, Some("Player".to_string()));
    }

    #[test]
    fn test_member_lines_only() {
        let doc = parse_compound(PLAYER_XML).unwrap();
        assert_eq!(doc.members.len(), 2);
        assert_eq!(doc.members[0].name, "health");
        assert_eq!(doc.members[1].name, "Jump");
    }

    #[test]
    fn test_sp_markup_becomes_space() {
        let doc = parse_compound(PLAYER_XML).unwrap();
        assert_eq!(doc.members[0].text, "public int health");
        assert_eq!(doc.members[1].text, "public void Jump()");
    }

    #[test]
    fn test_missing_compound_name() {
        let xml = r#"<doxygen><compounddef kind="class"></compounddef></doxygen>"#;
        let doc = parse_compound(xml).unwrap();
        assert_eq!(doc.name, None);
        assert!(doc.members.is_empty());
    }

    #[test]
    fn test_member_line_without_ref_is_skipped() {
        let xml = r#"<doxygen>
  <compoundname>Orphan</compoundname>
  <codeline refkind="member"><highlight>public int nameless</highlight></codeline>
</doxygen>"#;
        let doc = parse_compound(xml).unwrap();
        assert!(doc.members.is_empty());
    }

    #[test]
    fn test_only_first_ref_names_the_member() {
        let xml = r#"<doxygen>
  <compoundname>Weapon</compoundname>
  <codeline refkind="member"><ref refid="a1">Fire</ref>(<ref refid="a2">Ammo</ref> ammo)</codeline>
</doxygen>"#;
        let doc = parse_compound(xml).unwrap();
        assert_eq!(doc.members.len(), 1);
        assert_eq!(doc.members[0].name, "Fire");
        assert_eq!(doc.members[0].text, "Fire(Ammo ammo)");
    }

    #[test]
    fn test_entities_are_resolved_in_line_text() {
        let xml = r#"<doxygen>
  <compoundname>Inventory</compoundname>
  <codeline refkind="member">public<sp/>List&lt;Item&gt;<sp/><ref refid="a1">items</ref></codeline>
</doxygen>"#;
        let doc = parse_compound(xml).unwrap();
        assert_eq!(doc.members[0].text, "public List<Item> items");
    }

    #[test]
    fn test_malformed_xml_is_a_syntax_error() {
        let err = parse_compound("<doxygen><compoundname>Broken</oops></doxygen>").unwrap_err();
        assert!(matches!(err, PipelineError::Xml { .. }));
    }

    #[test]
    fn test_only_first_compoundname_wins() {
        let xml = r#"<doxygen>
  <compoundname>First</compoundname>
  <compoundname>Second</compoundname>
</doxygen>"#;
        let doc = parse_compound(xml).unwrap();
        assert_eq!(doc.name, Some("First".to_string()));
    }
}
