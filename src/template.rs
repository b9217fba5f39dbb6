//! Indexed placeholder substitution for message templates.
//!
//! Templates use positional placeholders of the form
//! `{index[,alignment][:format]}`. `{{` and `}}` produce literal braces.
//! Arguments are rendered through their `Display` implementation, so the
//! `:format` component is accepted but has no effect.
//!
//! Indexes and alignment widths are limited to values below one million, so
//! a template cannot request an arbitrarily large padding allocation.

use std::fmt::{Display, Write};

use crate::error::FormatError;

/// Indexes and alignment widths must stay below this bound.
const MAX_COMPONENT: usize = 1_000_000;

/// A parsed `{index[,alignment][:format]}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder {
    index: usize,
    width: usize,
    left_align: bool,
}

/// Plain ASCII digits below [`MAX_COMPONENT`]; signs are rejected.
fn parse_component(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&n| n < MAX_COMPONENT)
}

impl Placeholder {
    fn parse(body: &str) -> Option<Self> {
        let head = body.split_once(':').map_or(body, |(head, _format)| head);
        let (index, alignment) = match head.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (head, None),
        };

        let index = parse_component(index.trim_end())?;

        let (width, left_align) = match alignment.map(str::trim) {
            Some(text) => match text.strip_prefix('-') {
                Some(digits) => (parse_component(digits)?, true),
                None => (parse_component(text)?, false),
            },
            None => (0, false),
        };

        Some(Self {
            index,
            width,
            left_align,
        })
    }

    fn write(self, out: &mut String, arg: &dyn Display) -> Result<(), FormatError> {
        let mut rendered = String::new();
        write!(rendered, "{arg}").map_err(|_| FormatError::Argument { index: self.index })?;

        let padding = self.width.saturating_sub(rendered.chars().count());
        if self.left_align {
            out.push_str(&rendered);
            out.extend(std::iter::repeat_n(' ', padding));
        } else {
            out.extend(std::iter::repeat_n(' ', padding));
            out.push_str(&rendered);
        }
        Ok(())
    }
}

/// Render `template`, substituting `args[n]` for every `{n}` placeholder.
///
/// Positions reported in errors are byte offsets into `template`.
///
/// # Errors
///
/// Returns a [`FormatError`] when a placeholder references an argument that
/// was not supplied, when braces are unbalanced, when a placeholder is not of
/// the form `index[,alignment][:format]`, or when an argument fails to render.
pub fn format_indexed(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let mut body = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    body.push(inner);
                }
                if !closed {
                    return Err(FormatError::UnclosedPlaceholder { position });
                }

                let placeholder =
                    Placeholder::parse(&body).ok_or_else(|| FormatError::InvalidPlaceholder {
                        text: body.clone(),
                        position,
                    })?;
                let arg = args
                    .get(placeholder.index)
                    .ok_or(FormatError::IndexOutOfRange {
                        index: placeholder.index,
                        count: args.len(),
                        position,
                    })?;
                placeholder.write(&mut out, *arg)?;
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(FormatError::UnmatchedBrace { position });
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use rstest::rstest;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    // -- substitution --

    #[rstest]
    #[case::single("{0} not found", "Widget not found")]
    #[case::repeated("{0}/{0}", "Widget/Widget")]
    #[case::out_of_order("{1} before {0}", "7 before Widget")]
    #[case::no_placeholders("plain text", "plain text")]
    #[case::escaped_braces("{{{0}}}", "{Widget}")]
    #[case::format_component_ignored("{0:D3}", "Widget")]
    #[case::trailing_space_after_index("{0 }", "Widget")]
    fn substitutes_arguments(#[case] template: &str, #[case] expected: &str) {
        let rendered = format_indexed(template, &[&"Widget", &7]).unwrap();
        assert_eq!(rendered, expected);
    }

    // Positive alignment pads on the left, negative on the right, and a
    // value wider than the alignment is never truncated.
    #[rstest]
    #[case::right("[{0,5}]", "[   ab]")]
    #[case::left("[{0,-5}]", "[ab   ]")]
    #[case::spaced("[{0, 4}]", "[  ab]")]
    #[case::narrower_than_value("[{0,1}]", "[ab]")]
    #[case::zero_width("[{0,-0}]", "[ab]")]
    #[case::one_space("[{0,3}]", "[ ab]")]
    fn applies_alignment(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(format_indexed(template, &[&"ab"]).unwrap(), expected);
    }

    // The largest accepted width still renders in full.
    #[test]
    fn widest_alignment_is_accepted() {
        let rendered = format_indexed("{0,999999}", &[&"ab"]).unwrap();
        assert_eq!(rendered.len(), 999_999);
        assert!(rendered.ends_with(" ab"));
    }

    // -- errors --

    #[test]
    fn missing_argument_is_an_error() {
        let err = format_indexed("{0} and {1}", &[&"only-one-arg"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::IndexOutOfRange {
                index: 1,
                count: 1,
                position: 8
            }
        );
    }

    #[rstest]
    #[case::unclosed("abc {0", FormatError::UnclosedPlaceholder { position: 4 })]
    #[case::stray_close("a } b", FormatError::UnmatchedBrace { position: 2 })]
    #[case::empty_placeholder("{}", FormatError::InvalidPlaceholder { text: String::new(), position: 0 })]
    #[case::named_placeholder("{name}", FormatError::InvalidPlaceholder { text: "name".to_string(), position: 0 })]
    #[case::leading_space("{ 0}", FormatError::InvalidPlaceholder { text: " 0".to_string(), position: 0 })]
    #[case::bad_alignment("{0,x}", FormatError::InvalidPlaceholder { text: "0,x".to_string(), position: 0 })]
    #[case::plus_sign_alignment("{0,+5}", FormatError::InvalidPlaceholder { text: "0,+5".to_string(), position: 0 })]
    #[case::alignment_too_wide("{0,1000000}", FormatError::InvalidPlaceholder { text: "0,1000000".to_string(), position: 0 })]
    #[case::alignment_isize_min("{0,-9223372036854775808}", FormatError::InvalidPlaceholder { text: "0,-9223372036854775808".to_string(), position: 0 })]
    #[case::alignment_overflows("{0,99999999999999999999999}", FormatError::InvalidPlaceholder { text: "0,99999999999999999999999".to_string(), position: 0 })]
    #[case::index_too_large("{1000000}", FormatError::InvalidPlaceholder { text: "1000000".to_string(), position: 0 })]
    fn malformed_templates_are_errors(#[case] template: &str, #[case] expected: FormatError) {
        assert_eq!(format_indexed(template, &[&"arg"]).unwrap_err(), expected);
    }

    #[test]
    fn failing_display_is_an_error() {
        let err = format_indexed("{0}", &[&Broken]).unwrap_err();
        assert_eq!(err, FormatError::Argument { index: 0 });
    }

    #[test]
    fn multibyte_text_passes_through() {
        let rendered = format_indexed("café {0} ✓", &[&"ok"]).unwrap();
        assert_eq!(rendered, "café ok ✓");
    }
}
