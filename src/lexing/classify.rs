//!
//! Character classes.
//!
//! Every lexical boundary the scanner draws comes down to
//! one of these predicates on a single code point.
//!

use finl_unicode::categories::{CharacterCategories, MinorCategory};

///
/// `[a-gA-G]`
///
pub fn is_note_letter(ch: char) -> bool {
    matches!(ch, 'a'..='g' | 'A'..='G')
}

///
/// `[zZxX]`: visible and invisible rests.
///
pub fn is_rest_letter(ch: char) -> bool {
    matches!(ch, 'z' | 'Z' | 'x' | 'X')
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

///
/// `'` raises an octave, `,` lowers one.
///
pub fn is_octave_marker(ch: char) -> bool {
    matches!(ch, '\'' | ',')
}

///
/// The single-character decoration shorthands `[.~HLMOPRSTuv]`.
///
pub fn is_decoration_char(ch: char) -> bool {
    matches!(
        ch,
        '.' | '~' | 'H' | 'L' | 'M' | 'O' | 'P' | 'R' | 'S' | 'T' | 'u' | 'v'
    )
}

pub fn is_broken_rhythm_char(ch: char) -> bool {
    matches!(ch, '<' | '>')
}

///
/// Blanks that separate tokens within a line: `[ \t]`.
///
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

pub fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_identifier_start(ch: char) -> bool {
    is_alpha(ch) || ch == '_'
}

///
/// Directive names use dashes (`page-width`) as well as underscores.
///
pub fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-')
}

pub fn is_accidental_start(ch: char) -> bool {
    matches!(ch, '^' | '_' | '=')
}

///
/// Letters a `U:` field may redefine: `[h-wH-W~]`.
///
pub fn is_user_symbol_char(ch: char) -> bool {
    matches!(ch, 'h'..='w' | 'H'..='W' | '~')
}

///
/// `y` is the spacer, so it never starts or continues a macro name.
///
pub fn is_macro_var_start(ch: char) -> bool {
    (is_alpha(ch) || ch == '~') && ch != 'y'
}

pub fn is_macro_var_continue(ch: char) -> bool {
    (ch.is_ascii_alphanumeric() || ch == '~') && ch != 'y'
}

///
/// Characters the standard reserves for future use.
///
pub fn is_reserved_char(ch: char) -> bool {
    matches!(ch, '#' | ';' | '?' | '@')
}

///
/// First characters of a quoted string that place it as an annotation.
///
pub fn is_annotation_placement(ch: char) -> bool {
    matches!(ch, '^' | '_' | '<' | '>' | '@')
}

///
/// Where error recovery stops: blanks, newlines, bar lines,
/// or any Unicode space separator.
///
pub fn is_sync_char(ch: char) -> bool {
    is_whitespace(ch)
        || is_newline(ch)
        || ch == '|'
        || matches!(ch.get_minor_category(), MinorCategory::Zs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(pred: fn(char) -> bool) -> String {
        (' '..='~').filter(|ch| pred(*ch)).collect()
    }

    #[test]
    fn ascii_classes() {
        assert_eq!(members(is_note_letter), "ABCDEFGabcdefg");
        assert_eq!(members(is_rest_letter), "XZxz");
        assert_eq!(members(is_digit), "0123456789");
        assert_eq!(members(is_octave_marker), "',");
        assert_eq!(members(is_decoration_char), ".HLMOPRSTuv~");
        assert_eq!(members(is_broken_rhythm_char), "<>");
        assert_eq!(members(is_whitespace), " ");
        assert_eq!(members(is_accidental_start), "=^_");
        assert_eq!(members(is_reserved_char), "#;?@");
        assert_eq!(members(is_annotation_placement), "<>@^_");
        assert_eq!(members(is_user_symbol_char), "HIJKLMNOPQRSTUVWhijklmnopqrstuvw~");
    }

    #[test]
    fn identifiers() {
        assert_eq!(members(is_identifier_start).len(), 53);
        assert!(is_identifier_start('_'));
        assert!(!is_identifier_start('1'));
        assert!(!is_identifier_start('-'));

        assert!(is_identifier_continue('-'));
        assert!(is_identifier_continue('9'));
        assert!(!is_identifier_continue(' '));
        assert!(!is_identifier_continue(':'));
    }

    #[test]
    fn macro_names_skip_y() {
        assert!(is_macro_var_start('n'));
        assert!(is_macro_var_start('~'));
        assert!(!is_macro_var_start('y'));
        assert!(!is_macro_var_start('1'));
        assert!(is_macro_var_continue('1'));
        assert!(!is_macro_var_continue('y'));
    }

    #[test]
    fn non_ascii_is_never_music() {
        for ch in ['é', 'ß', '♯', '\u{00A0}'] {
            assert!(!is_note_letter(ch));
            assert!(!is_alpha(ch));
            assert!(!is_identifier_continue(ch));
        }
    }

    #[test]
    fn sync_chars() {
        assert!(is_sync_char(' '));
        assert!(is_sync_char('\t'));
        assert!(is_sync_char('\n'));
        assert!(is_sync_char('\r'));
        assert!(is_sync_char('|'));
        assert!(is_sync_char('\u{00A0}'));
        assert!(is_sync_char('\u{3000}'));
        assert!(!is_sync_char('A'));
        assert!(!is_sync_char(']'));
    }
}
