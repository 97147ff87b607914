use std::borrow::Cow;

fn is_control(b: u8) -> bool {
    b == 0x1b || b == 0x7f || (b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r')
}

/// Strips terminal control characters and ANSI escape sequences.
///
/// Feed titles and descriptions are attacker-controlled, so anything printed
/// to a terminal goes through here first. Tab, newline and carriage return
/// survive; CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL|ST`) sequences are
/// removed whole.
///
/// Returns `Cow::Borrowed` when nothing needs removing.
///
/// ```
/// use feedloom::util::strip_control_chars;
///
/// assert_eq!(strip_control_chars("\x1b[31mBreaking\x1b[0m news"), "Breaking news");
/// ```
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if !bytes.iter().copied().any(is_control) {
        return Cow::Borrowed(s);
    }

    let len = bytes.len();
    let mut out = String::with_capacity(len);
    let mut i = 0;

    while i < len {
        match bytes[i] {
            0x1b if bytes.get(i + 1) == Some(&b'[') => {
                i += 2;
                while i < len {
                    let c = bytes[i];
                    i += 1;
                    if (0x40..=0x7e).contains(&c) {
                        break;
                    }
                }
            }
            0x1b if bytes.get(i + 1) == Some(&b']') => {
                i += 2;
                while i < len {
                    if bytes[i] == 0x07 {
                        i += 1;
                        break;
                    }
                    if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            b if is_control(b) => i += 1,
            _ => {
                let start = i;
                while i < len && !is_control(bytes[i]) {
                    i += 1;
                }
                // Control bytes are ASCII, so this never splits a code point.
                out.push_str(&s[start..i]);
            }
        }
    }

    Cow::Owned(out)
}
