//! Plain-text extraction from RTF clipboard data
//!
//! Covers what pasteboard producers (TextEdit, browsers, Office) actually
//! emit: groups, destinations, paragraph/line/tab control words, `\'hh` hex
//! escapes in the ANSI code page, and `\uN` Unicode escapes with `\ucN`
//! fallback skipping. Everything that only carries formatting is dropped.

/// Destinations whose contents are never part of the visible text
static SKIPPED_DESTINATIONS: &[&str] = &[
    "fonttbl", "colortbl", "stylesheet", "info", "pict", "object", "header",
    "headerl", "headerr", "headerf", "footer", "footerl", "footerr", "footerf",
    "footnote", "themedata", "colorschememapping", "latentstyles", "datastore",
    "xmlnstbl", "listtable", "listoverridetable", "rsidtbl", "generator",
    "expandedcolortbl", "filetbl", "revtbl", "fldinst", "nonshppict", "bkmkstart",
    "bkmkend", "mmathPr", "pgdsctbl", "xe", "tc",
];

/// Windows-1252 code points for bytes 0x80..=0x9F
static CP1252_HIGH: [char; 32] = [
    '€', '\u{81}', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\u{8D}', 'Ž', '\u{8F}',
    '\u{90}', '‘', '’', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\u{9D}', 'ž', 'Ÿ',
];

#[derive(Debug, Clone, Copy)]
struct GroupState {
    skip: bool,
    /// Fallback characters following each `\uN`
    unicode_skip: usize,
}

/// Decode RTF bytes to plain text; `None` if the data is not RTF
pub fn decode_rtf(data: &[u8]) -> Option<String> {
    let start = data.iter().position(|b| !b.is_ascii_whitespace())?;
    let data = &data[start..];
    if !data.starts_with(b"{\\rtf") {
        return None;
    }

    let mut out = String::new();
    let mut stack: Vec<GroupState> = Vec::new();
    let mut state = GroupState {
        skip: false,
        unicode_skip: 1,
    };
    // Fallback characters still to swallow after a `\uN`
    let mut pending_fallback = 0usize;
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        match byte {
            b'{' => {
                stack.push(state);
                pending_fallback = 0;
                i += 1;
            }
            b'}' => {
                if let Some(previous) = stack.pop() {
                    state = previous;
                }
                pending_fallback = 0;
                i += 1;
            }
            b'\\' => {
                i += 1;
                let Some(&next) = data.get(i) else { break };

                if next.is_ascii_alphabetic() {
                    let word_start = i;
                    while i < data.len() && data[i].is_ascii_alphabetic() {
                        i += 1;
                    }
                    let word = std::str::from_utf8(&data[word_start..i]).unwrap_or_default();

                    let param_start = i;
                    if i < data.len() && data[i] == b'-' {
                        i += 1;
                    }
                    while i < data.len() && data[i].is_ascii_digit() {
                        i += 1;
                    }
                    let param = std::str::from_utf8(&data[param_start..i])
                        .ok()
                        .and_then(|p| p.parse::<i32>().ok());

                    // A single space delimits the control word and is not text
                    if i < data.len() && data[i] == b' ' {
                        i += 1;
                    }

                    if SKIPPED_DESTINATIONS.contains(&word) {
                        state.skip = true;
                        continue;
                    }
                    if state.skip {
                        continue;
                    }

                    match word {
                        "uc" => state.unicode_skip = param.unwrap_or(1).max(0) as usize,
                        "u" => {
                            if let Some(code) = param {
                                let code = if code < 0 { code + 65_536 } else { code };
                                if let Some(ch) = char::from_u32(code as u32) {
                                    out.push(ch);
                                }
                            }
                            pending_fallback = state.unicode_skip;
                        }
                        _ => {
                            if pending_fallback > 0 {
                                pending_fallback -= 1;
                            } else if let Some(text) = control_word_text(word) {
                                out.push_str(text);
                            }
                        }
                    }
                    continue;
                }

                i += 1;
                match next {
                    b'\'' => {
                        let hex = data.get(i..i + 2).and_then(|h| std::str::from_utf8(h).ok());
                        let value = hex.and_then(|h| u8::from_str_radix(h, 16).ok());
                        if value.is_some() {
                            i += 2;
                        }
                        if state.skip {
                            continue;
                        }
                        if pending_fallback > 0 {
                            pending_fallback -= 1;
                        } else if let Some(value) = value {
                            out.push(ansi_char(value));
                        }
                    }
                    b'*' => state.skip = true,
                    b'\\' | b'{' | b'}' => {
                        if !state.skip {
                            consume_or_push(&mut out, &mut pending_fallback, next as char);
                        }
                    }
                    b'\n' | b'\r' => {
                        if !state.skip {
                            out.push('\n');
                        }
                    }
                    b'~' => {
                        if !state.skip {
                            consume_or_push(&mut out, &mut pending_fallback, '\u{a0}');
                        }
                    }
                    b'_' => {
                        if !state.skip {
                            consume_or_push(&mut out, &mut pending_fallback, '-');
                        }
                    }
                    // Optional hyphen and other control symbols carry no text
                    _ => {}
                }
            }
            b'\r' | b'\n' => i += 1,
            _ => {
                i += 1;
                if state.skip {
                    continue;
                }
                if byte < 0x80 {
                    consume_or_push(&mut out, &mut pending_fallback, byte as char);
                } else {
                    // Stray 8-bit bytes: take the UTF-8 sequence if valid, else ANSI
                    let end = (i - 1 + utf8_len(byte)).min(data.len());
                    match std::str::from_utf8(&data[i - 1..end]) {
                        Ok(s) => {
                            out.push_str(s);
                            i = end;
                        }
                        Err(_) => consume_or_push(&mut out, &mut pending_fallback, ansi_char(byte)),
                    }
                }
            }
        }
    }

    Some(out)
}

fn control_word_text(word: &str) -> Option<&'static str> {
    let text = match word {
        "par" | "line" | "sect" | "page" | "row" => "\n",
        "tab" | "cell" => "\t",
        "emdash" => "—",
        "endash" => "–",
        "bullet" => "•",
        "lquote" => "‘",
        "rquote" => "’",
        "ldblquote" => "“",
        "rdblquote" => "”",
        "emspace" | "enspace" | "qmspace" => " ",
        _ => return None,
    };
    Some(text)
}

#[inline]
fn consume_or_push(out: &mut String, pending_fallback: &mut usize, ch: char) {
    if *pending_fallback > 0 {
        *pending_fallback -= 1;
    } else {
        out.push(ch);
    }
}

#[inline]
fn ansi_char(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[(byte - 0x80) as usize],
        _ => byte as char,
    }
}

#[inline]
fn utf8_len(first: u8) -> usize {
    match first {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
