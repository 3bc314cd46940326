use itertools::Itertools;

/// Replace the character the browser just inserted before `cursor` with
/// `corrected`. Offsets are in chars.
///
/// With the cursor at the end, the last char is swapped. Otherwise the text is
/// split around the cursor: the first half loses its final char and the second
/// half starts one past the cursor, so one existing char is dropped.
pub fn splice_corrected_char(text: &str, cursor: usize, corrected: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    if cursor == len {
        return chars[..len.saturating_sub(1)]
            .iter()
            .copied()
            .chain(std::iter::once(corrected))
            .collect();
    }

    let head_end = cursor.saturating_sub(1).min(len);
    let tail_start = cursor.saturating_add(1).min(len);
    chars[..head_end]
        .iter()
        .copied()
        .chain(std::iter::once(corrected))
        .chain(chars[tail_start..].iter().copied())
        .collect()
}

/// Overwrite `[start, end)` of `text` with `c`, the way a keystroke replaces a
/// selection. Offsets are clamped to the text.
pub fn insert_over_selection(text: &str, start: usize, end: usize, c: char) -> String {
    let len = text.chars().count();
    let start = start.min(len);
    let end = end.clamp(start, len);
    [
        text.chars().take(start).collect::<String>(),
        c.to_string(),
        text.chars().skip(end).collect::<String>(),
    ]
    .iter()
    .join("")
}
