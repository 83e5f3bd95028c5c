use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Greedy word wrap into lines no wider than `max_width` columns.
/// Words wider than a whole line are broken with [`wrap_chars`].
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }

                let mut broken = wrap_chars(word, max_width);
                // The tail of a broken word keeps collecting following words.
                current_line = broken.pop().unwrap_or_default();
                current_width = display_width(&current_line);
                lines.extend(broken);
                continue;
            }

            let space_width = usize::from(!current_line.is_empty());

            if current_width + space_width + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_width = word_width;
            } else {
                if space_width == 1 {
                    current_line.push(' ');
                }
                current_line.push_str(word);
                current_width += space_width + word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for ch in input_line.chars() {
            let ch_width = char_width(ch);

            if ch_width == 0 {
                // Combining marks stay with the previous character
                current_line.push(ch);
                continue;
            }

            if current_width + ch_width > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            current_line.push(ch);
            current_width += ch_width;
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// Number of rendered lines for `s` at the given column budget.
/// Empty text occupies no lines.
pub fn line_count(s: &str, columns: usize) -> usize {
    if s.is_empty() {
        return 0;
    }
    wrap_words(s, columns.max(1)).len()
}
