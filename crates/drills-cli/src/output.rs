use std::io::Write;

use owo_colors::OwoColorize;

/// Whether to emit ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(self) -> bool {
        self.0
    }
}

/// A successful result line.
pub fn print_ok(w: &mut dyn Write, msg: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", msg.green())
    } else {
        writeln!(w, "{}", msg)
    }
}

/// A failure line, prefixed with `error:`.
pub fn print_error(w: &mut dyn Write, msg: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "error:".red().bold(), msg)
    } else {
        writeln!(w, "error: {}", msg)
    }
}

/// A `word: definition` pair.
pub fn print_entry(
    w: &mut dyn Write,
    word: &str,
    definition: &str,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}: {}", word.bold(), definition)
    } else {
        writeln!(w, "{}: {}", word, definition)
    }
}

/// Comma-separated list of numbers, e.g. `3, 9`.
pub fn print_numbers(w: &mut dyn Write, numbers: &[i64]) -> std::io::Result<()> {
    let joined: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    writeln!(w, "{}", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_error_line() {
        let out = render(|w| print_error(w, "boom", ColorMode(false)));
        assert_eq!(out, "error: boom\n");
    }

    #[test]
    fn colored_error_has_ansi() {
        let out = render(|w| print_error(w, "boom", ColorMode(true)));
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("boom"));
    }

    #[test]
    fn numbers_joined() {
        let out = render(|w| print_numbers(w, &[3, 9]));
        assert_eq!(out, "3, 9\n");
        let out = render(|w| print_numbers(w, &[]));
        assert_eq!(out, "\n");
    }
}
