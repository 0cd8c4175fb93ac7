use std::io::IsTerminal;

fn enabled() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn paint(s: &str, code: &str) -> String {
    if enabled() {
        format!("\x1b[{}m{}\x1b[0m", code, s)
    } else {
        s.to_string()
    }
}

pub fn success_line(label: &str, value: &str) -> String {
    let mark = paint("✓", "32");
    let label = paint(label, "1;32");
    format!("{} {} {}", mark, label, value)
}

pub fn heading(text: &str) -> String {
    paint(text, "1;36")
}

pub fn list_item(name: &str) -> String {
    format!("  {} {}", paint("-", "36"), name)
}

pub fn remainder(count: usize) -> String {
    paint(&format!("  ({} more...)", count), "2")
}
