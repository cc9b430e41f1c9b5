use std::fmt::Write as _;

pub const BRANCH: &str = "├───";
pub const LAST_BRANCH: &str = "└───";
pub const PIPE_INDENT: &str = "│\t";
pub const BLANK_INDENT: &str = "\t";

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Prefix handed to the children of an entry drawn with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let tail = if is_last { BLANK_INDENT } else { PIPE_INDENT };
    let mut out = String::with_capacity(prefix.len() + tail.len());
    out.push_str(prefix);
    out.push_str(tail);
    out
}

/// `name (Nb)`, or `name (empty)` for zero-length files.
pub fn file_label(name: &str, size: u64) -> String {
    if size == 0 {
        format!("{name} (empty)")
    } else {
        format!("{name} ({size}b)")
    }
}

pub fn push_line(out: &mut String, prefix: &str, is_last: bool, label: &str) {
    let _ = writeln!(out, "{}{}{}", prefix, connector(is_last), label);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_entry_gets_corner_and_blank_indent() {
        assert_eq!(connector(true), "└───");
        assert_eq!(connector(false), "├───");
        assert_eq!(child_prefix("", true), "\t");
        assert_eq!(child_prefix("", false), "│\t");
        assert_eq!(child_prefix("│\t", true), "│\t\t");
        assert_eq!(child_prefix("\t", false), "\t│\t");
    }

    #[test]
    fn file_labels() {
        assert_eq!(file_label("a.txt", 5), "a.txt (5b)");
        assert_eq!(file_label("big.bin", 1_048_576), "big.bin (1048576b)");
        assert_eq!(file_label("zero", 0), "zero (empty)");
    }

    #[test]
    fn lines_end_with_newline() {
        let mut out = String::new();
        push_line(&mut out, "│\t", false, "src");
        push_line(&mut out, "│\t", true, "lib.rs (12b)");
        assert_eq!(out, "│\t├───src\n│\t└───lib.rs (12b)\n");
    }
}
