pub(crate) const RED_X: &str = "\u{2718}";

/// Render an error and every error in its `source()` chain, one per line.
pub(crate) fn format_error(err: &anyhow::Error) -> String {
    let mut lines = vec![format!("{RED_X} {err}")];
    for cause in err.chain().skip(1) {
        lines.push(format!("  caused by: {cause}"));
    }
    lines.join("\n")
}
