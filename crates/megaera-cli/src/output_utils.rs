pub(crate) const GREEN_CHECK: &str = "\x1b[32m✔\x1b[0m";
pub(crate) const RED_X: &str = "\x1b[31m✘\x1b[0m";

/// `1 operation`, `2 operations`, `0 operations`.
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
