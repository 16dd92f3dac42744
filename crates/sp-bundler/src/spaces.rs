//! Stage 4: Spaces — collapse runs of spaces to a single space.

/// Repeatedly collapse two adjacent spaces into one until the text stops
/// changing. Only the literal space character is touched; tabs and newlines
/// are delimiters the later stages rely on. A single space always survives,
/// so adjacent tokens never fuse.
pub fn compact(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = current.replace("  ", " ");
        if next == current {
            return current;
        }
        current = next;
    }
}
