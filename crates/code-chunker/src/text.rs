/// Largest char boundary in `text` that is `<= index` (clamped to the length)
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut idx = index;
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Smallest char boundary in `text` that is strictly greater than `index`
pub(crate) fn next_char_boundary(text: &str, index: usize) -> usize {
    let mut idx = index.saturating_add(1);
    while idx < text.len() && !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx.min(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_char_boundary() {
        let text = "aé😀b";
        assert_eq!(floor_char_boundary(text, 0), 0);
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 5), 3);
        assert_eq!(floor_char_boundary(text, 100), text.len());
    }

    #[test]
    fn test_next_char_boundary() {
        let text = "é😀";
        assert_eq!(next_char_boundary(text, 0), 2);
        assert_eq!(next_char_boundary(text, 2), 6);
        assert_eq!(next_char_boundary(text, 6), 6);
    }
}
