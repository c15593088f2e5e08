//! Deterministic slug generation for blog posts and upload names.
//!
//! Slugs are lowercase ASCII with single hyphens between words. Duplicate
//! titles are resolved by appending a numeric suffix (`hello-world`,
//! `hello-world-2`, ...) — see [`next_free_slug`].

/// Slugify a title: lowercase, alphanumerics kept, everything else collapsed
/// into single hyphens, trimmed at both ends.
///
/// # Examples
///
/// ```
/// use vitrine_core::slug::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("  Rust & Axum: a tour!  "), "rust-axum-a-tour");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress leading hyphen

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Pick the first slug not present in `taken`, starting from the base slug
/// and appending `-2`, `-3`, ... on collision.
///
/// `taken` is the set of existing slugs sharing the base prefix, as returned
/// by the blog repository.
pub fn next_free_slug(base: &str, taken: &[String]) -> String {
    if !taken.iter().any(|s| s == base) {
        return base.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.iter().any(|s| *s == candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_collapses() {
        assert_eq!(slugify("Rust & Axum: a tour!"), "rust-axum-a-tour");
    }

    #[test]
    fn leading_and_trailing_noise() {
        assert_eq!(slugify("  --Spring Sale!--  "), "spring-sale");
    }

    #[test]
    fn already_clean() {
        assert_eq!(slugify("already-clean"), "already-clean");
    }

    #[test]
    fn empty_title() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn free_when_untaken() {
        assert_eq!(next_free_slug("hello-world", &[]), "hello-world");
    }

    #[test]
    fn first_collision_gets_suffix_2() {
        let taken = vec!["hello-world".to_string()];
        assert_eq!(next_free_slug("hello-world", &taken), "hello-world-2");
    }

    #[test]
    fn suffix_advances_past_taken() {
        let taken = vec![
            "hello-world".to_string(),
            "hello-world-2".to_string(),
            "hello-world-3".to_string(),
        ];
        assert_eq!(next_free_slug("hello-world", &taken), "hello-world-4");
    }
}
