/// Derives a URL slug from a display name.
///
/// Lowercases the input and collapses every run of non-alphanumeric
/// characters into a single hyphen, trimming leading and trailing hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Nike Air Zoom"), "nike-air-zoom");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Fresh & Local -- Produce!"), "fresh-local-produce");
    }

    #[test]
    fn trims_edge_hyphens() {
        assert_eq!(slugify("  Spring Sale  "), "spring-sale");
    }
}
