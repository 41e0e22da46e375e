//! Company name normalization and logo key derivation.

use std::path::{Path, PathBuf};

/// Trailing corporate suffixes dropped from normalized names. Longer tokens
/// come first so `corporation` is not shadowed by `corp`.
const CORPORATE_SUFFIXES: [&str; 6] = ["corporation", "limited", "corp", "inc", "llc", "ltd"];

/// Normalize a free-text company name into a stable identifier.
///
/// Lower-cases, keeps only `[a-z0-9]`, then strips trailing corporate
/// suffixes until none is left. A name made only of a suffix normalizes to
/// the empty string.
pub fn normalize(company: &str) -> String {
    let mut key: String = company
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect();

    while let Some(stripped) = strip_suffix(&key) {
        key.truncate(stripped);
    }

    key.trim().to_string()
}

fn strip_suffix(key: &str) -> Option<usize> {
    CORPORATE_SUFFIXES
        .iter()
        .find_map(|suffix| key.strip_suffix(suffix).map(str::len))
}

/// Logo lookup key for a company, or `None` when nothing identifying is left.
pub fn logo_key(company: &str) -> Option<String> {
    let key = normalize(company);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Path of the logo asset for a company inside `dir`.
pub fn logo_path(dir: &Path, company: &str, extension: &str) -> Option<PathBuf> {
    logo_key(company).map(|key| dir.join(format!("{key}.{extension}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_punctuation_and_suffix() {
        assert_eq!(normalize("Acme Corp."), "acme");
        assert_eq!(normalize("Globex Corporation"), "globex");
        assert_eq!(normalize("Initech, LLC"), "initech");
        assert_eq!(normalize("Hooli Ltd"), "hooli");
        assert_eq!(normalize("Vandelay Industries Limited"), "vandelayindustries");
        assert_eq!(normalize("Pied Piper, Inc."), "piedpiper");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  ---  "), "");
    }

    #[test]
    fn drops_non_ascii_characters() {
        assert_eq!(normalize("Zürich Versicherung"), "zrichversicherung");
        assert_eq!(normalize("3M"), "3m");
    }

    #[test]
    fn stacked_suffixes_are_all_removed() {
        assert_eq!(normalize("Acme Corp Inc"), "acme");
    }

    #[test]
    fn bare_suffix_normalizes_to_empty() {
        assert_eq!(normalize("Inc."), "");
        assert_eq!(normalize("LLC"), "");
        assert_eq!(normalize("Corp"), "");
        assert_eq!(normalize("Limited"), "");
        assert_eq!(normalize(&normalize("Inc.")), "");
        assert_eq!(logo_key("Inc."), None);
    }

    #[test]
    fn logo_key_is_none_when_empty() {
        assert_eq!(logo_key("!!!"), None);
        assert_eq!(logo_key("Stripe, Inc."), Some("stripe".to_string()));
    }

    #[test]
    fn logo_path_joins_dir_and_extension() {
        let path = logo_path(Path::new("logos"), "Acme Corp.", "svg").expect("path");
        assert_eq!(path, Path::new("logos").join("acme.svg"));
        assert!(logo_path(Path::new("logos"), "", "svg").is_none());
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(input in ".{0,40}") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_is_lower_alnum(input in ".{0,40}") {
            let key = normalize(&input);
            prop_assert!(key.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
        }
    }
}
