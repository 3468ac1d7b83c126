use std::collections::HashSet;

use crate::ValidationError;

/// Checks that `name` can be used verbatim as a file or folder name.
///
/// Unlike a sanitizer this never rewrites the name: saved paths must match what
/// the user sees in the photo list.
pub fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    if let Some(found) = name.chars().find(|c| is_forbidden(*c)) {
        return Err(ValidationError::ForbiddenCharacter {
            name: name.to_string(),
            found,
        });
    }
    if matches!(name, "." | "..") || is_reserved_windows_name(name) {
        return Err(ValidationError::ReservedName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Returns the first name that repeats an earlier one, ignoring case.
///
/// Case-insensitive file systems would map both names to the same file.
pub fn find_duplicate_name<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(name.to_lowercase()))
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{find_duplicate_name, validate_file_name};
    use crate::ValidationError;

    #[test]
    fn plain_names_pass() {
        assert!(validate_file_name("chair_1").is_ok());
        assert!(validate_file_name("Blue chair (left)").is_ok());
        assert!(validate_file_name("stol_ü").is_ok());
    }

    #[test]
    fn separators_are_rejected() {
        assert_eq!(
            validate_file_name("a/b"),
            Err(ValidationError::ForbiddenCharacter {
                name: "a/b".to_string(),
                found: '/',
            })
        );
        assert!(validate_file_name("a\\b").is_err());
        assert!(validate_file_name("tab\there").is_err());
    }

    #[test]
    fn reserved_names_are_rejected() {
        assert!(matches!(
            validate_file_name("con"),
            Err(ValidationError::ReservedName { .. })
        ));
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("console").is_ok());
    }

    #[test]
    fn duplicates_are_found_regardless_of_case() {
        assert_eq!(find_duplicate_name(["chair_1", "chair_2"]), None);
        assert_eq!(
            find_duplicate_name(["chair_1", "Chair_2", "CHAIR_2"]),
            Some("CHAIR_2")
        );
    }
}
