//! Form checks shared by more than one screen.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const SECTION_NAME_REQUIRED: &str = "El nombre de la sección es obligatorio";
pub const SECTION_NAME_TOO_SHORT: &str = "El nombre debe tener al menos 3 caracteres";
pub const SECTION_NAME_MAX_LEN: usize = 40;
pub const STUDENT_CODE_LEN: usize = 8;

/// Trimmed section name, or the message to show under the input.
///
/// # Errors
///
/// Blank names and names shorter than three characters.
pub fn validate_section_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SECTION_NAME_REQUIRED);
    }
    if name.chars().count() < 3 {
        return Err(SECTION_NAME_TOO_SHORT);
    }
    Ok(name.to_owned())
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let len = domain.len();
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < len)
}

/// Digits only, at most eight of them.
pub fn sanitize_student_code(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(STUDENT_CODE_LEN).collect()
}

/// Whether any of `fields` is blank after trimming.
pub fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|field| field.trim().is_empty())
}

/// Positive numeric id from a route segment.
pub fn parse_route_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).filter(|id| *id > 0)
}
