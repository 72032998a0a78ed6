use super::*;

#[test]
fn section_name_is_trimmed() {
    assert_eq!(validate_section_name("  Física I - G1 "), Ok("Física I - G1".to_owned()));
}

#[test]
fn section_name_required_and_minimum_length() {
    assert_eq!(validate_section_name("   "), Err("El nombre de la sección es obligatorio"));
    assert_eq!(validate_section_name(" ab "), Err("El nombre debe tener al menos 3 caracteres"));
    // Counted in characters, not bytes.
    assert_eq!(validate_section_name("Ñá"), Err("El nombre debe tener al menos 3 caracteres"));
    assert_eq!(validate_section_name("Ñáé"), Ok("Ñáé".to_owned()));
}

#[test]
fn email_shape() {
    assert!(is_valid_email("alumno@uni.edu.pe"));
    assert!(is_valid_email("a@b.c"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("alumno@uni"));
    assert!(!is_valid_email("@uni.pe"));
    assert!(!is_valid_email("alumno@.pe"));
    assert!(!is_valid_email("alumno@uni."));
    assert!(!is_valid_email("alu mno@uni.pe"));
    assert!(!is_valid_email("a@b@c.pe"));
}

#[test]
fn student_code_keeps_eight_digits() {
    assert_eq!(sanitize_student_code("20a23-1234567"), "20231234");
    assert_eq!(sanitize_student_code("abc"), "");
    assert_eq!(sanitize_student_code("123"), "123");
}

#[test]
fn any_blank_checks_trimmed_fields() {
    assert!(any_blank(&["a", "  "]));
    assert!(!any_blank(&["a", "b"]));
    assert!(!any_blank(&[]));
}

#[test]
fn route_ids_must_be_positive_integers() {
    assert_eq!(parse_route_id(Some("12")), Some(12));
    assert_eq!(parse_route_id(Some("0")), None);
    assert_eq!(parse_route_id(Some("abc")), None);
    assert_eq!(parse_route_id(None), None);
}
