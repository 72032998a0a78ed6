use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  juan@uni.pe ", " secreta "),
        Ok(("juan@uni.pe".to_owned(), " secreta ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secreta"), Err("Por favor complete todos los campos"));
    assert_eq!(validate_login_input("juan@uni.pe", "   "), Err("Por favor complete todos los campos"));
}

#[test]
fn password_toggle_title_reflects_visibility() {
    assert_eq!(password_toggle_title(false), "Mostrar contraseña");
    assert_eq!(password_toggle_title(true), "Ocultar contraseña");
}
