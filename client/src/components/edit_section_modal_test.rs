use super::*;

fn section() -> Section {
    Section { id_seccion: 4, nombre_curso: "Redes - G1".to_owned(), anio: 2025, codigo: Some(1234) }
}

#[test]
fn unchanged_name_and_year_is_rejected() {
    assert_eq!(validate_edit(&section(), "  Redes - G1 ", 2025), Err("No se realizaron cambios"));
}

#[test]
fn new_name_or_year_is_accepted() {
    assert_eq!(validate_edit(&section(), "Redes - G2", 2025), Ok(("Redes - G2".to_owned(), 2025)));
    assert_eq!(validate_edit(&section(), "Redes - G1", 2026), Ok(("Redes - G1".to_owned(), 2026)));
}

#[test]
fn name_rules_apply_before_change_detection() {
    assert_eq!(validate_edit(&section(), "", 2026), Err("El nombre de la sección es obligatorio"));
    assert_eq!(validate_edit(&section(), "ab", 2026), Err("El nombre debe tener al menos 3 caracteres"));
}
