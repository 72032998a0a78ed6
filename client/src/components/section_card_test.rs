use super::*;

#[test]
fn card_links_to_the_section_tasks() {
    assert_eq!(section_tasks_href(14), "/secciones/14/tareas");
}

#[test]
fn enter_and_space_open_the_card() {
    assert!(opens_card("Enter"));
    assert!(opens_card(" "));
    assert!(!opens_card("Tab"));
    assert!(!opens_card("Escape"));
}
