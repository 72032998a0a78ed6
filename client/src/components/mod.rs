//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards, forms and modal dialogs shared by the route pages. Components read
//! the auth session from context and report user intent through callbacks;
//! the owning page performs the REST call unless the component is
//! self-contained (invitations, task form).

pub mod create_section_modal;
pub mod edit_section_modal;
pub mod invite_student_button;
pub mod logout_button;
pub mod modal;
pub mod pending_invitations_button;
pub mod require_role;
pub mod section_card;
pub mod student_section_card;
pub mod task_form;
pub mod year_select;
