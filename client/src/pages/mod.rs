//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod create_task;
pub mod grades;
pub mod landing;
pub mod login;
pub mod register;
pub mod section_detail;
pub mod sections;
pub mod student_home;
pub mod student_tasks;
