//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::require_role::RequireRole;
use crate::pages::{
    create_task::CreateTaskPage, grades::GradesPage, landing::LandingPage, login::LoginPage, register::RegisterPage,
    section_detail::SectionDetailPage, sections::SectionsPage, student_home::StudentHomePage,
    student_tasks::StudentTasksPage,
};
use crate::state::auth::{AuthState, Role};
use crate::util::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal and declares every route. Protected pages
/// sit behind `RequireRole`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Effects only run in the browser, where the stored session lives.
    Effect::new(move || session::restore(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/scorely.css"/>
        <Title text="Scorely"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("seccionesPage")
                    view=|| view! { <RequireRole role=Role::Profesor><SectionsPage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("alumnosPage")
                    view=|| view! { <RequireRole role=Role::Alumno><StudentHomePage/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("secciones"), ParamSegment("idSeccion"), StaticSegment("tareas"))
                    view=|| view! { <RequireRole role=Role::Profesor><SectionDetailPage/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("secciones"), ParamSegment("idSeccion"), StaticSegment("crear-tarea"))
                    view=|| view! { <RequireRole role=Role::Profesor><CreateTaskPage/></RequireRole> }
                />
                <Route
                    path=(
                        StaticSegment("secciones"),
                        ParamSegment("idSeccion"),
                        StaticSegment("alumno"),
                        ParamSegment("idAlumno"),
                        StaticSegment("notas"),
                    )
                    view=|| view! { <RequireRole role=Role::Profesor><GradesPage/></RequireRole> }
                />
                <Route
                    path=(
                        StaticSegment("alumno"),
                        StaticSegment("seccion"),
                        ParamSegment("idSeccion"),
                        StaticSegment("tareas"),
                    )
                    view=|| view! { <RequireRole role=Role::Alumno><StudentTasksPage/></RequireRole> }
                />
            </Routes>
        </Router>
    }
}
