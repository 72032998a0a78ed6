//! Login page: email + password against the course backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

pub const FIELDS_REQUIRED: &str = "Por favor complete todos los campos";

/// Trimmed email and the password as typed, or the message to show.
///
/// # Errors
///
/// Either field blank after trimming.
pub fn validate_login_input(correo: &str, contrasena: &str) -> Result<(String, String), &'static str> {
    let correo = correo.trim();
    if correo.is_empty() || contrasena.trim().is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    Ok((correo.to_owned(), contrasena.to_owned()))
}

pub fn password_toggle_title(visible: bool) -> &'static str {
    if visible { "Ocultar contraseña" } else { "Mostrar contraseña" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let correo = RwSignal::new(String::new());
    let contrasena = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (correo_value, contrasena_value) = match validate_login_input(&correo.get(), &contrasena.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::session::login(auth, &correo_value, &contrasena_value).await {
                Ok(user) => {
                    let home = user.role().map_or(crate::state::auth::LOGIN_PATH, crate::state::auth::Role::home_path);
                    navigate(home, leptos_router::NavigateOptions::default());
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (correo_value, contrasena_value, navigate, auth);
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <div class="login-input">
                    <input
                        type="text"
                        placeholder="Correo"
                        disabled=move || busy.get()
                        prop:value=move || correo.get()
                        on:input=move |ev| {
                            correo.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </div>
                <div class="login-input">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Contraseña"
                        disabled=move || busy.get()
                        prop:value=move || contrasena.get()
                        on:input=move |ev| {
                            contrasena.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                    <button
                        type="button"
                        class="login-input__toggle"
                        title=move || password_toggle_title(show_password.get())
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "🙈" } else { "👁" }}
                    </button>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Iniciando sesión..." } else { "Iniciar sesión" }}
                </button>
                <a class="login-register" href="/register">
                    "¿No tiene cuenta? Regístrese aquí!"
                </a>
                <p class="login-hint">"Usuarios de prueba: profe1 / alumno1"</p>
            </form>
        </div>
    }
}
