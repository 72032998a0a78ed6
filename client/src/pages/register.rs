//! Account registration for students and professors.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::RegisterRequest;
use crate::util::validation::{STUDENT_CODE_LEN, sanitize_student_code};

pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden.";
pub const STUDENT_CODE_INVALID: &str = "El código de estudiante debe tener 8 dígitos.";
pub const REGISTERED: &str = "¡Usuario registrado exitosamente!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserType {
    #[default]
    Estudiante,
    Profesor,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Estudiante => "Estudiante",
            Self::Profesor => "Profesor",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub nombres: String,
    pub apellido_p: String,
    pub apellido_m: String,
    pub correo: String,
    pub contrasena: String,
    pub repetir_contrasena: String,
    pub tipo: UserType,
    pub codigo_estudiante: String,
}

impl RegisterDraft {
    /// Switch user type; professors carry no student code.
    pub fn set_type(&mut self, tipo: UserType) {
        self.tipo = tipo;
        if tipo == UserType::Profesor {
            self.codigo_estudiante.clear();
        }
    }
}

/// Build the registration payload, or the message to show.
///
/// # Errors
///
/// Mismatched passwords, or a student code that is not eight digits.
pub fn validate_registration(draft: &RegisterDraft) -> Result<RegisterRequest, &'static str> {
    if draft.contrasena != draft.repetir_contrasena {
        return Err(PASSWORD_MISMATCH);
    }
    let codigo_estudiante = match draft.tipo {
        UserType::Profesor => None,
        UserType::Estudiante => {
            let code = &draft.codigo_estudiante;
            if code.len() != STUDENT_CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
                return Err(STUDENT_CODE_INVALID);
            }
            Some(code.clone())
        }
    };
    Ok(RegisterRequest {
        nombres: draft.nombres.trim().to_owned(),
        apellido_p: draft.apellido_p.trim().to_owned(),
        apellido_m: draft.apellido_m.trim().to_owned(),
        correo: draft.correo.trim().to_owned(),
        contrasena: draft.contrasena.clone(),
        tipo_usuario: draft.tipo.as_str().to_owned(),
        codigo_estudiante,
    })
}

pub fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status, message } => message
            .clone()
            .unwrap_or_else(|| format!("Error {status}: Ocurrió un problema con el registro.")),
        ApiError::Network(_) => "No se pudo conectar con el servidor. Inténtalo más tarde.".to_owned(),
        other => other.server_message().map_or_else(
            || "Ocurrió un problema con el registro.".to_owned(),
            ToOwned::to_owned,
        ),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(RegisterDraft::default());
    let show_password = RwSignal::new([false, false]);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        error.set(None);
        let payload = match validate_registration(&draft.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        loading.set(true);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&payload).await {
                Ok(()) => {
                    crate::util::dialog::alert(REGISTERED);
                    navigate("/login", leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    error.set(Some(register_error_message(&e)));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, navigate);
    };

    let text_field = move |label: &'static str, kind: &'static str, read: fn(&RegisterDraft) -> String, write: fn(&mut RegisterDraft, String)| {
        view! {
            <label class="register-form__field">
                <span>{label}</span>
                <input
                    type=kind
                    required
                    prop:value=move || draft.with(read)
                    on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    let password_field = move |label: &'static str, index: usize, read: fn(&RegisterDraft) -> String, write: fn(&mut RegisterDraft, String)| {
        view! {
            <label class="register-form__field">
                <span>{label}</span>
                <input
                    type=move || if show_password.get()[index] { "text" } else { "password" }
                    required
                    prop:value=move || draft.with(read)
                    on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
                />
                <button
                    type="button"
                    class="register-form__toggle"
                    on:click=move |_| show_password.update(|s| s[index] = !s[index])
                >
                    {move || if show_password.get()[index] { "Ocultar" } else { "Mostrar" }}
                </button>
            </label>
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <div class="register-card__header">
                    <h1>"Crear Cuenta"</h1>
                    <p>"Completa tus datos para registrarte"</p>
                </div>
                <form class="register-form" on:submit=on_submit>
                    <fieldset class="register-form__types">
                        <legend>"Tipo de Usuario"</legend>
                        {[UserType::Estudiante, UserType::Profesor]
                            .into_iter()
                            .map(|tipo| {
                                view! {
                                    <label class="register-form__type" class:active=move || draft.get().tipo == tipo>
                                        <input
                                            type="radio"
                                            name="tipoUsuario"
                                            prop:checked=move || draft.get().tipo == tipo
                                            on:change=move |_| draft.update(|d| d.set_type(tipo))
                                        />
                                        {tipo.as_str()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>
                    {text_field("Nombres", "text", |d| d.nombres.clone(), |d, v| d.nombres = v)}
                    {text_field("Apellido Paterno", "text", |d| d.apellido_p.clone(), |d, v| d.apellido_p = v)}
                    {text_field("Apellido Materno", "text", |d| d.apellido_m.clone(), |d, v| d.apellido_m = v)}
                    {text_field("Correo", "email", |d| d.correo.clone(), |d, v| d.correo = v)}
                    {password_field("Contraseña", 0, |d| d.contrasena.clone(), |d, v| d.contrasena = v)}
                    {password_field(
                        "Repetir Contraseña",
                        1,
                        |d| d.repetir_contrasena.clone(),
                        |d, v| d.repetir_contrasena = v,
                    )}
                    <Show when=move || draft.get().tipo == UserType::Estudiante>
                        <label class="register-form__field">
                            <span>"Código de Estudiante"</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                maxlength=STUDENT_CODE_LEN.to_string()
                                placeholder="20231234"
                                prop:value=move || draft.get().codigo_estudiante
                                on:input=move |ev| {
                                    let code = sanitize_student_code(&event_target_value(&ev));
                                    draft.update(|d| d.codigo_estudiante = code);
                                }
                            />
                        </label>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="register-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="register-form__submit" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Registrando..." } else { "Registrarse" }}
                    </button>
                    <a class="register-form__login" href="/login">
                        "¿Ya tienes cuenta? Inicia sesión"
                    </a>
                </form>
            </div>
        </div>
    }
}
