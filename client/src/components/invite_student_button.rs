//! "Invitar Alumno" button and modal for a section's professor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lives on the section detail page. The section id comes from the route and
//! the inviter from the auth context; the backend resolves the professor.

#[cfg(test)]
#[path = "invite_student_button_test.rs"]
mod invite_student_button_test;

use leptos::prelude::*;

use super::modal::Modal;
use crate::net::error::ApiError;
use crate::state::auth::{AuthState, Role};
use crate::util::validation::is_valid_email;

pub const PROFESSORS_ONLY: &str = "Solo los profesores pueden enviar invitaciones.";
pub const INVALID_EMAIL: &str = "Por favor ingrese un correo válido.";
pub const SENT_FALLBACK: &str = "Invitación enviada correctamente";
const NOTICE_MILLIS: u32 = 3000;

/// `(idPersona, email)` to invite, or the message to show.
///
/// # Errors
///
/// Non-professor sessions and malformed addresses.
pub fn validate_invitation(state: &AuthState, email: &str) -> Result<(i64, String), &'static str> {
    let id_persona = match (&state.user, state.role()) {
        (Some(user), Some(Role::Profesor)) => user.id.ok_or(PROFESSORS_ONLY)?,
        _ => return Err(PROFESSORS_ONLY),
    };
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok((id_persona, email.to_owned()))
}

pub fn send_error_message(err: &ApiError) -> String {
    if err.is_network() {
        return "Error de conexión. Inténtalo de nuevo.".to_owned();
    }
    err.server_message().unwrap_or("Error al enviar la invitación").to_owned()
}

#[component]
pub fn InviteStudentButton(id_seccion: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let open = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(Vec::<String>::new());

    let on_close = Callback::new(move |()| {
        open.set(false);
        email.set(String::new());
        message.set(None);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let (id_persona, correo) = match validate_invitation(&auth.get(), &email.get()) {
            Ok(valid) => valid,
            Err(msg) => {
                message.set(Some(msg.to_owned()));
                return;
            }
        };
        sending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::types::CreateInvitationRequest;

            let payload = CreateInvitationRequest { id_persona, correo_alumno: correo.clone(), id_seccion };
            match crate::net::api::send_invitation(&payload).await {
                Ok(server_message) => {
                    message.set(Some(server_message.unwrap_or_else(|| SENT_FALLBACK.to_owned())));
                    email.set(String::new());
                    sent.update(|list| list.push(correo));
                    crate::util::dialog::after_delay(NOTICE_MILLIS, move || message.set(None));
                }
                Err(e) => {
                    leptos::logging::warn!("invitation failed: {e}");
                    message.set(Some(send_error_message(&e)));
                }
            }
            sending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id_persona, correo, id_seccion, NOTICE_MILLIS);
    };

    view! {
        <button class="btn btn--primary invite-button" type="button" on:click=move |_| open.set(true)>
            "Invitar Alumno"
        </button>
        <Show when=move || open.get()>
            <Modal title="Invitar Alumno" on_close=on_close>
                <form class="invite-form" on:submit=on_submit>
                    <label class="invite-form__field">
                        <span>"Correo del alumno"</span>
                        <input
                            type="email"
                            placeholder="alumno@correo.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="invite-form__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || sending.get()>
                            {move || if sending.get() { "Enviando..." } else { "Enviar Invitación" }}
                        </button>
                    </div>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="invite-form__message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !sent.get().is_empty()>
                    <div class="invite-form__sent">
                        <h4>"Invitaciones enviadas:"</h4>
                        <ul>
                            {move || {
                                sent.get().into_iter().map(|mail| view! { <li>{mail}</li> }).collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                </Show>
            </Modal>
        </Show>
    }
}
