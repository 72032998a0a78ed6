//! Student-only button listing pending section invitations.

use leptos::prelude::*;

use super::modal::Modal;
use crate::net::types::Invitation;
use crate::state::auth::{AuthState, Role};
use crate::state::invitations::{Decision, PendingInvitations};
use crate::util::dates::format_short_date;

#[cfg(feature = "hydrate")]
const NOTICE_MILLIS: u32 = 3000;

#[component]
pub fn PendingInvitationsButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let open = RwSignal::new(false);
    let pending = RwSignal::new(PendingInvitations::default());

    let load = move || {
        let Some(correo) = auth.get_untracked().user.map(|user| user.email) else {
            return;
        };
        pending.update(|p| {
            p.loading = true;
            p.message = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_pending_invitations(&correo).await;
            pending.update(|p| {
                p.loading = false;
                match result {
                    Ok(items) => p.items = items,
                    Err(e) => p.message = Some(crate::state::invitations::load_error_message(&e)),
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = correo;
    };

    let on_open = move |_| {
        open.set(true);
        load();
    };
    let on_close = Callback::new(move |()| {
        open.set(false);
        pending.update(|p| p.message = None);
    });

    let on_decide = Callback::new(move |(token, decision): (String, Decision)| {
        let Some(id_persona) = auth.get_untracked().user.and_then(|user| user.id) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match decision {
                Decision::Accept => crate::net::api::accept_invitation(&token, id_persona).await,
                Decision::Reject => crate::net::api::reject_invitation(&token).await,
            };
            pending.update(|p| match result {
                Ok(_) => {
                    p.remove_by_token(&token);
                    p.message = Some(decision.success_message().to_owned());
                }
                Err(e) => p.message = Some(decision.error_message(&e)),
            });
            crate::util::dialog::after_delay(NOTICE_MILLIS, move || pending.update(|p| p.message = None));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, decision, id_persona);
    });

    view! {
        <Show when=move || auth.get().role() == Some(Role::Alumno)>
            <button class="btn btn--primary invitations-button" type="button" on:click=on_open>
                "Ver Invitaciones Pendientes"
                <Show when=move || { pending.get().count() > 0 }>
                    <span class="badge">{move || pending.get().count()}</span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <Modal title="Invitaciones Pendientes" on_close=on_close disable_backdrop_close=true>
                    {move || {
                        let state = pending.get();
                        if state.loading {
                            view! { <p class="text-center">"Cargando..."</p> }.into_any()
                        } else if state.items.is_empty() {
                            view! { <p class="text-center">"No tienes invitaciones pendientes"</p> }.into_any()
                        } else {
                            view! {
                                <div class="invitations-list">
                                    {state
                                        .items
                                        .into_iter()
                                        .map(|inv| view! { <InvitationCard invitation=inv on_decide=on_decide /> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                    <Show when=move || pending.get().message.is_some()>
                        <p class="invitations-list__message">{move || pending.get().message.unwrap_or_default()}</p>
                    </Show>
                </Modal>
            </Show>
        </Show>
    }
}

#[component]
fn InvitationCard(invitation: Invitation, on_decide: Callback<(String, Decision)>) -> impl IntoView {
    let title = format!("Sección: {}", invitation.title());
    let profesor = invitation.nombre_profesor.clone().unwrap_or_default();
    let curso = invitation.nombre_curso.clone().unwrap_or_default();
    let fecha = format!("Enviada el {}", format_short_date(invitation.fecha_creacion.as_deref()));
    let accept_token = invitation.token.clone();
    let reject_token = invitation.token;

    view! {
        <div class="invitation-card">
            <div class="invitation-card__info">
                <h4>{title}</h4>
                <p><strong>"Profesor: "</strong>{profesor}</p>
                <p><strong>"Curso: "</strong>{curso}</p>
                <p class="invitation-card__date">{fecha}</p>
            </div>
            <div class="invitation-card__actions">
                <button
                    class="btn btn--success"
                    on:click=move |_| on_decide.run((accept_token.clone(), Decision::Accept))
                >
                    "Aceptar"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_decide.run((reject_token.clone(), Decision::Reject))
                >
                    "Rechazar"
                </button>
            </div>
        </div>
    }
}
