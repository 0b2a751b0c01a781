//! Staff account listing, reserved to the director.

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::net::types::User;
use crate::state::feedback::Feedback;

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<User>::new());
    let feedback = RwSignal::new(Feedback::default());

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(rows) => users.set(rows),
                Err(e) => {
                    leptos::logging::warn!("users load failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur lors de la récupération des utilisateurs")));
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(id).await {
                Ok(()) => {
                    leptos::logging::log!("user {id} deleted");
                    users.update(|rows| crate::util::forms::remove_by_id(rows, id));
                    feedback.update(Feedback::dismiss);
                }
                Err(e) => {
                    leptos::logging::warn!("user {id} delete failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur lors de la suppression de l'utilisateur")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Utilisateurs"</h2>
            </header>
            <Alert feedback=feedback/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Email"</th>
                        <th>"Nom d'utilisateur"</th>
                        <th>"Rôle"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                let id = user.id;
                                view! {
                                    <tr>
                                        <td>{user.email}</td>
                                        <td>{user.username}</td>
                                        <td>{user.role}</td>
                                        <td class="data-table__actions">
                                            <button
                                                class="btn btn--small btn--danger"
                                                type="button"
                                                on:click=move |_| on_delete.run(id)
                                            >
                                                "Supprimer"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
