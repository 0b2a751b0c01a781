//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the shared session, chrome and chat contexts. `Shell` sits
//! inside the router so it can watch the pathname: it installs the route
//! guard, decides whether the side navigation is shown, and every route
//! view is wrapped in `Gate` so nothing renders while a redirect is due.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::pages::{
    appointment_form::AppointmentFormPage, appointments::AppointmentsPage, chat::ChatPage, login::LoginPage,
    medication_form::MedicationFormPage, medications::MedicationsPage, register::RegisterPage,
    resident_form::ResidentFormPage, residents::ResidentsPage, users::UsersPage, verify_email::VerifyEmailPage,
};
use crate::state::{auth::AuthState, chat::ChatState, ui::UiState};
use crate::util::auth::{install_route_guard, is_chrome_hidden, may_render};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session starts pending; the persisted pair is only readable once the
    // browser has taken over.
    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(chat);

    Effect::new(move || {
        if auth.with_untracked(|a| a.loading) {
            auth.set(AuthState::restore());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/isenior.css"/>
        <Title text="iSenior"/>

        <Router>
            <Shell/>
        </Router>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let pathname = Memo::new(move |_| location.pathname.get());
    install_route_guard(auth, pathname, use_navigate());

    let show_chrome = move || auth.get().is_authenticated() && !is_chrome_hidden(&pathname.get());

    view! {
        <div class="layout">
            <Show when=show_chrome>
                <Sidebar/>
            </Show>
            <main class="layout__content">
                <Routes fallback=|| "Page introuvable.".into_view()>
                    <Route path=StaticSegment("") view=|| ()/>
                    <Route path=StaticSegment("login") view=|| view! { <Gate><LoginPage/></Gate> }/>
                    <Route path=StaticSegment("register") view=|| view! { <Gate><RegisterPage/></Gate> }/>
                    <Route
                        path=(StaticSegment("verify-email"), ParamSegment("token"))
                        view=|| view! { <Gate><VerifyEmailPage/></Gate> }
                    />
                    <Route path=StaticSegment("residents") view=|| view! { <Gate><ResidentsPage/></Gate> }/>
                    <Route
                        path=(StaticSegment("residents"), StaticSegment("new"))
                        view=|| view! { <Gate><ResidentFormPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("residents"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <Gate><ResidentFormPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("residents"), ParamSegment("id"))
                        view=|| view! { <Gate><ResidentsPage/></Gate> }
                    />
                    <Route path=StaticSegment("appointments") view=|| view! { <Gate><AppointmentsPage/></Gate> }/>
                    <Route
                        path=(StaticSegment("appointments"), StaticSegment("new"))
                        view=|| view! { <Gate><AppointmentFormPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("appointments"), ParamSegment("id"))
                        view=|| view! { <Gate><AppointmentFormPage/></Gate> }
                    />
                    <Route path=StaticSegment("medications") view=|| view! { <Gate><MedicationsPage/></Gate> }/>
                    <Route
                        path=(StaticSegment("medications"), StaticSegment("new"))
                        view=|| view! { <Gate><MedicationFormPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("medications"), ParamSegment("id"))
                        view=|| view! { <Gate><MedicationFormPage/></Gate> }
                    />
                    <Route path=StaticSegment("users") view=|| view! { <Gate><UsersPage/></Gate> }/>
                    <Route path=StaticSegment("chat") view=|| view! { <Gate><ChatPage/></Gate> }/>
                </Routes>
            </main>
        </div>
    }
}

/// Render `children` only once the session is known and no redirect applies.
#[component]
fn Gate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    view! {
        <Show
            when=move || may_render(&location.pathname.get(), &auth.get())
            fallback=|| view! { <p class="layout__loading">"Chargement..."</p> }
        >
            {children()}
        </Show>
    }
}
