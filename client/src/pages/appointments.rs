//! Month calendar of every appointment.
//!
//! SYSTEM CONTEXT
//! ==============
//! All appointments load once; month navigation is purely local. Clicking
//! an event opens a popup with edit and delete actions. Grid math lives in
//! `util::calendar`.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::net::types::Appointment;
use crate::state::feedback::Feedback;
use crate::util::calendar::{self, FRENCH_WEEKDAYS, MonthCursor};

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let cursor = RwSignal::new(MonthCursor::current());
    let opened = RwSignal::new(None::<Appointment>);
    let feedback = RwSignal::new(Feedback::default());
    let today = calendar::today();

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_appointments(None).await {
                Ok(rows) => appointments.set(rows),
                Err(e) => {
                    leptos::logging::warn!("appointments load failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur lors de la récupération des rendez-vous")));
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_appointment(id).await {
                Ok(()) => {
                    leptos::logging::log!("appointment {id} deleted");
                    appointments.update(|rows| crate::util::forms::remove_by_id(rows, id));
                    opened.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("appointment {id} delete failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur lors de la suppression du rendez-vous")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="appointments-page">
            <header class="appointments-page__header">
                <h2>{move || cursor.get().label()}</h2>
                <div class="appointments-page__nav">
                    <button class="btn" type="button" title="Mois précédent" on:click=move |_| cursor.update(|c| *c = c.prev())>
                        "←"
                    </button>
                    <button
                        class="btn"
                        type="button"
                        title="Aujourd'hui"
                        on:click=move |_| cursor.set(MonthCursor::containing(today))
                    >
                        {calendar::today_label(today)}
                    </button>
                    <button class="btn" type="button" title="Mois suivant" on:click=move |_| cursor.update(|c| *c = c.next())>
                        "→"
                    </button>
                </div>
                <a href="/appointments/new" class="btn btn--primary">"Ajouter un rendez-vous"</a>
            </header>
            <Alert feedback=feedback/>
            <table class="calendar">
                <thead>
                    <tr>{FRENCH_WEEKDAYS.iter().map(|day| view! { <th>{*day}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = appointments.get();
                        cursor
                            .get()
                            .weeks()
                            .into_iter()
                            .map(|week| {
                                view! {
                                    <tr>
                                        {week
                                            .into_iter()
                                            .map(|cell| day_cell(cell, today, &rows, opened))
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {move || opened.get().map(|appt| view! { <AppointmentPopup appointment=appt opened=opened on_delete=on_delete/> })}
        </div>
    }
}

fn day_cell(
    cell: Option<NaiveDate>,
    today: NaiveDate,
    appointments: &[Appointment],
    opened: RwSignal<Option<Appointment>>,
) -> AnyView {
    let Some(day) = cell else {
        return view! { <td class="calendar__cell calendar__cell--outside"></td> }.into_any();
    };
    let events = calendar::events_on(day, appointments);
    let is_today = day == today;
    view! {
        <td class="calendar__cell" class:calendar__cell--today=is_today>
            <span class="calendar__day">{day.format("%-d").to_string()}</span>
            {events
                .into_iter()
                .map(|appt| {
                    let title = calendar::event_title(&appt);
                    let tooltip = title.clone();
                    view! {
                        <button
                            class="calendar__event"
                            type="button"
                            title=tooltip
                            on:click=move |_| opened.set(Some(appt.clone()))
                        >
                            {title}
                        </button>
                    }
                })
                .collect_view()}
        </td>
    }
    .into_any()
}

#[component]
fn AppointmentPopup(
    appointment: Appointment,
    opened: RwSignal<Option<Appointment>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = appointment.id;
    let has_transport = !appointment.transporteur.is_empty();
    let transport = format!("{} ({})", appointment.transporteur, appointment.heure_transport);
    view! {
        <div class="dialog-backdrop" on:click=move |_| opened.set(None)>
            <div class="dialog appointment-popup" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" type="button" title="Fermer" on:click=move |_| opened.set(None)>
                    "×"
                </button>
                <h4>{appointment.resident_name.clone()}</h4>
                <p>
                    <strong>"Date : "</strong>
                    {appointment.date.clone()}
                </p>
                <p>
                    <strong>"Heure : "</strong>
                    {appointment.time.clone()}
                </p>
                <p>
                    <strong>"Motif : "</strong>
                    {appointment.reason.clone()}
                </p>
                <Show when=move || has_transport>
                    <p>
                        <strong>"Transport : "</strong>
                        {transport.clone()}
                    </p>
                </Show>
                <div class="dialog__actions">
                    <a href=format!("/appointments/{id}") class="btn">"Modifier"</a>
                    <button class="btn btn--danger" type="button" on:click=move |_| on_delete.run(id)>
                        "Supprimer"
                    </button>
                </div>
            </div>
        </div>
    }
}
