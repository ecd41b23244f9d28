use contracts::domain::a001_booking::BookingId;
use leptos::prelude::*;

use crate::domain::a001_booking::context::use_bookings;
use crate::shared::components::ui::Checkbox;

/// Checklist of a booking's repair tasks; clicking a task toggles it.
#[component]
pub fn TaskList(#[prop(into)] booking_id: Signal<Option<BookingId>>) -> impl IntoView {
    let bookings = use_bookings();
    let tasks = Memo::new(move |_| {
        booking_id
            .get()
            .and_then(|id| bookings.booking(id))
            .map(|booking| booking.tasks)
            .unwrap_or_default()
    });

    view! {
        <ul class="task-list">
            <For
                each=move || tasks.get()
                key=|task| (task.id, task.done)
                children=move |task| {
                    let task_id = task.id;
                    let on_change = Callback::new(move |_: bool| {
                        if let Some(id) = booking_id.get_untracked() {
                            bookings.toggle_task(id, task_id);
                        }
                    });
                    view! {
                        <li class="task-list__item">
                            <Checkbox
                                id=format!("task-{}", task_id.0)
                                label=task.description
                                checked=task.done
                                on_change=on_change
                            />
                        </li>
                    }
                }
            />
        </ul>
    }
}
