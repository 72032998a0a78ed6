//! Academic-year selector used by both home pages.

use leptos::prelude::*;

use crate::util::dates::ACADEMIC_YEARS;

#[component]
pub fn YearSelect(value: RwSignal<i32>) -> impl IntoView {
    view! {
        <select
            class="year-select"
            prop:value=move || value.get().to_string()
            on:change=move |ev| {
                if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                    value.set(year);
                }
            }
        >
            {ACADEMIC_YEARS
                .into_iter()
                .map(|year| view! { <option value=year.to_string()>{year}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
