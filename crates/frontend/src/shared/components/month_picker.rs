use crate::shared::date_utils::{month_display, today};
use chrono::Datelike;
use leptos::prelude::*;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month before `(month, year)`.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month <= 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Month/year filter with quick buttons and a picker dialog
#[component]
pub fn MonthPicker(
    #[prop(into)] month: Signal<u32>,
    #[prop(into)] year: Signal<i32>,
    /// Called with the chosen (month, year)
    on_select: Callback<(u32, i32)>,
) -> impl IntoView {
    let (show_picker, set_show_picker) = signal(false);
    let draft_month = RwSignal::new(month.get_untracked());
    let draft_year = RwSignal::new(year.get_untracked());

    let on_current_month = move |_| {
        let now = today();
        on_select.run((now.month(), now.year()));
    };

    let on_previous_month = move |_| {
        let now = today();
        on_select.run(previous_month(now.month(), now.year()));
    };

    let on_open_picker = move |_| {
        draft_month.set(month.get_untracked());
        draft_year.set(year.get_untracked());
        set_show_picker.set(true);
    };

    view! {
        <div class="month-picker">
            <span class="month-picker__label">{move || month_display(month.get(), year.get())}</span>
            <button class="month-picker__button" on:click=on_previous_month title="Previous month">"-1M"</button>
            <button class="month-picker__button" on:click=on_current_month title="Current month">"0M"</button>
            <button class="month-picker__button" on:click=on_open_picker title="Choose month">"⋯"</button>

            <Show when=move || show_picker.get()>
                <div class="modal-overlay">
                    <div class="month-picker__dialog">
                        <h3>"Select month and year"</h3>
                        <label>"Month:"</label>
                        <select
                            prop:value=move || draft_month.get().to_string()
                            on:change=move |ev| {
                                if let Ok(m) = event_target_value(&ev).parse::<u32>() {
                                    draft_month.set(m);
                                }
                            }
                        >
                            {MONTHS
                                .iter()
                                .enumerate()
                                .map(|(idx, name)| {
                                    let value = (idx + 1).to_string();
                                    view! { <option value=value>{*name}</option> }
                                })
                                .collect_view()}
                        </select>
                        <label>"Year:"</label>
                        <input
                            type="number"
                            prop:value=move || draft_year.get().to_string()
                            on:input=move |ev| {
                                if let Ok(y) = event_target_value(&ev).parse::<i32>() {
                                    draft_year.set(y);
                                }
                            }
                            min="2017"
                        />
                        <div class="month-picker__actions">
                            <button on:click=move |_| {
                                on_select.run((draft_month.get(), draft_year.get()));
                                set_show_picker.set(false);
                            }>"Apply"</button>
                            <button on:click=move |_| set_show_picker.set(false)>"Cancel"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_month() {
        assert_eq!(previous_month(5, 2019), (4, 2019));
        assert_eq!(previous_month(1, 2019), (12, 2018));
    }
}
