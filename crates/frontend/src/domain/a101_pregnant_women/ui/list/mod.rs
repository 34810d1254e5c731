//! Paginated pregnant women list.

pub mod model;
pub mod row;
pub mod state;

use leptos::prelude::*;
use row::{display_name, plain_cells, LIST_COLUMNS};
use state::PregnantWomenListState;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn PregnantWomenList(
    /// `unified_beneficiary_details` route template
    details_template: String,
    api_url: String,
    location_id: Option<String>,
    #[prop(into)] month: Signal<u32>,
    #[prop(into)] year: Signal<i32>,
) -> impl IntoView {
    let state = RwSignal::new(PregnantWomenListState::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let details_template = StoredValue::new(details_template);
    let api_url = StoredValue::new(api_url);
    let location_id = StoredValue::new(location_id);

    let load = move || {
        let issued = state.try_update_untracked(|s| {
            s.request(
                month.get_untracked(),
                year.get_untracked(),
                location_id.get_value(),
            )
        });
        let Some((ticket, request)) = issued else {
            return;
        };
        let url = api_url.get_value();
        set_loading.set(true);
        spawn_local(async move {
            let result = model::fetch_page(&url, &request).await;
            if !state.with_untracked(|s| s.is_current(&ticket)) {
                log::debug!("Dropping superseded pregnant women list response");
                return;
            }
            match result {
                Ok(response) => {
                    state.update(|s| {
                        s.apply_response(&ticket, response);
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch pregnant women list: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        month.track();
        year.track();
        state.update_untracked(|s| s.page = 0);
        load();
    });

    let on_sort = move |column: &'static str| {
        state.update(|s| s.toggle_sort(column));
        load();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load();
    };

    view! {
        <div class="page page--list">
            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        {LIST_COLUMNS
                            .iter()
                            .map(|column| {
                                let name = column.name;
                                view! {
                                    <th class="table__header--sortable" on:click=move |_| on_sort(name)>
                                        {column.title}
                                        {move || state.with(|s| {
                                            if s.sort_column != name {
                                                ""
                                            } else if s.sort_ascending {
                                                " ▲"
                                            } else {
                                                " ▼"
                                            }
                                        })}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.get().rows
                        key=|row| row.id.clone()
                        children=move |row| {
                            let cells = plain_cells(&row);
                            let name_html = Signal::derive(move || {
                                display_name(
                                    &row,
                                    &details_template.get_value(),
                                    month.get(),
                                    year.get(),
                                )
                            });
                            view! {
                                <tr>
                                    <td inner_html=move || name_html.get()></td>
                                    {cells
                                        .into_iter()
                                        .map(|value| view! { <td>{value}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Flex gap=FlexGap::Small style="align-items: center;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || state.with(|s| s.page == 0))
                    on_click=move |_| {
                        let page = state.with_untracked(|s| s.page);
                        if page > 0 {
                            go_to_page(page - 1);
                        }
                    }
                >
                    "Previous"
                </Button>
                <span>
                    {move || state.with(|s| format!(
                        "Page {} of {} ({} records)",
                        s.page + 1,
                        s.total_pages().max(1),
                        s.total_count
                    ))}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || state.with(|s| s.page + 1 >= s.total_pages()))
                    on_click=move |_| {
                        let (page, pages) = state.with_untracked(|s| (s.page, s.total_pages()));
                        if page + 1 < pages {
                            go_to_page(page + 1);
                        }
                    }
                >
                    "Next"
                </Button>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </Flex>
        </div>
    }
}
