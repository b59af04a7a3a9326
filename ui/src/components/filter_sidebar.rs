use std::rc::Rc;

use dioxus::prelude::*;

use crate::dashboard::{Dimension, FilterOptions, FilterSelection};
use crate::t;

/// Sidebar with one multi-select per dimension.
#[component]
pub fn FilterSidebar(options: Rc<FilterOptions>, selection: Signal<FilterSelection>) -> Element {
    rsx! {
        aside { class: "dashboard-sidebar",
            h2 { class: "dashboard-sidebar__heading", {t!("filters-heading")} }
            for dimension in Dimension::ALL {
                MultiSelect {
                    key: "{dimension}",
                    dimension,
                    options: options.clone(),
                    selection,
                }
            }
        }
    }
}

pub fn dimension_label(dimension: Dimension) -> String {
    match dimension {
        Dimension::Year => t!("filter-year"),
        Dimension::Platform => t!("filter-platform"),
        Dimension::Genre => t!("filter-genre"),
        Dimension::Publisher => t!("filter-publisher"),
    }
}

#[component]
fn MultiSelect(
    dimension: Dimension,
    options: Rc<FilterOptions>,
    selection: Signal<FilterSelection>,
) -> Element {
    let current = selection();
    let labels = options.labels(dimension);
    let total = labels.len();
    let chosen = current.chosen_count(dimension, &options);
    let title = dimension_label(dimension);
    let empty_class = if chosen == 0 { "filter--empty" } else { "" };

    rsx! {
        fieldset { class: "filter {empty_class}", id: "filter-{dimension}",
            legend { class: "filter__legend", "{title}" }
            {render_toolbar(dimension, chosen, total, selection)}
            ul { class: "filter__options",
                for (index, label) in labels.into_iter().enumerate() {
                    {render_option(
                        dimension,
                        index,
                        label,
                        current.is_chosen(dimension, index, &options),
                        options.clone(),
                        selection,
                    )}
                }
            }
        }
    }
}

fn render_toolbar(
    dimension: Dimension,
    chosen: usize,
    total: usize,
    mut selection: Signal<FilterSelection>,
) -> Element {
    let count = t!("filter-count", chosen = chosen.to_string(), total = total.to_string());

    rsx! {
        div { class: "filter__toolbar",
            span { class: "filter__count", "{count}" }
            button {
                r#type: "button",
                class: "button button--ghost filter__action",
                disabled: chosen == total,
                onclick: move |_| selection.with_mut(|s| s.select_all(dimension)),
                {t!("filter-select-all")}
            }
            button {
                r#type: "button",
                class: "button button--ghost filter__action",
                disabled: chosen == 0,
                onclick: move |_| selection.with_mut(|s| s.clear(dimension)),
                {t!("filter-select-none")}
            }
        }
    }
}

fn render_option(
    dimension: Dimension,
    index: usize,
    label: String,
    checked: bool,
    options: Rc<FilterOptions>,
    mut selection: Signal<FilterSelection>,
) -> Element {
    let input_id = format!("filter-{dimension}-{index}");

    rsx! {
        li { class: "filter__option",
            input {
                r#type: "checkbox",
                id: "{input_id}",
                checked,
                onchange: move |_| selection.with_mut(|s| s.toggle(dimension, index, &options)),
            }
            label { r#for: "{input_id}", "{label}" }
        }
    }
}
