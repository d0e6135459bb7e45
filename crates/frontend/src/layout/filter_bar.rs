use super::global_context::StatsContext;
use crate::shared::icons::icon;
use contracts::shared::stats_query::{FilterClause, FilterOperation};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

fn key_label(key: &str) -> &str {
    match key {
        "browser" => "Browser",
        "browser_version" => "Browser version",
        "os" => "Operating system",
        "os_version" => "OS version",
        "screen" => "Screen size",
        "goal" => "Goal",
        other => other,
    }
}

fn operation_label(operation: FilterOperation) -> &'static str {
    match operation {
        FilterOperation::Is => "is",
        FilterOperation::IsNot => "is not",
        FilterOperation::Contains => "contains",
        FilterOperation::ContainsNot => "does not contain",
        FilterOperation::Matches => "matches",
        FilterOperation::MatchesNot => "does not match",
    }
}

/// Human readable text of an active filter, e.g. `Browser is Chrome or Safari`
pub fn filter_chip_label(clause: &FilterClause) -> String {
    format!(
        "{} {} {}",
        key_label(clause.key()),
        operation_label(clause.operation()),
        clause.clauses().join(" or ")
    )
}

/// Active filters of the dashboard query, each removable
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<StatsContext>().expect("StatsContext not provided");

    view! {
        <div class="filter-bar">
            <For
                each=move || ctx.query.get().filters
                key=|clause| clause.clone()
                children=move |clause| {
                    let label = filter_chip_label(&clause);
                    let key = clause.key().to_string();
                    view! {
                        <span class="filter-bar__chip">
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                {label}
                            </Badge>
                            <button
                                class="filter-bar__remove"
                                title="Remove filter"
                                on:click=move |_| ctx.remove_filter(&key)
                            >
                                {icon("x")}
                            </button>
                        </span>
                    }
                }
            />
        </div>
    }
}
