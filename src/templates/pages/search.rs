use crate::domain::{Listing, User};
use crate::search::{SearchCriteria, SortKey, DEFAULT_MAX_PRICE};
use crate::templates::components::{error_banner, listing_card};
use crate::templates::{card, desktop_layout, Notice};
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub user: &'a User,
    pub criteria: &'a SearchCriteria,
    pub listings: Vec<&'a Listing>,
    pub notice: Option<Notice>,
    /// Set when the listing fetch failed.
    pub error: Option<String>,
}

pub fn search_page(vm: &SearchVm) -> Markup {
    let c = vm.criteria;
    desktop_layout(
        "Find Accommodation",
        Some(vm.user),
        html! {
            h2 { "Find Accommodation" }

            @if let Some(n) = vm.notice {
                (n.banner())
            }
            @if let Some(err) = &vm.error {
                (error_banner(err))
                p { a href=(format!("/search?{}", c.to_query_string())) { "Try again" } }
            }

            (card("Search and Filter", html! {
                form action="/search" method="get" class="filters" {
                    label for="search" { "Search" }
                    input id="search" name="q" placeholder="Search accommodations..." value=(c.query);

                    label for="sort" { "Sort by" }
                    select id="sort" name="sort" {
                        option value="price" selected[c.sort == SortKey::Price] { "Price" }
                        option value="distance" selected[c.sort == SortKey::Distance] { "Distance" }
                    }

                    label for="min" { "Min price" }
                    input id="min" name="min" type="number" min="0" max=(DEFAULT_MAX_PRICE) step="1000" value=(c.price.min);

                    label for="max" { "Max price" }
                    input id="max" name="max" type="number" min="0" max=(DEFAULT_MAX_PRICE) step="1000" value=(c.price.max);

                    button type="submit" class="btn" { "Apply" }
                }
                a href=(format!("/search/export?{}", c.to_query_string())) class="btn secondary" { "Export to Excel" }
            }))

            @if vm.listings.is_empty() && vm.error.is_none() {
                p class="empty" { "No accommodations match your filters." }
            }

            div class="grid three" id="results" {
                @for listing in &vm.listings {
                    (listing_card(listing))
                }
            }
        },
    )
}
