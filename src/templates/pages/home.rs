// templates/pages/home.rs

use crate::domain::User;
use crate::templates::{card, desktop_layout, Notice};
use maud::{html, Markup};

pub fn home_page(user: Option<&User>, notice: Option<Notice>) -> Markup {
    desktop_layout(
        "Home",
        user,
        html! {
            @if let Some(n) = notice {
                (n.banner())
            }

            h1 { "Find Your Perfect Student Accommodation" }

            div class="grid two" {
                (card("For Students", html! {
                    p { "Find the best accommodation near SRM University." }
                    p { "Browse through a wide range of options tailored for students like you." }
                    a href="/search" class="btn" { "Start Searching" }
                }))

                (card("For Property Owners", html! {
                    p { "List your property and reach thousands of students." }
                    p { "Easily upload and manage your property listings to find the perfect tenants." }
                    a href="/upload" class="btn" { "List Your Property" }
                }))
            }
        },
    )
}
