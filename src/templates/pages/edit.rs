use crate::domain::User;
use crate::router::forms::ListingForm;
use crate::templates::components::{error_banner, listing_form};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn edit_page(user: &User, id: i64, form: &ListingForm, error: Option<&str>) -> Markup {
    desktop_layout(
        "Edit Accommodation",
        Some(user),
        html! {
            h2 { "Edit Accommodation" }

            @if let Some(err) = error {
                (error_banner(err))
            }

            (card(&form.title, listing_form(&format!("/accommodation/{id}/edit"), form, "Save Changes")))

            p { a href=(format!("/accommodation/{id}")) { "Cancel" } }
        },
    )
}
