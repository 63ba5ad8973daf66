use crate::domain::{Listing, User};
use crate::router::forms::ListingForm;
use crate::templates::components::{error_banner, listing_form, rupees};
use crate::templates::{card, desktop_layout, Notice};
use maud::{html, Markup};

pub struct UploadVm<'a> {
    pub user: &'a User,
    pub listings: &'a [Listing],
    pub form: &'a ListingForm,
    pub notice: Option<Notice>,
    pub error: Option<String>,
}

pub fn upload_page(vm: &UploadVm) -> Markup {
    desktop_layout(
        "Broker Dashboard",
        Some(vm.user),
        html! {
            h2 { "Broker Dashboard" }

            @if let Some(n) = vm.notice {
                (n.banner())
            }
            @if let Some(err) = &vm.error {
                (error_banner(err))
            }

            (card("Upload New Accommodation", listing_form("/upload", vm.form, "Upload Accommodation")))

            h3 { "Your Accommodations" }
            @if vm.listings.is_empty() {
                p { "You haven't uploaded any accommodations yet." }
            } @else {
                div class="grid three" id="my-listings" {
                    @for listing in vm.listings {
                        div class="card" data-id=(listing.id) {
                            h3 { a href=(format!("/accommodation/{}", listing.id)) { (listing.title) } }
                            p { (listing.address) }
                            p { (rupees(listing.price)) }
                            a href=(format!("/accommodation/{}/edit", listing.id)) class="btn secondary" { "Edit" }
                            form action=(format!("/accommodation/{}/delete", listing.id)) method="post" class="inline" {
                                button type="submit" class="btn danger" { "Delete" }
                            }
                        }
                    }
                }
            }
        },
    )
}
