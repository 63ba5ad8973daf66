use crate::domain::{Listing, User};
use crate::templates::components::{amenity_badges, rupees};
use crate::templates::{desktop_layout, Notice};
use maud::{html, Markup};

pub fn details_page(user: Option<&User>, listing: &Listing, notice: Option<Notice>) -> Markup {
    let owns = user.map(|u| u.is_broker() && u.id == listing.broker_id).unwrap_or(false);

    desktop_layout(
        &listing.title,
        user,
        html! {
            @if let Some(n) = notice {
                (n.banner())
            }

            article class="card details" {
                h1 { (listing.title) }
                p class="address" { (listing.address) }

                div class="photos" {
                    @for photo in &listing.photos {
                        img src=(photo) alt=(listing.title);
                    }
                }

                div class="grid two" {
                    div {
                        h3 { "Price" }
                        p { (rupees(listing.price)) }
                    }
                    div {
                        h3 { "Distance from SRM" }
                        p { (listing.distance_from_university) " km" }
                    }
                    div {
                        h3 { "Amenities" }
                        (amenity_badges(&listing.amenities))
                    }
                    div {
                        h3 { "Contact Information" }
                        p { "Email: " (listing.contact_email) }
                        p { "Phone: " (listing.contact_phone) }
                    }
                }

                a href=(format!("mailto:{}", listing.contact_email)) class="btn" { "Contact Owner" }

                @if owns {
                    a href=(format!("/accommodation/{}/edit", listing.id)) class="btn secondary" { "Edit" }
                }
            }
        },
    )
}
