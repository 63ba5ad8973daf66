use crate::domain::Listing;
use crate::templates::components::rupees;
use maud::{html, Markup};

pub fn amenity_badges(amenities: &[String]) -> Markup {
    html! {
        div class="amenities" {
            @for amenity in amenities {
                span class="badge" { (amenity) }
            }
        }
    }
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        div class="card listing" data-id=(listing.id) {
            h3 { (listing.title) }
            p class="address" { (listing.address) }
            img src=(listing.primary_photo()) alt=(listing.title);
            p class="price" { (rupees(listing.price)) }
            p class="distance" { (listing.distance_from_university) " km from SRM" }
            (amenity_badges(&listing.amenities))
            a href=(format!("/accommodation/{}", listing.id)) class="btn" { "View Details" }
        }
    }
}
