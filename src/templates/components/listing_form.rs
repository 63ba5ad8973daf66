use crate::domain::AMENITY_CHOICES;
use crate::router::forms::ListingForm;
use maud::{html, Markup};

/// Shared by the upload and edit pages. `action` is where the form posts.
pub fn listing_form(action: &str, form: &ListingForm, submit_label: &str) -> Markup {
    html! {
        form action=(action) method="post" class="listing-form" {
            label for="title" { "Title" }
            input id="title" name="title" value=(form.title) required;

            label for="address" { "Address" }
            input id="address" name="address" value=(form.address) required;

            label for="price" { "Price (₹/month)" }
            input id="price" name="price" type="number" min="0" step="any" value=(form.price) required;

            label for="distance" { "Distance from SRM (km)" }
            input id="distance" name="distance" type="number" min="0" step="any" value=(form.distance) required;

            fieldset {
                legend { "Amenities" }
                @for amenity in AMENITY_CHOICES {
                    label {
                        input type="checkbox" name="amenities" value=(amenity)
                            checked[form.amenities.iter().any(|a| a == amenity)];
                        " " (amenity)
                    }
                }
            }

            label for="photos" { "Photo URLs (one per line)" }
            textarea id="photos" name="photos" rows="3" { (form.photos) }

            label for="email" { "Contact Email" }
            input id="email" name="contact_email" type="email" value=(form.contact_email) required;

            label for="phone" { "Contact Phone" }
            input id="phone" name="contact_phone" type="tel" value=(form.contact_phone) required;

            button type="submit" class="btn" { (submit_label) }
        }
    }
}
