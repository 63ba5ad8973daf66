use maud::{html, Markup};

pub mod listing_card;
pub mod listing_form;
pub mod notice;

pub use listing_card::{amenity_badges, listing_card};
pub use listing_form::listing_form;
pub use notice::{error_banner, Notice};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Formats a monthly rent like `₹8000/month`.
pub fn rupees(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{price:.0}/month")
    } else {
        format!("₹{price:.2}/month")
    }
}
