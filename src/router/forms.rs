// src/router/forms.rs
use crate::domain::{Listing, NewListing};
use crate::errors::ServerError;
use astra::Request;
use std::io::Read;
use url::form_urlencoded;

/// Decoded `application/x-www-form-urlencoded` body. Keys may repeat.
#[derive(Debug, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn read(req: Request) -> Result<Self, ServerError> {
        let content_type = req
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<mime::Mime>().ok());

        match content_type {
            Some(m) if m.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() => {}
            _ => return Err(ServerError::BadRequest("expected a form submission".into())),
        }

        let mut body = req.into_body();
        let mut raw = Vec::new();
        body.reader()
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;

        Ok(Self::parse(&raw))
    }

    pub fn parse(raw: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw).into_owned().collect(),
        }
    }

    /// First value for `key`, or "" when absent.
    pub fn get(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

/// Raw listing form fields, kept as typed so a rejected submission
/// can be shown back to the broker unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub address: String,
    pub price: String,
    pub distance: String,
    pub amenities: Vec<String>,
    /// One URL per line.
    pub photos: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl ListingForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            title: form.get("title").to_string(),
            address: form.get("address").to_string(),
            price: form.get("price").to_string(),
            distance: form.get("distance").to_string(),
            amenities: form.get_all("amenities"),
            photos: form.get("photos").to_string(),
            contact_email: form.get("contact_email").to_string(),
            contact_phone: form.get("contact_phone").to_string(),
        }
    }

    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            address: listing.address.clone(),
            price: listing.price.to_string(),
            distance: listing.distance_from_university.to_string(),
            amenities: listing.amenities.clone(),
            photos: listing.photos.join("\n"),
            contact_email: listing.contact_email.clone(),
            contact_phone: listing.contact_phone.clone(),
        }
    }

    /// Builds the typed request body; the message is shown to the broker.
    pub fn to_new_listing(&self, broker_id: i64) -> Result<NewListing, String> {
        let price = parse_number(&self.price, "Price")?;
        let distance = parse_number(&self.distance, "Distance")?;

        NewListing {
            title: self.title.clone(),
            address: self.address.clone(),
            price,
            distance_from_university: distance,
            amenities: self.amenities.clone(),
            photos: self
                .photos
                .lines()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            broker_id,
        }
        .validate()
        .map_err(|e| e.to_string())
    }
}

fn parse_number(value: &str, field: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{field} must be a number"))
}
