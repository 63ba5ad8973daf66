// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Amenity tags offered by the upload form.
pub const AMENITY_CHOICES: [&str; 4] = ["Wi-Fi", "AC", "Furnished", "Parking"];

/// Used when a broker uploads without any photo.
pub const PLACEHOLDER_PHOTO: &str = "/placeholder.svg?height=200&width=300";

#[derive(Debug, Error, PartialEq)]
pub enum ListingError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a non-negative number")]
    Negative(&'static str),

    #[error("contact email is not valid")]
    InvalidEmail,
}

/// An accommodation record as served by the listings API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub price: f64,
    pub distance_from_university: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// First entry is the primary photo.
    #[serde(default)]
    pub photos: Vec<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub broker_id: i64,
}

impl Listing {
    pub fn primary_photo(&self) -> &str {
        self.photos
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_PHOTO)
    }

    /// Checks applied to every record coming back from the API.
    pub fn validate(&self) -> Result<(), ListingError> {
        non_negative(self.price, "price")?;
        non_negative(self.distance_from_university, "distance")?;
        Ok(())
    }
}

/// Body of create/update requests: a listing without its server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub address: String,
    pub price: f64,
    pub distance_from_university: f64,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub broker_id: i64,
}

impl NewListing {
    /// Normalizes the draft in place and rejects anything the API would refuse.
    pub fn validate(mut self) -> Result<Self, ListingError> {
        self.title = required(&self.title, "title")?;
        self.address = required(&self.address, "address")?;
        self.contact_phone = required(&self.contact_phone, "contact phone")?;

        non_negative(self.price, "price")?;
        non_negative(self.distance_from_university, "distance")?;

        let email = self.contact_email.trim();
        if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@')
        {
            return Err(ListingError::InvalidEmail);
        }
        self.contact_email = email.to_string();

        let mut amenities: Vec<String> = Vec::with_capacity(self.amenities.len());
        for tag in self.amenities.iter().map(|a| a.trim()) {
            if !tag.is_empty() && !amenities.iter().any(|a| a == tag) {
                amenities.push(tag.to_string());
            }
        }
        self.amenities = amenities;

        self.photos.retain(|p| !p.trim().is_empty());
        if self.photos.is_empty() {
            self.photos.push(PLACEHOLDER_PHOTO.to_string());
        }

        Ok(self)
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ListingError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ListingError::Missing(field));
    }
    Ok(v.to_string())
}

fn non_negative(value: f64, field: &'static str) -> Result<(), ListingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ListingError::Negative(field))
    }
}
