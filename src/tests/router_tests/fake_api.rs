// In-memory stand-in for the listings backend.
use crate::api::{ApiError, ListingApi};
use crate::domain::{Listing, NewListing, Role, Session, User};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct Data {
    accounts: Vec<(String, Session)>,
    listings: Vec<Listing>,
    calls: Vec<&'static str>,
    fail_reads: bool,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    data: Arc<Mutex<Data>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, id: i64, username: &str, password: &str, role: Role) -> Self {
        let user = User {
            id,
            username: username.into(),
            email: format!("{username}@example.com"),
            role,
        };
        let session = Session::new(user, format!("tok-{username}"));
        self.data.lock().accounts.push((password.into(), session));
        self
    }

    pub fn with_listing(self, listing: Listing) -> Self {
        self.data.lock().listings.push(listing);
        self
    }

    pub fn failing_reads(self) -> Self {
        self.data.lock().fail_reads = true;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.data.lock().calls.clone()
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.data.lock().listings.clone()
    }
}

pub fn listing(id: i64, broker_id: i64, price: f64) -> Listing {
    Listing {
        id,
        title: format!("Room {id}"),
        address: "Potheri, Chennai".into(),
        price,
        distance_from_university: 1.0,
        amenities: vec!["Wi-Fi".into()],
        photos: vec!["/p.jpg".into()],
        contact_email: "owner@example.com".into(),
        contact_phone: "555-0100".into(),
        broker_id,
    }
}

fn not_found() -> ApiError {
    ApiError::failed(Some(404), "Accommodation not found")
}

impl ListingApi for FakeApi {
    fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let mut d = self.data.lock();
        d.calls.push("login");
        d.accounts
            .iter()
            .find(|(pw, s)| s.user.username == username && pw == password)
            .map(|(_, s)| s.clone())
            .ok_or(ApiError::InvalidCredentials)
    }

    fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, ApiError> {
        let mut d = self.data.lock();
        d.calls.push("signup");
        if d.accounts.iter().any(|(_, s)| s.user.username == username) {
            return Err(ApiError::failed(Some(400), "Username is already taken!"));
        }
        let user = User {
            id: d.accounts.len() as i64 + 100,
            username: username.into(),
            email: email.into(),
            role,
        };
        let session = Session::new(user, format!("tok-{username}"));
        d.accounts.push((password.into(), session.clone()));
        Ok(session)
    }

    fn list_all(&self) -> Result<Vec<Listing>, ApiError> {
        let mut d = self.data.lock();
        d.calls.push("list_all");
        if d.fail_reads {
            return Err(ApiError::failed(Some(500), "database unavailable"));
        }
        Ok(d.listings.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Listing, ApiError> {
        let mut d = self.data.lock();
        d.calls.push("get_by_id");
        d.listings
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    fn create(&self, listing: &NewListing) -> Result<Listing, ApiError> {
        let mut d = self.data.lock();
        d.calls.push("create");
        let id = d.listings.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let created = Listing {
            id,
            title: listing.title.clone(),
            address: listing.address.clone(),
            price: listing.price,
            distance_from_university: listing.distance_from_university,
            amenities: listing.amenities.clone(),
            photos: listing.photos.clone(),
            contact_email: listing.contact_email.clone(),
            contact_phone: listing.contact_phone.clone(),
            broker_id: listing.broker_id,
        };
        d.listings.push(created.clone());
        Ok(created)
    }

    fn update(&self, id: i64, listing: &NewListing) -> Result<Listing, ApiError> {
        let mut d = self.data.lock();
        d.calls.push("update");
        let existing = d
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(not_found)?;
        if existing.broker_id != listing.broker_id {
            return Err(ApiError::failed(Some(403), "Forbidden"));
        }
        existing.title = listing.title.clone();
        existing.address = listing.address.clone();
        existing.price = listing.price;
        existing.distance_from_university = listing.distance_from_university;
        existing.amenities = listing.amenities.clone();
        existing.photos = listing.photos.clone();
        existing.contact_email = listing.contact_email.clone();
        existing.contact_phone = listing.contact_phone.clone();
        Ok(existing.clone())
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut d = self.data.lock();
        d.calls.push("delete");
        let before = d.listings.len();
        d.listings.retain(|l| l.id != id);
        if d.listings.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    fn list_by_broker(&self, broker_id: i64) -> Result<Vec<Listing>, ApiError> {
        let mut d = self.data.lock();
        d.calls.push("list_by_broker");
        if d.fail_reads {
            return Err(ApiError::failed(Some(500), "database unavailable"));
        }
        Ok(d
            .listings
            .iter()
            .filter(|l| l.broker_id == broker_id)
            .cloned()
            .collect())
    }
}
