use crate::domain::Listing;
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;
use crate::search::SortKey;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 7] = [
    "Title",
    "Address",
    "Price (₹/month)",
    "Distance (km)",
    "Amenities",
    "Contact Email",
    "Contact Phone",
];

/// Download of the current search view, rows in display order.
pub fn export_listings_xlsx(listings: &[&Listing], sort: SortKey) -> ResultResp {
    let buffer = build_workbook(listings)?;
    xlsx_response(buffer, &format!("accommodations_by_{}.xlsx", sort.as_str()))
}

fn build_workbook(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &listing.title)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write title: {}", e)))?;

        worksheet
            .write_string(r, 1, &listing.address)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write address: {}", e)))?;

        worksheet
            .write_number(r, 2, listing.price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;

        worksheet
            .write_number(r, 3, listing.distance_from_university)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write distance: {}", e)))?;

        worksheet
            .write_string(r, 4, listing.amenities.join(", "))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write amenities: {}", e)))?;

        worksheet
            .write_string(r, 5, &listing.contact_email)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write email: {}", e)))?;

        worksheet
            .write_string(r, 6, &listing.contact_phone)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write phone: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
