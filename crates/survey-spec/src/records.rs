//! Inventory rows owned by the hosted backend.
//!
//! Only transient copies live here: payload rules applied before a create or
//! update, newest-first ordering for listings, and the object path/URL scheme
//! used for product images.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const PRODUCT_BUCKET: &str = "products";
pub const PRODUCT_IMAGE_DIR: &str = "product-images";

static PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").ok());
static REFERRAL_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").ok());

const OBJECT_ID_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";
const OBJECT_ID_LEN: usize = 21;

/// Field-level problem with a record payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationPayload {
    pub business_name: String,
    pub contact_number: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(flatten)]
    pub details: LocationPayload,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub barcode: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub barcode: String,
    pub size: String,
    /// The backend stores an empty string when no image was uploaded.
    #[serde(default)]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn image_url(&self) -> Option<&str> {
        Some(self.image_url.as_str()).filter(|url| !url.trim().is_empty())
    }
}

/// Rows that carry a backend creation timestamp.
pub trait Created {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Created for Location {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Created for Product {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Orders rows the way listings show them: most recently created first.
pub fn sort_newest_first<T: Created>(rows: &mut [T]) {
    rows.sort_by_key(|row| std::cmp::Reverse(row.created_at()));
}

pub fn validate_location(payload: &LocationPayload) -> Vec<RecordError> {
    let mut errors = Vec::new();
    min_chars(
        &mut errors,
        "business_name",
        &payload.business_name,
        2,
        "Business name is required",
        "Business name must be at least 2 characters",
    );

    let contact = payload.contact_number.trim();
    if contact.is_empty() {
        errors.push(error("contact_number", "Contact number is required"));
    } else if !matches(&PHONE, contact) {
        errors.push(error("contact_number", "Invalid phone number format"));
    }

    min_chars(
        &mut errors,
        "address",
        &payload.address,
        5,
        "Address is required",
        "Address must be at least 5 characters",
    );
    min_chars(
        &mut errors,
        "city",
        &payload.city,
        2,
        "City is required",
        "City must be at least 2 characters",
    );
    required(&mut errors, "country", &payload.country, "Country is required");

    if let Some(code) = payload.referral_code.as_deref()
        && !code.is_empty()
    {
        if !matches(&REFERRAL_CODE, code) {
            errors.push(error(
                "referral_code",
                "Referral code must be alphanumeric and up to 20 characters",
            ));
        } else if code.chars().count() > 20 {
            errors.push(error(
                "referral_code",
                "Referral code must not exceed 20 characters",
            ));
        }
    }

    required(&mut errors, "latitude", &payload.latitude, "Latitude is required");
    required(
        &mut errors,
        "longitude",
        &payload.longitude,
        "Longitude is required",
    );
    errors
}

pub fn validate_product(payload: &ProductPayload) -> Vec<RecordError> {
    let mut errors = Vec::new();
    min_chars(
        &mut errors,
        "name",
        &payload.name,
        2,
        "Product name is required",
        "Product name must be at least 2 characters",
    );
    min_chars(
        &mut errors,
        "barcode",
        &payload.barcode,
        3,
        "Barcode is required",
        "Barcode must be at least 3 characters",
    );
    required(&mut errors, "size", &payload.size, "Size is required");
    errors
}

/// Storage object path for an uploaded product image, keeping the file's
/// extension and replacing its name with a random id.
pub fn product_image_path(file_name: &str) -> String {
    let mut rng = rand::thread_rng();
    let id: String = (0..OBJECT_ID_LEN)
        .map(|_| OBJECT_ID_ALPHABET[rng.gen_range(0..OBJECT_ID_ALPHABET.len())] as char)
        .collect();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{PRODUCT_IMAGE_DIR}/{id}.{ext}"),
        _ => format!("{PRODUCT_IMAGE_DIR}/{id}"),
    }
}

/// Public URL of an object in the product bucket.
pub fn public_image_url(storage_base: &str, object_path: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        storage_base.trim_end_matches('/'),
        PRODUCT_BUCKET,
        object_path.trim_start_matches('/')
    )
}

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(value))
}

fn error(field: &str, message: &str) -> RecordError {
    RecordError {
        field: field.into(),
        message: message.into(),
    }
}

fn required(errors: &mut Vec<RecordError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(error(field, message));
    }
}

fn min_chars(
    errors: &mut Vec<RecordError>,
    field: &str,
    value: &str,
    min: usize,
    missing: &str,
    too_short: &str,
) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(error(field, missing));
    } else if value.chars().count() < min {
        errors.push(error(field, too_short));
    }
}
