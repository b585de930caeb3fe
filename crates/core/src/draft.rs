//! Dashboard form input: owner sign-up and new listings
//!
//! Drafts carry raw form values. Converting a draft validates it and fills
//! in the defaults the listing form applies.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Category, Coordinates, Owner, Period, Space};

/// Stock photo used when a listing is created without an image
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=800";

/// Sign-up form values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnerDraft {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
}

impl OwnerDraft {
    pub fn into_owner(self) -> Result<Owner> {
        let fields = [&self.first_name, &self.last_name, &self.mobile, &self.email];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(Error::Validation("All fields are required".to_string()));
        }

        Ok(Owner::new(
            self.first_name.trim().to_string(),
            self.last_name.trim().to_string(),
            self.mobile.trim().to_string(),
            self.email.trim().to_string(),
        ))
    }
}

/// "Add space" form values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpaceDraft {
    pub title: String,
    pub category: Option<Category>,
    pub price: f64,
    pub period: Period,
    pub location: String,
    pub address: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub sq_ft: u32,
    pub capacity: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl SpaceDraft {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
            ..Default::default()
        }
    }

    /// Add an amenity label; blank labels are ignored
    pub fn add_amenity(&mut self, label: &str) {
        let label = label.trim();
        if !label.is_empty() {
            self.amenities.push(label.to_string());
        }
    }

    pub fn set_coordinates(&mut self, coords: Coordinates) {
        self.latitude = Some(coords.latitude);
        self.longitude = Some(coords.longitude);
    }

    /// Validate and build a listing owned by `owner`, copying the owner's
    /// contact details onto it
    pub fn into_space(self, owner: &Owner) -> Result<Space> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }

        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(Error::Validation(format!(
                "Price must be positive, got {}",
                self.price
            )));
        }

        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if !Coordinates::new(lat, lon).is_valid() => {
                return Err(Error::Validation(format!(
                    "Coordinates out of range: {},{}",
                    lat, lon
                )));
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(Error::Validation(
                    "Latitude and longitude must be given together".to_string(),
                ));
            }
            _ => {}
        }

        let image_url = self
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        let gallery = if self.gallery.is_empty() {
            vec![DEFAULT_IMAGE_URL.to_string()]
        } else {
            self.gallery
        };

        Ok(Space {
            id: Uuid::new_v4().to_string(),
            owner_id: Some(owner.id.clone()),
            title,
            category: self.category.unwrap_or_default(),
            price: self.price,
            period: self.period,
            location: self.location,
            address: self.address,
            description: self.description,
            amenities: self
                .amenities
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            image_url,
            gallery,
            owner_name: owner.display_name(),
            owner_phone: owner.mobile.clone(),
            owner_email: owner.email.clone(),
            sq_ft: self.sq_ft,
            capacity: self.capacity,
            latitude: self.latitude,
            longitude: self.longitude,
            views: Some(0),
            created_at: Some(Utc::now()),
            distance: None,
        })
    }
}

/// Inline an uploaded image as a `data:` URL
pub fn image_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Guess an image MIME type from a file extension
pub fn image_mime_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        Owner::new(
            "Farah".into(),
            "Khan".into(),
            "9822200000".into(),
            "farah@example.com".into(),
        )
    }

    #[test]
    fn test_owner_draft_requires_all_fields() {
        let draft = OwnerDraft {
            first_name: "Farah".into(),
            last_name: "Khan".into(),
            mobile: "  ".into(),
            email: "farah@example.com".into(),
        };
        let err = draft.into_owner().unwrap_err();
        assert!(matches!(err, Error::Validation(msg) if msg == "All fields are required"));
    }

    #[test]
    fn test_space_draft_defaults() {
        let owner = owner();
        let mut draft = SpaceDraft::new("  Corner Desk  ", 4500.0);
        draft.add_amenity(" WiFi ");
        draft.add_amenity("   ");

        let space = draft.into_space(&owner).unwrap();
        assert_eq!(space.title, "Corner Desk");
        assert_eq!(space.category.as_str(), "Hot Desk");
        assert_eq!(space.period, Period::Month);
        assert_eq!(space.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(space.gallery, vec![DEFAULT_IMAGE_URL.to_string()]);
        assert_eq!(space.amenities, vec!["WiFi".to_string()]);
        assert_eq!(space.views, Some(0));
        assert!(space.created_at.is_some());
        assert!(uuid::Uuid::parse_str(&space.id).is_ok());
    }

    #[test]
    fn test_space_draft_copies_owner_contact() {
        let owner = owner();
        let space = SpaceDraft::new("Desk", 100.0).into_space(&owner).unwrap();
        assert_eq!(space.owner_id.as_deref(), Some(owner.id.as_str()));
        assert_eq!(space.owner_name, "Farah Khan");
        assert_eq!(space.owner_phone, "9822200000");
        assert_eq!(space.owner_email, "farah@example.com");
    }

    #[test]
    fn test_space_draft_rejects_bad_input() {
        let owner = owner();
        assert!(SpaceDraft::new(" ", 100.0).into_space(&owner).is_err());
        assert!(SpaceDraft::new("Desk", 0.0).into_space(&owner).is_err());
        assert!(SpaceDraft::new("Desk", f64::NAN).into_space(&owner).is_err());

        let mut half = SpaceDraft::new("Desk", 100.0);
        half.latitude = Some(12.0);
        assert!(half.into_space(&owner).is_err());

        let mut out_of_range = SpaceDraft::new("Desk", 100.0);
        out_of_range.set_coordinates(Coordinates::new(12.0, 200.0));
        assert!(out_of_range.into_space(&owner).is_err());
    }

    #[test]
    fn test_image_data_url() {
        assert_eq!(image_data_url(b"abc", "image/png"), "data:image/png;base64,YWJj");
        assert_eq!(image_mime_for("JPG"), "image/jpeg");
        assert_eq!(image_mime_for("webp"), "image/webp");
    }
}
