//! Bootstrap listings present without any user action
//!
//! The seed set is read-only: the inventory store prepends it to every
//! listing query and never writes it back to storage.

use crate::models::{Category, Period, Space};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed seed dataset, in display order
pub fn spaces() -> Vec<Space> {
    vec![
        Space {
            id: "1".to_string(),
            owner_id: Some("owner_1".to_string()),
            title: "Skyline Executive Suite".to_string(),
            category: Category::from("Private Cabin / Private Office"),
            price: 12_000.0,
            period: Period::Hour,
            location: "Bandra Kurla Complex, Mumbai".to_string(),
            address: "101 Tech Plaza, Suite 4500, BKC, Mumbai, MH 400051".to_string(),
            description: "A premium corner office with panoramic views of the city skyline. \
                Features ergonomic Herman Miller furniture, state-of-the-art teleconferencing \
                equipment, and a private breakout area. Perfect for high-stakes board meetings \
                and client presentations."
                .to_string(),
            amenities: strings(&[
                "High-Speed WiFi",
                "Video Conferencing",
                "Chai/Coffee Bar",
                "Concierge",
                "Soundproof",
            ]),
            image_url: "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1497366811353-6870744d04b2?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1000&auto=format&fit=crop",
            ]),
            owner_name: "Priya Sharma".to_string(),
            owner_phone: "919876543210".to_string(),
            owner_email: "priya.sharma@prestige.com".to_string(),
            sq_ft: 850,
            capacity: 12,
            latitude: Some(19.0674),
            longitude: Some(72.8681),
            views: Some(1245),
            created_at: None,
            distance: None,
        },
        Space {
            id: "2".to_string(),
            owner_id: Some("owner_2".to_string()),
            title: "The Industrial Loft Event Hall".to_string(),
            category: Category::from("Event Spaces"),
            price: 85_000.0,
            period: Period::Day,
            location: "Indiranagar, Bangalore".to_string(),
            address: "45 Fabric Row, Floor 2, Indiranagar, KA 560038".to_string(),
            description: "Expansive converted warehouse space featuring exposed brick walls, \
                high timber ceilings, and polished concrete floors. Natural light floods in \
                through floor-to-ceiling industrial windows. Ideal for product launches, art \
                galleries, and corporate mixers."
                .to_string(),
            amenities: strings(&[
                "Catering Kitchen",
                "Projector System",
                "Valet Parking",
                "Wheelchair Access",
                "Custom Lighting",
            ]),
            image_url: "https://images.unsplash.com/photo-1519167758481-83f550bb49b3?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1519167758481-83f550bb49b3?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1519750157634-b6d493a0f77c?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?q=80&w=1000&auto=format&fit=crop",
            ]),
            owner_name: "Rahul Verma".to_string(),
            owner_phone: "919988776655".to_string(),
            owner_email: "rahul@creativevenues.io".to_string(),
            sq_ft: 2500,
            capacity: 150,
            latitude: Some(12.9716),
            longitude: Some(77.6412),
            views: Some(3420),
            created_at: None,
            distance: None,
        },
        Space {
            id: "3".to_string(),
            owner_id: Some("owner_3".to_string()),
            title: "Creator Studio B".to_string(),
            category: Category::from("Creator / Studio Rooms"),
            price: 5_000.0,
            period: Period::Hour,
            location: "Hauz Khas, Delhi".to_string(),
            address: "88 Creative Blvd, Studio B, Hauz Khas Village, New Delhi 110016".to_string(),
            description: "A pristine white cyc wall studio designed for professional \
                photography and videography. Includes Profoto lighting gear, grip equipment, \
                and a dedicated makeup/changing station. The acoustic treatment makes it \
                suitable for audio recording as well."
                .to_string(),
            amenities: strings(&[
                "Cyc Wall",
                "Lighting Gear",
                "Green Screen",
                "Makeup Station",
                "Bluetooth Audio",
            ]),
            image_url: "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1533090161767-e6ffed986c88?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=1000&auto=format&fit=crop",
            ]),
            owner_name: "Anjali Desai".to_string(),
            owner_phone: "918877665544".to_string(),
            owner_email: "anjali@studios.net".to_string(),
            sq_ft: 600,
            capacity: 8,
            latitude: Some(28.5494),
            longitude: Some(77.1942),
            views: Some(890),
            created_at: None,
            distance: None,
        },
        Space {
            id: "4".to_string(),
            owner_id: Some("owner_4".to_string()),
            title: "StartUp Flexi Zone".to_string(),
            category: Category::from("Hot Desk"),
            price: 8_000.0,
            period: Period::Month,
            location: "Jubilee Hills, Hyderabad".to_string(),
            address: "202 Fashion Ave, Ground Floor, Jubilee Hills, TS 500033".to_string(),
            description: "Vibrant coworking area with flexible seating options. Perfect for \
                freelancers and early-stage startups. Includes access to community events, \
                high-speed internet, and unlimited chai."
                .to_string(),
            amenities: strings(&[
                "High-Speed WiFi",
                "Community Events",
                "Unlimited Chai",
                "Power Backup",
                "Printer Access",
            ]),
            image_url: "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1497215728101-856f4ea42174?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1504384308090-c54be3853247?q=80&w=1000&auto=format&fit=crop",
            ]),
            owner_name: "Vikram Singh".to_string(),
            owner_phone: "917766554433".to_string(),
            owner_email: "vikram.s@cowork.com".to_string(),
            sq_ft: 400,
            capacity: 20,
            latitude: Some(17.4326),
            longitude: Some(78.4071),
            views: Some(1560),
            created_at: None,
            distance: None,
        },
        Space {
            id: "5".to_string(),
            owner_id: Some("owner_1".to_string()),
            title: "Blue Room Conference Hall".to_string(),
            category: Category::from("Conference / Training Rooms"),
            price: 3_000.0,
            period: Period::Hour,
            location: "Cyber City, Gurugram".to_string(),
            address: "Building 10, Tower A, Cyber City, HR 122002".to_string(),
            description: "Fully equipped training room with projector, whiteboard, and modular \
                seating. Ideal for workshops, corporate training sessions, and large team \
                meetings."
                .to_string(),
            amenities: strings(&[
                "Projector",
                "Whiteboard",
                "Modular Seating",
                "Catering Available",
                "AC",
            ]),
            image_url: "https://images.unsplash.com/photo-1517502884422-41e157d258b4?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1517502884422-41e157d258b4?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1604328698692-f76ea9498e76?q=80&w=1000&auto=format&fit=crop",
            ]),
            owner_name: "Priya Sharma".to_string(),
            owner_phone: "919876543210".to_string(),
            owner_email: "priya@techpark.com".to_string(),
            sq_ft: 1000,
            capacity: 30,
            latitude: Some(28.4950),
            longitude: Some(77.0895),
            views: Some(450),
            created_at: None,
            distance: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::assert_space_invariants;

    #[test]
    fn test_seed_ids_unique_and_short() {
        let spaces = spaces();
        let mut ids: Vec<_> = spaces.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), spaces.len());
        assert!(spaces.iter().all(|s| s.id.len() <= 5));
    }

    #[test]
    fn test_seed_spaces_are_consistent() {
        for space in spaces() {
            assert_space_invariants(&space);
            assert!(space.is_seed());
            assert!(space.category.is_known());
        }
    }
}
