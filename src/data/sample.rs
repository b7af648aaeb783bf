//! Seed data served by the sample client

use crate::state::{
    ActivityEntry, Donation, DonationStatus, IncomingDonation, IncomingStatus, Need, Ngo, Stat,
    SurplusItem, SurplusStatus, Urgency,
};
use chrono::{Duration, Utc};

pub fn donations() -> Vec<Donation> {
    let now = Utc::now();
    vec![
        Donation {
            id: "don-1".to_string(),
            item: "Fresh Vegetables".to_string(),
            quantity: "10 kg".to_string(),
            status: DonationStatus::Delivered,
            ngo: "Hope Foundation".to_string(),
            created_at: now - Duration::days(1),
        },
        Donation {
            id: "don-2".to_string(),
            item: "Canned Food".to_string(),
            quantity: "24 cans".to_string(),
            status: DonationStatus::InTransit,
            ngo: "Care Center".to_string(),
            created_at: now - Duration::days(2),
        },
        Donation {
            id: "don-3".to_string(),
            item: "Bread & Bakery".to_string(),
            quantity: "20 loaves".to_string(),
            status: DonationStatus::Pending,
            ngo: "Pending match".to_string(),
            created_at: now - Duration::days(2),
        },
    ]
}

pub fn ngos() -> Vec<Ngo> {
    vec![
        Ngo {
            id: "ngo-1".to_string(),
            name: "Hope Foundation".to_string(),
            needs: vec![
                "Vegetables".to_string(),
                "Rice".to_string(),
                "Cooking Oil".to_string(),
            ],
            distance_km: 2.3,
        },
        Ngo {
            id: "ngo-2".to_string(),
            name: "Care Center".to_string(),
            needs: vec!["Canned Food".to_string(), "Blankets".to_string()],
            distance_km: 3.5,
        },
        Ngo {
            id: "ngo-3".to_string(),
            name: "Sunrise Shelter".to_string(),
            needs: vec!["Fresh Fruits".to_string(), "Bread".to_string()],
            distance_km: 4.1,
        },
    ]
}

pub fn needs() -> Vec<Need> {
    vec![
        Need {
            id: "need-1".to_string(),
            item: "Rice & Grains".to_string(),
            quantity: "50 kg".to_string(),
            urgency: Urgency::High,
            fulfilled_pct: 30,
        },
        Need {
            id: "need-2".to_string(),
            item: "Cooking Oil".to_string(),
            quantity: "20 liters".to_string(),
            urgency: Urgency::Medium,
            fulfilled_pct: 50,
        },
        Need {
            id: "need-3".to_string(),
            item: "Fresh Vegetables".to_string(),
            quantity: "30 kg".to_string(),
            urgency: Urgency::High,
            fulfilled_pct: 20,
        },
    ]
}

pub fn incoming_donations() -> Vec<IncomingDonation> {
    vec![
        IncomingDonation {
            id: "in-1".to_string(),
            item: "Canned Food".to_string(),
            quantity: "24 cans".to_string(),
            donor: "Anonymous".to_string(),
            status: IncomingStatus::Pending,
            eta: "Today, 3:00 PM".to_string(),
        },
        IncomingDonation {
            id: "in-2".to_string(),
            item: "Bread".to_string(),
            quantity: "15 loaves".to_string(),
            donor: "Sunrise Bakery".to_string(),
            status: IncomingStatus::Accepted,
            eta: "Today, 5:00 PM".to_string(),
        },
        IncomingDonation {
            id: "in-3".to_string(),
            item: "Vegetables".to_string(),
            quantity: "10 kg".to_string(),
            donor: "John D.".to_string(),
            status: IncomingStatus::Received,
            eta: "Completed".to_string(),
        },
    ]
}

pub fn surplus_items() -> Vec<SurplusItem> {
    vec![
        SurplusItem {
            id: "sur-1".to_string(),
            item: "Prepared Meals".to_string(),
            quantity: "25 portions".to_string(),
            expires_in_hours: 2,
            status: SurplusStatus::Available,
        },
        SurplusItem {
            id: "sur-2".to_string(),
            item: "Fresh Bread".to_string(),
            quantity: "30 loaves".to_string(),
            expires_in_hours: 4,
            status: SurplusStatus::Claimed,
        },
        SurplusItem {
            id: "sur-3".to_string(),
            item: "Vegetable Curry".to_string(),
            quantity: "15 portions".to_string(),
            expires_in_hours: 3,
            status: SurplusStatus::PickedUp,
        },
    ]
}

pub fn activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: "act-1".to_string(),
            action: "Food picked up".to_string(),
            details: "20 portions by Hope Foundation".to_string(),
            time_ago: "1 hour ago".to_string(),
        },
        ActivityEntry {
            id: "act-2".to_string(),
            action: "New claim".to_string(),
            details: "Care Center claimed 15 bread loaves".to_string(),
            time_ago: "2 hours ago".to_string(),
        },
        ActivityEntry {
            id: "act-3".to_string(),
            action: "Food uploaded".to_string(),
            details: "30 fresh salads added".to_string(),
            time_ago: "3 hours ago".to_string(),
        },
    ]
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

pub fn donor_stats() -> Vec<Stat> {
    vec![
        stat("Total Donations", "23"),
        stat("Items Delivered", "156"),
        stat("NGOs Helped", "8"),
        stat("This Month", "5"),
    ]
}

pub fn ngo_stats() -> Vec<Stat> {
    vec![
        stat("Active Needs", "6"),
        stat("Donations Received", "124"),
        stat("Pending Pickups", "3"),
        stat("This Week", "+12"),
    ]
}

pub fn restaurant_stats() -> Vec<Stat> {
    vec![
        stat("Food Saved", "245 kg"),
        stat("Donations Made", "67"),
        stat("Active Listings", "3"),
        stat("NGOs Helped", "12"),
    ]
}
