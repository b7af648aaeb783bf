//! Application state definitions

use crate::state::forms::FormState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Auth,
    DonorDashboard,
    NewDonation,
    NgoDashboard,
    NewNeed,
    RestaurantDashboard,
    UploadSurplus,
    NotFound,
}

impl View {
    /// Form views are skipped when walking back through history
    pub fn is_form_view(&self) -> bool {
        matches!(
            self,
            View::Auth | View::NewDonation | View::NewNeed | View::UploadSurplus
        )
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub auth_mode: Option<AuthMode>,
    pub role: Option<Role>,
}

/// Whether the auth flow signs an existing user in or registers a new one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// The three user roles the platform connects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Donor,
    Ngo,
    Restaurant,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[Role::Donor, Role::Ngo, Role::Restaurant]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Ngo => "NGO",
            Role::Restaurant => "Restaurant",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Donor => "Donate food and essentials to those in need",
            Role::Ngo => "Receive donations for your community",
            Role::Restaurant => "Share surplus food before it goes to waste",
        }
    }

    /// The dashboard a successful sign-in for this role lands on
    pub fn dashboard(&self) -> View {
        match self {
            Role::Donor => View::DonorDashboard,
            Role::Ngo => View::NgoDashboard,
            Role::Restaurant => View::RestaurantDashboard,
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "donor" => Some(Role::Donor),
            "ngo" => Some(Role::Ngo),
            "restaurant" => Some(Role::Restaurant),
            _ => None,
        }
    }
}

/// Resolve a client-side route path to a view.
///
/// Mirrors the route table of the web frontend: `/`, `/auth` (with `mode` and
/// `role` query parameters), the three dashboards, the three creation flows,
/// and a catch-all that lands on NotFound.
pub fn parse_route(route: &str) -> (View, ViewParams) {
    let (path, query) = match route.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (route, None),
    };

    let mut params = ViewParams::default();
    if let Some(query) = query {
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("mode", "signup")) => params.auth_mode = Some(AuthMode::Signup),
                Some(("mode", "login")) => params.auth_mode = Some(AuthMode::Login),
                Some(("role", value)) => params.role = Role::parse(value),
                _ => {}
            }
        }
    }

    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    let view = match path {
        "/" => View::Landing,
        "/auth" => View::Auth,
        "/donor" => View::DonorDashboard,
        "/donor/new-donation" => View::NewDonation,
        "/ngo" => View::NgoDashboard,
        "/ngo/new-need" => View::NewNeed,
        "/restaurant" => View::RestaurantDashboard,
        "/restaurant/upload" => View::UploadSurplus,
        _ => View::NotFound,
    };

    (view, params)
}

/// Urgency level of an NGO need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub fn all() -> &'static [Urgency] {
        &[Urgency::Low, Urgency::Medium, Urgency::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "Urgent",
        }
    }

    pub fn timeframe(&self) -> &'static str {
        match self {
            Urgency::Low => "Within the next week",
            Urgency::Medium => "Within 2-3 days",
            Urgency::High => "Needed immediately",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Urgency> {
        match s {
            "low" => Some(Urgency::Low),
            "medium" => Some(Urgency::Medium),
            "high" => Some(Urgency::High),
            _ => None,
        }
    }
}

/// Lifecycle of a donor's donation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Pending,
    InTransit,
    Delivered,
}

impl DonationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "Pending",
            DonationStatus::InTransit => "In Transit",
            DonationStatus::Delivered => "Delivered",
        }
    }
}

/// Lifecycle of a donation arriving at an NGO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomingStatus {
    Pending,
    Accepted,
    Received,
}

impl IncomingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IncomingStatus::Pending => "Pending",
            IncomingStatus::Accepted => "Accepted",
            IncomingStatus::Received => "Received",
        }
    }
}

/// Lifecycle of a restaurant surplus listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurplusStatus {
    Available,
    Claimed,
    PickedUp,
}

impl SurplusStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SurplusStatus::Available => "Available",
            SurplusStatus::Claimed => "Claimed",
            SurplusStatus::PickedUp => "Picked Up",
        }
    }
}

/// A donation made by the signed-in donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub item: String,
    pub quantity: String,
    pub status: DonationStatus,
    pub ngo: String,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Short date shown in the recent-donations list
    pub fn date_label(&self) -> String {
        self.created_at.format("%b %-d").to_string()
    }
}

/// An NGO discoverable from the donor dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ngo {
    pub id: String,
    pub name: String,
    pub needs: Vec<String>,
    pub distance_km: f32,
}

impl Ngo {
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }
}

/// A need posted by the signed-in NGO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Need {
    pub id: String,
    pub item: String,
    pub quantity: String,
    pub urgency: Urgency,
    /// Percentage of the quantity already covered by matched donations
    pub fulfilled_pct: u8,
}

/// A donation inbound to the signed-in NGO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingDonation {
    pub id: String,
    pub item: String,
    pub quantity: String,
    pub donor: String,
    pub status: IncomingStatus,
    pub eta: String,
}

/// A surplus listing by the signed-in restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurplusItem {
    pub id: String,
    pub item: String,
    pub quantity: String,
    pub expires_in_hours: u32,
    pub status: SurplusStatus,
}

impl SurplusItem {
    /// Listings expiring within two hours get the urgent highlight
    pub fn is_urgent(&self) -> bool {
        self.expires_in_hours <= 2
    }

    pub fn expires_label(&self) -> String {
        if self.expires_in_hours == 1 {
            "Expires in 1 hour".to_string()
        } else {
            format!("Expires in {} hours", self.expires_in_hours)
        }
    }
}

/// An entry in the restaurant activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub action: String,
    pub details: String,
    pub time_ago: String,
}

/// One dashboard stat card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// A transient confirmation shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Focus state for the donor dashboard (donation list vs NGO search)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DonorFocus {
    #[default]
    Donations,
    NgoSearch,
}

impl DonorFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Donations => Self::NgoSearch,
            Self::NgoSearch => Self::Donations,
        };
    }
}

/// Focus state for the NGO dashboard (needs list vs incoming donations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NgoFocus {
    #[default]
    Needs,
    Incoming,
}

impl NgoFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Needs => Self::Incoming,
            Self::Incoming => Self::Needs,
        };
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Session
    pub signed_in_role: Option<Role>,

    // Data
    pub donations: Vec<Donation>,
    pub ngos: Vec<Ngo>,
    pub needs: Vec<Need>,
    pub incoming: Vec<IncomingDonation>,
    pub surplus: Vec<SurplusItem>,
    pub activity: Vec<ActivityEntry>,
    pub donor_stats: Vec<Stat>,
    pub ngo_stats: Vec<Stat>,
    pub restaurant_stats: Vec<Stat>,

    // Selection
    pub selected_index: usize,

    // Dashboard focus
    pub donor_focus: DonorFocus,
    pub ngo_focus: NgoFocus,
    pub ngo_search: String,

    // Forms
    pub form: FormState,

    // Goto prompt buffer (Some while the prompt is open)
    pub goto_input: Option<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// NGOs matching the donor search query by name or advertised need
    pub fn filtered_ngos(&self) -> Vec<&Ngo> {
        let query = self.ngo_search.to_lowercase();
        self.ngos
            .iter()
            .filter(|ngo| {
                query.is_empty()
                    || ngo.name.to_lowercase().contains(&query)
                    || ngo
                        .needs
                        .iter()
                        .any(|need| need.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Drop any in-progress form state
    pub fn clear_form(&mut self) {
        self.form = FormState::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod routes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_known_paths_resolve() {
            assert_eq!(parse_route("/").0, View::Landing);
            assert_eq!(parse_route("/auth").0, View::Auth);
            assert_eq!(parse_route("/donor").0, View::DonorDashboard);
            assert_eq!(parse_route("/donor/new-donation").0, View::NewDonation);
            assert_eq!(parse_route("/ngo").0, View::NgoDashboard);
            assert_eq!(parse_route("/ngo/new-need").0, View::NewNeed);
            assert_eq!(parse_route("/restaurant").0, View::RestaurantDashboard);
            assert_eq!(parse_route("/restaurant/upload").0, View::UploadSurplus);
        }

        #[test]
        fn test_unknown_path_is_not_found() {
            assert_eq!(parse_route("/admin").0, View::NotFound);
            assert_eq!(parse_route("/donor/history").0, View::NotFound);
            assert_eq!(parse_route("donor").0, View::NotFound);
        }

        #[test]
        fn test_trailing_slash_is_tolerated() {
            assert_eq!(parse_route("/donor/").0, View::DonorDashboard);
        }

        #[test]
        fn test_auth_query_params() {
            let (view, params) = parse_route("/auth?mode=signup&role=restaurant");
            assert_eq!(view, View::Auth);
            assert_eq!(params.auth_mode, Some(AuthMode::Signup));
            assert_eq!(params.role, Some(Role::Restaurant));
        }

        #[test]
        fn test_bad_query_values_are_ignored() {
            let (_, params) = parse_route("/auth?mode=admin&role=alien");
            assert_eq!(params.auth_mode, None);
            assert_eq!(params.role, None);
        }
    }

    mod roles {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_dashboard_per_role() {
            assert_eq!(Role::Donor.dashboard(), View::DonorDashboard);
            assert_eq!(Role::Ngo.dashboard(), View::NgoDashboard);
            assert_eq!(Role::Restaurant.dashboard(), View::RestaurantDashboard);
        }

        #[test]
        fn test_parse_accepts_lowercase_ids_only() {
            for role in Role::all() {
                assert!(!role.title().is_empty());
                assert!(!role.description().is_empty());
            }
            assert_eq!(Role::parse("ngo"), Some(Role::Ngo));
            assert_eq!(Role::parse("NGO"), None);
        }
    }

    mod records {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_surplus_urgency_threshold() {
            let mut item = SurplusItem {
                id: "s1".to_string(),
                item: "Prepared Meals".to_string(),
                quantity: "25 portions".to_string(),
                expires_in_hours: 2,
                status: SurplusStatus::Available,
            };
            assert!(item.is_urgent());
            item.expires_in_hours = 3;
            assert!(!item.is_urgent());
        }

        #[test]
        fn test_expiry_label_pluralization() {
            let item = SurplusItem {
                id: "s1".to_string(),
                item: "Bread".to_string(),
                quantity: "30 loaves".to_string(),
                expires_in_hours: 1,
                status: SurplusStatus::Available,
            };
            assert_eq!(item.expires_label(), "Expires in 1 hour");
        }

        #[test]
        fn test_ngo_distance_label() {
            let ngo = Ngo {
                id: "n1".to_string(),
                name: "Hope Foundation".to_string(),
                needs: vec!["Rice".to_string()],
                distance_km: 2.3,
            };
            assert_eq!(ngo.distance_label(), "2.3 km");
        }
    }

    mod filtering {
        use super::*;
        use pretty_assertions::assert_eq;

        fn state_with_ngos() -> AppState {
            AppState {
                ngos: vec![
                    Ngo {
                        id: "n1".to_string(),
                        name: "Hope Foundation".to_string(),
                        needs: vec!["Vegetables".to_string(), "Rice".to_string()],
                        distance_km: 2.3,
                    },
                    Ngo {
                        id: "n2".to_string(),
                        name: "Care Center".to_string(),
                        needs: vec!["Canned Food".to_string(), "Blankets".to_string()],
                        distance_km: 3.5,
                    },
                ],
                ..Default::default()
            }
        }

        #[test]
        fn test_empty_query_returns_all() {
            let state = state_with_ngos();
            assert_eq!(state.filtered_ngos().len(), 2);
        }

        #[test]
        fn test_query_matches_name_case_insensitively() {
            let mut state = state_with_ngos();
            state.ngo_search = "hope".to_string();
            let hits = state.filtered_ngos();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].name, "Hope Foundation");
        }

        #[test]
        fn test_query_matches_needs() {
            let mut state = state_with_ngos();
            state.ngo_search = "blanket".to_string();
            let hits = state.filtered_ngos();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].name, "Care Center");
        }

        #[test]
        fn test_query_without_match_returns_empty() {
            let mut state = state_with_ngos();
            state.ngo_search = "pianos".to_string();
            assert!(state.filtered_ngos().is_empty());
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selection_stays_in_bounds() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
            state.move_selection_down(3);
            state.move_selection_down(3);
            state.move_selection_down(3);
            assert_eq!(state.selected_index, 2);
        }

        #[test]
        fn test_selection_noop_on_empty_list() {
            let mut state = AppState::default();
            state.move_selection_down(0);
            assert_eq!(state.selected_index, 0);
        }
    }
}
