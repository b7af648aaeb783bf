//! Form state management and form structs
//!
//! Each creation flow owns a form struct holding its fields and, for the
//! stepped flows, a linear step cursor. Step advancement is gated on the
//! current step's fields being filled; retreating is unconditional and never
//! touches field values.

use super::field::FormField;
use crate::catalog::{
    Category, ESSENTIALS_CATEGORIES, EXPIRY_WINDOWS, FOOD_CATEGORIES, NEED_CATEGORIES,
    SURPLUS_CATEGORIES,
};
use crate::state::{AuthMode, Role, Urgency};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Donation(DonationForm),
    Need(NeedForm),
    Surplus(SurplusForm),
    Auth(AuthForm),
}

/// Pick the next or previous id out of a closed option list, wrapping.
/// With nothing selected yet, any movement selects the first option.
fn cycle_option(options: &[&'static str], current: Option<&str>, forward: bool) -> &'static str {
    let Some(current) = current else {
        return options[0];
    };
    let Some(pos) = options.iter().position(|id| *id == current) else {
        return options[0];
    };
    let len = options.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    options[next]
}

fn category_ids(table: &'static [Category]) -> Vec<&'static str> {
    table.iter().map(|c| c.id).collect()
}

// ---------------------------------------------------------------------------
// Donation wizard (donor)
// ---------------------------------------------------------------------------

/// Steps of the donation wizard, strictly linear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DonationStep {
    #[default]
    ItemSelect,
    Details,
    Delivery,
}

impl DonationStep {
    pub const TOTAL: usize = 3;

    pub fn next(&self) -> Option<DonationStep> {
        match self {
            DonationStep::ItemSelect => Some(DonationStep::Details),
            DonationStep::Details => Some(DonationStep::Delivery),
            DonationStep::Delivery => None,
        }
    }

    pub fn prev(&self) -> Option<DonationStep> {
        match self {
            DonationStep::ItemSelect => None,
            DonationStep::Details => Some(DonationStep::ItemSelect),
            DonationStep::Delivery => Some(DonationStep::Details),
        }
    }

    /// One-based position for the progress header
    pub fn position(&self) -> usize {
        match self {
            DonationStep::ItemSelect => 1,
            DonationStep::Details => 2,
            DonationStep::Delivery => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DonationStep::ItemSelect => "What are you donating?",
            DonationStep::Details => "Donation Details",
            DonationStep::Delivery => "How should we collect?",
        }
    }
}

/// Three-step donation creation form
#[derive(Debug, Clone)]
pub struct DonationForm {
    pub step: DonationStep,
    pub item_type: FormField,
    pub category: FormField,
    pub quantity: FormField,
    pub description: FormField,
    pub delivery_method: FormField,
    pub address: FormField,
    pub preferred_date: FormField,
    pub preferred_time: FormField,
    pub active_field_index: usize,
}

impl DonationForm {
    pub fn new() -> Self {
        Self {
            step: DonationStep::ItemSelect,
            item_type: FormField::choice("type", "Donation Type"),
            category: FormField::choice("category", "Category"),
            quantity: FormField::text("quantity", "Quantity", "e.g., 10 kg, 20 items, 5 bags"),
            description: FormField::text(
                "description",
                "Description (Optional)",
                "Any additional details about your donation",
            ),
            delivery_method: FormField::choice("delivery_method", "Delivery Method"),
            address: FormField::text("address", "Address", "Enter your address"),
            preferred_date: FormField::text("preferred_date", "Preferred Date", "YYYY-MM-DD"),
            preferred_time: FormField::text("preferred_time", "Preferred Time", "HH:MM"),
            active_field_index: 0,
        }
    }

    /// Categories offered for the currently selected item type
    pub fn categories(&self) -> &'static [Category] {
        match self.item_type.selected() {
            Some("food") => FOOD_CATEGORIES,
            Some("essentials") => ESSENTIALS_CATEGORIES,
            _ => &[],
        }
    }

    /// Select an item type, resetting the category when the type changes
    pub fn select_item_type(&mut self, id: &str) {
        if self.item_type.selected() != Some(id) {
            self.item_type.select(id);
            self.category.clear();
        }
    }

    /// Cycle the active choice field of the current step
    pub fn cycle_choice(&mut self, forward: bool) {
        match (self.step, self.active_field_index) {
            (DonationStep::ItemSelect, 0) => {
                let next = cycle_option(&["food", "essentials"], self.item_type.selected(), forward);
                self.select_item_type(next);
            }
            (DonationStep::ItemSelect, 1) => {
                let ids = category_ids(self.categories());
                if !ids.is_empty() {
                    let next = cycle_option(&ids, self.category.selected(), forward);
                    self.category.select(next);
                }
            }
            (DonationStep::Delivery, 0) => {
                let next = cycle_option(
                    &["pickup", "dropoff"],
                    self.delivery_method.selected(),
                    forward,
                );
                self.delivery_method.select(next);
            }
            _ => {}
        }
    }

    /// Validation gate for the current step: all required fields filled
    pub fn step_complete(&self) -> bool {
        match self.step {
            DonationStep::ItemSelect => self.item_type.is_filled() && self.category.is_filled(),
            DonationStep::Details => self.quantity.is_filled(),
            DonationStep::Delivery => {
                self.delivery_method.is_filled() && self.address.is_filled()
            }
        }
    }

    /// Move to the next step, gated on the current step being complete.
    /// No-op on the final step or when the gate fails.
    pub fn advance(&mut self) {
        if !self.step_complete() {
            return;
        }
        if let Some(next) = self.step.next() {
            self.step = next;
            self.active_field_index = 0;
        }
    }

    /// Move to the previous step unconditionally. Field values are kept.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            self.active_field_index = 0;
        }
    }

    /// Submit is available on the final step once its gate holds
    pub fn can_submit(&self) -> bool {
        self.step == DonationStep::Delivery && self.step_complete()
    }
}

impl Default for DonationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for DonationForm {
    fn field_count(&self) -> usize {
        match self.step {
            DonationStep::ItemSelect => 2, // type, category
            DonationStep::Details => 2,    // quantity, description
            DonationStep::Delivery => 4,   // method, address, date, time
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match (self.step, self.active_field_index) {
            (DonationStep::ItemSelect, 0) => &mut self.item_type,
            (DonationStep::ItemSelect, _) => &mut self.category,
            (DonationStep::Details, 0) => &mut self.quantity,
            (DonationStep::Details, _) => &mut self.description,
            (DonationStep::Delivery, 0) => &mut self.delivery_method,
            (DonationStep::Delivery, 1) => &mut self.address,
            (DonationStep::Delivery, 2) => &mut self.preferred_date,
            (DonationStep::Delivery, _) => &mut self.preferred_time,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match (self.step, index) {
            (DonationStep::ItemSelect, 0) => Some(&self.item_type),
            (DonationStep::ItemSelect, 1) => Some(&self.category),
            (DonationStep::Details, 0) => Some(&self.quantity),
            (DonationStep::Details, 1) => Some(&self.description),
            (DonationStep::Delivery, 0) => Some(&self.delivery_method),
            (DonationStep::Delivery, 1) => Some(&self.address),
            (DonationStep::Delivery, 2) => Some(&self.preferred_date),
            (DonationStep::Delivery, 3) => Some(&self.preferred_time),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Need form (NGO)
// ---------------------------------------------------------------------------

/// Single-page need posting form
#[derive(Debug, Clone)]
pub struct NeedForm {
    pub category: FormField,
    pub quantity: FormField,
    pub urgency: FormField,
    pub description: FormField,
    pub active_field_index: usize,
}

impl NeedForm {
    pub fn new() -> Self {
        Self {
            category: FormField::choice("category", "What do you need?"),
            quantity: FormField::text(
                "quantity",
                "Quantity Needed",
                "e.g., 50 kg, 100 items, 20 bags",
            ),
            // Urgency defaults to medium, matching the posting form default
            urgency: FormField::choice_with_value("urgency", "How urgent is this need?", "medium"),
            description: FormField::text(
                "description",
                "Additional Details (Optional)",
                "Any specific requirements or preferences",
            ),
            active_field_index: 0,
        }
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        match self.active_field_index {
            0 => {
                let ids = category_ids(NEED_CATEGORIES);
                let next = cycle_option(&ids, self.category.selected(), forward);
                self.category.select(next);
            }
            2 => {
                let ids: Vec<&'static str> = Urgency::all().iter().map(|u| u.id()).collect();
                let next = cycle_option(&ids, self.urgency.selected(), forward);
                self.urgency.select(next);
            }
            _ => {}
        }
    }

    /// The "Post Need" gate
    pub fn can_submit(&self) -> bool {
        self.category.is_filled() && self.quantity.is_filled()
    }
}

impl Default for NeedForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NeedForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.category,
            1 => &mut self.quantity,
            2 => &mut self.urgency,
            _ => &mut self.description,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.category),
            1 => Some(&self.quantity),
            2 => Some(&self.urgency),
            3 => Some(&self.description),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Surplus upload form (restaurant)
// ---------------------------------------------------------------------------

/// Single-page surplus upload form
#[derive(Debug, Clone)]
pub struct SurplusForm {
    pub category: FormField,
    pub quantity: FormField,
    pub expires_in: FormField,
    pub description: FormField,
    pub pickup_instructions: FormField,
    pub active_field_index: usize,
}

impl SurplusForm {
    pub fn new() -> Self {
        Self {
            category: FormField::choice("category", "What type of food?"),
            quantity: FormField::text(
                "quantity",
                "Quantity",
                "e.g., 25 portions, 10 kg, 30 items",
            ),
            expires_in: FormField::choice("expires_in", "Best consumed within"),
            description: FormField::text(
                "description",
                "Description (Optional)",
                "e.g., Vegetarian curry with rice, freshly prepared",
            ),
            pickup_instructions: FormField::text(
                "pickup_instructions",
                "Pickup Instructions (Optional)",
                "e.g., Available at back door, ask for kitchen manager",
            ),
            active_field_index: 0,
        }
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        match self.active_field_index {
            0 => {
                let ids = category_ids(SURPLUS_CATEGORIES);
                let next = cycle_option(&ids, self.category.selected(), forward);
                self.category.select(next);
            }
            2 => {
                let ids: Vec<&'static str> = EXPIRY_WINDOWS.iter().map(|w| w.id).collect();
                let next = cycle_option(&ids, self.expires_in.selected(), forward);
                self.expires_in.select(next);
            }
            _ => {}
        }
    }

    /// The "Upload & Notify NGOs" gate
    pub fn can_submit(&self) -> bool {
        self.category.is_filled() && self.quantity.is_filled() && self.expires_in.is_filled()
    }
}

impl Default for SurplusForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SurplusForm {
    fn field_count(&self) -> usize {
        5
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.category,
            1 => &mut self.quantity,
            2 => &mut self.expires_in,
            3 => &mut self.description,
            _ => &mut self.pickup_instructions,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.category),
            1 => Some(&self.quantity),
            2 => Some(&self.expires_in),
            3 => Some(&self.description),
            4 => Some(&self.pickup_instructions),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Auth flow
// ---------------------------------------------------------------------------

/// The two states of the auth flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    RoleSelect,
    Form,
}

/// Sign-in / sign-up form.
///
/// Signup starts at role selection; login goes straight to the form. The
/// visible field set depends on mode and role: login shows credentials only,
/// signup adds name and location, and the organization field for NGOs and
/// restaurants.
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub role: Role,
    pub step: AuthStep,
    /// Cursor over the role cards while on the role-selection step
    pub role_cursor: usize,
    pub name: FormField,
    pub organization: FormField,
    pub location: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl AuthForm {
    pub fn new(mode: AuthMode, role: Role) -> Self {
        let step = match mode {
            AuthMode::Login => AuthStep::Form,
            AuthMode::Signup => AuthStep::RoleSelect,
        };
        let mut form = Self {
            mode,
            role,
            step,
            role_cursor: Role::all().iter().position(|r| *r == role).unwrap_or(0),
            name: FormField::text("name", "Name", "Your name"),
            organization: FormField::text("organization", "Organization", "Organization name"),
            location: FormField::text("location", "Location", "Location (City)"),
            email: FormField::text("email", "Email", "Email address"),
            password: FormField::text("password", "Password", "Password"),
            active_field_index: 0,
        };
        form.apply_role_placeholders();
        form
    }

    fn apply_role_placeholders(&mut self) {
        self.name.placeholder = match self.role {
            Role::Donor => "Your name".to_string(),
            _ => "Contact person name".to_string(),
        };
        self.organization.placeholder = match self.role {
            Role::Restaurant => "Restaurant name".to_string(),
            _ => "Organization name".to_string(),
        };
    }

    /// Confirm the role under the cursor and move to the form step
    pub fn select_role(&mut self) {
        self.role = Role::all()[self.role_cursor.min(Role::all().len() - 1)];
        self.apply_role_placeholders();
        self.step = AuthStep::Form;
        self.active_field_index = 0;
    }

    /// Go back to role selection (signup only); keeps typed values
    pub fn change_role(&mut self) {
        if self.mode == AuthMode::Signup {
            self.step = AuthStep::RoleSelect;
        }
    }

    /// Switch between login and signup, adjusting the step the way the
    /// original flow does (signup re-enters role selection)
    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.step = match self.mode {
            AuthMode::Login => AuthStep::Form,
            AuthMode::Signup => AuthStep::RoleSelect,
        };
        self.active_field_index = 0;
    }

    pub fn move_role_cursor_down(&mut self) {
        self.role_cursor = (self.role_cursor + 1) % Role::all().len();
    }

    pub fn move_role_cursor_up(&mut self) {
        let len = Role::all().len();
        self.role_cursor = (self.role_cursor + len - 1) % len;
    }

    /// Whether the organization field is part of the signup form
    pub fn shows_organization(&self) -> bool {
        self.mode == AuthMode::Signup && matches!(self.role, Role::Ngo | Role::Restaurant)
    }

    /// Visible fields for the current mode and role, in tab order
    fn visible_fields(&self) -> Vec<&FormField> {
        match self.mode {
            AuthMode::Login => vec![&self.email, &self.password],
            AuthMode::Signup => {
                let mut fields = vec![&self.name];
                if self.shows_organization() {
                    fields.push(&self.organization);
                }
                fields.push(&self.location);
                fields.push(&self.email);
                fields.push(&self.password);
                fields
            }
        }
    }

    /// The sign-in / create-account gate: every visible field filled
    pub fn can_submit(&self) -> bool {
        self.step == AuthStep::Form && self.visible_fields().iter().all(|f| f.is_filled())
    }
}

impl Form for AuthForm {
    fn field_count(&self) -> usize {
        self.visible_fields().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.mode {
            AuthMode::Login => match self.active_field_index {
                0 => &mut self.email,
                _ => &mut self.password,
            },
            AuthMode::Signup => {
                let has_org = self.shows_organization();
                match (self.active_field_index, has_org) {
                    (0, _) => &mut self.name,
                    (1, true) => &mut self.organization,
                    (1, false) | (2, true) => &mut self.location,
                    (2, false) | (3, true) => &mut self.email,
                    _ => &mut self.password,
                }
            }
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.visible_fields().get(index).copied()
    }
}
