//! Application state and core logic

use crate::config::TuiConfig;
use crate::data::{PlatformClient, SampleClient};
use crate::state::{
    parse_route, AppState, AuthMode, AuthStep, DonationForm, DonorFocus, Form, FormState,
    NeedForm, NgoFocus, Notice, Role, SurplusForm, View, ViewParams,
};
use crate::state::{AuthForm, FieldValue};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client serving the in-memory sample data
    pub client: SampleClient,
    /// Whether the app should quit
    quit: bool,
    /// Transient confirmation shown in the status bar
    pub notice: Option<Notice>,
}

impl App {
    /// Create a new App instance, loading sample data and honoring the
    /// configured start route
    #[allow(clippy::field_reassign_with_default)]
    pub async fn new(config: &TuiConfig) -> Result<Self> {
        let mut client = SampleClient::new();
        let mut state = AppState::default();

        state.donations = client.list_recent_donations().await?;
        state.ngos = client.list_nearby_ngos().await?;
        state.needs = client.list_needs().await?;
        state.incoming = client.list_incoming_donations().await?;
        state.surplus = client.list_surplus_items().await?;
        state.activity = client.list_activity().await?;
        state.donor_stats = client.stats_for(Role::Donor).await?;
        state.ngo_stats = client.stats_for(Role::Ngo).await?;
        state.restaurant_stats = client.stats_for(Role::Restaurant).await?;

        let mut app = Self {
            state,
            client,
            quit: false,
            notice: None,
        };

        if let Some(route) = &config.start_route {
            let (view, mut params) = parse_route(route);
            if params.role.is_none() {
                params.role = config.default_role;
            }
            app.open(view, params);
        }

        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Show a transient confirmation in the status bar
    pub fn push_notice(&mut self, title: impl Into<String>, detail: impl Into<String>) {
        self.notice = Some(Notice::new(title, detail));
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The goto prompt is modal while open
        if self.state.goto_input.is_some() {
            self.handle_goto_key(key);
            return Ok(());
        }

        // Any other key press clears the last notice
        self.notice = None;

        // Goto prompt shortcut (:) - only from non-form views
        if key.code == KeyCode::Char(':') && !self.state.current_view.is_form_view() {
            self.state.goto_input = Some(String::new());
            return Ok(());
        }

        match self.state.current_view {
            View::Landing => self.handle_landing_key(key),
            View::Auth => self.handle_auth_key(key).await?,
            View::DonorDashboard => self.handle_donor_key(key),
            View::NewDonation => self.handle_new_donation_key(key).await?,
            View::NgoDashboard => self.handle_ngo_key(key).await?,
            View::NewNeed => self.handle_new_need_key(key).await?,
            View::RestaurantDashboard => self.handle_restaurant_key(key),
            View::UploadSurplus => self.handle_upload_surplus_key(key).await?,
            View::NotFound => self.handle_not_found_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view, opening its form state when needed
    pub fn open(&mut self, view: View, params: ViewParams) {
        match view {
            View::Auth => {
                let mode = params.auth_mode.unwrap_or_default();
                let role = params.role.unwrap_or_default();
                self.state.form = FormState::Auth(AuthForm::new(mode, role));
            }
            View::NewDonation => {
                self.state.form = FormState::Donation(DonationForm::new());
            }
            View::NewNeed => {
                self.state.form = FormState::Need(NeedForm::new());
            }
            View::UploadSurplus => {
                self.state.form = FormState::Surplus(SurplusForm::new());
            }
            _ => {}
        }
        self.navigate(view, params);
    }

    /// Navigate to a new view
    fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.reset_selection();
        self.state
            .view_history
            .push((self.state.current_view.clone(), self.state.view_params.clone()));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Go back to the previous non-form view
    pub fn go_back(&mut self) {
        self.state.reset_selection();
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.view_params = params;
            return;
        }
        self.state.current_view = View::Landing;
        self.state.view_params = ViewParams::default();
    }

    /// Handle keys while the goto prompt is open
    fn handle_goto_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.goto_input = None;
            }
            KeyCode::Enter => {
                if let Some(route) = self.state.goto_input.take() {
                    let (view, params) = parse_route(&route);
                    self.state.clear_form();
                    self.open(view, params);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = &mut self.state.goto_input {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = &mut self.state.goto_input {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Handle keys on the landing page
    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(Role::all().len());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up();
            }
            KeyCode::Enter | KeyCode::Char('g') => {
                let role = Role::all()[self.state.selected_index.min(Role::all().len() - 1)];
                self.open(
                    View::Auth,
                    ViewParams {
                        auth_mode: Some(AuthMode::Signup),
                        role: Some(role),
                    },
                );
            }
            KeyCode::Char('s') => {
                self.open(
                    View::Auth,
                    ViewParams {
                        auth_mode: Some(AuthMode::Login),
                        role: None,
                    },
                );
            }
            KeyCode::Char('q') => {
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Handle keys in the auth flow
    async fn handle_auth_key(&mut self, key: KeyEvent) -> Result<()> {
        let FormState::Auth(form) = &mut self.state.form else {
            self.go_back();
            return Ok(());
        };

        match form.step {
            AuthStep::RoleSelect => match key.code {
                KeyCode::Char('j') | KeyCode::Down => form.move_role_cursor_down(),
                KeyCode::Char('k') | KeyCode::Up => form.move_role_cursor_up(),
                KeyCode::Enter => form.select_role(),
                KeyCode::Tab => form.switch_mode(),
                KeyCode::Esc => {
                    self.state.clear_form();
                    self.go_back();
                }
                _ => {}
            },
            AuthStep::Form => match key.code {
                KeyCode::Tab => form.next_field(),
                KeyCode::BackTab => form.prev_field(),
                KeyCode::Enter => {
                    if form.can_submit() {
                        self.submit_auth().await?;
                    }
                }
                KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.switch_mode();
                }
                KeyCode::Esc => {
                    if form.mode == AuthMode::Signup {
                        form.change_role();
                    } else {
                        self.state.clear_form();
                        self.go_back();
                    }
                }
                KeyCode::Char(c) => form.get_active_field_mut().push_char(c),
                KeyCode::Backspace => form.get_active_field_mut().pop_char(),
                _ => {}
            },
        }
        Ok(())
    }

    /// Simulated sign-in / sign-up: notice plus redirect to the role dashboard
    async fn submit_auth(&mut self) -> Result<()> {
        let FormState::Auth(form) = &self.state.form else {
            return Ok(());
        };
        let mode = form.mode;
        let role = form.role;

        self.client.authenticate(role).await?;
        self.state.signed_in_role = Some(role);
        match mode {
            AuthMode::Login => {
                self.push_notice("Welcome back!", "You've successfully signed in.")
            }
            AuthMode::Signup => self.push_notice(
                "Account created!",
                "Your account has been created successfully.",
            ),
        }
        self.state.clear_form();
        self.navigate(role.dashboard(), ViewParams::default());
        Ok(())
    }

    /// Sign out from any dashboard
    fn sign_out(&mut self) {
        self.state.signed_in_role = None;
        self.push_notice("Signed out", "You've been successfully logged out.");
        self.state.view_history.clear();
        self.state.current_view = View::Landing;
        self.state.view_params = ViewParams::default();
        self.state.reset_selection();
    }

    /// Handle keys on the donor dashboard
    fn handle_donor_key(&mut self, key: KeyEvent) {
        if matches!(self.state.donor_focus, DonorFocus::NgoSearch) {
            match key.code {
                KeyCode::Tab | KeyCode::Esc => {
                    self.state.donor_focus = DonorFocus::Donations;
                }
                KeyCode::Char(c) => {
                    self.state.ngo_search.push(c);
                    self.state.reset_selection();
                }
                KeyCode::Backspace => {
                    self.state.ngo_search.pop();
                    self.state.reset_selection();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Char('/') => {
                self.state.donor_focus.toggle();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(self.state.donations.len());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up();
            }
            KeyCode::Char('n') => {
                self.open(View::NewDonation, ViewParams::default());
            }
            KeyCode::Char('o') => self.sign_out(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    /// Handle keys in the donation wizard
    async fn handle_new_donation_key(&mut self, key: KeyEvent) -> Result<()> {
        let FormState::Donation(form) = &mut self.state.form else {
            self.go_back();
            return Ok(());
        };

        let on_choice = form
            .get_field(form.active_field())
            .map(|f| matches!(f.value, FieldValue::Choice(_)))
            .unwrap_or(false);

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Char('h') if on_choice => form.cycle_choice(false),
            KeyCode::Char('l') if on_choice => form.cycle_choice(true),
            KeyCode::Enter => {
                if form.can_submit() {
                    self.submit_donation().await?;
                } else {
                    form.advance();
                }
            }
            KeyCode::Esc => {
                if form.step.prev().is_some() {
                    form.retreat();
                } else {
                    self.state.clear_form();
                    self.go_back();
                }
            }
            KeyCode::Char(c) if !on_choice => form.get_active_field_mut().push_char(c),
            KeyCode::Backspace if !on_choice => form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Create the donation, confirm, and return to the donor dashboard
    async fn submit_donation(&mut self) -> Result<()> {
        let FormState::Donation(form) = &self.state.form else {
            return Ok(());
        };
        let result = self
            .client
            .create_donation(
                form.item_type.selected().unwrap_or_default(),
                form.category.selected().unwrap_or_default(),
                form.quantity.as_text(),
                form.description.as_text(),
                form.delivery_method.selected().unwrap_or_default(),
                form.address.as_text(),
                form.preferred_date.as_text(),
                form.preferred_time.as_text(),
            )
            .await;

        match result {
            Ok(_) => {
                self.state.donations = self.client.list_recent_donations().await?;
                self.push_notice("Donation created!", "We'll match you with an NGO shortly.");
                self.state.clear_form();
                self.navigate(View::DonorDashboard, ViewParams::default());
            }
            Err(e) => {
                tracing::warn!(error = %e, "donation submission failed");
                self.push_notice("Something went wrong", e.to_string());
            }
        }
        Ok(())
    }

    /// Handle keys on the NGO dashboard
    async fn handle_ngo_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => {
                self.state.ngo_focus.toggle();
                self.state.reset_selection();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let max = match self.state.ngo_focus {
                    NgoFocus::Needs => self.state.needs.len(),
                    NgoFocus::Incoming => self.state.incoming.len(),
                };
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up();
            }
            KeyCode::Char('n') => {
                self.open(View::NewNeed, ViewParams::default());
            }
            KeyCode::Char('a') if matches!(self.state.ngo_focus, NgoFocus::Incoming) => {
                self.accept_selected_donation().await?;
            }
            KeyCode::Char('r') if matches!(self.state.ngo_focus, NgoFocus::Incoming) => {
                self.receive_selected_donation().await?;
            }
            KeyCode::Char('o') => self.sign_out(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
        Ok(())
    }

    /// Accept the selected pending incoming donation
    async fn accept_selected_donation(&mut self) -> Result<()> {
        let id = match self.state.incoming.get(self.state.selected_index) {
            Some(donation) => donation.id.clone(),
            None => return Ok(()),
        };

        match self.client.accept_donation(&id).await {
            Ok(()) => {
                self.state.incoming = self.client.list_incoming_donations().await?;
                self.push_notice("Donation accepted", "The donor has been notified. Thank you!");
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "accept failed");
                self.push_notice("Action unavailable", e.to_string());
            }
        }
        Ok(())
    }

    /// Mark the selected accepted donation as received
    async fn receive_selected_donation(&mut self) -> Result<()> {
        let id = match self.state.incoming.get(self.state.selected_index) {
            Some(donation) => donation.id.clone(),
            None => return Ok(()),
        };

        match self.client.mark_received(&id).await {
            Ok(()) => {
                self.state.incoming = self.client.list_incoming_donations().await?;
                self.push_notice(
                    "Marked as received",
                    "The donation has been recorded successfully.",
                );
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "mark received failed");
                self.push_notice("Action unavailable", e.to_string());
            }
        }
        Ok(())
    }

    /// Handle keys in the need posting form
    async fn handle_new_need_key(&mut self, key: KeyEvent) -> Result<()> {
        let FormState::Need(form) = &mut self.state.form else {
            self.go_back();
            return Ok(());
        };

        let on_choice = form
            .get_field(form.active_field())
            .map(|f| matches!(f.value, FieldValue::Choice(_)))
            .unwrap_or(false);

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Char('h') if on_choice => form.cycle_choice(false),
            KeyCode::Char('l') if on_choice => form.cycle_choice(true),
            KeyCode::Enter => {
                if form.can_submit() {
                    self.submit_need().await?;
                }
            }
            KeyCode::Esc => {
                self.state.clear_form();
                self.go_back();
            }
            KeyCode::Char(c) if !on_choice => form.get_active_field_mut().push_char(c),
            KeyCode::Backspace if !on_choice => form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Post the need, confirm, and return to the NGO dashboard
    async fn submit_need(&mut self) -> Result<()> {
        let FormState::Need(form) = &self.state.form else {
            return Ok(());
        };
        let result = self
            .client
            .post_need(
                form.category.selected().unwrap_or_default(),
                form.quantity.as_text(),
                form.urgency.selected().unwrap_or_default(),
                form.description.as_text(),
            )
            .await;

        match result {
            Ok(_) => {
                self.state.needs = self.client.list_needs().await?;
                self.push_notice(
                    "Need posted!",
                    "Donors will be notified about your requirement.",
                );
                self.state.clear_form();
                self.navigate(View::NgoDashboard, ViewParams::default());
            }
            Err(e) => {
                tracing::warn!(error = %e, "need submission failed");
                self.push_notice("Something went wrong", e.to_string());
            }
        }
        Ok(())
    }

    /// Handle keys on the restaurant dashboard
    fn handle_restaurant_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(self.state.surplus.len());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up();
            }
            KeyCode::Char('n') | KeyCode::Char('u') => {
                self.open(View::UploadSurplus, ViewParams::default());
            }
            KeyCode::Char('o') => self.sign_out(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    /// Handle keys in the surplus upload form
    async fn handle_upload_surplus_key(&mut self, key: KeyEvent) -> Result<()> {
        let FormState::Surplus(form) = &mut self.state.form else {
            self.go_back();
            return Ok(());
        };

        let on_choice = form
            .get_field(form.active_field())
            .map(|f| matches!(f.value, FieldValue::Choice(_)))
            .unwrap_or(false);

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Char('h') if on_choice => form.cycle_choice(false),
            KeyCode::Char('l') if on_choice => form.cycle_choice(true),
            KeyCode::Enter => {
                if form.can_submit() {
                    self.submit_surplus().await?;
                }
            }
            KeyCode::Esc => {
                self.state.clear_form();
                self.go_back();
            }
            KeyCode::Char(c) if !on_choice => form.get_active_field_mut().push_char(c),
            KeyCode::Backspace if !on_choice => form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Upload the listing, confirm, and return to the restaurant dashboard
    async fn submit_surplus(&mut self) -> Result<()> {
        let FormState::Surplus(form) = &self.state.form else {
            return Ok(());
        };
        let result = self
            .client
            .upload_surplus(
                form.category.selected().unwrap_or_default(),
                form.quantity.as_text(),
                form.expires_in.selected().unwrap_or_default(),
                form.description.as_text(),
                form.pickup_instructions.as_text(),
            )
            .await;

        match result {
            Ok(_) => {
                self.state.surplus = self.client.list_surplus_items().await?;
                self.state.activity = self.client.list_activity().await?;
                self.push_notice("Surplus food uploaded!", "Nearby NGOs have been notified.");
                self.state.clear_form();
                self.navigate(View::RestaurantDashboard, ViewParams::default());
            }
            Err(e) => {
                tracing::warn!(error = %e, "surplus submission failed");
                self.push_notice("Something went wrong", e.to_string());
            }
        }
        Ok(())
    }

    /// Handle keys on the not-found page
    fn handle_not_found_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.view_history.clear();
                self.state.current_view = View::Landing;
                self.state.view_params = ViewParams::default();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DonationStep, IncomingStatus};
    use pretty_assertions::assert_eq;

    async fn app() -> App {
        App::new(&TuiConfig::default()).await.unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).await.unwrap();
    }

    async fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_starts_on_landing() {
            let app = app().await;
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[tokio::test]
        async fn test_config_start_route_is_honored() {
            let config = TuiConfig {
                start_route: Some("/restaurant".to_string()),
                ..Default::default()
            };
            let app = App::new(&config).await.unwrap();
            assert_eq!(app.state.current_view, View::RestaurantDashboard);
        }

        #[tokio::test]
        async fn test_landing_enter_opens_signup_for_selected_role() {
            let mut app = app().await;
            press(&mut app, KeyCode::Char('j')).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::Auth);
            let FormState::Auth(form) = &app.state.form else {
                panic!("auth form not opened");
            };
            assert_eq!(form.mode, AuthMode::Signup);
            assert_eq!(form.step, AuthStep::RoleSelect);
            assert_eq!(form.role_cursor, 1);
        }

        #[tokio::test]
        async fn test_go_back_skips_form_views() {
            let mut app = app().await;
            app.open(View::DonorDashboard, ViewParams::default());
            app.open(View::NewDonation, ViewParams::default());
            app.open(View::NgoDashboard, ViewParams::default());
            app.go_back();
            assert_eq!(app.state.current_view, View::DonorDashboard);
        }

        #[tokio::test]
        async fn test_goto_prompt_routes() {
            let mut app = app().await;
            press(&mut app, KeyCode::Char(':')).await;
            assert!(app.state.goto_input.is_some());
            type_str(&mut app, "/ngo").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::NgoDashboard);
            assert!(app.state.goto_input.is_none());
        }

        #[tokio::test]
        async fn test_goto_prompt_unknown_path_lands_on_not_found() {
            let mut app = app().await;
            press(&mut app, KeyCode::Char(':')).await;
            type_str(&mut app, "/does-not-exist").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::NotFound);

            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[tokio::test]
        async fn test_goto_prompt_opens_auth_with_params() {
            let mut app = app().await;
            press(&mut app, KeyCode::Char(':')).await;
            type_str(&mut app, "/auth?mode=signup&role=ngo").await;
            press(&mut app, KeyCode::Enter).await;
            let FormState::Auth(form) = &app.state.form else {
                panic!("auth form not opened");
            };
            assert_eq!(form.mode, AuthMode::Signup);
            assert_eq!(form.role, Role::Ngo);
        }

        #[tokio::test]
        async fn test_sign_out_returns_to_landing() {
            let mut app = app().await;
            app.open(View::DonorDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('o')).await;
            assert_eq!(app.state.current_view, View::Landing);
            assert_eq!(app.notice.as_ref().unwrap().title, "Signed out");
        }
    }

    mod donation_wizard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_n_opens_wizard_from_donor_dashboard() {
            let mut app = app().await;
            app.open(View::DonorDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('n')).await;
            assert_eq!(app.state.current_view, View::NewDonation);
            assert!(matches!(app.state.form, FormState::Donation(_)));
        }

        #[tokio::test]
        async fn test_enter_does_not_advance_incomplete_step() {
            let mut app = app().await;
            app.open(View::NewDonation, ViewParams::default());
            press(&mut app, KeyCode::Enter).await;
            let FormState::Donation(form) = &app.state.form else {
                panic!("wizard not open");
            };
            assert_eq!(form.step, DonationStep::ItemSelect);
        }

        #[tokio::test]
        async fn test_full_wizard_run_submits_and_redirects() {
            let mut app = app().await;
            app.open(View::DonorDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('n')).await;

            // Step 1: pick food / vegetables
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;

            // Step 2: quantity
            type_str(&mut app, "10 kg").await;
            press(&mut app, KeyCode::Enter).await;

            // Step 3: pickup + address, then submit
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "12 Main St").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::DonorDashboard);
            assert_eq!(app.notice.as_ref().unwrap().title, "Donation created!");
            assert_eq!(app.state.donations.len(), 4);
            assert_eq!(app.state.donations[0].item, "Fresh Vegetables");
            assert!(matches!(app.state.form, FormState::None));
        }

        #[tokio::test]
        async fn test_escape_retreats_then_cancels() {
            let mut app = app().await;
            app.open(View::DonorDashboard, ViewParams::default());
            app.open(View::NewDonation, ViewParams::default());

            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;

            press(&mut app, KeyCode::Esc).await;
            let FormState::Donation(form) = &app.state.form else {
                panic!("wizard closed too early");
            };
            assert_eq!(form.step, DonationStep::ItemSelect);

            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::DonorDashboard);
            assert!(matches!(app.state.form, FormState::None));
        }

        #[tokio::test]
        async fn test_letters_type_into_text_fields_only() {
            let mut app = app().await;
            app.open(View::NewDonation, ViewParams::default());
            // 'h' on the item-type choice cycles instead of typing
            press(&mut app, KeyCode::Char('h')).await;
            let FormState::Donation(form) = &app.state.form else {
                panic!("wizard not open");
            };
            assert_eq!(form.item_type.selected(), Some("food"));
        }
    }

    mod need_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_blocked_without_category() {
            let mut app = app().await;
            app.open(View::NgoDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('n')).await;

            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "50 kg").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::NewNeed);
        }

        #[tokio::test]
        async fn test_submit_posts_and_redirects() {
            let mut app = app().await;
            app.open(View::NgoDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('n')).await;

            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "50 kg").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::NgoDashboard);
            assert_eq!(app.notice.as_ref().unwrap().title, "Need posted!");
            assert_eq!(app.state.needs.len(), 4);
        }
    }

    mod surplus_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_blocked_without_expiry() {
            let mut app = app().await;
            app.open(View::UploadSurplus, ViewParams::default());

            press(&mut app, KeyCode::Right).await; // category
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "30 loaves").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::UploadSurplus);
        }

        #[tokio::test]
        async fn test_submit_uploads_and_redirects() {
            let mut app = app().await;
            app.open(View::RestaurantDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('u')).await;

            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "30 loaves").await;
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::RestaurantDashboard);
            assert_eq!(app.notice.as_ref().unwrap().title, "Surplus food uploaded!");
            assert_eq!(app.state.surplus.len(), 4);
            assert_eq!(app.state.activity[0].action, "Food uploaded");
        }
    }

    mod auth {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_signup_role_selection_to_form() {
            let mut app = app().await;
            app.open(
                View::Auth,
                ViewParams {
                    auth_mode: Some(AuthMode::Signup),
                    role: None,
                },
            );
            press(&mut app, KeyCode::Char('j')).await;
            press(&mut app, KeyCode::Char('j')).await;
            press(&mut app, KeyCode::Enter).await;

            let FormState::Auth(form) = &app.state.form else {
                panic!("auth form missing");
            };
            assert_eq!(form.role, Role::Restaurant);
            assert_eq!(form.step, AuthStep::Form);
            assert!(form.shows_organization());
        }

        #[tokio::test]
        async fn test_login_submit_redirects_to_role_dashboard() {
            let mut app = app().await;
            app.open(
                View::Auth,
                ViewParams {
                    auth_mode: Some(AuthMode::Login),
                    role: Some(Role::Ngo),
                },
            );
            type_str(&mut app, "a@b.c").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "secret").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::NgoDashboard);
            assert_eq!(app.state.signed_in_role, Some(Role::Ngo));
            assert_eq!(app.notice.as_ref().unwrap().title, "Welcome back!");
        }

        #[tokio::test]
        async fn test_login_enter_is_noop_with_empty_password() {
            let mut app = app().await;
            app.open(
                View::Auth,
                ViewParams {
                    auth_mode: Some(AuthMode::Login),
                    role: None,
                },
            );
            type_str(&mut app, "a@b.c").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::Auth);
        }
    }

    mod ngo_dashboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_accept_pending_donation() {
            let mut app = app().await;
            app.open(View::NgoDashboard, ViewParams::default());
            press(&mut app, KeyCode::Tab).await; // focus incoming list
            press(&mut app, KeyCode::Char('a')).await;

            assert_eq!(app.state.incoming[0].status, IncomingStatus::Accepted);
            assert_eq!(app.notice.as_ref().unwrap().title, "Donation accepted");
        }

        #[tokio::test]
        async fn test_mark_received_requires_accepted_state() {
            let mut app = app().await;
            app.open(View::NgoDashboard, ViewParams::default());
            press(&mut app, KeyCode::Tab).await;
            // in-1 is pending; receiving it directly is rejected
            press(&mut app, KeyCode::Char('r')).await;
            assert_eq!(app.state.incoming[0].status, IncomingStatus::Pending);
            assert_eq!(app.notice.as_ref().unwrap().title, "Action unavailable");

            press(&mut app, KeyCode::Char('a')).await;
            press(&mut app, KeyCode::Char('r')).await;
            assert_eq!(app.state.incoming[0].status, IncomingStatus::Received);
        }

        #[tokio::test]
        async fn test_accept_ignored_when_needs_focused() {
            let mut app = app().await;
            app.open(View::NgoDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('a')).await;
            assert_eq!(app.state.incoming[0].status, IncomingStatus::Pending);
        }
    }

    mod donor_dashboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_search_focus_captures_typing() {
            let mut app = app().await;
            app.open(View::DonorDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('/')).await;
            type_str(&mut app, "hope").await;
            assert_eq!(app.state.ngo_search, "hope");
            assert_eq!(app.state.filtered_ngos().len(), 1);

            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.donor_focus, DonorFocus::Donations);
        }

        #[tokio::test]
        async fn test_selection_moves_over_donations() {
            let mut app = app().await;
            app.open(View::DonorDashboard, ViewParams::default());
            press(&mut app, KeyCode::Char('j')).await;
            press(&mut app, KeyCode::Char('j')).await;
            press(&mut app, KeyCode::Char('j')).await;
            assert_eq!(app.state.selected_index, 2);
        }
    }
}
