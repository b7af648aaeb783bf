//! Form rendering for the creation flows

mod donation_form;
mod field_renderer;
mod need_form;
mod surplus_form;

pub use field_renderer::draw_field;

pub use donation_form::draw as draw_donation_wizard;
pub use need_form::draw as draw_need_form;
pub use surplus_form::draw as draw_surplus_form;
