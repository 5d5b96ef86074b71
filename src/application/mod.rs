//! Application layer - orchestrates domain transitions and port calls.

mod wizard_controller;

pub use wizard_controller::WizardController;
