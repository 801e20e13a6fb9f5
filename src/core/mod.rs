pub mod constants;
pub mod stepper;
