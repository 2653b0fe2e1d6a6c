pub mod agenda;
pub mod coverage;
pub mod event;
pub mod status;
