pub mod drip;
pub mod holidays;
