pub mod currency;
pub mod injection;
pub mod time;
pub mod validation;
