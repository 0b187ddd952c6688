pub mod generate;
pub mod profiles;
