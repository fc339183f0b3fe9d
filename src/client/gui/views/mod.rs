pub mod analyze;
pub mod feature_cards;
pub mod logger;
