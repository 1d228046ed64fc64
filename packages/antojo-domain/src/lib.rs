pub mod catalog;
pub mod dish_key;
pub mod similarity;
pub mod suggest;

mod error;

pub use catalog::{Dish, Place};
pub use dish_key::dish_key_from_name;
pub use error::Error;
pub use similarity::{Reason, ReasonCause, explain_reason, similarity_score};
pub use suggest::{Suggestions, suggest};

pub type Result<T, E = Error> = std::result::Result<T, E>;
