pub mod game_id;
pub mod guess_params;
pub mod if_match;
pub mod validated_json;

pub use game_id::GameIdQuery;
pub use guess_params::GuessParams;
pub use if_match::IfMatch;
pub use validated_json::{JsonLimit, ValidatedJson};
