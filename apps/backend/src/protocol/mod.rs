pub mod responses;

pub use responses::{GuessResponse, HintResponse, StartResponse};
