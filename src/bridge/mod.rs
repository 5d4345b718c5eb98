mod callbacks;
mod convert;
mod response;

pub use callbacks::{Callback, CallbackSet};
pub use convert::{convert_to_json, convert_to_json_array};
pub use response::{process_response, shape_response};
