mod authorized;
mod request_url;

pub use self::{authorized::*, request_url::*};
