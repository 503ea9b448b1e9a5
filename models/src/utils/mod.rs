mod bools;
mod paginated;

pub use self::{bools::*, paginated::*};
