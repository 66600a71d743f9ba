pub mod highlight;
pub mod listing;
pub mod pager;

pub use highlight::Highlight;
pub use listing::Listing;
pub use pager::{PageBounds, Pager};
