//! Layout regions and hit testing
//!
//! Tracks where UI components were rendered so mouse events can be routed
//! to the component under the cursor.

mod regions;

pub use hit_test::region_at;
pub use regions::{LayoutRegions, Region};
