//! Pipeline por scope: resolve -> coerce -> gate -> invoke.
pub mod coerce;
pub mod gate;
pub mod invoke;
pub mod resolve;

pub use coerce::{coerce, is_true_value};
pub use gate::{is_blank, should_fire};
pub use invoke::{build_args, invoke};
pub use resolve::{resolve, Resolution};
