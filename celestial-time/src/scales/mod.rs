pub mod conversions;
pub mod ut1;
pub mod utc;

pub use ut1::UT1;
pub use utc::UTC;
