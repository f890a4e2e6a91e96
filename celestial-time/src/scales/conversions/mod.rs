pub mod utc_ut1;

pub use utc_ut1::ToUT1WithDUT1;
