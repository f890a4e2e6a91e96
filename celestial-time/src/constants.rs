pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const SECONDS_TO_DAYS: f64 = 1.0 / 86_400.0;
