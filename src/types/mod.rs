pub mod cells;
pub mod fill_policy;
pub mod granularity;
pub mod period_key;
pub mod raw;
pub mod reading;
pub mod row;
pub mod traits;
