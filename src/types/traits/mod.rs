pub mod datetime_period;
