pub mod get_seasonal_care;
