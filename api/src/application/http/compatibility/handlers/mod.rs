pub mod check_compatibility;
