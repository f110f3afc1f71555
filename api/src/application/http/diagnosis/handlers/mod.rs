pub mod diagnose_plant;
