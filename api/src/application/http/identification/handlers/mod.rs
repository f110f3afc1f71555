pub mod identify_plant;
