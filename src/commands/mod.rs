pub mod digest;
pub mod enzymes;
pub mod sites;
