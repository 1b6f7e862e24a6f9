// Business domains
pub mod catalog;
pub mod favorites;
pub mod gallery;
pub mod leads;
pub mod tenant;
