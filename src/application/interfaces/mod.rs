/// Pet service interface
pub mod pets;
