pub mod lattice;
pub mod poset;
