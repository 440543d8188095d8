extern crate nom;
extern crate nom_locate;
extern crate thiserror;

pub mod cmd;
pub mod compiler;
pub mod shim;

#[cfg(test)]
#[macro_use]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
