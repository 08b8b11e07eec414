//! Operator implementations, one module per operator family member.

mod concat;
mod concat_all;
mod filter;
mod map;
mod merge;
mod merge_all;
mod recover;
mod start_with;
mod zip;
mod zip_switch;
