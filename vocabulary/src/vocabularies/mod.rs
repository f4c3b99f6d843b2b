//! Vocabulary modules.
//!
//! Modules are listed in generation order; an extension always follows its
//! base.
//!
//! Generated by `vocab-writer`. Do not edit by hand.

pub mod dc;
pub mod dcterms;
pub mod geo;
pub mod tags;
pub mod vcard;
pub mod data;
pub mod source;
pub mod filesource;
