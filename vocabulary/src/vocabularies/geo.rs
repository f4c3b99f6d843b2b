//! `geo` vocabulary: WGS84 Geo Positioning.
//!
//! Latitude, longitude and altitude of spatially-located things, using WGS84 as
//! the reference datum.
//!
//! Generated by `vocab-writer` from `geo.rdfs`. Do not edit by hand.

use crate::model::{TermDef, Vocabulary, VocabularyTable};

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

/// Term declarations, classes first.
#[rustfmt::skip]
pub static TERMS: &[TermDef] = &[
    TermDef::class("Point", "point", Some("A point, typically described using a coordinate system relative to Earth, such as WGS84.")),
    TermDef::class("SpatialThing", "SpatialThing", Some("Anything with spatial extent, i.e. size, shape, or position. e.g. people, places, bowling balls, as well as abstract areas like cubes.")),
    TermDef::property("alt", "altitude", Some("The WGS84 altitude of a SpatialThing (decimal meters above the local reference ellipsoid).")),
    TermDef::property("lat", "latitude", Some("The WGS84 latitude of a SpatialThing (decimal degrees).")),
    TermDef::property("lat_long", "lat/long", Some("A comma-separated representation of a latitude, longitude coordinate.")),
    TermDef::property("location", "location", Some("The relation between something and the point, or other geometrical thing in space, where it is.")),
    TermDef::property("long", "longitude", Some("The WGS84 longitude of a SpatialThing (decimal degrees).")),
];

/// The `geo` vocabulary descriptor.
#[rustfmt::skip]
pub static VOCABULARY: Vocabulary = Vocabulary::new(
    "geo",
    "geo",
    NS,
    "WGS84 Geo Positioning",
    "geo.rdfs",
    TERMS,
)
.with_resource("geo.rdfs");

/// Returns the `geo` table.
#[must_use]
pub fn table() -> &'static VocabularyTable {
    VOCABULARY.table()
}

/// Looks up the full identifier of a term by local name.
#[must_use]
pub fn iri(name: &str) -> Option<&'static str> {
    VOCABULARY.iri(name)
}
