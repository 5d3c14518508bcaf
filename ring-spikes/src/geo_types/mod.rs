//! Implementation of the crate traits for [`geo_types`] geometries.

mod coord;
mod linestring;
mod point;
mod polygon;
