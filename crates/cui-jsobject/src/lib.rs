//! JavaScript object-literal notation for client-side chart configuration.
//!
//! This crate provides a small typed object model that renders itself to the
//! literal notation expected by client-side charting libraries. Nodes and
//! properties that carry no information are omitted, and the omission
//! propagates: a parent drops a child whose rendering is empty.
//!
//! # Features
//!
//! - Typed leaf values (`JsString`, `JsDouble`, `JsInteger`, `JsBoolean`,
//!   `JsReference`, `JsDateTime`) that know their own literal syntax
//! - Locale-independent numbers: doubles always render with three fraction digits
//! - `JsArray` for ordered collections, skipping absent elements
//! - `JsObject` nodes with registration-ordered properties and children
//!
//! # Example
//!
//! ```
//! use cui_jsobject::{JsBoolean, JsDouble, JsObject, JsString};
//!
//! let mut grid = JsObject::named("grid");
//! grid.add_property("drawGridLines", JsBoolean::TRUE)
//!     .unwrap()
//!     .add_property("gridLineColor", JsString::new("#cccccc"))
//!     .unwrap()
//!     .add_property("borderWidth", JsDouble::new(2.0))
//!     .unwrap();
//!
//! assert_eq!(
//!     grid.to_notation().as_deref(),
//!     Some(r##"grid: {drawGridLines:true,gridLineColor:"#cccccc",borderWidth:2.000}"##)
//! );
//! ```
//!
//! # Finalization
//!
//! The first call to [`JsObject::to_notation`] finalizes a node. Rendering
//! again returns the same text, while adding a property or a child afterwards
//! fails with [`JsError::AlreadyFinalized`]. Code that assembles a fresh node
//! in one go can use [`JsObjectBuilder`], which cannot be rendered and
//! therefore never fails.

mod array;
mod datetime;
mod error;
mod object;
mod value;

pub use array::JsArray;
pub use datetime::{JsDateTime, JsDateTimeFormat};
pub use error::{JsError, Result};
pub use object::{JsObject, JsObjectBuilder};
pub use value::{JsBoolean, JsDouble, JsInteger, JsReference, JsString, JsValue};
