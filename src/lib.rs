mod direction;
pub use direction::*;

mod criterion;
pub use criterion::*;

mod query;
pub use query::*;

mod builder;
pub use builder::*;

mod sortable;
pub use sortable::*;

mod resolver;
pub use resolver::*;

mod error;
pub use error::*;

use std::any::type_name;
use std::fmt::Result as FmtResult;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;
use typed_builder::TypedBuilder as Builder;

fn default<T: Default>() -> T {
    T::default()
}
