//! Tests for core types.

mod test_escape;
mod test_parts;
mod test_position;
mod test_value;

use crate::*;
