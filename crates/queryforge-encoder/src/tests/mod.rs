//! Tests for registry construction and per-field compilation.

use crate::*;
use queryforge_config::{CompilerConfig, RenderStyle};
use queryforge_core::{
    CompileError, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, IndexValue,
    PositionKey, Result,
};
use queryforge_test::{all_strings, any_strings, date, int, languages, phrase_texts, string, text};


fn compiler() -> QueryCompiler {
    QueryCompiler::standard().unwrap()
}
