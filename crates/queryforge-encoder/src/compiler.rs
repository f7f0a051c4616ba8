//! Per-field query compilation.

use std::sync::Arc;

use queryforge_config::{CompilerConfig, RenderStyle};
use queryforge_core::{CompileError, EncodedParts, Result};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::registry::EncoderRegistry;
use crate::request::ConstraintRequest;

/// Compiles constraint requests into query fragments.
///
/// Cloning is cheap; clones share the registry.
///
/// # Example
///
/// ```
/// use queryforge_core::{ConstraintKind, ConstraintValue, IndexDataType, IndexValue};
/// use queryforge_encoder::{ConstraintRequest, QueryCompiler};
///
/// let compiler = QueryCompiler::standard().unwrap();
/// let request = ConstraintRequest::for_field("price", Some(IndexDataType::Int))
///     .with(ConstraintKind::Gt, ConstraintValue::single(IndexValue::new("1000", IndexDataType::Int)));
///
/// assert_eq!(compiler.compile(&request).unwrap(), "price:{1000 TO *]");
/// ```
#[derive(Debug, Clone)]
pub struct QueryCompiler {
    registry: Arc<EncoderRegistry>,
    render_style: RenderStyle,
}

impl QueryCompiler {
    pub fn new(registry: impl Into<Arc<EncoderRegistry>>) -> Self {
        Self {
            registry: registry.into(),
            render_style: RenderStyle::default(),
        }
    }

    /// Creates a compiler over the standard encoders with default settings.
    pub fn standard() -> Result<Self> {
        Self::from_config(&CompilerConfig::default())
    }

    /// Creates a compiler over the standard encoders built from `config`.
    pub fn from_config(config: &CompilerConfig) -> Result<Self> {
        let registry = EncoderRegistry::standard(config)?;
        Ok(Self::new(registry).with_render_style(config.render_style))
    }

    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn registry(&self) -> &EncoderRegistry {
        &self.registry
    }

    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    /// Runs the encoders for `request` and returns the collected fragments.
    ///
    /// Any encoder failure aborts the compilation; no partial result is
    /// returned.
    pub fn encode(&self, request: &ConstraintRequest) -> Result<EncodedParts> {
        request.validate_ranges()?;
        let order = self.registry.resolve(request.kinds())?;

        let mut parts = EncodedParts::new();
        for &kind in &order {
            let encoder = self
                .registry
                .get(kind)
                .ok_or(CompileError::UnknownConstraintKind(kind))?;
            let value = request.value(kind).filter(|v| !v.is_empty());
            if value.is_none() && !encoder.supports_default() {
                return Err(CompileError::MissingRequiredValue(kind));
            }
            if !request.contains(kind) {
                trace!(event = "implied_default", kind = %kind);
            }
            encoder.encode(request.field(), value, &mut parts)?;
        }

        debug!(
            event = "field_compiled",
            encoders = order.len(),
            positions = parts.positions().count(),
        );
        Ok(parts)
    }

    /// Compiles `request` using the configured render style.
    pub fn compile(&self, request: &ConstraintRequest) -> Result<String> {
        let parts = self.encode(request)?;
        Ok(match self.render_style {
            RenderStyle::Grouped => parts.render(),
            RenderStyle::Expanded => parts.render_expanded(),
        })
    }

    /// Compiles `request` into the expanded form regardless of the style.
    pub fn compile_expanded(&self, request: &ConstraintRequest) -> Result<String> {
        Ok(self.encode(request)?.render_expanded())
    }

    /// Compiles independent requests in parallel.
    ///
    /// Results are returned in input order; a failing request does not
    /// affect the others.
    pub fn compile_batch(&self, requests: &[ConstraintRequest]) -> Vec<Result<String>> {
        requests.par_iter().map(|r| self.compile(r)).collect()
    }
}
