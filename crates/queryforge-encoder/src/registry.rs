//! Immutable registry of constraint encoders.
//!
//! The registry is built once at startup. Building checks the encoder set
//! and computes the execution order; a cycle in the ordering dependencies is
//! a configuration error and prevents the registry from being created.

use std::collections::{BTreeMap, BTreeSet};

use queryforge_config::CompilerConfig;
use queryforge_core::{CompileError, ConstraintKind, Result};
use tracing::info;

use crate::builder::EncoderBuilder;
use crate::encoder::ConstraintEncoder;

/// Encoders keyed by the kind they handle, plus their execution order.
///
/// Read-only after construction and shared freely across threads.
#[derive(Debug)]
pub struct EncoderRegistry {
    encoders: BTreeMap<ConstraintKind, Box<dyn ConstraintEncoder>>,
    order: Vec<ConstraintKind>,
}

impl EncoderRegistry {
    pub fn builder() -> EncoderRegistryBuilder {
        EncoderRegistryBuilder::new()
    }

    /// Builds the registry with one standard encoder per constraint kind.
    ///
    /// # Example
    ///
    /// ```
    /// use queryforge_config::CompilerConfig;
    /// use queryforge_core::ConstraintKind;
    /// use queryforge_encoder::EncoderRegistry;
    ///
    /// let registry = EncoderRegistry::standard(&CompilerConfig::default()).unwrap();
    /// assert_eq!(registry.order()[0], ConstraintKind::Lang);
    /// ```
    pub fn standard(config: &CompilerConfig) -> Result<Self> {
        ConstraintKind::ALL
            .iter()
            .fold(Self::builder(), |builder, &kind| {
                builder.register_boxed(EncoderBuilder::build(kind, config))
            })
            .build()
    }

    pub fn get(&self, kind: ConstraintKind) -> Option<&dyn ConstraintEncoder> {
        self.encoders.get(&kind).map(|e| e.as_ref())
    }

    pub fn contains(&self, kind: ConstraintKind) -> bool {
        self.encoders.contains_key(&kind)
    }

    /// All registered kinds in execution order.
    pub fn order(&self) -> &[ConstraintKind] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// Returns the encoders to run for the requested kinds, in order.
    ///
    /// The requested set is closed over implications: for every implied set
    /// with no member taking part, its first kind is added.
    pub fn resolve(
        &self,
        requested: impl IntoIterator<Item = ConstraintKind>,
    ) -> Result<Vec<ConstraintKind>> {
        let mut active = BTreeSet::new();
        for kind in requested {
            if !self.contains(kind) {
                return Err(CompileError::UnknownConstraintKind(kind));
            }
            active.insert(kind);
        }

        loop {
            let mut added = None;
            'scan: for kind in self.order.iter().filter(|k| active.contains(*k)) {
                for alternatives in self.encoders[kind].implies() {
                    if !alternatives.iter().any(|k| active.contains(k)) {
                        added = alternatives.first().copied();
                        break 'scan;
                    }
                }
            }
            match added {
                Some(kind) => {
                    active.insert(kind);
                }
                None => break,
            }
        }

        Ok(self
            .order
            .iter()
            .copied()
            .filter(|k| active.contains(k))
            .collect())
    }
}

/// Collects encoders and validates them into an [`EncoderRegistry`].
#[derive(Debug, Default)]
pub struct EncoderRegistryBuilder {
    encoders: Vec<Box<dyn ConstraintEncoder>>,
}

impl EncoderRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<E: ConstraintEncoder + 'static>(self, encoder: E) -> Self {
        self.register_boxed(Box::new(encoder))
    }

    pub fn register_boxed(mut self, encoder: Box<dyn ConstraintEncoder>) -> Self {
        self.encoders.push(encoder);
        self
    }

    /// Validates the encoder set and orders it.
    ///
    /// # Errors
    ///
    /// - `DuplicateEncoder` if a kind is registered twice
    /// - `UnknownConstraintKind` if an implied kind has no encoder
    /// - `DependencyCycle` if the ordering dependencies form a cycle
    pub fn build(self) -> Result<EncoderRegistry> {
        let mut encoders = BTreeMap::new();
        for encoder in self.encoders {
            let kind = encoder.kind();
            if encoders.insert(kind, encoder).is_some() {
                return Err(CompileError::DuplicateEncoder(kind));
            }
        }

        for encoder in encoders.values() {
            for &kind in encoder.implies().iter().flat_map(|set| set.iter()) {
                if !encoders.contains_key(&kind) {
                    return Err(CompileError::UnknownConstraintKind(kind));
                }
            }
        }

        let order = topological_order(&encoders)?;
        info!(
            event = "registry_built",
            encoders = encoders.len(),
            order = ?order,
        );
        Ok(EncoderRegistry { encoders, order })
    }
}

/// Orders kinds so every kind follows the registered kinds it depends on.
///
/// Ties are broken by declaration order of [`ConstraintKind`].
fn topological_order(
    encoders: &BTreeMap<ConstraintKind, Box<dyn ConstraintEncoder>>,
) -> Result<Vec<ConstraintKind>> {
    let mut pending: BTreeMap<ConstraintKind, BTreeSet<ConstraintKind>> = encoders
        .iter()
        .map(|(&kind, encoder)| {
            let deps = encoder
                .depends_on()
                .iter()
                .copied()
                .filter(|d| encoders.contains_key(d))
                .collect();
            (kind, deps)
        })
        .collect();

    let mut order = Vec::with_capacity(pending.len());
    while !pending.is_empty() {
        let ready = pending
            .iter()
            .find(|(_, deps)| deps.is_empty())
            .map(|(&kind, _)| kind);
        let Some(kind) = ready else {
            return Err(CompileError::DependencyCycle(pending.into_keys().collect()));
        };
        pending.remove(&kind);
        for deps in pending.values_mut() {
            deps.remove(&kind);
        }
        order.push(kind);
    }
    Ok(order)
}
