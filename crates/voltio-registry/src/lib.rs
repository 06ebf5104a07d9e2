//! Module registry and factory for voltio rack modules.
//!
//! This crate provides a centralized registry for discovering and
//! instantiating rack modules. It enables dynamic module selection by id
//! and provides the metadata a host needs to lay out panels: param, port,
//! and light counts per module.
//!
//! # Example
//!
//! ```rust
//! use voltio_core::Module;
//! use voltio_registry::{ModuleCategory, ModuleRegistry};
//!
//! let registry = ModuleRegistry::new();
//!
//! // List all modules
//! for module in registry.all_modules() {
//!     println!("{}: {}", module.name, module.description);
//! }
//!
//! // Create a module by id
//! if let Some(mut bank) = registry.create("filter-bank") {
//!     bank.set_param(1, 120.0); // cutoff
//! }
//!
//! // Filter by category
//! for module in registry.modules_in_category(ModuleCategory::Mixing) {
//!     println!("Mixing module: {}", module.name);
//! }
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! voltio-registry = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use voltio_core::Module;
use voltio_modules::{Combiner, FilterBank};

/// Category of rack module for organization and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleCategory {
    /// Spectral shaping (filter banks, equalizers)
    Filter,
    /// Signal combination (mixers, sums, averagers)
    Mixing,
}

impl ModuleCategory {
    /// Returns a human-readable name for the category.
    pub const fn name(&self) -> &'static str {
        match self {
            ModuleCategory::Filter => "Filter",
            ModuleCategory::Mixing => "Mixing",
        }
    }
}

/// Describes a module in the registry.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    /// Unique identifier for the module (lowercase, kebab-case).
    pub id: &'static str,
    /// Human-readable panel name.
    pub name: &'static str,
    /// Brief description of the module.
    pub description: &'static str,
    /// Category for organization.
    pub category: ModuleCategory,
    /// Number of params on the panel.
    pub params: usize,
    /// Number of input ports.
    pub inputs: usize,
    /// Number of output ports.
    pub outputs: usize,
    /// Number of indicator lights.
    pub lights: usize,
}

/// Factory function type for creating modules.
type ModuleFactory = fn() -> Box<dyn Module + Send>;

/// Internal entry in the registry.
struct RegistryEntry {
    descriptor: ModuleDescriptor,
    factory: ModuleFactory,
}

/// Registry of all available rack modules.
///
/// The registry provides a centralized way to discover and instantiate
/// modules by id. All built-in modules are automatically registered.
pub struct ModuleRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRegistry {
    /// Create a new registry with all built-in modules registered.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(2),
        };
        registry.register_builtin_modules();
        registry
    }

    fn register_builtin_modules(&mut self) {
        self.entries.push(RegistryEntry {
            descriptor: ModuleDescriptor {
                id: "filter-bank",
                name: "Filter Bank",
                description: "Single-pole low, band, and high pass over one polyphonic input",
                category: ModuleCategory::Filter,
                params: 2,
                inputs: 1,
                outputs: 3,
                lights: 1,
            },
            factory: || Box::new(FilterBank::new()),
        });
        self.entries.push(RegistryEntry {
            descriptor: ModuleDescriptor {
                id: "combiner",
                name: "Combiner",
                description: "Sums or averages up to three polyphonic inputs",
                category: ModuleCategory::Mixing,
                params: 3,
                inputs: 3,
                outputs: 1,
                lights: 3,
            },
            factory: || Box::new(Combiner::new()),
        });
    }

    /// Descriptors for every registered module.
    pub fn all_modules(&self) -> Vec<ModuleDescriptor> {
        self.entries
            .iter()
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    /// Descriptor for a module id, if registered.
    pub fn descriptor(&self, id: &str) -> Option<&ModuleDescriptor> {
        self.entries
            .iter()
            .map(|entry| &entry.descriptor)
            .find(|descriptor| descriptor.id == id)
    }

    /// Instantiate a module by id. Returns `None` for unknown ids.
    pub fn create(&self, id: &str) -> Option<Box<dyn Module + Send>> {
        self.entries
            .iter()
            .find(|entry| entry.descriptor.id == id)
            .map(|entry| (entry.factory)())
    }

    /// Descriptors for every module in one category.
    pub fn modules_in_category(&self, category: ModuleCategory) -> Vec<ModuleDescriptor> {
        self.entries
            .iter()
            .filter(|entry| entry.descriptor.category == category)
            .map(|entry| entry.descriptor.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_both_builtin_modules() {
        let registry = ModuleRegistry::new();
        let ids: Vec<&str> = registry.all_modules().iter().map(|d| d.id).collect();
        assert_eq!(ids, ["filter-bank", "combiner"]);
    }

    #[test]
    fn unknown_id_creates_nothing() {
        let registry = ModuleRegistry::new();
        assert!(registry.create("reverb").is_none());
        assert!(registry.descriptor("reverb").is_none());
    }

    #[test]
    fn descriptors_match_instantiated_modules() {
        let registry = ModuleRegistry::new();
        for descriptor in registry.all_modules() {
            let module = registry.create(descriptor.id).unwrap();
            assert_eq!(module.inputs().len(), descriptor.inputs);
            assert_eq!(module.outputs().len(), descriptor.outputs);
        }
    }

    #[test]
    fn categories_partition_the_registry() {
        let registry = ModuleRegistry::new();
        let filters = registry.modules_in_category(ModuleCategory::Filter);
        let mixers = registry.modules_in_category(ModuleCategory::Mixing);
        assert_eq!(filters.len(), 1);
        assert_eq!(mixers.len(), 1);
        assert_eq!(filters[0].id, "filter-bank");
        assert_eq!(mixers[0].id, "combiner");
    }

    #[test]
    fn created_modules_start_powered_off() {
        let registry = ModuleRegistry::new();
        let module = registry.create("combiner").unwrap();
        assert_eq!(module.light(0), 0.0);
        assert_eq!(module.param(0), 0.0);
    }
}
