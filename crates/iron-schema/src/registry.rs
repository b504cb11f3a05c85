//! Central schema registry for all Ironclad input and report types.
//!
//! The `SchemaRegistry` builds JSON Schemas from iron-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::BTreeMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the schema for a complete audit snapshot.
pub const AUDIT_INPUT: &str = "audit_input";

/// Name of the schema for a generated report.
pub const AUDIT_REPORT: &str = "audit_report";

/// Central store of all JSON Schemas in the Ironclad system.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. `Schema` is a thin wrapper over a JSON value, so the
/// conversion cannot fail.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing every entity, input, policy, and
    /// report schema from iron-core.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        // --- Entities (6) ---
        register!(schemas, "course", iron_core::entities::Course);
        register!(schemas, "program", iron_core::entities::Program);
        register!(schemas, "requirement", iron_core::entities::Requirement);
        register!(schemas, "student", iron_core::entities::Student);
        register!(schemas, "enrollment", iron_core::entities::Enrollment);
        register!(schemas, "substitution", iron_core::entities::Substitution);

        // --- Engine input and configuration (2) ---
        register!(schemas, AUDIT_INPUT, iron_core::input::AuditInput);
        register!(schemas, "audit_policy", iron_core::policy::AuditPolicy);

        // --- Report types (3) ---
        register!(schemas, AUDIT_REPORT, iron_core::report::AuditReport);
        register!(
            schemas,
            "requirement_progress",
            iron_core::report::RequirementProgress
        );
        register!(schemas, "audit_warning", iron_core::report::AuditWarning);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
