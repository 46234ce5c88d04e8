//! Record validation
//!
//! Checks a serialized record (as `serde_json::Value`) against a
//! [`RecordSchema`]: every declared field present with the declared JSON
//! type, and nothing undeclared.

use serde_json::Value;

use crate::schemas::RecordSchema;
use crate::SchemaError;

/// Structural validator for one record layout
pub struct RecordValidator<'a> {
    schema: &'a RecordSchema,
}

impl<'a> RecordValidator<'a> {
    /// Create a validator for `schema`
    pub fn new(schema: &'a RecordSchema) -> Self {
        Self { schema }
    }

    /// Validate `value`, collecting every problem found.
    ///
    /// Fails outright only when `value` is not a JSON object.
    pub fn validate(&self, value: &Value) -> Result<ValidationReport, SchemaError> {
        let Value::Object(fields) = value else {
            return Err(SchemaError::ValidationError(format!(
                "{} record must be a JSON object",
                self.schema.name
            )));
        };

        let mut report = ValidationReport::default();

        for spec in &self.schema.fields {
            match fields.get(&spec.name) {
                None => report.missing.push(spec.name.clone()),
                Some(Value::Null) if spec.nullable => {}
                Some(field) if !spec.kind.matches(field) => report.mistyped.push(spec.name.clone()),
                Some(_) => {}
            }
        }

        report.unexpected = fields
            .keys()
            .filter(|name| self.schema.field(name).is_none())
            .cloned()
            .collect();

        Ok(report)
    }
}

/// Outcome of validating one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Declared fields absent from the record
    pub missing: Vec<String>,
    /// Fields whose JSON type differs from the declaration
    pub mistyped: Vec<String>,
    /// Fields the layout does not declare
    pub unexpected: Vec<String>,
}

impl ValidationReport {
    /// Whether the record matches its layout exactly
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && self.mistyped.is_empty() && self.unexpected.is_empty()
    }

    /// Convert into a `Result`, describing every problem on failure
    pub fn into_result(self, record: &str) -> Result<(), SchemaError> {
        if self.is_valid() {
            return Ok(());
        }
        Err(SchemaError::ValidationError(format!(
            "{record}: missing {:?}, mistyped {:?}, unexpected {:?}",
            self.missing, self.mistyped, self.unexpected
        )))
    }
}
