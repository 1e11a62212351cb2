//! Schema evolution rules.

use std::collections::BTreeMap;

use crate::compat::snapshot::{FieldDescriptor, SchemaSnapshot};
use crate::config::violation::{Violation, ViolationKind};

/// Policy knobs for the compatibility pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatPolicy {
    /// Accept removal (or demotion) of a required field when the new
    /// snapshot carries a greater major version.
    pub allow_removal_with_major_bump: bool,
}

impl Default for CompatPolicy {
    fn default() -> Self {
        CompatPolicy {
            allow_removal_with_major_bump: true,
        }
    }
}

/// Compares two snapshots with the default policy.
pub fn check_compat(old: &SchemaSnapshot, new: &SchemaSnapshot) -> Vec<Violation> {
    check_compat_with(old, new, CompatPolicy::default())
}

/// Compares two snapshots and reports every evolution-rule violation.
///
/// Neither snapshot is mutated; violations come out in old-snapshot field
/// order, followed by new-field checks in new-snapshot order.
pub fn check_compat_with(
    old: &SchemaSnapshot,
    new: &SchemaSnapshot,
    policy: CompatPolicy,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let new_by_path: BTreeMap<&str, &FieldDescriptor> =
        new.fields.iter().map(|f| (f.path.as_str(), f)).collect();
    let major_bumped = new.major_version > old.major_version;

    for old_field in &old.fields {
        match new_by_path.get(old_field.path.as_str()) {
            None => {
                if old_field.required
                    && !(policy.allow_removal_with_major_bump && major_bumped)
                {
                    violations.push(Violation::new(
                        old_field.path.clone(),
                        ViolationKind::RequiredFieldRemovedWithoutVersionBump,
                        "required field was removed without a major version bump",
                    ));
                }
                // Optional fields may be dropped; old documents carrying
                // them decode as unknown fields.
            }
            Some(new_field) => {
                if new_field.number != old_field.number {
                    violations.push(Violation::new(
                        old_field.path.clone(),
                        ViolationKind::FieldNumberChanged,
                        format!(
                            "field number changed from {} to {}",
                            old_field.number, new_field.number
                        ),
                    ));
                }
                if !old_field.field_type.compatible_with(new_field.field_type) {
                    violations.push(Violation::new(
                        old_field.path.clone(),
                        ViolationKind::IncompatibleWireTypeChange,
                        format!(
                            "field type changed incompatibly from {:?} to {:?}",
                            old_field.field_type, new_field.field_type
                        ),
                    ));
                }
                if old_field.required
                    && !new_field.required
                    && !(policy.allow_removal_with_major_bump && major_bumped)
                {
                    violations.push(Violation::new(
                        old_field.path.clone(),
                        ViolationKind::RequiredFieldRemovedWithoutVersionBump,
                        "field is no longer required-by-convention",
                    ));
                }
            }
        }
    }

    for new_field in &new.fields {
        let is_new = !old.fields.iter().any(|f| f.path == new_field.path);
        if is_new && new_field.required {
            violations.push(Violation::new(
                new_field.path.clone(),
                ViolationKind::NewFieldMarkedRequired,
                "new fields must be optional so old documents keep decoding",
            ));
        }
    }

    violations
}
