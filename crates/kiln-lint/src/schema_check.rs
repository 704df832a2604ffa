//! # Schema Cross-Checker
//!
//! For each component declared in the schema, walks
//! `color.component.<name>[.<variant>][.<subpart>]` and checks the two
//! levels below it: first-level keys are properties, second-level keys are
//! states. A key outside the subpart's allow-list is reported only when its
//! subtree holds at least one leaf.
//!
//! Components, variants, and subparts with no subtree in the token document
//! are skipped. A component that matches nothing is logged at `warn` so a
//! misspelled schema entry is visible, but it does not fail the lint.

use kiln_core::{ComponentSpec, Node, SchemaDocument, TokenPath, TokenTree, DEFAULT_SUBPART};

use crate::violation::{Violation, ViolationKind};

/// Cross-check every schema component against the token tree.
pub fn check_schema(tree: &TokenTree, schema: &SchemaDocument) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (name, spec) in &schema.components {
        let component_path = TokenPath::from_segments(["color", "component", name.as_str()]);
        if tree.get_by_path(&component_path).is_none() {
            tracing::warn!(
                component = %name,
                "schema component has no tokens under {component_path}; skipped"
            );
            continue;
        }
        tracing::debug!(component = %name, "checking component against schema");
        check_component(tree, &component_path, spec, &mut violations);
    }

    violations
}

fn check_component(
    tree: &TokenTree,
    component_path: &TokenPath,
    spec: &ComponentSpec,
    out: &mut Vec<Violation>,
) {
    for variant in spec.variants() {
        for subpart in spec.subparts() {
            let variant = variant.filter(|v| !v.is_empty());
            let subpart = subpart.filter(|s| !s.is_empty());

            let mut base = component_path.clone();
            if let Some(v) = variant {
                base = base.child(v);
            }
            if let Some(s) = subpart {
                base = base.child(s);
            }

            let Some(base_node) = tree.get_by_path(&base) else {
                tracing::trace!(path = %base, "no tokens for combination");
                continue;
            };

            let subpart_key = subpart.unwrap_or(DEFAULT_SUBPART);
            check_properties(
                &base,
                base_node,
                spec.allowed_properties(subpart_key),
                spec.allowed_states(subpart_key),
                out,
            );
        }
    }
}

fn check_properties(
    base: &TokenPath,
    base_node: &Node,
    allowed_properties: &[String],
    allowed_states: &[String],
    out: &mut Vec<Violation>,
) {
    for (property, property_node) in base_node.children().into_iter().flatten() {
        let property_path = base.child(property);
        if !allowed_properties.contains(property) && property_node.contains_leaf() {
            out.push(Violation::new(
                ViolationKind::Schema,
                property_path.clone(),
                format!("property not allowed (allowed: {})", allowed_properties.join(",")),
            ));
        }

        for (state, state_node) in property_node.children().into_iter().flatten() {
            if !allowed_states.contains(state) && state_node.contains_leaf() {
                out.push(Violation::new(
                    ViolationKind::Schema,
                    property_path.child(state),
                    format!("state not allowed (allowed: {})", allowed_states.join(",")),
                ));
            }
        }
    }
}
