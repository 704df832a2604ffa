//! # Leaf Validator
//!
//! Runs every per-leaf check independently; one leaf can produce several
//! violations.
//!
//! | Kind | Rule |
//! |------|------|
//! | META | semantic/component leaves carry `meta`; a declared `meta.layer` matches the path layer |
//! | TYPO | the value does not contain `.aplha.` |
//! | RAW | semantic/component values are not raw color literals |
//! | REF | alias values resolve |
//! | POLICY | component aliases to primitives declare an allowed `exceptionCategory` |

use kiln_core::{is_raw_color, strip_alias, ExceptionCategory, Layer, TokenLeaf, TokenPath, TokenTree};

use crate::resolver::resolve_with_depth;
use crate::violation::{Violation, ViolationKind};

const ALPHA_TYPO: &str = ".aplha.";

/// Validate one leaf at `path`, resolving aliases against `tree` with at
/// most `max_depth` hops.
pub fn validate_leaf(
    tree: &TokenTree,
    path: &TokenPath,
    leaf: &TokenLeaf,
    max_depth: usize,
) -> Vec<Violation> {
    let layer = path.layer();
    let value = leaf.value_str();
    let alias_target = value.and_then(strip_alias);
    let mut violations = Vec::new();

    check_meta(path, leaf, layer, &mut violations);

    if let Some(v) = value.filter(|v| v.contains(ALPHA_TYPO)) {
        violations.push(Violation::new(
            ViolationKind::Typo,
            path.clone(),
            format!("'{ALPHA_TYPO}' found => {v} (did you mean '.alpha.'?)"),
        ));
    }

    if layer.is_governed() {
        if let Some(v) = value.filter(|v| is_raw_color(v)) {
            violations.push(Violation::new(
                ViolationKind::Raw,
                path.clone(),
                format!("raw color forbidden in {layer} layer => {v}"),
            ));
        }
    }

    if let (Some(target), Some(v)) = (alias_target, value) {
        if let Err(reason) = resolve_with_depth(tree, &TokenPath::parse(target), max_depth) {
            violations.push(Violation::new(
                ViolationKind::Ref,
                path.clone(),
                format!("unresolved ref => {v} ({reason})"),
            ));
        }
    }

    if layer == Layer::Component {
        if let Some(target) = alias_target.map(TokenPath::parse) {
            if target.is_primitive() {
                check_primitive_exception(path, leaf, &target, &mut violations);
            }
        }
    }

    violations
}

fn check_meta(path: &TokenPath, leaf: &TokenLeaf, layer: Layer, out: &mut Vec<Violation>) {
    if layer.is_governed() && leaf.meta.is_none() {
        out.push(Violation::new(ViolationKind::Meta, path.clone(), "missing meta"));
    }

    if let Some(declared) = leaf.declared_layer() {
        if layer != Layer::Unknown && declared != layer.as_str() {
            out.push(Violation::new(
                ViolationKind::Meta,
                path.clone(),
                format!("meta.layer mismatch (meta.layer={declared}, pathLayer={layer})"),
            ));
        }
    }
}

fn check_primitive_exception(
    path: &TokenPath,
    leaf: &TokenLeaf,
    target: &TokenPath,
    out: &mut Vec<Violation>,
) {
    match leaf.exception_category() {
        None => out.push(Violation::new(
            ViolationKind::Policy,
            path.clone(),
            format!(
                "component references primitive {target} directly without exceptionCategory"
            ),
        )),
        Some(category) => {
            if category.parse::<ExceptionCategory>().is_err() {
                out.push(Violation::new(
                    ViolationKind::Policy,
                    path.clone(),
                    format!("unknown exceptionCategory (exceptionCategory={category})"),
                ));
            }
        }
    }
}
