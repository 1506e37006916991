//! Conditional-visibility resolution.
//!
//! A parameter is either always shown or shown only while another parameter
//! in the same endpoint holds a specific value. Every consumer (the IR
//! builder, the Postman exporter, the test invoker) resolves visibility
//! through [`is_active`]; nothing reimplements the check.

use crate::docs::{Parameter, Visibility};

/// Whether `param` is currently active given every parameter of its endpoint.
///
/// `always` parameters are active. A `conditionally` parameter is active iff
/// its referenced parameter exists (first match by name, any location) and
/// that parameter's current value equals the condition value by string
/// equality. A missing or empty condition field, a reference to a
/// nonexistent parameter, or a self-reference all resolve to inactive,
/// never to an error.
pub fn is_active(param: &Parameter, all_params: &[Parameter]) -> bool {
    if param.visibility == Visibility::Always {
        return true;
    }

    let (Some(cond_name), Some(cond_value)) = (
        param.visibility_condition_param_name.as_deref(),
        param.visibility_condition_value.as_deref(),
    ) else {
        return false;
    };

    if cond_name.is_empty() || cond_name == param.name {
        return false;
    }

    all_params
        .iter()
        .find(|candidate| candidate.name == cond_name)
        .is_some_and(|candidate| candidate.value == cond_value)
}

/// Active parameters of one location, preserving the original order
pub fn active_in_location<'a>(
    all_params: &'a [Parameter],
    location: crate::docs::ParameterLocation,
) -> Vec<&'a Parameter> {
    all_params
        .iter()
        .filter(|p| p.location == location && is_active(p, all_params))
        .collect()
}
