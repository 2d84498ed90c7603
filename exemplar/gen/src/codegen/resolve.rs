//! Parameter resolution against recorded examples.
//!
//! Examples are recorded against the wire shape of an operation, while the
//! generated method may accept flattened parameters that never appear at
//! the top level of an example. Resolution therefore tries an ordered list
//! of [`Lookup`] strategies and stops at the first one that finds a value:
//!
//! 1. [`Lookup::Direct`] - the parameter's wire name in the example
//! 2. [`Lookup::Flattened`] - for each declared transformation, the
//!    original parameter's value, then the parameter's own wire name inside it
//!
//! Transformations are a single level of indirection; they are never
//! chained.

use exemplar_define::{Example, Operation, Parameter, ParameterTransformation};
use serde_json::Value;

use crate::path;

/// A strategy for locating a parameter's example value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Top-level lookup by the parameter's wire name.
    Direct,
    /// Lookup inside the value recorded for a transformation's original parameter.
    Flattened(&'a ParameterTransformation),
}

impl<'a> Lookup<'a> {
    /// Strategies for `operation`, in evaluation order.
    pub fn candidates(operation: &'a Operation) -> impl Iterator<Item = Lookup<'a>> {
        std::iter::once(Lookup::Direct).chain(operation.transformations.iter().map(Lookup::Flattened))
    }

    /// Applies this strategy.
    ///
    /// A direct hit on an explicit JSON null counts as found; a flattened
    /// selection must be non-null.
    pub fn apply(self, parameter: &Parameter, example: &'a Example) -> Option<&'a Value> {
        match self {
            Lookup::Direct => example.parameter(&parameter.serialized_name),
            Lookup::Flattened(transformation) => example
                .parameter(&transformation.original_name)
                .and_then(|original| path::select(original, &parameter.serialized_name))
                .filter(|value| !value.is_null()),
        }
    }
}

/// An example value located for a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub value: &'a Value,
    pub strategy: Lookup<'a>,
}

/// Locates the example value for one formal parameter.
///
/// ## Examples
///
/// ```
/// use exemplar_define::{Example, ModelType, Operation, Parameter, ParameterTransformation};
/// use exemplar_gen::codegen::resolve::{resolve_parameter, Lookup};
/// use serde_json::json;
///
/// let mut op = Operation::new("update", vec![Parameter::required("p", ModelType::int())]);
/// op.transformations.push(ParameterTransformation::new("p", "orig"));
///
/// let example = Example::new("e", json!({ "orig": { "p": 42 } }));
/// let resolved = resolve_parameter(&op, &op.parameters[0], &example).unwrap();
///
/// assert_eq!(resolved.value, &json!(42));
/// assert!(matches!(resolved.strategy, Lookup::Flattened(_)));
/// ```
pub fn resolve_parameter<'a>(
    operation: &'a Operation,
    parameter: &Parameter,
    example: &'a Example,
) -> Option<Resolved<'a>> {
    Lookup::candidates(operation).find_map(|strategy| {
        strategy
            .apply(parameter, example)
            .map(|value| Resolved { value, strategy })
    })
}

/// A formal parameter paired with its resolved example value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedArgument<'a> {
    pub parameter: &'a Parameter,
    pub resolved: Resolved<'a>,
}

/// A required parameter that no strategy could resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParameter {
    pub operation: String,
    pub parameter: String,
}

/// Resolves every formal parameter of `operation` in declaration order.
///
/// Unresolved optional parameters are left out of the result.
///
/// ## Errors
///
/// Returns the first required parameter that could not be resolved; the
/// example cannot produce a usable call.
pub fn resolve_arguments<'a>(
    operation: &'a Operation,
    example: &'a Example,
) -> Result<Vec<ResolvedArgument<'a>>, MissingParameter> {
    let mut arguments = Vec::with_capacity(operation.parameters.len());

    for parameter in &operation.parameters {
        match resolve_parameter(operation, parameter, example) {
            Some(resolved) => arguments.push(ResolvedArgument {
                parameter,
                resolved,
            }),
            None if parameter.required => {
                return Err(MissingParameter {
                    operation: operation.name.clone(),
                    parameter: parameter.serialized_name.clone(),
                });
            }
            None => {
                tracing::trace!(
                    operation = %operation.name,
                    parameter = %parameter.serialized_name,
                    "Optional parameter not in example"
                );
            }
        }
    }

    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exemplar_define::ModelType;
    use serde_json::json;

    fn flattened_op() -> Operation {
        let mut op = Operation::new(
            "createAccount",
            vec![
                Parameter::required("resourceGroupName", ModelType::string()),
                Parameter::required("location", ModelType::string()),
                Parameter::optional("kind", ModelType::string()),
            ],
        );
        op.transformations = vec![
            ParameterTransformation::new("location", "parameters"),
            ParameterTransformation::new("kind", "parameters"),
        ];
        op
    }

    #[test]
    fn direct_lookup_wins() {
        let op = flattened_op();
        let example = Example::new(
            "e",
            json!({ "location": "top", "parameters": { "location": "nested" } }),
        );
        let resolved = resolve_parameter(&op, &op.parameters[1], &example).unwrap();
        assert_eq!(resolved.value, &json!("top"));
        assert_eq!(resolved.strategy, Lookup::Direct);
    }

    #[test]
    fn direct_null_counts_as_found() {
        let op = flattened_op();
        let example = Example::new("e", json!({ "location": null }));
        let resolved = resolve_parameter(&op, &op.parameters[1], &example).unwrap();
        assert!(resolved.value.is_null());
    }

    #[test]
    fn flattened_lookup_selects_own_wire_name() {
        let mut op = Operation::new("put", vec![Parameter::required("p", ModelType::int())]);
        op.transformations
            .push(ParameterTransformation::new("p", "orig"));
        let example = Example::new("e", json!({ "orig": { "p": 42 } }));

        let resolved = resolve_parameter(&op, &op.parameters[0], &example).unwrap();
        assert_eq!(resolved.value, &json!(42));
    }

    #[test]
    fn first_successful_transformation_wins() {
        let mut op = Operation::new("put", vec![Parameter::required("p", ModelType::int())]);
        op.transformations = vec![
            ParameterTransformation::new("p", "missing"),
            ParameterTransformation::new("p", "first"),
            ParameterTransformation::new("p", "second"),
        ];
        let example = Example::new("e", json!({ "first": { "p": 1 }, "second": { "p": 2 } }));

        let resolved = resolve_parameter(&op, &op.parameters[0], &example).unwrap();
        assert_eq!(resolved.value, &json!(1));
        match resolved.strategy {
            Lookup::Flattened(t) => assert_eq!(t.original_name, "first"),
            other => panic!("Expected flattened lookup, got: {:?}", other),
        }
    }

    #[test]
    fn null_flattened_selection_falls_through() {
        let mut op = Operation::new("put", vec![Parameter::required("p", ModelType::int())]);
        op.transformations = vec![
            ParameterTransformation::new("p", "first"),
            ParameterTransformation::new("p", "second"),
        ];
        let example = Example::new("e", json!({ "first": { "p": null }, "second": { "p": 2 } }));

        let resolved = resolve_parameter(&op, &op.parameters[0], &example).unwrap();
        assert_eq!(resolved.value, &json!(2));
    }

    #[test]
    fn transformations_are_not_chained() {
        // "outer" holds "orig" which holds "p": two levels, never followed.
        let mut op = Operation::new("put", vec![Parameter::required("p", ModelType::int())]);
        op.transformations = vec![
            ParameterTransformation::new("orig", "outer"),
            ParameterTransformation::new("p", "orig"),
        ];
        let example = Example::new("e", json!({ "outer": { "orig": { "p": 1 } } }));

        assert!(resolve_parameter(&op, &op.parameters[0], &example).is_none());
    }

    #[test]
    fn resolve_arguments_skips_missing_optional() {
        let op = flattened_op();
        let example = Example::new(
            "e",
            json!({ "resourceGroupName": "rg", "parameters": { "location": "westus" } }),
        );

        let args = resolve_arguments(&op, &example).unwrap();
        let names: Vec<_> = args.iter().map(|a| a.parameter.name.as_str()).collect();
        assert_eq!(names, vec!["resourceGroupName", "location"]);
    }

    #[test]
    fn resolve_arguments_reports_missing_required() {
        let op = flattened_op();
        let example = Example::new("e", json!({ "parameters": { "location": "westus" } }));

        let err = resolve_arguments(&op, &example).unwrap_err();
        assert_eq!(
            err,
            MissingParameter {
                operation: "createAccount".to_string(),
                parameter: "resourceGroupName".to_string(),
            }
        );
    }

    #[test]
    fn candidates_list_direct_first() {
        let op = flattened_op();
        let candidates: Vec<_> = Lookup::candidates(&op).collect();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], Lookup::Direct);
    }
}
