//! Shared test utilities for exemplar-gen tests.
//!
//! This module provides common helper functions for creating test fixtures
//! across the codebase, reducing duplication and ensuring consistency.

use exemplar_define::{
    CodeModel, CompositeType, EnumType, Example, ModelFamily, ModelType, Operation, OperationGroup,
    Parameter, Property, ReturnType,
};
use serde_json::json;

/// Creates a `WidgetClient` model with a `Widget` composite and `Color` enum.
///
/// `Widget` declares, in order:
/// - `name` (required string)
/// - `tags` (optional sequence of strings)
/// - `color` (optional `Color` enum)
pub fn widget_model() -> CodeModel {
    let mut model = CodeModel::new("WidgetClient", ModelFamily::TypeScript);
    model.model_types.push(CompositeType::new(
        "Widget",
        vec![
            Property::required("name", ModelType::string()),
            Property::optional("tags", ModelType::sequence(ModelType::string())),
            Property::optional("color", ModelType::enumeration("Color")),
        ],
    ));
    model.enum_types.push(EnumType::new(
        "Color",
        vec!["red".to_string(), "blue".to_string()],
    ));
    model
}

/// Creates `putWidget(widgetBody: Widget)` returning `Widget`, without examples.
pub fn put_widget() -> Operation {
    let mut op = Operation::new(
        "putWidget",
        vec![Parameter::required(
            "widgetBody",
            ModelType::composite("Widget"),
        )],
    );
    op.return_type = ReturnType::body("Widget");
    op
}

/// Creates the widget model with `putWidget` at the top level and a
/// `widgets` group holding `getWidget`, each carrying examples.
///
/// `putWidget` has one complete example and one missing `widgetBody`.
pub fn widget_model_with_examples() -> CodeModel {
    let mut model = widget_model();

    let mut put = put_widget();
    put.examples = vec![
        Example::new("CreateWidget", json!({ "widgetBody": { "name": "acme" } }))
            .with_title("Create a widget"),
        Example::new("Broken", json!({ "unrelated": true })),
    ];

    let mut get = Operation::new(
        "getWidget",
        vec![Parameter::required("widgetName", ModelType::string())],
    );
    get.return_type = ReturnType::body("Widget");
    get.examples = vec![Example::new("GetWidget", json!({ "widgetName": "acme" }))];

    model.operation_groups = vec![
        OperationGroup::top_level(vec![put]),
        OperationGroup::new("widgets", vec![get]),
    ];
    model
}
