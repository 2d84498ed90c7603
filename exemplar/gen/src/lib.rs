//! Exemplar sample generator library.
//!
//! This crate turns the recorded examples of an API description into
//! runnable TypeScript usage samples. The input is a normalized
//! [`CodeModel`](exemplar_define::CodeModel) from `exemplar-define`; the
//! output is, per operation, a program that declares one typed variable per
//! parameter, calls the operation on the client, and logs the result.
//!
//! ## Modules
//!
//! - [`codegen`] - Literal synthesis, parameter resolution, and sample assembly
//! - [`output`] - Walking a whole model, dry runs, and atomic file writing
//! - [`validation`] - Structural checks run before generation
//! - [`diagnostics`] - Sinks for data-shape problems found in examples
//! - [`config`] - Generator settings loaded from TOML
//! - [`naming`] - Casing transforms and literal escaping
//! - [`path`] - Dotted-path selection inside example values
//! - [`indented`] - Line writer tracking indentation
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use exemplar_define::CodeModel;
//! use exemplar_gen::config::GeneratorSettings;
//! use exemplar_gen::diagnostics::TracingSink;
//! use exemplar_gen::output::generate_samples;
//!
//! let model = CodeModel::from_path(Path::new("api.json")).unwrap();
//! let settings = GeneratorSettings::default();
//!
//! // dry_run=true prints the samples instead of writing them
//! let summary = generate_samples(&model, &settings, &TracingSink, Path::new("samples"), true).unwrap();
//! println!("{} samples", summary.samples);
//! ```
//!
//! ## Generated Sample Structure
//!
//! For `putWidget(widgetBody: Widget)` in the `widgets` group:
//!
//! ```text
//! const widgetBody: WidgetModels.Widget = {
//!   name: "acme",
//!   tags: [
//!     "a",
//!     "b"
//!   ]
//! };
//!
//! const widget = await client.widgets.putWidget(widgetBody);
//! console.log(widget);
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod indented;
pub mod naming;
pub mod output;
pub mod path;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
