//! Typed narrative-method artifacts bundled with example modules.

use serde::Serialize;

use crate::domain::module_paths::EXAMPLE_METHOD;
use crate::domain::{AppError, ModuleSpec};

/// Narrative UI specification for a method (`spec.json`).
#[derive(Debug, Serialize)]
pub struct MethodSpec {
    pub ver: String,
    pub authors: Vec<String>,
    pub contact: String,
    pub visible: bool,
    pub categories: Vec<String>,
    pub widgets: WidgetMapping,
    pub parameters: Vec<MethodParameter>,
    pub behavior: MethodBehavior,
    pub job_id_output_field: String,
}

#[derive(Debug, Serialize)]
pub struct WidgetMapping {
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MethodParameter {
    pub id: String,
    pub optional: bool,
    pub advanced: bool,
    pub allow_multiple: bool,
    pub default_values: Vec<String>,
    pub field_type: String,
    pub text_options: TextOptions,
}

#[derive(Debug, Serialize)]
pub struct TextOptions {
    pub valid_ws_types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MethodBehavior {
    #[serde(rename = "service-mapping")]
    pub service_mapping: ServiceMapping,
}

#[derive(Debug, Serialize)]
pub struct ServiceMapping {
    pub url: String,
    pub name: String,
    pub method: String,
    pub input_mapping: Vec<InputMapping>,
    pub output_mapping: Vec<OutputMapping>,
}

#[derive(Debug, Serialize)]
pub struct InputMapping {
    pub input_parameter: String,
    pub target_property: String,
}

#[derive(Debug, Serialize)]
pub struct OutputMapping {
    pub service_method_output_path: Vec<String>,
    pub target_property: String,
}

/// Build the example method spec for a module request.
pub fn example_method_spec(spec: &ModuleSpec) -> MethodSpec {
    MethodSpec {
        ver: "1.0.0".to_string(),
        authors: spec.owner().map(|owner| vec![owner.to_string()]).unwrap_or_default(),
        contact: String::new(),
        visible: true,
        categories: vec!["active".to_string()],
        widgets: WidgetMapping { input: None, output: None },
        parameters: vec![MethodParameter {
            id: "contigset".to_string(),
            optional: false,
            advanced: false,
            allow_multiple: false,
            default_values: vec![String::new()],
            field_type: "text".to_string(),
            text_options: TextOptions {
                valid_ws_types: vec!["KBaseGenomes.ContigSet".to_string()],
            },
        }],
        behavior: MethodBehavior {
            service_mapping: ServiceMapping {
                url: String::new(),
                name: spec.name().to_string(),
                method: EXAMPLE_METHOD.to_string(),
                input_mapping: vec![InputMapping {
                    input_parameter: "contigset".to_string(),
                    target_property: "contigset_id".to_string(),
                }],
                output_mapping: vec![OutputMapping {
                    service_method_output_path: vec!["0".to_string()],
                    target_property: "contig_count".to_string(),
                }],
            },
        },
        job_id_output_field: "dockerjob".to_string(),
    }
}

/// Serialize the example method spec to pretty JSON.
pub fn example_spec_json(spec: &ModuleSpec) -> Result<String, AppError> {
    let method = example_method_spec(spec);
    serde_json::to_string_pretty(&method)
        .map_err(|err| AppError::Template(format!("Failed to serialize method spec: {}", err)))
}
