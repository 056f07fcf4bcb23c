//! Sample code generation for endpoints.
//!
//! A stored sample from the document always wins for its language. For the
//! built-in languages the sample is synthesized from the endpoint record:
//! method, URL template with placeholder path parameters, a bearer-token
//! authorization header, and a request-body skeleton derived from the
//! resolved schema.

use crate::error::SearchError;
use crate::search::SearchIndex;
use crate::search::index::schema_ref_name;
use crate::spec::model::{EndpointRecord, HttpMethod, SchemaRecord};
use serde_json::{Value, json};

/// Placeholder base URL used in synthesized samples.
const BASE_URL: &str = "https://api.example.com";

type Generator = fn(&SampleContext) -> String;

/// Languages with a built-in generator, in presentation order.
const GENERATORS: &[(&str, Generator)] = &[
    ("curl", generate_curl),
    ("python", generate_python),
    ("javascript", generate_javascript),
    ("java", generate_java),
];

/// Pre-resolved pieces shared by every generator.
struct SampleContext {
    method: HttpMethod,
    url: String,
    body: Option<String>,
}

/// Produces sample code for an endpoint in the requested language.
///
/// Output is deterministic: the same index and arguments always yield the
/// same text.
pub fn generate_sample(
    index: &SearchIndex,
    record: &EndpointRecord,
    language: &str,
) -> Result<String, SearchError> {
    if let Some(stored) = record.stored_sample(language) {
        return Ok(stored.to_string());
    }

    let generator = GENERATORS
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
        .map(|&(_, generator)| generator)
        .ok_or_else(|| SearchError::UnsupportedLanguage {
            language: language.to_string(),
            supported: supported_languages(record),
        })?;

    let context = SampleContext {
        method: record.method,
        url: format!("{BASE_URL}{}", placeholder_path(&record.path)),
        body: body_skeleton(index, record)
            .map(|v| serde_json::to_string_pretty(&v).unwrap_or_default()),
    };
    Ok(generator(&context))
}

/// Built-in languages plus any languages with stored samples, sorted and
/// deduplicated.
fn supported_languages(record: &EndpointRecord) -> Vec<String> {
    let mut languages: Vec<String> = GENERATORS
        .iter()
        .map(|&(lang, _)| lang.to_string())
        .chain(record.samples.iter().map(|s| s.lang.to_lowercase()))
        .collect();
    languages.sort();
    languages.dedup();
    languages
}

/// Rewrites `{param}` template segments to `<param>` placeholders.
fn placeholder_path(path: &str) -> String {
    path.replace('{', "<").replace('}', ">")
}

/// Builds a minimal request-body value from the endpoint's declared schema:
/// one entry per property with a type-appropriate placeholder, in document
/// order. Endpoints without a resolvable object schema get no body.
fn body_skeleton(index: &SearchIndex, record: &EndpointRecord) -> Option<Value> {
    let body = record.request_body.as_ref()?;
    let schema = schema_ref_name(body).and_then(|name| index.schema_by_name(&name))?;
    Some(schema_skeleton(schema))
}

fn schema_skeleton(schema: &SchemaRecord) -> Value {
    let mut map = serde_json::Map::new();
    for property in &schema.properties {
        map.insert(
            property.name.clone(),
            placeholder_value(&property.prop_type),
        );
    }
    Value::Object(map)
}

fn placeholder_value(prop_type: &str) -> Value {
    match prop_type {
        "integer" | "number" => json!(0),
        "boolean" => json!(false),
        "array" => json!([]),
        "object" => json!({}),
        _ => json!("..."),
    }
}

fn generate_curl(ctx: &SampleContext) -> String {
    let mut out = format!(
        "curl -X {} '{}' \\\n  -H 'Authorization: Bearer <access_token>'",
        ctx.method, ctx.url
    );
    if let Some(body) = &ctx.body {
        out.push_str(" \\\n  -H 'Content-Type: application/json' \\\n  -d '");
        out.push_str(body);
        out.push('\'');
    }
    out.push('\n');
    out
}

fn generate_python(ctx: &SampleContext) -> String {
    let method = ctx.method.as_str().to_lowercase();
    let mut out = String::from("import requests\n\n");
    out.push_str(&format!("url = \"{}\"\n", ctx.url));
    out.push_str("headers = {\"Authorization\": \"Bearer <access_token>\"}\n");
    if let Some(body) = &ctx.body {
        out.push_str(&format!("payload = {body}\n\n"));
        out.push_str(&format!(
            "response = requests.{method}(url, headers=headers, json=payload)\n"
        ));
    } else {
        out.push_str(&format!(
            "\nresponse = requests.{method}(url, headers=headers)\n"
        ));
    }
    out.push_str("print(response.json())\n");
    out
}

fn generate_javascript(ctx: &SampleContext) -> String {
    let mut out = format!("const response = await fetch(\"{}\", {{\n", ctx.url);
    out.push_str(&format!("  method: \"{}\",\n", ctx.method));
    out.push_str("  headers: {\n    \"Authorization\": \"Bearer <access_token>\",\n");
    if let Some(body) = &ctx.body {
        out.push_str("    \"Content-Type\": \"application/json\",\n  },\n");
        out.push_str(&format!("  body: JSON.stringify({body}),\n"));
    } else {
        out.push_str("  },\n");
    }
    out.push_str("});\nconst data = await response.json();\nconsole.log(data);\n");
    out
}

fn generate_java(ctx: &SampleContext) -> String {
    let mut out = String::from("import java.net.URI;\nimport java.net.http.HttpClient;\n");
    out.push_str("import java.net.http.HttpRequest;\nimport java.net.http.HttpResponse;\n\n");
    out.push_str("HttpClient client = HttpClient.newHttpClient();\n");
    out.push_str("HttpRequest request = HttpRequest.newBuilder()\n");
    out.push_str(&format!("    .uri(URI.create(\"{}\"))\n", ctx.url));
    out.push_str("    .header(\"Authorization\", \"Bearer <access_token>\")\n");
    if let Some(body) = &ctx.body {
        let escaped = body.replace('\\', "\\\\").replace('"', "\\\"");
        let one_line: String = escaped.split_whitespace().collect::<Vec<_>>().join(" ");
        out.push_str("    .header(\"Content-Type\", \"application/json\")\n");
        out.push_str(&format!(
            "    .method(\"{}\", HttpRequest.BodyPublishers.ofString(\"{}\"))\n",
            ctx.method, one_line
        ));
    } else {
        out.push_str(&format!(
            "    .method(\"{}\", HttpRequest.BodyPublishers.noBody())\n",
            ctx.method
        ));
    }
    out.push_str("    .build();\n");
    out.push_str(
        "HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());\n",
    );
    out.push_str("System.out.println(response.body());\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::load_spec_str;
    use assert2::check;

    fn index() -> SearchIndex {
        let doc = r##"{
            "paths": {
                "/api/{serviceId}/client/create": {
                    "post": {
                        "operationId": "client_create_api",
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Client" }
                                }
                            }
                        },
                        "x-code-samples": [
                            { "lang": "Go", "source": "// stored go sample" }
                        ]
                    }
                }
            },
            "components": {
                "schemas": {
                    "Client": {
                        "type": "object",
                        "properties": {
                            "clientName": { "type": "string" },
                            "clientIdAliasEnabled": { "type": "boolean" },
                            "redirectUris": { "type": "array" }
                        }
                    }
                }
            }
        }"##;
        SearchIndex::build(load_spec_str(doc).unwrap()).unwrap()
    }

    #[test]
    fn curl_sample_has_method_url_auth_and_body() {
        let index = index();
        let record = index.endpoint_by_operation_id("client_create_api").unwrap();
        let sample = generate_sample(&index, record, "curl").unwrap();
        check!(sample.contains("curl -X POST"));
        check!(sample.contains("https://api.example.com/api/<serviceId>/client/create"));
        check!(sample.contains("Authorization: Bearer <access_token>"));
        check!(sample.contains("\"clientName\": \"...\""));
        check!(sample.contains("\"clientIdAliasEnabled\": false"));
        check!(sample.contains("\"redirectUris\": []"));
    }

    #[test]
    fn stored_sample_wins_over_synthesis() {
        let index = index();
        let record = index.endpoint_by_operation_id("client_create_api").unwrap();
        let sample = generate_sample(&index, record, "go").unwrap();
        check!(sample == "// stored go sample");
    }

    #[test]
    fn unsupported_language_lists_builtins_and_stored() {
        let index = index();
        let record = index.endpoint_by_operation_id("client_create_api").unwrap();
        let err = generate_sample(&index, record, "cobol").unwrap_err();
        let SearchError::UnsupportedLanguage { language, supported } = err else {
            panic!("expected UnsupportedLanguage");
        };
        check!(language == "cobol");
        check!(
            supported
                == vec![
                    "curl".to_string(),
                    "go".to_string(),
                    "java".to_string(),
                    "javascript".to_string(),
                    "python".to_string(),
                ]
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let index = index();
        let record = index.endpoint_by_operation_id("client_create_api").unwrap();
        let first = generate_sample(&index, record, "python").unwrap();
        let second = generate_sample(&index, record, "python").unwrap();
        check!(first == second);
    }
}
