//! Schema descriptors for tool input and output
//!
//! A [`SchemaDescriptor`] is a small declarative shape: primitives, objects with
//! required/optional fields, or a free-form placeholder. It validates JSON values
//! structurally and renders itself as a JSON-Schema document for the tool catalog.
//!
//! Validation is permissive by default: unknown fields on objects are ignored and
//! primitives are checked by kind only.

use flowpilot_core::ValidationFailure;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Path reported for failures on the root value
pub const ROOT_PATH: &str = "$";

/// Declarative description of an input or output shape
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaDescriptor {
    /// JSON string
    String { description: Option<String> },
    /// JSON number (integer or float)
    Number { description: Option<String> },
    /// JSON boolean
    Boolean { description: Option<String> },
    /// JSON object with declared fields
    Object(ObjectSchema),
    /// Free-form placeholder, accepts any value
    Any { description: Option<String> },
}

/// A single declared field of an object schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub required: bool,
    pub schema: SchemaDescriptor,
}

/// Object node: an ordered list of uniquely named fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    description: Option<String>,
    fields: Vec<Field>,
}

/// Create a string schema
pub fn string(description: &str) -> SchemaDescriptor {
    SchemaDescriptor::String {
        description: describe(description),
    }
}

/// Create a number schema
pub fn number(description: &str) -> SchemaDescriptor {
    SchemaDescriptor::Number {
        description: describe(description),
    }
}

/// Create a boolean schema
pub fn boolean(description: &str) -> SchemaDescriptor {
    SchemaDescriptor::Boolean {
        description: describe(description),
    }
}

/// Create a free-form schema
pub fn any(description: &str) -> SchemaDescriptor {
    SchemaDescriptor::Any {
        description: describe(description),
    }
}

/// Start an object schema
///
/// # Example
///
/// ```
/// use flowpilot_tools::schema::{self, SchemaDescriptor};
/// use serde_json::json;
///
/// let schema: SchemaDescriptor = schema::object("A calendar event")
///     .required("task", schema::string("Event title"))
///     .optional("notes", schema::string("Free text"))
///     .into();
///
/// assert!(schema.validate(&json!({"task": "Standup"})).is_ok());
/// assert!(schema.validate(&json!({"notes": "daily"})).is_err());
/// ```
pub fn object(description: &str) -> ObjectSchema {
    ObjectSchema {
        description: describe(description),
        fields: Vec::new(),
    }
}

fn describe(description: &str) -> Option<String> {
    if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}

impl ObjectSchema {
    /// Declare a required field
    pub fn required(self, name: impl Into<String>, schema: SchemaDescriptor) -> Self {
        self.field(name, true, schema)
    }

    /// Declare an optional field
    pub fn optional(self, name: impl Into<String>, schema: SchemaDescriptor) -> Self {
        self.field(name, false, schema)
    }

    /// Declare a field; re-declaring a name replaces the earlier field in place
    pub fn field(mut self, name: impl Into<String>, required: bool, schema: SchemaDescriptor) -> Self {
        let field = Field {
            name: name.into(),
            required,
            schema,
        };
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Declared fields in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a declared field
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Object description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn check(&self, value: &Value, path: &str, failures: &mut Vec<ValidationFailure>) {
        let Some(map) = value.as_object() else {
            failures.push(mismatch(path, "object", value));
            return;
        };

        for field in &self.fields {
            let child = child_path(path, &field.name);
            match map.get(&field.name) {
                Some(v) => field.schema.check(v, &child, failures),
                None if field.required => {
                    failures.push(ValidationFailure::new(child, "missing required field"));
                }
                None => {}
            }
        }
    }

    fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for field in &self.fields {
            properties.insert(field.name.clone(), field.schema.to_json_schema());
            if field.required {
                required.push(Value::String(field.name.clone()));
            }
        }

        let mut schema = json!({
            "type": "object",
            "properties": properties,
            "required": required,
        });
        if let Some(d) = &self.description {
            schema["description"] = json!(d);
        }
        schema
    }
}

impl From<ObjectSchema> for SchemaDescriptor {
    fn from(object: ObjectSchema) -> Self {
        Self::Object(object)
    }
}

impl SchemaDescriptor {
    /// An object schema with no fields, used by tools that take no input
    pub fn empty_object(description: &str) -> Self {
        object(description).into()
    }

    /// Validate a value against this schema
    ///
    /// Every failure is reported, in declaration order. Descriptions never affect the
    /// outcome.
    pub fn validate(&self, value: &Value) -> Result<(), Vec<ValidationFailure>> {
        let mut failures = Vec::new();
        self.check(value, ROOT_PATH, &mut failures);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    /// Whether this is an object schema without fields
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(o) if o.fields.is_empty())
    }

    /// Node description, if any
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::String { description }
            | Self::Number { description }
            | Self::Boolean { description }
            | Self::Any { description } => description.as_deref(),
            Self::Object(o) => o.description(),
        }
    }

    /// Render as a JSON-Schema document
    pub fn to_json_schema(&self) -> Value {
        let (mut schema, description) = match self {
            Self::String { description } => (json!({"type": "string"}), description),
            Self::Number { description } => (json!({"type": "number"}), description),
            Self::Boolean { description } => (json!({"type": "boolean"}), description),
            Self::Any { description } => (json!({}), description),
            Self::Object(o) => return o.to_json_schema(),
        };
        if let Some(d) = description {
            schema["description"] = json!(d);
        }
        schema
    }

    fn check(&self, value: &Value, path: &str, failures: &mut Vec<ValidationFailure>) {
        match self {
            Self::String { .. } if !value.is_string() => {
                failures.push(mismatch(path, "string", value));
            }
            Self::Number { .. } if !value.is_number() => {
                failures.push(mismatch(path, "number", value));
            }
            Self::Boolean { .. } if !value.is_boolean() => {
                failures.push(mismatch(path, "boolean", value));
            }
            Self::Object(o) => o.check(value, path, failures),
            _ => {}
        }
    }
}

impl Serialize for SchemaDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_schema().serialize(serializer)
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent == ROOT_PATH {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn mismatch(path: &str, expected: &str, found: &Value) -> ValidationFailure {
    ValidationFailure::new(path, format!("expected {expected}, found {}", kind_of(found)))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notion_task() -> SchemaDescriptor {
        object("Input parameters for creating a Notion task")
            .required("task", string("Task description"))
            .required("status", string("Task status (e.g., doing, todo, done)"))
            .required("date", string("Due date for the task"))
            .into()
    }

    #[test]
    fn test_valid_object() {
        let schema = notion_task();
        let input = json!({"task": "Review PR", "status": "todo", "date": "2024-01-01"});

        assert!(schema.validate(&input).is_ok());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let schema = notion_task();
        let failures = schema.validate(&json!({"task": "x"})).unwrap_err();

        let paths: Vec<_> = failures.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["status", "date"]);
        assert!(failures.iter().all(|f| f.reason == "missing required field"));
    }

    #[test]
    fn test_kind_mismatch() {
        let schema = notion_task();
        let failures = schema
            .validate(&json!({"task": 7, "status": "todo", "date": null}))
            .unwrap_err();

        assert_eq!(
            failures,
            vec![
                ValidationFailure::new("task", "expected string, found number"),
                ValidationFailure::new("date", "expected string, found null"),
            ]
        );
    }

    #[test]
    fn test_root_must_be_object() {
        let failures = notion_task().validate(&json!(["task"])).unwrap_err();

        assert_eq!(
            failures,
            vec![ValidationFailure::new(ROOT_PATH, "expected object, found array")]
        );
    }

    #[test]
    fn test_empty_object_accepts_any_object() {
        let schema = SchemaDescriptor::empty_object("No input required");

        assert!(schema.is_empty_object());
        assert!(schema.validate(&json!({})).is_ok());
        assert!(schema.validate(&json!({"unexpected": true, "n": 3})).is_ok());
        assert!(schema.validate(&json!("text")).is_err());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let input = json!({"task": "a", "status": "b", "date": "c", "priority": "high"});

        assert!(notion_task().validate(&input).is_ok());
    }

    #[test]
    fn test_optional_fields() {
        let schema: SchemaDescriptor = object("")
            .optional("meetingTitle", string("Meeting title"))
            .into();

        assert!(schema.validate(&json!({})).is_ok());
        assert!(schema.validate(&json!({"meetingTitle": "Weekly sync"})).is_ok());

        let failures = schema.validate(&json!({"meetingTitle": false})).unwrap_err();
        assert_eq!(failures[0].path, "meetingTitle");
    }

    #[test]
    fn test_nested_paths() {
        let schema: SchemaDescriptor = object("")
            .required(
                "event",
                object("").required("start", number("Unix time")).into(),
            )
            .into();

        let failures = schema
            .validate(&json!({"event": {"start": "tomorrow"}}))
            .unwrap_err();
        assert_eq!(failures[0].path, "event.start");

        let failures = schema.validate(&json!({"event": {}})).unwrap_err();
        assert_eq!(failures[0].path, "event.start");
    }

    #[test]
    fn test_dotted_field_name_is_not_escaped() {
        let schema: SchemaDescriptor = object("").required("event.start", number("")).into();

        let failures = schema.validate(&json!({})).unwrap_err();
        assert_eq!(failures[0].path, "event.start");
    }

    #[test]
    fn test_primitives_and_any() {
        assert!(string("").validate(&json!("ok")).is_ok());
        assert!(number("").validate(&json!(2.5)).is_ok());
        assert!(boolean("").validate(&json!(false)).is_ok());
        assert!(boolean("").validate(&json!("false")).is_err());
        assert!(any("").validate(&Value::Null).is_ok());
        assert!(any("").validate(&json!({"a": [1, 2]})).is_ok());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let schema = notion_task();
        let input = json!({"task": 1});

        assert_eq!(schema.validate(&input), schema.validate(&input));
    }

    #[test]
    fn test_descriptions_do_not_affect_validation() {
        let described: SchemaDescriptor = object("with docs")
            .required("text", string("The text to convert to speech"))
            .into();
        let bare: SchemaDescriptor = object("").required("text", string("")).into();

        for input in [json!({"text": "hi"}), json!({}), json!({"text": 1})] {
            assert_eq!(described.validate(&input), bare.validate(&input));
        }
    }

    #[test]
    fn test_redeclared_field_replaces_in_place() {
        let schema = object("")
            .required("a", string(""))
            .required("b", string(""))
            .optional("a", number(""));

        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.fields()[0].name, "a");
        assert!(!schema.get("a").unwrap().required);
    }

    #[test]
    fn test_json_schema_rendering() {
        let rendered = notion_task().to_json_schema();

        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["properties"]["task"]["type"], "string");
        assert_eq!(rendered["properties"]["task"]["description"], "Task description");
        assert_eq!(rendered["required"], json!(["task", "status", "date"]));
        assert_eq!(
            rendered["description"],
            "Input parameters for creating a Notion task"
        );

        assert_eq!(string("").to_json_schema(), json!({"type": "string"}));
        assert_eq!(any("Free form").to_json_schema(), json!({"description": "Free form"}));
        assert_eq!(serde_json::to_value(number("n")).unwrap(), json!({"type": "number", "description": "n"}));
    }
}
