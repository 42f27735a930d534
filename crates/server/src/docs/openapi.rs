//! OpenAPI document for the contact API.
//!
//! The document is modelled with a small set of OpenAPI 3.0 types, just
//! enough to describe the `/todos` routes and the `Contact` / `ContactInput`
//! schemas. [`document`] builds it; the docs route serializes it as JSON.

use indexmap::IndexMap;
use serde::Serialize;

/// API title shown in the documentation UI.
pub const API_TITLE: &str = "Contact API";
/// API version shown in the documentation UI.
pub const API_VERSION: &str = "1.0.0";

const OPENAPI_VERSION: &str = "3.0.0";
const CONTACTS_TAG: &str = "Contacts";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain";

/// Loose email shape accepted by the API.
pub const EMAIL_PATTERN: &str = r".+@.+\..+";

/// OpenAPI document root object.
#[derive(Debug, Clone, Serialize)]
pub struct OpenApi {
    /// OpenAPI version.
    pub openapi: String,
    /// API metadata.
    pub info: Info,
    /// Tags for API grouping.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// API paths and operations.
    pub paths: IndexMap<String, PathItem>,
    /// Reusable schemas.
    pub components: Components,
}

/// API metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// API tag for grouping operations.
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Operations available on a single path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PathItem {
    /// Parameters common to all operations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

/// An API operation.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code.
    pub responses: IndexMap<String, Response>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    Path,
}

/// An operation parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterIn,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    pub schema: Schema,
}

/// Request body.
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub required: bool,
    /// Content by media type.
    pub content: IndexMap<String, MediaType>,
}

/// Media type content.
#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    pub schema: Schema,
}

/// Response definition.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub description: String,
    /// Content by media type; empty for bodiless responses.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

/// Reusable components.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Components {
    pub schemas: IndexMap<String, Schema>,
}

/// JSON Schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Array,
    Object,
}

/// The subset of JSON Schema used by the contact API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "readOnly", skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Schema {
    fn string() -> Self {
        Self {
            schema_type: Some(SchemaType::String),
            ..Self::default()
        }
    }

    /// A required text field: at least one character.
    fn non_empty(example: &str) -> Self {
        Self {
            min_length: Some(1),
            example: Some(example.to_owned()),
            ..Self::string()
        }
    }

    fn uuid() -> Self {
        Self {
            format: Some("uuid".to_owned()),
            ..Self::string()
        }
    }

    fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("#/components/schemas/{name}")),
            ..Self::default()
        }
    }

    fn array_of(items: Self) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    fn object(properties: IndexMap<String, Self>) -> Self {
        Self {
            schema_type: Some(SchemaType::Object),
            required: properties.keys().cloned().collect(),
            properties,
            ..Self::default()
        }
    }
}

impl Operation {
    fn new(operation_id: &str, summary: &str) -> Self {
        Self {
            operation_id: operation_id.to_owned(),
            tags: vec![CONTACTS_TAG.to_owned()],
            summary: Some(summary.to_owned()),
            description: None,
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    fn with_contact_body(mut self) -> Self {
        self.request_body = Some(RequestBody {
            required: true,
            content: media(JSON, Schema::reference("ContactInput")),
        });
        self
    }

    fn respond(mut self, status: u16, response: Response) -> Self {
        self.responses.insert(status.to_string(), response);
        self
    }
}

impl Response {
    fn json(description: &str, schema: Schema) -> Self {
        Self {
            description: description.to_owned(),
            content: media(JSON, schema),
        }
    }

    fn text(description: &str) -> Self {
        Self {
            description: description.to_owned(),
            content: media(TEXT, Schema::string()),
        }
    }

    fn empty(description: &str) -> Self {
        Self {
            description: description.to_owned(),
            content: IndexMap::new(),
        }
    }
}

fn media(media_type: &str, schema: Schema) -> IndexMap<String, MediaType> {
    IndexMap::from([(media_type.to_owned(), MediaType { schema })])
}

fn contact_properties() -> IndexMap<String, Schema> {
    IndexMap::from([
        ("firstName".to_owned(), Schema::non_empty("Ana")),
        ("lastName".to_owned(), Schema::non_empty("Lee")),
        (
            "email".to_owned(),
            Schema {
                pattern: Some(EMAIL_PATTERN.to_owned()),
                example: Some("ana@example.com".to_owned()),
                ..Schema::string()
            },
        ),
        ("phone".to_owned(), Schema::non_empty("555-0100")),
    ])
}

/// Build the OpenAPI 3.0 document.
#[must_use]
pub fn document() -> OpenApi {
    let invalid_body = || Response::text("Missing field or malformed email");
    let storage_failure = || Response::text("Storage failure");

    let collection = PathItem {
        get: Some(
            Operation::new("listContacts", "List every contact")
                .respond(
                    200,
                    Response::json(
                        "All stored contacts",
                        Schema::array_of(Schema::reference("Contact")),
                    ),
                )
                .respond(500, storage_failure()),
        ),
        post: Some(
            Operation::new("createContact", "Create a contact")
                .with_contact_body()
                .respond(
                    201,
                    Response::json("The created contact", Schema::reference("Contact")),
                )
                .respond(400, invalid_body())
                .respond(500, storage_failure()),
        ),
        ..PathItem::default()
    };

    let item = PathItem {
        parameters: vec![Parameter {
            name: "id".to_owned(),
            location: ParameterIn::Path,
            description: Some("Contact identifier".to_owned()),
            required: true,
            schema: Schema::uuid(),
        }],
        put: Some(
            Operation::new("updateContact", "Replace every field of a contact")
                .with_contact_body()
                .respond(
                    200,
                    Response::json("The updated contact", Schema::reference("Contact")),
                )
                .respond(400, invalid_body())
                .respond(404, Response::text("Contact not found"))
                .respond(500, storage_failure()),
        ),
        delete: Some(Operation {
            description: Some("Succeeds whether or not the contact exists.".to_owned()),
            ..Operation::new("deleteContact", "Delete a contact")
                .respond(204, Response::empty("Contact deleted"))
                .respond(500, storage_failure())
        }),
        ..PathItem::default()
    };

    let mut stored = contact_properties();
    stored.shift_insert(
        0,
        "id".to_owned(),
        Schema {
            read_only: true,
            ..Schema::uuid()
        },
    );

    OpenApi {
        openapi: OPENAPI_VERSION.to_owned(),
        info: Info {
            title: API_TITLE.to_owned(),
            version: API_VERSION.to_owned(),
            description: Some("API for managing contacts".to_owned()),
        },
        tags: vec![Tag {
            name: CONTACTS_TAG.to_owned(),
            description: Some("Contact records".to_owned()),
        }],
        paths: IndexMap::from([
            ("/todos".to_owned(), collection),
            ("/todos/{id}".to_owned(), item),
        ]),
        components: Components {
            schemas: IndexMap::from([
                (
                    "ContactInput".to_owned(),
                    Schema::object(contact_properties()),
                ),
                ("Contact".to_owned(), Schema::object(stored)),
            ]),
        },
    }
}
