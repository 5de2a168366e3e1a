use serde_json::Value;

/// A REST resource: where it lives and how its wire JSON maps to a model.
///
/// One implementation per resource type; generic clients and collections
/// take the implementation by value instead of subclassing a base model.
pub trait Resource {
    type Model;

    /// Path shared by the single-entity and list endpoints.
    fn resource_root(&self) -> &str;

    /// Wire response → model. Must be total: unknown or missing keys are
    /// never an error.
    fn parse(&self, response: &Value) -> Self::Model;

    /// Model → wire request body.
    fn serialize(&self, model: &Self::Model) -> Value;
}

/// A resource that can also be listed through a paginated endpoint.
pub trait CollectionResource: Resource {
    /// Raw entry list of a page response.
    fn entries(&self, response: &Value) -> Option<Value>;

    /// Raw pagination link descriptor of a page response.
    fn links(&self, response: &Value) -> Option<Value>;

    fn total(&self, response: &Value) -> Option<u64> {
        response.get("total").and_then(Value::as_u64)
    }

    fn parse_entry(&self, entry: &Value) -> Self::Model {
        self.parse(entry)
    }
}

/// Read access to a model's attributes by their internal name, used by
/// tables and dialogs to display any resource.
pub trait Record {
    fn attribute(&self, name: &str) -> Option<&Value>;
}
