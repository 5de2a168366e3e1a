use {
    super::error::ConsoleError,
    super::resource::{CollectionResource, Record, Resource},
    chrono::{DateTime, NaiveDate, Utc},
    derive_more::Display,
    serde_json::{Map, Value},
};

/// REST root of the activity log, used for both single entries and pages.
pub const ACTIVITIES_ROOT: &str = "/tps/rest/activities";

/// The seven activity fields, each with an internal attribute name and a
/// wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ActivityField {
    #[display("id")]
    Id,
    #[display("tokenID")]
    TokenId,
    #[display("userID")]
    UserId,
    #[display("ip")]
    Ip,
    #[display("operation")]
    Operation,
    #[display("result")]
    Result,
    #[display("date")]
    Date,
}

impl ActivityField {
    pub const ALL: [ActivityField; 7] = [
        Self::Id,
        Self::TokenId,
        Self::UserId,
        Self::Ip,
        Self::Operation,
        Self::Result,
        Self::Date,
    ];

    pub fn attribute_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::TokenId => "tokenID",
            Self::UserId => "userID",
            Self::Ip => "ip",
            Self::Operation => "operation",
            Self::Result => "result",
            Self::Date => "date",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::TokenId => "TokenID",
            Self::UserId => "UserID",
            Self::Ip => "IP",
            Self::Operation => "Operation",
            Self::Result => "Result",
            Self::Date => "Date",
        }
    }

    /// All attribute names in display order.
    pub fn attribute_names() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|f| f.attribute_name().to_string())
            .collect()
    }
}

impl TryFrom<&str> for ActivityField {
    type Error = ConsoleError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|f| f.attribute_name() == s)
            .ok_or_else(|| ConsoleError::UnknownField(s.to_string()))
    }
}

/// One audit-log entry.
///
/// `None` means the key was absent; `Some(Value::Null)` means it was present
/// with a null value. Values are never interpreted on the way in or out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    pub id: Option<Value>,
    pub token_id: Option<Value>,
    pub user_id: Option<Value>,
    pub ip: Option<Value>,
    pub operation: Option<Value>,
    pub result: Option<Value>,
    pub date: Option<Value>,
}

impl Activity {
    pub fn get(&self, field: ActivityField) -> Option<&Value> {
        match field {
            ActivityField::Id => self.id.as_ref(),
            ActivityField::TokenId => self.token_id.as_ref(),
            ActivityField::UserId => self.user_id.as_ref(),
            ActivityField::Ip => self.ip.as_ref(),
            ActivityField::Operation => self.operation.as_ref(),
            ActivityField::Result => self.result.as_ref(),
            ActivityField::Date => self.date.as_ref(),
        }
    }

    fn slot_mut(&mut self, field: ActivityField) -> &mut Option<Value> {
        match field {
            ActivityField::Id => &mut self.id,
            ActivityField::TokenId => &mut self.token_id,
            ActivityField::UserId => &mut self.user_id,
            ActivityField::Ip => &mut self.ip,
            ActivityField::Operation => &mut self.operation,
            ActivityField::Result => &mut self.result,
            ActivityField::Date => &mut self.date,
        }
    }

    /// Wire JSON → activity. Non-objects produce an empty activity.
    pub fn from_wire(response: &Value) -> Self {
        Self::collect(response, ActivityField::wire_name)
    }

    /// Activity → wire JSON. Absent fields are omitted.
    pub fn to_wire(&self) -> Value {
        self.emit(ActivityField::wire_name)
    }

    /// Internal attribute object → activity. Unknown keys are dropped.
    pub fn from_attributes(attributes: &Value) -> Self {
        Self::collect(attributes, ActivityField::attribute_name)
    }

    pub fn to_attributes(&self) -> Value {
        self.emit(ActivityField::attribute_name)
    }

    fn collect(source: &Value, key: fn(&ActivityField) -> &'static str) -> Self {
        let mut activity = Self::default();
        for field in ActivityField::ALL {
            *activity.slot_mut(field) = source.get(key(&field)).cloned();
        }
        activity
    }

    fn emit(&self, key: fn(&ActivityField) -> &'static str) -> Value {
        let mut map = Map::new();
        for field in ActivityField::ALL {
            if let Some(value) = self.get(field) {
                map.insert(key(&field).to_string(), value.clone());
            }
        }
        Value::Object(map)
    }

    pub fn token_id(&self) -> Option<&str> {
        self.token_id.as_ref().and_then(Value::as_str)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_ref().and_then(Value::as_str)
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_ref().and_then(Value::as_str)
    }

    pub fn operation(&self) -> Option<&str> {
        self.operation.as_ref().and_then(Value::as_str)
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_ref().and_then(Value::as_str)
    }

    /// Interprets `date` as epoch milliseconds, an RFC 3339 timestamp or a
    /// plain `YYYY-MM-DD` date.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        self.date.as_ref().and_then(parse_timestamp)
    }
}

impl Record for Activity {
    fn attribute(&self, name: &str) -> Option<&Value> {
        ActivityField::try_from(name)
            .ok()
            .and_then(|field| self.get(field))
    }
}

pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc())
            }),
        _ => None,
    }
}

/// The activity log resource: one definition for model and collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityResource;

impl Resource for ActivityResource {
    type Model = Activity;

    fn resource_root(&self) -> &str {
        ACTIVITIES_ROOT
    }

    fn parse(&self, response: &Value) -> Activity {
        Activity::from_wire(response)
    }

    fn serialize(&self, model: &Activity) -> Value {
        model.to_wire()
    }
}

impl CollectionResource for ActivityResource {
    fn entries(&self, response: &Value) -> Option<Value> {
        response.get("entries").cloned()
    }

    fn links(&self, response: &Value) -> Option<Value> {
        response.get("Link").cloned()
    }
}
