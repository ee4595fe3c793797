use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Type label used when the node did not report a type for an object.
pub const UNKNOWN_TYPE: &str = "unknown";

/// One entry of an owned-objects page, as returned by the full node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOwnedObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Summary of a single on-chain object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    pub object_id: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub version: Option<u64>,
    pub digest: Option<String>,
    #[serde(rename = "fullData")]
    pub payload: Value,
}

impl ObjectRecord {
    /// Builds a record from a raw page entry. Missing fields stay empty and a
    /// missing type is labeled [UNKNOWN_TYPE]; the entry is never dropped.
    pub fn from_raw(raw: &RawOwnedObject) -> Self {
        let data = raw.data.clone().unwrap_or(Value::Null);

        let type_tag = data
            .get("type")
            .or_else(|| data.get("objectType"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_TYPE)
            .to_string();

        let object_id = data
            .get("objectId")
            .and_then(Value::as_str)
            .map(str::to_string);

        // The node reports versions as decimal strings, older nodes as numbers.
        let version = data.get("version").and_then(|v| match v {
            Value::String(s) => s.parse::<u64>().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        });

        let digest = data
            .get("digest")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            object_id,
            type_tag,
            version,
            digest,
            payload: data,
        }
    }

    /// Field of the Move object content, e.g. `package` for an upgrade cap.
    pub fn content_field(&self, name: &str) -> Option<&Value> {
        self.payload.get("content")?.get("fields")?.get(name)
    }
}

fn serialize_decimal<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&v.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Named buckets of the admin inventory, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Cap,
    EnclaveConfig,
    Enclave,
    ProtocolConfig,
    AgentRegistry,
    UpgradeCap,
    Coin,
    Other,
}

/// Type-string fragments checked in order; the first match wins.
pub const BUCKET_PATTERNS: [(&str, Bucket); 7] = [
    ("::enclave::Cap<", Bucket::Cap),
    ("::enclave::EnclaveConfig<", Bucket::EnclaveConfig),
    ("::enclave::Enclave<", Bucket::Enclave),
    ("::sentinel::ProtocolConfig", Bucket::ProtocolConfig),
    ("::sentinel::AgentRegistry", Bucket::AgentRegistry),
    ("::package::UpgradeCap", Bucket::UpgradeCap),
    ("::coin::Coin<", Bucket::Coin),
];

impl Bucket {
    pub const ALL: [Bucket; 8] = [
        Bucket::Cap,
        Bucket::EnclaveConfig,
        Bucket::Enclave,
        Bucket::ProtocolConfig,
        Bucket::AgentRegistry,
        Bucket::UpgradeCap,
        Bucket::Coin,
        Bucket::Other,
    ];

    /// Human-readable name used in inventory summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Cap => "Cap Objects",
            Bucket::EnclaveConfig => "EnclaveConfig Objects",
            Bucket::Enclave => "Enclave Objects",
            Bucket::ProtocolConfig => "ProtocolConfig Objects",
            Bucket::AgentRegistry => "AgentRegistry Objects",
            Bucket::UpgradeCap => "UpgradeCaps",
            Bucket::Coin => "Coins",
            Bucket::Other => "Other Objects",
        }
    }

    pub fn for_type(type_tag: &str) -> Self {
        BUCKET_PATTERNS
            .iter()
            .find(|(pattern, _)| type_tag.contains(pattern))
            .map(|(_, bucket)| *bucket)
            .unwrap_or(Bucket::Other)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedObjects {
    pub cap_objects: Vec<ObjectRecord>,
    pub enclave_config_objects: Vec<ObjectRecord>,
    pub enclave_objects: Vec<ObjectRecord>,
    pub protocol_config_objects: Vec<ObjectRecord>,
    pub agent_registry_objects: Vec<ObjectRecord>,
    pub upgrade_caps: Vec<ObjectRecord>,
    pub coins: Vec<ObjectRecord>,
    pub other_objects: Vec<ObjectRecord>,
    pub all_objects: Vec<ObjectRecord>,
}

impl CategorizedObjects {
    pub fn bucket(&self, bucket: Bucket) -> &[ObjectRecord] {
        match bucket {
            Bucket::Cap => &self.cap_objects,
            Bucket::EnclaveConfig => &self.enclave_config_objects,
            Bucket::Enclave => &self.enclave_objects,
            Bucket::ProtocolConfig => &self.protocol_config_objects,
            Bucket::AgentRegistry => &self.agent_registry_objects,
            Bucket::UpgradeCap => &self.upgrade_caps,
            Bucket::Coin => &self.coins,
            Bucket::Other => &self.other_objects,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<ObjectRecord> {
        match bucket {
            Bucket::Cap => &mut self.cap_objects,
            Bucket::EnclaveConfig => &mut self.enclave_config_objects,
            Bucket::Enclave => &mut self.enclave_objects,
            Bucket::ProtocolConfig => &mut self.protocol_config_objects,
            Bucket::AgentRegistry => &mut self.agent_registry_objects,
            Bucket::UpgradeCap => &mut self.upgrade_caps,
            Bucket::Coin => &mut self.coins,
            Bucket::Other => &mut self.other_objects,
        }
    }
}

/// Partitions raw objects into buckets, preserving input order inside each one.
pub fn categorize_objects(objects: &[RawOwnedObject]) -> CategorizedObjects {
    let mut categorized = CategorizedObjects::default();

    for raw in objects {
        let record = ObjectRecord::from_raw(raw);
        let bucket = Bucket::for_type(&record.type_tag);
        categorized.bucket_mut(bucket).push(record.clone());
        categorized.all_objects.push(record);
    }

    categorized
}
