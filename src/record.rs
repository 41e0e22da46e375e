//! Job application records as delivered by the job service.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the job service. Never generated locally.
pub type RecordId = i64;

/// A single job application entry.
///
/// The job service has served both lowercase and capitalised field names, so
/// both are accepted on input. Output always uses the lowercase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(alias = "ID")]
    pub id: RecordId,
    #[serde(default, alias = "Company", deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, alias = "Title", deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, alias = "Status", deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, alias = "Date")]
    pub date: Option<String>,
    #[serde(
        default,
        alias = "EmailID",
        skip_serializing_if = "Option::is_none"
    )]
    pub email_id: Option<String>,
}

impl JobRecord {
    pub fn new(
        id: RecordId,
        company: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<String>,
        date: Option<&str>,
    ) -> Self {
        Self {
            id,
            company: company.into(),
            title: title.into(),
            status: status.into(),
            date: date.map(str::to_string),
            email_id: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a `GET jobs` body.
///
/// `null` is the absent-collection case and yields `Ok(None)`; anything that
/// is neither an array nor `null` is rejected.
pub fn parse_collection(body: &str) -> crate::Result<Option<Vec<JobRecord>>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Array(_) => Ok(Some(serde_json::from_value(value)?)),
        _ => Err(crate::Error::Load("unexpected response format".to_string())),
    }
}
