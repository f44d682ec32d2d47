use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope of every GraphQL reply.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct UsernameVariables<'a> {
    pub username: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUserData {
    pub matched_user: Option<MatchedUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    #[serde(default)]
    pub username: Option<Scalar>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub submit_stats: Option<SubmitStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub real_name: Option<Scalar>,
    #[serde(default)]
    pub ranking: Option<Scalar>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Option<Vec<SubmissionCount>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionCount {
    #[serde(default)]
    pub difficulty: Option<Scalar>,
    #[serde(default)]
    pub count: Option<Scalar>,
}

/// A JSON value expected to be a number or a string. Anything else is kept
/// as-is so a single odd field never rejects the whole record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Other(serde_json::Value::Null) => Ok(()),
            Scalar::Other(value) => write!(f, "{}", value),
        }
    }
}
