/// Serde helpers for lenient numeric deserialization.
///
/// The hosted data store is schemaless, so amounts occasionally arrive as
/// strings ("1200", "1,200.50"), nulls, or garbage. These helpers coerce
/// anything non-numeric to `0.0` instead of failing the whole record.
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawAmount {
    fn coerce(self) -> f64 {
        match self {
            RawAmount::Number(n) if n.is_finite() => n,
            RawAmount::Number(_) => 0.0,
            RawAmount::Text(s) => s.trim().replace(',', "").parse().unwrap_or(0.0),
            RawAmount::Other(_) => 0.0,
        }
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawAmount>::deserialize(deserializer)?
        .map(RawAmount::coerce)
        .unwrap_or(0.0))
}

pub fn lenient_f64_seq<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<RawAmount> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(RawAmount::coerce).collect())
}
