use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body of a successful `alerts/active` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertsResponse {
    /// Missing and null both read as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub features: Vec<Feature>,
}

impl AlertsResponse {
    /// Summary line shown above the alert list, e.g. "Alerts: 3"
    pub fn summary(&self) -> String {
        format!("{}: {}", self.title, self.features.len())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One alert record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn headline(&self) -> &str {
        self.properties.headline.as_deref().unwrap_or_default()
    }

    #[cfg(test)]
    pub fn with_headline(headline: impl Into<String>) -> Self {
        Self {
            properties: FeatureProperties {
                headline: Some(headline.into()),
                extra: HashMap::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureProperties {
    /// The API sends null for some alerts
    #[serde(default)]
    pub headline: Option<String>,
    /// Everything else (event, severity, areaDesc, ...). Kept, never read.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_shape() {
        let body = r#"{
            "@context": ["https://geojson.org/geojson-ld/geojson-context.jsonld"],
            "type": "FeatureCollection",
            "title": "Current watches, warnings, and advisories for Texas",
            "updated": "2026-10-16T12:00:00+00:00",
            "features": [
                {
                    "id": "urn:oid:1",
                    "type": "Feature",
                    "properties": {
                        "event": "Heat Advisory",
                        "headline": "Heat Advisory issued October 16 by NWS Austin/San Antonio TX",
                        "severity": "Moderate"
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "event": "Special Weather Statement", "headline": null }
                }
            ]
        }"#;

        let parsed: AlertsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.features.len(), 2);
        assert_eq!(
            parsed.features[0].headline(),
            "Heat Advisory issued October 16 by NWS Austin/San Antonio TX"
        );
        assert_eq!(
            parsed.features[0].properties.extra.get("severity"),
            Some(&Value::String("Moderate".into()))
        );
        assert_eq!(parsed.features[1].headline(), "");
        assert_eq!(
            parsed.summary(),
            "Current watches, warnings, and advisories for Texas: 2"
        );
    }

    #[test]
    fn test_null_or_missing_title() {
        let body = r#"{"title": null, "features": [{"properties": {"headline": "Fog"}}]}"#;
        let parsed: AlertsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.summary(), ": 1");

        let parsed: AlertsResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
        assert_eq!(parsed.title, "");
    }

    #[test]
    fn test_missing_features_is_an_error() {
        let result = serde_json::from_str::<AlertsResponse>(r#"{"title": "Alerts"}"#);
        assert!(result.is_err());
    }
}
