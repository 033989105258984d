use serde::{Deserialize, Deserializer, Serialize};

/// Common and official names as returned by the countries endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A single catalog entry. Unknown fields in the payload are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub cca3: String,
    pub name: CountryName,
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Flags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continents: Option<Vec<String>>,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn flag_url(&self) -> Option<&str> {
        self.flags.as_ref().and_then(|f| f.png.as_deref())
    }

    /// Continents joined with ", ", or "N/A" when the field was absent.
    /// A present-but-empty list yields an empty string.
    pub fn continents_label(&self) -> String {
        match &self.continents {
            Some(list) => list.join(", "),
            None => "N/A".to_string(),
        }
    }
}

/// Thumbnail descriptor attached to a page summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Thumbnail {
    /// `(width, height)` when the payload carried both.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}

/// Encyclopedia summary for one page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Summary {
    pub title: String,
    pub extract: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_thumbnail",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<Thumbnail>,
}

/// A thumbnail that doesn't decode (no `source`, wrong types) is treated as
/// absent instead of failing the whole summary.
fn lenient_thumbnail<'de, D>(deserializer: D) -> Result<Option<Thumbnail>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

/// Formats a population with comma thousands separators (e.g. `67,391,582`).
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_deserializes_reduced_field_set() {
        let json = r#"{
            "name": {"common": "Peru", "official": "Republic of Peru", "nativeName": {}},
            "cca3": "PER",
            "population": 32971846,
            "flags": {"png": "https://flagcdn.com/w320/pe.png", "svg": "https://flagcdn.com/pe.svg"},
            "continents": ["South America"]
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.common_name(), "Peru");
        assert_eq!(country.name.official, "Republic of Peru");
        assert_eq!(country.flag_url(), Some("https://flagcdn.com/w320/pe.png"));
        assert_eq!(country.continents_label(), "South America");
    }

    #[test]
    fn test_country_optional_fields_missing() {
        let json = r#"{"name": {"common": "Nowhere", "official": "Nowhere"}, "cca3": "NWH", "population": 0}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert!(country.flags.is_none());
        assert_eq!(country.flag_url(), None);
        assert_eq!(country.continents_label(), "N/A");
    }

    #[test]
    fn test_continents_label_empty_list() {
        let json = r#"{"name": {"common": "X", "official": "X"}, "cca3": "XXX", "population": 1, "continents": []}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.continents_label(), "");
    }

    #[test]
    fn test_country_rejects_negative_population() {
        let json = r#"{"name": {"common": "X", "official": "X"}, "cca3": "XXX", "population": -5}"#;
        assert!(serde_json::from_str::<Country>(json).is_err());
    }

    #[test]
    fn test_summary_with_thumbnail() {
        let json = r#"{
            "type": "standard",
            "title": "France",
            "description": "Country in Western Europe",
            "extract": "France is a country.",
            "thumbnail": {"source": "https://upload.wikimedia.org/france.jpg", "width": 320, "height": 213}
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.title, "France");
        assert_eq!(summary.description.as_deref(), Some("Country in Western Europe"));
        let thumb = summary.thumbnail.unwrap();
        assert_eq!(thumb.dimensions(), Some((320, 213)));
    }

    #[test]
    fn test_summary_thumbnail_source_only() {
        let json = r#"{
            "title": "France",
            "extract": "France is a country.",
            "thumbnail": {"source": "https://upload.wikimedia.org/france.jpg"}
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        let thumb = summary.thumbnail.unwrap();
        assert_eq!(thumb.source, "https://upload.wikimedia.org/france.jpg");
        assert_eq!(thumb.dimensions(), None);
    }

    #[test]
    fn test_summary_thumbnail_one_dimension() {
        let json = r#"{
            "title": "France",
            "extract": "France is a country.",
            "thumbnail": {"source": "https://upload.wikimedia.org/france.jpg", "width": 320}
        }"#;
        let thumb = serde_json::from_str::<Summary>(json).unwrap().thumbnail.unwrap();
        assert_eq!(thumb.width, Some(320));
        assert_eq!(thumb.dimensions(), None);
    }

    #[test]
    fn test_summary_thumbnail_without_source_is_dropped() {
        let json = r#"{
            "title": "France",
            "extract": "France is a country.",
            "thumbnail": {"width": 320, "height": 213}
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.title, "France");
        assert!(summary.thumbnail.is_none());
    }

    #[test]
    fn test_summary_null_thumbnail() {
        let json = r#"{"title": "France", "extract": "Text.", "thumbnail": null}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert!(summary.thumbnail.is_none());
    }

    #[test]
    fn test_summary_missing_extract_is_error() {
        let json = r#"{"title": "Not found."}"#;
        assert!(serde_json::from_str::<Summary>(json).is_err());
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(67391582), "67,391,582");
        assert_eq!(format_population(1_402_112_000), "1,402,112,000");
    }
}
