//! One row of the cleaned sales table.

use serde::{de, Deserialize, Deserializer, Serialize};

/// A single title/platform release with its sales figures (millions of units).
///
/// `global_sales` is the dataset's own total and is never recomputed from the
/// regional columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Plataforma")]
    pub platform: String,
    #[serde(rename = "Ano", deserialize_with = "deserialize_year", default)]
    pub year: Option<u16>,
    #[serde(rename = "Genero")]
    pub genre: String,
    #[serde(rename = "Editoras_preenchidas")]
    pub publisher: String,
    #[serde(rename = "Vendas_America_Norte")]
    pub na_sales: f64,
    #[serde(rename = "Vendas_Uniao_Europeia")]
    pub eu_sales: f64,
    #[serde(rename = "Vendas_Japao")]
    pub jp_sales: f64,
    #[serde(rename = "Vendas_Outros", default)]
    pub other_sales: f64,
    #[serde(rename = "Vendas_Globais")]
    pub global_sales: f64,
}

/// Years arrive as `2006`, `2006.0` (float export) or blank/`NaN` when unknown.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    parse_year(&raw).map_err(de::Error::custom)
}

pub(crate) fn parse_year(raw: &str) -> Result<Option<u16>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("invalid year `{trimmed}`"))?;

    if value.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&value) {
        return Err(format!("invalid year `{trimmed}`"));
    }

    Ok(Some(value as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_accepts_integer_and_float_exports() {
        assert_eq!(parse_year("2006"), Ok(Some(2006)));
        assert_eq!(parse_year("2006.0"), Ok(Some(2006)));
        assert_eq!(parse_year(" 1985 "), Ok(Some(1985)));
    }

    #[test]
    fn year_blank_or_nan_is_missing() {
        assert_eq!(parse_year(""), Ok(None));
        assert_eq!(parse_year("NaN"), Ok(None));
        assert_eq!(parse_year("nan"), Ok(None));
    }

    #[test]
    fn year_rejects_garbage() {
        assert!(parse_year("next year").is_err());
        assert!(parse_year("2006.5").is_err());
        assert!(parse_year("-3").is_err());
    }
}
