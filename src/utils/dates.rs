//! Utilidades de fechas
//!
//! El frontend envía fechas en formatos variados (`datetime-local` sin
//! segundos, ISO con zona horaria, fechas simples). Estas funciones las
//! normalizan a `NaiveDateTime` / `NaiveDate` en hora local.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Formato de timestamps expuesto por la API de reset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parsear una fecha-hora en cualquiera de los formatos aceptados.
/// Una fecha sin hora se interpreta como medianoche.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parsear una fecha; acepta también fecha-hora y descarta la hora.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(d);
    }
    if value.len() > 10 {
        return parse_datetime(value).map(|dt| dt.date());
    }
    None
}

/// Formatear un timestamp para la API de reset
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// `serialize_with` para `Option<NaiveDateTime>` en formato `YYYY-MM-DDTHH:MM:SS`
pub fn serialize_timestamp_opt<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.serialize_str(&format_timestamp(ts)),
        None => serializer.serialize_none(),
    }
}

/// Fecha-hora opcional; cadena vacía o `null` → `None`, formato inválido → error.
pub fn deserialize_datetime_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_datetime(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("fecha inválida: '{}'", s))),
    }
}

/// Fecha-hora opcional tolerante: formato inválido → `None`.
pub fn deserialize_datetime_lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}

/// Fecha opcional; cadena vacía o `null` → `None`, formato inválido → error.
pub fn deserialize_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("fecha inválida: '{}'", s))),
    }
}

/// Campo de actualización anulable: ausente → `None` (no tocar),
/// `null`/vacío → `Some(None)` (limpiar), valor → `Some(Some(..))`.
/// Debe usarse junto con `#[serde(default)]`.
pub fn deserialize_datetime_patch<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDateTime>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_datetime_opt(deserializer).map(Some)
}

/// Como [`deserialize_datetime_patch`] pero un formato inválido limpia el campo.
pub fn deserialize_datetime_patch_lenient<'de, D>(
    deserializer: D,
) -> Result<Option<Option<NaiveDateTime>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_datetime_lenient(deserializer).map(Some)
}

/// Campo de fecha anulable para actualizaciones. Ver [`deserialize_datetime_patch`].
pub fn deserialize_date_patch<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_date_opt(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        assert_eq!(parse_datetime("2024-05-01T10:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01T10:30"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01 10:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01T10:30:00.000Z"), Some(expected));
        assert_eq!(
            parse_datetime("2024-05-01"),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("ayer"), None);
    }

    #[test]
    fn test_parse_date_accepts_datetime() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert_eq!(parse_date("2025-01-31"), expected);
        assert_eq!(parse_date("2025-01-31T23:59:59"), expected);
        assert_eq!(parse_date("31/01/2025"), None);
        assert_eq!(parse_date("no-es-una-fecha-valida"), None);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 9)
            .unwrap()
            .and_hms_milli_opt(7, 5, 3, 250)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2026-03-09T07:05:03");
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_datetime_patch")]
        fecha: Option<Option<NaiveDateTime>>,
    }

    #[test]
    fn test_patch_field_states() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.fecha, None);

        let cleared: Patch = serde_json::from_str(r#"{"fecha": ""}"#).unwrap();
        assert_eq!(cleared.fecha, Some(None));

        let null: Patch = serde_json::from_str(r#"{"fecha": null}"#).unwrap();
        assert_eq!(null.fecha, Some(None));

        let set: Patch = serde_json::from_str(r#"{"fecha": "2024-05-01T08:00"}"#).unwrap();
        assert!(matches!(set.fecha, Some(Some(_))));

        assert!(serde_json::from_str::<Patch>(r#"{"fecha": "mañana"}"#).is_err());
    }
}
