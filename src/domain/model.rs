use crate::domain::temperature::convert_all;
use serde::{Deserialize, Deserializer, Serialize};

/// City and state resolved from a CEP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    /// Display form, `NNNNN-NNN`.
    pub cep: String,
}

/// A temperature reading in the three scales served to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    #[serde(rename = "temp_c")]
    pub celsius: f64,
    #[serde(rename = "temp_f")]
    pub fahrenheit: f64,
    #[serde(rename = "temp_k")]
    pub kelvin: f64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        let (celsius, fahrenheit, kelvin) = convert_all(celsius);
        Self {
            celsius,
            fahrenheit,
            kelvin,
        }
    }
}

/// Raw response from `GET {viacep}/{cep}/json/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViaCepResponse {
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub ibge: String,
    #[serde(default)]
    pub gia: String,
    #[serde(default)]
    pub ddd: String,
    #[serde(default)]
    pub siafi: String,
    /// ViaCEP answers unknown codes with `"erro": true` (older deployments
    /// send the string `"true"`).
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub erro: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => text.trim().eq_ignore_ascii_case("true"),
        None => false,
    })
}

/// Raw response from WeatherAPI `current.json`; only the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiResponse {
    #[serde(default)]
    pub location: Option<WeatherApiLocation>,
    pub current: WeatherApiCurrent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiLocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiCurrent {
    pub temp_c: f64,
}
