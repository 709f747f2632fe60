/// F = C * 1.8 + 32
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// K = C + 273 (rounded offset, not 273.15)
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.0
}

/// Returns `(celsius, fahrenheit, kelvin)`.
pub fn convert_all(celsius: f64) -> (f64, f64, f64) {
    (
        celsius,
        celsius_to_fahrenheit(celsius),
        celsius_to_kelvin(celsius),
    )
}
