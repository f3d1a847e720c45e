//! # Conjunto de Headers de Respuesta
//! src/http/headers.rs
//!
//! Mapa nombre → valor que conserva el orden de inserción (para que la
//! salida sea estable) y compara nombres sin distinguir mayúsculas.
//!
//! ## Regla de precedencia
//!
//! Al combinar los headers por defecto del servidor con los de una
//! respuesta, **gana la respuesta**. Un header sobrescrito conserva la
//! posición que tenía en los defaults; los nuevos se agregan al final.
//!
//! ```
//! use minhttp::http::Headers;
//!
//! let defaults = Headers::from_pairs(&[("Content-Type", "text/html"), ("Connection", "close")]);
//! let own = Headers::from_pairs(&[("content-type", "text/plain")]);
//!
//! let merged = defaults.merged(&own);
//! assert_eq!(merged.get("Content-Type"), Some("text/plain"));
//! assert_eq!(merged.get("Connection"), Some("close"));
//! ```

/// Headers ordenados con nombres case-insensitive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Crea un conjunto vacío
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Construye el conjunto a partir de pares `(nombre, valor)`
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.set(name, value);
        }
        headers
    }

    /// Inserta o reemplaza un header.
    ///
    /// Si ya existe un header con el mismo nombre (sin importar mayúsculas),
    /// se reemplaza el nombre y el valor en su misma posición.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(idx) => self.entries[idx] = (name.to_string(), value.to_string()),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Obtiene el valor de un header
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Elimina un header y retorna su valor
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Itera sobre los headers en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Combina `self` (defaults) con `overrides` (headers de la respuesta).
    ///
    /// Los valores de `overrides` ganan ante colisión de nombre.
    pub fn merged(&self, overrides: &Headers) -> Headers {
        let mut result = self.clone();
        for (name, value) in overrides.iter() {
            result.set(name, value);
        }
        result
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Headers {
        Headers::from_pairs(&[
            ("Content-Type", "text/html"),
            ("Server", "MinHTTP"),
            ("Connection", "close"),
        ])
    }

    #[test]
    fn test_set_and_get_case_insensitive() {
        let mut headers = Headers::new();
        headers.set("Content-Type", "text/html");

        assert_eq!(headers.get("content-type"), Some("text/html"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html"));
        assert!(headers.contains("Content-type"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut headers = defaults();
        headers.set("server", "Other");

        let names: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Content-Type", "server", "Connection"]);
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_merge_response_wins() {
        let own = Headers::from_pairs(&[("Content-Type", "text/plain")]);
        let merged = defaults().merged(&own);

        assert_eq!(merged.get("Content-Type"), Some("text/plain"));
        assert_eq!(merged.get("Server"), Some("MinHTTP"));
        assert_eq!(merged.get("Connection"), Some("close"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_merge_collision_ignores_case() {
        let own = Headers::from_pairs(&[("CONNECTION", "keep-alive")]);
        let merged = defaults().merged(&own);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("connection"), Some("keep-alive"));
    }

    #[test]
    fn test_merge_appends_new_headers() {
        let own = Headers::from_pairs(&[("X-Custom", "1")]);
        let merged = defaults().merged(&own);

        let last = merged.iter().last().unwrap();
        assert_eq!(last, ("X-Custom", "1"));
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_merge_empty_keeps_defaults() {
        let merged = defaults().merged(&Headers::new());
        assert_eq!(merged, defaults());
    }

    #[test]
    fn test_remove() {
        let mut headers = defaults();
        assert_eq!(headers.remove("server"), Some("MinHTTP".to_string()));
        assert_eq!(headers.remove("server"), None);
        assert_eq!(headers.len(), 2);
    }
}
