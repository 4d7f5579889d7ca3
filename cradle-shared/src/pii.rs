use serde::{Serialize, Deserialize, Serializer};
use std::fmt;

/// Wraps a guest's personal data so it never shows up in `Debug`/`Display` output.
///
/// Serialization still emits the real value: API responses need it, log lines don't.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_value() {
        let phone = Masked(String::from("(11) 99999-8888"));
        assert_eq!(format!("{:?}", phone), "********");
        assert_eq!(format!("{}", phone), "********");
    }

    #[test]
    fn test_serialize_keeps_value() {
        let phone = Masked(String::from("11999998888"));
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"11999998888\"");
        let back: Masked<String> = serde_json::from_str("\"11999998888\"").unwrap();
        assert_eq!(back.expose(), "11999998888");
    }
}
