//! Refresh command envelope.
//!
//! Clients send `{"type":"message","data":{"action":"refresh","image":"<path>"}}`.
//! Anything that does not match that shape is ignored without a reply.

use std::path::PathBuf;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshCommand {
    pub image: PathBuf,
}

impl RefreshCommand {
    /// Extracts a refresh request. `None` means the message should be ignored.
    pub fn from_value(message: &Value) -> Option<Self> {
        let data = message.get("data")?.as_object()?;
        if data.get("action")?.as_str()? != "refresh" {
            return None;
        }
        let image = data.get("image")?.as_str()?;
        if image.is_empty() {
            return None;
        }
        Some(Self {
            image: PathBuf::from(image),
        })
    }

    pub fn parse(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Value>(bytes)
            .ok()
            .as_ref()
            .and_then(Self::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_refresh_message() {
        let cmd = RefreshCommand::parse(
            br#"{"type":"message","data":{"action":"refresh","image":"/tmp/a.png"}}"#,
        );
        assert_eq!(cmd, Some(RefreshCommand { image: PathBuf::from("/tmp/a.png") }));
    }

    #[test]
    fn type_field_is_not_required() {
        let cmd = RefreshCommand::parse(br#"{"data":{"action":"refresh","image":"x.png"}}"#);
        assert!(cmd.is_some());
    }

    #[test]
    fn ignores_other_shapes() {
        let ignored: &[&[u8]] = &[
            br#"{"type":"message","data":{"action":"clear","image":"/tmp/a.png"}}"#,
            br#"{"type":"message","data":{"action":"refresh"}}"#,
            br#"{"type":"message","data":{"action":"refresh","image":""}}"#,
            br#"{"type":"message","data":{"action":"refresh","image":42}}"#,
            br#"{"type":"message","data":{"action":["refresh"],"image":"a.png"}}"#,
            br#"{"type":"message","data":"refresh"}"#,
            br#"{"type":"message"}"#,
            br#"["refresh"]"#,
            br#"null"#,
            b"not json at all",
            b"",
        ];
        for raw in ignored {
            assert_eq!(RefreshCommand::parse(raw), None, "{}", String::from_utf8_lossy(raw));
        }
    }
}
