//! Text container transcoding.
//!
//! The `.txt` container is a Lua module whose sole value is a Base64
//! string of the compressed stream: `return "<base64>"`. This module
//! produces and extracts that string; the surrounding module syntax is
//! never interpreted beyond locating the string literal.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

use crate::error::{Result, SfMeshError};

/// Container layout selector for encode/write entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerMode {
    /// Lua text module carrying a Base64 payload (`.txt`).
    #[default]
    Text,
    /// Raw compressed bytes (`.sfmesh`).
    Binary,
}

/// Base64-encode a compressed stream (standard alphabet, no line
/// wrapping).
pub fn to_text(compressed: &[u8]) -> String {
    BASE64_STANDARD.encode(compressed)
}

/// Decode the Base64 payload of a text container.
///
/// Surrounding ASCII whitespace is tolerated; a wrong alphabet or bad
/// padding fails with [`InvalidEncoding`](SfMeshError::InvalidEncoding).
pub fn from_text(text: &str) -> Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(text.trim())
        .map_err(|e| SfMeshError::InvalidEncoding(format!("base64: {e}")))
}

/// Wrap a Base64 payload in the Lua module shell the host expects.
pub fn wrap_lua_module(payload: &str) -> String {
    format!("return \"{payload}\"")
}

/// Pull the first double-quoted string out of a Lua module source.
///
/// Base64 text contains neither escapes nor embedded quotes, so a plain
/// quote scan is sufficient.
pub fn extract_lua_string(source: &str) -> Result<&str> {
    let start = source
        .find('"')
        .ok_or_else(|| SfMeshError::InvalidEncoding("no string literal in module text".into()))?;
    let rest = &source[start + 1..];
    let end = rest.find('"').ok_or_else(|| {
        SfMeshError::InvalidEncoding("unterminated string literal in module text".into())
    })?;
    Ok(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_roundtrip() {
        let data = vec![0u8, 1, 2, 253, 254, 255];
        let text = to_text(&data);
        assert!(!text.contains('\n'));
        assert_eq!(from_text(&text).unwrap(), data);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let text = format!("  {}\n", to_text(b"abc"));
        assert_eq!(from_text(&text).unwrap(), b"abc");
    }

    #[test]
    fn test_bad_alphabet() {
        assert!(matches!(
            from_text("not*valid*base64!").unwrap_err(),
            SfMeshError::InvalidEncoding(_)
        ));
    }

    #[test]
    fn test_bad_padding() {
        assert!(matches!(
            from_text("QUJ").unwrap_err(),
            SfMeshError::InvalidEncoding(_)
        ));
    }

    #[test]
    fn test_lua_module_roundtrip() {
        let payload = to_text(b"\x01\x02\x03");
        let module = wrap_lua_module(&payload);
        assert_eq!(module, format!("return \"{payload}\""));
        assert_eq!(extract_lua_string(&module).unwrap(), payload);
    }

    #[test]
    fn test_extract_rejects_plain_text() {
        assert!(extract_lua_string("return nothing").is_err());
        assert!(extract_lua_string("return \"unterminated").is_err());
    }
}
