// C ABI surface. Every call is self-contained: there is no engine to
// initialize or tear down, only strings to free.
use crate::core::config::ReadingConfig;
use crate::core::engine::NumberReader;
use crate::error::{ReadingError, ReadingResult};
use serde::Serialize;
use std::ffi::{c_char, CStr, CString};
use std::panic::catch_unwind;
use tracing::error;

#[derive(Serialize)]
#[serde(untagged)]
enum Reply {
    Text { text: String },
    Error { error: String },
}

unsafe fn read_c_str<'a>(ptr: *const c_char, param: &str) -> ReadingResult<&'a str> {
    if ptr.is_null() {
        return Err(ReadingError::UnsupportedInputKind {
            kind: format!("null pointer for {}", param),
        });
    }
    CStr::from_ptr(ptr).to_str().map_err(|e| ReadingError::MalformedLiteral {
        literal: String::from_utf8_lossy(CStr::from_ptr(ptr).to_bytes()).into_owned(),
        reason: e.to_string(),
    })
}

fn into_c_json(result: std::thread::Result<ReadingResult<String>>) -> *mut c_char {
    let reply = match result {
        Ok(Ok(text)) => Reply::Text { text },
        Ok(Err(e)) => Reply::Error { error: e.to_string() },
        Err(_) => {
            error!("panic while reading number");
            Reply::Error {
                error: "internal panic".to_string(),
            }
        }
    };
    let json = serde_json::to_string(&reply)
        .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.to_string());
    // serde_json escapes control characters, so the JSON never holds a NUL.
    CString::new(json).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Reads a literal with the Vietnamese defaults. Returns a JSON string,
/// `{"text": ...}` or `{"error": ...}`, to be freed with `doc_so_free_string`.
///
/// # Safety
/// `literal` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn doc_so_read_number(literal: *const c_char) -> *mut c_char {
    let result = catch_unwind(|| {
        let literal = unsafe { read_c_str(literal, "literal")? };
        NumberReader::vietnamese().read(literal)
    });
    into_c_json(result)
}

/// Like `doc_so_read_number`, with a JSON config overriding the defaults.
///
/// # Safety
/// Both pointers must be null or point to NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn doc_so_read_number_with_config(
    literal: *const c_char,
    config_json: *const c_char,
) -> *mut c_char {
    let result = catch_unwind(|| {
        let literal = unsafe { read_c_str(literal, "literal")? };
        let config_json = unsafe { read_c_str(config_json, "config")? };
        let config = ReadingConfig::from_json_str(config_json)?;
        NumberReader::new(config)?.read(literal)
    });
    into_c_json(result)
}

/// # Safety
/// `s` must be null or a pointer returned by this library, not yet freed.
#[no_mangle]
pub unsafe extern "C" fn doc_so_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
