// C ABI for embedding the analyser. Every entry point is panic-isolated with
// catch_unwind; results are JSON strings owned by Rust.
use crate::core::engine::CryptanalysisEngine;
use crate::error::CryptanalysisError;
use crate::request::AnalysisResponse;
use once_cell::sync::Lazy;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

static ENGINE: Lazy<CryptanalysisEngine> = Lazy::new(CryptanalysisEngine::new);

const PANIC_RESPONSE: &str = r#"{"error":"internal error"}"#;

fn into_c_string(json: String) -> *mut c_char {
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Analyses `text` and returns the JSON response (`{"candidates": [...]}` or
/// `{"error": "..."}`). Free the result with `cryptanalysis_free_string`.
///
/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn cryptanalysis_analyze(
    text: *const c_char,
    include_rare_letter: bool,
) -> *mut c_char {
    if text.is_null() {
        return into_c_string(AnalysisResponse::from(CryptanalysisError::TextRequired).to_json());
    }
    let c_str = unsafe { CStr::from_ptr(text) };
    let ciphertext = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => {
            let response = AnalysisResponse::Failure {
                error: "text is not valid UTF-8".to_string(),
            };
            return into_c_string(response.to_json());
        }
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let response = match ENGINE.analyze(ciphertext, include_rare_letter) {
            Ok(candidates) => AnalysisResponse::Success {
                candidates,
                chosen: None,
            },
            Err(error) => error.into(),
        };
        response.to_json()
    }));
    let json = result.unwrap_or_else(|_| {
        log::error!("panic in cryptanalysis_analyze");
        PANIC_RESPONSE.to_string()
    });
    into_c_string(json)
}

/// # Safety
/// `s` must be null or a pointer returned by this library, freed at most once.
#[no_mangle]
pub unsafe extern "C" fn cryptanalysis_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
