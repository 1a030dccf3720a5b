//! FFI bindings for the planner generator
//!
//! This module provides C-compatible functions for calling the planner from
//! other languages. All functions use C strings (null-terminated) and return
//! allocated memory that must be freed by the caller using `planner_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::config::PlannerConfig;
use crate::planner::{
    generate_planner_json, list_templates_json, validate_request_json, PlannerGenerator,
};
use crate::types::PlannerRequest;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ============================================================================
// Stateless API
// ============================================================================

/// Generate a planner from request JSON and return response JSON.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `planner_free_string`.
/// - Returns NULL on error; call `planner_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn planner_generate(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match generate_planner_json(json_str) {
        Ok(result) => string_to_cstr(&result),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Validate request JSON and return a JSON validation report.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `planner_free_string`.
/// - Returns NULL if the request cannot be parsed at all.
#[no_mangle]
pub unsafe extern "C" fn planner_validate(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match validate_request_json(json_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Return the template catalog as a JSON array.
///
/// # Safety
/// - Returns a newly allocated string that must be freed with `planner_free_string`.
#[no_mangle]
pub unsafe extern "C" fn planner_templates() -> *mut c_char {
    clear_last_error();

    match list_templates_json() {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Configured Generator API
// ============================================================================

/// Opaque handle to a configured PlannerGenerator
pub struct PlannerGeneratorHandle {
    generator: PlannerGenerator,
}

/// Create a generator. `config_json` may be NULL for the default configuration.
///
/// # Safety
/// - `config_json` must be NULL or a valid null-terminated C string.
/// - Must be freed with `planner_generator_free`.
/// - Returns NULL on error.
#[no_mangle]
pub unsafe extern "C" fn planner_generator_new(
    config_json: *const c_char,
) -> *mut PlannerGeneratorHandle {
    clear_last_error();

    let generator = if config_json.is_null() {
        PlannerGenerator::new()
    } else {
        let config = match cstr_to_string(config_json) {
            Some(s) => PlannerConfig::from_json(&s),
            None => {
                set_last_error("Invalid config string pointer");
                return ptr::null_mut();
            }
        };

        match config.and_then(PlannerGenerator::with_config) {
            Ok(generator) => generator,
            Err(e) => {
                set_last_error(&e.to_string());
                return ptr::null_mut();
            }
        }
    };

    Box::into_raw(Box::new(PlannerGeneratorHandle { generator }))
}

/// Free a generator.
///
/// # Safety
/// - `generator` must be a valid pointer returned by `planner_generator_new`, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn planner_generator_free(generator: *mut PlannerGeneratorHandle) {
    if !generator.is_null() {
        drop(Box::from_raw(generator));
    }
}

/// Generate a planner with a configured generator.
///
/// # Safety
/// - `generator` must be a valid pointer returned by `planner_generator_new`.
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `planner_free_string`.
/// - Returns NULL on error; call `planner_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn planner_generator_generate(
    generator: *const PlannerGeneratorHandle,
    json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    if generator.is_null() {
        set_last_error("Null generator pointer");
        return ptr::null_mut();
    }

    let handle = &*generator;

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    let request: PlannerRequest = match serde_json::from_str(&json_str) {
        Ok(request) => request,
        Err(e) => {
            set_last_error(&format!("Invalid JSON: {}", e));
            return ptr::null_mut();
        }
    };

    match handle.generator.generate_json(&request) {
        Ok(result) => string_to_cstr(&result),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by planner functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a planner function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn planner_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next planner function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn planner_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn planner_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
