//! Response Assertions
//!
//! Each check returns a `TesterError` (`UnexpectedStatus` for status checks,
//! `Assertion` otherwise) instead of panicking so the runner can record the
//! failure and move on to the next scenario.

use api::ApiResponse;
use api::ResponseBody;
use shared::{PetId, PetList};

use crate::error::{TesterError, TesterResult};

const SNIPPET_LEN: usize = 160;

/// Short, single-line rendering of a body for failure messages
pub fn body_snippet(response: &ApiResponse) -> String {
    let raw = match &response.body {
        ResponseBody::Json(value) => value.to_string(),
        ResponseBody::Text(text) => text.clone(),
    };
    let flat = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > SNIPPET_LEN {
        let cut: String = flat.chars().take(SNIPPET_LEN).collect();
        format!("{cut}…")
    } else {
        flat
    }
}

pub fn expect_status(response: &ApiResponse, expected: u16) -> TesterResult<()> {
    if response.status == expected {
        Ok(())
    } else {
        Err(TesterError::UnexpectedStatus {
            expected,
            actual: response.status,
            body: body_snippet(response),
        })
    }
}

pub fn expect_field(response: &ApiResponse, field: &str) -> TesterResult<()> {
    if response.has_field(field) {
        Ok(())
    } else {
        Err(TesterError::assertion(format!(
            "expected '{}' in body: {}",
            field,
            body_snippet(response)
        )))
    }
}

pub fn expect_no_field(response: &ApiResponse, field: &str) -> TesterResult<()> {
    if response.has_field(field) {
        Err(TesterError::assertion(format!(
            "'{}' must not be in body: {}",
            field,
            body_snippet(response)
        )))
    } else {
        Ok(())
    }
}

/// The body echoes back the submitted `name`
pub fn expect_name(response: &ApiResponse, name: &str) -> TesterResult<()> {
    match response.str_field("name") {
        Some(actual) if actual == name => Ok(()),
        Some(actual) => Err(TesterError::assertion(format!(
            "expected name '{name}', got '{actual}'"
        ))),
        None => Err(TesterError::assertion(format!(
            "expected name '{}' in body: {}",
            name,
            body_snippet(response)
        ))),
    }
}

pub fn expect_non_empty(pets: &PetList) -> TesterResult<()> {
    if pets.is_empty() {
        Err(TesterError::assertion("expected a non-empty pet listing"))
    } else {
        Ok(())
    }
}

pub fn expect_absent(pets: &PetList, id: &PetId) -> TesterResult<()> {
    if pets.contains(id) {
        Err(TesterError::assertion(format!(
            "pet {id} is still listed after deletion"
        )))
    } else {
        Ok(())
    }
}
