use crate::domain::Dictionary;

const ERROR_CODE: &str = "error_code";
const ERROR_DESCRIPTION: &str = "error_description";

/// Builds the error object handed to scripting callbacks, e.g. when a validation fails.
pub fn error_object(code: &str, description: &str) -> Dictionary {
    let mut dictionary = Dictionary::with_capacity(2);
    dictionary.put(ERROR_CODE, code);
    dictionary.put(ERROR_DESCRIPTION, description);
    dictionary
}
