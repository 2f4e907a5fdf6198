//! Assembler Service Wire Models
//!
//! `/process-files/` のレスポンス形式

use serde::{Deserialize, Serialize};

use crate::domain::entities::result_set::AssemblerOutput;

/// 成功レスポンス
///
/// すべて省略可能。未知のフィールドは無視する
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessFilesResponse {
    #[serde(default)]
    pub output_file: Option<String>,
    #[serde(default)]
    pub record_file: Option<String>,
    #[serde(default)]
    pub intermediate_file: Option<String>,
    #[serde(default)]
    pub symtab_file: Option<String>,
}

impl From<ProcessFilesResponse> for AssemblerOutput {
    fn from(response: ProcessFilesResponse) -> Self {
        AssemblerOutput {
            output_file: response.output_file,
            record_file: response.record_file,
            intermediate_file: response.intermediate_file,
            symtab_file: response.symtab_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "output_file": "H^COPY  ^001000^00107A",
            "record_file": "E^001000",
            "intermediate_file": "1000 COPY START 1000",
            "symtab_file": "FIRST 1000"
        }"#;

        let response: ProcessFilesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.output_file.as_deref(), Some("H^COPY  ^001000^00107A"));
        assert_eq!(response.symtab_file.as_deref(), Some("FIRST 1000"));
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let json = r#"{"output_file": "OUT", "record_file": null, "detail": "ignored"}"#;

        let response: ProcessFilesResponse = serde_json::from_str(json).unwrap();
        let output: AssemblerOutput = response.into();

        assert_eq!(output.output_file.as_deref(), Some("OUT"));
        assert!(output.record_file.is_none());
        assert!(output.intermediate_file.is_none());
        assert!(output.symtab_file.is_none());
    }
}
