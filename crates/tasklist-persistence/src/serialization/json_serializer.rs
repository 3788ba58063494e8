use crate::traits::Serializer;
use tasklist_core::{TaskError, TaskResult};
use tasklist_domain::Task;

/// JSON array codec for the task slot
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, tasks: &[Task]) -> TaskResult<Vec<u8>> {
        serde_json::to_vec_pretty(tasks).map_err(|e| TaskError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> TaskResult<Vec<Task>> {
        serde_json::from_slice(bytes).map_err(|e| TaskError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_array_with_missing_optional_fields() {
        let bytes = br#"[{"id":"1","text":"Seeded"}]"#;
        let tasks = JsonSerializer.deserialize(bytes).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].due_date, "");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_rejects_other_shapes() {
        let payloads: [&[u8]; 4] = [
            br#"{"tasks":[]}"#,
            br#"[{"title":"wrong field"}]"#,
            br#"[{"id":1,"text":"numeric id"}]"#,
            b"not json",
        ];
        for payload in payloads {
            let err = JsonSerializer.deserialize(payload).unwrap_err();
            assert!(matches!(err, TaskError::Serialization(_)));
        }
    }

    #[test]
    fn test_pretty_print() {
        let task = Task::new("1".to_string(), "Walk", "").unwrap();
        let bytes = JsonSerializer.serialize(&[task]).unwrap();
        let json_str = String::from_utf8(bytes).unwrap();

        assert!(json_str.contains("\"dueDate\""));
        assert!(json_str.contains('\n'));
    }
}
